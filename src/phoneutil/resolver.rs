// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use super::errors::ResolveError;
use crate::{config::Config, i18n::RegionCode};

/// Produces the ordered list of regions a number is tried against.
#[derive(Debug, Clone, Default)]
pub struct RegionResolver {
    /// Configured defaults, already reduced to the one source that applies.
    defaults: Vec<RegionCode>,
    fallback: Option<RegionCode>,
}

impl RegionResolver {
    pub fn new(config: Config) -> Self {
        let Config {
            default_region_codes,
            default_region_code,
            locale_region_code,
        } = config;

        let fallback = default_region_code.or(locale_region_code);
        let defaults = if default_region_codes.is_empty() {
            fallback.iter().cloned().collect()
        } else {
            default_region_codes
        };
        Self { defaults, fallback }
    }

    /// The single default region: the configured one, else the host
    /// locale's.
    pub fn fallback_region(&self) -> Option<&RegionCode> {
        self.fallback.as_ref()
    }

    /// Caller `hints` first, then the configured defaults. Entries are
    /// normalized to upper case, blank ones dropped and repeats removed,
    /// keeping the first occurrence.
    pub fn resolve<I, S>(&self, hints: I) -> Result<Vec<RegionCode>, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates: Vec<RegionCode> = Vec::new();
        for region in hints
            .into_iter()
            .filter_map(RegionCode::new)
            .chain(self.defaults.iter().cloned())
        {
            if !candidates.contains(&region) {
                candidates.push(region);
            }
        }

        if candidates.is_empty() {
            return Err(ResolveError::NoRegionAvailable);
        }
        trace!("Candidate regions: {:?}", candidates);
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_HINTS: [&str; 0] = [];

    #[test]
    fn hints_come_before_defaults() {
        let resolver = RegionResolver::new(Config::new().with_default_region_codes(["TZ", "KE"]));
        assert_eq!(resolver.resolve(["us", "ug"]).unwrap(), ["US", "UG", "TZ", "KE"]);
    }

    #[test]
    fn duplicates_are_removed_case_insensitively() {
        let resolver = RegionResolver::new(Config::new().with_default_region_code("TZ"));
        assert_eq!(resolver.resolve(["tz", "US", "us", " Tz "]).unwrap(), ["TZ", "US"]);
    }

    #[test]
    fn hint_repeating_a_default_keeps_hint_position() {
        let resolver = RegionResolver::new(Config::new().with_default_region_codes(["TZ", "KE"]));
        assert_eq!(resolver.resolve(["ke", "us"]).unwrap(), ["KE", "US", "TZ"]);
    }

    #[test]
    fn list_shadows_single_default_and_locale() {
        let config = Config::new()
            .with_default_region_codes(["KE"])
            .with_default_region_code("TZ")
            .with_locale_region_code("US");
        let resolver = RegionResolver::new(config);
        assert_eq!(resolver.resolve(NO_HINTS).unwrap(), ["KE"]);
        assert_eq!(resolver.fallback_region().unwrap(), "TZ");
    }

    #[test]
    fn single_default_then_locale() {
        let config = Config::new()
            .with_default_region_code("TZ")
            .with_locale_region_code("US");
        assert_eq!(RegionResolver::new(config).resolve(NO_HINTS).unwrap(), ["TZ"]);

        let config = Config::new().with_locale_region_code("US");
        let resolver = RegionResolver::new(config);
        assert_eq!(resolver.resolve(NO_HINTS).unwrap(), ["US"]);
        assert_eq!(resolver.fallback_region().unwrap(), "US");
    }

    #[test]
    fn exhausted_sources() {
        let resolver = RegionResolver::new(Config::new());
        assert_eq!(resolver.resolve(NO_HINTS), Err(ResolveError::NoRegionAvailable));
        assert_eq!(resolver.resolve(["", "  "]), Err(ResolveError::NoRegionAvailable));
        assert_eq!(resolver.resolve(["ke"]).unwrap(), ["KE"]);
        assert!(resolver.fallback_region().is_none());
    }
}
