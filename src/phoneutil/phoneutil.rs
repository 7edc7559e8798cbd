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

use std::borrow::Cow;

use log::{debug, trace, warn};

use super::{
    descriptor::{Formats, PhoneDescriptor, TypeFlags},
    enums::PhoneNumberFormat,
    errors::ResolveError,
    helper_functions::contained,
    resolver::RegionResolver,
};
use crate::{
    config::Config, engine::LibPhoneNumberEngine, i18n::RegionCode, interfaces::NumberEngine,
};

/// Best-effort phone number parsing across several candidate regions.
///
/// Owns one [`NumberEngine`] and the region defaults it was configured
/// with. Every operation is total: failures show up as `None` (or as the
/// input echoed back by [`PhoneUtil::to_e164`]), never as a panic or error.
pub struct PhoneUtil<E = LibPhoneNumberEngine> {
    engine: E,
    resolver: RegionResolver,
}

impl PhoneUtil<LibPhoneNumberEngine> {
    /// `phonenumber`-backed instance configured from the process
    /// environment, see [`Config::from_env`].
    pub fn from_env() -> Self {
        Self::new(LibPhoneNumberEngine::new(), Config::from_env())
    }
}

impl Default for PhoneUtil<LibPhoneNumberEngine> {
    fn default() -> Self {
        Self::from_env()
    }
}

impl<E: NumberEngine> PhoneUtil<E> {
    pub fn new(engine: E, config: Config) -> Self {
        Self {
            engine,
            resolver: RegionResolver::new(config),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Regions [`PhoneUtil::parse_phone_number`] would try for `hints`, in
    /// order.
    pub fn resolve_regions<I, S>(&self, hints: I) -> Result<Vec<RegionCode>, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolver.resolve(hints)
    }

    /// Parses `raw` against each candidate region (the `hints` first, then
    /// the configured defaults) and returns the descriptor of the first
    /// region under which the number is valid.
    ///
    /// Returns `None` if no region yields a valid number, even when some
    /// of them parse it as merely possible.
    ///
    /// ```no_run
    /// use rphone::{Config, LibPhoneNumberEngine, PhoneUtil};
    ///
    /// let util = PhoneUtil::new(LibPhoneNumberEngine::new(), Config::new());
    /// let phone = util.parse_phone_number("0715333777", ["US", "TZ"]).unwrap();
    /// assert_eq!(phone.country_code(), "TZ");
    /// assert_eq!(phone.e164(), Some("+255715333777"));
    /// ```
    pub fn parse_phone_number<I, S>(&self, raw: &str, hints: I) -> Option<PhoneDescriptor>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regions = match self.resolver.resolve(hints) {
            Ok(regions) => regions,
            Err(err) => {
                warn!("Can not parse {:?}: {}", raw, err);
                return None;
            }
        };

        regions
            .iter()
            .filter_map(|region| self.parse_for_region(raw, region))
            .find(|descriptor| descriptor.is_valid())
    }

    /// Descriptor of `raw` parsed with `region` as default, `None` if the
    /// engine can not parse it.
    fn parse_for_region(&self, raw: &str, region: &RegionCode) -> Option<PhoneDescriptor> {
        trace!("Trying {:?} as a number of region {}", raw, region);
        let number = match self.engine.parse(raw, region) {
            Ok(number) => number,
            Err(err) => {
                debug!("Skipping region {} for {:?}: {}", region, raw, err);
                return None;
            }
        };

        let descriptor = PhoneDescriptor::build(&self.engine, raw, region, &number);
        if !descriptor.is_valid() {
            debug!("{:?} is not a valid number for region {}", raw, region);
        }
        Some(descriptor)
    }

    /// Formats `raw` as E.164 without the leading `+`, e.g.
    /// `"0714969698"` with region `TZ` gives `"255714969698"`.
    ///
    /// This is a formatting helper, not a validator: anything that does not
    /// parse to a valid number is returned unchanged, and `None` stays
    /// `None`.
    pub fn to_e164<'a>(&self, raw: Option<&'a str>, hint: Option<&str>) -> Option<Cow<'a, str>> {
        raw.map(|raw| self.to_e164_str(raw, hint))
    }

    /// [`PhoneUtil::to_e164`] for input that is always present.
    pub fn to_e164_str<'a>(&self, raw: &'a str, hint: Option<&str>) -> Cow<'a, str> {
        self.parse_phone_number(raw, hint)
            .and_then(|descriptor| {
                descriptor
                    .e164_no_plus()
                    .filter(|digits| !digits.is_empty())
                    .map(str::to_owned)
            })
            .map_or(Cow::Borrowed(raw), Cow::Owned)
    }

    /// Parses `raw` for a single region: `region` if given, else the
    /// configured default region (or the host locale's).
    pub fn parse_raw_phone_number(&self, raw: &str, region: Option<&str>) -> Option<E::Number> {
        let region = match region {
            Some(region) => RegionCode::new(region)?,
            None => self.resolver.fallback_region()?.clone(),
        };
        contained("parsed number", self.engine.parse(raw, &region))
    }

    /// Renders `number` in one format, `None` if the engine fails to.
    pub fn format_phone_number(
        &self,
        number: &E::Number,
        format: PhoneNumberFormat,
    ) -> Option<String> {
        contained(format.key(), self.engine.render(number, format))
    }

    /// Renders `number` in every supported format.
    pub fn apply_formats(&self, number: &E::Number) -> Formats {
        Formats::apply(&self.engine, number)
    }

    /// Type classification of `number`.
    pub fn check_types(&self, number: &E::Number) -> TypeFlags {
        TypeFlags::check(&self.engine, number)
    }
}
