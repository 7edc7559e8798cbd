//! Default region configuration.
//!
//! Values are read once, when a [`Config`] is built, and never re-read by
//! the parser.

use crate::i18n::{RegionCode, locale};

/// Comma separated list of default region codes.
pub const DEFAULT_COUNTRY_CODES: &str = "DEFAULT_COUNTRY_CODES";
/// Single default region code, used when no list is configured.
pub const DEFAULT_COUNTRY_CODE: &str = "DEFAULT_COUNTRY_CODE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Regions tried after the caller's hints.
    pub default_region_codes: Vec<RegionCode>,
    /// Tried when `default_region_codes` is empty.
    pub default_region_code: Option<RegionCode>,
    /// Region of the host locale, the last resort.
    pub locale_region_code: Option<RegionCode>,
}

impl Config {
    /// Empty configuration: only explicit hints will be tried.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads [`DEFAULT_COUNTRY_CODES`], [`DEFAULT_COUNTRY_CODE`] and the
    /// locale variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`] but with values taken from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_region_codes = lookup(DEFAULT_COUNTRY_CODES)
            .map(|value| parse_region_list(&value))
            .unwrap_or_default();
        let default_region_code = lookup(DEFAULT_COUNTRY_CODE).and_then(RegionCode::new);
        let locale_region_code = locale::host_region(&lookup);

        Self {
            default_region_codes,
            default_region_code,
            locale_region_code,
        }
    }

    pub fn with_default_region_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.default_region_codes = codes.into_iter().filter_map(RegionCode::new).collect();
        self
    }

    pub fn with_default_region_code(mut self, code: impl AsRef<str>) -> Self {
        self.default_region_code = RegionCode::new(code);
        self
    }

    pub fn with_locale_region_code(mut self, code: impl AsRef<str>) -> Self {
        self.locale_region_code = RegionCode::new(code);
        self
    }
}

/// Splits a comma separated list, dropping blank entries.
fn parse_region_list(value: &str) -> Vec<RegionCode> {
    value.split(',').filter_map(RegionCode::new).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(env: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |name: &str| env.get(name).map(|value| value.to_string())
    }

    #[test]
    fn reads_all_sources() {
        let config = Config::from_lookup(lookup_in(HashMap::from([
            (DEFAULT_COUNTRY_CODES, "tz, ke,,UG "),
            (DEFAULT_COUNTRY_CODE, "tz"),
            ("LANG", "en_US.UTF-8"),
        ])));

        assert_eq!(config.default_region_codes, ["TZ", "KE", "UG"]);
        assert_eq!(config.default_region_code.unwrap(), "TZ");
        assert_eq!(config.locale_region_code.unwrap(), "US");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup_in(HashMap::from([
            (DEFAULT_COUNTRY_CODES, " , "),
            (DEFAULT_COUNTRY_CODE, ""),
            ("LANG", "C"),
        ])));
        assert_eq!(config, Config::new());
    }

    #[test]
    fn builder_setters() {
        let config = Config::new()
            .with_default_region_codes(["ke", " "])
            .with_default_region_code("tz")
            .with_locale_region_code("us");
        assert_eq!(config.default_region_codes, ["KE"]);
        assert_eq!(config.default_region_code.unwrap(), "TZ");
        assert_eq!(config.locale_region_code.unwrap(), "US");
    }
}
