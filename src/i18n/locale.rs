use std::sync::LazyLock;

use regex::Regex;

use super::RegionCode;

/// Environment variables consulted for the host locale, in POSIX priority
/// order.
pub const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// `language[_-]TERRITORY` followed by an optional `.codeset` or `@modifier`.
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}[_-]([A-Za-z]{2})(?:[.@].*)?$")
        .expect("locale pattern is a valid regex")
});

/// Extracts the territory of a locale string such as `en_US.UTF-8` or
/// `sw-TZ`. `C`, `POSIX` and language-only locales have none.
pub fn region_from_locale(locale: &str) -> Option<RegionCode> {
    let captures = LOCALE_PATTERN.captures(locale.trim())?;
    let region = RegionCode::new(captures.get(1)?.as_str())?;
    if region == RegionCode::get_unknown() {
        return None;
    }
    Some(region)
}

/// Region of the first non-empty locale variable returned by `lookup`.
///
/// As with POSIX, a set but territory-less variable (e.g. `LC_ALL=C`)
/// shadows the ones after it.
pub fn host_region<F>(lookup: F) -> Option<RegionCode>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARIABLES
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .and_then(|value| region_from_locale(&value))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn territory_from_posix_locales() {
        assert_eq!(region_from_locale("en_US.UTF-8").unwrap(), "US");
        assert_eq!(region_from_locale("sw_TZ").unwrap(), "TZ");
        assert_eq!(region_from_locale("de_DE@euro").unwrap(), "DE");
        assert_eq!(region_from_locale("sw-tz").unwrap(), "TZ");
    }

    #[test]
    fn locales_without_territory() {
        assert!(region_from_locale("C").is_none());
        assert!(region_from_locale("POSIX").is_none());
        assert!(region_from_locale("C.UTF-8").is_none());
        assert!(region_from_locale("en").is_none());
        assert!(region_from_locale("en_ZZ").is_none());
        assert!(region_from_locale("").is_none());
    }

    #[test]
    fn first_set_variable_wins() {
        let env = HashMap::from([
            ("LC_MESSAGES", "sw_KE.UTF-8"),
            ("LANG", "en_US.UTF-8"),
        ]);
        let region = host_region(|name| env.get(name).map(|value| value.to_string()));
        assert_eq!(region.unwrap(), "KE");

        let env = HashMap::from([("LC_ALL", "C"), ("LANG", "en_US.UTF-8")]);
        assert!(host_region(|name| env.get(name).map(|value| value.to_string())).is_none());

        let env = HashMap::from([("LC_ALL", " "), ("LANG", "en_GB.UTF-8")]);
        let region = host_region(|name| env.get(name).map(|value| value.to_string()));
        assert_eq!(region.unwrap(), "GB");
    }
}
