use std::{fmt, ops::Deref};

/// Territory identifier used to select numbering-plan rules, e.g. `TZ`.
///
/// Always trimmed and upper-cased. Whether the engine knows the region is
/// only found out when a number is parsed against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCode(String);

impl RegionCode {
    /// Normalizes `code`, returns `None` if nothing is left after trimming.
    pub fn new(code: impl AsRef<str>) -> Option<Self> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return None;
        }
        Some(Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        "ZZ"
    }
}

impl Deref for RegionCode {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RegionCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RegionCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(RegionCode::new(" tz ").unwrap(), "TZ");
        assert_eq!(RegionCode::new("Ke").unwrap().as_str(), "KE");
        assert_eq!(RegionCode::new("ttt").unwrap(), "TTT");
    }

    #[test]
    fn rejects_blank_codes() {
        assert!(RegionCode::new("").is_none());
        assert!(RegionCode::new("   ").is_none());
    }
}
