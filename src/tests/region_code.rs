pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ke() -> &'static str {
        "KE"
    }

    pub fn tz() -> &'static str {
        "TZ"
    }

    pub fn ug() -> &'static str {
        "UG"
    }

    pub fn us() -> &'static str {
        "US"
    }

    /// Not a region any engine knows about.
    pub fn ttt() -> &'static str {
        "TTT"
    }
}
