mod region_code;
pub mod locale;

pub use region_code::RegionCode;
