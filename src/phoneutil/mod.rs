mod helper_functions;
pub mod descriptor;
pub mod enums;
pub mod errors;
pub mod phoneutil;
pub mod resolver;

pub use descriptor::{Formats, PhoneDescriptor, TypeFlags};
pub use enums::{
    FORMAT_E164, FORMAT_INTERNATIONAL, FORMAT_NATIONAL, FORMAT_RFC3966, FORMATS,
    PhoneNumberFormat, PhoneNumberType, TYPE_FIXED_LINE, TYPE_FIXED_LINE_OR_MOBILE, TYPE_MOBILE,
    TYPE_PAGER, TYPE_PERSONAL_NUMBER, TYPE_PREMIUM_RATE, TYPE_SHARED_COST, TYPE_TOLL_FREE,
    TYPE_UAN, TYPE_UNKNOWN, TYPE_VOICEMAIL, TYPE_VOIP, TYPES,
};
pub use errors::{EngineError, ResolveError};
pub use phoneutil::PhoneUtil;
pub use resolver::RegionResolver;
