//! Best-effort phone number normalization.
//!
//! [`PhoneUtil`] tries a raw number against an ordered list of candidate
//! regions and returns a [`PhoneDescriptor`] for the first region under
//! which the number is valid: validity flags, type classification and the
//! E.164, international, national and RFC3966 formats. Numbering-plan rules
//! come from a [`NumberEngine`], by default [`LibPhoneNumberEngine`].
//!
//! ```no_run
//! use rphone::PhoneUtil;
//!
//! // DEFAULT_COUNTRY_CODE=TZ
//! let util = PhoneUtil::from_env();
//! assert_eq!(util.to_e164_str("0714969698", None), "255714969698");
//! ```

mod interfaces;
mod phoneutil;
mod engine;
pub mod config;
pub mod i18n;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use engine::LibPhoneNumberEngine;
pub use i18n::RegionCode;
pub use interfaces::NumberEngine;
pub use phoneutil::{
    EngineError, FORMAT_E164, FORMAT_INTERNATIONAL, FORMAT_NATIONAL, FORMAT_RFC3966, FORMATS,
    Formats, PhoneDescriptor, PhoneNumberFormat, PhoneNumberType, PhoneUtil, RegionResolver,
    ResolveError, TYPE_FIXED_LINE, TYPE_FIXED_LINE_OR_MOBILE, TYPE_MOBILE, TYPE_PAGER,
    TYPE_PERSONAL_NUMBER, TYPE_PREMIUM_RATE, TYPE_SHARED_COST, TYPE_TOLL_FREE, TYPE_UAN,
    TYPE_UNKNOWN, TYPE_VOICEMAIL, TYPE_VOIP, TYPES, TypeFlags,
};
