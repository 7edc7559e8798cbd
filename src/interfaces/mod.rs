use std::sync::Arc;

use crate::{
    i18n::RegionCode,
    phoneutil::{EngineError, PhoneNumberFormat, PhoneNumberType},
};

/// Phone number metadata engine used to isolate the underlying parsing,
/// validation and formatting implementation, so that a different one can be
/// swapped in easily.
///
/// Query methods take `&self` and must be safe to call concurrently.
pub trait NumberEngine: Send + Sync {
    /// Parsed representation of a phone number.
    type Number;

    /// Parses `raw` using `region` as the default region for numbers
    /// written without an international prefix.
    fn parse(&self, raw: &str, region: &RegionCode) -> Result<Self::Number, EngineError>;

    /// Whether the number is a fully valid, dialable number.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Whether the number has a plausible length, valid or not.
    fn is_possible(&self, number: &Self::Number) -> bool;

    fn is_valid_for_region(&self, number: &Self::Number, region: &str) -> bool;

    /// Region the number belongs to, if the engine can tell.
    fn region_of(&self, number: &Self::Number) -> Option<String>;

    fn calling_code_of(&self, number: &Self::Number) -> u16;

    /// Extension digits, empty if the number has none.
    fn extension_of(&self, number: &Self::Number) -> String;

    fn classify(&self, number: &Self::Number) -> Result<PhoneNumberType, EngineError>;

    fn render(&self, number: &Self::Number, format: PhoneNumberFormat) -> Result<String, EngineError>;
}

impl<E: NumberEngine + ?Sized> NumberEngine for Arc<E> {
    type Number = E::Number;

    fn parse(&self, raw: &str, region: &RegionCode) -> Result<Self::Number, EngineError> {
        (**self).parse(raw, region)
    }

    fn is_valid(&self, number: &Self::Number) -> bool {
        (**self).is_valid(number)
    }

    fn is_possible(&self, number: &Self::Number) -> bool {
        (**self).is_possible(number)
    }

    fn is_valid_for_region(&self, number: &Self::Number, region: &str) -> bool {
        (**self).is_valid_for_region(number, region)
    }

    fn region_of(&self, number: &Self::Number) -> Option<String> {
        (**self).region_of(number)
    }

    fn calling_code_of(&self, number: &Self::Number) -> u16 {
        (**self).calling_code_of(number)
    }

    fn extension_of(&self, number: &Self::Number) -> String {
        (**self).extension_of(number)
    }

    fn classify(&self, number: &Self::Number) -> Result<PhoneNumberType, EngineError> {
        (**self).classify(number)
    }

    fn render(&self, number: &Self::Number, format: PhoneNumberFormat) -> Result<String, EngineError> {
        (**self).render(number, format)
    }
}
