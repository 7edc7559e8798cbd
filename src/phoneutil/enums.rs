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

use std::{fmt, str::FromStr};

use strum::{EnumIter, IntoEnumIterator};

pub const TYPE_FIXED_LINE: &str = "FIXED_LINE";
pub const TYPE_FIXED_LINE_OR_MOBILE: &str = "FIXED_LINE_OR_MOBILE";
pub const TYPE_MOBILE: &str = "MOBILE";
pub const TYPE_PAGER: &str = "PAGER";
pub const TYPE_PERSONAL_NUMBER: &str = "PERSONAL_NUMBER";
pub const TYPE_PREMIUM_RATE: &str = "PREMIUM_RATE";
pub const TYPE_SHARED_COST: &str = "SHARED_COST";
pub const TYPE_TOLL_FREE: &str = "TOLL_FREE";
pub const TYPE_UAN: &str = "UAN";
pub const TYPE_UNKNOWN: &str = "UNKNOWN";
pub const TYPE_VOICEMAIL: &str = "VOICEMAIL";
pub const TYPE_VOIP: &str = "VOIP";

/// Names of every supported phone number type, in sorted order.
pub const TYPES: [&str; 12] = [
    TYPE_FIXED_LINE,
    TYPE_FIXED_LINE_OR_MOBILE,
    TYPE_MOBILE,
    TYPE_PAGER,
    TYPE_PERSONAL_NUMBER,
    TYPE_PREMIUM_RATE,
    TYPE_SHARED_COST,
    TYPE_TOLL_FREE,
    TYPE_UAN,
    TYPE_UNKNOWN,
    TYPE_VOICEMAIL,
    TYPE_VOIP,
];

pub const FORMAT_E164: &str = "E164";
pub const FORMAT_INTERNATIONAL: &str = "INTERNATIONAL";
pub const FORMAT_NATIONAL: &str = "NATIONAL";
pub const FORMAT_RFC3966: &str = "RFC3966";

/// Names of every supported output format, in sorted order.
pub const FORMATS: [&str; 4] = [
    FORMAT_E164,
    FORMAT_INTERNATIONAL,
    FORMAT_NATIONAL,
    FORMAT_RFC3966,
];

/// Defines the various standardized formats for representing phone numbers.
///
/// For example, the Tanzanian mobile number `0715 333 777` would be:
/// - **E164**: `+255715333777`
/// - **INTERNATIONAL**: `+255 715 333 777`
/// - **NATIONAL**: `0715 333 777`
/// - **RFC3966**: `tel:+255-715-333-777`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneNumberFormat {
    /// Standardized international format with no spaces or symbols,
    /// always starting with a `+` followed by the country code.
    E164,
    /// Includes the country code, spaced for readability.
    International,
    /// Format used for dialing within the number's own country.
    /// May include a national prefix (like '0').
    National,
    /// `tel:` URI with hyphens as separators.
    RFC3966,
}

impl PhoneNumberFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneNumberFormat::E164 => FORMAT_E164,
            PhoneNumberFormat::International => FORMAT_INTERNATIONAL,
            PhoneNumberFormat::National => FORMAT_NATIONAL,
            PhoneNumberFormat::RFC3966 => FORMAT_RFC3966,
        }
    }

    /// Lower-cased name under which the formatted value is stored in a
    /// descriptor, e.g. `e164` or `rfc3966`.
    pub fn key(&self) -> &'static str {
        match self {
            PhoneNumberFormat::E164 => "e164",
            PhoneNumberFormat::International => "international",
            PhoneNumberFormat::National => "national",
            PhoneNumberFormat::RFC3966 => "rfc3966",
        }
    }
}

/// Categorizes phone numbers based on their primary use.
///
/// Variants are declared in the same order as [`TYPES`].
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Used in regions (e.g., the USA) where it's impossible to distinguish
    /// between fixed-line and mobile numbers by looking at the number itself.
    FixedLineOrMobile,
    /// Numbers assigned to wireless devices.
    Mobile,
    Pager,
    /// A number associated with a person rather than a location or device.
    PersonalNumber,
    /// Numbers charged at a higher rate than normal calls.
    PremiumRate,
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// Calls are free for the caller.
    TollFree,
    /// Universal Access Numbers, routing one company number to several offices.
    UAN,
    /// The number does not match any known pattern for its region.
    Unknown,
    VoiceMail,
    /// Voice over IP numbers.
    VoIP,
}

impl PhoneNumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneNumberType::FixedLine => TYPE_FIXED_LINE,
            PhoneNumberType::FixedLineOrMobile => TYPE_FIXED_LINE_OR_MOBILE,
            PhoneNumberType::Mobile => TYPE_MOBILE,
            PhoneNumberType::Pager => TYPE_PAGER,
            PhoneNumberType::PersonalNumber => TYPE_PERSONAL_NUMBER,
            PhoneNumberType::PremiumRate => TYPE_PREMIUM_RATE,
            PhoneNumberType::SharedCost => TYPE_SHARED_COST,
            PhoneNumberType::TollFree => TYPE_TOLL_FREE,
            PhoneNumberType::UAN => TYPE_UAN,
            PhoneNumberType::Unknown => TYPE_UNKNOWN,
            PhoneNumberType::VoiceMail => TYPE_VOICEMAIL,
            PhoneNumberType::VoIP => TYPE_VOIP,
        }
    }

    /// camelCase flag name used in serialized descriptors, e.g. `isMobile`.
    pub fn flag_name(&self) -> &'static str {
        match self {
            PhoneNumberType::FixedLine => "isFixedLine",
            PhoneNumberType::FixedLineOrMobile => "isFixedLineOrMobile",
            PhoneNumberType::Mobile => "isMobile",
            PhoneNumberType::Pager => "isPager",
            PhoneNumberType::PersonalNumber => "isPersonalNumber",
            PhoneNumberType::PremiumRate => "isPremiumRate",
            PhoneNumberType::SharedCost => "isSharedCost",
            PhoneNumberType::TollFree => "isTollFree",
            PhoneNumberType::UAN => "isUan",
            PhoneNumberType::Unknown => "isUnknown",
            PhoneNumberType::VoiceMail => "isVoicemail",
            PhoneNumberType::VoIP => "isVoip",
        }
    }
}

impl fmt::Display for PhoneNumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PhoneNumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive lookup by name, `"mobile"` and `"MOBILE"` both work.
impl FromStr for PhoneNumberType {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(strum::ParseError::VariantNotFound)
    }
}

impl FromStr for PhoneNumberFormat {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(strum::ParseError::VariantNotFound)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn type_iteration_matches_names() {
        let names = PhoneNumberType::iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, TYPES);
        assert_eq!(PhoneNumberType::VoIP.to_string(), "VOIP");
    }

    #[test]
    fn format_iteration_matches_names() {
        let names = PhoneNumberFormat::iter()
            .map(|format| format.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, FORMATS);

        let keys = PhoneNumberFormat::iter()
            .map(|format| format.key())
            .collect::<Vec<_>>();
        assert_eq!(keys, ["e164", "international", "national", "rfc3966"]);
    }

    #[test]
    fn parse_from_name() {
        assert_eq!("mobile".parse::<PhoneNumberType>(), Ok(PhoneNumberType::Mobile));
        assert_eq!(
            "FIXED_LINE_OR_MOBILE".parse::<PhoneNumberType>(),
            Ok(PhoneNumberType::FixedLineOrMobile)
        );
        assert!("LANDLINE".parse::<PhoneNumberType>().is_err());
        assert_eq!("rfc3966".parse::<PhoneNumberFormat>(), Ok(PhoneNumberFormat::RFC3966));
    }
}
