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

use serde::{Serialize, Serializer, ser::SerializeMap};
use strum::IntoEnumIterator;

use super::{
    enums::{PhoneNumberFormat, PhoneNumberType},
    helper_functions::{contained, strip_plus_signs},
};
use crate::{i18n::RegionCode, interfaces::NumberEngine};

/// Type classification of a parsed number: one flag per
/// [`PhoneNumberType`], at most one of them set.
///
/// Serializes to `isFixedLine`, `isMobile`, ... flags followed by `type`,
/// which is omitted when no category matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFlags(Option<PhoneNumberType>);

impl TypeFlags {
    /// Classifies `number`. A failing classifier leaves every flag unset.
    pub fn check<E: NumberEngine>(engine: &E, number: &E::Number) -> Self {
        let classified = contained("number type", engine.classify(number));
        Self(PhoneNumberType::iter().find(|kind| classified == Some(*kind)))
    }

    /// The matching category, `None` when classification failed.
    pub fn number_type(&self) -> Option<PhoneNumberType> {
        self.0
    }

    pub fn is(&self, kind: PhoneNumberType) -> bool {
        self.0 == Some(kind)
    }

    /// `(flag name, flag)` pairs in [`TYPES`](super::enums::TYPES) order.
    pub fn flags(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        PhoneNumberType::iter().map(|kind| (kind.flag_name(), self.is(kind)))
    }
}

impl Serialize for TypeFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = PhoneNumberType::iter().len() + usize::from(self.0.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (name, flag) in self.flags() {
            map.serialize_entry(name, &flag)?;
        }
        if let Some(kind) = self.0 {
            map.serialize_entry("type", kind.as_str())?;
        }
        map.end()
    }
}

/// Formatted representations of a number, one per [`PhoneNumberFormat`].
/// A format the engine failed to render is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Formats {
    #[serde(skip_serializing_if = "Option::is_none")]
    e164: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    international: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    national: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rfc3966: Option<String>,
}

impl Formats {
    /// Renders `number` in every supported format, skipping failures.
    pub fn apply<E: NumberEngine>(engine: &E, number: &E::Number) -> Self {
        let mut formats = Self::default();
        for format in PhoneNumberFormat::iter() {
            if let Some(formatted) = contained(format.key(), engine.render(number, format)) {
                formats.set(format, formatted);
            }
        }
        formats
    }

    pub fn get(&self, format: PhoneNumberFormat) -> Option<&str> {
        self.slot(format).as_deref()
    }

    /// `(key, value)` pairs of the formats present.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        PhoneNumberFormat::iter()
            .filter_map(|format| self.get(format).map(|value| (format.key(), value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn set(&mut self, format: PhoneNumberFormat, value: String) {
        *self.slot_mut(format) = Some(value);
    }

    fn slot(&self, format: PhoneNumberFormat) -> &Option<String> {
        match format {
            PhoneNumberFormat::E164 => &self.e164,
            PhoneNumberFormat::International => &self.international,
            PhoneNumberFormat::National => &self.national,
            PhoneNumberFormat::RFC3966 => &self.rfc3966,
        }
    }

    fn slot_mut(&mut self, format: PhoneNumberFormat) -> &mut Option<String> {
        match format {
            PhoneNumberFormat::E164 => &mut self.e164,
            PhoneNumberFormat::International => &mut self.international,
            PhoneNumberFormat::National => &mut self.national,
            PhoneNumberFormat::RFC3966 => &mut self.rfc3966,
        }
    }
}

/// Everything known about one successfully parsed phone number.
///
/// A descriptor is always complete. When parsing fails there is no
/// descriptor at all.
///
/// ```json
/// {
///   "raw": "+255715333777",
///   "countryCode": "TZ",
///   "callingCode": 255,
///   "extension": "",
///   "isValid": true,
///   "isPossible": true,
///   "isValidForCountryCode": true,
///   "isFixedLine": false,
///   "isMobile": true,
///   "type": "MOBILE",
///   "e164": "+255715333777",
///   "international": "+255 715 333 777",
///   "national": "0715 333 777",
///   "rfc3966": "tel:+255-715-333-777",
///   "e164NoPlus": "255715333777"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneDescriptor {
    raw: String,
    country_code: String,
    calling_code: u16,
    extension: String,
    is_valid: bool,
    is_possible: bool,
    is_valid_for_country_code: bool,
    #[serde(flatten)]
    types: TypeFlags,
    #[serde(flatten)]
    formats: Formats,
    #[serde(skip_serializing_if = "Option::is_none")]
    e164_no_plus: Option<String>,
}

impl PhoneDescriptor {
    /// Builds the descriptor of `number`, which was parsed from `raw` with
    /// `region` as the default region.
    ///
    /// Validity comes straight from the engine. Type and format queries that
    /// fail only empty their own fields.
    pub fn build<E: NumberEngine>(
        engine: &E,
        raw: &str,
        region: &RegionCode,
        number: &E::Number,
    ) -> Self {
        let country_code = engine
            .region_of(number)
            .unwrap_or_else(|| region.to_string());
        let is_valid_for_country_code = engine.is_valid_for_region(number, &country_code);
        let formats = Formats::apply(engine, number);
        let e164_no_plus = formats
            .get(PhoneNumberFormat::E164)
            .filter(|e164| !e164.is_empty())
            .map(|e164| strip_plus_signs(e164).into_owned());

        Self {
            raw: raw.to_owned(),
            calling_code: engine.calling_code_of(number),
            extension: engine.extension_of(number),
            is_valid: engine.is_valid(number),
            is_possible: engine.is_possible(number),
            is_valid_for_country_code,
            types: TypeFlags::check(engine, number),
            formats,
            e164_no_plus,
            country_code,
        }
    }

    /// Input exactly as it was given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Region the number belongs to.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_possible(&self) -> bool {
        self.is_possible
    }

    pub fn is_valid_for_country_code(&self) -> bool {
        self.is_valid_for_country_code
    }

    pub fn types(&self) -> &TypeFlags {
        &self.types
    }

    pub fn number_type(&self) -> Option<PhoneNumberType> {
        self.types.number_type()
    }

    /// Name of the matching type, e.g. `"MOBILE"`.
    pub fn type_name(&self) -> Option<&'static str> {
        self.number_type().map(|kind| kind.as_str())
    }

    pub fn is_type(&self, kind: PhoneNumberType) -> bool {
        self.types.is(kind)
    }

    pub fn is_mobile(&self) -> bool {
        self.is_type(PhoneNumberType::Mobile)
    }

    pub fn is_fixed_line(&self) -> bool {
        self.is_type(PhoneNumberType::FixedLine)
    }

    pub fn formats(&self) -> &Formats {
        &self.formats
    }

    pub fn format(&self, format: PhoneNumberFormat) -> Option<&str> {
        self.formats.get(format)
    }

    pub fn e164(&self) -> Option<&str> {
        self.format(PhoneNumberFormat::E164)
    }

    pub fn international(&self) -> Option<&str> {
        self.format(PhoneNumberFormat::International)
    }

    pub fn national(&self) -> Option<&str> {
        self.format(PhoneNumberFormat::National)
    }

    pub fn rfc3966(&self) -> Option<&str> {
        self.format(PhoneNumberFormat::RFC3966)
    }

    /// E.164 digits without any `+`, e.g. `255715333777`.
    pub fn e164_no_plus(&self) -> Option<&str> {
        self.e164_no_plus.as_deref()
    }
}
