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

use std::{
    fmt::Write,
    panic::{self, AssertUnwindSafe},
};

use log::{error, trace};
use phonenumber::{
    Mode, PhoneNumber, Type, country,
    metadata::{DATABASE, Metadata},
};

use crate::{
    i18n::RegionCode,
    interfaces::NumberEngine,
    phoneutil::{EngineError, PhoneNumberFormat, PhoneNumberType},
};

/// Number types whose descriptors contribute possible lengths.
/// `Type::Unknown` stands for the general descriptor.
const LENGTH_SOURCES: [Type; 12] = [
    Type::Unknown,
    Type::FixedLine,
    Type::Mobile,
    Type::TollFree,
    Type::PremiumRate,
    Type::SharedCost,
    Type::PersonalNumber,
    Type::Voip,
    Type::Pager,
    Type::Uan,
    Type::Voicemail,
    Type::NoInternational,
];

/// [`NumberEngine`] backed by the `phonenumber` crate and its bundled
/// libphonenumber metadata.
///
/// The crate has a few unwraps on unusual input, so every call into it runs
/// under `catch_unwind` and a panic becomes [`EngineError::Panicked`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LibPhoneNumberEngine;

impl LibPhoneNumberEngine {
    pub fn new() -> Self {
        Self
    }
}

fn contain_panic<T>(what: &str, f: impl FnOnce() -> T) -> Result<T, EngineError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|err| {
        error!("phonenumber crate panicked while trying to {}: {:?}", what, err);
        EngineError::Panicked
    })
}

fn map_type(kind: Type) -> Option<PhoneNumberType> {
    let kind = match kind {
        Type::FixedLine => PhoneNumberType::FixedLine,
        Type::FixedLineOrMobile => PhoneNumberType::FixedLineOrMobile,
        Type::Mobile => PhoneNumberType::Mobile,
        Type::Pager => PhoneNumberType::Pager,
        Type::PersonalNumber => PhoneNumberType::PersonalNumber,
        Type::PremiumRate => PhoneNumberType::PremiumRate,
        Type::SharedCost => PhoneNumberType::SharedCost,
        Type::TollFree => PhoneNumberType::TollFree,
        Type::Uan => PhoneNumberType::UAN,
        Type::Unknown => PhoneNumberType::Unknown,
        Type::Voicemail => PhoneNumberType::VoiceMail,
        Type::Voip => PhoneNumberType::VoIP,
        // Short number categories have no counterpart here
        _ => return None,
    };
    Some(kind)
}

fn map_format(format: PhoneNumberFormat) -> Mode {
    match format {
        PhoneNumberFormat::E164 => Mode::E164,
        PhoneNumberFormat::International => Mode::International,
        PhoneNumberFormat::National => Mode::National,
        PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
    }
}

/// Digits in the national significant number, leading zeros included.
fn national_significant_length(number: &PhoneNumber) -> usize {
    number.national().to_string().len()
}

/// Whether `length` is a full or local-only length of any number type in
/// the numbering plan.
fn is_possible_length(metadata: &Metadata, length: usize) -> bool {
    let descriptors = metadata.descriptors();
    LENGTH_SOURCES
        .iter()
        .filter_map(|kind| descriptors.get(*kind))
        .flat_map(|desc| desc.possible_length().iter().chain(desc.possible_local_length()))
        .any(|possible| usize::from(*possible) == length)
}

impl NumberEngine for LibPhoneNumberEngine {
    type Number = PhoneNumber;

    fn parse(&self, raw: &str, region: &RegionCode) -> Result<PhoneNumber, EngineError> {
        let id = region
            .parse::<country::Id>()
            .map_err(|_| EngineError::UnsupportedRegion(region.to_string()))?;
        trace!("Parsing {:?} for region {}", raw, region);
        contain_panic("parse", || phonenumber::parse(Some(id), raw))?
            .map_err(|err| EngineError::Unparseable(err.to_string()))
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        contain_panic("validate", || phonenumber::is_valid(number)).unwrap_or(false)
    }

    fn is_possible(&self, number: &PhoneNumber) -> bool {
        contain_panic("check length", || {
            number.metadata(&DATABASE).is_some_and(|metadata| {
                is_possible_length(metadata, national_significant_length(number))
            })
        })
        .unwrap_or(false)
    }

    fn is_valid_for_region(&self, number: &PhoneNumber, region: &str) -> bool {
        self.is_valid(number) && self.region_of(number).as_deref() == Some(region)
    }

    /// ISO code of the region, or `001` for non-geographic calling codes.
    fn region_of(&self, number: &PhoneNumber) -> Option<String> {
        contain_panic("look up region", || {
            number.metadata(&DATABASE).map(|metadata| metadata.id().to_owned())
        })
        .ok()
        .flatten()
    }

    fn calling_code_of(&self, number: &PhoneNumber) -> u16 {
        number.code().value()
    }

    fn extension_of(&self, number: &PhoneNumber) -> String {
        number
            .extension()
            .map(|extension| extension.to_string())
            .unwrap_or_default()
    }

    fn classify(&self, number: &PhoneNumber) -> Result<PhoneNumberType, EngineError> {
        let kind = contain_panic("classify", || number.number_type(&DATABASE))?;
        map_type(kind).ok_or(EngineError::UnrecognizedType)
    }

    fn render(&self, number: &PhoneNumber, format: PhoneNumberFormat) -> Result<String, EngineError> {
        let mut formatted = String::new();
        contain_panic("format", || {
            write!(formatted, "{}", phonenumber::format(number).mode(map_format(format)))
        })?
        .map_err(|_| EngineError::Format(format))?;
        Ok(formatted)
    }
}
