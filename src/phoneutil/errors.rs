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

use thiserror::Error;

use super::enums::PhoneNumberFormat;

/// Failures reported by a [`NumberEngine`](crate::NumberEngine).
///
/// None of these reach the caller of [`PhoneUtil`](crate::PhoneUtil):
/// parse failures skip a candidate region, the rest degrade a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Unsupported region code: {0}")]
    UnsupportedRegion(String),
    #[error("Failed to parse number: {0}")]
    Unparseable(String),
    #[error("Number type is not recognized")]
    UnrecognizedType,
    #[error("Failed to format number as {0}")]
    Format(PhoneNumberFormat),
    #[error("Phone number engine panicked")]
    Panicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No hint was given and neither the configuration nor the host locale
    /// provide a default region.
    #[error("No region code available: pass a region hint, set DEFAULT_COUNTRY_CODES or DEFAULT_COUNTRY_CODE")]
    NoRegionAvailable,
}
