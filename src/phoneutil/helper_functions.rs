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

use std::borrow::Cow;

use log::debug;

use super::errors::EngineError;

/// Turns a failed engine query into `None`, logging what was lost.
///
/// Callers use `unwrap_or_default()` on the result when they need a neutral
/// value instead of an absent one.
pub(super) fn contained<T>(what: &str, result: Result<T, EngineError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("Dropping {}: {}", what, err);
            None
        }
    }
}

/// Removes every `+` from `formatted`, borrowing if there is none.
pub(super) fn strip_plus_signs(formatted: &str) -> Cow<'_, str> {
    if formatted.contains('+') {
        Cow::Owned(formatted.replace('+', ""))
    } else {
        Cow::Borrowed(formatted)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::phoneutil::PhoneNumberFormat;

    #[test]
    fn contained_keeps_values_and_drops_errors() {
        assert_eq!(contained("answer", Ok::<_, EngineError>(42)), Some(42));
        assert_eq!(
            contained::<String>("format", Err(EngineError::Format(PhoneNumberFormat::National))),
            None
        );
        assert!(!contained::<bool>("flag", Err(EngineError::Panicked)).unwrap_or_default());
    }

    #[test]
    fn strips_all_plus_signs() {
        assert_eq!(strip_plus_signs("+255715333777"), "255715333777");
        assert_eq!(strip_plus_signs("+25+5"), "255");
        assert!(matches!(strip_plus_signs("255"), Cow::Borrowed("255")));
    }
}
