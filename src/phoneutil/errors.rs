// Copyright (C) 2025 Kashin Vladislav
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

use crate::regexp_cache::InvalidRegexError;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    /// No `+<dialing code>` prefix was found and no usable default country
    /// code is set.
    #[error("must specify country code")]
    NoCountryCode,
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// A pattern derived from the registry did not compile. Registries
    /// validate their records, so this only happens with a broken table.
    #[error("{0}")]
    InvalidPattern(#[from] InvalidRegexError),
}

/// A single field left empty after defaults were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("must enter number")]
    MissingNumber,
    #[error("must enter area code or set default")]
    MissingAreaCode,
    #[error("must enter country code or set default")]
    MissingCountryCode,
}

/// Every failed check of one construction, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Returns `None` when there is nothing to report.
    pub(crate) fn from_failures(failures: Vec<ValidationError>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self(failures))
        }
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, ValidationErrors};

    #[test]
    fn joins_all_messages() {
        let errors = ValidationErrors::from_failures(vec![
            ValidationError::MissingAreaCode,
            ValidationError::MissingCountryCode,
        ])
        .unwrap();

        assert_eq!(
            errors.to_string(),
            "must enter area code or set default; must enter country code or set default"
        );
        assert!(ValidationErrors::from_failures(Vec::new()).is_none());
    }
}
