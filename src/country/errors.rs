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

/// Errors raised while loading or validating a country registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode country table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Dialing code '{0}' must be a non-empty string of ASCII digits")]
    InvalidDialingCode(String),

    #[error("Registry key '{key}' does not match the record's dialing code '{dialing_code}'")]
    KeyMismatch { key: String, dialing_code: String },

    #[error("Dialing code '{0}' is defined more than once")]
    DuplicateDialingCode(String),

    #[error("Max number length '{value}' of dialing code '{dialing_code}' must be a positive integer")]
    InvalidMaxNumLength { dialing_code: String, value: String },

    #[error("Area code pattern of dialing code '{dialing_code}' is invalid: {source}")]
    InvalidAreaCode {
        dialing_code: String,
        #[source]
        source: InvalidRegexError,
    },
}
