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

use std::sync::LazyLock;

use regex::Regex;

use super::helper_constants::{
    DOUBLED_PLUS_PATTERN, EXTENSION_PATTERN, FORMAT_TOKEN_PATTERN, NOISE_PATTERN,
};

/// Country independent expressions, compiled once per process.
pub(crate) static REG_EXPS: LazyLock<PhoneRegExps> = LazyLock::new(PhoneRegExps::new);

pub(crate) struct PhoneRegExps {
    /// Trailing extension marker and digits, case-insensitive.
    pub extension_pattern: Regex,

    /// Noise removed or collapsed by the normalizer.
    pub noise_pattern: Regex,

    /// Placeholders recognized in format templates. Any other `%`
    /// sequence is left as is.
    pub format_token_pattern: Regex,

    pub doubled_plus_pattern: Regex,
}

impl PhoneRegExps {
    pub fn new() -> Self {
        Self {
            extension_pattern: Regex::new(EXTENSION_PATTERN).unwrap(),
            noise_pattern: Regex::new(NOISE_PATTERN).unwrap(),
            format_token_pattern: Regex::new(FORMAT_TOKEN_PATTERN).unwrap(),
            doubled_plus_pattern: Regex::new(DOUBLED_PLUS_PATTERN).unwrap(),
        }
    }
}
