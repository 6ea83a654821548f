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

use std::{borrow::Cow, fmt};

use log::{debug, warn};
use regex::Captures;
use serde::{Deserialize, Serialize};

use super::{
    defaults::Defaults,
    enums::NamedFormat,
    errors::{ValidationError, ValidationErrors},
    helper_constants::{DEFAULT_FIRST_SEGMENT_LEN, TRUNK_ZERO},
    helper_functions::{is_blank, remove_useless_plus},
    phone_regexps::REG_EXPS,
};

/// Fields a [`PhoneNumber`] is built from. Only the subscriber number is
/// required; the other fields fall back to [`Defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberParts {
    pub number: String,
    pub area_code: Option<String>,
    pub country_code: Option<String>,
    pub extension: Option<String>,
}

impl NumberParts {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }

    pub fn with_area_code(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Maps positional strings by count: number, area code, country code,
    /// extension. Any count outside `1..=4` yields empty parts.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let arg = |index: usize| args.get(index).map(|arg| arg.as_ref().to_owned());
        match args.len() {
            1..=4 => Self {
                number: arg(0).unwrap_or_default(),
                area_code: arg(1),
                country_code: arg(2),
                extension: arg(3),
            },
            count => {
                warn!("Expected 1 to 4 number parts, got {}", count);
                Self::default()
            }
        }
    }
}

/// A number split into country code, area code and subscriber number.
///
/// Built through [`PhoneUtil`](crate::PhoneUtil) or
/// [`PhoneNumber::from_parts`]; never changed by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    number: String,
    area_code: String,
    /// As given. Parsed numbers carry a leading `+`, e.g. `+385`.
    country_code: String,
    #[serde(default)]
    extension: String,
    #[serde(default = "default_first_segment_len")]
    first_segment_len: usize,
}

fn default_first_segment_len() -> usize {
    DEFAULT_FIRST_SEGMENT_LEN
}

/// Returns the value unless it is missing or blank.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !is_blank(value))
}

impl PhoneNumber {
    /// Fills missing area and country codes from `defaults`, then checks
    /// that number, area code and country code are all present. Every
    /// failing check is reported.
    pub fn from_parts(parts: NumberParts, defaults: &Defaults) -> Result<Self, ValidationErrors> {
        let country_code = present(parts.country_code)
            .or_else(|| {
                let code = defaults.country_code()?;
                debug!("Using default country code '{}'", code);
                Some(code.to_owned())
            })
            .unwrap_or_default();
        let area_code = present(parts.area_code)
            .or_else(|| {
                let code = defaults.area_code()?;
                debug!("Using default area code '{}'", code);
                Some(code.to_owned())
            })
            .unwrap_or_default();

        let mut failures = Vec::with_capacity(3);
        if is_blank(&parts.number) {
            failures.push(ValidationError::MissingNumber);
        }
        if is_blank(&area_code) {
            failures.push(ValidationError::MissingAreaCode);
        }
        if is_blank(&country_code) {
            failures.push(ValidationError::MissingCountryCode);
        }
        if let Some(errors) = ValidationErrors::from_failures(failures) {
            return Err(errors);
        }

        Ok(Self {
            number: parts.number,
            area_code,
            country_code,
            extension: parts.extension.unwrap_or_default(),
            first_segment_len: DEFAULT_FIRST_SEGMENT_LEN,
        })
    }

    /// Sets how many leading digits `%f` prints.
    pub fn with_first_segment_len(mut self, len: usize) -> Self {
        self.first_segment_len = len;
        self
    }

    pub(crate) fn set_extension(&mut self, extension: String) {
        self.extension = extension;
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn first_segment_len(&self) -> usize {
        self.first_segment_len
    }

    /// The area code as dialed nationally, with its trunk zero.
    pub fn area_code_long(&self) -> String {
        if self.area_code.is_empty() {
            return String::new();
        }
        fast_cat::concat_str!(TRUNK_ZERO, &self.area_code)
    }

    /// The first `first_segment_len` characters of the number.
    pub fn first_segment(&self) -> &str {
        match self.number.char_indices().nth(self.first_segment_len) {
            Some((end, _)) => &self.number[..end],
            None => &self.number,
        }
    }

    /// The last `first_segment_len + 1` characters of the number, so a
    /// seven digit number splits into 3 + 4.
    pub fn last_segment(&self) -> &str {
        let len = self.number.chars().count();
        let keep = self.first_segment_len.saturating_add(1);
        if keep >= len {
            return &self.number;
        }
        match self.number.char_indices().nth(len - keep) {
            Some((start, _)) => &self.number[start..],
            None => "",
        }
    }

    fn token_value(&self, token: &str) -> Cow<'_, str> {
        match token {
            "%c" => Cow::Borrowed(self.country_code.as_str()),
            "%a" => Cow::Borrowed(self.area_code.as_str()),
            "%A" => Cow::Owned(self.area_code_long()),
            "%n" => Cow::Borrowed(self.number.as_str()),
            "%f" => Cow::Borrowed(self.first_segment()),
            "%l" => Cow::Borrowed(self.last_segment()),
            "%x" => Cow::Borrowed(self.extension.as_str()),
            other => Cow::Owned(other.to_owned()),
        }
    }

    /// Renders the number with a preset name (see [`NamedFormat`]) or a
    /// literal template.
    ///
    /// Each placeholder is replaced once, left to right; substituted values
    /// are never expanded again. Unknown `%` sequences stay as they are.
    pub fn render(&self, template: &str) -> String {
        let template = NamedFormat::from_name(template).map_or(template, |format| format.template());
        let rendered = REG_EXPS
            .format_token_pattern
            .replace_all(template, |captures: &Captures| self.token_value(&captures[0]))
            .into_owned();
        remove_useless_plus(rendered)
    }

    pub fn render_named(&self, format: NamedFormat) -> String {
        self.render(format.template())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_named(NamedFormat::Default))
    }
}
