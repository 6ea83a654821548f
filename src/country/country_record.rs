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

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    phoneutil::enums::NumberFormatKind,
    regexp_cache::{InvalidRegexError, RegexCache},
};

/// Static configuration of a single country.
///
/// Records are produced by a [`Registry`](super::Registry) loader and never
/// change afterwards. The regular expressions used while splitting numbers
/// are derived from the record's text fields on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// International calling code without the plus sign, e.g. `385`.
    #[serde(rename = "country_code", default)]
    pub(super) dialing_code: String,
    #[serde(default)]
    pub(super) name: String,
    #[serde(rename = "char_2_code", default)]
    pub(super) iso2: String,
    #[serde(rename = "char_3_code", default)]
    pub(super) iso3: String,
    /// A digit string or a regex fragment, e.g. `1|[2-5][0-3]|9[1-9]`.
    #[serde(default)]
    pub(super) area_code: String,
    /// Kept as text like the rest of the table, parsed on use.
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub(super) max_num_length: String,
    #[serde(default)]
    pub(super) national_dialing_prefix: String,
    #[serde(default)]
    pub(super) international_dialing_prefix: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(u64),
}

fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => itoa::Buffer::new().format(number).to_owned(),
    })
}

impl CountryRecord {
    pub fn new(
        dialing_code: impl Into<String>,
        name: impl Into<String>,
        area_code: impl Into<String>,
        max_num_length: usize,
    ) -> Self {
        Self {
            dialing_code: dialing_code.into(),
            name: name.into(),
            iso2: String::new(),
            iso3: String::new(),
            area_code: area_code.into(),
            max_num_length: itoa::Buffer::new().format(max_num_length).to_owned(),
            national_dialing_prefix: String::new(),
            international_dialing_prefix: String::new(),
        }
    }

    pub fn with_iso_codes(mut self, iso2: impl Into<String>, iso3: impl Into<String>) -> Self {
        self.iso2 = iso2.into();
        self.iso3 = iso3.into();
        self
    }

    pub fn with_dialing_prefixes(
        mut self,
        national: impl Into<String>,
        international: impl Into<String>,
    ) -> Self {
        self.national_dialing_prefix = national.into();
        self.international_dialing_prefix = international.into();
        self
    }

    pub fn dialing_code(&self) -> &str {
        &self.dialing_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn iso3(&self) -> &str {
        &self.iso3
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn max_num_length_text(&self) -> &str {
        &self.max_num_length
    }

    /// Returns `None` unless the configured length is a positive integer.
    pub fn max_num_length(&self) -> Option<usize> {
        self.max_num_length
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|len| *len > 0)
    }

    pub fn national_dialing_prefix(&self) -> &str {
        &self.national_dialing_prefix
    }

    pub fn international_dialing_prefix(&self) -> &str {
        &self.international_dialing_prefix
    }

    /// Matches a leading `+` immediately followed by the dialing code.
    pub fn country_code_pattern(&self) -> String {
        fast_cat::concat_str!("^\\+", &self.dialing_code)
    }

    /// Optional trunk zero, the area code, then up to `max_num_length`
    /// trailing digits. Input like `047451588` or `013668734`.
    pub fn short_pattern(&self) -> String {
        let number = self.number_pattern();
        fast_cat::concat_str!("^0?(", &self.area_code, ")", &number)
    }

    /// Only the trailing subscriber digits, no area code. Input like `451588`.
    pub fn really_short_pattern(&self) -> String {
        let number = self.number_pattern();
        fast_cat::concat_str!("^", &number)
    }

    /// Leading zeros followed by the area code, stripped to get the
    /// subscriber number.
    pub(crate) fn area_code_prefix_pattern(&self) -> String {
        fast_cat::concat_str!("^0*(", &self.area_code, ")")
    }

    fn number_pattern(&self) -> String {
        let max_len = self.max_num_length.trim();
        fast_cat::concat_str!("([0-9]{1,", max_len, "})$")
    }

    /// Compiles both format patterns. Nothing is cached here; callers that
    /// classify many numbers should go through a
    /// [`PhoneUtil`](crate::PhoneUtil) which keeps compiled patterns.
    pub fn formats(&self) -> Result<CountryFormats, InvalidRegexError> {
        Ok(CountryFormats {
            short: Arc::new(Regex::new(&self.short_pattern())?),
            really_short: Arc::new(Regex::new(&self.really_short_pattern())?),
        })
    }

    pub(crate) fn formats_in(&self, cache: &RegexCache) -> Result<CountryFormats, InvalidRegexError> {
        Ok(CountryFormats {
            short: cache.get_regex(&self.short_pattern())?,
            really_short: cache.get_regex(&self.really_short_pattern())?,
        })
    }

    pub fn detect_format(&self, text: &str) -> Result<NumberFormatKind, InvalidRegexError> {
        Ok(self.formats()?.classify(text))
    }
}

/// The two compiled format patterns of a country.
#[derive(Debug, Clone)]
pub struct CountryFormats {
    short: Arc<Regex>,
    really_short: Arc<Regex>,
}

impl CountryFormats {
    /// Picks exactly one classification for `text`.
    ///
    /// A text matching both patterns is a bare digit run and is folded into
    /// [`NumberFormatKind::ReallyShort`]. A text matching neither still
    /// counts as [`NumberFormatKind::Short`].
    pub fn classify(&self, text: &str) -> NumberFormatKind {
        let short = self.short.is_match(text);
        let really_short = self.really_short.is_match(text);

        match (short, really_short) {
            (true, true) | (false, true) => NumberFormatKind::ReallyShort,
            (true, false) => NumberFormatKind::Short,
            (false, false) => NumberFormatKind::Short,
        }
    }
}
