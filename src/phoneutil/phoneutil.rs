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

use log::trace;

use super::{
    defaults::{Defaults, SharedDefaults},
    enums::NumberFormatKind,
    errors::{ParseError, ValidationErrors},
    helper_constants::{PLUS_SIGN, TRUNK_ZERO},
    helper_functions::{extract_extension, normalize},
    phone_number::{NumberParts, PhoneNumber},
};
use crate::{
    country::{CountryRecord, Registry},
    macros::owned_from_cow_or,
    regexp_cache::RegexCache,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

/// Outcome of splitting a normalized number against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNumber {
    pub number: String,
    /// Empty when the country has no area code pattern or it did not match.
    pub area_code: String,
    /// The detected dialing code with its `+`, e.g. `+385`.
    pub country_code: String,
    pub format: NumberFormatKind,
}

impl SplitNumber {
    pub fn into_parts(self) -> NumberParts {
        NumberParts {
            number: self.number,
            area_code: Some(self.area_code),
            country_code: Some(self.country_code),
            extension: None,
        }
    }
}

/// Parses raw input into [`PhoneNumber`]s against one country registry.
///
/// The util owns ambient [`Defaults`], changed with
/// [`set_default_country_code`](Self::set_default_country_code) and
/// [`set_default_area_code`](Self::set_default_area_code) and read by every
/// parse. Callers that want to avoid shared state pass their own defaults to
/// the `*_with_defaults` variants.
pub struct PhoneUtil {
    registry: Registry,

    defaults: SharedDefaults,

    /// Patterns derived from registry records, compiled on first use.
    regexp_cache: RegexCache,
}

impl PhoneUtil {
    pub fn new(registry: Registry) -> Self {
        let capacity = registry.len() * 4;
        Self {
            registry,
            defaults: SharedDefaults::default(),
            regexp_cache: RegexCache::with_capacity(capacity),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn find_by_dialing_code(&self, code: &str) -> Option<&CountryRecord> {
        self.registry.find_by_dialing_code(code)
    }

    pub fn find_by_iso3(&self, iso3: &str) -> Option<&CountryRecord> {
        self.registry.find_by_iso3(iso3)
    }

    pub fn find_by_iso2(&self, iso2: &str) -> Option<&CountryRecord> {
        self.registry.find_by_iso2(iso2)
    }

    /// The registry record of a number's country code, with or without `+`.
    pub fn country_for(&self, phone_number: &PhoneNumber) -> Option<&CountryRecord> {
        let code = phone_number.country_code().trim_start_matches(PLUS_SIGN);
        self.registry.find_by_dialing_code(code)
    }

    pub fn set_default_country_code(&self, code: impl Into<String>) -> String {
        let code = code.into();
        self.defaults.set_country_code(code.clone());
        code
    }

    pub fn set_default_area_code(&self, code: impl Into<String>) -> String {
        let code = code.into();
        self.defaults.set_area_code(code.clone());
        code
    }

    /// A copy of the current ambient defaults.
    pub fn defaults(&self) -> Defaults {
        self.defaults.snapshot()
    }

    /// Parses `raw` with the ambient defaults.
    ///
    /// An empty input gives `Ok(None)`, which is not a failure.
    pub fn parse(&self, raw: &str) -> Result<Option<PhoneNumber>> {
        self.parse_with_defaults(raw, &self.defaults.snapshot())
    }

    pub fn parse_with_defaults(&self, raw: &str, defaults: &Defaults) -> Result<Option<PhoneNumber>> {
        if raw.is_empty() {
            return Ok(None);
        }

        let (remainder, extension) = extract_extension(raw);
        trace!("Extension of '{}' is '{}'", raw, extension);

        let normalized = normalize(remainder);
        trace!("Normalized '{}' to '{}'", remainder, normalized);

        let split = self.split_to_parts(&normalized, defaults.country_code())?;
        let mut phone_number = PhoneNumber::from_parts(split.into_parts(), defaults)?;
        phone_number.set_extension(extension);
        Ok(Some(phone_number))
    }

    /// Whether `raw` parses without an error.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.parse(raw).is_ok()
    }

    /// Splits a normalized number into subscriber number, area code and
    /// country code.
    ///
    /// The country comes from the number's `+<dialing code>` prefix or,
    /// failing that, from `fallback_code`. The prefix is replaced with a
    /// trunk zero before the area code is looked up.
    pub fn split_to_parts(&self, normalized: &str, fallback_code: Option<&str>) -> Result<SplitNumber> {
        let country = self
            .registry
            .detect(normalized, fallback_code)
            .ok_or(ParseError::NoCountryCode)?;

        let country_code_pattern = self.regexp_cache.get_regex(&country.country_code_pattern())?;
        let national = owned_from_cow_or!(
            country_code_pattern.replace(normalized, TRUNK_ZERO),
            normalized.to_owned()
        );

        let format = country.formats_in(&self.regexp_cache)?.classify(&national);
        trace!("'{}' classified as {} for {}", national, format.as_ref(), country.name());

        let area_code = if country.area_code().is_empty() {
            String::new()
        } else {
            self.regexp_cache
                .get_regex(country.area_code())?
                .find(&national)
                .map(|area_code| area_code.as_str().to_owned())
                .unwrap_or_default()
        };

        let area_code_prefix = self.regexp_cache.get_regex(&country.area_code_prefix_pattern())?;
        let number = area_code_prefix.replace(&national, "").into_owned();

        let dialing_code = country.dialing_code();
        Ok(SplitNumber {
            number,
            area_code,
            country_code: fast_cat::concat_str!(PLUS_SIGN, dialing_code),
            format,
        })
    }

    /// Builds a number from parts, filling gaps from the ambient defaults.
    pub fn construct(&self, parts: NumberParts) -> std::result::Result<PhoneNumber, ValidationErrors> {
        PhoneNumber::from_parts(parts, &self.defaults.snapshot())
    }

    /// Same as [`construct`](Self::construct) with positional strings:
    /// number, area code, country code, extension.
    pub fn construct_from_args<S: AsRef<str>>(
        &self,
        args: &[S],
    ) -> std::result::Result<PhoneNumber, ValidationErrors> {
        self.construct(NumberParts::from_args(args))
    }

    pub fn construct_with_defaults(
        &self,
        parts: NumberParts,
        defaults: &Defaults,
    ) -> std::result::Result<PhoneNumber, ValidationErrors> {
        PhoneNumber::from_parts(parts, defaults)
    }
}
