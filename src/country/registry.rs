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

use std::{collections::BTreeMap, fs::File, io::Read, path::Path};

use log::{debug, trace, warn};
use regex::Regex;

use super::{country_record::CountryRecord, errors::RegistryError};
use crate::phoneutil::helper_constants::PLUS_SIGN;

/// Country table compiled into the binary.
const BUNDLED_COUNTRIES: &str = include_str!("../../resources/countries.yaml");

/// Read-only mapping from dialing code to [`CountryRecord`].
///
/// Every record is validated when the registry is built, so the patterns
/// derived from it always compile.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Records sorted by dialing code.
    records: BTreeMap<String, CountryRecord>,

    /// Dialing codes ordered for prefix detection: longest first, so `+1242`
    /// is tried before `+1`.
    detection_order: Vec<String>,
}

impl Registry {
    /// Builds a registry from records, keyed by their own dialing codes.
    pub fn from_records<I>(records: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = CountryRecord>,
    {
        let mut table = BTreeMap::new();
        for record in records {
            validate_record(&record)?;
            let code = record.dialing_code.clone();
            if table.insert(code.clone(), record).is_some() {
                return Err(RegistryError::DuplicateDialingCode(code));
            }
        }
        Ok(Self::from_validated(table))
    }

    /// Builds a registry from a loader's mapping. A record without its own
    /// dialing code inherits the key; otherwise key and code must agree.
    pub fn from_table(table: BTreeMap<String, CountryRecord>) -> Result<Self, RegistryError> {
        let mut validated = BTreeMap::new();
        for (key, mut record) in table {
            let key = key.trim().trim_start_matches(PLUS_SIGN).to_owned();
            if record.dialing_code.is_empty() {
                record.dialing_code = key.clone();
            } else if record.dialing_code != key {
                return Err(RegistryError::KeyMismatch {
                    key,
                    dialing_code: record.dialing_code,
                });
            }
            validate_record(&record)?;
            if validated.insert(key.clone(), record).is_some() {
                return Err(RegistryError::DuplicateDialingCode(key));
            }
        }
        Ok(Self::from_validated(validated))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        let table: BTreeMap<String, CountryRecord> = serde_yaml::from_str(yaml)?;
        Self::from_table(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RegistryError> {
        let table: BTreeMap<String, CountryRecord> = serde_yaml::from_reader(reader)?;
        Self::from_table(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        debug!("Loading country registry from {}", path.display());
        Self::from_reader(File::open(path)?)
    }

    /// The table shipped with the crate in `resources/countries.yaml`.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::from_yaml_str(BUNDLED_COUNTRIES)
    }

    fn from_validated(records: BTreeMap<String, CountryRecord>) -> Self {
        let mut detection_order: Vec<String> = records.keys().cloned().collect();
        detection_order.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        trace!("Country registry ready with {} records", records.len());
        Self {
            records,
            detection_order,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by dialing code as text.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.values()
    }

    pub fn find_by_dialing_code(&self, code: &str) -> Option<&CountryRecord> {
        self.records.get(code).or_else(|| {
            warn!("Unknown dialing code provided: {}", code);
            None
        })
    }

    /// Case-insensitive match on the 3-letter ISO code. Duplicates are not
    /// rejected at load time; the lowest dialing code wins.
    pub fn find_by_iso3(&self, iso3: &str) -> Option<&CountryRecord> {
        self.find_by(|record| record.iso3.eq_ignore_ascii_case(iso3))
            .or_else(|| {
                warn!("Unknown ISO 3166-1 alpha-3 code provided: {}", iso3);
                None
            })
    }

    pub fn find_by_iso2(&self, iso2: &str) -> Option<&CountryRecord> {
        self.find_by(|record| record.iso2.eq_ignore_ascii_case(iso2))
            .or_else(|| {
                warn!("Unknown ISO 3166-1 alpha-2 code provided: {}", iso2);
                None
            })
    }

    fn find_by<F>(&self, predicate: F) -> Option<&CountryRecord>
    where
        F: Fn(&CountryRecord) -> bool,
    {
        self.records.values().find(|record| predicate(record))
    }

    /// Finds the country whose `+<dialing code>` prefixes `raw`.
    ///
    /// When several dialing codes match, the longest one wins. Without any
    /// match the record of `fallback_code` is returned, if there is one.
    pub fn detect(&self, raw: &str, fallback_code: Option<&str>) -> Option<&CountryRecord> {
        let detected = raw.strip_prefix(PLUS_SIGN).and_then(|digits| {
            self.detection_order
                .iter()
                .find(|code| digits.starts_with(code.as_str()))
        });

        if let Some(code) = detected {
            trace!("Detected dialing code {} in '{}'", code, raw);
            return self.records.get(code);
        }

        let fallback = fallback_code
            .map(|code| code.trim().trim_start_matches(PLUS_SIGN))
            .filter(|code| !code.is_empty())?;
        debug!("No dialing code in '{}', falling back to {}", raw, fallback);
        self.find_by_dialing_code(fallback)
    }
}

fn validate_record(record: &CountryRecord) -> Result<(), RegistryError> {
    let code = &record.dialing_code;
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RegistryError::InvalidDialingCode(code.clone()));
    }
    if record.max_num_length().is_none() {
        return Err(RegistryError::InvalidMaxNumLength {
            dialing_code: code.clone(),
            value: record.max_num_length.clone(),
        });
    }
    // the area code is also searched on its own, a fragment may only compile wrapped
    let area_code = (!record.area_code.is_empty())
        .then(|| Regex::new(&record.area_code))
        .transpose();
    area_code
        .and_then(|_| Regex::new(&record.short_pattern()))
        .and_then(|_| Regex::new(&record.area_code_prefix_pattern()))
        .map_err(|err| RegistryError::InvalidAreaCode {
            dialing_code: code.clone(),
            source: err.into(),
        })?;
    Ok(())
}
