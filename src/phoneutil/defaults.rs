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

use std::sync::{PoisonError, RwLock};

use log::debug;

/// Values used for a country or area code the input did not provide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    country_code: Option<String>,
    area_code: Option<String>,
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn with_area_code(mut self, code: impl Into<String>) -> Self {
        self.area_code = Some(code.into());
        self
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn area_code(&self) -> Option<&str> {
        self.area_code.as_deref()
    }
}

/// Defaults shared by every caller of one [`PhoneUtil`](super::PhoneUtil).
///
/// Readers get a snapshot; writers replace a single field. A reader never
/// sees a half-written value, but nothing orders a write against readers
/// running at the same time.
#[derive(Debug, Default)]
pub(crate) struct SharedDefaults {
    inner: RwLock<Defaults>,
}

impl SharedDefaults {
    pub fn snapshot(&self) -> Defaults {
        // writes are single assignments, a poisoned lock still holds a whole value
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_country_code(&self, code: String) {
        debug!("Default country code set to '{}'", code);
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .country_code = Some(code);
    }

    pub fn set_area_code(&self, code: String) {
        debug!("Default area code set to '{}'", code);
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .area_code = Some(code);
    }
}
