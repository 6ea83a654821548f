//! Parsing, splitting and formatting of phone numbers written in loose
//! human notations.
//!
//! Raw input goes through extension extraction, normalization and country
//! detection, then is split into country code, area code and subscriber
//! number against a [`Registry`] of countries. The resulting
//! [`PhoneNumber`] renders back to text through named presets or custom
//! `%`-templates.
//!
//! ```
//! use rphone::{PhoneUtil, Registry};
//!
//! let registry = Registry::from_yaml_str(r#"
//! '385':
//!   name: Croatia
//!   char_3_code: HRV
//!   area_code: '91'
//!   max_num_length: '7'
//! "#).unwrap();
//! let util = PhoneUtil::new(registry);
//!
//! let phone = util.parse("+385 91 512 5486 x148").unwrap().unwrap();
//! assert_eq!(phone.area_code(), "91");
//! assert_eq!(phone.render("europe"), "+385 (0) 91 512 5486");
//! assert_eq!(phone.extension(), "148");
//! ```

pub mod country;
mod phoneutil;
mod regexp_cache;

/// Small macros for the regex replace boilerplate repeated across the
/// pipeline.
mod macros;

#[cfg(test)]
mod tests;

pub use country::{CountryFormats, CountryRecord, Registry, RegistryError};
pub use phoneutil::{
    Defaults, NamedFormat, NumberFormatKind, NumberParts, PHONE_UTIL, PhoneNumber,
    errors::{ParseError, ValidationError, ValidationErrors},
    extract_extension, normalize,
    phoneutil::{PhoneUtil, SplitNumber},
};
pub use regexp_cache::InvalidRegexError;
