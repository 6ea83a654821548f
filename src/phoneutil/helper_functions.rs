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

use regex::Captures;

use super::{
    helper_constants::{BLANK_CHARS, PLUS_SIGN},
    phone_regexps::REG_EXPS,
};
use crate::macros::owned_from_cow_or;

/// Splits a trailing extension off `raw`.
///
/// Returns the text before the extension marker and the extension digits.
/// Must run on the raw input: normalization would strip the marker.
///
/// ```
/// let (rest, extension) = rphone::extract_extension("+385915125486 ext. 148");
/// assert_eq!(rest, "+385915125486 ");
/// assert_eq!(extension, "148");
/// ```
pub fn extract_extension(raw: &str) -> (&str, String) {
    let Some(captures) = REG_EXPS.extension_pattern.captures(raw) else {
        return (raw, String::new());
    };
    let start = captures.get(0).map_or(raw.len(), |suffix| suffix.start());
    let extension = captures
        .get(1)
        .map(|run| run.as_str().chars().filter(char::is_ascii_digit).collect())
        .unwrap_or_default();

    (&raw[..start], extension)
}

/// Canonical replacement of a single noise match. Anything without an
/// entry (punctuation, spacing, a lone leading trunk zero) is dropped.
fn noise_replacement(noise: &str) -> &'static str {
    match noise {
        "(0)" | "00" | "+00" | "+0" => PLUS_SIGN,
        _ => "",
    }
}

/// Collapses the different ways of writing an international prefix into a
/// single `+` and drops all punctuation, leaving an optional leading `+`
/// followed by digits.
///
/// Every pass only shortens the text and passes repeat until nothing
/// changes, so `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let mut normalized: String = dec_from_char::normalize_decimals(s).into();
    loop {
        let mut next = REG_EXPS
            .noise_pattern
            .replace_all(&normalized, |captures: &Captures| noise_replacement(&captures[0]))
            .into_owned();
        drop_inner_plus(&mut next);
        if next == normalized {
            break;
        }
        normalized = next;
    }
    normalized
}

/// Removes every `+` except a leading one, e.g. the one a `(0)` turns into
/// after the country code.
fn drop_inner_plus(normalized: &mut String) {
    let tail_start = usize::from(normalized.starts_with(PLUS_SIGN));
    if normalized[tail_start..].contains(PLUS_SIGN) {
        let tail = normalized[tail_start..].replace(PLUS_SIGN, "");
        normalized.truncate(tail_start);
        normalized.push_str(&tail);
    }
}

/// Collapses a doubled plus at the very start of a rendered number.
pub(crate) fn remove_useless_plus(formatted: String) -> String {
    owned_from_cow_or!(
        REG_EXPS.doubled_plus_pattern.replace(&formatted, PLUS_SIGN),
        formatted
    )
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim_matches(BLANK_CHARS).is_empty()
}
