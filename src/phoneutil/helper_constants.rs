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

pub const PLUS_SIGN: &'static str = "+";
/// Stands in for the international prefix once the country code is removed.
pub const TRUNK_ZERO: &'static str = "0";

// A trailing extension: one or more marker tokens, any non-digit filler,
// then a run of digits and hyphens, optionally closed by '#'. The run is
// the only capturing group.
pub const EXTENSION_PATTERN: &'static str = r"(?i)(?:ext|ex|x|xt|#|:)+[^0-9]*([-0-9]+)*#?$";

// Everything that is not part of the canonical "+digits" form: a
// parenthesized trunk zero, any character except digits and '+', and a
// leading international or trunk prefix.
pub const NOISE_PATTERN: &'static str = r"\(0\)|[^0-9+]|^\+?00?";

pub const FORMAT_TOKEN_PATTERN: &'static str = "%[caAnflx]";

// "+ +" or "++" left at the start when a country code that already carries
// its plus is rendered after a literal one.
pub const DOUBLED_PLUS_PATTERN: &'static str = r"^(?:\+ \+|\+\+)";

/// Length of the first printable half of the subscriber number.
pub const DEFAULT_FIRST_SEGMENT_LEN: usize = 3;

pub const BLANK_CHARS: &'static [char] = &['\t', ' ', '\n'];
