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

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Preset templates selectable by name when rendering a number.
///
/// Templates are made of placeholders:
/// - `%c` country code
/// - `%a` area code, `%A` area code with a leading trunk `0`
/// - `%n` subscriber number
/// - `%f` / `%l` first and last segment of the subscriber number
/// - `%x` extension
///
/// For `+385 91 512 5486` the presets produce:
/// - **default**: `+385915125486`
/// - **default_with_extension**: `+385915125486148` with extension `148`
/// - **europe**: `+385 (0) 91 512 5486`
/// - **us**: `(91) 512-5486`
#[derive(Debug, EnumIter, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum NamedFormat {
    Default,
    DefaultWithExtension,
    Europe,
    Us,
}

impl NamedFormat {
    pub fn template(self) -> &'static str {
        match self {
            NamedFormat::Default => "+%c%a%n",
            NamedFormat::DefaultWithExtension => "+%c%a%n%x",
            NamedFormat::Europe => "+%c (0) %a %f %l",
            NamedFormat::Us => "(%a) %f-%l",
        }
    }

    /// Looks a preset up by its snake_case name, e.g. `default_with_extension`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|format| format.as_ref() == name)
    }
}

/// Structural classification of a number once its country code has been
/// replaced by a trunk zero.
#[derive(Debug, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum NumberFormatKind {
    /// An area code followed by the subscriber number, e.g. `047451588`.
    Short,
    /// The subscriber number alone, e.g. `451588`.
    ReallyShort,
}

#[cfg(test)]
mod tests {
    use super::{NamedFormat, NumberFormatKind};

    #[test]
    fn presets_resolve_by_name() {
        assert_eq!(NamedFormat::from_name("default"), Some(NamedFormat::Default));
        assert_eq!(
            NamedFormat::from_name("default_with_extension"),
            Some(NamedFormat::DefaultWithExtension)
        );
        assert_eq!(NamedFormat::from_name("europe"), Some(NamedFormat::Europe));
        assert_eq!(NamedFormat::from_name("us"), Some(NamedFormat::Us));
        assert_eq!(NamedFormat::from_name("Europe"), None);
        assert_eq!(NamedFormat::from_name("+%c%n"), None);
    }

    #[test]
    fn kinds_have_snake_case_names() {
        assert_eq!(NumberFormatKind::Short.as_ref(), "short");
        assert_eq!(NumberFormatKind::ReallyShort.as_ref(), "really_short");
    }
}
