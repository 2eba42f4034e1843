/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! The main data struct for one entry of the name table.

use crate::names::errors::NameError;
use crate::names::registry::NameRegistry;

/// A struct that holds the name information for one particular emoji,
/// normalized from a raw table row.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct NamedEmoji {
    /// The emoji itself, as it appears in the source table
    pub emoji: String,
    /// The primary identifier for this emoji
    pub canonical_name: String,
    /// Alternate identifiers that map to the same emoji
    pub aliases: Vec<String>,
    /// A free-text explanation that ends up as a comment in the
    /// generated module
    pub explanation: String,
}

impl NamedEmoji {
    /// The canonical name that marks an entry as disabled.
    /// Disabled entries are emitted in commented-out form and are exempt
    /// from the name format and uniqueness checks.
    pub const DISABLED: &'static str = "X";

    /// Builds a validated entry from the raw table fields.
    ///
    /// Every name (the canonical one first, then the aliases in their
    /// listed order) is checked against the name pattern and claimed in the
    /// registry before the next one is looked at, so the earliest offending
    /// name is the one that gets reported.
    ///
    /// # Examples
    /// ```
    /// use emoji_name_builder::names::named_emoji::NamedEmoji;
    /// use emoji_name_builder::names::registry::NameRegistry;
    ///
    /// let mut registry = NameRegistry::new();
    /// let grinning = NamedEmoji::new("😀", "grinning", "grinning_face", "classic smiley", &mut registry).unwrap();
    ///
    /// assert_eq!(grinning.aliases, vec![String::from("grinning_face")]);
    /// assert!(registry.contains("grinning"));
    /// assert!(registry.contains("grinning_face"));
    /// ```
    pub fn new(
        emoji: &str,
        canonical_name: &str,
        raw_aliases: &str,
        explanation: &str,
        registry: &mut NameRegistry,
    ) -> Result<NamedEmoji, NameError> {
        let aliases = parse_aliases(raw_aliases);

        // Disabled entries are not fact-checked, their names stay out of
        // the registry entirely
        if canonical_name != Self::DISABLED {
            registry.register(canonical_name)?;
            for alias in &aliases {
                registry.register(alias)?;
            }
        }

        Ok(NamedEmoji {
            emoji: emoji.to_owned(),
            canonical_name: canonical_name.to_owned(),
            aliases,
            explanation: explanation.to_owned(),
        })
    }

    /// Whether this entry carries the disabled-marker as its canonical name
    pub fn is_disabled(&self) -> bool {
        self.canonical_name == Self::DISABLED
    }
}

/// Splits the comma-separated alias field into single aliases.
/// An empty field yields no aliases at all.
fn parse_aliases(raw_aliases: &str) -> Vec<String> {
    if raw_aliases.is_empty() {
        Vec::new()
    } else {
        raw_aliases
            .split(',')
            .map(|alias| alias.trim().to_owned())
            .collect()
    }
}
