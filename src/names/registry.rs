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
//! The registry that keeps names unique across one whole generation run.

use std::collections::HashSet;

use regex::Regex;

use crate::names::errors::NameError;

/// Names consist of lowercase letters, digits, underscores and dashes,
/// with an optional leading `+` or `-` (for entries like `+1`/`-1`)
fn name_regex() -> &'static Regex {
    lazy_static! {
        static ref NAME_REGEX: Regex = Regex::new(r"^[+-]?[a-z0-9_-]+$").unwrap();
    }
    &*NAME_REGEX
}

/// The set of names that have already been claimed by earlier entries.
///
/// One registry covers exactly one generation run; it is constructed by the
/// run that owns it and never shared between runs or test cases.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    /// Creates a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `name` is well-formed and unused, then claims it.
    ///
    /// The format is checked before uniqueness, so a name that fails both
    /// is reported as invalid rather than as a duplicate.
    ///
    /// # Examples
    /// ```
    /// use emoji_name_builder::names::registry::NameRegistry;
    ///
    /// let mut registry = NameRegistry::new();
    /// assert!(registry.register("thinking").is_ok());
    /// // The second claim on the same name fails
    /// assert!(registry.register("thinking").is_err());
    /// ```
    pub fn register(&mut self, name: &str) -> Result<(), NameError> {
        if !name_regex().is_match(name) {
            return Err(NameError::InvalidName(name.to_owned()));
        }
        if !self.names.insert(name.to_owned()) {
            return Err(NameError::DuplicateName(name.to_owned()));
        }
        Ok(())
    }

    /// Whether a name has already been claimed
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The number of claimed names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no name has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
