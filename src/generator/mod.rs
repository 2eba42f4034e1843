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
//! A module that renders validated name entries into the generated
//! `EMOJI_NAME_MAPS` Python module.
//!
//! The artifact is assembled completely in memory, in source-row order, and
//! only written out once every row has passed validation. A failing run
//! therefore never leaves a partial module behind.

/// Formatting of the explanation comment blocks
pub mod comments;
pub mod errors;

use std::fs;
use std::io;
use std::path::Path;

use csv::StringRecord;
use itertools::Itertools;

use crate::generator::errors::BuildError;
use crate::names::named_emoji::NamedEmoji;
use crate::names::registry::NameRegistry;
use crate::tables::name_table;
use crate::tables::name_table::{ALIASES_COLUMN, EMOJI_COLUMN, EXPLANATION_COLUMN, NAME_COLUMN};

/// The import line that every generated module starts with
const PREAMBLE: &str = "from typing import Any, Dict";
/// The declaration that opens the mapping literal.
/// The name is fixed, other tooling imports the mapping under it.
const DECLARATION: &str = "EMOJI_NAME_MAPS: Dict[str, Any] = {";
/// Entry lines that reach this length get an ignore marker appended,
/// so that line length linters leave the generated module alone
const MAX_LINE_LENGTH: usize = 110;
const IGNORE_LONG_LINE: &str = "    # ignorelongline";

/// Generates the complete name mapping module for a name table.
///
/// The names are validated row by row against one fresh [NameRegistry];
/// the first offending name aborts the whole run.
pub fn generate<R: io::Read>(reader: R) -> Result<String, BuildError> {
    let rows = name_table::parse_rows(reader)?;
    generate_from_rows(&rows)
}

/// Generates the module text from rows that have already been loaded.
pub fn generate_from_rows(rows: &[StringRecord]) -> Result<String, BuildError> {
    let mut registry = NameRegistry::new();
    let mut entries = String::new();

    for row in rows {
        let emoji = NamedEmoji::new(
            row.get(EMOJI_COLUMN).unwrap_or_default(),
            row.get(NAME_COLUMN).unwrap_or_default(),
            row.get(ALIASES_COLUMN).unwrap_or_default(),
            row.get(EXPLANATION_COLUMN).unwrap_or_default(),
            &mut registry,
        )?;
        entries.push_str(&render_entry(&emoji));
    }

    info!("Generated entries for {} emojis ({} names)", rows.len(), registry.len());
    Ok(format!("{}\n\n{}{}\n}}\n", PREAMBLE, DECLARATION, entries))
}

/// Reads the name table at `input` and writes the generated module to
/// `output`.
///
/// The output file is only touched on the success path, after the whole
/// module has been assembled.
pub fn write_name_maps<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<(), BuildError> {
    let rows = name_table::load_rows(input)?;
    let artifact = generate_from_rows(&rows)?;
    fs::write(output, artifact)?;
    Ok(())
}

/// Renders the fragment for one entry: the explanation comment block (if
/// there is an explanation) followed by the entry line.
///
/// Disabled entries keep their line in the artifact, but commented out, so
/// they stay searchable without being part of the mapping.
pub fn render_entry(emoji: &NamedEmoji) -> String {
    let comment = comments::format_explanation(&emoji.explanation);
    let aliases = render_aliases(&emoji.aliases);

    let mut fragment = if emoji.is_disabled() {
        format!(
            "{}\n    # '{}': {{'canonical_name': '{}', 'aliases': {}}},",
            comment, emoji.canonical_name, emoji.canonical_name, aliases
        )
    } else {
        format!(
            "{}\n    '{}': {{'canonical_name': '{}', 'aliases': {}}},",
            comment, emoji.emoji, emoji.canonical_name, aliases
        )
    };

    // Only the entry line itself counts here, not the comment lines above it
    let line_length = fragment
        .lines()
        .last()
        .unwrap_or_default()
        .chars()
        .count();
    if line_length >= MAX_LINE_LENGTH {
        fragment.push_str(IGNORE_LONG_LINE);
    }
    fragment
}

/// Renders the alias sequence as a Python list literal
fn render_aliases(aliases: &[String]) -> String {
    format!(
        "[{}]",
        aliases.iter().map(|alias| format!("'{}'", alias)).join(", ")
    )
}
