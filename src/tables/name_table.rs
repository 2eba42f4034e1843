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
//! A module that reads the emoji name table, a comma-separated file with one
//! row per emoji and a header row that only exists for human readers.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;

use crate::tables::errors::LoadingError;

/// The field that contains the emoji itself
pub const EMOJI_COLUMN: usize = 0;
/// The field that contains the canonical name
pub const NAME_COLUMN: usize = 2;
/// The field that contains the comma-separated alias list
pub const ALIASES_COLUMN: usize = 3;
/// The field that contains the free-text explanation
pub const EXPLANATION_COLUMN: usize = 4;

/// Reads all rows of a name table, with the header row discarded.
///
/// The rows are returned raw; which names are acceptable is not this
/// module's business. Rows may carry additional fields beyond the known
/// ones (they are reserved for other tooling) and may omit trailing fields.
pub fn parse_rows<R: io::Read>(reader: R) -> Result<Vec<StringRecord>, LoadingError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        debug!("Parsed row: {:?}", record);
        rows.push(record);
    }
    Ok(rows)
}

/// Opens the name table at `path` and reads all of its rows.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<StringRecord>, LoadingError> {
    let file = File::open(path)?;
    parse_rows(file)
}
