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
//! Formatting of the free-text explanations into comment blocks.

use textwrap::word_splitters::WordSplitter;
use textwrap::{wrap, Options};

/// The column width the explanation text is wrapped to, before the comment
/// prefix is added
const COMMENT_WIDTH: usize = 80;
/// Every wrapped line gets this prefix, the first one included
const COMMENT_PREFIX: &str = "\n    # ";

/// Formats an explanation into the comment block that precedes the entry
/// line in the generated module.
///
/// An empty explanation yields an empty block. Anything else is trimmed and
/// word-wrapped; words are never split and hyphens are not treated as break
/// points, so names like `e-mail` survive wrapping in one piece.
///
/// # Examples
/// ```
/// use emoji_name_builder::generator::comments::format_explanation;
///
/// assert_eq!(format_explanation(""), "");
/// assert_eq!(format_explanation("classic smiley"), "\n    # classic smiley");
/// ```
pub fn format_explanation(explanation: &str) -> String {
    if explanation.is_empty() {
        return String::new();
    }
    // An explanation of only whitespace wraps to nothing
    let explanation = explanation.trim();
    if explanation.is_empty() {
        return String::new();
    }

    let options = Options::new(COMMENT_WIDTH)
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation);
    wrap(explanation, options)
        .iter()
        .map(|line| format!("{}{}", COMMENT_PREFIX, line))
        .collect()
}
