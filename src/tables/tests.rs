use std::io::Cursor;

use crate::tables::errors::LoadingError;
use crate::tables::name_table;
use crate::tables::name_table::{ALIASES_COLUMN, EMOJI_COLUMN, EXPLANATION_COLUMN, NAME_COLUMN};

#[test]
fn test_header_is_discarded() {
    let table = "emoji,category,name,aliases,explanation\n\
                 😀,smileys,grinning,grinning_face,classic smiley\n\
                 🤔,smileys,thinking,think,\n";
    let rows = name_table::parse_rows(Cursor::new(table)).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get(EMOJI_COLUMN), Some("😀"));
    assert_eq!(rows[0].get(NAME_COLUMN), Some("grinning"));
    assert_eq!(rows[0].get(ALIASES_COLUMN), Some("grinning_face"));
    assert_eq!(rows[0].get(EXPLANATION_COLUMN), Some("classic smiley"));
    assert_eq!(rows[1].get(NAME_COLUMN), Some("thinking"));
}

#[test]
fn test_quoted_fields() {
    let table = "emoji,category,name,aliases,explanation\n\
                 🐢,animals,turtle,\"turtle_face, tortoise\",\"slow, but steady\"\n";
    let rows = name_table::parse_rows(Cursor::new(table)).unwrap();

    assert_eq!(rows.len(), 1);
    // The quoted commas stay inside their fields
    assert_eq!(rows[0].get(ALIASES_COLUMN), Some("turtle_face, tortoise"));
    assert_eq!(rows[0].get(EXPLANATION_COLUMN), Some("slow, but steady"));
}

#[test]
fn test_short_rows_are_allowed() {
    // The reserved trailing fields may be missing entirely
    let table = "emoji,category,name\n\
                 😀,smileys,grinning\n";
    let rows = name_table::parse_rows(Cursor::new(table)).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(NAME_COLUMN), Some("grinning"));
    assert_eq!(rows[0].get(ALIASES_COLUMN), None);
}

#[test]
fn test_missing_table() {
    let result = name_table::load_rows("test_files/does_not_exist.csv");
    match result {
        Err(LoadingError::Io(_)) => (),
        other => panic!("Expected an IO error, got {:?}", other),
    }
}

#[test]
fn test_malformed_table() {
    // The second field is not valid UTF-8
    let table = b"emoji,category,name\n\xf0\x28\x8c\x28,smileys,grinning\n";
    let result = name_table::parse_rows(Cursor::new(&table[..]));
    match result {
        Err(LoadingError::Csv(_)) => (),
        other => panic!("Expected a parse error, got {:?}", other),
    }
}
