/*!
 * Tests for loading and saving exercise files
 */

use anyhow::Result;
use std::fs;

use fixstart::errors::DocumentError;
use fixstart::exercise::Document;
use fixstart::exercise_store::ExerciseStore;
use crate::common;

#[test]
fn test_load_withMissingFile_shouldReturnNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let store = ExerciseStore::new(temp_dir.path().join("missing.json"));

    let err = store.load().unwrap_err();

    assert!(matches!(err, DocumentError::NotFound { .. }));
    assert!(err.is_load_error());
    Ok(())
}

#[test]
fn test_load_withInvalidJson_shouldReturnMalformed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "[{\"difficulty\": ")?;

    let err = ExerciseStore::new(&path).load().unwrap_err();

    assert!(matches!(err, DocumentError::Malformed { .. }));
    Ok(())
}

#[test]
fn test_load_withScalarDocument_shouldReturnUnsupportedShape() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "scalar.json", "17")?;

    let err = ExerciseStore::new(&path).load().unwrap_err();

    assert!(matches!(err, DocumentError::UnsupportedShape { .. }));
    Ok(())
}

#[test]
fn test_load_withArray_shouldKeepAllEntries() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "data.json", common::sample_exercises())?;

    let doc = ExerciseStore::new(&path).load()?;

    assert!(matches!(doc, Document::Many(_)));
    assert_eq!(doc.len(), 3);
    Ok(())
}

#[test]
fn test_save_withUnchangedDocument_shouldReproduceInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "data.json", common::sample_exercises())?;
    let store = ExerciseStore::new(&path);

    let doc = store.load()?;
    store.save(&doc)?;

    assert_eq!(fs::read_to_string(&path)?, common::sample_exercises());
    Ok(())
}

#[test]
fn test_save_shouldKeepKeyOrderAndUnicode() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = "{\n  \"zeta\": \"ñandú\",\n  \"alpha\": 1\n}";
    let path = common::create_test_file(temp_dir.path(), "single.json", input)?;
    let store = ExerciseStore::new(&path);

    let doc = store.load()?;
    store.save(&doc)?;

    assert_eq!(fs::read_to_string(&path)?, input);
    Ok(())
}

#[test]
fn test_save_withOversizedIntegers_shouldKeepTheirDigits() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = "{\n  \"id\": 18446744073709551616,\n  \"difficulty\": \"easy\",\n  \"weight\": 0.10000000000000000001\n}";
    let path = common::create_test_file(temp_dir.path(), "big.json", input)?;
    let store = ExerciseStore::new(&path);

    let doc = store.load()?;
    store.save(&doc)?;

    assert_eq!(fs::read_to_string(&path)?, input);
    Ok(())
}

#[test]
fn test_save_withMissingDirectory_shouldReturnUnwritable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let store = ExerciseStore::new(temp_dir.path().join("no_such_dir").join("out.json"));
    let doc = common::document(serde_json::json!({"difficulty": "easy"}));

    let err = store.save(&doc).unwrap_err();

    assert!(matches!(err, DocumentError::Unwritable { .. }));
    assert!(!err.is_load_error());
    assert!(std::error::Error::source(&err).is_some());
    Ok(())
}
