/*!
 * Tests for application configuration functionality
 */

use log::LevelFilter;
use std::path::PathBuf;

use fixstart::app_config::{Config, Dataset, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.dataset, Dataset::ReadAndComplete);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.data_path(), PathBuf::from("./dataReadAndComplete.json"));
}

#[test]
fn test_dataset_path_withFillInTheBlanks_shouldPointToItsFile() {
    assert_eq!(
        Dataset::FillInTheBlanks.path(),
        PathBuf::from("./dataFillIntheBlanks.json")
    );
    assert_eq!(Dataset::FillInTheBlanks.to_string(), "Fill in the Blanks");
}

#[test]
fn test_config_deserialize_withKebabCaseDataset_shouldParse() {
    let config: Config =
        serde_json::from_str(r#"{"dataset": "fill-in-the-blanks", "log_level": "debug"}"#).unwrap();

    assert_eq!(config.dataset, Dataset::FillInTheBlanks);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_config_deserialize_withEmptyObject_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_logLevel_intoLevelFilter_shouldMapEachLevel() {
    assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
    assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::Info);
    assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
}
