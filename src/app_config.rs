use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module holds the runtime settings of a fix run. The exercise files
/// live at fixed locations next to the web app, so the configuration only
/// picks which of them to process.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Exercise data set to process
    #[serde(default)]
    pub dataset: Dataset,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Location of the exercise file this run rewrites
    pub fn data_path(&self) -> PathBuf {
        self.dataset.path()
    }
}

/// Exercise data files shipped with the exercise app
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    // @dataset: Read and complete exercises
    #[default]
    ReadAndComplete,
    // @dataset: Fill in the blanks exercises
    FillInTheBlanks,
}

impl Dataset {
    // @returns: File name of the data set
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::ReadAndComplete => "dataReadAndComplete.json",
            Self::FillInTheBlanks => "dataFillIntheBlanks.json",
        }
    }

    // @returns: Path relative to the working directory
    pub fn path(&self) -> PathBuf {
        PathBuf::from(".").join(self.file_name())
    }

    // @returns: Human readable name
    pub fn display_name(&self) -> &str {
        match self {
            Self::ReadAndComplete => "Read and Complete",
            Self::FillInTheBlanks => "Fill in the Blanks",
        }
    }
}

// Implement Display trait for Dataset
impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
