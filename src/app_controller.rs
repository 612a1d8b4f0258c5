use log::{debug, error, info};
use std::path::Path;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::exercise_store::ExerciseStore;
use crate::fixer::{self, FixStats};

// @module: Application controller for hint recomputation

/// Main application controller: load, fix, save
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Run the fix on the configured data set
    pub fn run(&self) -> Result<FixStats, AppError> {
        info!("Processing {} exercises", self.config.dataset);
        self.run_on(self.config.data_path())
    }

    /// Run the fix on an explicit file.
    ///
    /// Nothing is written when loading fails. The file is rewritten even when
    /// no answer changed.
    pub fn run_on<P: AsRef<Path>>(&self, path: P) -> Result<FixStats, AppError> {
        let store = ExerciseStore::new(path.as_ref());

        let mut document = store.load()?;

        let stats = fixer::fix_document(&mut document);
        debug!(
            "{} medium exercise(s), {} answer(s) changed",
            stats.medium_exercises, stats.updated_words
        );

        if let Err(e) = store.save(&document) {
            error!("Exercise file {:?} may be left incomplete", store.path());
            return Err(e.into());
        }

        Ok(stats)
    }
}
