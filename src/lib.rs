/*!
 * # fixstart - hint recomputation for word-completion exercises
 *
 * Rewrites the `start` field (number of letters revealed as a hint) of every
 * answer in the "medium" exercises of an exercise data file, deriving it from
 * the word length.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `hints`: Word length to visible letters lookup table
 * - `exercise`: Exercise document model over raw JSON
 * - `fixer`: Walks exercises and patches answer hints
 * - `exercise_store`: Loading and saving exercise files
 * - `file_utils`: File system operations
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod exercise;
pub mod exercise_store;
pub mod file_utils;
pub mod fixer;
pub mod hints;

// Re-export main types for easier usage
pub use app_config::{Config, Dataset};
pub use errors::DocumentError;
pub use exercise::{Answer, Document, Record};
pub use fixer::{FixStats, fix_document};
pub use hints::visible_letters;
