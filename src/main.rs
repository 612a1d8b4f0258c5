// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;

use fixstart::app_config::{self, Config, Dataset};
use fixstart::app_controller::Controller;

/// CLI Wrapper for Dataset to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDataset {
    ReadAndComplete,
    FillInTheBlanks,
}

impl From<CliDataset> for Dataset {
    fn from(cli_dataset: CliDataset) -> Self {
        match cli_dataset {
            CliDataset::ReadAndComplete => Dataset::ReadAndComplete,
            CliDataset::FillInTheBlanks => Dataset::FillInTheBlanks,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for fixstart
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// fixstart - recompute answer hints of medium exercises
///
/// Rewrites the `start` value of every answer in the exercises tagged
/// "medium" from the length of the answer word, in place.
#[derive(Parser, Debug)]
#[command(name = "fixstart")]
#[command(version)]
#[command(about = "Recompute visible-letter hints of medium exercises")]
#[command(long_about = "fixstart rewrites the exercise data file in the current directory, setting
the number of visible letters of each answer in the medium exercises from the
length of the answer word.

EXAMPLES:
    fixstart                                # Fix ./dataReadAndComplete.json
    fixstart --dataset fill-in-the-blanks   # Fix ./dataFillIntheBlanks.json
    fixstart --log-level debug              # Show every changed answer
    fixstart completions bash > fixstart.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Exercise data set to rewrite
    #[arg(short, long, value_enum, default_value = "read-and-complete")]
    dataset: CliDataset,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "fixstart", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config {
        dataset: cli.dataset.into(),
        log_level: cli.log_level.map(Into::into).unwrap_or_default(),
    };

    CustomLogger::init(config.log_level.into())?;
    debug!("Effective configuration: {:?}", config);

    let controller = Controller::with_config(config);
    let stats = controller.run()?;

    for line in stats.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}
