//! # DebugKit Logging
//!
//! Tracing subscriber setup shared by DebugKit consumers and tests.
//!
//! The toolkit's library crates emit diagnostics through `tracing`; this
//! crate wires those diagnostics to an output. Console output defaults to
//! JSONL for log aggregation; development mode switches to human-readable
//! pretty output, and file output with rotation is available for
//! long-running sessions.
//!
//! # Quick Start
//!
//! ```ignore
//! use debugkit_logging::{DebugKitSubscriberBuilder, LogConfig};
//!
//! // Simple setup with defaults (JSONL to console)
//! DebugKitSubscriberBuilder::new().init();
//!
//! // Development mode with pretty human-readable output
//! DebugKitSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```

pub mod config;

pub use config::{ConsoleConfig, FileConfig, LogConfig, RotationStrategy};
pub use tracing_appender::rolling::Rotation;

use std::fs::{self, File};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation as AppenderRotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Builder for configuring and initializing the DebugKit logging subscriber.
pub struct DebugKitSubscriberBuilder {
    config: LogConfig,
}

impl DebugKitSubscriberBuilder {
    /// Create a new subscriber builder with default configuration.
    ///
    /// Default: JSONL output to console.
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration.
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output.
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Initialize the subscriber globally.
    ///
    /// Returns a guard that must be kept alive for the duration of the
    /// program when file output is configured.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been set.
    pub fn init(self) -> Option<WorkerGuard> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let registry = Registry::default().with(env_filter);

        let file_writer = self.config.file.as_ref().map(create_file_writer);

        // Separate match arms for pretty vs JSONL console to satisfy the
        // type system.
        match (
            self.config.console.enabled,
            self.config.console.pretty,
            file_writer,
        ) {
            (true, true, Some((non_blocking, guard))) => {
                let console_layer = tracing_subscriber::fmt::layer()
                    .with_ansi(self.config.console.ansi)
                    .with_target(true);
                let file_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking);
                registry.with(console_layer).with(file_layer).init();
                Some(guard)
            }
            (true, false, Some((non_blocking, guard))) => {
                let console_layer = tracing_subscriber::fmt::layer().json();
                let file_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking);
                registry.with(console_layer).with(file_layer).init();
                Some(guard)
            }
            (false, _, Some((non_blocking, guard))) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking);
                registry.with(file_layer).init();
                Some(guard)
            }
            (true, true, None) => {
                let console_layer = tracing_subscriber::fmt::layer()
                    .with_ansi(self.config.console.ansi)
                    .with_target(true);
                registry.with(console_layer).init();
                None
            }
            (true, false, None) => {
                let console_layer = tracing_subscriber::fmt::layer().json();
                registry.with(console_layer).init();
                None
            }
            (false, _, None) => {
                registry.init();
                None
            }
        }
    }
}

impl Default for DebugKitSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Truncates for Never rotation, appends for the rolling strategies.
fn create_file_writer(file_config: &FileConfig) -> (NonBlocking, WorkerGuard) {
    match file_config.rotation {
        RotationStrategy::Never => {
            fs::create_dir_all(&file_config.directory).ok();
            let file_path = file_config
                .directory
                .join(format!("{}.log", file_config.prefix));
            let file = File::create(&file_path).expect("Failed to create log file");
            tracing_appender::non_blocking(file)
        }
        RotationStrategy::Daily => {
            let appender = RollingFileAppender::new(
                AppenderRotation::DAILY,
                &file_config.directory,
                &file_config.prefix,
            );
            tracing_appender::non_blocking(appender)
        }
        RotationStrategy::Hourly => {
            let appender = RollingFileAppender::new(
                AppenderRotation::HOURLY,
                &file_config.directory,
                &file_config.prefix,
            );
            tracing_appender::non_blocking(appender)
        }
    }
}
