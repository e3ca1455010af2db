//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Output format for log lines on stderr.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize tracing. Safe to call multiple times.
///
/// Logs always go to stderr: stdout carries the MCP protocol.
pub fn init(format: LogFormat) {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true);

        let result = if is_test {
            builder.compact().with_test_writer().try_init()
        } else {
            match format {
                LogFormat::Text => builder.compact().with_writer(std::io::stderr).try_init(),
                LogFormat::Json => builder.json().with_writer(std::io::stderr).try_init(),
            }
        };

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e)
        }
    });
}
