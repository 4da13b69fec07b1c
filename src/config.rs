//! Configuration and CLI argument handling

use clap::Parser;

use crate::locale::Locale;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "focus-timer")]
#[command(about = "A focus-timer service with an isolated tick source and HTTP controls")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "25252")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Focus interval length in minutes
    #[arg(short, long, default_value = "25")]
    pub work_minutes: u64,

    /// Display language for user-visible strings
    #[arg(short, long, value_enum, default_value = "en")]
    pub locale: Locale,

    /// Command used to play the completion sound
    #[arg(long, default_value = "paplay")]
    pub sound_player: String,

    /// Sound file played when the countdown completes
    #[arg(long, default_value = "/usr/share/sounds/freedesktop/stereo/complete.oga")]
    pub sound_file: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Focus interval length in seconds
    pub fn work_seconds(&self) -> u64 {
        self.work_minutes * 60
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
