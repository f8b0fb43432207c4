//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

use crate::{services::Alarm, state::HardnessOption};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "egg-timer")]
#[command(about = "A state-managed HTTP daemon that times boiled eggs")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Sound file played when the eggs are done
    #[arg(short, long, default_value = "alarm_sound.mp3")]
    pub alarm: PathBuf,

    /// Ring the terminal bell instead of playing the alarm sound
    #[arg(long, conflicts_with = "silent")]
    pub bell: bool,

    /// Do not sound any alarm
    #[arg(long)]
    pub silent: bool,

    /// Start a countdown right away (soft, medium or hard)
    #[arg(short, long)]
    pub select: Option<HardnessOption>,

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

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Alarm selected by the flags
    pub fn alarm(&self) -> Alarm {
        if self.silent {
            Alarm::Silent
        } else if self.bell {
            Alarm::Bell
        } else {
            Alarm::Sound(self.alarm.clone())
        }
    }
}
