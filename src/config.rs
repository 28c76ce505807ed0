//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::engine::SessionConfig;
use crate::types::{BOT_THINK_MS, RESULT_CLEAR_MS, ROLL_REVEAL_MS, TURN_HANDOFF_MS};

/// Terminal ten-pin bowling against a bot
#[derive(Parser, Debug, Clone)]
#[command(name = "neon-bowl")]
#[command(about = "Terminal ten-pin bowling: you against the machine")]
#[command(version)]
pub struct Args {
    /// Name shown on the human player's sheet
    #[arg(long, env = "NEON_BOWL_NAME", default_value = "YOU")]
    pub name: String,

    /// Name shown on the bot's sheet
    #[arg(long, env = "NEON_BOWL_BOT_NAME", default_value = "BOT")]
    pub bot_name: String,

    /// Seed for the bot's rolls (defaults to the system clock)
    #[arg(long, env = "NEON_BOWL_SEED")]
    pub seed: Option<u32>,

    /// Ball travel time before a roll lands, in milliseconds
    #[arg(long, env = "NEON_BOWL_REVEAL_MS", default_value_t = ROLL_REVEAL_MS)]
    pub reveal_ms: u32,

    /// How long the call-out stays on the lane, in milliseconds
    #[arg(long, env = "NEON_BOWL_CLEAR_MS", default_value_t = RESULT_CLEAR_MS)]
    pub clear_ms: u32,

    /// Input hold after the turn passes, in milliseconds
    #[arg(long, env = "NEON_BOWL_HANDOFF_MS", default_value_t = TURN_HANDOFF_MS)]
    pub handoff_ms: u32,

    /// Bot think time before each roll, in milliseconds
    #[arg(long, env = "NEON_BOWL_BOT_THINK_MS", default_value_t = BOT_THINK_MS)]
    pub bot_think_ms: u32,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, env = "NEON_BOWL_LOG")]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "NEON_BOWL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            reveal_ms: self.reveal_ms,
            clear_ms: self.clear_ms,
            handoff_ms: self.handoff_ms,
            bot_think_ms: self.bot_think_ms,
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            file: self.log_file.clone(),
            level: self.log_level.clone(),
        }
    }

    /// Explicit seed, or one derived from the clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
