use clap::{Parser, ValueEnum};
use connect4::DrawPolicy;

/// Two-player Connect 4 in the terminal
#[derive(Parser, Debug)]
#[command(name = "connect4")]
#[command(version)]
pub struct Cli {
    /// What a full board without a winner means
    #[arg(long, value_enum, default_value_t = DrawMode::Declare)]
    pub draw_policy: DrawMode,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DrawMode {
    /// End the game as a draw
    Declare,
    /// Keep prompting; every column is refused
    Ignore,
}

impl From<DrawMode> for DrawPolicy {
    fn from(mode: DrawMode) -> Self {
        match mode {
            DrawMode::Declare => DrawPolicy::Declare,
            DrawMode::Ignore => DrawPolicy::Ignore,
        }
    }
}
