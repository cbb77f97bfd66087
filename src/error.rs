// Copyright (c) 2026 rezky_nightky

use std::io;

/// Everything that can stop the rain early. None of these are retried: each
/// one means the terminal or the configuration is unusable.
#[derive(Debug, thiserror::Error)]
pub enum RainError {
    #[error("failed to set up the terminal: {0}")]
    RawMode(#[source] io::Error),

    #[error("failed to query terminal size: {0}")]
    TerminalSize(#[source] io::Error),

    #[error("failed to install signal handlers: {0}")]
    Signals(#[source] io::Error),

    #[error("failed to apply {name} {value} ({reason})")]
    InvalidOption {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("glyph set must contain at least one character")]
    EmptyGlyphSet,

    #[error("unknown preset: {0} (see --list-presets)")]
    UnknownPreset(String),

    #[error("failed to open log file: {0}")]
    Logging(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RainError>;
