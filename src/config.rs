// Copyright (c) 2026 rezky_nightky

use std::fmt::Display;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::charset::{GlyphSet, DEFAULT_GLYPHS, PRESETS};
use crate::error::{RainError, Result};
use crate::style::Theme;

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "digirain",
    about = "Falling glyph rain for the terminal. Press q to quit.",
    disable_version_flag = true
)]
pub struct Args {
    #[arg(
        short = 'f',
        long = "fps",
        default_value_t = 6,
        help_heading = "PERFORMANCE",
        help = "Frames per second (min 1 max 240)"
    )]
    pub fps: u32,

    #[arg(
        short = 'd',
        long = "density",
        default_value_t = 2,
        help_heading = "PERFORMANCE",
        help = "Density factor, larger is sparser (min 1 max 1000)"
    )]
    pub density: u16,

    #[arg(
        short = 'c',
        long = "charset",
        default_value = DEFAULT_GLYPHS,
        hide_default_value = true,
        help_heading = "CHARSET",
        help = "Glyphs to rain [default: mixed katakana/kanji/latin/cyrillic/greek/hangul]"
    )]
    pub charset: String,

    #[arg(
        short = 'p',
        long = "preset",
        help_heading = "CHARSET",
        help = "Named glyph set, overrides --charset (see --list-presets)"
    )]
    pub preset: Option<String>,

    #[arg(
        short = 'C',
        long = "color",
        default_value_t = Theme::Green,
        value_enum,
        help_heading = "APPEARANCE",
        help = "Accent color of the trail"
    )]
    pub color: Theme,

    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Seed the random generator for a reproducible rain"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "duration",
        help_heading = "GENERAL",
        help = "Stop after N seconds (min 0.1 max 86400; <=0 disables)"
    )]
    pub duration: Option<f64>,

    #[arg(
        short = 's',
        long = "screensaver",
        help_heading = "GENERAL",
        help = "Screensaver mode (exit on any keypress)"
    )]
    pub screensaver: bool,

    #[arg(
        long = "log-file",
        help_heading = "GENERAL",
        help = "Write logs to this file (level from DIGIRAIN_LOG, default info)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "list-presets",
        help_heading = "HELP",
        help = "List available glyph presets and exit"
    )]
    pub list_presets: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

/// Validated settings for one run.
#[derive(Clone, Debug)]
pub struct Config {
    pub fps: u32,
    pub density: u16,
    pub glyphs: GlyphSet,
    pub theme: Theme,
    pub seed: Option<u64>,
    pub duration: Option<Duration>,
    pub screensaver: bool,
    pub log_file: Option<PathBuf>,
}

fn require_range<T: PartialOrd + Display>(name: &'static str, v: T, min: T, max: T) -> Result<T> {
    if v < min || v > max {
        return Err(RainError::InvalidOption {
            name,
            value: v.to_string(),
            reason: format!("min {} max {}", min, max),
        });
    }
    Ok(v)
}

impl Args {
    pub fn into_config(self) -> Result<Config> {
        let fps = require_range("--fps", self.fps, 1, 240)?;
        let density = require_range("--density", self.density, 1, 1000)?;

        let duration = match self.duration {
            Some(s) if !s.is_finite() => {
                return Err(RainError::InvalidOption {
                    name: "--duration",
                    value: s.to_string(),
                    reason: "must be a finite number".to_string(),
                })
            }
            Some(s) if s > 0.0 => Some(Duration::from_secs_f64(require_range(
                "--duration",
                s,
                0.1,
                86400.0,
            )?)),
            _ => None,
        };

        let glyphs = match &self.preset {
            Some(name) => GlyphSet::preset(name)?,
            None => GlyphSet::parse(&self.charset)?,
        };

        Ok(Config {
            fps,
            density,
            glyphs,
            theme: self.color,
            seed: self.seed,
            duration,
            screensaver: self.screensaver,
            log_file: self.log_file,
        })
    }
}

pub fn print_list_presets() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE GLYPH PRESETS:\x1b[0m");
        println!("\x1b[2mNOTE: Use only the VALUE (left side) with --preset.\x1b[0m");
    } else {
        println!("AVAILABLE GLYPH PRESETS:");
        println!("NOTE: Use only the VALUE (left side) with --preset.");
    }
    println!();
    println!("VALUE        DESCRIPTION");
    for (name, desc) in PRESETS {
        println!("{:<12} {}", name, desc);
    }
}
