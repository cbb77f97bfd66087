// Copyright (c) 2026 rezky_nightky

mod cell;
mod charset;
mod column;
mod compositor;
mod config;
mod error;
mod logging;
mod runtime;
mod style;
mod terminal;

use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use clap::builder::styling::{AnsiColor, Color, Effects, Style};
use clap::builder::Styles;
use clap::{CommandFactory, FromArgMatches};

use crate::charset::GlyphSource;
use crate::compositor::Compositor;
use crate::config::{print_list_presets, Args, Config};
use crate::error::Result;
use crate::runtime::{Stop, Ticker};
use crate::terminal::{restore_terminal_best_effort, Terminal};

fn clap_styles() -> Styles {
    Styles::styled()
        .header(
            Style::new()
                .effects(Effects::BOLD)
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .usage(
            Style::new()
                .effects(Effects::BOLD)
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta))))
}

fn run(cfg: Config) -> Result<Stop> {
    let (tx, rx) = mpsc::channel();
    runtime::spawn_signal_listener(tx.clone())?;

    let mut term = Terminal::new()?;
    let (w, h) = term.size()?;

    let mut src = GlyphSource::new(cfg.glyphs, cfg.seed);
    let mut comp = Compositor::new(w, h, cfg.density, cfg.theme);
    comp.populate(&mut src);
    tracing::info!(
        width = w,
        height = h,
        columns = comp.columns().len(),
        glyphs = src.glyphs().len(),
        fps = cfg.fps,
        "rain started"
    );

    runtime::spawn_key_listener(tx, cfg.screensaver);

    let start = Instant::now();
    let end = cfg.duration.map(|d| start + d);
    let mut ticker = Ticker::new(cfg.fps, start);
    let mut frames: u64 = 0;

    let stop = loop {
        let now = Instant::now();
        if end.is_some_and(|e| now >= e) {
            break Stop::Elapsed;
        }

        let mut wait = ticker.remaining(now);
        if let Some(e) = end {
            wait = wait.min(e.saturating_duration_since(now));
        }
        match rx.recv_timeout(wait) {
            Ok(stop) => break stop,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => thread::sleep(wait),
        }

        let now = Instant::now();
        if !ticker.due(now) {
            continue;
        }
        ticker.advance(now);

        let (nw, nh) = term.size()?;
        if (nw, nh) != comp.size() {
            let moved = comp.resize(nw, nh, &mut src);
            tracing::debug!(width = nw, height = nh, moved, "terminal resized");
            term.clear()?;
        }

        let bytes = comp.frame(&mut src)?;
        term.present(bytes)?;
        frames = frames.saturating_add(1);
    };

    if let Stop::Signal(sig) = stop {
        tracing::info!(signal = sig, "terminated by signal");
    }
    tracing::info!(
        ?stop,
        frames,
        elapsed_s = start.elapsed().as_secs_f64(),
        "rain stopped"
    );
    Ok(stop)
}

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    let cmd = Args::command().styles(clap_styles());
    let matches = cmd.get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.list_presets {
        print_list_presets();
        return ExitCode::SUCCESS;
    }

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if args.info {
        println!("Version: v{}", env!("CARGO_PKG_VERSION"));
        println!("Build: {}", env!("DIGIRAIN_BUILD"));
        let sha = env!("DIGIRAIN_GIT_SHA");
        if !sha.is_empty() {
            println!("Commit: {}", sha);
        }
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
        return ExitCode::SUCCESS;
    }

    let cfg = match args.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(cfg.log_file.as_deref()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            restore_terminal_best_effort();
            tracing::error!(error = %e, "rain aborted");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
