// Copyright (c) 2025 rezk_nightky

use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::Result;

/// Why the rain stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    QuitKey,
    AnyKey,
    Interrupt,
    Signal(i32),
    Elapsed,
}

pub fn classify_key(code: KeyCode, modifiers: KeyModifiers, screensaver: bool) -> Option<Stop> {
    match (code, modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Stop::Interrupt),
        (KeyCode::Char('q' | 'Q'), _) => Some(Stop::QuitKey),
        _ if screensaver => Some(Stop::AnyKey),
        _ => None,
    }
}

/// Reads key events until one of them asks to stop, then reports it once.
pub fn spawn_key_listener(tx: Sender<Stop>, screensaver: bool) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => {
                if let Some(stop) = classify_key(k.code, k.modifiers, screensaver) {
                    let _ = tx.send(stop);
                    return;
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "key listener stopped");
                return;
            }
        }
    });
}

#[cfg(unix)]
pub fn spawn_signal_listener(tx: Sender<Stop>) -> Result<()> {
    use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).map_err(crate::error::RainError::Signals)?;
    thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            let _ = tx.send(Stop::Signal(sig));
        }
    });
    Ok(())
}

#[cfg(windows)]
pub fn spawn_signal_listener(tx: Sender<Stop>) -> Result<()> {
    ctrlc::set_handler(move || {
        let _ = tx.send(Stop::Interrupt);
    })
    .map_err(|e| crate::error::RainError::Signals(std::io::Error::other(e)))
}

/// Fixed-interval frame deadline. Falling behind re-anchors to now instead
/// of bursting to catch up, so each frame is exactly one simulation step.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(fps: u32, now: Instant) -> Self {
        let period = Duration::from_secs(1) / fps.max(1);
        Self {
            period,
            next: now + period,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    pub fn due(&self, now: Instant) -> bool {
        now >= self.next
    }

    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if now > self.next {
            self.next = now;
        }
    }

    #[allow(dead_code)]
    pub fn period(&self) -> Duration {
        self.period
    }
}
