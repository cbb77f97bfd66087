// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Stdout, Write};

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::error::{RainError, Result};

pub struct Terminal {
    stdout: Stdout,
    buf: Vec<u8>,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode().map_err(RainError::RawMode)?;
        let init_res: std::io::Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            restore_terminal_best_effort();
            return Err(RainError::RawMode(e));
        }
        Ok(Self {
            stdout: out,
            buf: Vec::with_capacity(16 * 1024),
        })
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size().map_err(RainError::TerminalSize)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Home the cursor and write one encoded frame with a single write.
    pub fn present(&mut self, frame: &[u8]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.extend_from_slice(frame);
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore_terminal_best_effort();
    }
}

/// Undo everything `Terminal::new` did, ignoring failures. Safe to call from
/// signal threads, panic hooks and fatal-error paths.
pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(terminal::Clear(terminal::ClearType::All));
    let _ = out.execute(cursor::MoveTo(0, 0));
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}
