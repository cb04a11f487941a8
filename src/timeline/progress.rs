// Progress reporting for frame production

use crate::render::text::percent;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};
use tracing::debug;

/// Observer notified as frames are produced
pub trait ProgressObserver {
    /// Called after each frame, `done` counts frames produced so far
    fn on_frame(&mut self, done: usize, total: usize);

    /// Called once when the last frame has been consumed
    fn on_complete(&mut self, _total: usize) {}
}

impl<T: ProgressObserver + ?Sized> ProgressObserver for &mut T {
    fn on_frame(&mut self, done: usize, total: usize) {
        (**self).on_frame(done, total);
    }

    fn on_complete(&mut self, total: usize) {
        (**self).on_complete(total);
    }
}

/// Discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressObserver for NullProgress {
    fn on_frame(&mut self, _done: usize, _total: usize) {}
}

/// `50.00%\t[1/2]`
pub fn progress_line(done: usize, total: usize) -> String {
    let fraction = if total == 0 {
        1.0
    } else {
        done as f64 / total as f64
    };
    format!("{}\t[{}/{}]", percent(fraction), done, total)
}

/// Single status line rewritten in place, followed by `ALL DONE`
pub struct TerminalProgress<W: Write> {
    out: W,
}

impl TerminalProgress<Stdout> {
    pub fn stdout() -> Self {
        TerminalProgress { out: io::stdout() }
    }
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        TerminalProgress { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, done: usize, total: usize) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(progress_line(done, total))
        )?;
        self.out.flush()
    }

    fn write_done(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\nALL DONE\n"))?;
        self.out.flush()
    }
}

// Progress is a side channel, a broken stdout must not abort the replay
impl<W: Write> ProgressObserver for TerminalProgress<W> {
    fn on_frame(&mut self, done: usize, total: usize) {
        if let Err(err) = self.write_line(done, total) {
            debug!(%err, "failed to write progress");
        }
    }

    fn on_complete(&mut self, _total: usize) {
        if let Err(err) = self.write_done() {
            debug!(%err, "failed to write progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line() {
        assert_eq!(progress_line(1, 2), "50.00%\t[1/2]");
        assert_eq!(progress_line(3, 3), "100.00%\t[3/3]");
    }

    #[test]
    fn test_terminal_output() {
        let mut progress = TerminalProgress::new(Vec::new());
        progress.on_frame(1, 4);
        progress.on_frame(2, 4);
        progress.on_complete(4);

        let out = String::from_utf8(progress.into_inner()).unwrap();
        assert!(out.contains("25.00%\t[1/4]"));
        assert!(out.contains("50.00%\t[2/4]"));
        assert!(out.ends_with("\nALL DONE\n"));
        // line is cleared before each rewrite
        assert_eq!(out.matches("\x1b[2K").count(), 2);
    }
}
