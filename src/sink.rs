use crate::error::LogoError;
use crossterm::{
    cursor,
    queue,
    style::{Print, ResetColor},
    terminal::{Clear, ClearType},
};
use std::{
    io::{self, Stdout, Write},
    thread,
    time::Duration,
};

/// How long to wait after writing a logo before restoring the terminal.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// The pause between writing output and restoring terminal state.
pub trait Settle {
    fn settle(&self);
}

/// Settle by sleeping for a fixed amount of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_SETTLE_DELAY)
    }
}

impl Settle for FixedDelay {
    fn settle(&self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

/// Writes rendered logos to a terminal and leaves it in a clean state afterwards.
#[derive(Debug)]
pub struct TerminalSink<W: Write, S: Settle = FixedDelay> {
    writer: W,
    settle: S,
}

impl TerminalSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), FixedDelay::default())
    }
}

impl<W: Write, S: Settle> TerminalSink<W, S> {
    pub fn new(writer: W, settle: S) -> Self {
        Self { writer, settle }
    }

    /// Write `output` followed by a line break, wait for the terminal to settle and then reset
    /// colors, show the cursor and clear whatever is left on the current line.
    ///
    /// This only returns once all of the above is done.
    pub fn write_and_settle(&mut self, output: &str) -> Result<(), LogoError> {
        queue!(self.writer, Print(output), Print("\n"))?;
        self.writer.flush()?;
        self.settle.settle();
        queue!(self.writer, ResetColor, cursor::Show, Clear(ClearType::UntilNewLine))?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
