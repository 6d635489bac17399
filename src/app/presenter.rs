use std::io::Write;

use ansi_term::{Colour, Style};
use anyhow::Result;
use chrono::{DateTime, Local, Utc};

use crate::tracker::{
    accumulator::TrackerSnapshot,
    format::{format_duration, format_duration_compact},
};

/// Everything the event loop shows to the user goes through this trait.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// Redraws the main clock: the active category and its total.
    fn status(&mut self, snapshot: &TrackerSnapshot) -> Result<()>;

    /// Prints the dropdown with every category.
    fn list(&mut self, snapshot: &TrackerSnapshot) -> Result<()>;

    fn notice(&mut self, message: &str) -> Result<()>;

    fn summary(&mut self, snapshot: &TrackerSnapshot, since: DateTime<Utc>) -> Result<()>;
}

/// Draws the clock on a single line that is rewritten in place. Other output starts on a fresh
/// line and the clock is redrawn with the next tick.
pub struct TerminalPresenter<W: Write> {
    out: W,
    compact: bool,
    colored: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, compact: bool, colored: bool) -> Self {
        Self {
            out,
            compact,
            colored,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn clock(&self, snapshot: &TrackerSnapshot) -> String {
        if self.compact {
            format_duration_compact(snapshot.active_total())
        } else {
            format_duration(snapshot.active_total())
        }
    }

    fn highlight(&self) -> Style {
        if self.colored {
            Colour::Cyan.bold()
        } else {
            Style::new()
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn status(&mut self, snapshot: &TrackerSnapshot) -> Result<()> {
        let badge = self
            .highlight()
            .paint(format!("[{}]", snapshot.active().abbreviation()));
        let clock = self.clock(snapshot);
        // Clear the rest of the line, the clock can get shorter after a switch.
        write!(self.out, "\r{badge} {clock}\x1b[K")?;
        self.out.flush()?;
        Ok(())
    }

    fn list(&mut self, snapshot: &TrackerSnapshot) -> Result<()> {
        let highlight = self.highlight();
        writeln!(self.out)?;
        for (category, total) in snapshot.intervals() {
            let row = format!("{}: {}", category.abbreviation(), format_duration(total));
            if category == snapshot.active() {
                writeln!(self.out, "* {}", highlight.paint(row))?;
            } else {
                writeln!(self.out, "  {row}")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    fn summary(&mut self, snapshot: &TrackerSnapshot, since: DateTime<Utc>) -> Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Tracked since {}",
            since.with_timezone(&Local).format("%H:%M")
        )?;
        for (category, total) in snapshot.intervals() {
            writeln!(self.out, "{:<10} {}", category.name(), format_duration(total))?;
        }
        writeln!(self.out, "{:<10} {}", "Total", format_duration(snapshot.sum()))?;
        self.out.flush()?;
        Ok(())
    }
}
