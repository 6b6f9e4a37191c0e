//! Terminal rendering of the per-frame status.
use crate::*;
use colored::Colorize;
use std::io::Write;

/// Draws snapshots to a terminal.
///
/// A camera runs at tens of frames per second while the visible state only
/// changes on a throw or a gesture change, so identical consecutive states
/// are drawn once.
pub struct Terminal<W> {
    out: W,
    json: bool,
    glyphs: bool,
    last: Option<RoundState>,
}

impl<W> Terminal<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self {
            out,
            json: false,
            glyphs: true,
            last: None,
        }
    }
    /// Emit one JSON object per frame instead of text.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
    /// Draw the computer's move as a picture under the status lines.
    pub fn glyphs(mut self, glyphs: bool) -> Self {
        self.glyphs = glyphs;
        self
    }
    pub fn draw(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, snapshot)?;
            writeln!(self.out)?;
            return Ok(self.out.flush()?);
        }
        if self.last == Some(snapshot.state) {
            return Ok(());
        }
        self.last = Some(snapshot.state);
        let state = snapshot.state;
        let computer = state.computer.map(|m| m.to_string()).unwrap_or_default();
        let outcome = state.outcome.map(|o| o.to_string()).unwrap_or_default();
        writeln!(self.out, "{}", format!("Gesture: {}", state.gesture).blue())?;
        writeln!(self.out, "{}", format!("Computer: {}", computer).red())?;
        writeln!(self.out, "{}", format!("Result: {}", outcome).green())?;
        if let Some(m) = state.computer.filter(|_| self.glyphs) {
            writeln!(self.out, "{}", glyph(m))?;
        }
        Ok(self.out.flush()?)
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Picture for a move.
pub fn glyph(m: Move) -> &'static str {
    match m {
        Move::Rock => concat!(
            "    _______\n",
            "---'   ____)\n",
            "      (_____)\n",
            "      (_____)\n",
            "      (____)\n",
            "---.__(___)",
        ),
        Move::Paper => concat!(
            "     _______\n",
            "---'    ____)____\n",
            "           ______)\n",
            "          _______)\n",
            "         _______)\n",
            "---.__________)",
        ),
        Move::Scissors => concat!(
            "    _______\n",
            "---'   ____)____\n",
            "          ______)\n",
            "       __________)\n",
            "      (____)\n",
            "---.__(___)",
        ),
    }
}
