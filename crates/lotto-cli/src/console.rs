// Plain-text rendering for the console front end.
//
// Results go to the output stream, errors to the error stream. Both are
// generic writers so tests can capture them in memory.

use std::io::{self, BufRead, Write};

use lotto_core::{DrawResult, PresetRegistry, Presenter};

pub struct ConsoleView<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> ConsoleView<W, E> {
    pub fn new(out: W, err: E) -> Self {
        ConsoleView { out, err }
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== Lotto Game Application ===")?;
        writeln!(self.out)
    }

    /// `Enter game type (lotto, multimulti, minilotto):`
    pub fn prompt(&mut self, presets: &PresetRegistry) -> io::Result<()> {
        writeln!(self.out, "Enter game type ({}):", presets.names().join(", "))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Presenter for ConsoleView<W, E> {
    fn show_result(&mut self, label: &str, result: &DrawResult) -> io::Result<()> {
        writeln!(self.out, "{label}")?;
        writeln!(self.out, "{result}")?;
        self.out.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "Error: {message}")?;
        self.err.flush()
    }

    fn show_available(&mut self, presets: &PresetRegistry) -> io::Result<()> {
        // Pad names so the summaries line up: "lotto:      6 numbers ..."
        let width = presets.iter().map(|p| p.name().len() + 1).max().unwrap_or(0);
        writeln!(self.out, "Available games:")?;
        for preset in presets.iter() {
            let key = format!("{}:", preset.name());
            writeln!(self.out, "  - {key:<width$} {}", preset.summary())?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Read one line naming a game. End of input reads as an empty name.
pub fn read_game_type<R: BufRead>(mut input: R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
