// Console front end: argument parsing, interactive prompt, and one draw cycle.

pub mod console;

use std::io::{self, BufRead, Write};

use clap::Parser;
use lotto_core::{unexpected_message, Presenter, Session};

use console::{read_game_type, ConsoleView};

/// Draw unique lottery numbers for a game.
#[derive(Debug, Parser)]
#[command(name = "lotto", version)]
pub struct Args {
    /// Game type (e.g. lotto, multimulti, minilotto). Asked for interactively when omitted.
    pub game: Option<String>,
}

/// Run one welcome-select-draw-display cycle.
///
/// `input` is only read when `game` is `None`. Returns whether numbers were
/// shown; draw and input errors are rendered, never returned. `Err` means
/// the output streams themselves failed.
pub fn run<R, W, E>(
    game: Option<String>,
    session: &Session,
    input: R,
    out: W,
    err: E,
) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut view = ConsoleView::new(out, err);
    view.welcome()?;

    let game = match game {
        Some(game) => game,
        None => {
            view.show_available(session.presets())?;
            view.prompt(session.presets())?;
            match read_game_type(input) {
                Ok(game) => game,
                Err(e) => {
                    view.show_error(&unexpected_message(e))?;
                    return Ok(false);
                }
            }
        }
    };

    session.run(&game, &mut view)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn run_captured(game: Option<&str>, input: &str) -> (bool, String, String) {
        run_captured_bytes(game, input.as_bytes())
    }

    fn run_captured_bytes(game: Option<&str>, input: &[u8]) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let shown = run(
            game.map(str::to_string),
            &Session::default(),
            input,
            &mut out,
            &mut err,
        )
        .unwrap();
        (
            shown,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn argument_skips_prompt() {
        let (shown, out, err) = run_captured(Some("LOTTO"), "");
        assert!(shown);
        assert!(!out.contains("Enter game type"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "=== Lotto Game Application ===");
        assert_eq!(lines[2], "Lotto");
        assert_eq!(lines[3].split("  ").count(), 6);
        assert!(err.is_empty());
    }

    #[test]
    fn prompt_reads_game_from_input() {
        let (shown, out, _) = run_captured(None, "minilotto\n");
        assert!(shown);
        assert!(out.contains("Available games:"));
        assert!(out.contains("Enter game type (lotto, multimulti, minilotto):"));
        assert!(out.contains("Mini Lotto\n"));
    }

    #[test]
    fn unknown_game_reports_and_lists_games() {
        let (shown, out, err) = run_captured(Some("megalotto"), "");
        assert!(!shown);
        assert_eq!(err, "Error: Unknown game type: megalotto\n");
        assert!(out.contains("  - multimulti: 10 numbers from 1 to 80"));
    }

    #[test]
    fn empty_input_is_unknown_game() {
        let (shown, _, err) = run_captured(None, "");
        assert!(!shown);
        assert_eq!(err, "Error: Unknown game type: \n");
    }

    #[test]
    fn unreadable_input_is_reported_as_unexpected() {
        let (shown, out, err) = run_captured_bytes(None, &[0xff, 0xfe, b'\n']);
        assert!(!shown);
        assert!(out.contains("Enter game type"));
        assert_eq!(
            err,
            "Error: An unexpected error occurred: stream did not contain valid UTF-8\n"
        );
    }

    #[test]
    fn args_accept_single_optional_game() {
        let args = Args::try_parse_from(["lotto"]).unwrap();
        assert!(args.game.is_none());
        let args = Args::try_parse_from(["lotto", "multimulti"]).unwrap();
        assert_eq!(args.game.as_deref(), Some("multimulti"));
        assert!(Args::try_parse_from(["lotto", "a", "b"]).is_err());
    }
}
