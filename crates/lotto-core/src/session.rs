// Draw session: resolves a game name, runs the drawer, and routes the
// outcome to whichever front end is active.
//
// Every failure of a draw cycle ends here as a user-facing message. Nothing
// below this layer prints or logs.

use std::fmt;
use std::io;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::draw::{DrawError, DrawResult, Drawer};
use crate::preset::{PresetError, PresetRegistry};

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

/// Output surface for a draw cycle (console, terminal UI, test recorder).
pub trait Presenter {
    /// Show a successful draw under its game label.
    fn show_result(&mut self, label: &str, result: &DrawResult) -> io::Result<()>;

    /// Show an error message. Must not leave a previous result looking current.
    fn show_error(&mut self, message: &str) -> io::Result<()>;

    /// List the games the user can choose from.
    fn show_available(&mut self, presets: &PresetRegistry) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Draw(#[from] DrawError),
}

impl SessionError {
    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Preset(PresetError::UnknownPreset { name, .. }) => {
                format!("Unknown game type: {name}")
            }
            SessionError::Preset(PresetError::Invalid { source, .. }) => {
                format!("Invalid game configuration: {source}")
            }
            SessionError::Preset(other) => format!("Invalid game configuration: {other}"),
            SessionError::Draw(DrawError::InvalidConfiguration { reason }) => {
                format!("Invalid game configuration: {reason}")
            }
            SessionError::Draw(e @ DrawError::GenerationFailed { .. }) => {
                format!("Generation failed: {e}")
            }
            SessionError::Draw(e @ DrawError::Entropy { .. }) => unexpected_message(e),
        }
    }

    pub fn is_unknown_preset(&self) -> bool {
        matches!(self, SessionError::Preset(PresetError::UnknownPreset { .. }))
    }
}

/// Message for failures outside the draw error categories, e.g. a broken
/// input stream.
pub fn unexpected_message(error: impl fmt::Display) -> String {
    format!("An unexpected error occurred: {error}")
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A completed draw together with the label of the game it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub label: String,
    pub result: DrawResult,
}

#[derive(Debug, Clone)]
pub struct Session {
    presets: PresetRegistry,
    drawer: Drawer,
}

impl Session {
    pub fn new(presets: PresetRegistry, drawer: Drawer) -> Self {
        Session { presets, drawer }
    }

    pub fn from_config(config: &Config) -> Self {
        Session::new(config.presets.clone(), config.drawer())
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Resolve `name` and draw once. The drawer is not called for unknown names.
    pub fn play(&self, name: &str) -> Result<Outcome, SessionError> {
        let config = self.presets.lookup(name)?;
        let result = self.drawer.draw(config)?;
        Ok(Outcome {
            label: config.label().to_string(),
            result,
        })
    }

    /// Play one round and hand the outcome to `presenter`.
    ///
    /// Returns `Ok(true)` when numbers were shown and `Ok(false)` when an
    /// error was shown instead. `Err` only reflects a failure of the
    /// presenter itself.
    pub fn run<P: Presenter + ?Sized>(&self, name: &str, presenter: &mut P) -> io::Result<bool> {
        match self.play(name) {
            Ok(outcome) => {
                info!(
                    game = %outcome.label,
                    numbers = %outcome.result,
                    "Draw complete"
                );
                presenter.show_result(&outcome.label, &outcome.result)?;
                Ok(true)
            }
            Err(e) => {
                debug!(game = name, error = %e, "Draw failed");
                presenter.show_error(&e.user_message())?;
                if e.is_unknown_preset() {
                    presenter.show_available(&self.presets)?;
                }
                Ok(false)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(PresetRegistry::builtin(), Drawer::new())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
