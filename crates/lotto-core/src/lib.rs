// Library root: the drawer, game presets, configuration, and the draw
// session shared by the console and terminal UI front ends.

pub mod config;
pub mod draw;
pub mod preset;
pub mod session;

pub use draw::{DrawConfiguration, DrawError, DrawResult, Drawer};
pub use preset::{Preset, PresetError, PresetRegistry};
pub use session::{unexpected_message, Outcome, Presenter, Session, SessionError};
