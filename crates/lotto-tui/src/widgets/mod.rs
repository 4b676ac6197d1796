// TUI widget modules for each screen zone.

pub mod game_list;
pub mod result_panel;
pub mod status_bar;
