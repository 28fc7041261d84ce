//! Terminal UI: a hot-seat game view built with Ratatui, plus plain-text
//! rendering for headless replays.

mod app;
pub mod board_widget;
mod game_view;
pub mod text;

pub use app::App;
