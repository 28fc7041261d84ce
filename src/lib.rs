//! # Connect X
//!
//! A generalized Connect Four engine: any number of columns, rows and
//! players, won by K pieces in a row vertically, horizontally or diagonally.
//! Ships with a hot-seat terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, run scanning, state machine
//! - [`ui`] — Terminal UI and plain-text board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
