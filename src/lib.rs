//! Quickstep — a terminal-native dance genre explorer.

pub mod analysis;
pub mod audio;
pub mod catalog;
pub mod clock;
pub mod motion;
pub mod tui;
