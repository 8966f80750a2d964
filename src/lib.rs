//! Terminal Snake - a grid snake with a start menu and a game-over screen
//!
//! This library provides:
//! - Core game logic: snake, food, menu and the mode state machine (game module)
//! - Key mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
