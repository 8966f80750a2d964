//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Time is passed in explicitly, so every transition can be driven from tests.

pub mod action;
pub mod clock;
pub mod config;
pub mod engine;
pub mod food;
pub mod menu;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use clock::FixedStep;
pub use config::{GRID_SIZE, GameConfig};
pub use engine::{Command, Control, FrameView, GameEngine, Mode, TickResult};
pub use food::{Food, FoodPolicy};
pub use menu::{Menu, MenuInput, MenuItem};
pub use state::{CollisionType, Position, Snake};
