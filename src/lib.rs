// Domain layer - grid and transition rule
pub mod domain;

// Application layer - mode state machine and pacing
pub mod application;

// Configuration
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError};
pub use application::{Command, ModeController, Outcome, Phase, Screen, TickTimer};
pub use config::Settings;
