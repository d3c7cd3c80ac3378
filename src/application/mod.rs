mod mode_controller;
mod tick_timer;

pub use mode_controller::{Command, ModeController, Outcome, Phase, Screen};
pub use tick_timer::TickTimer;
