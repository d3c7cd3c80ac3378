use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::{Grid, GridError};

/// Sub-state of the editable mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Time is stopped and clicks toggle cells
    Editing,
    /// Time advances and clicks are ignored
    Running,
}

impl Phase {
    const fn flipped(self) -> Self {
        match self {
            Phase::Editing => Phase::Running,
            Phase::Running => Phase::Editing,
        }
    }
}

/// Which screen is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    AutoRun,
    Editable(Phase),
}

/// Input events, already translated from raw keys and clicks by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectAutoRun,
    SelectEditable,
    Restart,
    ToggleRun,
    ToggleCell { row: usize, col: usize },
    Quit,
}

/// Whether the host should keep going after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// The active grid lives inside the mode that owns it
enum Mode {
    Menu,
    AutoRun { grid: Grid },
    Editable { grid: Grid, phase: Phase },
}

/// State machine between the menu and the two simulation modes.
/// Commands mutate the grid, `tick` advances it.
pub struct ModeController {
    rows: usize,
    cols: usize,
    mode: Mode,
    generation: u64,
    seeds: StdRng,
    parallel_threshold: usize,
}

impl ModeController {
    /// Start on the menu. Every random grid draws its seed from a sequence
    /// derived from `seed`, so a run is reproducible end to end.
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Self {
            rows,
            cols,
            mode: Mode::Menu,
            generation: 0,
            seeds: StdRng::seed_from_u64(seed),
            parallel_threshold: usize::MAX,
        }
    }

    /// Use `Grid::step_parallel` for grids with at least this many cells (builder pattern)
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    pub fn screen(&self) -> Screen {
        match &self.mode {
            Mode::Menu => Screen::Menu,
            Mode::AutoRun { .. } => Screen::AutoRun,
            Mode::Editable { phase, .. } => Screen::Editable(*phase),
        }
    }

    /// Grid of the active mode, `None` on the menu
    pub fn grid(&self) -> Option<&Grid> {
        match &self.mode {
            Mode::Menu => None,
            Mode::AutoRun { grid } | Mode::Editable { grid, .. } => Some(grid),
        }
    }

    /// Generations computed since the current grid was created
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one command. Only `ToggleCell` can fail, and a failed toggle
    /// leaves the grid as it was.
    pub fn handle(&mut self, command: Command) -> Result<Outcome, GridError> {
        match (self.screen(), command) {
            (Screen::Menu, Command::Quit) => {
                info!("quit from menu");
                return Ok(Outcome::Exit);
            }
            (Screen::Menu, Command::SelectAutoRun) => {
                self.enter_auto_run();
                info!("entered auto-run mode ({}x{})", self.rows, self.cols);
            }
            (Screen::Menu, Command::SelectEditable) => {
                self.mode = Mode::Editable {
                    grid: Grid::create_empty(self.rows, self.cols),
                    phase: Phase::Editing,
                };
                self.generation = 0;
                info!("entered editable mode ({}x{})", self.rows, self.cols);
            }
            (Screen::Menu, _) => debug!("ignoring {:?} on the menu", command),
            (screen, Command::Quit) => {
                self.mode = Mode::Menu;
                self.generation = 0;
                info!("left {:?} for the menu", screen);
            }
            (Screen::AutoRun, Command::Restart) => {
                self.enter_auto_run();
                info!("restarted auto-run with a new random grid");
            }
            (Screen::Editable(Phase::Editing), Command::ToggleCell { row, col }) => {
                if let Mode::Editable { grid, .. } = &mut self.mode {
                    grid.toggle(row, col)?;
                }
            }
            (Screen::Editable(_), Command::ToggleRun) => {
                if let Mode::Editable { phase, .. } = &mut self.mode {
                    *phase = phase.flipped();
                    debug!("editable mode now {:?}", phase);
                }
            }
            (screen, command) => debug!("ignoring {:?} in {:?}", command, screen),
        }
        Ok(Outcome::Continue)
    }

    /// Advance one generation if the active mode lets time run.
    /// Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        let grid = match &mut self.mode {
            Mode::AutoRun { grid }
            | Mode::Editable {
                grid,
                phase: Phase::Running,
            } => grid,
            _ => return false,
        };

        let (rows, cols) = grid.dimensions();
        *grid = if rows * cols >= self.parallel_threshold {
            grid.step_parallel()
        } else {
            grid.step()
        };
        self.generation += 1;
        true
    }

    fn enter_auto_run(&mut self) {
        let seed: u64 = self.seeds.random();
        debug!("random grid seed {}", seed);
        self.mode = Mode::AutoRun {
            grid: Grid::create_random(self.rows, self.cols, seed),
        };
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editable(rows: usize, cols: usize) -> ModeController {
        let mut controller = ModeController::new(rows, cols, 1);
        controller.handle(Command::SelectEditable).unwrap();
        controller
    }

    #[test]
    fn test_starts_on_menu() {
        let controller = ModeController::new(10, 10, 0);
        assert_eq!(controller.screen(), Screen::Menu);
        assert!(controller.grid().is_none());
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_quit_from_menu_exits() {
        let mut controller = ModeController::new(10, 10, 0);
        assert_eq!(controller.handle(Command::Quit), Ok(Outcome::Exit));
    }

    #[test]
    fn test_menu_ignores_simulation_commands() {
        let mut controller = ModeController::new(10, 10, 0);
        for command in [
            Command::Restart,
            Command::ToggleRun,
            Command::ToggleCell { row: 0, col: 0 },
        ] {
            assert_eq!(controller.handle(command), Ok(Outcome::Continue));
            assert_eq!(controller.screen(), Screen::Menu);
        }
        assert!(!controller.tick());
    }

    #[test]
    fn test_auto_run_is_reproducible_from_seed() {
        let mut a = ModeController::new(20, 30, 77);
        let mut b = ModeController::new(20, 30, 77);
        a.handle(Command::SelectAutoRun).unwrap();
        b.handle(Command::SelectAutoRun).unwrap();

        assert_eq!(a.screen(), Screen::AutoRun);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.grid().map(Grid::dimensions), Some((20, 30)));
    }

    #[test]
    fn test_auto_run_ticks_unconditionally() {
        let mut controller = ModeController::new(20, 20, 5);
        controller.handle(Command::SelectAutoRun).unwrap();
        let expected = controller.grid().unwrap().step();

        assert!(controller.tick());
        assert_eq!(controller.generation(), 1);
        assert_eq!(controller.grid(), Some(&expected));
    }

    #[test]
    fn test_restart_replaces_grid_and_stays_in_mode() {
        let mut controller = ModeController::new(50, 50, 9);
        controller.handle(Command::SelectAutoRun).unwrap();
        let first = controller.grid().unwrap().clone();
        controller.tick();
        controller.tick();

        controller.handle(Command::Restart).unwrap();
        assert_eq!(controller.screen(), Screen::AutoRun);
        assert_eq!(controller.generation(), 0);
        assert_ne!(controller.grid(), Some(&first));
    }

    #[test]
    fn test_auto_run_ignores_edit_commands() {
        let mut controller = ModeController::new(10, 10, 4);
        controller.handle(Command::SelectAutoRun).unwrap();
        let before = controller.grid().unwrap().clone();

        controller.handle(Command::ToggleCell { row: 1, col: 1 }).unwrap();
        controller.handle(Command::ToggleRun).unwrap();
        controller.handle(Command::SelectEditable).unwrap();

        assert_eq!(controller.screen(), Screen::AutoRun);
        assert_eq!(controller.grid(), Some(&before));
    }

    #[test]
    fn test_editable_starts_empty_and_editing() {
        let controller = editable(6, 8);
        assert_eq!(controller.screen(), Screen::Editable(Phase::Editing));
        assert_eq!(controller.grid(), Some(&Grid::create_empty(6, 8)));
    }

    #[test]
    fn test_toggles_never_advance_time_while_editing() {
        let mut controller = editable(6, 6);
        for (row, col) in [(1, 1), (2, 2), (1, 1), (4, 5)] {
            controller.handle(Command::ToggleCell { row, col }).unwrap();
        }
        assert!(!controller.tick());
        assert_eq!(controller.generation(), 0);

        let grid = controller.grid().unwrap();
        assert!(!grid.is_alive(1, 1));
        assert!(grid.is_alive(2, 2));
        assert!(grid.is_alive(4, 5));
        assert_eq!(grid.count_alive(), 2);
    }

    #[test]
    fn test_edits_apply_before_first_step() {
        let mut controller = editable(5, 5);
        for col in 1..=3 {
            controller.handle(Command::ToggleCell { row: 2, col }).unwrap();
        }
        controller.handle(Command::ToggleRun).unwrap();
        assert_eq!(controller.screen(), Screen::Editable(Phase::Running));

        assert!(controller.tick());
        let grid = controller.grid().unwrap();
        assert!(grid.is_alive(1, 2) && grid.is_alive(2, 2) && grid.is_alive(3, 2));
        assert_eq!(grid.count_alive(), 3);
    }

    #[test]
    fn test_toggles_ignored_while_running() {
        let mut controller = editable(5, 5);
        controller.handle(Command::ToggleRun).unwrap();
        controller.handle(Command::ToggleCell { row: 0, col: 0 }).unwrap();
        assert_eq!(controller.grid().unwrap().count_alive(), 0);
    }

    #[test]
    fn test_toggle_run_pauses_again() {
        let mut controller = editable(5, 5);
        controller.handle(Command::ToggleRun).unwrap();
        controller.tick();
        controller.handle(Command::ToggleRun).unwrap();

        assert_eq!(controller.screen(), Screen::Editable(Phase::Editing));
        assert!(!controller.tick());
        assert_eq!(controller.generation(), 1);
    }

    #[test]
    fn test_restart_ignored_in_editable_mode() {
        let mut controller = editable(5, 5);
        controller.handle(Command::ToggleCell { row: 3, col: 3 }).unwrap();
        controller.handle(Command::Restart).unwrap();
        assert!(controller.grid().unwrap().is_alive(3, 3));
    }

    #[test]
    fn test_out_of_bounds_toggle_is_rejected() {
        let mut controller = editable(4, 4);
        let result = controller.handle(Command::ToggleCell { row: 4, col: 0 });
        assert_eq!(
            result,
            Err(GridError::OutOfBounds { row: 4, col: 0, rows: 4, cols: 4 })
        );
        assert_eq!(controller.screen(), Screen::Editable(Phase::Editing));
        assert_eq!(controller.grid().unwrap().count_alive(), 0);
    }

    #[test]
    fn test_quit_returns_to_menu_from_either_phase() {
        for run_first in [false, true] {
            let mut controller = editable(4, 4);
            if run_first {
                controller.handle(Command::ToggleRun).unwrap();
            }
            assert_eq!(controller.handle(Command::Quit), Ok(Outcome::Continue));
            assert_eq!(controller.screen(), Screen::Menu);
            assert!(controller.grid().is_none());
        }
    }

    #[test]
    fn test_parallel_threshold_gives_same_generations() {
        let mut serial = ModeController::new(40, 40, 21);
        let mut parallel = ModeController::new(40, 40, 21).with_parallel_threshold(0);
        serial.handle(Command::SelectAutoRun).unwrap();
        parallel.handle(Command::SelectAutoRun).unwrap();

        for _ in 0..5 {
            serial.tick();
            parallel.tick();
        }
        assert_eq!(serial.grid(), parallel.grid());
    }
}
