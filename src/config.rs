use clap::Parser;

use crate::domain::GridError;

/// Command-line settings for the simulation window
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "toroidal_life", about = "Conway's Game of Life on a wrap-around grid")]
pub struct Settings {
    /// Number of grid rows
    #[arg(long, default_value_t = 50)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 50)]
    pub cols: usize,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = 10.0)]
    pub cell_size: f32,

    /// Generations per second while the simulation runs
    #[arg(long, default_value_t = 10.0)]
    pub fps: f32,

    /// Seed for random grids (time-derived when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grids with at least this many cells are stepped in parallel
    #[arg(long, default_value_t = 10_000)]
    pub parallel_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            cell_size: 10.0,
            fps: 10.0,
            seed: None,
            parallel_threshold: 10_000,
        }
    }
}

/// The menu needs this much room regardless of grid size
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

impl Settings {
    /// A window grid needs at least one cell each way
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                len: self.rows * self.cols,
            });
        }
        Ok(())
    }

    /// Cell size and rate with non-positive values replaced by the defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_size > 0.0) {
            self.cell_size = defaults.cell_size;
        }
        if !(self.fps > 0.0) {
            self.fps = defaults.fps;
        }
        self
    }

    /// Seed to use, falling back to the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_nanos() as u64)
        })
    }

    /// Window size in pixels: the grid, or the menu minimum if larger
    pub fn window_size(&self) -> (f32, f32) {
        (
            (self.cols as f32 * self.cell_size).max(MIN_WINDOW_WIDTH),
            (self.rows as f32 * self.cell_size).max(MIN_WINDOW_HEIGHT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser() {
        let parsed = Settings::try_parse_from(["toroidal_life"]).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_parse_overrides() {
        let parsed = Settings::try_parse_from([
            "toroidal_life",
            "--rows",
            "20",
            "--cols",
            "30",
            "--seed",
            "12",
        ])
        .unwrap();
        assert_eq!((parsed.rows, parsed.cols), (20, 30));
        assert_eq!(parsed.resolve_seed(), 12);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let settings = Settings {
            rows: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GridError::InvalidDimensions { rows: 0, cols: 50, .. })
        ));
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_sanitized_restores_defaults() {
        let settings = Settings {
            cell_size: 0.0,
            fps: -3.0,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.cell_size, 10.0);
        assert_eq!(settings.fps, 10.0);
    }

    #[test]
    fn test_window_fits_menu() {
        assert_eq!(Settings::default().window_size(), (500.0, 500.0));
        let small = Settings {
            rows: 5,
            cols: 5,
            ..Settings::default()
        };
        assert_eq!(small.window_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }
}
