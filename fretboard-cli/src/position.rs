use clap::Parser;
use fretboard::fretboard::{Fret, FretboardGrid, Position, PositionWindow};
use log::debug;

use crate::{grid::GridSource, App, CliResult};

/// Selects the window of frets to display.
#[derive(Parser)]
pub(crate) struct WindowOptions {
    /// Anchor fret of the position window (0 to 12). Frets closer than 4 to the anchor are shown
    #[arg(long = "anchor", allow_negative_numbers = true, conflicts_with_all = ["shape", "full"])]
    anchor: Option<i32>,

    /// Named hand position resolved to its anchor fret [open, a, f, d]
    #[arg(long = "shape", conflicts_with = "full")]
    shape: Option<Position>,

    /// Show all frets instead of a position window
    #[arg(long = "full")]
    full: bool,
}

impl WindowOptions {
    /// Returns [`None`] if the whole fretboard should be shown.
    pub fn to_window(&self) -> CliResult<Option<PositionWindow>> {
        if self.full {
            return Ok(None);
        }

        let window = match (self.anchor, self.shape) {
            (Some(anchor), _) => PositionWindow::new(Fret::new(anchor)?),
            (None, Some(shape)) => shape.window(),
            (None, None) => PositionWindow::default(),
        };
        debug!("Using position window around fret {}", window.anchor());

        Ok(Some(window))
    }

    pub fn apply(&self, grid: FretboardGrid) -> CliResult<FretboardGrid> {
        Ok(match self.to_window()? {
            Some(window) => grid.filter_by_window(window),
            None => grid,
        })
    }
}

#[derive(Parser)]
pub(crate) struct PositionOptions {
    #[command(flatten)]
    window: WindowOptions,

    #[command(subcommand)]
    source: GridSource,
}

impl PositionOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let window = self.window.to_window()?;
        let grid = self.source.to_grid(app)?;

        let (grid, location) = match window {
            Some(window) => (
                grid.filter_by_window(window),
                format!("fret {}", window.anchor()),
            ),
            None => (grid, "full board".to_owned()),
        };

        app.writeln(format_args!("{} major @ {location}", grid.scale().root()))?;
        app.writeln(&grid)?;
        Ok(())
    }
}

pub fn print_shapes(app: &mut App) -> CliResult {
    for position in Position::ALL {
        app.writeln(format_args!("{:<5} -> fret {}", position, position.anchor()))?;
    }
    Ok(())
}
