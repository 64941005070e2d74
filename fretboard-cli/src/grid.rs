use std::{fs::File, path::PathBuf};

use clap::Parser;
use fretboard::{
    fretboard::{build_grid, FretboardGrid},
    note::NoteName,
    scale::Scale,
    tuning::Tuning,
};

use crate::{
    dto::{FretboardDto, GridDto},
    error::ResultExt,
    App, CliError, CliResult,
};

#[derive(Parser)]
pub(crate) struct GridOptions {
    #[command(flatten)]
    key: KeyOptions,
}

impl GridOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let grid = self.key.to_grid();
        let dto = FretboardDto::Grid(GridDto::from_grid(&grid));

        let yaml = serde_yaml::to_string(&dto)
            .handle_error::<CliError>("Could not write grid file")?;
        Ok(app.write(yaml)?)
    }
}

#[derive(Parser)]
pub(crate) struct KeyOptions {
    /// Root note of the major scale, e.g. G or F#
    root: NoteName,

    /// Open notes from string 1 (thinnest) to string 6, separated by commas
    #[arg(long = "tuning", default_value = "E,B,G,D,A,E")]
    tuning: Tuning,
}

impl KeyOptions {
    pub fn to_grid(&self) -> FretboardGrid {
        build_grid(Scale::major(self.root), self.tuning)
    }
}

/// Where the grid of a command comes from.
#[derive(Parser)]
pub(crate) enum GridSource {
    /// Build the grid of a major scale
    #[command(name = "key")]
    Key(KeyOptions),

    /// Read a grid file created by `fret grid`
    #[command(name = "file")]
    UseGridFile {
        /// The location of the file to import
        grid_file_location: PathBuf,
    },

    /// Read a grid created by `fret grid` from stdin
    #[command(name = "stdin")]
    ReadStdin,
}

impl GridSource {
    pub fn to_grid(&self, app: &mut App) -> CliResult<FretboardGrid> {
        match self {
            GridSource::Key(key) => Ok(key.to_grid()),
            GridSource::UseGridFile { grid_file_location } => {
                let file = File::open(grid_file_location)
                    .handle_error::<CliError>("Could not read grid file")?;
                GridDto::read(file)?.to_grid()
            }
            GridSource::ReadStdin => GridDto::read(app.read())?.to_grid(),
        }
    }
}
