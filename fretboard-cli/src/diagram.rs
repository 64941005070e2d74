use std::path::PathBuf;

use clap::Parser;
use fretboard::diagram::{self, DiagramStyle};

use crate::{grid::GridSource, position::WindowOptions, profile::DiagramProfile, App, CliResult};

#[derive(Parser)]
pub(crate) struct SvgOptions {
    /// YAML file overriding the diagram dimensions and colors
    #[arg(long = "profile", env = "FRET_PROFILE")]
    profile_location: Option<PathBuf>,

    #[command(flatten)]
    window: WindowOptions,

    #[command(subcommand)]
    source: GridSource,
}

impl SvgOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let style = match &self.profile_location {
            Some(profile_location) => DiagramProfile::load(profile_location)?.to_style()?,
            None => DiagramStyle::default(),
        };

        let grid = self.window.apply(self.source.to_grid(app)?)?;

        app.write(diagram::render_svg(&grid, &style))?;
        app.errln(format_args!(
            "Number of note markers: {}",
            grid.num_positions()
        ))?;
        Ok(())
    }
}
