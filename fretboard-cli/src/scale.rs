use clap::Parser;
use fretboard::{note::NoteName, scale::Scale};

use crate::{App, CliResult};

#[derive(Parser)]
pub(crate) struct ScaleOptions {
    /// Root note of the major scale, e.g. G or F#
    root: NoteName,
}

impl ScaleOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let scale = Scale::major(self.root);
        for (degree, interval, note) in scale.degrees() {
            app.writeln(format_args!("{degree} {interval} {note}"))?;
        }
        Ok(())
    }
}
