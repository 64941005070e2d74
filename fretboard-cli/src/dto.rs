use std::io::Read;

use fretboard::{
    fretboard::{Fret, FretPosition, FretboardGrid, GuitarString},
    note::NoteName,
    scale::Scale,
    tuning::Tuning,
};
use serde::{Deserialize, Serialize};

use crate::{error::ResultExt, CliError, CliResult};

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum FretboardDto {
    Grid(GridDto),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GridDto {
    pub root: String,
    pub tuning: Vec<String>,
    pub strings: Vec<StringDto>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StringDto {
    pub string: u8,
    pub open: String,
    pub positions: Vec<PositionDto>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PositionDto {
    pub fret: u8,
    pub note: String,
}

impl GridDto {
    pub fn read(input: impl Read) -> CliResult<GridDto> {
        serde_yaml::from_reader(input)
            .handle_error::<CliError>("Could not parse grid file")
            .map(|FretboardDto::Grid(grid)| grid)
    }

    pub fn from_grid(grid: &FretboardGrid) -> Self {
        Self {
            root: grid.scale().root().to_string(),
            tuning: grid
                .tuning()
                .open_notes()
                .iter()
                .map(NoteName::to_string)
                .collect(),
            strings: grid
                .strings()
                .map(|(string, positions)| StringDto {
                    string: string.number(),
                    open: grid.tuning().open_note(string).to_string(),
                    positions: positions
                        .iter()
                        .map(|position| PositionDto {
                            fret: position.fret.number(),
                            note: position.note.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Validates the file content and turns it into a [`FretboardGrid`].
    pub fn to_grid(&self) -> CliResult<FretboardGrid> {
        let scale = Scale::major(self.root.parse()?);
        let tuning = Tuning::from_names(
            &self
                .tuning
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
        )?;

        let mut entries = Vec::new();
        for string_dto in &self.strings {
            let string = GuitarString::new(string_dto.string)?;
            let open: NoteName = string_dto.open.parse()?;
            if open != tuning.open_note(string) {
                return Err(CliError::CommandError(format!(
                    "String {} is listed with open note {} but the tuning says {}",
                    string,
                    open,
                    tuning.open_note(string)
                )));
            }
            for position_dto in &string_dto.positions {
                let position = FretPosition {
                    fret: Fret::new(position_dto.fret)?,
                    note: position_dto.note.parse()?,
                };
                entries.push((string, position));
            }
        }

        Ok(FretboardGrid::try_from_entries(scale, tuning, entries)?)
    }
}
