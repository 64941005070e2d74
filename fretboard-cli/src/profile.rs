use std::{fs::File, path::Path};

use fretboard::diagram::DiagramStyle;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::ResultExt, CliError, CliResult};

/// Diagram settings read from a YAML file. Missing entries keep their default value.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramProfile {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub padding: Option<f64>,
    pub nut_offset: Option<f64>,
    pub nut_width: Option<f64>,
    pub fret_width: Option<f64>,
    pub string_width: Option<f64>,
    pub marker_radius: Option<f64>,
    pub string_color: Option<String>,
    pub fret_color: Option<String>,
    pub root_color: Option<String>,
    pub note_color: Option<String>,
}

impl DiagramProfile {
    pub fn load(file_name: &Path) -> CliResult<Self> {
        info!("Loading diagram profile `{}`", file_name.display());
        let file = File::open(file_name).handle_error::<CliError>("Could not read profile")?;
        serde_yaml::from_reader(file).handle_error("Could not deserialize profile")
    }

    pub fn to_style(&self) -> CliResult<DiagramStyle> {
        let defaults = DiagramStyle::default();
        let pick_color = |color: &Option<String>, default: String| color.clone().unwrap_or(default);

        let style = DiagramStyle {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            padding: self.padding.unwrap_or(defaults.padding),
            nut_offset: self.nut_offset.unwrap_or(defaults.nut_offset),
            nut_width: self.nut_width.unwrap_or(defaults.nut_width),
            fret_width: self.fret_width.unwrap_or(defaults.fret_width),
            string_width: self.string_width.unwrap_or(defaults.string_width),
            marker_radius: self.marker_radius.unwrap_or(defaults.marker_radius),
            string_color: pick_color(&self.string_color, defaults.string_color),
            fret_color: pick_color(&self.fret_color, defaults.fret_color),
            root_color: pick_color(&self.root_color, defaults.root_color),
            note_color: pick_color(&self.note_color, defaults.note_color),
        };
        style.validate()?;

        Ok(style)
    }
}
