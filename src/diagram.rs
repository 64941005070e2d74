//! Draw a [`FretboardGrid`] as an SVG fretboard diagram.
//!
//! The board is laid out horizontally with the nut on the left and string 1 at the top.

mod svg;

use crate::error::FretboardError;
use crate::fretboard::{Fret, FretboardGrid, GuitarString, MAX_FRET, NUM_STRINGS};

use self::svg::SvgBuilder;

/// Dimensions (in SVG user units) and colors of a fretboard diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramStyle {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub nut_offset: f64,
    pub nut_width: f64,
    pub fret_width: f64,
    pub string_width: f64,
    pub marker_radius: f64,
    pub string_color: String,
    pub fret_color: String,
    pub root_color: String,
    pub note_color: String,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 200.0,
            padding: 5.0,
            nut_offset: 30.0,
            nut_width: 5.0,
            fret_width: 2.0,
            string_width: 1.0,
            marker_radius: 4.0,
            string_color: "#c0c0c0".to_owned(),
            fret_color: "#808080".to_owned(),
            root_color: "#ff0000".to_owned(),
            note_color: "#0000ff".to_owned(),
        }
    }
}

impl DiagramStyle {
    /// Checks that the board keeps a positive size after subtracting the padding and the nut.
    pub fn validate(&self) -> Result<(), FretboardError> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("marker radius", self.marker_radius),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(FretboardError::InvalidStyle(format!(
                    "{name} must be positive but was {value}"
                )));
            }
        }

        let offsets_and_strokes = [
            ("padding", self.padding),
            ("nut width", self.nut_width),
            ("fret width", self.fret_width),
            ("string width", self.string_width),
        ];
        for (name, value) in offsets_and_strokes {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FretboardError::InvalidStyle(format!(
                    "{name} must not be negative but was {value}"
                )));
            }
        }
        if self.board_height() <= 0.0 {
            return Err(FretboardError::InvalidStyle(
                "padding leaves no room for the strings".to_owned(),
            ));
        }
        if !(self.nut_offset.is_finite() && self.nut_offset >= 0.0) || self.fret_spacing() <= 0.0 {
            return Err(FretboardError::InvalidStyle(
                "nut offset leaves no room for the frets".to_owned(),
            ));
        }

        Ok(())
    }

    pub fn board_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn board_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    pub fn fret_spacing(&self) -> f64 {
        (self.board_width() - self.nut_offset) / f64::from(MAX_FRET)
    }

    /// Vertical position of `string`, string 1 being at the top edge of the board.
    pub fn string_y(&self, string: GuitarString) -> f64 {
        f64::from(string.number() - 1) * self.board_height() / (NUM_STRINGS - 1) as f64
            + self.padding
    }

    /// Horizontal position of the fret wire closing `fret`. Fret 0 is the nut.
    pub fn fret_x(&self, fret: Fret) -> f64 {
        self.nut_offset + f64::from(fret.number()) * self.fret_spacing()
    }

    /// Horizontal center of a note marker placed on `fret`.
    ///
    /// Open strings are marked halfway between the left edge and the nut.
    pub fn marker_x(&self, fret: Fret) -> f64 {
        if fret.is_open() {
            self.nut_offset / 2.0
        } else {
            self.fret_x(fret) - self.fret_spacing() / 2.0
        }
    }
}

/// Renders `grid` as an SVG document.
///
/// Notes equal to the root of the grid's scale are drawn with [`DiagramStyle::root_color`].
///
/// ```
/// # use fretboard::diagram::{self, DiagramStyle};
/// # use fretboard::fretboard::build_grid;
/// # use fretboard::scale;
/// # use fretboard::tuning::Tuning;
/// let grid = build_grid(scale::build_major_scale("C").unwrap(), Tuning::standard());
/// let svg = diagram::render_svg(&grid, &DiagramStyle::default());
///
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg.matches("<circle").count(), grid.num_positions());
/// ```
pub fn render_svg(grid: &FretboardGrid, style: &DiagramStyle) -> String {
    let mut svg = SvgBuilder::new(style.width, style.height);

    for string in GuitarString::all() {
        let y = style.string_y(string);
        svg.line(
            (0.0, y),
            (style.width, y),
            &style.string_color,
            style.string_width,
        );
    }

    let top = style.padding;
    let bottom = style.height - style.padding;

    svg.line(
        (style.nut_offset, top),
        (style.nut_offset, bottom),
        &style.fret_color,
        style.nut_width,
    );
    for fret in Fret::all().skip(1) {
        let x = style.fret_x(fret);
        svg.line((x, top), (x, bottom), &style.fret_color, style.fret_width);
    }

    let root = grid.scale().root();
    for (string, positions) in grid.strings() {
        let y = style.string_y(string);
        for position in positions {
            let color = if position.note == root {
                &style.root_color
            } else {
                &style.note_color
            };
            let title = format!(
                "{} (string {}, fret {})",
                position.note, string, position.fret
            );
            svg.circle(
                (style.marker_x(position.fret), y),
                style.marker_radius,
                color,
                &title,
            );
        }
    }

    svg.build()
}
