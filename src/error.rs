use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::note::NoteName;

/// Error reported when a name, number or data record does not describe a valid piece of the fretboard.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FretboardError {
    /// The name is not one of the 12 sharp-based note names.
    ///
    /// ```
    /// # use fretboard::FretboardError;
    /// # use fretboard::note::NoteName;
    /// assert_eq!(
    ///     "H".parse::<NoteName>(),
    ///     Err(FretboardError::InvalidPitch("H".to_owned()))
    /// );
    /// ```
    InvalidPitch(String),

    /// The fret lies outside of `0..=12`.
    InvalidFret(i32),

    /// The string number lies outside of `1..=6`.
    InvalidString(i32),

    /// A tuning must assign exactly one open note to each of the 6 strings.
    InvalidTuning { num_strings: usize },

    /// The name is not one of the known position shapes.
    InvalidPosition(String),

    /// A fretted position claims to sound a different note than the tuning implies.
    NoteMismatch {
        string: u8,
        fret: u8,
        expected: NoteName,
        found: NoteName,
    },

    /// A fretted position sounds a note that is not part of the scale.
    NoteNotInScale { note: NoteName },

    /// The diagram dimensions cannot be laid out.
    InvalidStyle(String),
}

impl Display for FretboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FretboardError::InvalidPitch(name) => write!(
                f,
                "Invalid note name '{name}': Must be one of A, A#, B, C, C#, D, D#, E, F, F#, G, G#"
            ),
            FretboardError::InvalidFret(fret) => {
                write!(f, "Invalid fret {fret}: Must be between 0 and 12")
            }
            FretboardError::InvalidString(string) => {
                write!(f, "Invalid string {string}: Must be between 1 and 6")
            }
            FretboardError::InvalidTuning { num_strings } => {
                write!(f, "Invalid tuning: Expected 6 strings but got {num_strings}")
            }
            FretboardError::InvalidPosition(name) => write!(
                f,
                "Invalid position '{name}': Must be one of open, a, f, d"
            ),
            FretboardError::NoteMismatch {
                string,
                fret,
                expected,
                found,
            } => write!(
                f,
                "String {string} sounds {expected} at fret {fret} but {found} was given"
            ),
            FretboardError::NoteNotInScale { note } => {
                write!(f, "Note {note} is not part of the scale")
            }
            FretboardError::InvalidStyle(reason) => write!(f, "Invalid diagram style: {reason}"),
        }
    }
}

impl Error for FretboardError {}
