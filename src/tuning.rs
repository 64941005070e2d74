use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::FretboardError;
use crate::fretboard::{GuitarString, NUM_STRINGS};
use crate::note::{NoteName, NoteRing};

/// The open notes of a 6-string guitar, listed from string 1 (the first entry) to string 6.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tuning {
    open_notes: [NoteName; NUM_STRINGS],
}

impl Tuning {
    pub fn new(open_notes: [NoteName; NUM_STRINGS]) -> Self {
        Self { open_notes }
    }

    /// Standard tuning E-B-G-D-A-E with string 1 being the high E string.
    pub fn standard() -> Self {
        Self::new([
            NoteName::E,
            NoteName::B,
            NoteName::G,
            NoteName::D,
            NoteName::A,
            NoteName::E,
        ])
    }

    /// ```
    /// # use fretboard::note::NoteName;
    /// # use fretboard::fretboard::GuitarString;
    /// # use fretboard::tuning::Tuning;
    /// let drop_d = Tuning::from_names(&["E", "B", "G", "D", "A", "D"]).unwrap();
    /// assert_eq!(drop_d.open_note(GuitarString::new(6).unwrap()), NoteName::D);
    /// ```
    pub fn from_names(names: &[&str]) -> Result<Self, FretboardError> {
        if names.len() != NUM_STRINGS {
            return Err(FretboardError::InvalidTuning {
                num_strings: names.len(),
            });
        }

        let mut open_notes = [NoteName::E; NUM_STRINGS];
        for (open_note, name) in open_notes.iter_mut().zip(names) {
            *open_note = NoteRing::lookup(name)?;
        }

        Ok(Self::new(open_notes))
    }

    pub fn open_note(&self, string: GuitarString) -> NoteName {
        self.open_notes[string.index()]
    }

    pub fn open_notes(&self) -> &[NoteName; NUM_STRINGS] {
        &self.open_notes
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl Display for Tuning {
    /// ```
    /// # use fretboard::tuning::Tuning;
    /// assert_eq!(Tuning::standard().to_string(), "E,B,G,D,A,E");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (index, note) in self.open_notes.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

impl FromStr for Tuning {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_names(&s.split(',').collect::<Vec<_>>())
    }
}
