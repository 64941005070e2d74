//! Chromatic note names and the cyclic ring they live on.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::FretboardError;

/// Number of semitones in one turn of the [`NoteRing`].
pub const NUM_NOTES: i32 = 12;

/// One of the 12 octave-agnostic chromatic note names, spelled with sharps only.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NoteName {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl NoteName {
    /// All note names in ring order, starting at A.
    pub const ALL: [NoteName; 12] = [
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
        }
    }

    /// Moves `num_semitones` steps around the [`NoteRing`].
    ///
    /// ```
    /// # use fretboard::note::NoteName;
    /// assert_eq!(NoteName::E.plus_semitones(3), NoteName::G);
    /// assert_eq!(NoteName::E.plus_semitones(-5), NoteName::B);
    /// assert_eq!(NoteName::E.plus_semitones(12), NoteName::E);
    /// ```
    pub fn plus_semitones(self, num_semitones: i32) -> NoteName {
        NoteRing::at(NoteRing::index_of(self) + num_semitones)
    }

    /// Counts the semitones [left inclusive, right exclusive) needed to climb from `self` to `other`.
    ///
    /// The result is always between 0 and 11.
    pub fn num_semitones_before(self, other: NoteName) -> i32 {
        (NoteRing::index_of(other) - NoteRing::index_of(self)).rem_euclid(NUM_NOTES)
    }
}

impl Display for NoteName {
    /// ```
    /// # use fretboard::note::NoteName;
    /// assert_eq!(NoteName::FSharp.to_string(), "F#");
    /// assert_eq!(format!("{:<2}|", NoteName::E), "E |");
    /// assert_eq!(format!("{:>3}", NoteName::CSharp), " C#");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteRing::lookup(s)
    }
}

/// The ordered, cyclic sequence of the 12 [`NoteName`]s supporting modular index arithmetic.
pub struct NoteRing;

impl NoteRing {
    /// ```
    /// # use fretboard::note::{NoteName, NoteRing};
    /// assert_eq!(NoteRing::index_of(NoteName::A), 0);
    /// assert_eq!(NoteRing::index_of(NoteName::GSharp), 11);
    /// ```
    pub fn index_of(note: NoteName) -> i32 {
        note as i32
    }

    /// Retrieves the note at `index`, wrapping around in both directions.
    ///
    /// ```
    /// # use fretboard::note::{NoteName, NoteRing};
    /// assert_eq!(NoteRing::at(3), NoteName::C);
    /// assert_eq!(NoteRing::at(15), NoteName::C);
    /// assert_eq!(NoteRing::at(-9), NoteName::C);
    /// assert_eq!(NoteRing::at(-1), NoteName::GSharp);
    /// ```
    pub fn at(index: i32) -> NoteName {
        NoteName::ALL[index.rem_euclid(NUM_NOTES) as usize]
    }

    /// Resolves a note name like `"C#"`.
    ///
    /// Surrounding whitespace is ignored and the letter may be lower case. Flats are not supported.
    pub fn lookup(name: &str) -> Result<NoteName, FretboardError> {
        let trimmed = name.trim();
        let mut chars = trimmed.chars();

        let letter = chars.next().map(|c| c.to_ascii_uppercase());
        let accidental = chars.as_str();

        let note = match (letter, accidental) {
            (Some('A'), "") => NoteName::A,
            (Some('A'), "#") => NoteName::ASharp,
            (Some('B'), "") => NoteName::B,
            (Some('C'), "") => NoteName::C,
            (Some('C'), "#") => NoteName::CSharp,
            (Some('D'), "") => NoteName::D,
            (Some('D'), "#") => NoteName::DSharp,
            (Some('E'), "") => NoteName::E,
            (Some('F'), "") => NoteName::F,
            (Some('F'), "#") => NoteName::FSharp,
            (Some('G'), "") => NoteName::G,
            (Some('G'), "#") => NoteName::GSharp,
            _ => return Err(FretboardError::InvalidPitch(name.to_owned())),
        };

        Ok(note)
    }
}
