//! Derive major scales from a root note using the fixed interval formula.

use std::fmt::{self, Display, Formatter};

use crate::error::FretboardError;
use crate::note::{NoteName, NoteRing};

/// A named semitone offset above the root of a major scale.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Interval {
    Unison,
    MajorSecond,
    MajorThird,
    PerfectFourth,
    PerfectFifth,
    MajorSixth,
    MajorSeventh,
}

impl Interval {
    pub fn semitones(self) -> i32 {
        match self {
            Interval::Unison => 0,
            Interval::MajorSecond => 2,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::PerfectFifth => 7,
            Interval::MajorSixth => 9,
            Interval::MajorSeventh => 11,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let short_name = match self {
            Interval::Unison => "P1",
            Interval::MajorSecond => "M2",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::PerfectFifth => "P5",
            Interval::MajorSixth => "M6",
            Interval::MajorSeventh => "M7",
        };
        f.pad(short_name)
    }
}

/// The major scale formula in ascending order.
pub const MAJOR_SCALE_INTERVALS: [Interval; 7] = [
    Interval::Unison,
    Interval::MajorSecond,
    Interval::MajorThird,
    Interval::PerfectFourth,
    Interval::PerfectFifth,
    Interval::MajorSixth,
    Interval::MajorSeventh,
];

/// The 7 notes of a major scale, starting at its root.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Scale {
    notes: [NoteName; 7],
    members: NoteSet,
}

impl Scale {
    /// ```
    /// # use fretboard::note::NoteName;
    /// # use fretboard::scale::Scale;
    /// let scale = Scale::major(NoteName::G);
    /// assert_eq!(scale.to_string(), "G A B C D E F#");
    /// assert!(scale.contains(NoteName::FSharp));
    /// assert!(!scale.contains(NoteName::F));
    /// ```
    pub fn major(root: NoteName) -> Scale {
        let root_index = NoteRing::index_of(root);
        let notes =
            MAJOR_SCALE_INTERVALS.map(|interval| NoteRing::at(root_index + interval.semitones()));

        Scale {
            notes,
            members: notes.iter().copied().collect(),
        }
    }

    pub fn root(&self) -> NoteName {
        self.notes[0]
    }

    pub fn notes(&self) -> &[NoteName; 7] {
        &self.notes
    }

    pub fn contains(&self, note: NoteName) -> bool {
        self.members.contains(note)
    }

    /// Returns the 1-based scale degree of `note`, if it is part of the scale.
    pub fn degree_of(&self, note: NoteName) -> Option<usize> {
        self.notes
            .iter()
            .position(|&scale_note| scale_note == note)
            .map(|index| index + 1)
    }

    /// Iterates over `(degree, interval, note)` with 1-based degrees.
    pub fn degrees(&self) -> impl Iterator<Item = (usize, Interval, NoteName)> + '_ {
        MAJOR_SCALE_INTERVALS
            .iter()
            .zip(&self.notes)
            .enumerate()
            .map(|(index, (&interval, &note))| (index + 1, interval, note))
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (index, note) in self.notes.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

/// Builds the major scale of the note called `root_name`.
///
/// ```
/// # use fretboard::FretboardError;
/// # use fretboard::scale;
/// assert_eq!(
///     scale::build_major_scale("C").unwrap().to_string(),
///     "C D E F G A B"
/// );
/// assert_eq!(
///     scale::build_major_scale("Cb"),
///     Err(FretboardError::InvalidPitch("Cb".to_owned()))
/// );
/// ```
pub fn build_major_scale(root_name: &str) -> Result<Scale, FretboardError> {
    NoteRing::lookup(root_name).map(Scale::major)
}

/// Constant-time membership test over the 12 note names.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct NoteSet {
    bits: u16,
}

impl NoteSet {
    fn insert(&mut self, note: NoteName) {
        self.bits |= 1 << NoteRing::index_of(note);
    }

    fn contains(self, note: NoteName) -> bool {
        self.bits & (1 << NoteRing::index_of(note)) != 0
    }
}

impl FromIterator<NoteName> for NoteSet {
    fn from_iter<I: IntoIterator<Item = NoteName>>(iter: I) -> Self {
        let mut set = NoteSet::default();
        for note in iter {
            set.insert(note);
        }
        set
    }
}
