//! Find the frets on each string that sound a note of a given scale.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::error::FretboardError;
use crate::note::{NoteName, NoteRing};
use crate::scale::Scale;
use crate::tuning::Tuning;

pub const NUM_STRINGS: usize = 6;

/// The highest fret covered by a [`FretboardGrid`].
pub const MAX_FRET: u8 = 12;

/// Distance from the anchor at which frets are excluded from a [`PositionWindow`].
pub const WINDOW_REACH: i32 = 4;

/// A physical string numbered from 1 to 6 where string 1 is the first [`Tuning`] entry.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GuitarString {
    number: u8,
}

impl GuitarString {
    pub fn new(number: impl Into<i32>) -> Result<Self, FretboardError> {
        let number = number.into();
        match u8::try_from(number) {
            Ok(valid @ 1..=6) => Ok(Self { number: valid }),
            _ => Err(FretboardError::InvalidString(number)),
        }
    }

    pub fn all() -> impl Iterator<Item = GuitarString> {
        (1..=NUM_STRINGS as u8).map(|number| GuitarString { number })
    }

    pub fn number(self) -> u8 {
        self.number
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.number - 1)
    }
}

impl Display for GuitarString {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// A fret between 0 (the open string) and [`MAX_FRET`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Fret {
    number: u8,
}

impl Fret {
    /// ```
    /// # use fretboard::FretboardError;
    /// # use fretboard::fretboard::Fret;
    /// assert_eq!(Fret::new(12).unwrap().number(), 12);
    /// assert_eq!(Fret::new(13), Err(FretboardError::InvalidFret(13)));
    /// assert_eq!(Fret::new(-1), Err(FretboardError::InvalidFret(-1)));
    /// ```
    pub fn new(number: impl Into<i32>) -> Result<Self, FretboardError> {
        let number = number.into();
        match u8::try_from(number) {
            Ok(valid @ 0..=MAX_FRET) => Ok(Self { number: valid }),
            _ => Err(FretboardError::InvalidFret(number)),
        }
    }

    pub fn all() -> impl Iterator<Item = Fret> {
        (0..=MAX_FRET).map(|number| Fret { number })
    }

    pub fn number(self) -> u8 {
        self.number
    }

    pub fn is_open(self) -> bool {
        self.number == 0
    }
}

impl Display for Fret {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// A fret together with the note it sounds.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct FretPosition {
    pub fret: Fret,
    pub note: NoteName,
}

/// The span of frets `(anchor - 4, anchor + 4)`, exclusive on both sides.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionWindow {
    anchor: Fret,
}

impl PositionWindow {
    pub fn new(anchor: Fret) -> Self {
        Self { anchor }
    }

    pub fn anchor(self) -> Fret {
        self.anchor
    }

    /// ```
    /// # use fretboard::fretboard::{Fret, PositionWindow};
    /// let window = PositionWindow::new(Fret::new(5).unwrap());
    /// assert!(!window.contains(Fret::new(1).unwrap()));
    /// assert!(window.contains(Fret::new(2).unwrap()));
    /// assert!(window.contains(Fret::new(8).unwrap()));
    /// assert!(!window.contains(Fret::new(9).unwrap()));
    /// ```
    pub fn contains(self, fret: Fret) -> bool {
        let anchor = i32::from(self.anchor.number);
        let fret = i32::from(fret.number);
        anchor - WINDOW_REACH < fret && fret < anchor + WINDOW_REACH
    }

    /// Iterates over the frets inside the window that exist on the fretboard.
    pub fn frets(self) -> impl Iterator<Item = Fret> {
        Fret::all().filter(move |&fret| self.contains(fret))
    }
}

/// Named hand positions resolved to the anchor fret of a [`PositionWindow`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Position {
    Open,
    A,
    F,
    D,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Open, Position::A, Position::F, Position::D];

    pub fn anchor(self) -> Fret {
        let number = match self {
            Position::Open => 0,
            Position::A => 2,
            Position::F => 1,
            Position::D => 10,
        };
        Fret { number }
    }

    pub fn window(self) -> PositionWindow {
        PositionWindow::new(self.anchor())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Position::Open => "open",
            Position::A => "a",
            Position::F => "f",
            Position::D => "d",
        };
        f.pad(name)
    }
}

impl FromStr for Position {
    type Err = FretboardError;

    /// ```
    /// # use fretboard::fretboard::Position;
    /// assert_eq!("Open".parse::<Position>(), Ok(Position::Open));
    /// assert_eq!("d".parse::<Position>().unwrap().anchor().number(), 10);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Position::Open),
            "a" => Ok(Position::A),
            "f" => Ok(Position::F),
            "d" => Ok(Position::D),
            _ => Err(FretboardError::InvalidPosition(s.to_owned())),
        }
    }
}

/// The frets of each string that sound a note of the scale, in ascending order.
///
/// Every grid owns its positions. Building or filtering always allocates a new grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FretboardGrid {
    scale: Scale,
    tuning: Tuning,
    strings: [Vec<FretPosition>; NUM_STRINGS],
}

impl FretboardGrid {
    /// Maps `scale` onto frets 0 to 12 of every string of `tuning`.
    pub fn build(scale: Scale, tuning: Tuning) -> Self {
        let strings: [Vec<FretPosition>; NUM_STRINGS] = [0, 1, 2, 3, 4, 5].map(|index| {
            let open_index = NoteRing::index_of(tuning.open_notes()[index]);
            Fret::all()
                .map(|fret| FretPosition {
                    fret,
                    note: NoteRing::at(open_index + i32::from(fret.number)),
                })
                .filter(|position| scale.contains(position.note))
                .collect()
        });

        let grid = Self {
            scale,
            tuning,
            strings,
        };
        debug!(
            "Mapped scale [{}] onto tuning {}: {} positions",
            scale,
            tuning,
            grid.num_positions()
        );
        grid
    }

    /// Rebuilds a grid from externally provided `(string, position)` entries.
    ///
    /// Each position must sound the note implied by `tuning`, and that note must be part of `scale`.
    /// Entries may come in any order. Duplicates are dropped.
    pub fn try_from_entries(
        scale: Scale,
        tuning: Tuning,
        entries: impl IntoIterator<Item = (GuitarString, FretPosition)>,
    ) -> Result<Self, FretboardError> {
        let mut strings: [Vec<FretPosition>; NUM_STRINGS] = Default::default();

        for (string, position) in entries {
            let expected = tuning
                .open_note(string)
                .plus_semitones(i32::from(position.fret.number));
            if expected != position.note {
                return Err(FretboardError::NoteMismatch {
                    string: string.number,
                    fret: position.fret.number,
                    expected,
                    found: position.note,
                });
            }
            if !scale.contains(position.note) {
                return Err(FretboardError::NoteNotInScale {
                    note: position.note,
                });
            }
            strings[string.index()].push(position);
        }

        for positions in &mut strings {
            positions.sort_by_key(|position| position.fret);
            positions.dedup();
        }

        Ok(Self {
            scale,
            tuning,
            strings,
        })
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn positions_on(&self, string: GuitarString) -> &[FretPosition] {
        &self.strings[string.index()]
    }

    /// Iterates over all strings, including strings without any positions.
    pub fn strings(&self) -> impl Iterator<Item = (GuitarString, &[FretPosition])> {
        GuitarString::all().map(|string| (string, self.positions_on(string)))
    }

    pub fn contains(&self, string: GuitarString, fret: Fret) -> bool {
        self.positions_on(string)
            .iter()
            .any(|position| position.fret == fret)
    }

    pub fn num_positions(&self) -> usize {
        self.strings.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_positions() == 0
    }

    /// Narrows the grid down to the [`PositionWindow`] around `anchor`.
    ///
    /// `self` stays untouched so the same grid can be filtered repeatedly with different anchors.
    pub fn filter_by_position(&self, anchor: Fret) -> FretboardGrid {
        self.filter_by_window(PositionWindow::new(anchor))
    }

    pub fn filter_by_window(&self, window: PositionWindow) -> FretboardGrid {
        let strings: [Vec<FretPosition>; NUM_STRINGS] = self.strings.clone().map(|positions| {
            positions
                .into_iter()
                .filter(|position| window.contains(position.fret))
                .collect()
        });

        let filtered = FretboardGrid {
            scale: self.scale,
            tuning: self.tuning,
            strings,
        };
        debug!(
            "Filtered {} positions down to {} around fret {}",
            self.num_positions(),
            filtered.num_positions(),
            window.anchor()
        );
        filtered
    }
}

impl Display for FretboardGrid {
    /// One line per string: the string number, its open note and the `fret:note` pairs.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (string, positions) in self.strings() {
            if string.index() > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {:<2}|", string, self.tuning.open_note(string))?;
            for position in positions {
                write!(f, " {}:{}", position.fret, position.note)?;
            }
        }
        Ok(())
    }
}

/// Maps `scale` onto every string of `tuning`. See [`FretboardGrid::build`].
pub fn build_grid(scale: Scale, tuning: Tuning) -> FretboardGrid {
    FretboardGrid::build(scale, tuning)
}

/// Restricts `grid` to the frets around `anchor`. See [`FretboardGrid::filter_by_position`].
pub fn filter_by_position(grid: &FretboardGrid, anchor: Fret) -> FretboardGrid {
    grid.filter_by_position(anchor)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scale;

    fn string(number: u8) -> GuitarString {
        GuitarString::new(number).unwrap()
    }

    fn fret(number: u8) -> Fret {
        Fret::new(number).unwrap()
    }

    fn c_major_grid() -> FretboardGrid {
        build_grid(
            scale::build_major_scale("C").unwrap(),
            "E,B,G,D,A,E".parse().unwrap(),
        )
    }

    fn frets_on(grid: &FretboardGrid, number: u8) -> Vec<u8> {
        grid.positions_on(string(number))
            .iter()
            .map(|position| position.fret.number())
            .collect()
    }

    #[test]
    fn low_e_string_in_c_major() {
        let grid = c_major_grid();
        let low_e = grid.positions_on(string(6));

        assert!(low_e.contains(&FretPosition {
            fret: fret(0),
            note: NoteName::E
        }));
        assert!(low_e.contains(&FretPosition {
            fret: fret(3),
            note: NoteName::G
        }));
        assert!(low_e.contains(&FretPosition {
            fret: fret(1),
            note: NoteName::F
        }));
        assert!(!grid.contains(string(6), fret(2)));
        assert_eq!(frets_on(&grid, 6), [0, 1, 3, 5, 7, 8, 10, 12]);
    }

    #[test]
    fn full_c_major_grid() {
        let grid = c_major_grid();

        assert_eq!(frets_on(&grid, 1), [0, 1, 3, 5, 7, 8, 10, 12]);
        assert_eq!(frets_on(&grid, 2), [0, 1, 3, 5, 6, 8, 10, 12]);
        assert_eq!(frets_on(&grid, 3), [0, 2, 4, 5, 7, 9, 10, 12]);
        assert_eq!(frets_on(&grid, 4), [0, 2, 3, 5, 7, 9, 10, 12]);
        assert_eq!(frets_on(&grid, 5), [0, 2, 3, 5, 7, 8, 10, 12]);
        assert_eq!(grid.num_positions(), 48);
    }

    #[test]
    fn every_grid_note_belongs_to_the_scale() {
        for root in NoteName::ALL {
            let scale = Scale::major(root);
            let grid = build_grid(scale, Tuning::standard());
            for (string, positions) in grid.strings() {
                for position in positions {
                    assert!(scale.contains(position.note));
                    assert_eq!(
                        grid.tuning()
                            .open_note(string)
                            .plus_semitones(i32::from(position.fret.number())),
                        position.note
                    );
                }
                assert!(positions.windows(2).all(|pair| pair[0].fret < pair[1].fret));
            }
        }
    }

    #[test]
    fn anchor_zero_keeps_first_four_frets() {
        let filtered = filter_by_position(&c_major_grid(), Fret::default());

        for (_, positions) in filtered.strings() {
            assert!(positions.iter().all(|position| position.fret.number() <= 3));
        }
        assert_eq!(frets_on(&filtered, 6), [0, 1, 3]);
        assert_eq!(frets_on(&filtered, 3), [0, 2]);
    }

    #[test]
    fn anchor_five_keeps_frets_two_to_eight() {
        let filtered = filter_by_position(&c_major_grid(), fret(5));

        for (_, positions) in filtered.strings() {
            assert!(positions
                .iter()
                .all(|position| (2..=8).contains(&position.fret.number())));
        }
        assert_eq!(frets_on(&filtered, 1), [3, 5, 7, 8]);
        assert_eq!(frets_on(&filtered, 2), [3, 5, 6, 8]);
    }

    #[test]
    fn filtering_is_repeatable_and_leaves_the_grid_untouched() {
        let grid = c_major_grid();
        let snapshot = grid.clone();

        let first = grid.filter_by_position(fret(7));
        let second = grid.filter_by_position(fret(7));
        let other = grid.filter_by_position(fret(0));
        let third = grid.filter_by_position(fret(7));

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_ne!(first, other);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn separate_grids_do_not_share_positions() {
        let c_major = c_major_grid();
        let g_major = build_grid(scale::build_major_scale("G").unwrap(), Tuning::standard());
        let c_major_again = c_major_grid();

        assert_eq!(c_major, c_major_again);
        assert_eq!(g_major.num_positions(), 48);
        assert!(!g_major.contains(string(1), fret(1)));
    }

    #[test]
    fn g_major_around_first_fret() {
        let grid = build_grid(Scale::major(NoteName::G), Tuning::standard());

        assert_eq!(
            grid.filter_by_position(fret(1)).to_string(),
            "1 E | 0:E 2:F# 3:G\n\
             2 B | 0:B 1:C 3:D\n\
             3 G | 0:G 2:A 4:B\n\
             4 D | 0:D 2:E 4:F#\n\
             5 A | 0:A 2:B 3:C\n\
             6 E | 0:E 2:F# 3:G"
        );
    }

    #[test]
    fn window_frets() {
        let frets = |anchor| {
            PositionWindow::new(fret(anchor))
                .frets()
                .map(Fret::number)
                .collect::<Vec<_>>()
        };

        assert_eq!(frets(0), [0, 1, 2, 3]);
        assert_eq!(frets(1), [0, 1, 2, 3, 4]);
        assert_eq!(frets(5), [2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(frets(12), [9, 10, 11, 12]);
    }

    #[test]
    fn positions_resolve_to_anchors() {
        let anchors = Position::ALL.map(|position| position.anchor().number());
        assert_eq!(anchors, [0, 2, 1, 10]);

        for position in Position::ALL {
            assert_eq!(position.to_string().parse::<Position>(), Ok(position));
        }
        assert_eq!(
            "E".parse::<Position>(),
            Err(FretboardError::InvalidPosition("E".to_owned()))
        );
    }

    #[test]
    fn reject_invalid_strings_and_frets() {
        assert_eq!(GuitarString::new(0), Err(FretboardError::InvalidString(0)));
        assert_eq!(GuitarString::new(7), Err(FretboardError::InvalidString(7)));
        assert_eq!(Fret::new(-4), Err(FretboardError::InvalidFret(-4)));
        assert_eq!(Fret::new(300), Err(FretboardError::InvalidFret(300)));
    }

    #[test]
    fn rebuild_from_entries() {
        let grid = c_major_grid().filter_by_position(fret(3));
        let mut entries = grid
            .strings()
            .flat_map(|(string, positions)| positions.iter().map(move |&position| (string, position)))
            .collect::<Vec<_>>();
        entries.reverse();
        entries.push(entries[0]);

        let rebuilt =
            FretboardGrid::try_from_entries(*grid.scale(), *grid.tuning(), entries).unwrap();

        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn reject_entries_with_wrong_or_foreign_notes() {
        let scale = Scale::major(NoteName::C);

        let wrong_note = FretboardGrid::try_from_entries(
            scale,
            Tuning::standard(),
            [(
                string(6),
                FretPosition {
                    fret: fret(3),
                    note: NoteName::A,
                },
            )],
        );
        assert_eq!(
            wrong_note,
            Err(FretboardError::NoteMismatch {
                string: 6,
                fret: 3,
                expected: NoteName::G,
                found: NoteName::A,
            })
        );

        let foreign_note = FretboardGrid::try_from_entries(
            scale,
            Tuning::standard(),
            [(
                string(6),
                FretPosition {
                    fret: fret(2),
                    note: NoteName::FSharp,
                },
            )],
        );
        assert_eq!(
            foreign_note,
            Err(FretboardError::NoteNotInScale {
                note: NoteName::FSharp
            })
        );
    }
}
