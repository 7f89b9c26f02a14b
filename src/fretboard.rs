//! # Fretboard
//!
//! The six strings of the instrument and the per-string search for frets that sound a
//! chord tone.
//!
//! ## Tuning
//! Strings are listed in print order, from the top line of a tab to the bottom:
//! `E H G D A E`. The tuning is fixed; only the fret range can be changed.
//!
//! ## Candidate frets
//! For every string, every fret in `0..max_frets` whose tone belongs to the chord is a
//! candidate. Fret 0 is the open string. Candidates are returned in ascending order,
//! and that order fixes the enumeration order of the combination search.

use tracing::trace;

use crate::chord::Chord;
use crate::error::TabError;
use crate::tone::Tone;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Exclusive upper bound on fret numbers.
pub const MAX_FRETS: u8 = 14;

/// Largest fret range a fretboard can have.
pub const FRET_LIMIT: u8 = 24;

/// Open-string tones in print order.
pub const STANDARD_TUNING: [Tone; STRING_COUNT] =
    [Tone::E, Tone::H, Tone::G, Tone::D, Tone::A, Tone::E];

/// Candidate frets for each string, index-aligned with the tuning.
pub type Candidates = [Vec<u8>; STRING_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fretboard {
    strings: [Tone; STRING_COUNT],
    max_frets: u8,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::new(MAX_FRETS)
    }
}

impl Fretboard {
    /// Standard tuning with frets `0..max_frets`, capped at [`FRET_LIMIT`].
    pub fn new(max_frets: u8) -> Self {
        Self {
            strings: STANDARD_TUNING,
            max_frets: max_frets.min(FRET_LIMIT),
        }
    }

    pub fn strings(&self) -> [Tone; STRING_COUNT] {
        self.strings
    }

    pub fn max_frets(&self) -> u8 {
        self.max_frets
    }

    /// Tone sounded by `string` held down at `fret`, or `None` past the last string.
    pub fn tone_at(&self, string: usize, fret: u8) -> Option<Tone> {
        self.strings.get(string).map(|open| open.add(fret as i32))
    }

    /// Collect, per string, every fret that sounds a member of `chord`.
    ///
    /// # Errors
    /// Returns [`TabError::NoCandidates`] for the first string with no such fret.
    ///
    /// # Example
    /// ```
    /// use tabgen::{Chord, Fretboard, Tone};
    ///
    /// let candidates = Fretboard::default().candidate_frets(&Chord::major(Tone::C))?;
    /// // A string: C at fret 3, E at 7, G at 10
    /// assert_eq!(candidates[4], vec![3, 7, 10]);
    /// # Ok::<(), tabgen::TabError>(())
    /// ```
    pub fn candidate_frets(&self, chord: &Chord) -> Result<Candidates, TabError> {
        let mut candidates: Candidates = Default::default();

        for (string, (&open, frets)) in self.strings.iter().zip(candidates.iter_mut()).enumerate() {
            frets.extend((0..self.max_frets).filter(|&fret| chord.contains(open.add(fret as i32))));

            if frets.is_empty() {
                return Err(TabError::NoCandidates {
                    string,
                    open,
                    max_frets: self.max_frets,
                });
            }
            trace!(string, %open, ?frets, "candidate frets");
        }

        Ok(candidates)
    }
}
