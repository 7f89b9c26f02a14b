//! Chord → tabs pipeline.
//!
//! 1. Parse the root symbol and build the major triad
//! 2. Collect candidate frets per string
//! 3. Rank every combination and keep the best `count`

use tracing::debug;

use crate::chord::Chord;
use crate::error::TabError;
use crate::fretboard::Fretboard;
use crate::search::{combination_count, rank_tabs, validate_count};
use crate::tab::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabCalculator {
    chord: Chord,
    fretboard: Fretboard,
}

impl TabCalculator {
    /// Calculator for the major chord named by `chord_name` on a standard fretboard.
    ///
    /// # Errors
    /// Returns [`TabError::InvalidTone`] if the name is not a tone symbol or alias.
    pub fn new(chord_name: &str) -> Result<Self, TabError> {
        Ok(Self::with_fretboard(chord_name.parse()?, Fretboard::default()))
    }

    pub fn with_fretboard(chord: Chord, fretboard: Fretboard) -> Self {
        debug!(%chord, max_frets = fretboard.max_frets(), "built chord");
        Self { chord, fretboard }
    }

    pub fn chord(&self) -> Chord {
        self.chord
    }

    pub fn fretboard(&self) -> Fretboard {
        self.fretboard
    }

    /// The `count` most playable tabs, best first.
    ///
    /// # Example
    /// ```
    /// use tabgen::TabCalculator;
    ///
    /// let tabs = TabCalculator::new("C")?.generate(1)?;
    /// assert_eq!(tabs[0].frets(), [3, 5, 5, 5, 3, 3]);
    /// # Ok::<(), tabgen::TabError>(())
    /// ```
    ///
    /// # Errors
    /// - [`TabError::InvalidArgument`] if `count` is zero or negative
    /// - [`TabError::NoCandidates`] if some string cannot sound a chord tone
    pub fn generate(&self, count: i64) -> Result<Vec<Tab>, TabError> {
        let count = validate_count(count)?;
        let candidates = self.fretboard.candidate_frets(&self.chord)?;
        debug!(
            chord = %self.chord,
            combinations = combination_count(&candidates),
            "searching combinations"
        );
        rank_tabs(&self.fretboard, &candidates, count)
    }
}
