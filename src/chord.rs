//! Major triads.
//!
//! A chord is built from its root as `root, root + 4, root + 7` semitones. No other
//! chord quality exists here.

use std::fmt;
use std::str::FromStr;

use crate::error::TabError;
use crate::tone::Tone;

/// Semitone offsets from the root: root, major 3rd, perfect 5th.
pub const MAJOR_TRIAD: [i32; 3] = [0, 4, 7];

/// A major triad as three pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    tones: [Tone; 3],
}

impl Chord {
    /// Build the major triad on `root`.
    ///
    /// # Example
    /// ```
    /// use tabgen::{Chord, Tone};
    ///
    /// let chord = Chord::major(Tone::C);
    /// assert_eq!(chord.tones(), [Tone::C, Tone::E, Tone::G]);
    /// ```
    pub fn major(root: Tone) -> Self {
        Self {
            tones: MAJOR_TRIAD.map(|interval| root.add(interval)),
        }
    }

    pub fn root(&self) -> Tone {
        self.tones[0]
    }

    pub fn tones(&self) -> [Tone; 3] {
        self.tones
    }

    /// True if `tone` is one of the three chord members.
    pub fn contains(&self, tone: Tone) -> bool {
        self.tones.iter().any(|&member| member == tone)
    }
}

/// Parses a chord name, which is just its root symbol (`"C"`, `"F#"`, `"Eb"`).
impl FromStr for Chord {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Chord::major(s.parse()?))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [root, third, fifth] = self.tones;
        write!(f, "({}, {}, {})", root, third, fifth)
    }
}
