//! # Tones
//!
//! Pitch classes on a cyclic 12-tone system.
//!
//! The twelve canonical symbols, in order, are
//! `C C# D D# E F F# G G# A A# H`. `H` is the pitch a semitone below `C`
//! (written `B` in English notation).
//!
//! Flat spellings are accepted on input and rewritten to their sharp equivalent
//! before any arithmetic happens (see [`ALIASES`]).
//!
//! ## Example
//! ```rust
//! use tabgen::Tone;
//!
//! let c: Tone = "C".parse()?;
//! assert_eq!(c.add(4), Tone::E);
//! assert_eq!(c.add(-1), Tone::H);
//! assert_eq!("Db".parse::<Tone>()?, Tone::CSharp);
//! # Ok::<(), tabgen::TabError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::TabError;

/// Number of pitch classes in one octave.
pub const TONE_COUNT: usize = 12;

/// A pitch class, independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    H,
}

/// Enharmonic spellings and the canonical symbol each one stands for.
pub const ALIASES: [(&str, &str); 7] = [
    ("Cb", "H"),
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("As", "G#"),
    ("Ab", "G#"),
    ("Hb", "A#"),
];

impl Tone {
    /// All tones in cyclic order, starting at C.
    pub const ALL: [Tone; TONE_COUNT] = [
        Tone::C,
        Tone::CSharp,
        Tone::D,
        Tone::DSharp,
        Tone::E,
        Tone::F,
        Tone::FSharp,
        Tone::G,
        Tone::GSharp,
        Tone::A,
        Tone::ASharp,
        Tone::H,
    ];

    /// Position in the cycle, 0 for C through 11 for H.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tone at the given position; positions wrap around the cycle.
    pub fn from_index(index: usize) -> Tone {
        Self::ALL[index % TONE_COUNT]
    }

    /// Tone `interval` semitones away from this one.
    ///
    /// Any integer is accepted; negative intervals go down.
    pub fn add(self, interval: i32) -> Tone {
        let shifted = (self.index() as i32 + interval).rem_euclid(TONE_COUNT as i32);
        Self::ALL[shifted as usize]
    }

    /// Canonical symbol, sharp-spelled.
    pub fn symbol(self) -> &'static str {
        match self {
            Tone::C => "C",
            Tone::CSharp => "C#",
            Tone::D => "D",
            Tone::DSharp => "D#",
            Tone::E => "E",
            Tone::F => "F",
            Tone::FSharp => "F#",
            Tone::G => "G",
            Tone::GSharp => "G#",
            Tone::A => "A",
            Tone::ASharp => "A#",
            Tone::H => "H",
        }
    }
}

/// Rewrites an enharmonic alias to its canonical symbol; other text passes through.
pub fn canonicalize(symbol: &str) -> &str {
    for (alias, canonical) in ALIASES {
        if alias == symbol {
            return canonical;
        }
    }
    symbol
}

impl FromStr for Tone {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = canonicalize(s.trim());
        Self::ALL
            .iter()
            .copied()
            .find(|tone| tone.symbol() == symbol)
            .ok_or_else(|| TabError::InvalidTone(s.to_string()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
