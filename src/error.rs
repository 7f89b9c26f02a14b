//! # Error Types
//!
//! This module defines all error types for tab generation.
//!
//! Every error is reported before any tab is returned: there is no partial-result mode.
//!
//! ## Error Types
//! - `InvalidTone` - The chord root is not a known tone symbol or alias
//! - `InvalidArgument` - The requested tab count is zero or negative
//! - `NoCandidates` - A string has no fret that sounds a chord tone
//! - `Config` - The YAML configuration could not be read or is out of range
//!
//! ## Usage
//! ```rust
//! use tabgen::{TabCalculator, TabError};
//!
//! match TabCalculator::new("X#").and_then(|calc| calc.generate(1)) {
//!     Ok(tabs) => println!("{} tabs", tabs.len()),
//!     Err(TabError::InvalidTone(symbol)) => eprintln!("Unknown tone: {}", symbol),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::tone::Tone;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabError {
    /// Unknown tone symbol.
    ///
    /// Occurs when a chord root is neither one of the 12 canonical symbols nor a
    /// recognized enharmonic alias.
    ///
    /// # Example
    /// ```
    /// # use tabgen::TabError;
    /// let err = TabError::InvalidTone("X#".to_string());
    /// assert_eq!(err.to_string(), "Invalid tone: 'X#'");
    /// ```
    #[error("Invalid tone: '{0}'")]
    InvalidTone(String),

    /// Invalid argument, such as asking for zero tabs.
    ///
    /// # Example
    /// ```
    /// # use tabgen::TabError;
    /// let err = TabError::InvalidArgument("tab count must be at least 1, got 0".to_string());
    /// assert_eq!(err.to_string(), "Invalid argument: tab count must be at least 1, got 0");
    /// ```
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A string yields no candidate fret within the fret range.
    ///
    /// Cannot happen for a major triad on a full-size neck, but becomes reachable
    /// when `max-frets` is configured small.
    ///
    /// # Example
    /// ```
    /// # use tabgen::{TabError, Tone};
    /// let err = TabError::NoCandidates { string: 2, open: Tone::G, max_frets: 2 };
    /// assert_eq!(err.to_string(), "No chord tone on string 3 (open G) below fret 2");
    /// ```
    #[error("No chord tone on string {} (open {open}) below fret {max_frets}", .string + 1)]
    NoCandidates { string: usize, open: Tone, max_frets: u8 },

    /// Configuration error.
    ///
    /// # Example
    /// ```
    /// # use tabgen::TabError;
    /// let err = TabError::Config("max-frets must be between 1 and 24".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: max-frets must be between 1 and 24");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),
}
