//! Serial row format of one scan round.
//!
//! A row is `N` millivolt values, each right aligned in six columns, joined by
//! commas with no trailing comma:
//!
//! ```text
//!   1650,   -50,  3300,     0,   999
//! ```
//!
//! The line terminator is not part of the row.

use core::fmt;
use core::str::FromStr;

use crate::config::INPUT_COUNT;

/// Width of one value column.
pub const FIELD_WIDTH: usize = 6;

/// Millivolt readings of one scan round, in pin declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Row<const N: usize = INPUT_COUNT>([i32; N]);

impl<const N: usize> Row<N> {
    pub const fn new(millivolts: [i32; N]) -> Self {
        Self(millivolts)
    }

    /// Reading of input `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }

    pub fn millivolts(&self) -> &[i32; N] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for Row<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, millivolts) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:>width$}", millivolts, width = FIELD_WIDTH)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseRowError {
    /// The line did not hold exactly the expected number of fields.
    FieldCount { expected: usize, found: usize },
    /// Field `index` is not an integer.
    Value { index: usize },
}

impl fmt::Display for ParseRowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseRowError::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            ParseRowError::Value { index } => write!(f, "field {} is not an integer", index),
        }
    }
}

/// Parses a row as read back from the serial line. Surrounding whitespace,
/// including the line terminator, is ignored.
impl<const N: usize> FromStr for Row<N> {
    type Err = ParseRowError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let found = line.trim().split(',').count();
        if found != N {
            return Err(ParseRowError::FieldCount { expected: N, found });
        }

        let mut millivolts = [0; N];
        for (index, (field, slot)) in line.trim().split(',').zip(millivolts.iter_mut()).enumerate()
        {
            *slot = field
                .trim()
                .parse()
                .map_err(|_| ParseRowError::Value { index })?;
        }
        Ok(Self(millivolts))
    }
}
