//! The three-valued comparison result.

use std::fmt;

/// The result of comparing two values with an [`Ord`](super::Ord) instance.
///
/// The variants sort as `LT < EQ < GT`.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::Ordering;
///
/// assert_eq!(Ordering::LT.reverse(), Ordering::GT);
/// assert_eq!(Ordering::from(3.cmp(&5)), Ordering::LT);
/// assert_eq!(Ordering::EQ.to_string(), "EQ");
/// ```
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ordering {
    /// The left operand is smaller.
    LT,
    /// Both operands are equal.
    EQ,
    /// The left operand is greater.
    GT,
}

impl Ordering {
    /// Swaps `LT` and `GT`, leaving `EQ` unchanged.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::LT => Self::GT,
            Self::EQ => Self::EQ,
            Self::GT => Self::LT,
        }
    }

    /// Returns `self` unless it is `EQ`, in which case `other` decides.
    ///
    /// This is the lexicographic chaining step used by derived orderings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dogs::cmp::Ordering;
    ///
    /// assert_eq!(Ordering::EQ.then(Ordering::LT), Ordering::LT);
    /// assert_eq!(Ordering::GT.then(Ordering::LT), Ordering::GT);
    /// ```
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        match self {
            Self::EQ => other,
            Self::LT | Self::GT => self,
        }
    }

    /// Like [`then`](Self::then), but only computes `other` when needed.
    #[must_use]
    pub fn then_with<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::EQ => other(),
            Self::LT | Self::GT => self,
        }
    }

    /// Returns `true` for `LT`.
    pub const fn is_lt(self) -> bool {
        matches!(self, Self::LT)
    }

    /// Returns `true` for `EQ`.
    pub const fn is_eq(self) -> bool {
        matches!(self, Self::EQ)
    }

    /// Returns `true` for `GT`.
    pub const fn is_gt(self) -> bool {
        matches!(self, Self::GT)
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LT => "LT",
            Self::EQ => "EQ",
            Self::GT => "GT",
        };
        formatter.write_str(name)
    }
}

impl From<std::cmp::Ordering> for Ordering {
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Less => Self::LT,
            std::cmp::Ordering::Equal => Self::EQ,
            std::cmp::Ordering::Greater => Self::GT,
        }
    }
}

impl From<Ordering> for std::cmp::Ordering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::LT => Self::Less,
            Ordering::EQ => Self::Equal,
            Ordering::GT => Self::Greater,
        }
    }
}

impl From<Ordering> for i8 {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::LT => -1,
            Ordering::EQ => 0,
            Ordering::GT => 1,
        }
    }
}

impl TryFrom<i8> for Ordering {
    type Error = InvalidOrdering;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i32> for Ordering {
    type Error = InvalidOrdering;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for Ordering {
    type Error = InvalidOrdering;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::LT),
            0 => Ok(Self::EQ),
            1 => Ok(Self::GT),
            _ => Err(InvalidOrdering { value }),
        }
    }
}

/// An integer that does not encode an [`Ordering`].
///
/// Only `-1`, `0` and `1` are valid encodings.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::{InvalidOrdering, Ordering};
///
/// let error = Ordering::try_from(7_i32).unwrap_err();
/// assert_eq!(error, InvalidOrdering { value: 7 });
/// assert_eq!(error.to_string(), "unknown Ordering: 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOrdering {
    /// The rejected integer.
    pub value: i64,
}

impl fmt::Display for InvalidOrdering {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown Ordering: {}", self.value)
    }
}

impl std::error::Error for InvalidOrdering {}
