//! Measure types: the named numeric inputs that parameterize a shape.
//!
//! Values are checked on the way in, so a stored measure is always finite and
//! non-negative. Zero is storable; the validator treats it as missing.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use thiserror::Error;

/// A point in the surface's translated frame.
pub type Point = DVec2;

/// Why a measure value was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    #[error("not a number")]
    NaN,
    #[error("must be finite")]
    Infinite,
    #[error("must not be negative")]
    Negative,
}

/// Validate a caller-supplied measure value.
#[inline]
pub fn try_non_negative(val: f64) -> Result<f64, NumericError> {
    match val {
        v if v.is_nan() => Err(NumericError::NaN),
        v if v.is_infinite() => Err(NumericError::Infinite),
        v if v < 0.0 => Err(NumericError::Negative),
        v => Ok(v),
    }
}

/// The recognized measure keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKey {
    Radius,
    SideLength,
    Width,
    Height,
}

impl MeasureKey {
    pub const ALL: [MeasureKey; 4] = [
        MeasureKey::Radius,
        MeasureKey::SideLength,
        MeasureKey::Width,
        MeasureKey::Height,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MeasureKey::Radius => "radius",
            MeasureKey::SideLength => "side length",
            MeasureKey::Width => "width",
            MeasureKey::Height => "height",
        }
    }
}

impl fmt::Display for MeasureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the measure keywords.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown measure: {0}")]
pub struct UnknownMeasureKey(pub String);

impl FromStr for MeasureKey {
    type Err = UnknownMeasureKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasureKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownMeasureKey(s.to_string()))
    }
}

/// The measures supplied with a draw request.
///
/// Keys a shape does not use are ignored by it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measures {
    radius: Option<f64>,
    side_length: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

impl Measures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a measure, rejecting NaN, infinite and negative values.
    pub fn set(&mut self, key: MeasureKey, value: f64) -> Result<(), NumericError> {
        let value = try_non_negative(value)?;
        *self.slot_mut(key) = Some(value);
        Ok(())
    }

    /// Builder form of [`Measures::set`].
    pub fn with(mut self, key: MeasureKey, value: f64) -> Result<Self, NumericError> {
        self.set(key, value)?;
        Ok(self)
    }

    /// The raw stored value, zero included.
    pub fn get(&self, key: MeasureKey) -> Option<f64> {
        match key {
            MeasureKey::Radius => self.radius,
            MeasureKey::SideLength => self.side_length,
            MeasureKey::Width => self.width,
            MeasureKey::Height => self.height,
        }
    }

    /// The value if it is present and strictly positive.
    pub fn positive(&self, key: MeasureKey) -> Option<f64> {
        self.get(key).filter(|v| *v > 0.0)
    }

    fn slot_mut(&mut self, key: MeasureKey) -> &mut Option<f64> {
        match key {
            MeasureKey::Radius => &mut self.radius,
            MeasureKey::SideLength => &mut self.side_length,
            MeasureKey::Width => &mut self.width,
            MeasureKey::Height => &mut self.height,
        }
    }
}
