//! Breakpoint classification of the measured display area.
//!
//! A [`ScreenMeasurement`] is bucketed into one of three [`SizeClass`]es by a
//! [`Breakpoints`] table. The table follows the phone / tablet split used by
//! the layouts:
//!
//! | class    | condition                                         |
//! |----------|---------------------------------------------------|
//! | `Small`  | `width <= small_max` or `height <= small_max`     |
//! | `Medium` | `width > small_max` and `height <= medium_max`    |
//! | `Large`  | everything else                                   |
//!
//! The three conditions partition the plane, so [`Breakpoints::classify`] is
//! total and never ambiguous.

use std::fmt;

use floem::kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default upper bound (inclusive) of the small class, in logical pixels.
pub const SMALL_MAX: f64 = 480.0;
/// Default upper bound (inclusive) on the height of the medium class.
pub const MEDIUM_MAX: f64 = 1024.0;

/// One measurement of the area available to the root view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenMeasurement {
    pub width: f64,
    pub height: f64,
}

impl ScreenMeasurement {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<Size> for ScreenMeasurement {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl fmt::Display for ScreenMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Human readable name, as used in layout headings.
    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Breakpoint table in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub small_max: f64,
    pub medium_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small_max: SMALL_MAX,
            medium_max: MEDIUM_MAX,
        }
    }
}

impl Breakpoints {
    pub fn classify(&self, measurement: ScreenMeasurement) -> SizeClass {
        let ScreenMeasurement { width, height } = measurement;
        if width <= self.small_max || height <= self.small_max {
            return SizeClass::Small;
        }
        if width > self.small_max && height <= self.medium_max {
            return SizeClass::Medium;
        }
        // width > small_max && height > medium_max, or a NaN component
        SizeClass::Large
    }

    /// Rejects tables that would make a class unreachable.
    pub fn validate(&self) -> Result<()> {
        if !self.small_max.is_finite() || !self.medium_max.is_finite() {
            return Err(ConfigError::NonFiniteBreakpoint {
                small_max: self.small_max,
                medium_max: self.medium_max,
            }
            .into());
        }
        if self.small_max < 0.0 || self.small_max > self.medium_max {
            return Err(ConfigError::InvertedBreakpoints {
                small_max: self.small_max,
                medium_max: self.medium_max,
            }
            .into());
        }
        Ok(())
    }
}
