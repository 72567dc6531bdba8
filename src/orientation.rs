//! Orientation of the display area.
//!
//! Desktop hosts have no rotation sensor; the window's aspect ratio plays the
//! role of the device configuration. A square area reads as portrait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::size_class::ScreenMeasurement;

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Reads the current orientation from the host configuration.
///
/// Implementations must be side-effect free; the root asks again on every
/// measurement and never caches the answer.
pub trait OrientationProbe {
    fn orientation(&self, measurement: ScreenMeasurement) -> Orientation;
}

/// Where the orientation comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationSource {
    /// Follow the aspect ratio of the measured area.
    #[default]
    Auto,
    /// Always report portrait, e.g. to preview phone layouts in a wide window.
    Portrait,
    Landscape,
}

impl OrientationProbe for OrientationSource {
    fn orientation(&self, measurement: ScreenMeasurement) -> Orientation {
        match self {
            OrientationSource::Auto => {
                if measurement.width > measurement.height {
                    Orientation::Landscape
                } else {
                    Orientation::Portrait
                }
            }
            OrientationSource::Portrait => Orientation::Portrait,
            OrientationSource::Landscape => Orientation::Landscape,
        }
    }
}
