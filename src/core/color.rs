use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VisualError;

/// Perceived-luminance threshold above which in-bar labels switch to black.
pub const LABEL_LUMINANCE_THRESHOLD: f64 = 186.0;

/// Bar fill color, carried as an 8-bit RGB triple.
///
/// The derived `Ord` compares `(red, green, blue)` in order, which is exactly
/// lexicographic order of the lowercase `#rrggbb` form: all rendered colors
/// are fixed-width hex strings, so byte order and string order agree. The
/// view-model sort policy relies on this equivalence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Standard relative-luminance heuristic on 0..=255 channels.
    #[must_use]
    pub fn perceived_luminance(self) -> f64 {
        0.299 * f64::from(self.red) + 0.587 * f64::from(self.green) + 0.114 * f64::from(self.blue)
    }

    /// Black or white, whichever reads against this fill.
    #[must_use]
    pub fn contrasting_label_color(self) -> Rgb {
        if self.perceived_luminance() > LABEL_LUMINANCE_THRESHOLD {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = VisualError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input
            .strip_prefix('#')
            .filter(|rest| rest.len() == 6 && rest.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| {
                VisualError::InvalidData(format!("color literal `{input}` is not `#rrggbb`"))
            })?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| VisualError::InvalidData(format!("color literal `{input}`: {e}")))
        };

        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Rgb {
    type Error = VisualError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Linear two-endpoint color ramp over the domain `[0, domain_max]`.
///
/// The lower bound is fixed at zero regardless of the observed minimum:
/// values below zero saturate toward the minimum endpoint. Channels are
/// interpolated independently, rounded, and clamped to 0..=255, so
/// out-of-domain inputs saturate at the endpoint colors rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    domain_max: f64,
    min_color: Rgb,
    max_color: Rgb,
}

impl ColorScale {
    #[must_use]
    pub fn new(domain_max: f64, min_color: Rgb, max_color: Rgb) -> Self {
        Self {
            domain_max,
            min_color,
            max_color,
        }
    }

    /// Maps a value to its ramp color.
    ///
    /// A degenerate domain (`domain_max <= 0` or non-finite) pins everything
    /// to the minimum endpoint.
    #[must_use]
    pub fn color_for(self, value: f64) -> Rgb {
        let t = if self.domain_max.is_finite() && self.domain_max > 0.0 && value.is_finite() {
            value / self.domain_max
        } else {
            0.0
        };

        let channel = |start: u8, end: u8| {
            let interpolated = f64::from(start) + (f64::from(end) - f64::from(start)) * t;
            interpolated.round().clamp(0.0, 255.0) as u8
        };

        Rgb {
            red: channel(self.min_color.red, self.max_color.red),
            green: channel(self.min_color.green, self.max_color.green),
            blue: channel(self.min_color.blue, self.max_color.blue),
        }
    }
}
