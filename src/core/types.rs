use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One cell of a host-supplied category column.
///
/// Hosts hand categories over as loosely typed primitives; the builder only
/// ever needs the trimmed label form and, for measures, the numeric form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl PrimitiveValue {
    /// Trimmed string form used as the bar's category label.
    ///
    /// Returns `None` for `Null` and whitespace-only cells so callers can
    /// skip rows without a usable category.
    #[must_use]
    pub fn as_category_label(&self) -> Option<String> {
        match self {
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            Self::Number(number) => Some(number.to_string()),
            Self::Bool(flag) => Some(flag.to_string()),
            Self::Null => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Bool(flag) => Some(f64::from(u8::from(*flag))),
            Self::Text(_) | Self::Null => None,
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<f64> for PrimitiveValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}
