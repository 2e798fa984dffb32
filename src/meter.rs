//! Strength meter view data.
//!
//! Turns a [`Classification`] into what a three-segment strength bar needs:
//! progress value, label, colors per segment and the error line. No
//! rendering happens here.

use crate::category::{Category, Classification};

pub const YELLOW: &str = "#FFC107";
pub const RED: &str = "#F44336";
pub const GREEN: &str = "#4CAF50";
pub const GRAY_LIGHT: &str = "#E0E0E0";

/// Number of segments in the bar.
pub const SEGMENTS: usize = 3;

/// Colors for each tier, plus the neutral color of an empty meter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColorTable {
    pub too_short: String,
    pub weak: String,
    pub strong: String,
    pub default: String,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            too_short: YELLOW.to_string(),
            weak: RED.to_string(),
            strong: GREEN.to_string(),
            default: GRAY_LIGHT.to_string(),
        }
    }
}

impl ColorTable {
    pub fn color_for(&self, category: Category) -> &str {
        match category {
            Category::Empty => &self.default,
            Category::TooShort => &self.too_short,
            Category::Weak => &self.weak,
            Category::Strong => &self.strong,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meter<'a> {
    pub category: Category,
    pub progress: u8,
    pub label: &'static str,
    pub color: &'a str,
    /// Fill color of each segment; `None` when the segment is unlit.
    pub segments: [Option<&'a str>; SEGMENTS],
    message: &'a str,
}

impl<'a> Meter<'a> {
    pub fn new(classification: &'a Classification, colors: &'a ColorTable) -> Self {
        let category = classification.category;
        let color = colors.color_for(category);
        let lit = category.tier();

        let mut segments = [None; SEGMENTS];
        for segment in segments.iter_mut().take(lit) {
            *segment = Some(color);
        }

        Self {
            category,
            progress: category.progress(),
            label: category.label(),
            color,
            segments,
            message: &classification.message,
        }
    }

    /// Error line to display under the bar.
    ///
    /// A caller-supplied override replaces the classification message
    /// entirely. Returns `None` when there is nothing to show.
    pub fn error_text<'b>(&'b self, override_msg: Option<&'b str>) -> Option<&'b str> {
        match override_msg {
            Some(text) if !text.is_empty() => Some(text),
            _ if self.message.is_empty() => None,
            _ => Some(self.message),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_color_table() {
        let colors: ColorTable = serde_json::from_str(
            r##"{"tooShort": "#111", "weak": "#222", "strong": "#333", "default": "#444"}"##,
        )
        .expect("valid colors");
        assert_eq!(colors.color_for(Category::Weak), "#222");
        assert_eq!(colors.color_for(Category::Empty), "#444");
    }
}
