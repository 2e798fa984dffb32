//! Strength categories and the classification result.

/// Coarse strength tier, ordered weakest to strongest.
///
/// `Empty` sits below the scale: it is the neutral state of a meter with no
/// input, not a strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Category {
    #[default]
    Empty,
    TooShort,
    Weak,
    Strong,
}

impl Category {
    /// Progress value on a 0..=100 scale.
    pub fn progress(self) -> u8 {
        match self {
            Category::Empty | Category::TooShort => 0,
            Category::Weak => 50,
            Category::Strong => 100,
        }
    }

    /// Text shown next to the meter. Empty for [`Category::Empty`].
    pub fn label(self) -> &'static str {
        match self {
            Category::Empty => "",
            Category::TooShort => "Too Short",
            Category::Weak => "Weak",
            Category::Strong => "Strong",
        }
    }

    /// Number of meter segments lit for this tier (0..=3).
    pub fn tier(self) -> usize {
        match self {
            Category::Empty => 0,
            Category::TooShort => 1,
            Category::Weak => 2,
            Category::Strong => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::Empty => "Empty",
            other => other.label(),
        })
    }
}

/// Outcome of classifying one password.
///
/// `message` is empty when nothing further is being asked of the password,
/// or when the password is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    pub category: Category,
    pub message: String,
}

impl Classification {
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_weakest_to_strongest() {
        assert!(Category::TooShort < Category::Weak);
        assert!(Category::Weak < Category::Strong);
        assert!(Category::Empty < Category::TooShort);
    }

    #[test]
    fn test_progress_scale() {
        assert_eq!(Category::Empty.progress(), 0);
        assert_eq!(Category::TooShort.progress(), 0);
        assert_eq!(Category::Weak.progress(), 50);
        assert_eq!(Category::Strong.progress(), 100);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Empty.label(), "");
        assert_eq!(Category::TooShort.label(), "Too Short");
        assert_eq!(Category::TooShort.to_string(), "Too Short");
        assert_eq!(Category::Empty.to_string(), "Empty");
    }
}
