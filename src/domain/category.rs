//! Entry categories

use std::fmt;
use std::str::FromStr;

/// Fixed labels used to partition entries within a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Work,
    Learning,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Work, Category::Learning, Category::Other];

    /// Label persisted in the store
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Learning => "learning",
            Category::Other => "other",
        }
    }

    /// Heading shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Learning => "Learning",
            Category::Other => "Other",
        }
    }

    /// Match a stored label exactly.
    ///
    /// Unlike [`FromStr`], no normalization happens here: a stored `"Work"` is
    /// not a known category.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "learning" => Ok(Category::Learning),
            "other" => Ok(Category::Other),
            _ => Err(s.to_string()),
        }
    }
}
