//! Column sort specifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One field of a sort level and the order it is sorted in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSort {
    /// Field name exactly as written in the annotation.
    pub field_name: String,
    pub ascending_order: bool,
}

/// An ordered list of column sorts.
pub type SortLevel = Vec<ColumnSort>;

/// Ordered groups of column sorts, outermost grouping first.
pub type GroupingLevels = Vec<SortLevel>;

impl ColumnSort {
    pub fn new(field_name: impl Into<String>, ascending_order: bool) -> Self {
        Self {
            field_name: field_name.into(),
            ascending_order,
        }
    }

    pub fn ascending(field_name: impl Into<String>) -> Self {
        Self::new(field_name, true)
    }

    pub fn descending(field_name: impl Into<String>) -> Self {
        Self::new(field_name, false)
    }

    pub fn direction(&self) -> SortDirection {
        if self.ascending_order {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// Renders the canonical annotation form: the direction is only written
/// when it is not the default.
impl fmt::Display for ColumnSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            SortDirection::Asc => write!(f, "{}", self.field_name),
            SortDirection::Desc => write!(f, "{} desc", self.field_name),
        }
    }
}

/// Format a sort level as annotation text, e.g. `A, B desc`.
pub fn format_sort_level(level: &[ColumnSort]) -> String {
    level
        .iter()
        .map(ColumnSort::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format grouping levels as annotation text, e.g. `(A, B desc), (C)`.
pub fn format_grouping_levels(levels: &[SortLevel]) -> String {
    levels
        .iter()
        .map(|level| format!("({})", format_sort_level(level)))
        .collect::<Vec<_>>()
        .join(", ")
}
