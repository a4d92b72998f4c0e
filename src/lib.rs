//! # colspec
//!
//! Parser for the annotations that say how table columns are sorted or grouped.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Annotation text                        │
//! │        "LastName, FirstName desc"  /  "(A), (B, C)"      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [lexer]
//! ┌─────────────────────────────────────────────────────────┐
//! │               Tokens (pulled one at a time)              │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [context: expected kinds + diagnostics]
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Validated tokens                         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [parser]
//! ┌─────────────────────────────────────────────────────────┐
//! │     SortLevel / GroupingLevels   or   ParseError         │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dsl;
pub mod model;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::dsl::{parse_grouping_levels, parse_sort_level, ParseError, ParseResult};
    pub use crate::model::{
        format_grouping_levels, format_sort_level, ColumnSort, GroupingLevels, SortDirection,
        SortLevel,
    };
}

pub use dsl::{parse_grouping_levels, parse_sort_level, ParseError, ParseResult};
pub use model::{ColumnSort, GroupingLevels, SortLevel};
