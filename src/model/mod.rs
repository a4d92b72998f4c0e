//! Value types produced by annotation parsing.

pub mod column_sort;

pub use column_sort::{
    format_grouping_levels, format_sort_level, ColumnSort, GroupingLevels, SortDirection,
    SortLevel,
};
