#[cfg(test)]
mod tests {
    use colspec::model::{format_grouping_levels, format_sort_level, ColumnSort, SortDirection};
    use colspec::{parse_grouping_levels, parse_sort_level};

    #[test]
    fn test_column_sort_value_equality() {
        assert_eq!(ColumnSort::new("A", true), ColumnSort::ascending("A"));
        assert_ne!(ColumnSort::ascending("A"), ColumnSort::descending("A"));
        assert_ne!(ColumnSort::ascending("A"), ColumnSort::ascending("a"));
    }

    #[test]
    fn test_column_sort_json_shape() {
        let json = serde_json::to_value(ColumnSort::descending("LastName")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "field_name": "LastName", "ascending_order": false })
        );

        let back: ColumnSort = serde_json::from_value(json).unwrap();
        assert_eq!(back, ColumnSort::descending("LastName"));
    }

    #[test]
    fn test_sort_direction_json() {
        assert_eq!(
            serde_json::to_string(&SortDirection::Desc).unwrap(),
            "\"desc\""
        );
    }

    #[test]
    fn test_canonical_sort_level_reparses() {
        let level = parse_sort_level("a ASC ,b   DESC,c").unwrap();
        let text = format_sort_level(&level);
        assert_eq!(text, "a, b desc, c");
        assert_eq!(parse_sort_level(text.as_str()).unwrap(), level);
    }

    #[test]
    fn test_canonical_grouping_levels_reparses() {
        let levels = parse_grouping_levels("( Region ),(LastName,FirstName DESC)").unwrap();
        let text = format_grouping_levels(&levels);
        assert_eq!(text, "(Region), (LastName, FirstName desc)");
        assert_eq!(parse_grouping_levels(text.as_str()).unwrap(), levels);
    }
}
