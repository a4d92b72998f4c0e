#[cfg(test)]
mod tests {
    use colspec::dsl::{parse_grouping_levels, ParseError};
    use colspec::model::ColumnSort;
    use insta::assert_snapshot;

    fn error_of(text: &str) -> String {
        parse_grouping_levels(text)
            .expect_err("expected a parse error")
            .to_string()
    }

    fn field_names(levels: &[Vec<ColumnSort>]) -> Vec<Vec<&str>> {
        levels
            .iter()
            .map(|level| level.iter().map(|s| s.field_name.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_blank_text_produces_no_grouping_levels() {
        for text in [None, Some(""), Some(" \t\r\n ")] {
            assert_eq!(parse_grouping_levels(text), Ok(vec![]), "text: {:?}", text);
        }
    }

    #[test]
    fn test_unrecognized_character() {
        assert_snapshot!(error_of("([A], [B])"), @"Unrecognized character '['.");
    }

    #[test]
    fn test_levels_with_differing_numbers_of_columns() {
        let levels = parse_grouping_levels("(B, A), (C), (E, F, D)").unwrap();
        assert_eq!(
            field_names(&levels),
            vec![vec!["B", "A"], vec!["C"], vec!["E", "F", "D"]]
        );
        assert!(levels.iter().flatten().all(|s| s.ascending_order));
    }

    #[test]
    fn test_asc_and_desc_any_casing() {
        let levels = parse_grouping_levels("(A ASC, B aSc), (C DESC, D dEsC)").unwrap();
        assert_eq!(
            levels,
            vec![
                vec![ColumnSort::ascending("A"), ColumnSort::ascending("B")],
                vec![ColumnSort::descending("C"), ColumnSort::descending("D")],
            ]
        );
    }

    #[test]
    fn test_asc_and_desc_keywords_may_be_used() {
        let levels = parse_grouping_levels("(A asc, B), (C, D desc)").unwrap();
        assert_eq!(levels.len(), 2);
        assert!(levels[0][0].ascending_order);
        assert!(levels[0][1].ascending_order);
        assert!(levels[1][0].ascending_order);
        assert!(!levels[1][1].ascending_order);
    }

    #[test]
    fn test_default_sort_is_ascending() {
        let levels = parse_grouping_levels("(A)").unwrap();
        assert_eq!(levels, vec![vec![ColumnSort::ascending("A")]]);
    }

    #[test]
    fn test_field_names_must_be_within_parentheses() {
        assert_snapshot!(
            error_of("A"),
            @"Expected '(' or end of input at start of input, but found identifier 'A'."
        );
    }

    #[test]
    fn test_field_names_separated_with_commas() {
        assert_snapshot!(
            error_of("(A B)"),
            @"Expected keyword 'asc', keyword 'desc', comma, or ')' after identifier 'A', but found identifier 'B'."
        );
    }

    #[test]
    fn test_levels_separated_with_commas() {
        assert_snapshot!(
            error_of("(A) (B)"),
            @"Expected comma or end of input after ')', but found '('."
        );
    }

    #[test]
    fn test_direction_keyword_twice() {
        assert_snapshot!(
            error_of("(A asc asc)"),
            @"Expected comma or ')' after keyword 'asc', but found keyword 'asc'."
        );
        assert_snapshot!(
            error_of("(A desc desc)"),
            @"Expected comma or ')' after keyword 'desc', but found keyword 'desc'."
        );
        assert_snapshot!(
            error_of("(A asc desc)"),
            @"Expected comma or ')' after keyword 'asc', but found keyword 'desc'."
        );
    }

    #[test]
    fn test_direction_keyword_without_field() {
        for (text, keyword) in [
            ("(asc)", "asc"),
            ("(desc)", "desc"),
            ("(asc A)", "asc"),
            ("(desc A)", "desc"),
        ] {
            assert_eq!(
                error_of(text),
                format!("Expected identifier after '(', but found keyword '{}'.", keyword)
            );
        }
    }

    #[test]
    fn test_direction_keyword_on_entire_level() {
        assert_snapshot!(
            error_of("(A) asc"),
            @"Expected comma or end of input after ')', but found keyword 'asc'."
        );
        assert_snapshot!(
            error_of("(A) desc"),
            @"Expected comma or end of input after ')', but found keyword 'desc'."
        );
    }

    #[test]
    fn test_empty_level() {
        assert_snapshot!(
            error_of("()"),
            @"Expected identifier after '(', but found ')'."
        );
    }

    #[test]
    fn test_unclosed_level() {
        assert_snapshot!(
            error_of("(A, B"),
            @"Expected keyword 'asc', keyword 'desc', comma, or ')' after identifier 'B', but found end of input."
        );
    }

    #[test]
    fn test_trailing_comma_within_parentheses() {
        assert_snapshot!(
            error_of("(A, )"),
            @"Expected identifier after comma, but found ')'."
        );
    }

    #[test]
    fn test_trailing_comma_outside_parentheses() {
        assert_snapshot!(
            error_of("(A),"),
            @"Expected '(' after comma, but found end of input."
        );
    }

    #[test]
    fn test_nested_parentheses() {
        assert_snapshot!(
            error_of("((A))"),
            @"Expected identifier after '(', but found '('."
        );
    }

    #[test]
    fn test_field_names_with_underscores_and_digits() {
        for name in ["_", "_A", "A_", "A_A", "A0", "A0A"] {
            let levels = parse_grouping_levels(format!("({})", name).as_str()).unwrap();
            assert_eq!(levels, vec![vec![ColumnSort::ascending(name)]]);
        }
    }

    #[test]
    fn test_field_names_may_not_start_with_digits() {
        for name in ["0", "0A"] {
            let text = format!("({})", name);
            assert_eq!(
                parse_grouping_levels(text.as_str()),
                Err(ParseError::UnrecognizedCharacter {
                    character: '0',
                    span: 1..2,
                })
            );
        }
    }

    #[test]
    fn test_duplicate_field_in_same_level() {
        assert_snapshot!(
            error_of("(A, B, a)"),
            @"The field name 'a' appears more than once."
        );
    }

    #[test]
    fn test_duplicate_field_in_different_levels() {
        assert_snapshot!(
            error_of("(a, B), (A, C)"),
            @"The field name 'A' appears more than once."
        );
    }

    #[test]
    fn test_duplicate_field_regardless_of_non_ascii_casing() {
        assert_snapshot!(
            error_of("(AΣ), (Aσ)"),
            @"The field name 'Aσ' appears more than once."
        );
        assert_snapshot!(
            error_of("(É, B), (é)"),
            @"The field name 'é' appears more than once."
        );
    }

    #[test]
    fn test_field_names_are_letters_and_decimal_digits() {
        assert_snapshot!(error_of("(A²)"), @"Unrecognized character '²'.");
        assert_snapshot!(error_of("(Ⅻ)"), @"Unrecognized character 'Ⅻ'.");
    }
}
