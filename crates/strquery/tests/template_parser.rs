//! Integration tests for template tokenizing.

use strquery::parser::{ParseError, Segment, parse_template};

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn test_pure_literal() {
    let t = parse_template("{ 'match_all' : {} }").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("{ 'match_all' : {} }".into())]);
}

#[test]
fn test_empty_string() {
    let t = parse_template("").unwrap();
    assert_eq!(t.segments, vec![]);
    assert_eq!(t.required_arguments(), 0);
}

#[test]
fn test_single_placeholder() {
    let t = parse_template("{ 'age' : ?0 }").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("{ 'age' : ".into()),
            Segment::Placeholder(0),
            Segment::Literal(" }".into()),
        ]
    );
}

#[test]
fn test_placeholder_only() {
    let t = parse_template("?3").unwrap();
    assert_eq!(t.segments, vec![Segment::Placeholder(3)]);
    assert_eq!(t.required_arguments(), 4);
}

#[test]
fn test_adjacent_placeholders() {
    let t = parse_template("?0?1").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Placeholder(0), Segment::Placeholder(1)]
    );
}

// =============================================================================
// Digit runs
// =============================================================================

#[test]
fn test_multi_digit_index_is_greedy() {
    let t = parse_template("?11, ?1").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Placeholder(11),
            Segment::Literal(", ".into()),
            Segment::Placeholder(1),
        ]
    );
}

#[test]
fn test_leading_zeros() {
    let t = parse_template("?007").unwrap();
    assert_eq!(t.segments, vec![Segment::Placeholder(7)]);
}

#[test]
fn test_digits_end_at_non_digit() {
    let t = parse_template("?2a").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Placeholder(2), Segment::Literal("a".into())]
    );
}

// =============================================================================
// Lone markers are literal text
// =============================================================================

#[test]
fn test_wildcard_marker_is_literal() {
    let t = parse_template("name:te?t").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("name:te?t".into())]);
}

#[test]
fn test_trailing_marker_is_literal() {
    let t = parse_template("what?").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("what?".into())]);
}

#[test]
fn test_double_marker_before_index() {
    let t = parse_template("??0").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Literal("?".into()), Segment::Placeholder(0)]
    );
}

#[test]
fn test_literals_merge_around_lone_markers() {
    let t = parse_template("a ? b ? c ?1").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Literal("a ? b ? c ".into()), Segment::Placeholder(1)]
    );
}

// =============================================================================
// Placeholder queries
// =============================================================================

#[test]
fn test_repeated_and_out_of_order_indices() {
    let t = parse_template("name:(?0, ?11, ?1, ?0)").unwrap();
    assert_eq!(t.placeholders().collect::<Vec<_>>(), vec![0, 11, 1, 0]);
    assert_eq!(
        t.referenced_indices().into_iter().collect::<Vec<_>>(),
        vec![0, 1, 11]
    );
    assert_eq!(t.required_arguments(), 12);
}

#[test]
fn test_unicode_literals_preserved() {
    let t = parse_template("{ 'name' : 'Łukasz ?0 ☃' }").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("{ 'name' : 'Łukasz ".into()),
            Segment::Placeholder(0),
            Segment::Literal(" ☃' }".into()),
        ]
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_overflowing_index_is_rejected() {
    let err = parse_template("{ 'age' : ?99999999999999999999999 }").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidIndex {
            line: 1,
            column: 11,
            digits: "99999999999999999999999".into(),
        }
    );
}

#[test]
fn test_error_position_on_later_line() {
    let err = parse_template("{\n  'age' : ?0,\n  'x' : ?123456789012345678901234567890\n}")
        .unwrap_err();
    assert_eq!(err.position(), (3, 9));
}
