use super::*;

#[test]
fn row_style_dims_and_strikes_removed_rows() {
    let style = row_style(true);
    assert!(style.contains("opacity: 0.5"));
    assert!(style.contains("text-decoration: line-through"));
}

#[test]
fn row_style_is_empty_for_live_rows() {
    assert_eq!(row_style(false), "");
}

#[test]
fn placeholder_text_matches_empty_roster_copy() {
    assert_eq!(NO_PARTICIPANTS_TEXT, "No participants yet");
}
