use super::*;

#[test]
fn offsets_map_to_lines_and_characters() {
    let line_map = LineMap::build("val a = 1\nval b = 2\n");

    assert_eq!(line_map.line_count(), 3);
    assert_eq!(line_map.offset_to_position(0), Position::new(0, 0));
    assert_eq!(line_map.offset_to_position(4), Position::new(0, 4));
    assert_eq!(line_map.offset_to_position(10), Position::new(1, 0));
    assert_eq!(line_map.offset_to_position(14), Position::new(1, 4));
}

#[test]
fn offset_at_line_break_stays_on_previous_line() {
    let line_map = LineMap::build("ab\ncd");
    assert_eq!(line_map.offset_to_position(2), Position::new(0, 2));
}
