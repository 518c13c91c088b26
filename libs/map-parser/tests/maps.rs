use map_parser::{parse, ParseErrorKind};

const TWO_ENTITIES: &str = r#"// Game: Quake 2
// Format: Quake2
// entity 0
{
"classname" "worldspawn"
"sky" "unit1_"
// brush 0
{
( -64 -64 -16 ) ( -64 -63 -16 ) ( -64 -64 -15 ) e1u1/floor1_3 0 0 0 1 1 0 0 0
( -64 -64 -16 ) ( -64 -64 -15 ) ( -63 -64 -16 ) e1u1/floor1_3 0 0 0 1 1 0 0 0
( -64 -64 -16 ) ( -63 -64 -16 ) ( -64 -63 -16 ) e1u1/floor1_3 0 0 0 1 1 0 0 0
( 64 64 16 ) ( 64 65 16 ) ( 65 64 16 ) e1u1/floor1_3 0 0 0 1 1 0 0 0
( 64 64 16 ) ( 65 64 16 ) ( 64 64 17 ) e1u1/floor1_3 0 0 0 1 1 0 0 0
( 64 64 16 ) ( 64 64 17 ) ( 64 65 16 ) e1u1/floor1_3 0 0 0 1 1 0 0 0
}
// brush 1
{
( 0 0 0 ) ( 0 1 0 ) ( 0 0 1 ) portal 0 0 0 1 1
}
}
// entity 1
{
"classname" "info_player_start"
"origin" "0 0 24"
"angle" "90"
}
"#;

#[test]
fn parses_entities_in_order() {
    let map = parse(TWO_ENTITIES).unwrap();
    assert_eq!(map.entities.len(), 2);
    assert_eq!(map.brush_count(), 2);
    assert_eq!(map.entities[0].property("sky"), Some("unit1_"));
    assert_eq!(
        map.entities[1].property("classname"),
        Some("info_player_start")
    );
}

#[test]
fn brush_faces_keep_file_order() {
    let map = parse(TWO_ENTITIES).unwrap();
    let brush = &map.entities[0].brushes[0];
    assert_eq!(brush.faces.len(), 6);
    assert_eq!(brush.faces[3].points[0], [64.0, 64.0, 16.0]);
    assert!(brush.faces.iter().all(|f| f.params.len() == 8));
    assert_eq!(map.entities[0].brushes[1].faces[0].texture, "portal");
}

#[test]
fn brush_span_points_at_source() {
    let map = parse(TWO_ENTITIES).unwrap();
    let span = map.entities[0].brushes[1].span;
    assert_eq!(span.start.line, 16);
    assert!(span.text(TWO_ENTITIES).starts_with('{'));
    assert!(span.text(TWO_ENTITIES).ends_with('}'));
}

#[test]
fn error_reports_one_indexed_line() {
    let err = parse("{\n\"classname\" \"worldspawn\"\n{\n( 0 0 ) ( 1 1 1 ) ( 2 2 2 ) x 0 0 0 1 1\n}\n}").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    assert_eq!(err.line(), 4);
    assert!(err.to_string().contains("line 4"));
}

#[test]
fn unbalanced_closing_brace_is_rejected() {
    let err = parse("{ }\n}").unwrap_err();
    assert_eq!(err.line(), 2);
}
