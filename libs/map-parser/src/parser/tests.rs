use super::*;
use crate::lexer::Lexer;

fn parse(source: &str) -> Result<MapSource, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse()
}

const BOX_BRUSH: &str = r#"
{
"classname" "worldspawn"
"message" "Test map"
{
( -64 -64 -16 ) ( -64 -63 -16 ) ( -64 -64 -15 ) e1u1/floor1_3 0 0 0 1 1
( 64 64 16 ) ( 64 64 17 ) ( 64 65 16 ) e1u1/floor1_3 16 -8 90 0.5 0.5 0 1 0
}
}
"#;

#[test]
fn test_parse_empty() {
    let map = parse("").unwrap();
    assert!(map.entities.is_empty());
}

#[test]
fn test_parse_worldspawn_brush() {
    let map = parse(BOX_BRUSH).unwrap();
    assert_eq!(map.entities.len(), 1);

    let entity = &map.entities[0];
    assert_eq!(entity.property("classname"), Some("worldspawn"));
    assert_eq!(entity.property("message"), Some("Test map"));
    assert_eq!(entity.brushes.len(), 1);

    let faces = &entity.brushes[0].faces;
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0].points[0], [-64.0, -64.0, -16.0]);
    assert_eq!(faces[0].texture, "e1u1/floor1_3");
    assert_eq!(faces[0].params, vec![0.0, 0.0, 0.0, 1.0, 1.0]);
    assert_eq!(faces[1].params.len(), 8);
    assert_eq!(faces[1].params[3], 0.5);
}

#[test]
fn test_face_span_covers_line() {
    let map = parse(BOX_BRUSH).unwrap();
    let face = &map.entities[0].brushes[0].faces[0];
    assert_eq!(face.span.start.line, 5);
    assert_eq!(face.span.end.line, 5);
    assert!(face.span.text(BOX_BRUSH).starts_with("( -64 -64 -16 )"));
    assert!(face.span.text(BOX_BRUSH).ends_with("0 0 0 1 1"));
}

#[test]
fn test_point_entity_without_brushes() {
    let map = parse(r#"{ "classname" "light" "origin" "0 0 64" }"#).unwrap();
    let entity = &map.entities[0];
    assert!(entity.brushes.is_empty());
    assert_eq!(entity.property("origin"), Some("0 0 64"));
}

#[test]
fn test_later_duplicate_property_wins() {
    let map = parse(r#"{ "light" "100" "light" "250" }"#).unwrap();
    let entity = &map.entities[0];
    assert_eq!(entity.properties.len(), 2);
    assert_eq!(entity.property("light"), Some("250"));
}

#[test]
fn test_decimal_and_negative_coordinates() {
    let map = parse("{ { ( -0.5 12.25 -3 ) ( 1 2 3 ) ( 4 5 6 ) sky1 0 0 0 1 1 } }").unwrap();
    assert_eq!(map.entities[0].brushes[0].faces[0].points[0], [-0.5, 12.25, -3.0]);
}

#[test]
fn test_missing_value_is_error() {
    let err = parse(r#"{ "classname" }"#).unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken { ref expected, .. } if expected == "property value"
    ));
}

#[test]
fn test_bad_coordinate_is_invalid_number() {
    let err = parse("{ { ( 0 zero 0 ) ( 1 2 3 ) ( 4 5 6 ) sky1 0 0 0 1 1 } }").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidNumber {
            text: "zero".to_string()
        }
    );
    assert_eq!(err.span.start.byte, 8);
}

#[test]
fn test_non_finite_number_is_rejected() {
    let err = parse("{ { ( 0 0 0 ) ( 1 2 3 ) ( 4 5 6 ) sky1 0 0 inf 1 1 } }").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::InvalidNumber { .. }));
}

#[test]
fn test_unclosed_brush_is_eof_error() {
    let err = parse("{ { ( 0 0 0 ) ( 1 2 3 ) ( 4 5 6 ) sky1 0 0 0 1 1").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn test_missing_texture_is_error() {
    let err = parse("{ { ( 0 0 0 ) ( 1 2 3 ) ( 4 5 6 ) } }").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken { ref found, .. } if found == "}"
    ));
}

#[test]
fn test_stray_token_in_entity() {
    let err = parse("{ ( }").unwrap_err();
    assert_eq!(err.span.start.byte, 2);
}
