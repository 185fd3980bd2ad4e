use super::*;

use crate::command::{Dir, Point};

fn kinds(commands: &[DrawCommand]) -> Vec<&'static str> {
    commands
        .iter()
        .map(|c| match c {
            DrawCommand::Line { .. } => "line",
            DrawCommand::Arrowhead { .. } => "arrowhead",
            DrawCommand::Dot { .. } => "dot",
            DrawCommand::FilledPolygon { .. } => "polygon",
            DrawCommand::TextLabel { .. } => "text",
        })
        .collect()
}

#[test]
fn empty_input_converts_to_no_commands() {
    assert_eq!(convert("").expect("convert"), vec![]);
}

#[test]
fn labeled_box_paints_fill_then_strokes_then_text() {
    let commands = convert("+--+\n|ab|\n+--+").expect("convert");
    assert_eq!(
        kinds(&commands),
        vec!["polygon", "line", "line", "line", "line", "text"]
    );
    assert_eq!(
        commands[0],
        DrawCommand::FilledPolygon {
            points: vec![
                Point::new(0, 0),
                Point::new(3, 0),
                Point::new(3, 2),
                Point::new(0, 2),
            ],
        }
    );
    assert_eq!(
        commands[5],
        DrawCommand::TextLabel { anchor: Point::new(1, 1), text: "ab".into() }
    );
}

#[test]
fn labeled_arrow_converts_without_polygons() {
    let commands = convert("A --> B").expect("convert");
    assert_eq!(kinds(&commands), vec!["arrowhead", "line", "text", "text"]);
    assert!(commands.contains(&DrawCommand::Arrowhead {
        anchor: Point::new(5, 0),
        dir: Dir::Right,
    }));
    assert!(commands.contains(&DrawCommand::Line {
        from: Point::new(2, 0),
        to: Point::new(5, 0),
    }));
}

#[test]
fn untraceable_region_propagates_the_error() {
    assert!(convert("+++\n+++\n+++").is_err());
}

#[test]
fn conversions_are_independent() {
    let first = convert("+--+\n|  |\n+--+").expect("convert");
    let second = convert("+--+\n|  |\n+--+").expect("convert");
    assert_eq!(first, second);
}
