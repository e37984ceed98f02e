//! End-to-end request scenarios through the facade

use diagrammer::prelude::*;
use diagrammer::DEMO_REQUESTS;
use std::sync::Arc;

const PROXY_LINE: &str = "[Graph Proxy] Drawing graphical + textual stub";

fn lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}

#[test]
fn test_line_graph_request() {
    let facade = DiagramFacade::new();
    let output = facade.render_request("Graph", "Line", "(10,20)").unwrap();
    assert_eq!(
        lines(&output),
        vec!["Line calc at (10,20)", PROXY_LINE, "Drag Line at (10,20)"]
    );
}

#[test]
fn test_bar_graph_request() {
    let facade = DiagramFacade::new();
    let output = facade.render_request("Graph", "Bar", "(15,30)").unwrap();
    assert_eq!(
        lines(&output),
        vec!["Bar calc at (15,30)", PROXY_LINE, "Drag Bar at (15,30)"]
    );
}

#[test]
fn test_colored_figure_request() {
    let facade = DiagramFacade::new();
    let output = facade.render_request("Figure", "CircleColor", "(5,5)").unwrap();
    assert_eq!(
        lines(&output),
        vec![
            "Coordinates: (5,5)",
            "[Colored Flyweight] Drawing colored figure of type: CircleColor",
        ]
    );
    assert_eq!(facade.figures().pool().keys(), vec!["CircleColor"]);
}

#[test]
fn test_repeated_figure_request_reuses_instance() {
    let facade = DiagramFacade::new();
    let mut first_out = Vec::new();
    let mut second_out = Vec::new();

    let first = facade
        .figures()
        .get_figure("CircleColor", "(5,5)", &mut first_out)
        .unwrap();
    let second = facade
        .figures()
        .get_figure("CircleColor", "(5,5)", &mut second_out)
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first_out, second_out);
    assert_eq!(facade.figures().pool().len(), 1);
}

#[test]
fn test_black_and_white_figure_request() {
    let facade = DiagramFacade::new();
    let output = facade.render_request("Figure", "SquareBW", "(2,3)").unwrap();
    assert_eq!(
        lines(&output),
        vec![
            "Coordinates: (2,3)",
            "[B/W Flyweight] Drawing black and white figure of type: SquareBW",
        ]
    );
}

#[test]
fn test_unknown_element_request_is_silent() {
    let facade = DiagramFacade::new();
    let mut out = Vec::new();
    facade.request("Unknown", "X", "(0,0)", &mut out).unwrap();
    assert!(out.is_empty());
    assert!(facade.figures().pool().is_empty());
}

#[test]
fn test_coordinate_is_echoed_verbatim() {
    let facade = DiagramFacade::new();
    let output = facade
        .render_request("Figure", "Blob", "  not a coordinate ")
        .unwrap();
    assert!(output.starts_with("Coordinates:   not a coordinate \n"));
}

#[test]
fn test_demo_sequence_output() {
    let facade = DiagramFacade::new();
    let mut out = Vec::new();
    for (element, variant, coordinate) in DEMO_REQUESTS {
        facade.request(element, variant, coordinate, &mut out).unwrap();
    }

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        lines(&output),
        vec![
            "Line calc at (10,20)",
            PROXY_LINE,
            "Drag Line at (10,20)",
            "Bar calc at (15,30)",
            PROXY_LINE,
            "Drag Bar at (15,30)",
            "Coordinates: (5,5)",
            "[Colored Flyweight] Drawing colored figure of type: CircleColor",
            "Coordinates: (2,3)",
            "[B/W Flyweight] Drawing black and white figure of type: SquareBW",
        ]
    );
    assert_eq!(facade.figures().pool().keys(), vec!["CircleColor", "SquareBW"]);
}
