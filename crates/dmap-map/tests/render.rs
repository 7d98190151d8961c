//! SVG and HTML output.

mod common;

use std::time::Duration;

use common::{WYOMING, session};
use dmap_map::{ClickTarget, render_document, render_svg};

#[test]
fn overview_svg_hides_labels_and_marks_elections() {
    let session = session();

    let svg = render_svg(&session, Duration::ZERO).expect("render svg");

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="960" height="500">"#));
    assert!(svg.contains(r#"transform="translate(480,250)scale(1)translate(-480,-250)""#));
    assert!(svg.contains(r#"style="stroke-width: 1.5px""#));
    assert!(svg.contains(
        r#"<path data-region="56" d="M100,100L140,100L140,140L100,140Z" class="election-today"/>"#
    ));
    assert!(svg.contains(r#"<path data-region="19" d="M140,100L180,100L180,140L140,140Z"/>"#));
    assert!(svg.contains(r#"<path id="region-borders" d="M140,100L140,140"/>"#));
    assert!(!svg.contains(r#"visibility="visible""#));
    assert_eq!(svg.matches(r#"visibility="hidden""#).count(), 3);
}

#[test]
fn zoomed_document_includes_panel_and_settled_transform() {
    let mut session = session();
    session
        .click(ClickTarget::Region(WYOMING), Duration::ZERO)
        .expect("click Wyoming");

    let html = render_document(&session, Duration::from_secs(1), "Primaries").expect("render");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Primaries</title>"));
    assert!(html.contains(r#"transform="translate(480,250)scale(4)translate(-120,-120)""#));
    assert!(html.contains(r#"style="stroke-width: 0.375px""#));
    assert!(html.contains(r#"class="election-today active""#));
    assert!(html.contains(r#"visibility="visible""#));
    assert!(html.contains(r#"<div class="region-name">Wyoming</div>"#));
    assert!(html.contains("Allocation method: winner-take-all"));
}

#[test]
fn document_mid_transition_uses_interpolated_transform() {
    let mut session = session();
    session
        .click(ClickTarget::Region(WYOMING), Duration::ZERO)
        .expect("click Wyoming");

    let html = render_document(&session, Duration::from_millis(375), "Primaries").expect("render");

    assert!(html.contains("scale(2.5)"));
}
