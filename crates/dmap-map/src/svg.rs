//! Static SVG and HTML rendering of a session.

use std::io::Write;
use std::time::Duration;

use quick_xml::Writer;
use quick_xml::events::{BytesStart, BytesText, Event};

use crate::error::{MapError, Result};
use crate::geometry::{STROKE_DECIMALS, format_decimal, format_number, lines_path, rings_path};
use crate::panel::{end, start, write_element};
use crate::session::MapSession;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const STYLESHEET: &str = "\
.background { fill: none; pointer-events: all; }
#regions path { fill: #aaa; stroke: none; }
#regions path.election-today { fill: #c77; }
#regions path.active { fill: orange; }
#region-borders { fill: none; stroke: #fff; stroke-linejoin: round; }
.region-label { font: 10px sans-serif; }
.details { font: 16px sans-serif; }
";

/// Write the map SVG as it appears at `now`.
pub fn write_svg<W: Write>(
    writer: &mut Writer<W>,
    session: &MapSession,
    now: Duration,
) -> Result<()> {
    let config = session.config();
    let width = format_number(config.width);
    let height = format_number(config.height);
    let transform = session.transform_at(now);
    let stroke = format!(
        "stroke-width: {}px",
        format_decimal(
            transform.stroke_width(config.base_stroke_width),
            STROKE_DECIMALS
        )
    );
    let transform = transform.to_string();

    start(
        writer,
        "svg",
        &[("xmlns", SVG_NS), ("width", width.as_str()), ("height", height.as_str())],
    )?;
    empty(
        writer,
        "rect",
        &[("class", "background"), ("width", width.as_str()), ("height", height.as_str())],
    )?;
    start(writer, "g", &[("transform", transform.as_str()), ("style", stroke.as_str())])?;

    start(writer, "g", &[("id", "regions")])?;
    let index = session.index();
    for (indexed, shape) in index.regions().iter().zip(&session.presentation().shapes) {
        let id = indexed.id().to_string();
        let data = rings_path(&indexed.rings);
        let classes = shape.classes();
        let mut attributes = vec![("data-region", id.as_str()), ("d", data.as_str())];
        if !classes.is_empty() {
            attributes.push(("class", classes.as_str()));
        }
        empty(writer, "path", &attributes)?;
    }
    end(writer, "g")?;

    let borders = lines_path(index.borders());
    if !borders.is_empty() {
        empty(writer, "path", &[("id", "region-borders"), ("d", borders.as_str())])?;
    }

    start(writer, "g", &[("id", "labels")])?;
    for label in &session.presentation().labels {
        let x = format_number(label.position.x);
        let y = format_number(label.position.y);
        write_element(
            writer,
            "text",
            &[
                ("class", "region-label"),
                ("pointer-events", "none"),
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("visibility", label.visibility.as_str()),
                ("text-anchor", "middle"),
                ("fill", "white"),
            ],
            &label.code,
        )?;
    }
    end(writer, "g")?;

    end(writer, "g")?;
    end(writer, "svg")
}

pub fn render_svg(session: &MapSession, now: Duration) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_svg(&mut writer, session, now)?;
    String::from_utf8(writer.into_inner()).map_err(MapError::markup)
}

/// Standalone HTML page with the map and the current detail panel.
pub fn render_document(session: &MapSession, now: Duration, title: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::DocType(BytesText::from_escaped("html")))
        .map_err(MapError::markup)?;
    start(&mut writer, "html", &[("lang", "en")])?;
    start(&mut writer, "head", &[])?;
    empty(&mut writer, "meta", &[("charset", "utf-8")])?;
    write_element(&mut writer, "title", &[], title)?;
    write_element(&mut writer, "style", &[], STYLESHEET)?;
    end(&mut writer, "head")?;
    start(&mut writer, "body", &[])?;
    start(&mut writer, "div", &[("class", "map")])?;
    write_svg(&mut writer, session, now)?;
    end(&mut writer, "div")?;
    start(&mut writer, "div", &[("class", "details")])?;
    if let Some(panel) = session.panel() {
        panel.write_markup(&mut writer)?;
    }
    end(&mut writer, "div")?;
    end(&mut writer, "body")?;
    end(&mut writer, "html")?;
    String::from_utf8(writer.into_inner()).map_err(MapError::markup)
}

fn empty<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<()> {
    let mut element = BytesStart::new(name);
    for attribute in attributes {
        element.push_attribute(*attribute);
    }
    writer
        .write_event(Event::Empty(element))
        .map_err(MapError::markup)
}
