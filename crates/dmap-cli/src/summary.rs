use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dmap_ingest::ReferenceData;
use dmap_map::Selection;
use dmap_map::geometry::{STROKE_DECIMALS, format_decimal};
use dmap_model::{Party, PartyDetail, PrimaryRecord};

use crate::types::{ClickReport, RenderResult};

pub fn print_regions(data: &ReferenceData) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Code"),
        header_cell("Region"),
        header_cell("Dem date"),
        header_cell("Dem delegates"),
        header_cell("Super"),
        header_cell("GOP date"),
        header_cell("GOP delegates"),
        header_cell("Method"),
    ]);
    apply_table_style(&mut table);
    for column in [0, 4, 5, 7] {
        align_column(&mut table, column, CellAlignment::Right);
    }
    let mut dem_total = 0u64;
    let mut gop_total = 0u64;
    for region in data.regions() {
        let dem = data.primary(Party::Democratic, &region.name);
        let gop = data.primary(Party::Republican, &region.name);
        dem_total += dem.map_or(0, |record| u64::from(record.delegates));
        gop_total += gop.map_or(0, |record| u64::from(record.delegates));
        table.add_row(vec![
            Cell::new(region.id),
            Cell::new(&region.code).fg(Color::Cyan),
            Cell::new(&region.name),
            date_cell(dem),
            delegates_cell(dem),
            optional_cell(dem.and_then(|record| match &record.detail {
                PartyDetail::Democratic { super_delegates } => Some(super_delegates.to_string()),
                PartyDetail::Republican { .. } => None,
            })),
            date_cell(gop),
            delegates_cell(gop),
            optional_cell(gop.and_then(|record| match &record.detail {
                PartyDetail::Republican { method } => Some(method.clone()),
                PartyDetail::Democratic { .. } => None,
            })),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(dem_total).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(gop_total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_click_report(report: &ClickReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("At (ms)"),
        header_cell("Click"),
        header_cell("Selection"),
        header_cell("Transform"),
        header_cell("Stroke"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for step in &report.steps {
        table.add_row(vec![
            Cell::new(step.at_ms),
            Cell::new(&step.input),
            selection_cell(step.outcome.selection),
            Cell::new(step.outcome.target.to_string()),
            Cell::new(format!(
                "{}px",
                format_decimal(step.outcome.stroke_width, STROKE_DECIMALS)
            )),
        ]);
    }
    println!("{table}");
    match &report.panel {
        Some(panel) => println!("{}", panel.to_text()),
        None => println!("(no region selected)"),
    }
}

pub fn print_render_result(result: &RenderResult) {
    println!("Output: {}", result.output.display());
    println!("Regions: {}", result.regions);
    println!("Selection: {}", result.selection);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn selection_cell(selection: Selection) -> Cell {
    match selection {
        Selection::Overview => dim_cell(selection),
        Selection::Zoomed(_) => Cell::new(selection).fg(Color::Green),
    }
}

fn date_cell(record: Option<&PrimaryRecord>) -> Cell {
    optional_cell(record.map(PrimaryRecord::display_date))
}

fn delegates_cell(record: Option<&PrimaryRecord>) -> Cell {
    optional_cell(record.map(|record| record.delegates.to_string()))
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
