use benchdb::comparison::MetricDelta;
use comfy_table::{
    Cell, CellAlignment, Color, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};

pub fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

/// Right-aligns every column from `first` on.
pub fn align_numbers(
    table: &mut Table,
    first: usize,
) {
    for column in table.column_iter_mut().skip(first) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

pub fn format_value(value: f64) -> String {
    format!("{:.4}", value)
}

/// Signed change with its percentage, green when it is an improvement and
/// red when it is a regression.
pub fn delta_cell(delta: &MetricDelta) -> Cell {
    let text = format!("{:+.4} ({:+.2}%)", delta.delta, delta.percentage);
    let cell = Cell::new(text);
    if delta.is_equal {
        cell
    } else if delta.is_better {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}
