use std::io::Write;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{ContentArrangement, Table, TableComponent};

use nodecondition_types::{Node, Result};

const HEADER: [&str; 4] = ["Reason", "Status", "Message", "Last transition time"];

/// Write one titled table per node, in fetch order
///
/// Each block is flushed to `out` as soon as it is built.
pub fn write_tables<W: Write>(out: &mut W, nodes: &[Node]) -> Result<()> {
    for node in nodes {
        writeln!(out, "{}", node.name)?;
        writeln!(out, "{}", "=".repeat(node.name.chars().count()))?;
        writeln!(out)?;
        writeln!(out, "{}", node_table(node))?;
        write!(out, "\n\n")?;
        out.flush()?;
    }
    Ok(())
}

fn node_table(node: &Node) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADER);

    // Header and row separators share the `+---+---+` shape
    table
        .set_style(TableComponent::HeaderLines, '-')
        .set_style(TableComponent::HorizontalLines, '-')
        .set_style(TableComponent::MiddleIntersections, '+')
        .set_style(TableComponent::LeftHeaderIntersection, '+')
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::RightHeaderIntersection, '+')
        .set_style(TableComponent::LeftBorderIntersections, '+')
        .set_style(TableComponent::RightBorderIntersections, '+');

    for condition in &node.conditions {
        table.add_row([
            condition.reason.as_str(),
            condition.status.as_str(),
            condition.message.as_str(),
            condition.last_transition_time.as_str(),
        ]);
    }

    table
}
