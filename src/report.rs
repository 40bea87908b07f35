//! Console table output

use std::io::{self, Write};

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::extractors::Listing;

pub const BANNER_WIDTH: usize = 100;
pub const BANNER_TITLE: &str = "OLX CAR COVER LISTINGS";
pub const HEADERS: [&str; 4] = ["Sr.No", "Title", "Description", "Price"];

/// ASCII grid: `+---+` borders, `+===+` under the header, `+---+` between rows
const GRID_PRESET: &str = "||--+=++|-+++++++++";

pub fn listings_table(listings: &[Listing]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(GRID_PRESET)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS);

    for (idx, listing) in listings.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(listing.title()),
            Cell::new(listing.description()),
            Cell::new(listing.price()),
        ]);
    }

    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

/// Write the banner, the table and the count line
pub fn write_report<W: Write>(out: &mut W, listings: &[Listing]) -> io::Result<()> {
    if listings.is_empty() {
        writeln!(out, "No listings found.")?;
        return Ok(());
    }

    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{BANNER_TITLE}")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", listings_table(listings))?;
    writeln!(out)?;
    writeln!(out, "Total listings found: {}", listings.len())?;
    Ok(())
}
