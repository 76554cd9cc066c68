//! `images` subcommand - print the selectable catalog as a table

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::form::gallery::CATALOG;

/// Print the image catalog with one row per selectable tile
pub fn run_images() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "URL"]);

    for (i, image) in CATALOG.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), image.title.to_string(), image.url.to_string()]);
    }

    println!("{table}");
    Ok(())
}
