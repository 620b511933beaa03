//! Company listing table

use crate::dataset::Dataset;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

/// Numbered table of every company, with `0` as the neutral "None" choice
pub fn company_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Company", "Date Added"]);

    table.add_row(vec!["0".to_string(), "None".to_string(), String::new()]);
    for (i, company) in dataset.companies().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            company.name.clone(),
            company.date_added.clone(),
        ]);
    }
    table
}
