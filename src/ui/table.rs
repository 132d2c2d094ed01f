use crate::storage::DbStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Table")]
    pub name: String,
    #[tabled(rename = "Rows")]
    pub rows: String,
}

pub fn stats_table(stats: &DbStats) -> String {
    if stats.tables.is_empty() {
        return String::new();
    }

    let rows: Vec<TableRow> = stats
        .tables
        .iter()
        .map(|count| TableRow {
            name: count.table.clone(),
            rows: count.rows.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
