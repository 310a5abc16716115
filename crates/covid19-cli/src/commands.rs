use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::info;

use covid19_ingest::{Source, read_wide_table_from_path};
use covid19_model::{DataType, DatasetInfo, LocationType};

use covid19_cli::output::write_tidy_csv;

use crate::cli::{InfoArgs, RefreshArgs};

pub fn run_refresh(args: &RefreshArgs) -> Result<()> {
    let source = Source::from(args.source);
    let records = match &args.input {
        Some(path) => {
            let table = read_wide_table_from_path(path, &source.schema())?;
            source.reshape_table(&table)?
        }
        None => source.refresh()?,
    };
    info!(source = %source, records = records.len(), "reshaped into tidy records");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            write_tidy_csv(file, &records)
                .with_context(|| format!("write {}", path.display()))?;
        }
        None => {
            write_tidy_csv(io::stdout().lock(), &records).context("write to stdout")?;
        }
    }
    Ok(())
}

pub fn run_info(args: &InfoArgs) -> Result<()> {
    let infos: Vec<DatasetInfo> = Source::ALL.iter().map(Source::info).collect();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Data set"),
        header_cell("Locations"),
        header_cell("Metrics"),
        header_cell("URL"),
    ]);
    for info in &infos {
        table.add_row(vec![
            Cell::new(&info.data_set_name),
            Cell::new(joined(info.location_types.iter().map(LocationType::as_str))),
            Cell::new(joined(info.data_types.iter().map(DataType::as_str))),
            Cell::new(&info.data_url),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn joined<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}
