use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::info;
use vrdr_ije::{FieldOrder, IjeRecord, Layout, catalog};
use vrdr_cli::convert::{self, Batch};
use vrdr_messaging::MessageKind;

use crate::cli::{ConvertArgs, FieldsArgs, InspectArgs, IoArgs, WrapArgs};

/// Outcome of a command: `true` when every item converted.
pub type Completed = bool;

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read standard input")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text).with_context(|| format!("write {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn finish<T>(batch: &Batch<T>) -> Completed {
    for error in &batch.errors {
        eprintln!("error: {error}");
    }
    info!(
        converted = batch.outputs.len(),
        failed = batch.errors.len(),
        "batch finished"
    );
    !batch.has_errors()
}

fn lines(outputs: &[String]) -> String {
    outputs.iter().map(|line| format!("{line}\n")).collect()
}

// =============================================================================
// Conversions
// =============================================================================

pub fn run_ije_to_json(args: &ConvertArgs) -> Result<Completed> {
    let input = read_input(&args.io.input)?;
    let batch = convert::ije_to_json(&input, &args.options());
    let completed = finish(&batch);
    let text = convert::render_documents(batch.outputs);
    write_output(args.io.output.as_deref(), &format!("{text}\n"))?;
    Ok(completed)
}

pub fn run_json_to_ije(args: &ConvertArgs) -> Result<Completed> {
    let input = read_input(&args.io.input)?;
    let batch = convert::json_to_ije(&input, &args.options()).context("parse JSON input")?;
    write_output(args.io.output.as_deref(), &lines(&batch.outputs))?;
    Ok(finish(&batch))
}

pub fn run_ije_to_subformat(args: &IoArgs, layout: &Layout) -> Result<Completed> {
    let input = read_input(&args.input)?;
    let batch = convert::ije_to_subformat(&input, layout);
    write_output(args.output.as_deref(), &lines(&batch.outputs))?;
    Ok(finish(&batch))
}

pub fn run_subformat_to_ije(args: &IoArgs, layout: &Layout) -> Result<Completed> {
    let input = read_input(&args.input)?;
    let batch = convert::subformat_to_ije(&input, layout);
    write_output(args.output.as_deref(), &lines(&batch.outputs))?;
    Ok(finish(&batch))
}

// =============================================================================
// Messages
// =============================================================================

pub fn run_wrap(args: &WrapArgs) -> Result<Completed> {
    if args.block_count.is_some() && args.kind != MessageKind::Void {
        bail!("--block-count only applies to void messages");
    }
    let input = read_input(&args.io.input)?;
    let mut message =
        convert::wrap(&input, args.kind, args.block_count).context("read record document")?;
    if let Some(source) = &args.source {
        message = message.with_source(source.clone());
    }
    if let Some(destination) = &args.destination {
        message = message.with_destination(destination.clone());
    }
    let text = message.to_json_pretty().context("serialize message")?;
    write_output(args.io.output.as_deref(), &format!("{text}\n"))?;
    Ok(true)
}

pub fn run_ack(args: &IoArgs) -> Result<Completed> {
    let input = read_input(&args.input)?;
    let response = convert::respond(&input);
    let text = response.to_json_pretty().context("serialize response")?;
    write_output(args.output.as_deref(), &format!("{text}\n"))?;
    Ok(response.kind() == MessageKind::Acknowledgement)
}

// =============================================================================
// Listings
// =============================================================================

pub fn run_fields(args: &FieldsArgs) -> Result<Completed> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Start"),
        header_cell("Width"),
        header_cell("Priority"),
        header_cell("Kind"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for field in catalog().ordered(FieldOrder::from(args.order)) {
        let kind = field.binding.kind();
        let kind_cell = if field.binding.is_data() {
            Cell::new(kind)
        } else {
            dim_cell(kind)
        };
        table.add_row(vec![
            Cell::new(field.name).add_attribute(Attribute::Bold),
            Cell::new(field.start),
            Cell::new(field.width),
            Cell::new(field.priority),
            kind_cell,
            Cell::new(field.description),
        ]);
    }
    println!("{table}");
    Ok(true)
}

pub fn run_inspect(args: &InspectArgs) -> Result<Completed> {
    let input = read_input(&args.io.input)?;
    let Some(line) = input.lines().find(|line| !line.trim().is_empty()) else {
        bail!("no IJE record in input");
    };
    let ije = IjeRecord::parse(line).context("read IJE record")?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (name, value) in ije.dump(FieldOrder::from(args.order)) {
        if value.trim().is_empty() {
            continue;
        }
        table.add_row(vec![Cell::new(name).fg(Color::Blue), Cell::new(value)]);
    }
    let text = format!("{table}\n");
    write_output(args.io.output.as_deref(), &text)?;
    Ok(true)
}

fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
