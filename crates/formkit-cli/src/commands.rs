use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use formkit_cli::fill::{FillReport, fill_form};
use formkit_cli::store::{DirectorySource, JsonFileStore, read_definition, read_values};
use formkit_engine::{LintOptions, PaginationPlan, lint, load_definition, resolve_theme};
use formkit_model::registry::lookup;
use formkit_model::{DefinitionReport, FieldType, FormDefinition, PaginationMode};

use crate::cli::{FillArgs, FormArgs, LintArgs, ModeArg, PagesArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Category"),
        header_cell("Default label"),
        header_cell("Options"),
        header_cell("Default properties"),
    ]);
    apply_table_style(&mut table);
    for field_type in FieldType::ALL {
        let info = lookup(field_type);
        let properties = info.default_properties();
        table.add_row(vec![
            Cell::new(field_type.as_str()),
            Cell::new(info.category.as_str()),
            Cell::new(info.default_label),
            Cell::new(if info.has_options { "yes" } else { "-" }),
            if properties.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(serde_json::to_string(&properties).context("render properties")?)
            },
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_lint(args: &LintArgs) -> Result<DefinitionReport> {
    let form = read_definition(&args.form)?;
    let span = info_span!("lint", form_id = %form.id);
    let _guard = span.enter();
    let options = if args.strict {
        LintOptions::strict()
    } else {
        LintOptions::default()
    };
    let report = lint(&form.fields, &options);
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "lint finished"
    );
    Ok(report)
}

pub fn run_pages(args: &PagesArgs) -> Result<()> {
    let form = load_form(&args.form)?;
    let mode = match args.mode {
        Some(ModeArg::Single) => PaginationMode::SinglePage,
        Some(ModeArg::Multi) => PaginationMode::MultiPage,
        None => form.settings.pagination_mode(),
    };
    let plan = PaginationPlan::build(&form.fields, mode);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Page"),
        header_cell("Order"),
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Label"),
        header_cell("Required"),
        header_cell("Shown when"),
    ]);
    apply_table_style(&mut table);
    for page in plan.pages() {
        if page.is_empty() {
            table.add_row(vec![
                Cell::new(page.index + 1),
                dim_cell("-"),
                dim_cell("(no fields)"),
            ]);
        }
        for field in &page.fields {
            let condition = match &field.conditional {
                Some(rule) => Cell::new(format!(
                    "{} {} {}",
                    rule.field_id, rule.operator, rule.value
                )),
                None => dim_cell("always"),
            };
            table.add_row(vec![
                Cell::new(page.index + 1),
                Cell::new(field.order),
                Cell::new(field.id.as_str()),
                Cell::new(field.field_type.as_str()),
                Cell::new(&field.label),
                Cell::new(if field.required { "yes" } else { "-" }),
                condition,
            ]);
        }
    }
    println!("{} ({} page(s))", form.title, plan.total_pages());
    println!("{table}");
    Ok(())
}

pub fn run_fill(args: &FillArgs) -> Result<FillReport> {
    let form = load_form(&args.form)?;
    let values = read_values(&args.values)?;
    let out = args.out.clone().unwrap_or_else(|| {
        args.form
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("submissions")
    });
    let mut store = JsonFileStore::new(out);
    fill_form(&form, &values, &mut store, Utc::now())
}

pub fn run_theme(args: &FormArgs) -> Result<()> {
    let form = load_form(&args.form)?;
    let resolved = resolve_theme(&form.theme);
    println!(
        "{}",
        serde_json::to_string_pretty(&resolved).context("render theme")?
    );
    Ok(())
}

fn load_form(path: &Path) -> Result<FormDefinition> {
    let (source, form_id) = DirectorySource::for_file(path)?;
    load_definition(&source, &form_id).with_context(|| format!("load form {}", path.display()))
}
