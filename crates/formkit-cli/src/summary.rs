use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use formkit_cli::fill::{FillOutcome, FillReport};
use formkit_model::{DefinitionIssue, DefinitionReport, FieldId, IssueSeverity};

pub fn print_lint_report(report: &DefinitionReport) {
    if report.issues.is_empty() {
        println!("No issues found.");
        return;
    }
    let mut issues: Vec<&DefinitionIssue> = report.issues.iter().collect();
    issues.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.code.cmp(&b.code))
    });

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            match &issue.field_id {
                Some(id) => Cell::new(id.as_str()),
                None => dim_cell("-"),
            },
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}

pub fn print_fill_report(report: &FillReport) {
    println!("Form: {}", report.form_id);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Page"),
        header_cell("Shown"),
        header_cell("Hidden"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for visit in &report.visits {
        table.add_row(vec![
            Cell::new(format!("{}/{}", visit.index + 1, report.total_pages)),
            id_list_cell(&visit.visible),
            id_list_cell(&visit.hidden),
        ]);
    }
    if !report.visits.is_empty() {
        println!("{table}");
    }
    match &report.outcome {
        FillOutcome::Submitted(submission_id) => {
            println!("Submitted: {submission_id}");
        }
        FillOutcome::Blocked { page, unmet } => {
            eprintln!("Blocked on page {}; required fields are empty:", page + 1);
            for id in unmet {
                eprintln!("- {id}");
            }
        }
        FillOutcome::Closed => {
            eprintln!("Form is not accepting submissions at this time.");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn id_list_cell(ids: &[FieldId]) -> Cell {
    if ids.is_empty() {
        return dim_cell("-");
    }
    let joined: Vec<&str> = ids.iter().map(FieldId::as_str).collect();
    Cell::new(joined.join(", "))
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
