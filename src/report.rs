use crate::catalog::PriceLookup;
use crate::validator::{join_problems, validate_record, ValidSale};
use log::{debug, warn};
use serde_json::Value;

pub const SEPARATOR_LEN: usize = 72;

/// Per-record problems are logged up to this many times per run.
const MAX_LOGGED_FAILURES: usize = 25;

const REPORT_TITLE: &str = "Compute Sales - Results";
const REPORT_INTRO: &str = "Detalle de ventas (se omiten registros inválidos, pero se reportan):";
const TABLE_HEADER: &str = "SALE_ID | SALE_Date | Product | Quantity | Unit Price | Line Total";
const ERRORS_HEADER: &str = "Errores detectados (la ejecución continuó):";
const WARNINGS_HEADER: &str = "Advertencias del catálogo (no fatales):";
const NOT_A_LIST_REPORT: &str =
    "ERROR: El archivo de ventas no contiene una lista de registros.\nNo se puede procesar.\n";

/// An invalid record: its 1-based position in the sales list and its joined problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunResult {
    pub report_text: String,
    pub total_cost: f64,
    pub valid_count: usize,
    pub invalid_count: usize,
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_LEN)
}

/// Two decimals with comma thousands grouping, e.g. `1,234,567.89`.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

pub fn table_header() -> Vec<String> {
    vec![TABLE_HEADER.to_string(), separator()]
}

pub fn format_sale_line(sale: &ValidSale) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        sale.sale_id,
        sale.sale_date,
        sale.product,
        sale.quantity,
        format_currency(sale.unit_price),
        format_currency(sale.line_total())
    )
}

pub fn summary_lines(valid: usize, invalid: usize, total: f64) -> Vec<String> {
    vec![
        String::new(),
        separator(),
        format!("Valid records: {}", valid),
        format!("Invalid records: {}", invalid),
        format!("Total cost: {}", format_currency(total)),
        String::new(),
    ]
}

/// Errors section, or nothing when every record was valid.
pub fn errors_block(errors: &[ErrorEntry]) -> Vec<String> {
    if errors.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![ERRORS_HEADER.to_string(), separator()];
    lines.extend(
        errors
            .iter()
            .map(|err| format!("[#{}] {}", err.index, err.message)),
    );
    lines.push(String::new());
    lines
}

/// Catalog warnings section placed ahead of the report title. Empty when
/// there are no warnings.
pub fn render_warnings_block(warnings: &[String]) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut lines = vec![WARNINGS_HEADER.to_string(), separator()];
    lines.extend(warnings.iter().map(|w| format!("- {}", w)));
    lines.push(String::new());
    lines.join("\n")
}

/// Validates every sales record and renders the report body.
///
/// Invalid records are listed in the errors section and never stop the run.
/// A sales value that is not a list produces a short error body with zero
/// counts.
pub fn build_report(prices: &PriceLookup, sales: &Value) -> RunResult {
    let Value::Array(records) = sales else {
        warn!("Sales input is not a list of records; nothing to process");
        return RunResult {
            report_text: NOT_A_LIST_REPORT.to_string(),
            ..RunResult::default()
        };
    };

    let mut lines: Vec<String> = vec![
        REPORT_TITLE.to_string(),
        String::new(),
        REPORT_INTRO.to_string(),
        String::new(),
    ];
    lines.extend(table_header());

    let mut errors: Vec<ErrorEntry> = Vec::new();
    let mut total_cost = 0.0;
    let mut valid_count = 0;
    let mut validation_logging_suppressed = false;

    for (idx, record) in records.iter().enumerate() {
        let index = idx + 1;

        match validate_record(record, prices) {
            Ok(sale) => {
                let line_total = sale.line_total();
                debug!("Record #{} valid, line total {}", index, line_total);
                lines.push(format_sale_line(&sale));
                total_cost += line_total;
                valid_count += 1;
            }
            Err(problems) => {
                let message = join_problems(&problems);

                if errors.len() < MAX_LOGGED_FAILURES {
                    warn!("Record #{} skipped. Reason: {}", index, message);
                } else if !validation_logging_suppressed {
                    warn!(
                        "More than {} invalid records encountered. Suppressing additional validation logs to avoid noise.",
                        MAX_LOGGED_FAILURES
                    );
                    validation_logging_suppressed = true;
                }

                errors.push(ErrorEntry { index, message });
            }
        }
    }

    let invalid_count = errors.len();
    lines.extend(summary_lines(valid_count, invalid_count, total_cost));
    lines.extend(errors_block(&errors));

    RunResult {
        report_text: lines.join("\n"),
        total_cost,
        valid_count,
        invalid_count,
    }
}
