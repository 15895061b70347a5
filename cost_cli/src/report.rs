//! Plain-text rendering of a `CostReport`.

use std::fmt::Write;

use cost_core::calculations::{BatchTotals, CostBreakdown, CostReport};
use cost_core::fields::{BATCH_INPUT_FIELDS, PERPIECE_COST_FIELDS, PROFIT_FIELD, QUANTITY_FIELD};
use cost_core::format::{format_currency, format_number, format_percent};
use cost_core::inputs::CostInputs;
use cost_core::settings::DisplayConfig;
use cost_core::validation::Severity;
use cost_core::CostCategory;

const RULE: &str = "═══════════════════════════════════════";
const EMPTY: &str = "—";

/// Render the report for a terminal.
pub fn render(inputs: &CostInputs, report: &CostReport, config: &DisplayConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, inputs, report, config);
    out
}

fn write_report(out: &mut String, inputs: &CostInputs, report: &CostReport, config: &DisplayConfig) -> std::fmt::Result {
    let title = match inputs {
        CostInputs::Batch(_) => "BATCH → PER-PIECE",
        CostInputs::PerPiece(_) => "PER-PIECE → BATCH",
    };
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  COST REPORT ({})", title)?;
    writeln!(out, "{}", RULE)?;

    for warning in &report.warnings {
        let tag = match warning.severity {
            Severity::Error => "[ERROR]",
            Severity::Warning => "[WARN]",
            Severity::Info => "[INFO]",
        };
        writeln!(out, "{} {}", tag, warning.message)?;
    }
    writeln!(out)?;

    write_breakdown(out, report.breakdown.as_ref(), config)?;
    writeln!(out)?;

    // Per-piece figures are meaningless until some cost has been entered
    let has_costs = report
        .breakdown
        .map(|b| b.total_cost_per_piece.0 > 0.0)
        .unwrap_or(false);

    writeln!(out, "Pricing (per piece):")?;
    writeln!(out, "  Desired profit:   {}", format_percent(inputs.desired_profit_percent(), config))?;
    match report.pricing.filter(|_| has_costs) {
        Some(pricing) => {
            writeln!(out, "  Selling price:    {}", format_currency(pricing.selling_price.0, config))?;
            writeln!(out, "  Profit per piece: {}", format_currency(pricing.profit_per_piece.0, config))?;
            writeln!(out, "  Gross margin:     {}", format_percent(pricing.gross_margin_percent(), config))?;
        }
        None => {
            writeln!(out, "  Selling price:    {}", EMPTY)?;
            writeln!(out, "  Profit per piece: {}", EMPTY)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Batch:")?;
    match &report.results {
        Some(results) => {
            writeln!(out, "  Quantity:         {} pieces", format_number(inputs.production_quantity() as f64, config))?;
            writeln!(out, "  Batch profit:     {}", format_currency(results.total_batch_profit.0, config))?;
        }
        None => writeln!(out, "  Enter quantity to see batch profit")?,
    }
    if let Some(totals) = &report.batch_totals {
        write_batch_totals(out, totals, config)?;
    }

    writeln!(out, "{}", RULE)?;
    Ok(())
}

fn write_breakdown(out: &mut String, breakdown: Option<&CostBreakdown>, config: &DisplayConfig) -> std::fmt::Result {
    writeln!(out, "Breakdown (per piece):")?;
    let Some(breakdown) = breakdown else {
        return writeln!(out, "  Enter quantity to see breakdown");
    };

    for (category, amount) in breakdown.components.iter() {
        writeln!(
            out,
            "  {:<14} {:>14} {:>8}",
            category.label(),
            format_currency(amount.0, config),
            format_percent(breakdown.share_percent(category), config)
        )?;
    }
    writeln!(
        out,
        "  {:<14} {:>14}",
        "Total",
        format_currency(breakdown.total_cost_per_piece.0, config)
    )
}

fn write_batch_totals(out: &mut String, totals: &BatchTotals, config: &DisplayConfig) -> std::fmt::Result {
    // Zero categories are left out
    for category in CostCategory::ALL {
        let amount = totals.components.get(category);
        if amount.0 == 0.0 {
            continue;
        }
        writeln!(out, "  {:<14} {:>16}", category.label(), format_currency(amount.0, config))?;
    }
    writeln!(out, "  Total cost:       {}", format_currency(totals.total_batch_cost.0, config))?;
    writeln!(out, "  Total revenue:    {}", format_currency(totals.total_revenue.0, config))?;
    writeln!(out, "  Total profit:     {}", format_currency(totals.total_batch_profit.0, config))
}

/// Describe both input forms, for the `fields` command.
pub fn render_fields() -> String {
    let mut out = String::new();
    let sections = [
        ("Batch → Per-piece", BATCH_INPUT_FIELDS.into_iter().chain([PROFIT_FIELD]).collect::<Vec<_>>()),
        (
            "Per-piece → Batch",
            PERPIECE_COST_FIELDS.into_iter().chain([PROFIT_FIELD, QUANTITY_FIELD]).collect::<Vec<_>>(),
        ),
    ];
    for (title, fields) in sections {
        let _ = writeln!(out, "{}:", title);
        for field in fields {
            let _ = writeln!(
                out,
                "  {:<24} {:<32} {}",
                field.key,
                field.prompt_label(),
                field.tooltip.unwrap_or("")
            );
        }
    }
    out
}
