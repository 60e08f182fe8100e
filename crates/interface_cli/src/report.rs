//! Report rendering
//!
//! Text reports are for people; money is shown as `$#,##0.00`. JSON reports
//! carry the full calculation records unrounded.

use std::fmt::{self, Write};

use domain_bills::{BillCalculation, BillsCalculations};
use domain_rent::{PeriodOutput, RentOutput};

use crate::config::OutputFormat;
use crate::error::CliError;

/// Renders a month's rent calculation
pub fn render_rent(output: &RentOutput, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Text => Ok(rent_text(output)?),
    }
}

/// Renders a batch of bill calculations
pub fn render_bills(
    calculations: &BillsCalculations,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(calculations)?),
        OutputFormat::Text => Ok(bills_text(calculations)?),
    }
}

fn rent_text(output: &RentOutput) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Rent for {}", output.month)?;
    writeln!(out, "Rent due: {}", output.total_rent)?;
    writeln!(out, "Sum (bases): {}", output.base_price_sum)?;

    for period in &output.periods {
        writeln!(out)?;
        period_text(&mut out, period)?;
    }

    let width = output
        .month_totals
        .residents
        .iter()
        .map(|r| r.resident.as_str().len())
        .chain(["Resident".len(), "Sum".len()])
        .max()
        .unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "{:<width$}  Month rent", "Resident")?;
    for total in &output.month_totals.residents {
        writeln!(out, "{:<width$}  {}", total.resident.as_str(), total.total)?;
    }
    writeln!(out, "{:<width$}  {}", "Sum", output.month_totals.sum())?;

    Ok(out)
}

fn period_text(out: &mut String, period: &PeriodOutput) -> fmt::Result {
    writeln!(
        out,
        "Period {} ({} of {} days)",
        period.range, period.days_in_period, period.days_in_month
    )?;
    writeln!(out, "  Period cost: {}", period.period_cost)?;

    for room in &period.rooms {
        writeln!(
            out,
            "  {}: {} with {} occupant(s)",
            room.room, room.price_with_surcharge, room.occupants
        )?;
    }

    writeln!(
        out,
        "  Overage: {} ({} per person)",
        period.total_overage, period.overage_per_person
    )?;

    let adjusted_totals = &period.resident_adjusted_totals;
    for (subtotal, adjusted) in period.resident_subtotals.iter().zip(adjusted_totals) {
        writeln!(
            out,
            "  {}: subtotal {}, adjusted {}",
            subtotal.resident, subtotal.cost, adjusted.cost
        )?;
    }

    for warning in &period.warnings {
        writeln!(out, "  Warning: {}", warning)?;
    }

    Ok(())
}

fn bills_text(calculations: &BillsCalculations) -> Result<String, fmt::Error> {
    let blocks = calculations
        .calculations
        .iter()
        .map(bill_text)
        .collect::<Result<Vec<_>, _>>()?;
    // Two blank lines between bills
    Ok(blocks.join("\n\n"))
}

fn bill_text(calculation: &BillCalculation) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Bill: {}", calculation.bill.name)?;
    writeln!(out, "Amount: {}", calculation.bill.amount)?;
    writeln!(out, "Num days: {}", calculation.num_days())?;
    writeln!(out, "Daily amount: {}", calculation.daily_amount())?;

    writeln!(out, "Periods:")?;
    for period in &calculation.periods {
        let roommates: Vec<&str> = period.roommates.iter().map(|r| r.as_str()).collect();
        writeln!(
            out,
            "  {}: {} days, {}, {} per person ({})",
            period.range,
            period.num_days(),
            period.amount,
            period.amount_per_person(),
            roommates.join(", ")
        )?;
    }

    writeln!(out, "Roommate Totals:")?;
    for total in &calculation.roommate_totals {
        let components: Vec<String> = total.components.iter().map(|c| c.to_string()).collect();
        writeln!(out, "  {}: {} ({})", total.resident, total.total, components.join(" + "))?;
    }

    Ok(out)
}
