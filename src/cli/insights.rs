use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::make_rng;
use crate::error::Result;
use crate::fmt::{money, signed_pct};
use crate::insights;
use crate::models::{InsightKind, TimeRange};

pub fn overview(range: TimeRange, seed: Option<u64>) -> Result<()> {
    let summary = insights::overview(&mut make_rng(seed), range);

    let mut table = Table::new();
    table.set_header(vec!["", "Amount", "Change"]);
    table.add_row(vec![
        Cell::new("Income".green().bold()),
        Cell::new(money(summary.income)),
        Cell::new(signed_pct(summary.income_change)),
    ]);
    table.add_row(vec![
        Cell::new("Expenses".red().bold()),
        Cell::new(money(summary.expenses)),
        Cell::new(signed_pct(summary.expenses_change)),
    ]);
    table.add_row(vec![
        Cell::new("Predicted Balance".bold()),
        Cell::new(money(summary.predicted_balance)),
        Cell::new(signed_pct(summary.balance_change)),
    ]);

    println!("Overview ({})\n{table}", range.label());
    Ok(())
}

pub fn categories(range: TimeRange, seed: Option<u64>) -> Result<()> {
    let breakdown = insights::category_breakdown(&mut make_rng(seed), range);

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%"]);
    let mut total = 0.0;
    for agg in &breakdown {
        total += agg.value;
        table.add_row(vec![
            Cell::new(agg.name),
            Cell::new(money(agg.value)),
            Cell::new(format!("{:.1}%", agg.percentage)),
        ]);
    }
    table.add_row(vec![Cell::new("Total".bold()), Cell::new(money(total)), Cell::new("")]);

    println!("Category Breakdown ({})\n{table}", range.label());
    Ok(())
}

pub fn recurring(range: TimeRange, seed: Option<u64>) -> Result<()> {
    let items = insights::recurring_expenses(&mut make_rng(seed), range);

    let mut table = Table::new();
    table.set_header(vec!["Name", "Monthly Amount"]);
    let mut total = 0.0;
    for item in &items {
        total += item.amount;
        table.add_row(vec![Cell::new(item.name), Cell::new(money(item.amount))]);
    }
    table.add_row(vec![Cell::new("Total".bold()), Cell::new(money(total))]);

    println!("Recurring Expenses\n{table}");
    Ok(())
}

pub fn largest(range: TimeRange, seed: Option<u64>) -> Result<()> {
    let top = insights::largest_expenses(&mut make_rng(seed), range);

    let mut table = Table::new();
    table.set_header(vec!["Merchant", "Category", "Date", "Amount"]);
    for e in &top {
        table.add_row(vec![
            Cell::new(&e.merchant_name),
            Cell::new(e.category),
            Cell::new(e.date.format("%Y-%m-%d")),
            Cell::new(money(e.amount).red().to_string()),
        ]);
    }

    println!("Largest Expenses ({})\n{table}", range.label());
    Ok(())
}

pub fn smart(range: TimeRange, seed: Option<u64>) -> Result<()> {
    let items = insights::narrative_insights(&mut make_rng(seed), range);

    println!("Smart Insights ({})", range.label());
    for insight in &items {
        let marker = match insight.kind {
            InsightKind::Increase => insight.kind.as_str().red(),
            InsightKind::Decrease => insight.kind.as_str().green(),
            InsightKind::Alert => insight.kind.as_str().yellow().bold(),
            InsightKind::Info => insight.kind.as_str().blue(),
        };
        println!("  [{marker}] {}", insight.text);
        if let Some(subtext) = &insight.subtext {
            println!("    {}", subtext.dimmed());
        }
    }
    Ok(())
}
