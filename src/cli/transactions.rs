use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::make_rng;
use crate::error::Result;
use crate::filter;
use crate::fmt::money;
use crate::generator;
use crate::models::{AmountRange, Category, FilterSpec, Source, Transaction};

pub fn run(
    search: Option<String>,
    category: Option<Category>,
    source: Option<Source>,
    min: f64,
    max: f64,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let transactions = match count {
        Some(n) => generator::generate(&mut rng, n),
        None => generator::generate_months(&mut rng),
    };

    let spec = FilterSpec {
        search_term: search.unwrap_or_default(),
        category,
        source,
        amount_range: AmountRange { min, max },
    };
    let filtered = filter::filter(&transactions, &spec);

    if filtered.is_empty() {
        println!(
            "No transactions match the current filters ({} generated).",
            transactions.len()
        );
        println!("Hint: the default amount range is [0, 10000]; expenses need --min -10000.");
        return Ok(());
    }

    for (label, bucket) in filter::group_by_month(&filtered) {
        println!("{}", label.bold());
        println!("{}", month_table(&bucket));
        println!();
    }

    let net: f64 = filtered.iter().map(|t| t.amount).sum();
    println!(
        "{} of {} transactions shown, net {}",
        filtered.len(),
        transactions.len(),
        colored_amount(net)
    );
    Ok(())
}

fn month_table(bucket: &[Transaction]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Merchant", "Category", "Source", "Flags", "Amount"]);
    for t in bucket {
        let mut flags = String::new();
        if t.is_recurring {
            flags.push('R');
        }
        if t.has_receipt {
            flags.push('#');
        }
        table.add_row(vec![
            Cell::new(t.date.format("%Y-%m-%d")),
            Cell::new(&t.merchant_name),
            Cell::new(t.category),
            Cell::new(t.source),
            Cell::new(flags),
            Cell::new(colored_amount(t.amount)),
        ]);
    }
    table
}

fn colored_amount(amount: f64) -> String {
    let text = money(amount);
    if amount < 0.0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}
