//! Derived insight summaries over weighted random distributions.
//!
//! None of these derivations look at real transactions: each one redraws its
//! own figures from the base monthly constants scaled by the requested time
//! range. That means overview and breakdown numbers for the same range do not
//! agree across calls, matching the original dashboard demo. Within a single
//! breakdown call the values are rescaled to the drawn expenses total so the
//! aggregate is internally consistent.

use chrono::{Duration, Local, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    CategoryAggregate, Insight, InsightKind, LargeExpense, OverviewSummary, RecurringExpense,
    TimeRange,
};

/// Reference monthly income before range scaling and perturbation.
const BASE_INCOME: f64 = 4500.0;
/// Reference monthly expenses before range scaling and perturbation.
const BASE_EXPENSES: f64 = 3200.0;

/// Relative spending weights for the breakdown categories.
const CATEGORY_WEIGHTS: &[(&str, f64)] = &[
    ("Housing", 30.0),
    ("Food", 15.0),
    ("Transportation", 10.0),
    ("Entertainment", 8.0),
    ("Shopping", 12.0),
    ("Health", 7.0),
    ("Utilities", 10.0),
    ("Subscriptions", 8.0),
];

/// Monthly base amounts for common recurring expenses.
const RECURRING_ITEMS: &[(&str, f64)] = &[
    ("Rent/Mortgage", 1200.0),
    ("Utilities", 200.0),
    ("Phone Bill", 80.0),
    ("Internet", 70.0),
    ("Streaming Services", 50.0),
    ("Gym Membership", 40.0),
    ("Insurance", 120.0),
];

/// Category label pool for the largest-expenses ranking.
const LARGE_EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Transportation",
    "Shopping",
    "Travel",
    "Electronics",
    "Healthcare",
    "Food & Dining",
];

const RETAILERS: &[&str] = &[
    "Westfield Retail Group",
    "Summit Goods Co.",
    "Harbor Lane Outfitters",
    "Cedar & Main",
    "Golden Gate Supply",
];

const DEPARTMENTS: &[&str] = &["Electronics", "Groceries", "Clothing", "Home & Garden", "Dining"];

fn round_cents(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

fn round_tenth(val: f64) -> f64 {
    (val * 10.0).round() / 10.0
}

/// Headline figures for the range: perturbed income/expenses plus a naive
/// predicted balance (net plus 5% of income).
pub fn overview(rng: &mut impl Rng, range: TimeRange) -> OverviewSummary {
    let multiplier = range.multiplier();
    let income = BASE_INCOME * multiplier * rng.gen_range(0.9..1.1);
    let expenses = BASE_EXPENSES * multiplier * rng.gen_range(0.85..1.15);
    let predicted_balance = income - expenses + income * 0.05;

    let income_change = rng.gen_range(-15..=15);
    let expenses_change = rng.gen_range(-10..=20);

    OverviewSummary {
        income,
        expenses,
        predicted_balance,
        income_change,
        expenses_change,
        balance_change: income_change - expenses_change,
    }
}

/// Weighted category shares of an independently drawn expenses figure.
///
/// Each share is perturbed by up to 10% and then the set is rescaled so the
/// values sum back to the drawn total; percentages are computed against that
/// same total.
pub fn category_breakdown(rng: &mut impl Rng, range: TimeRange) -> Vec<CategoryAggregate> {
    let expenses = overview(rng, range).expenses;
    let total_weight: f64 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();

    let raw: Vec<(&'static str, f64)> = CATEGORY_WEIGHTS
        .iter()
        .map(|&(name, weight)| {
            let base = weight / total_weight * expenses;
            (name, base * rng.gen_range(0.9..1.1))
        })
        .collect();

    let raw_total: f64 = raw.iter().map(|(_, v)| v).sum();
    let scale = expenses / raw_total;

    raw.into_iter()
        .map(|(name, value)| {
            let value = round_cents(value * scale);
            CategoryAggregate {
                name,
                value,
                percentage: round_tenth(value / expenses * 100.0),
            }
        })
        .collect()
}

/// Fixed recurring expense rollup, largest first. The range parameter exists
/// for contract symmetry with the other derivations; recurring costs are
/// monthly regardless of window.
pub fn recurring_expenses(rng: &mut impl Rng, _range: TimeRange) -> Vec<RecurringExpense> {
    let mut items: Vec<RecurringExpense> = RECURRING_ITEMS
        .iter()
        .map(|&(name, base)| RecurringExpense {
            name,
            amount: round_cents(base * rng.gen_range(0.95..1.05)),
        })
        .collect();
    items.sort_by(|a, b| b.amount.partial_cmp(&a.amount).expect("amounts are finite"));
    items
}

fn large_expense_amount(rng: &mut impl Rng, category: &str) -> f64 {
    let magnitude = match category {
        "Housing" => rng.gen_range(800..=2000),
        "Electronics" => rng.gen_range(300..=1500),
        "Travel" => rng.gen_range(400..=2000),
        _ => rng.gen_range(100..=500),
    };
    -(magnitude as f64)
}

fn large_expense_merchant(rng: &mut impl Rng, category: &str) -> String {
    if category == "Housing" {
        return "Rent Payment".to_string();
    }
    let pool: &[&str] = match category {
        "Transportation" => &["Car Repair Shop", "Dealership", "Auto Insurance"],
        "Travel" => &["Airline Tickets", "Hotel Stay", "Travel Agency"],
        "Electronics" => &["Apple Store", "Best Buy", "Amazon"],
        "Healthcare" => &["Medical Center", "Hospital Bill", "Pharmacy"],
        _ => RETAILERS,
    };
    pool.choose(rng).expect("pool is non-empty").to_string()
}

/// Five synthetic large expenses for the range, sorted descending by
/// absolute amount.
pub fn largest_expenses(rng: &mut impl Rng, range: TimeRange) -> Vec<LargeExpense> {
    largest_expenses_at(rng, range, Local::now().naive_local())
}

/// Like [`largest_expenses`] with an explicit clock anchor for the date
/// window.
pub fn largest_expenses_at(
    rng: &mut impl Rng,
    range: TimeRange,
    now: NaiveDateTime,
) -> Vec<LargeExpense> {
    let window = Duration::days(range.recent_days());
    let mut expenses: Vec<LargeExpense> = (0..5)
        .map(|_| {
            let category = *LARGE_EXPENSE_CATEGORIES.choose(rng).expect("pool is non-empty");
            let amount = large_expense_amount(rng, category);
            let merchant_name = large_expense_merchant(rng, category);
            let offset = Duration::seconds(rng.gen_range(0..window.num_seconds()));
            LargeExpense {
                merchant_name,
                amount,
                date: now - offset,
                category,
            }
        })
        .collect();
    expenses.sort_by(|a, b| {
        b.amount.abs().partial_cmp(&a.amount.abs()).expect("amounts are finite")
    });
    expenses
}

/// Four narrative insights drawn from a shuffled pool of five templates.
pub fn narrative_insights(rng: &mut impl Rng, range: TimeRange) -> Vec<Insight> {
    let timeframe = range.label();

    let fifth_kind = if rng.gen_bool(0.5) { InsightKind::Increase } else { InsightKind::Decrease };
    let fifth_verb = if fifth_kind == InsightKind::Increase { "increased" } else { "decreased" };
    let daily_direction = if rng.gen_bool(0.5) { "higher" } else { "lower" };

    let mut pool = vec![
        Insight {
            kind: InsightKind::Increase,
            text: format!(
                "You're spending {}% more on subscriptions {timeframe}.",
                rng.gen_range(12..=35)
            ),
            subtext: Some("Consider reviewing your recurring payments.".to_string()),
        },
        Insight {
            kind: InsightKind::Decrease,
            text: format!(
                "Groceries dropped by ${} compared to last {range}.",
                rng.gen_range(40..=120)
            ),
            subtext: Some("Great job on reducing food expenses!".to_string()),
        },
        Insight {
            kind: InsightKind::Alert,
            text: format!(
                "High transaction detected: ${} on {}.",
                rng.gen_range(500..=1200),
                DEPARTMENTS.choose(rng).expect("department list is non-empty")
            ),
            subtext: None,
        },
        Insight {
            kind: InsightKind::Info,
            text: format!(
                "Your average daily spending is ${}, {}% {daily_direction} than usual.",
                rng.gen_range(30..=150),
                rng.gen_range(5..=20)
            ),
            subtext: None,
        },
        Insight {
            kind: fifth_kind,
            text: format!(
                "Your {} spending {fifth_verb} by {}%.",
                DEPARTMENTS.choose(rng).expect("department list is non-empty").to_lowercase(),
                rng.gen_range(8..=25)
            ),
            subtext: if rng.gen_bool(0.5) {
                Some("This category has been trending up recently.".to_string())
            } else {
                None
            },
        },
    ];

    pool.shuffle(rng);
    pool.truncate(4);
    pool
}
