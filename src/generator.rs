//! Synthetic transaction generation.
//!
//! Every attribute is drawn from a fixed vocabulary or a bounded range keyed
//! by category, so generated data is category-consistent: merchants belong to
//! their category, amount sign follows category, and the recurring flag is a
//! pure function of the merchant name. All randomness comes from the caller's
//! `Rng` so tests can seed it.

use chrono::{Datelike, Duration, Local, Months, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Category, Source, Transaction};

/// Merchant name fragments that mark a transaction as subscription-like.
/// Matching is case-insensitive substring, so "Adobe" covers "Adobe Store".
const RECURRING_VENDORS: &[&str] = &[
    "netflix",
    "spotify",
    "gym membership",
    "adobe",
    "microsoft",
    "amazon prime",
    "youtube premium",
    "internet provider",
    "phone bill",
    "insurance",
];

const CITIES: &[&str] = &[
    "San Francisco",
    "Austin",
    "Seattle",
    "Chicago",
    "Denver",
    "Portland",
];

/// Fixed per-category merchant vocabulary.
pub fn merchants(category: Category) -> &'static [&'static str] {
    match category {
        Category::FoodDining => &[
            "Starbucks",
            "McDonald's",
            "Chipotle",
            "Uber Eats",
            "Whole Foods",
            "Local Restaurant",
        ],
        Category::Transportation => &[
            "Uber",
            "Lyft",
            "Shell",
            "Chevron",
            "Public Transit",
            "Parking Fee",
        ],
        Category::Shopping => &[
            "Amazon",
            "Target",
            "Walmart",
            "Best Buy",
            "Apple Store",
            "Nike",
        ],
        Category::Entertainment => &[
            "Netflix",
            "Spotify",
            "AMC Theaters",
            "GameStop",
            "Steam",
            "Disney+",
        ],
        Category::BillsUtilities => &[
            "AT&T",
            "Verizon",
            "Comcast",
            "PG&E",
            "Water Bill",
            "Electricity Provider",
        ],
        Category::Subscriptions => &[
            "Adobe",
            "Microsoft",
            "Amazon Prime",
            "YouTube Premium",
            "Gym Membership",
            "New York Times",
        ],
        Category::Travel => &[
            "Airbnb",
            "Marriott",
            "United Airlines",
            "Expedia",
            "Hertz",
            "American Airlines",
        ],
        Category::Health => &[
            "CVS",
            "Walgreens",
            "Fitness App",
            "Doctor Visit",
            "Pharmacy",
            "Dental Care",
        ],
        Category::Income => &[
            "Salary Deposit",
            "Freelance Payment",
            "Investment Return",
            "Venmo Transfer",
            "Tax Refund",
            "Bonus",
        ],
    }
}

/// True if the merchant name contains any fragment from the fixed
/// recurring-vendor list, case-insensitively.
pub fn is_recurring_merchant(merchant: &str) -> bool {
    let lower = merchant.to_lowercase();
    RECURRING_VENDORS.iter().any(|v| lower.contains(v))
}

fn round_cents(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

fn random_datetime_between(
    rng: &mut impl Rng,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> NaiveDateTime {
    let span = (end - start).num_seconds().max(1);
    start + Duration::seconds(rng.gen_range(0..span))
}

/// Calendar-month window: midnight on the 1st of the month `months_back`
/// months ago, up to (exclusively) the next month boundary, capped at `now`
/// for the current month.
fn month_window(now: NaiveDateTime, months_back: u32) -> (NaiveDateTime, NaiveDateTime) {
    let first = now.date().with_day(1).expect("day 1 is always valid") - Months::new(months_back);
    let start = first.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    let end = if months_back == 0 {
        now
    } else {
        (first + Months::new(1))
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
    };
    (start, end)
}

fn synth_transaction(rng: &mut impl Rng, date: NaiveDateTime) -> Transaction {
    let category = *Category::ALL.choose(rng).expect("category set is non-empty");
    let merchant_name = *merchants(category).choose(rng).expect("vocabulary is non-empty");
    let is_recurring = is_recurring_merchant(merchant_name);

    let amount = if category.is_income() {
        round_cents(rng.gen_range(500.0..=5000.0))
    } else {
        -round_cents(rng.gen_range(5.0..=500.0))
    };

    let description = match rng.gen_range(0..5) {
        0 => format!("Purchase at {merchant_name}"),
        1 => format!("Payment to {merchant_name}"),
        2 => format!("{category} expense"),
        3 => {
            let cadence = if is_recurring { "Monthly" } else { "One-time" };
            format!("{cadence} {} payment", category.as_str().to_lowercase())
        }
        _ => {
            let city = CITIES.choose(rng).expect("city list is non-empty");
            format!("{merchant_name} - {city}")
        }
    };

    let ai_insight = if rng.gen_bool(0.3) {
        Some(match rng.gen_range(0..5) {
            0 => {
                let note = if is_recurring {
                    "a recurring payment"
                } else {
                    "higher than your usual spending"
                };
                format!("This is {note} at {merchant_name}.")
            }
            1 => {
                let vs = if amount.abs() > 100.0 {
                    "significantly more"
                } else {
                    "about the same"
                };
                format!("You've spent {vs} compared to last month in this category.")
            }
            2 => format!(
                "This merchant has increased their price by {}% since your last visit.",
                rng.gen_range(5..=25)
            ),
            3 => format!(
                "This is your {}th transaction at {merchant_name} this month.",
                rng.gen_range(2..=5)
            ),
            _ => format!(
                "Based on your spending patterns, you might want to consider setting a budget for {}.",
                category.as_str().to_lowercase()
            ),
        })
    } else {
        None
    };

    let source = *Source::ALL.choose(rng).expect("source set is non-empty");

    let original_message = match source {
        Source::Email if rng.gen_bool(0.25) => Some(format!(
            "Receipt from {merchant_name}: payment of ${:.2} processed.",
            amount.abs()
        )),
        Source::Sms if rng.gen_bool(0.25) => Some(format!(
            "Alert: ${:.2} spent at {merchant_name} on {}.",
            amount.abs(),
            date.format("%m/%d")
        )),
        _ => None,
    };

    Transaction {
        id: uuid::Builder::from_random_bytes(rng.gen()).into_uuid().to_string(),
        merchant_name: merchant_name.to_string(),
        amount,
        date,
        category,
        description,
        is_recurring,
        has_receipt: rng.gen_bool(0.3),
        source,
        original_message,
        ai_insight,
    }
}

/// Generate `count` transactions dated uniformly within the 60 days before
/// `now`, newest first.
pub fn generate_at(rng: &mut impl Rng, count: usize, now: NaiveDateTime) -> Vec<Transaction> {
    let start = now - Duration::days(60);
    let mut txns: Vec<Transaction> = (0..count)
        .map(|_| {
            let date = random_datetime_between(rng, start, now);
            synth_transaction(rng, date)
        })
        .collect();
    txns.sort_by(|a, b| b.date.cmp(&a.date));
    txns
}

/// Generate `count` transactions over the last 60 days, newest first.
pub fn generate(rng: &mut impl Rng, count: usize) -> Vec<Transaction> {
    generate_at(rng, count, Local::now().naive_local())
}

/// Generate three declining-volume month cohorts anchored at `now`: 30-45
/// transactions in the current month, 25-40 in the previous month and 15-30
/// two months back, each dated within its calendar-month boundaries. The
/// merged result is sorted newest first.
pub fn generate_months_at(rng: &mut impl Rng, now: NaiveDateTime) -> Vec<Transaction> {
    let cohorts = [
        (0u32, rng.gen_range(30..=45usize)),
        (1, rng.gen_range(25..=40)),
        (2, rng.gen_range(15..=30)),
    ];

    let mut txns = Vec::new();
    for (months_back, count) in cohorts {
        let (start, end) = month_window(now, months_back);
        for _ in 0..count {
            let date = random_datetime_between(rng, start, end);
            txns.push(synth_transaction(rng, date));
        }
    }
    txns.sort_by(|a, b| b.date.cmp(&a.date));
    txns
}

/// Month-cohort generation anchored at the current local time.
pub fn generate_months(rng: &mut impl Rng) -> Vec<Transaction> {
    generate_months_at(rng, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_income_iff_positive_amount() {
        let txns = generate_at(&mut rng(1), 200, anchor());
        for t in &txns {
            assert_eq!(
                t.category.is_income(),
                t.amount > 0.0,
                "sign/category mismatch: {:?} {}",
                t.category,
                t.amount
            );
        }
    }

    #[test]
    fn test_amount_magnitudes_are_bounded() {
        let txns = generate_at(&mut rng(2), 200, anchor());
        for t in &txns {
            let abs = t.amount.abs();
            if t.category.is_income() {
                assert!((500.0..=5000.0).contains(&abs), "income out of range: {abs}");
            } else {
                assert!((5.0..=500.0).contains(&abs), "expense out of range: {abs}");
            }
        }
    }

    #[test]
    fn test_recurring_flag_matches_vendor_list() {
        let txns = generate_at(&mut rng(3), 200, anchor());
        for t in &txns {
            assert_eq!(t.is_recurring, is_recurring_merchant(&t.merchant_name));
        }
    }

    #[test]
    fn test_recurring_match_is_case_insensitive_substring() {
        assert!(is_recurring_merchant("NETFLIX"));
        assert!(is_recurring_merchant("Amazon Prime Video"));
        assert!(is_recurring_merchant("State Farm Insurance"));
        assert!(!is_recurring_merchant("Amazon"));
        assert!(!is_recurring_merchant("Starbucks"));
    }

    #[test]
    fn test_merchant_drawn_from_category_vocabulary() {
        let txns = generate_at(&mut rng(4), 200, anchor());
        for t in &txns {
            assert!(
                merchants(t.category).contains(&t.merchant_name.as_str()),
                "{} not in {:?} vocabulary",
                t.merchant_name,
                t.category
            );
        }
    }

    #[test]
    fn test_generate_count_window_and_order() {
        let now = anchor();
        let txns = generate_at(&mut rng(5), 50, now);
        assert_eq!(txns.len(), 50);
        for pair in txns.windows(2) {
            assert!(pair[0].date >= pair[1].date, "not sorted newest first");
        }
        let start = now - Duration::days(60);
        for t in &txns {
            assert!(t.date >= start && t.date <= now);
        }
    }

    #[test]
    fn test_generate_months_cohort_sizes_and_boundaries() {
        let now = anchor();
        let txns = generate_months_at(&mut rng(6), now);
        assert!((70..=115).contains(&txns.len()), "got {}", txns.len());

        let mut per_month = std::collections::HashMap::new();
        for t in &txns {
            *per_month.entry((t.date.year(), t.date.month())).or_insert(0usize) += 1;
        }
        assert_eq!(per_month.len(), 3, "expected exactly three calendar months");
        assert!((30..=45).contains(&per_month[&(2026, 8)]));
        assert!((25..=40).contains(&per_month[&(2026, 7)]));
        assert!((15..=30).contains(&per_month[&(2026, 6)]));

        for pair in txns.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        let earliest = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        for t in &txns {
            assert!(t.date >= earliest && t.date <= now);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_at(&mut rng(42), 30, anchor());
        let b = generate_at(&mut rng(42), 30, anchor());
        assert_eq!(a, b);

        let c = generate_months_at(&mut rng(42), anchor());
        let d = generate_months_at(&mut rng(42), anchor());
        assert_eq!(c, d);
    }

    #[test]
    fn test_ids_are_unique() {
        let txns = generate_at(&mut rng(7), 100, anchor());
        let ids: std::collections::HashSet<_> = txns.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), txns.len());
    }

    #[test]
    fn test_original_message_only_on_email_or_sms() {
        let txns = generate_at(&mut rng(8), 300, anchor());
        for t in &txns {
            if t.original_message.is_some() {
                assert!(matches!(t.source, Source::Email | Source::Sms));
            }
        }
    }
}
