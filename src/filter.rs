//! In-memory filtering and month-grouping of transaction listings.

use crate::models::{FilterSpec, Transaction};

fn matches(txn: &Transaction, spec: &FilterSpec) -> bool {
    if !spec.search_term.is_empty() {
        let term = spec.search_term.to_lowercase();
        let in_merchant = txn.merchant_name.to_lowercase().contains(&term);
        let in_description = txn.description.to_lowercase().contains(&term);
        if !in_merchant && !in_description {
            return false;
        }
    }

    if let Some(category) = spec.category {
        if txn.category != category {
            return false;
        }
    }

    if let Some(source) = spec.source {
        if txn.source != source {
            return false;
        }
    }

    // Signed comparison: with the default [0, 10000] range this drops every
    // expense, since expenses are negative.
    txn.amount >= spec.amount_range.min && txn.amount <= spec.amount_range.max
}

/// Keep the transactions passing every supplied criterion, preserving input
/// order.
pub fn filter(transactions: &[Transaction], spec: &FilterSpec) -> Vec<Transaction> {
    transactions.iter().filter(|t| matches(t, spec)).cloned().collect()
}

/// Partition a transaction sequence into month buckets labeled
/// "<full month name> <year>". Buckets appear in first-encountered order and
/// keep their members in input order, so a date-descending input yields
/// newest-month-first buckets.
pub fn group_by_month(transactions: &[Transaction]) -> Vec<(String, Vec<Transaction>)> {
    let mut groups: Vec<(String, Vec<Transaction>)> = Vec::new();
    for txn in transactions {
        let label = txn.date.format("%B %Y").to_string();
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, bucket)) => bucket.push(txn.clone()),
            None => groups.push((label, vec![txn.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;
    use crate::models::{AmountRange, Category, Source};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample(seed: u64, count: usize) -> Vec<Transaction> {
        generator::generate_at(&mut StdRng::seed_from_u64(seed), count, anchor())
    }

    fn wide_open() -> FilterSpec {
        FilterSpec {
            search_term: String::new(),
            category: None,
            source: None,
            amount_range: AmountRange { min: -10_000.0, max: 10_000.0 },
        }
    }

    #[test]
    fn test_wide_open_filter_passes_everything_in_order() {
        let txns = sample(1, 50);
        let filtered = filter(&txns, &wide_open());
        assert_eq!(filtered, txns);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let txns = sample(2, 50);
        let spec = FilterSpec {
            category: Some(Category::FoodDining),
            ..wide_open()
        };
        let once = filter(&txns, &spec);
        let twice = filter(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_income_filter_yields_only_positive_amounts() {
        let txns = sample(3, 200);
        let spec = FilterSpec { category: Some(Category::Income), ..wide_open() };
        let filtered = filter(&txns, &spec);
        assert!(!filtered.is_empty());
        for t in &filtered {
            assert!(t.amount > 0.0);
            assert_eq!(t.category, Category::Income);
        }
    }

    #[test]
    fn test_default_amount_range_drops_expenses() {
        let txns = sample(4, 200);
        let filtered = filter(&txns, &FilterSpec::default());
        assert!(filtered.iter().all(|t| t.amount >= 0.0));
        // The dropped remainder is exactly the expense side.
        let expenses = txns.iter().filter(|t| t.amount < 0.0).count();
        assert_eq!(filtered.len() + expenses, txns.len());
    }

    fn fixture_txn(id: &str, merchant: &str, desc: &str, amount: f64, category: Category, source: Source) -> Transaction {
        Transaction {
            id: id.to_string(),
            merchant_name: merchant.to_string(),
            amount,
            date: anchor(),
            category,
            description: desc.to_string(),
            is_recurring: false,
            has_receipt: false,
            source,
            original_message: None,
            ai_insight: None,
        }
    }

    fn fixture() -> Vec<Transaction> {
        vec![
            fixture_txn("a", "Starbucks", "Purchase at Starbucks", -6.5, Category::FoodDining, Source::Bank),
            fixture_txn("b", "Uber", "Transportation expense", -18.0, Category::Transportation, Source::Sms),
            fixture_txn("c", "Salary Deposit", "Monthly income payment", 3200.0, Category::Income, Source::Bank),
            fixture_txn("d", "Local Restaurant", "Dinner with the starbucks crowd", -42.0, Category::FoodDining, Source::Email),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_over_merchant_and_description() {
        let txns = fixture();
        let spec = FilterSpec { search_term: "sTaRbUcKs".to_string(), ..wide_open() };
        let filtered = filter(&txns, &spec);
        let hits: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        // Matches the merchant on "a" and the description on "d".
        assert_eq!(hits, vec!["a", "d"]);
    }

    #[test]
    fn test_source_filter_is_exact() {
        let txns = fixture();
        let spec = FilterSpec { source: Some(Source::Sms), ..wide_open() };
        let filtered = filter(&txns, &spec);
        let hits: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(hits, vec!["b"]);
    }

    #[test]
    fn test_conjunction_of_criteria() {
        let txns = fixture();
        let spec = FilterSpec {
            search_term: "expense".to_string(),
            category: Some(Category::Transportation),
            source: Some(Source::Sms),
            amount_range: AmountRange { min: -10_000.0, max: 0.0 },
        };
        let filtered = filter(&txns, &spec);
        let hits: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(hits, vec!["b"]);

        // Tightening any one criterion to a miss empties the result.
        let miss = FilterSpec { category: Some(Category::Shopping), ..spec };
        assert!(filter(&txns, &miss).is_empty());
    }

    #[test]
    fn test_group_by_month_is_a_partition() {
        let txns = generator::generate_months_at(&mut StdRng::seed_from_u64(8), anchor());
        let groups = group_by_month(&txns);

        let regrouped: usize = groups.iter().map(|(_, bucket)| bucket.len()).sum();
        assert_eq!(regrouped, txns.len());

        let flattened: Vec<&Transaction> =
            groups.iter().flat_map(|(_, bucket)| bucket.iter()).collect();
        let ids: std::collections::HashSet<&str> =
            flattened.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), txns.len(), "every transaction lands in exactly one bucket");
    }

    #[test]
    fn test_group_labels_and_encounter_order() {
        let txns = generator::generate_months_at(&mut StdRng::seed_from_u64(9), anchor());
        let groups = group_by_month(&txns);
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        // Input is date-descending, so months surface newest first.
        assert_eq!(labels, vec!["August 2026", "July 2026", "June 2026"]);

        for (label, bucket) in &groups {
            for t in bucket {
                assert_eq!(&t.date.format("%B %Y").to_string(), label);
            }
            for pair in bucket.windows(2) {
                assert!(pair[0].date >= pair[1].date, "bucket keeps input order");
            }
        }
    }

    #[test]
    fn test_group_by_month_empty_input() {
        assert!(group_by_month(&[]).is_empty());
    }
}
