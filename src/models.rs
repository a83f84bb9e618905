use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

/// Closed set of transaction categories. `Income` is the only category whose
/// amounts are positive; every other category is an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsUtilities,
    Subscriptions,
    Travel,
    Health,
    Income,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::FoodDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsUtilities,
        Category::Subscriptions,
        Category::Travel,
        Category::Health,
        Category::Income,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FoodDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsUtilities => "Bills & Utilities",
            Category::Subscriptions => "Subscriptions",
            Category::Travel => "Travel",
            Category::Health => "Health",
            Category::Income => "Income",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Category::Income)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food & dining" | "food" => Ok(Category::FoodDining),
            "transportation" | "transport" => Ok(Category::Transportation),
            "shopping" => Ok(Category::Shopping),
            "entertainment" => Ok(Category::Entertainment),
            "bills & utilities" | "bills" => Ok(Category::BillsUtilities),
            "subscriptions" => Ok(Category::Subscriptions),
            "travel" => Ok(Category::Travel),
            "health" => Ok(Category::Health),
            "income" => Ok(Category::Income),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Channel a transaction was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Bank,
    Email,
    Sms,
    Manual,
}

impl Source {
    pub const ALL: [Source; 4] = [Source::Bank, Source::Email, Source::Sms, Source::Manual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Bank => "bank",
            Source::Email => "email",
            Source::Sms => "sms",
            Source::Manual => "manual",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bank" => Ok(Source::Bank),
            "email" => Ok(Source::Email),
            "sms" => Ok(Source::Sms),
            "manual" => Ok(Source::Manual),
            _ => Err(format!("Unknown source: {s} (expected bank, email, sms or manual)")),
        }
    }
}

/// Coarse aggregation window used to scale the synthetic insight totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    /// Multiplier applied to the base monthly income/expense figures.
    pub fn multiplier(&self) -> f64 {
        match self {
            TimeRange::Week => 0.25,
            TimeRange::Month => 1.0,
            TimeRange::Quarter => 3.0,
            TimeRange::Year => 12.0,
        }
    }

    /// Size of the recent-date window, in days, for range-scoped records.
    pub fn recent_days(&self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }

    /// Human phrasing used inside narrative insight texts.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "this week",
            TimeRange::Month => "this month",
            TimeRange::Quarter => "this quarter",
            TimeRange::Year => "this year",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Quarter => "quarter",
            TimeRange::Year => "year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "quarter" => Ok(TimeRange::Quarter),
            "year" => Ok(TimeRange::Year),
            _ => Err(format!("Unknown time range: {s} (expected week, month, quarter or year)")),
        }
    }
}

/// A single synthetic financial event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub merchant_name: String,
    /// Signed amount: negative = expense, positive = income.
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: Category,
    pub description: String,
    pub is_recurring: bool,
    pub has_receipt: bool,
    pub source: Source,
    pub original_message: Option<String>,
    pub ai_insight: Option<String>,
}

/// Signed amount bounds for filtering.
///
/// The default `[0, 10000]` mirrors the original dashboard: expenses are
/// negative, so a default query shows income only until the caller widens
/// the lower bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AmountRange {
    fn default() -> Self {
        Self { min: 0.0, max: 10_000.0 }
    }
}

/// Transient query object for narrowing a transaction listing. All supplied
/// criteria must pass (conjunctive).
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring match against merchant name or description.
    /// Empty = no search filter.
    pub search_term: String,
    /// `None` = all categories.
    pub category: Option<Category>,
    /// `None` = all sources.
    pub source: Option<Source>,
    pub amount_range: AmountRange,
}

/// One category's share of total expenses for a period.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub name: &'static str,
    /// Sum of absolute amounts in the category, rounded to cents.
    pub value: f64,
    /// Share of total expenses, one decimal place.
    pub percentage: f64,
}

/// Headline income/expense figures for a time range.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSummary {
    pub income: f64,
    pub expenses: f64,
    /// income - expenses + income * 0.05
    pub predicted_balance: f64,
    pub income_change: i32,
    pub expenses_change: i32,
    pub balance_change: i32,
}

/// A named subscription-like monthly cost.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringExpense {
    pub name: &'static str,
    pub amount: f64,
}

/// A single record in the "largest expenses" ranking. Its category labels
/// form their own pool, distinct from [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct LargeExpense {
    pub merchant_name: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Increase,
    Decrease,
    Alert,
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Increase => "increase",
            InsightKind::Decrease => "decrease",
            InsightKind::Alert => "alert",
            InsightKind::Info => "info",
        }
    }
}

/// A templated narrative observation about spending behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
    pub subtext: Option<String>,
}
