//! Display helpers shared by the dashboard components.
//!
//! Pure functions only; everything here is unit tested without a renderer.

use api::models::{ProjectStatus, TransactionKind, TransactionStatus};
use api::Strings;
use chrono::NaiveDate;

/// Colour band of a budget's usage bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageTier {
    Low,
    Medium,
    High,
}

impl UsageTier {
    /// `< 50` is low, `50..80` medium, `>= 80` high. Negative and NaN inputs
    /// count as low.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage.is_nan() || percentage < 50.0 {
            UsageTier::Low
        } else if percentage < 80.0 {
            UsageTier::Medium
        } else {
            UsageTier::High
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            UsageTier::Low => "bg-green-500",
            UsageTier::Medium => "bg-yellow-500",
            UsageTier::High => "bg-red-500",
        }
    }
}

/// Budget list filter by period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeriodFilter {
    #[default]
    All,
    Monthly,
    Quarterly,
    Yearly,
}

impl PeriodFilter {
    pub const ALL: [PeriodFilter; 4] = [
        PeriodFilter::All,
        PeriodFilter::Monthly,
        PeriodFilter::Quarterly,
        PeriodFilter::Yearly,
    ];

    /// The backend's `period` value for this filter.
    pub fn key(&self) -> &'static str {
        match self {
            PeriodFilter::All => "all",
            PeriodFilter::Monthly => "monthly",
            PeriodFilter::Quarterly => "quarterly",
            PeriodFilter::Yearly => "yearly",
        }
    }

    pub fn label(&self, strings: &Strings) -> &'static str {
        match self {
            PeriodFilter::All => strings.period_all,
            PeriodFilter::Monthly => strings.period_monthly,
            PeriodFilter::Quarterly => strings.period_quarterly,
            PeriodFilter::Yearly => strings.period_yearly,
        }
    }

    /// Whether a budget with the backend's `period` value passes the filter.
    pub fn matches(&self, period: &str) -> bool {
        match self {
            PeriodFilter::All => true,
            other => period.eq_ignore_ascii_case(other.key()),
        }
    }
}

/// Icon family picked from a category name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    Food,
    Transport,
    Housing,
    Entertainment,
    Health,
    Education,
    Shopping,
    Utilities,
    General,
}

impl CategoryIcon {
    pub fn for_category(name: Option<&str>) -> Self {
        let name = name.unwrap_or_default().to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| name.contains(w));

        if has(&["food", "grocery"]) {
            CategoryIcon::Food
        } else if has(&["transport", "travel"]) {
            CategoryIcon::Transport
        } else if has(&["housing", "rent"]) {
            CategoryIcon::Housing
        } else if has(&["entertainment", "leisure"]) {
            CategoryIcon::Entertainment
        } else if has(&["health", "medical"]) {
            CategoryIcon::Health
        } else if has(&["education", "school"]) {
            CategoryIcon::Education
        } else if has(&["shopping", "clothing"]) {
            CategoryIcon::Shopping
        } else if has(&["utility", "bill"]) {
            CategoryIcon::Utilities
        } else {
            CategoryIcon::General
        }
    }
}

pub fn project_status_label(status: ProjectStatus, strings: &Strings) -> &'static str {
    match status {
        ProjectStatus::Planning => strings.status_planning,
        ProjectStatus::Active => strings.status_active,
        ProjectStatus::OnHold => strings.status_on_hold,
        ProjectStatus::Completed => strings.status_completed,
        ProjectStatus::Cancelled => strings.status_cancelled,
        ProjectStatus::Other => strings.status_other,
    }
}

/// Badge classes for a project status.
pub fn project_status_tone(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "bg-blue-100 text-blue-800",
        ProjectStatus::Active => "bg-green-100 text-green-800",
        ProjectStatus::OnHold => "bg-yellow-100 text-yellow-800",
        ProjectStatus::Cancelled => "bg-red-100 text-red-800",
        ProjectStatus::Completed | ProjectStatus::Other => "bg-gray-100 text-gray-800",
    }
}

/// `+` for money coming in, `-` otherwise.
pub fn transaction_sign(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Incoming => "+",
        _ => "-",
    }
}

pub fn transaction_tone(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Incoming => "text-emerald-600",
        _ => "text-red-600",
    }
}

/// Badge for transactions that are not completed yet.
pub fn transaction_status_badge(
    status: TransactionStatus,
    strings: &Strings,
) -> Option<(&'static str, &'static str)> {
    match status {
        TransactionStatus::Completed => None,
        TransactionStatus::Pending => Some((strings.tx_pending, "bg-yellow-100 text-yellow-800")),
        TransactionStatus::Failed => Some((strings.tx_failed, "bg-red-100 text-red-800")),
        TransactionStatus::Other => Some((strings.tx_unknown, "bg-gray-100 text-gray-800")),
    }
}

/// `1234.5` → `$1,234.50`; negative amounts get a leading `-`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{cents}")
}

/// `50%`, or one decimal when the value is fractional. Non-finite values
/// show as `0%`.
pub fn format_percentage(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Width of a progress bar in percent, within `0..=100`.
pub fn bar_width(percentage: f64) -> f64 {
    if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Today / Yesterday / `Mon D` for a backend date or timestamp. The calendar
/// date is taken as written (`YYYY-MM-DD` prefix); anything else is shown
/// verbatim.
pub fn relative_date(raw: &str, today: NaiveDate, strings: &Strings) -> String {
    let Some(date) = raw
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    else {
        return raw.to_string();
    };

    if date == today {
        strings.today.to_string()
    } else if today.pred_opt() == Some(date) {
        strings.yesterday.to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_tiers() {
        assert_eq!(UsageTier::from_percentage(0.0), UsageTier::Low);
        assert_eq!(UsageTier::from_percentage(49.99), UsageTier::Low);
        assert_eq!(UsageTier::from_percentage(50.0), UsageTier::Medium);
        assert_eq!(UsageTier::from_percentage(79.9), UsageTier::Medium);
        assert_eq!(UsageTier::from_percentage(80.0), UsageTier::High);
        assert_eq!(UsageTier::from_percentage(250.0), UsageTier::High);
        assert_eq!(UsageTier::from_percentage(-5.0), UsageTier::Low);
        assert_eq!(UsageTier::from_percentage(f64::NAN), UsageTier::Low);
        assert_eq!(UsageTier::High.bar_class(), "bg-red-500");
    }

    #[test]
    fn test_period_filter() {
        assert!(PeriodFilter::All.matches("Weekly"));
        assert!(PeriodFilter::Monthly.matches("Monthly"));
        assert!(PeriodFilter::Monthly.matches("monthly"));
        assert!(!PeriodFilter::Quarterly.matches("Yearly"));
    }

    #[test]
    fn test_period_filter_labels_follow_locale() {
        let pt = Strings::for_locale(api::Locale::PtBr);
        assert_eq!(PeriodFilter::Monthly.label(pt), "Mensal");
        assert_eq!(PeriodFilter::Monthly.label(Strings::en()), "Monthly");
        // Matching uses the backend value, not the translated label
        assert!(PeriodFilter::Monthly.matches("monthly"));
        assert!(!PeriodFilter::Monthly.matches("Mensal"));
    }

    #[test]
    fn test_category_icons() {
        assert_eq!(CategoryIcon::for_category(Some("Groceries")), CategoryIcon::Food);
        assert_eq!(CategoryIcon::for_category(Some("Rent")), CategoryIcon::Housing);
        assert_eq!(CategoryIcon::for_category(Some("Electric bill")), CategoryIcon::Utilities);
        assert_eq!(CategoryIcon::for_category(Some("Travel")), CategoryIcon::Transport);
        assert_eq!(CategoryIcon::for_category(Some("Misc")), CategoryIcon::General);
        assert_eq!(CategoryIcon::for_category(None), CategoryIcon::General);
    }

    #[test]
    fn test_project_status() {
        assert_eq!(project_status_label(ProjectStatus::OnHold, Strings::en()), "On Hold");
        assert_eq!(
            project_status_label(ProjectStatus::Active, Strings::for_locale(api::Locale::PtBr)),
            "Ativo"
        );
        assert_eq!(
            project_status_tone(ProjectStatus::Active),
            "bg-green-100 text-green-800"
        );
    }

    #[test]
    fn test_transaction_display() {
        assert_eq!(transaction_sign(TransactionKind::Incoming), "+");
        assert_eq!(transaction_sign(TransactionKind::Transfer), "-");
        let en = Strings::en();
        assert!(transaction_status_badge(TransactionStatus::Completed, en).is_none());
        assert_eq!(
            transaction_status_badge(TransactionStatus::Pending, en).map(|(label, _)| label),
            Some("pending")
        );
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0, "R$"), "R$1,000,000.00");
        assert_eq!(format_currency(-42.5, "$"), "-$42.50");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(f64::INFINITY, "$"), "$0.00");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(12.34), "12.3%");
        assert_eq!(format_percentage(f64::NAN), "0%");
        assert_eq!(format_percentage(f64::INFINITY), "0%");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(42.0), 42.0);
        assert_eq!(bar_width(250.0), 100.0);
        assert_eq!(bar_width(-3.0), 0.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
    }

    #[test]
    fn test_relative_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let en = Strings::en();
        assert_eq!(relative_date("2024-05-20", today, en), "Today");
        assert_eq!(relative_date("2024-05-19T23:00:00Z", today, en), "Yesterday");
        assert_eq!(relative_date("2024-05-03", today, en), "May 3");
        assert_eq!(relative_date("soon", today, en), "soon");
        assert_eq!(
            relative_date("2024-05-20", today, Strings::for_locale(api::Locale::PtBr)),
            "Hoje"
        );
    }
}
