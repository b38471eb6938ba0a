//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, format_percentage};
use crate::models::Currency;
use crate::reports::BudgetAlerts;
use crate::services::BudgetProgress;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format budget progress as a table
pub fn format_budget_table(progress: &[BudgetProgress], currency: Currency) -> String {
    if progress.is_empty() {
        return "No budgets for this month.".to_string();
    }

    let rows = progress.iter().map(|p| BudgetRow {
        category: p.budget.category.to_string(),
        budget: p.budget.budget_amount.format_with_currency(currency),
        spent: p.status.spent_amount.format_with_currency(currency),
        remaining: p.status.remaining_amount.format_with_currency(currency),
        used: format_percentage(p.status.percentage_used),
        bar: format_bar(p.status.percentage_used, 100.0, 10),
        status: p.health.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the three alert groups
pub fn format_alerts(alerts: &BudgetAlerts, currency: Currency) -> String {
    if alerts.is_empty() {
        return "All budgets are healthy.".to_string();
    }

    let mut output = String::new();
    let groups = [
        ("Overspent", &alerts.overspent),
        ("Warning", &alerts.warning),
        ("High spending", &alerts.high_spending),
    ];
    for (title, items) in groups {
        if items.is_empty() {
            continue;
        }
        output.push_str(&format!("{} ({})\n", title, items.len()));
        for p in items.iter() {
            output.push_str(&format!(
                "  {:<24} {:>8}  {} of {}\n",
                p.budget.category.to_string(),
                format_percentage(p.status.percentage_used),
                p.status.spent_amount.format_with_currency(currency),
                p.budget.budget_amount.format_with_currency(currency)
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, Money, Month};
    use crate::services::{AlertThresholds, BudgetStatus};

    fn progress(category: Category, spent: i64) -> BudgetProgress {
        let budget = Budget::new(
            "b-1",
            Month::new(2025, 3).unwrap(),
            category,
            Money::from_cents(20_000),
        );
        let status = BudgetStatus::compute(budget.budget_amount, Money::from_cents(spent));
        BudgetProgress::new(budget, status, &AlertThresholds::default())
    }

    #[test]
    fn test_budget_table() {
        let table = format_budget_table(&[progress(Category::Groceries, 25_000)], Currency::Kes);
        assert!(table.contains("groceries"));
        assert!(table.contains("KES 200.00"));
        assert!(table.contains("-KES 50.00"));
        assert!(table.contains("125%"));
        assert!(table.contains("overspent"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_budget_table(&[], Currency::Kes),
            "No budgets for this month."
        );
    }

    #[test]
    fn test_alerts() {
        let all = vec![
            progress(Category::Groceries, 25_000),
            progress(Category::Transport, 13_000),
        ];
        let alerts = BudgetAlerts::from_progress(&all, &AlertThresholds::default());
        let output = format_alerts(&alerts, Currency::Usd);
        assert!(output.contains("Overspent (1)"));
        assert!(output.contains("High spending (1)"));
        assert!(!output.contains("Warning"));
    }
}
