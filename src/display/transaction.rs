//! Recent transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_date, truncate};
use crate::models::Currency;
use crate::services::RecentTransaction;

#[derive(Tabled)]
struct FeedRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format the recent feed as a table; expenses are shown negative
pub fn format_feed_table(feed: &[RecentTransaction], currency: Currency, date_format: &str) -> String {
    if feed.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = feed.iter().map(|t| FeedRow {
        date: format_date(t.date, date_format),
        description: truncate(&t.description, 32),
        category: t.category.to_string(),
        amount: t.signed_amount().format_with_currency(currency),
        status: t.status.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
