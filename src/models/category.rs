//! Transaction and budget categories
//!
//! One closed set is shared by incomes, expenses and budgets so the three can
//! never drift apart. Categories travel over the wire as their display
//! strings (e.g. `"rent / housing"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the ledger a category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    Other,
}

/// A transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    // Income
    SalaryWages,
    FreelanceGigWork,
    BusinessSales,
    RentalIncome,
    Dividends,
    Interest,
    FarmProduceSales,
    ConsultingFees,
    Commissions,
    GrantsBursaries,
    LoanRepaymentReceived,
    GiftsRemittances,
    // Expense
    Groceries,
    Utilities,
    RentHousing,
    Transport,
    AirtimeData,
    FoodDiningOut,
    LoanRepayment,
    Clothing,
    Education,
    Health,
    Entertainment,
    PersonalCare,
    SavingsInvestment,
    TitheOfferings,
    RemittancesSent,
    Other,
}

impl Category {
    pub const ALL: [Category; 28] = [
        Self::SalaryWages,
        Self::FreelanceGigWork,
        Self::BusinessSales,
        Self::RentalIncome,
        Self::Dividends,
        Self::Interest,
        Self::FarmProduceSales,
        Self::ConsultingFees,
        Self::Commissions,
        Self::GrantsBursaries,
        Self::LoanRepaymentReceived,
        Self::GiftsRemittances,
        Self::Groceries,
        Self::Utilities,
        Self::RentHousing,
        Self::Transport,
        Self::AirtimeData,
        Self::FoodDiningOut,
        Self::LoanRepayment,
        Self::Clothing,
        Self::Education,
        Self::Health,
        Self::Entertainment,
        Self::PersonalCare,
        Self::SavingsInvestment,
        Self::TitheOfferings,
        Self::RemittancesSent,
        Self::Other,
    ];

    /// Wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalaryWages => "salary / wages",
            Self::FreelanceGigWork => "freelance / gig work",
            Self::BusinessSales => "business sales / daily sales",
            Self::RentalIncome => "rental income",
            Self::Dividends => "dividends",
            Self::Interest => "interest",
            Self::FarmProduceSales => "farm produce sales",
            Self::ConsultingFees => "consulting fees",
            Self::Commissions => "commissions",
            Self::GrantsBursaries => "grants / bursaries",
            Self::LoanRepaymentReceived => "loan repayment received",
            Self::GiftsRemittances => "gifts / remittances",
            Self::Groceries => "groceries",
            Self::Utilities => "utilities",
            Self::RentHousing => "rent / housing",
            Self::Transport => "transport",
            Self::AirtimeData => "airtime / data",
            Self::FoodDiningOut => "food - dining out",
            Self::LoanRepayment => "loan repayment",
            Self::Clothing => "clothing",
            Self::Education => "education",
            Self::Health => "health",
            Self::Entertainment => "entertainment",
            Self::PersonalCare => "personal care",
            Self::SavingsInvestment => "savings / investment",
            Self::TitheOfferings => "tithe / offerings",
            Self::RemittancesSent => "remittances sent",
            Self::Other => "other",
        }
    }

    pub fn kind(&self) -> CategoryKind {
        match self {
            Self::SalaryWages
            | Self::FreelanceGigWork
            | Self::BusinessSales
            | Self::RentalIncome
            | Self::Dividends
            | Self::Interest
            | Self::FarmProduceSales
            | Self::ConsultingFees
            | Self::Commissions
            | Self::GrantsBursaries
            | Self::LoanRepaymentReceived
            | Self::GiftsRemittances => CategoryKind::Income,
            Self::Other => CategoryKind::Other,
            _ => CategoryKind::Expense,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind() == CategoryKind::Income
    }

    /// Budgets may only be set on non-income categories
    pub fn is_budgetable(&self) -> bool {
        !self.is_income()
    }

    /// Categories offered when recording an income
    pub fn income_categories() -> impl Iterator<Item = Category> {
        Self::ALL
            .into_iter()
            .filter(|c| c.kind() != CategoryKind::Expense)
    }

    /// Categories a budget can be created for
    pub fn budget_categories() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(Category::is_budgetable)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Error for category strings outside the closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_round_trips_through_its_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(
            "  Rent / Housing ".parse::<Category>().unwrap(),
            Category::RentHousing
        );
        assert!("rent".parse::<Category>().is_err());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Category::SalaryWages.kind(), CategoryKind::Income);
        assert_eq!(Category::Groceries.kind(), CategoryKind::Expense);
        assert_eq!(Category::SavingsInvestment.kind(), CategoryKind::Expense);
        assert_eq!(Category::Other.kind(), CategoryKind::Other);
        assert!(!Category::Dividends.is_budgetable());
        assert!(Category::Other.is_budgetable());
    }

    #[test]
    fn test_category_sets() {
        assert_eq!(Category::income_categories().count(), 13);
        assert_eq!(Category::budget_categories().count(), 16);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::FoodDiningOut).unwrap();
        assert_eq!(json, "\"food - dining out\"");
        let parsed: Category = serde_json::from_str("\"airtime / data\"").unwrap();
        assert_eq!(parsed, Category::AirtimeData);
        assert!(serde_json::from_str::<Category>("\"yachts\"").is_err());
    }
}
