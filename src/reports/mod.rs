//! Aggregation reports
//!
//! Read-only views computed from storage: summaries, monthly trends,
//! category breakdowns, trending categories and budget status. Every report
//! re-reads storage when generated.

pub mod budget_status;
pub mod categories;
pub mod summary;
pub mod trend;
pub mod trending;

pub use budget_status::{unused_budgets, unused_budgets_at, BudgetLine, BudgetStatusReport};
pub use categories::{all_categories, categories_in, CategoryAnalysis, CategoryStats};
pub use summary::MonthlySummary;
pub use trend::{MonthlyTrends, SheetTrend, TrendPoint};
pub use trending::{CategoryTotal, TrendingReport, TrendingSection};
