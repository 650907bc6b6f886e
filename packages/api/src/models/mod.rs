//! Data models exchanged with the backend.

pub(crate) mod de;
mod finance;
mod input;
mod user;

pub use finance::{
    Account, Budget, BudgetSummary, Category, CategoryTotal, Contribution, DashboardOverview,
    Goal, ListResponse, Organization, OverviewTransaction, Project, ProjectStatus, TotalBalance,
    Transaction, TransactionKind, TransactionStatus, TransactionSummary,
};
pub use input::{
    AccountInput, AmountInput, CategoryInput, GoalFilter, GoalInput, GoalSummary,
    TransactionFilter, TransactionInput,
};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile};
