//! # Typed REST services
//!
//! One module per backend resource. Every function takes the shared
//! [`ApiClient`](crate::ApiClient), so the token header and 401 handling
//! apply uniformly. Paths are relative to the configured base URL.
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`accounts`] | `/accounts/`, `deposit`, `withdraw`, `total_balance`, `stats` |
//! | [`transactions`] | `/transactions/`, `recent`, `stats`, `summary` |
//! | [`categories`] | `/categories/` |
//! | [`goals`] | `/goals/`, `contribute`, `summary` |
//! | [`organizations`] | `/organizations/organizations/`, `/organizations/projects/` |
//! | [`budgets`] | `/budgets/summary/` |
//! | [`dashboard`] | `/dashboard/` |

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod goals;
pub mod organizations;
pub mod transactions;
