//! Screen state.
//!
//! Each screen keeps only its parameters (search text, filters, sort, page,
//! history order) and re-derives what it shows from the ticket collection.
//! The [`Desk`] is the one place where tickets change.

pub mod dashboard;
pub mod desk;
pub mod detail;
pub mod forms;
pub mod listing;

pub use dashboard::{DashboardState, DashboardView, DEFAULT_DASHBOARD_LIMIT};
pub use desk::{Desk, TIMESTAMP_FORMAT};
pub use detail::{DetailState, HistoryOrder};
pub use forms::{NewInteractionDraft, NewTicketDraft};
pub use listing::{ListingState, DEFAULT_PER_PAGE, PER_PAGE_OPTIONS};
