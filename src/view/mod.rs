//! Plain-text rendering.
//!
//! Every renderer is a pure function from model or state values to a
//! `String`; printing is left to the binary.

pub mod detail;
pub mod reports;
pub mod table;
pub mod text;

pub use detail::render_detail;
pub use reports::{
    render_category_report, render_dashboard, render_summary, render_team_report, render_teams,
    render_users,
};
pub use table::{render_listing, render_ticket_table};
pub use text::truncate_text;
