//! Help-desk ticket browser (helpdesk)
//!
//! Filters, sorts and pages through support tickets, and derives the
//! dashboard, report and directory screens from the same collection.
//!
//! The core is pure: [`query`] and [`state`] never perform I/O. Loading
//! ([`source`]), configuration ([`config`]) and logging ([`logging`]) sit at
//! the edges; [`view`] turns values into text for the binary to print.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
