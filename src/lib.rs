//! Cheerful - a terminal wizard for creating creator-outreach campaigns.
//!
//! The wizard walks through four steps (campaign type, campaign info,
//! integrations, email setup) driven by an explicit state machine in
//! [`ui::wizard`]. Scans and email generation are simulated by [`tasks`].

pub mod app;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod tasks;
pub mod ui;
