//! Dashboard UI components
//!
//! Modular components for rendering different parts of the dashboard

pub mod alerts;
pub mod analytics;
pub mod charts;
pub mod footer;
pub mod header;
pub mod logs;
pub mod overview;
pub mod products;
