//! Revenue projection by business line.
//!
//! A ParameterSet goes into the RevenueModel, a RevenueTable comes out,
//! and a Report renders it. Sessions drive that loop interactively.

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod param;
pub mod report;
pub mod rounding;
pub mod session;
pub mod table;
pub mod types;
