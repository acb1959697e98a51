//! Analytics over per-ticker daily series.
//!
//! This crate handles:
//! - Monthly open/close averages
//! - Maximum single-day high-low range
//! - Days of abnormally high volume
//! - The ticker with the most loss days
//!
//! Every computation is a pure reduction over a borrowed [`SeriesMap`], so any
//! of them may run concurrently against the same input.
//!
//! [`SeriesMap`]: analyzer_core::SeriesMap

pub mod engine;
pub mod loser;
pub mod monthly;
pub mod profit;
pub mod volume;

#[cfg(test)]
mod testutil;

pub use engine::{AnalyticsEngine, AnalyticsReport};
pub use loser::calc_biggest_loser;
pub use monthly::calc_average_monthly;
pub use profit::calc_max_daily_profit;
pub use volume::calc_busiest_days;
