//! Profile aggregation
//!
//! Reduces raw GitHub profile data into the aggregates that are cached and
//! rendered: the ranked top languages and the flat contribution counts.

mod languages;
mod stats;

pub use languages::{aggregate_languages, LanguageUsage, TOP_LANGUAGES};
pub use stats::{derive_stats, ContributionStats};
