//! Cache layer for aggregated profile data
//!
//! Process-local key/value cache of serialized aggregates with a single TTL
//! and lazy expiry. Nothing survives a restart.

mod clock;
mod memory;

pub use clock::{Clock, ManualClock, SystemClock};
pub use memory::{cache_key, CacheKind, TtlCache, DEFAULT_TTL};
