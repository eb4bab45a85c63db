//! SVG card renderers
//!
//! Each renderer is a pure function from aggregated data to a self-contained
//! SVG document. Geometry is computed in a separate `*_layout` step so it can
//! be checked without parsing markup.

pub mod icons;
pub mod languages;
pub mod skills;
pub mod stats;
pub mod theme;

pub use languages::{languages_layout, render_languages_card, LanguagesLayout};
pub use skills::{render_skills_card, resolve_skill, skills_layout, SkillEntry, SkillsLayout};
pub use stats::{render_stats_card, stats_layout, StatsLayout};
