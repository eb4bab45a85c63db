//! Contribution stats card
//!
//! Three KPI tiles (commits, pull requests, issues) with progress rings
//! scaled to the largest of the three.

use super::theme;
use crate::aggregator::ContributionStats;
use std::f64::consts::PI;

pub const CARD_WIDTH: u32 = 600;
pub const CARD_HEIGHT: u32 = 240;
pub const RING_RADIUS: f64 = 34.0;
const TILE_WIDTH: u32 = 172;
const TILE_HEIGHT: u32 = 150;
const TILE_STRIDE: u32 = 190;

/// Ring stroke per tile: commits, pull requests, issues
const RING_STROKES: [&str; 3] = ["url(#accent)", "#3b82f6", "#f59e0b"];

/// Computed geometry of one KPI ring
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub label: &'static str,
    pub value: u64,
    /// Visible arc length, `circumference * value / max`
    pub arc: f64,
    pub stroke: &'static str,
}

/// Computed geometry of the stats card
#[derive(Debug, Clone, PartialEq)]
pub struct StatsLayout {
    pub circumference: f64,
    pub rings: [Ring; 3],
}

/// Ring circumference for [`RING_RADIUS`]
pub fn circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Lay out the three rings
pub fn stats_layout(stats: &ContributionStats) -> StatsLayout {
    let circ = circumference();
    let max = stats.max_value() as f64;
    let ring = |index: usize, label: &'static str, value: u64| Ring {
        label,
        value,
        arc: circ * value as f64 / max,
        stroke: RING_STROKES[index],
    };

    StatsLayout {
        circumference: circ,
        rings: [
            ring(0, "Commits", stats.commits),
            ring(1, "Pull Requests", stats.pull_requests),
            ring(2, "Issues", stats.issues),
        ],
    }
}

fn tile(index: usize, ring: &Ring, circ: f64) -> String {
    format!(
        r#"
    <g transform="translate({tx}, 0)" filter="url(#shadow)">
      <rect x="0" y="0" width="{tw}" height="{th}" fill="url(#tile)" rx="14" stroke="{track}" stroke-width="1"/>
      <g transform="translate({cx}, 78)">
        <circle r="{r}" fill="none" stroke="{track}" stroke-width="10" opacity="0.9"/>
        <circle r="{r}" fill="none" stroke="{stroke}" stroke-width="10" stroke-linecap="round" stroke-dasharray="{arc:.3} {circ:.3}" transform="rotate(-90)"/>
      </g>
      <text x="{cx}" y="30" text-anchor="middle" fill="{muted}" font-family="{font}" font-size="12" font-weight="600">{label}</text>
      <text x="{cx}" y="142" text-anchor="middle" fill="{bright}" font-family="{font}" font-size="26" font-weight="800">{value}</text>
    </g>"#,
        tx = index as u32 * TILE_STRIDE,
        tw = TILE_WIDTH,
        th = TILE_HEIGHT,
        track = theme::TRACK_STROKE,
        cx = TILE_WIDTH / 2,
        r = RING_RADIUS,
        stroke = ring.stroke,
        arc = ring.arc,
        circ = circ,
        muted = theme::TEXT_MUTED,
        bright = theme::TEXT_BRIGHT,
        font = theme::FONT_STACK,
        label = ring.label,
        value = ring.value,
    )
}

/// Render the contribution stats card as SVG
pub fn render_stats_card(stats: &ContributionStats) -> String {
    let layout = stats_layout(stats);

    let mut svg = theme::svg_open(CARD_WIDTH, CARD_HEIGHT, "GitHub overview");
    svg.push_str("\n  <defs>");
    svg.push_str(&theme::linear_gradient("bg", &theme::background(), true));
    svg.push_str(
        r##"
    <filter id="shadow" x="-20%" y="-20%" width="140%" height="140%">
      <feDropShadow dx="0" dy="8" stdDeviation="12" flood-color="#000" flood-opacity="0.35"/>
    </filter>"##,
    );
    svg.push_str(&theme::linear_gradient(
        "tile",
        &theme::Gradient::new("#111827", "#0b1020"),
        true,
    ));
    svg.push_str(&theme::linear_gradient("accent", &theme::accent(), false));
    svg.push_str("\n  </defs>");
    svg.push_str(&theme::background_rect("bg"));
    svg.push_str(&theme::header(24, 26, "GitHub Overview", 120, "accent"));

    svg.push_str("\n  <g transform=\"translate(24, 70)\">");
    for (i, ring) in layout.rings.iter().enumerate() {
        svg.push_str(&tile(i, ring, layout.circumference));
    }
    svg.push_str("\n  </g>\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_max_values_complete_the_ring() {
        let layout = stats_layout(&ContributionStats::new(50, 10, 50));
        let circ = layout.circumference;

        assert!(approx_eq(layout.rings[0].arc, circ));
        assert!(approx_eq(layout.rings[2].arc, circ));
        assert!(approx_eq(layout.rings[1].arc, circ / 5.0));
    }

    #[test]
    fn test_all_zero_draws_empty_rings() {
        let layout = stats_layout(&ContributionStats::default());
        assert!(layout.rings.iter().all(|r| r.arc == 0.0));
    }

    #[test]
    fn test_ring_colors_per_tile() {
        let layout = stats_layout(&ContributionStats::new(1, 1, 1));
        let strokes: Vec<&str> = layout.rings.iter().map(|r| r.stroke).collect();
        assert_eq!(strokes, vec!["url(#accent)", "#3b82f6", "#f59e0b"]);
    }

    #[test]
    fn test_render_contains_values_and_dasharray() {
        let svg = render_stats_card(&ContributionStats::new(50, 10, 50));
        let circ = circumference();

        assert!(svg.contains(">Pull Requests</text>"));
        assert!(svg.contains(">50</text>"));
        assert!(svg.contains(">10</text>"));
        assert!(svg.contains(&format!(
            r#"stroke-dasharray="{:.3} {:.3}""#,
            circ, circ
        )));
        assert!(svg.contains(&format!(
            r#"stroke-dasharray="{:.3} {:.3}""#,
            circ / 5.0,
            circ
        )));
        assert!(svg.contains(r#"width="600" height="240""#));
    }
}
