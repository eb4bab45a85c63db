//! Top languages card
//!
//! One row per language: name, share of the top languages as a percentage,
//! and a bar scaled to the largest language so the leader fills the track.

use super::theme::{self, Gradient};
use crate::aggregator::{LanguageUsage, TOP_LANGUAGES};

pub const CARD_WIDTH: u32 = 600;
pub const ROW_HEIGHT: u32 = 52;
pub const INNER_LEFT: u32 = 24;
pub const INNER_RIGHT: u32 = CARD_WIDTH - 24;
/// Bars start after room for the labels
pub const BAR_X: u32 = INNER_LEFT + 140;
/// Reserved on the right for the raw byte count
pub const VALUE_SPACE: u32 = 80;
pub const MIN_TRACK_WIDTH: u32 = 200;
/// Smallest drawn bar so near-zero languages stay visible
pub const MIN_BAR_WIDTH: u32 = 6;
const FIRST_ROW_Y: u32 = 80;
const CHROME_HEIGHT: u32 = 120;

const PALETTE: [(&str, &str); 5] = [
    ("#22d3ee", "#3b82f6"),
    ("#8b5cf6", "#22d3ee"),
    ("#f59e0b", "#ef4444"),
    ("#10b981", "#22d3ee"),
    ("#ef4444", "#8b5cf6"),
];

/// Computed geometry of one language row
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRow {
    pub name: String,
    pub size: u64,
    /// Share of the summed top-language sizes, rounded
    pub percent: u64,
    pub bar_width: u32,
    pub y: u32,
    pub gradient: Gradient,
}

/// Computed geometry of the whole card
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagesLayout {
    pub width: u32,
    pub height: u32,
    pub track_width: u32,
    pub rows: Vec<LanguageRow>,
}

/// Row color by index, cycling through the palette
pub fn palette_gradient(index: usize) -> Gradient {
    let (from, to) = PALETTE[index % PALETTE.len()];
    Gradient::new(from, to)
}

/// Lay out up to five languages
///
/// Input is re-sorted by size (stable) and truncated, so callers may pass an
/// unranked list.
pub fn languages_layout(languages: &[LanguageUsage]) -> LanguagesLayout {
    let mut top: Vec<&LanguageUsage> = languages.iter().collect();
    top.sort_by(|a, b| b.size.cmp(&a.size));
    top.truncate(TOP_LANGUAGES);

    let total = top.iter().map(|l| l.size).sum::<u64>().max(1);
    let max = top.iter().map(|l| l.size).max().unwrap_or(0).max(1);
    let track_width = MIN_TRACK_WIDTH.max(INNER_RIGHT - BAR_X - VALUE_SPACE);

    let rows = top
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            let percent = (lang.size as f64 / total as f64 * 100.0).round() as u64;
            let scaled = (lang.size as f64 / max as f64 * track_width as f64).round() as u32;
            LanguageRow {
                name: lang.name.clone(),
                size: lang.size,
                percent,
                bar_width: scaled.max(MIN_BAR_WIDTH),
                y: FIRST_ROW_Y + i as u32 * ROW_HEIGHT,
                gradient: palette_gradient(i),
            }
        })
        .collect::<Vec<_>>();

    LanguagesLayout {
        width: CARD_WIDTH,
        height: rows.len() as u32 * ROW_HEIGHT + CHROME_HEIGHT,
        track_width,
        rows,
    }
}

/// Render the top languages card as SVG
pub fn render_languages_card(languages: &[LanguageUsage]) -> String {
    let layout = languages_layout(languages);
    let font = theme::FONT_STACK;

    let mut defs = String::new();
    defs.push_str(&theme::linear_gradient("bgLang", &theme::background(), true));
    defs.push_str(&theme::linear_gradient("accentLang", &theme::accent(), false));
    for (i, row) in layout.rows.iter().enumerate() {
        defs.push_str(&theme::linear_gradient(&format!("lang-{}", i), &row.gradient, false));
    }

    let mut rows = String::new();
    for (i, row) in layout.rows.iter().enumerate() {
        rows.push_str(&format!(
            r#"
  <g transform="translate(0, {y})">
    <text x="{left}" y="0" dy="6" fill="{primary}" font-family="{font}" font-size="15" font-weight="600">{name}</text>
    <text x="{left}" y="24" fill="{muted}" font-family="{font}" font-size="12">{percent}%</text>
    <rect x="{bar_x}" y="-10" width="{track}" height="20" rx="10" fill="{track_fill}" stroke="{track_stroke}" stroke-width="1"/>
    <rect x="{bar_x}" y="-10" width="{bar}" height="20" rx="10" fill="url(#lang-{i})"/>
    <text x="{value_x}" y="6" fill="{muted}" font-family="{font}" font-size="12" text-anchor="end">{size}</text>
  </g>"#,
            y = row.y,
            left = INNER_LEFT,
            primary = theme::TEXT_PRIMARY,
            muted = theme::TEXT_MUTED,
            font = font,
            name = theme::escape_xml(&row.name),
            percent = row.percent,
            bar_x = BAR_X,
            track = layout.track_width,
            track_fill = theme::TRACK_FILL,
            track_stroke = theme::TRACK_STROKE,
            bar = row.bar_width,
            i = i,
            value_x = INNER_RIGHT - 12,
            size = row.size,
        ));
    }

    let mut svg = theme::svg_open(layout.width, layout.height, "Top languages");
    svg.push_str("\n  <defs>");
    svg.push_str(&defs);
    svg.push_str("\n  </defs>");
    svg.push_str(&theme::background_rect("bgLang"));
    svg.push_str(&theme::header(INNER_LEFT, 26, "Top Languages", 140, "accentLang"));
    svg.push_str(&rows);
    svg.push_str(&theme::footer(INNER_RIGHT, layout.height - 16, "Proportional to usage"));
    svg.push_str("\n</svg>\n");
    svg
}
