//! Skills card
//!
//! Renders user-supplied skills as rounded pills, packed greedily into rows.
//! Known technologies get their own gradient, display name and icon; anything
//! else gets the default gradient, a plain dot and a capitalized label.

use super::icons;
use super::theme::{self, Gradient};
use serde::{Deserialize, Serialize};

pub const CARD_WIDTH: u32 = 600;
pub const LEFT: u32 = 24;
pub const RIGHT: u32 = CARD_WIDTH - 24;
const TOP_PAD: u32 = 26;
/// Header space above the first row of pills
const HEADER_SPACE: u32 = 54;
pub const ROW_HEIGHT: u32 = 40;
pub const PILL_HEIGHT: u32 = 28;
pub const PILL_PAD_X: u32 = 14;
pub const ICON_WIDTH: u32 = 18;
pub const PILL_GAP: u32 = 10;
const FOOTER_PAD: u32 = 30;
/// Approximate advance of one character at 13px
const CHAR_WIDTH: f64 = 7.2;
const MIN_TEXT_WIDTH: u32 = 24;

/// A skill as supplied by the caller
///
/// Deserializes from a bare label (`"rust"`) or a labeled object
/// (`{"name": "rust", "color": "#dea584"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SkillInput")]
pub struct SkillEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillInput {
    Label(String),
    Labeled {
        #[serde(default)]
        name: String,
        #[serde(default)]
        color: Option<String>,
    },
}

impl From<SkillInput> for SkillEntry {
    fn from(input: SkillInput) -> Self {
        match input {
            SkillInput::Label(name) => SkillEntry::new(name),
            SkillInput::Labeled { name, color } => SkillEntry { name, color },
        }
    }
}

impl SkillEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Parse a comma-separated list, trimming labels and dropping empties
    pub fn parse_list(list: &str) -> Vec<SkillEntry> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(SkillEntry::new)
            .collect()
    }
}

/// Leading marker inside a pill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Embedded icon as a data URI
    Icon(&'static str),
    /// Plain gradient dot
    Dot,
}

/// How one skill is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillStyle {
    pub key: String,
    pub label: String,
    pub gradient: Gradient,
    pub marker: Marker,
}

/// Resolve colors, label and marker for a skill
pub fn resolve_skill(entry: &SkillEntry) -> SkillStyle {
    let key = icons::normalize_key(&entry.name);

    let label = match icons::display_name_for(&key) {
        Some(name) => name.to_string(),
        None => {
            let naive = icons::naive_display_name(&entry.name);
            if naive.is_empty() {
                entry.name.trim().to_string()
            } else {
                naive
            }
        }
    };

    let gradient = entry
        .color
        .as_deref()
        .and_then(sanitize_color)
        .map(Gradient::solid)
        .or_else(|| icons::gradient_for(&key))
        .unwrap_or_else(icons::default_gradient);

    let marker = icons::icon_for(&key)
        .map(Marker::Icon)
        .unwrap_or(Marker::Dot);

    SkillStyle {
        key,
        label,
        gradient,
        marker,
    }
}

/// Accept `#rgb`/`#rrggbb`-style hex (with or without `#`) or a named color
fn sanitize_color(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    let is_hex = matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());

    if is_hex {
        Some(format!("#{}", hex.to_ascii_lowercase()))
    } else if !raw.is_empty() && raw.len() <= 32 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(raw.to_ascii_lowercase())
    } else {
        None
    }
}

/// Estimated rendered width of a label
pub fn text_width(label: &str) -> u32 {
    let estimate = (label.chars().count() as f64 * CHAR_WIDTH).round() as u32;
    estimate.max(MIN_TEXT_WIDTH)
}

/// Placed pill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub index: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub style: SkillStyle,
}

/// Computed geometry of the skills card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsLayout {
    pub width: u32,
    pub height: u32,
    pub pills: Vec<Pill>,
}

/// Pack pills left to right, wrapping when one would cross the right margin
pub fn skills_layout(skills: &[SkillEntry]) -> SkillsLayout {
    let mut x = LEFT;
    let mut y = TOP_PAD + HEADER_SPACE;
    let mut pills = Vec::new();

    for entry in skills.iter().filter(|s| !s.name.trim().is_empty()) {
        let style = resolve_skill(entry);
        let width = ICON_WIDTH + PILL_PAD_X * 2 + text_width(&style.label);

        // A pill wider than the card starts its own row instead of leaving one empty
        if x + width > RIGHT && x > LEFT {
            x = LEFT;
            y += ROW_HEIGHT;
        }

        pills.push(Pill {
            index: pills.len(),
            x,
            y,
            width,
            style,
        });
        x += width + PILL_GAP;
    }

    SkillsLayout {
        width: CARD_WIDTH,
        height: y + ROW_HEIGHT + FOOTER_PAD,
        pills,
    }
}

fn pill_markup(pill: &Pill) -> String {
    let marker = match pill.style.marker {
        Marker::Icon(uri) => format!(
            r#"<image href="{uri}" x="{x}" y="{y}" width="{w}" height="{w}"/>"#,
            uri = uri,
            x = PILL_PAD_X,
            y = (PILL_HEIGHT - ICON_WIDTH) / 2,
            w = ICON_WIDTH,
        ),
        Marker::Dot => format!(
            r#"<circle cx="{cx}" cy="{cy}" r="6" fill="url(#skill-{i})"/>"#,
            cx = PILL_PAD_X + ICON_WIDTH / 2,
            cy = PILL_HEIGHT / 2,
            i = pill.index,
        ),
    };

    format!(
        r#"
  <g transform="translate({x}, {y})">
    <rect x="0" y="0" width="{w}" height="{h}" rx="14" fill="{fill}" stroke="url(#skill-{i})" stroke-width="1"/>
    {marker}
    <text x="{tx}" y="{ty}" fill="{primary}" font-family="{font}" font-size="13" font-weight="600" dominant-baseline="middle">{label}</text>
  </g>"#,
        x = pill.x,
        y = pill.y,
        w = pill.width,
        h = PILL_HEIGHT,
        fill = theme::TRACK_FILL,
        i = pill.index,
        marker = marker,
        tx = PILL_PAD_X + ICON_WIDTH + 4,
        ty = PILL_HEIGHT / 2,
        primary = theme::TEXT_PRIMARY,
        font = theme::FONT_STACK,
        label = theme::escape_xml(&pill.style.label),
    )
}

/// Render the skills card as SVG
pub fn render_skills_card(skills: &[SkillEntry]) -> String {
    let layout = skills_layout(skills);

    let mut svg = theme::svg_open(layout.width, layout.height, "Skills");
    svg.push_str("\n  <defs>");
    svg.push_str(&theme::linear_gradient("bgSkills", &theme::background(), true));
    svg.push_str(&theme::linear_gradient("accentSkills", &theme::accent(), false));
    for pill in &layout.pills {
        svg.push_str(&theme::linear_gradient(
            &format!("skill-{}", pill.index),
            &pill.style.gradient,
            false,
        ));
    }
    svg.push_str("\n  </defs>");
    svg.push_str(&theme::background_rect("bgSkills"));
    svg.push_str(&theme::header(LEFT, TOP_PAD, "Skills", 100, "accentSkills"));
    for pill in &layout.pills {
        svg.push_str(&pill_markup(pill));
    }
    svg.push_str(&theme::footer(RIGHT, layout.height - 16, "Dynamic badges by skill list"));
    svg.push_str("\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_skills() {
        let layout = skills_layout(&[
            SkillEntry::new("react"),
            SkillEntry::new("Totally-Unknown-Tech"),
        ]);

        let react = &layout.pills[0].style;
        assert_eq!(react.label, "React");
        assert_eq!(react.gradient, Gradient::new("#61dafb", "#3b82f6"));
        assert!(matches!(react.marker, Marker::Icon(_)));

        let unknown = &layout.pills[1].style;
        assert_eq!(unknown.label, "Totally Unknown Tech");
        assert_eq!(unknown.gradient, icons::default_gradient());
        assert_eq!(unknown.marker, Marker::Dot);
    }

    #[test]
    fn test_rendered_markers() {
        let svg = render_skills_card(&[
            SkillEntry::new("react"),
            SkillEntry::new("Totally-Unknown-Tech"),
        ]);

        assert!(svg.contains(r#"<image href="data:image/svg+xml;base64,"#));
        assert!(svg.contains(r#"fill="url(#skill-1)"/>"#));
        assert!(svg.contains(">React</text>"));
        assert!(svg.contains(">Totally Unknown Tech</text>"));
        assert!(!svg.contains("href=\"http"));
    }

    #[test]
    fn test_greedy_wrapping() {
        // "Rust" pill: 18 + 28 + max(24, 29) = 75 wide
        let skills: Vec<SkillEntry> = (0..8).map(|_| SkillEntry::new("rust")).collect();
        let layout = skills_layout(&skills);

        let first_row: Vec<&Pill> = layout.pills.iter().filter(|p| p.y == 80).collect();
        assert_eq!(first_row.len(), 6);
        assert_eq!(layout.pills[6].x, LEFT);
        assert_eq!(layout.pills[6].y, 80 + ROW_HEIGHT);
        assert_eq!(layout.pills[1].x, LEFT + 75 + PILL_GAP);
        assert_eq!(layout.height, 80 + ROW_HEIGHT + ROW_HEIGHT + 30);
    }

    #[test]
    fn test_over_wide_pill_stays_on_first_row() {
        let long_name = "x".repeat(80);
        let layout = skills_layout(&[SkillEntry::new(long_name), SkillEntry::new("rust")]);

        let wide = &layout.pills[0];
        assert!(wide.x + wide.width > RIGHT);
        assert_eq!((wide.x, wide.y), (LEFT, 80));

        let next = &layout.pills[1];
        assert_eq!((next.x, next.y), (LEFT, 80 + ROW_HEIGHT));
        assert_eq!(layout.height, 80 + ROW_HEIGHT + ROW_HEIGHT + 30);
    }

    #[test]
    fn test_order_preserved() {
        let layout = skills_layout(&SkillEntry::parse_list("zig, ada ,go"));
        let labels: Vec<&str> = layout.pills.iter().map(|p| p.style.label.as_str()).collect();
        assert_eq!(labels, vec!["Zig", "Ada", "Go"]);
    }

    #[test]
    fn test_empty_card_height() {
        let layout = skills_layout(&[]);
        assert!(layout.pills.is_empty());
        assert_eq!(layout.height, 80 + ROW_HEIGHT + 30);
    }

    #[test]
    fn test_parse_list_drops_empties() {
        assert_eq!(
            SkillEntry::parse_list(" rust, ,go,,"),
            vec![SkillEntry::new("rust"), SkillEntry::new("go")]
        );
        assert!(SkillEntry::parse_list("").is_empty());
    }

    #[test]
    fn test_deserialize_label_or_object() {
        let entries: Vec<SkillEntry> = serde_json::from_str(
            r##"["rust", {"name": "Elm", "color": "#60b5cc"}, {"name": "zig"}]"##,
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                SkillEntry::new("rust"),
                SkillEntry::new("Elm").with_color("#60b5cc"),
                SkillEntry::new("zig"),
            ]
        );
    }

    #[test]
    fn test_color_override() {
        let style = resolve_skill(&SkillEntry::new("rust").with_color("DEA584"));
        assert_eq!(style.gradient, Gradient::solid("#dea584"));

        let style = resolve_skill(&SkillEntry::new("rust").with_color("\"/><script>"));
        assert_eq!(style.gradient, Gradient::new("#ef4444", "#8b5cf6"));
    }

    #[test]
    fn test_text_width_floor() {
        assert_eq!(text_width("Go"), 24);
        assert_eq!(text_width("TypeScript"), 72);
    }
}
