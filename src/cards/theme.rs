//! Shared card styling
//!
//! Palette, font stack and the SVG fragments every card repeats: background,
//! header and gradient definitions.

/// Font stack for all card text
pub const FONT_STACK: &str =
    "Inter, system-ui, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, Noto Sans, sans-serif";

pub const TEXT_PRIMARY: &str = "#e5e7eb";
pub const TEXT_MUTED: &str = "#9ca3af";
pub const TEXT_FAINT: &str = "#6b7280";
pub const TEXT_BRIGHT: &str = "#f9fafb";
pub const TRACK_FILL: &str = "#111827";
pub const TRACK_STROKE: &str = "#1f2937";

/// Two-stop color gradient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

impl Gradient {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Flat gradient with the same color on both stops
    pub fn solid(color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            from: color.clone(),
            to: color,
        }
    }
}

/// Card background gradient
pub fn background() -> Gradient {
    Gradient::new("#0f172a", "#0b1324")
}

/// Accent used for headers and the commits ring
pub fn accent() -> Gradient {
    Gradient::new("#22d3ee", "#3b82f6")
}

/// Horizontal (`diagonal = false`) or top-left to bottom-right gradient definition
pub fn linear_gradient(id: &str, gradient: &Gradient, diagonal: bool) -> String {
    let (x2, y2) = if diagonal { (1, 1) } else { (1, 0) };
    format!(
        r##"
    <linearGradient id="{id}" x1="0" y1="0" x2="{x2}" y2="{y2}">
      <stop offset="0%" stop-color="{from}"/>
      <stop offset="100%" stop-color="{to}"/>
    </linearGradient>"##,
        id = id,
        x2 = x2,
        y2 = y2,
        from = escape_xml(&gradient.from),
        to = escape_xml(&gradient.to),
    )
}

/// Opening `<svg>` tag with explicit size and viewBox
pub fn svg_open(width: u32, height: u32, label: &str) -> String {
    format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{label}">"#,
        w = width,
        h = height,
        label = escape_xml(label),
    )
}

/// Rounded full-size background rect
pub fn background_rect(gradient_id: &str) -> String {
    format!(
        r#"
  <rect width="100%" height="100%" fill="url(#{})" rx="16"/>"#,
        gradient_id
    )
}

/// Title with accent dot and underline
pub fn header(x: u32, y: u32, title: &str, underline_width: u32, accent_id: &str) -> String {
    format!(
        r#"
  <g transform="translate({x}, {y})">
    <circle cx="8" cy="-2" r="4" fill="url(#{accent})"/>
    <text x="20" y="0" fill="{fill}" font-family="{font}" font-size="20" font-weight="700">{title}</text>
    <rect x="0" y="18" width="{uw}" height="3" fill="url(#{accent})" rx="2"/>
  </g>"#,
        x = x,
        y = y,
        accent = accent_id,
        fill = TEXT_PRIMARY,
        font = FONT_STACK,
        title = escape_xml(title),
        uw = underline_width,
    )
}

/// Right-aligned footer hint
pub fn footer(right: u32, y: u32, text: &str) -> String {
    format!(
        r#"
  <g transform="translate({right}, {y})">
    <text text-anchor="end" fill="{fill}" font-family="{font}" font-size="11">{text}</text>
  </g>"#,
        right = right,
        y = y,
        fill = TEXT_FAINT,
        font = FONT_STACK,
        text = escape_xml(text),
    )
}

/// Escape text for use in SVG element content and attribute values
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
