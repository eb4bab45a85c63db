//! Skill lookup tables
//!
//! Normalized skill key → gradient, display name and bundled icon. The
//! tables are plain data; supporting a new technology means adding rows.
//! Icons are embedded as base64 `data:` URIs so cards never reference a
//! remote resource.

use super::theme::Gradient;
use base64::Engine;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Gradient for skills missing from the color table
pub fn default_gradient() -> Gradient {
    Gradient::new("#8b5cf6", "#22d3ee")
}

const SKILL_COLORS: &[(&str, &str, &str)] = &[
    ("react", "#61dafb", "#3b82f6"),
    ("reactjs", "#61dafb", "#3b82f6"),
    ("node", "#10b981", "#22d3ee"),
    ("nodejs", "#10b981", "#22d3ee"),
    ("typescript", "#3178c6", "#3b82f6"),
    ("javascript", "#f59e0b", "#ef4444"),
    ("python", "#22d3ee", "#3b82f6"),
    ("go", "#22d3ee", "#10b981"),
    ("golang", "#22d3ee", "#10b981"),
    ("rust", "#ef4444", "#8b5cf6"),
    ("html", "#f59e0b", "#ef4444"),
    ("css", "#3b82f6", "#22d3ee"),
    ("vue", "#10b981", "#22d3ee"),
    ("angular", "#ef4444", "#8b5cf6"),
    ("svelte", "#ef4444", "#f59e0b"),
    ("docker", "#3b82f6", "#22d3ee"),
    ("graphql", "#e10098", "#8b5cf6"),
    ("mongodb", "#10b981", "#22d3ee"),
    ("postgresql", "#3b82f6", "#22d3ee"),
    ("postgres", "#3b82f6", "#22d3ee"),
    ("redis", "#ef4444", "#f59e0b"),
    ("aws", "#f59e0b", "#ef4444"),
    ("azure", "#3b82f6", "#22d3ee"),
    ("gcp", "#3b82f6", "#10b981"),
    ("tailwind", "#22d3ee", "#3b82f6"),
    ("tailwindcss", "#22d3ee", "#3b82f6"),
];

const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("react", "React"),
    ("reactjs", "React"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    ("typescript", "TypeScript"),
    ("javascript", "JavaScript"),
    ("python", "Python"),
    ("go", "Go"),
    ("golang", "Go"),
    ("rust", "Rust"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("svelte", "Svelte"),
    ("docker", "Docker"),
    ("graphql", "GraphQL"),
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("redis", "Redis"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "GCP"),
    ("tailwind", "Tailwind CSS"),
    ("tailwindcss", "Tailwind CSS"),
];

// 24x24 glyphs, kept deliberately simple so they stay legible at 18px
const REACT_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><g fill="none" stroke="#61dafb" stroke-width="1.4"><ellipse cx="12" cy="12" rx="10" ry="4"/><ellipse cx="12" cy="12" rx="10" ry="4" transform="rotate(60 12 12)"/><ellipse cx="12" cy="12" rx="10" ry="4" transform="rotate(120 12 12)"/></g><circle cx="12" cy="12" r="2" fill="#61dafb"/></svg>"##;
const NODE_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2 21 7v10l-9 5-9-5V7z" fill="#10b981"/><text x="12" y="15.5" font-size="8" font-family="sans-serif" font-weight="700" fill="#0b1324" text-anchor="middle">JS</text></svg>"##;
const TYPESCRIPT_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect width="24" height="24" rx="4" fill="#3178c6"/><text x="13" y="18" font-size="10" font-family="sans-serif" font-weight="700" fill="#fff" text-anchor="middle">TS</text></svg>"##;
const JAVASCRIPT_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect width="24" height="24" rx="4" fill="#f7df1e"/><text x="13" y="18" font-size="10" font-family="sans-serif" font-weight="700" fill="#111" text-anchor="middle">JS</text></svg>"##;
const PYTHON_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2c-4 0-5 1.5-5 3.5V8h5v1H5c-2 0-3 1.5-3 4s1 4 3 4h2v-3c0-2 1.5-3 3.5-3h4c1.5 0 2.5-1 2.5-2.5v-3C17 3.5 15.5 2 12 2z" fill="#3776ab"/><path d="M12 22c4 0 5-1.5 5-3.5V16h-5v-1h7c2 0 3-1.5 3-4s-1-4-3-4h-2v3c0 2-1.5 3-3.5 3h-4C8 13 7 14 7 15.5v3C7 20.5 8.5 22 12 22z" fill="#ffd43b"/></svg>"##;
const GO_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect width="24" height="24" rx="4" fill="#00add8"/><text x="12" y="17" font-size="10" font-family="sans-serif" font-weight="700" font-style="italic" fill="#fff" text-anchor="middle">GO</text></svg>"##;
const RUST_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" fill="none" stroke="#dea584" stroke-width="2.5" stroke-dasharray="3 1.5"/><text x="12" y="16" font-size="11" font-family="serif" font-weight="700" fill="#dea584" text-anchor="middle">R</text></svg>"##;
const DOCKER_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><g fill="#2496ed"><rect x="3" y="10" width="3" height="3"/><rect x="7" y="10" width="3" height="3"/><rect x="11" y="10" width="3" height="3"/><rect x="7" y="6" width="3" height="3"/><rect x="11" y="6" width="3" height="3"/><path d="M2 14h18c1 0 2-1 2-2 0 5-4 8-10 8-6 0-9-2-10-6z"/></g></svg>"##;
const GRAPHQL_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><g fill="none" stroke="#e10098" stroke-width="1.5"><path d="M12 2 21 7v10l-9 5-9-5V7z"/><path d="M12 2 3 17h18z"/></g><g fill="#e10098"><circle cx="12" cy="2.5" r="1.8"/><circle cx="3" cy="7" r="1.8"/><circle cx="21" cy="7" r="1.8"/><circle cx="3" cy="17" r="1.8"/><circle cx="21" cy="17" r="1.8"/><circle cx="12" cy="21.5" r="1.8"/></g></svg>"##;
const HTML_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M3 2h18l-1.6 18L12 22l-7.4-2z" fill="#e34f26"/><text x="12" y="15" font-size="7" font-family="sans-serif" font-weight="700" fill="#fff" text-anchor="middle">5</text></svg>"##;
const CSS_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M3 2h18l-1.6 18L12 22l-7.4-2z" fill="#1572b6"/><text x="12" y="15" font-size="7" font-family="sans-serif" font-weight="700" fill="#fff" text-anchor="middle">3</text></svg>"##;

const SKILL_ICONS: &[(&str, &str)] = &[
    ("react", REACT_ICON),
    ("reactjs", REACT_ICON),
    ("node", NODE_ICON),
    ("nodejs", NODE_ICON),
    ("typescript", TYPESCRIPT_ICON),
    ("javascript", JAVASCRIPT_ICON),
    ("python", PYTHON_ICON),
    ("go", GO_ICON),
    ("golang", GO_ICON),
    ("rust", RUST_ICON),
    ("docker", DOCKER_ICON),
    ("graphql", GRAPHQL_ICON),
    ("html", HTML_ICON),
    ("css", CSS_ICON),
];

lazy_static! {
    static ref COLOR_TABLE: HashMap<&'static str, Gradient> = SKILL_COLORS
        .iter()
        .map(|(key, from, to)| (*key, Gradient::new(*from, *to)))
        .collect();

    static ref DISPLAY_TABLE: HashMap<&'static str, &'static str> =
        DISPLAY_NAMES.iter().copied().collect();

    /// Icons pre-encoded once as data URIs
    static ref ICON_TABLE: HashMap<&'static str, String> = SKILL_ICONS
        .iter()
        .map(|(key, svg)| (*key, svg_data_uri(svg)))
        .collect();
}

/// Lookup key for a skill label: lowercase ASCII alphanumerics only
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Gradient for a normalized key, if known
pub fn gradient_for(key: &str) -> Option<Gradient> {
    COLOR_TABLE.get(key).cloned()
}

/// Display name for a normalized key, if known
pub fn display_name_for(key: &str) -> Option<&'static str> {
    DISPLAY_TABLE.get(key).copied()
}

/// Embedded icon data URI for a normalized key, if one is bundled
pub fn icon_for(key: &str) -> Option<&'static str> {
    ICON_TABLE.get(key).map(String::as_str)
}

/// Capitalize each alphanumeric word of a raw label and join with spaces
///
/// `"Totally-Unknown-Tech"` becomes `"Totally Unknown Tech"`.
pub fn naive_display_name(raw: &str) -> String {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn svg_data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg.as_bytes())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Node.js"), "nodejs");
        assert_eq!(normalize_key("  React JS "), "reactjs");
        assert_eq!(normalize_key("Totally-Unknown-Tech"), "totallyunknowntech");
    }

    #[test]
    fn test_known_lookups() {
        assert_eq!(
            gradient_for("react"),
            Some(Gradient::new("#61dafb", "#3b82f6"))
        );
        assert_eq!(display_name_for("nodejs"), Some("Node.js"));
        assert!(icon_for("rust")
            .unwrap()
            .starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_unknown_lookups() {
        assert!(gradient_for("cobol").is_none());
        assert!(display_name_for("cobol").is_none());
        assert!(icon_for("cobol").is_none());
    }

    #[test]
    fn test_every_table_key_is_normalized() {
        for (key, _, _) in SKILL_COLORS {
            assert_eq!(normalize_key(key), *key);
            assert!(display_name_for(key).is_some(), "missing display name: {key}");
        }
        for (key, _) in SKILL_ICONS {
            assert!(gradient_for(key).is_some(), "icon without colors: {key}");
        }
    }

    #[test]
    fn test_naive_display_name() {
        assert_eq!(naive_display_name("Totally-Unknown-Tech"), "Totally Unknown Tech");
        assert_eq!(naive_display_name("my_cool  lib"), "My Cool Lib");
        assert_eq!(naive_display_name("--"), "");
    }

    #[test]
    fn test_icon_decodes_back_to_svg() {
        let uri = icon_for("react").unwrap();
        let encoded = uri.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, REACT_ICON.as_bytes());
    }
}
