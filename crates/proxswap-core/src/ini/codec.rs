//! Text codec for parsing and rendering the proxswap profile file.
//!
//! Line grammar:
//! ```text
//! [section name]          header: switches the current section
//! key=value               setting: split on the FIRST '=' only
//! ; comment               everything after the first ';' is discarded
//! ```
//! Blank lines are ignored anywhere. Lines that fit none of the above are
//! skipped silently; the parser never fails on malformed content.

use indexmap::IndexMap;

use crate::ini::document::SettingMap;

/// Characters stripped from both ends of a section header to obtain the name.
const SECTION_TRIM: &[char] = &['[', ']', ' ', '\t', '\n', '\r'];

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parses `text` and merges every setting it contains into `sections`.
///
/// One linear pass with a single piece of state: the current section name,
/// which starts as the empty string (the implicit default section) and is
/// replaced by each `[header]` line encountered.
///
/// A setting is inserted only if its key is not already present in the
/// current section, so the first occurrence of a key wins, both within the
/// parsed text and against anything already in `sections`. A section entry
/// is created when its first setting is inserted; a header with no settings
/// after it leaves no trace.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use proxswap_core::ini::codec::parse_into;
///
/// let mut sections = IndexMap::new();
/// parse_into(&mut sections, "[office]\nhost=proxy.example ; corp gateway\nport=8080\n");
/// assert_eq!(sections["office"]["host"], "proxy.example");
/// assert_eq!(sections["office"]["port"], "8080");
/// ```
pub fn parse_into(sections: &mut IndexMap<String, SettingMap>, text: &str) {
    let mut current_section = String::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        // Split out the comment part; only the content before the first ';'
        // is interpreted.
        let content = match line.find(';') {
            Some(idx) => &line[..idx],
            None => line,
        };
        if content.is_empty() {
            // Comment-only line.
            continue;
        }

        if content.starts_with('[') {
            // A header line never also carries a setting.
            current_section = content.trim_matches(SECTION_TRIM).to_string();
            continue;
        }

        // Only the first '=' delimits; later ones belong to the value.
        let Some((name, value)) = content.split_once('=') else {
            continue;
        };
        let name = name.trim();

        let section = sections.entry(current_section.clone()).or_default();
        if section.contains_key(name) {
            // Already specified higher up.
            continue;
        }
        section.insert(name.to_string(), value.trim().to_string());
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Renders `sections` back into profile-file text.
///
/// Every section emits its header, its settings in insertion order, and one
/// blank separator line. That includes the default section, which gets an
/// empty `[]` header, and sections with zero settings. Values are written
/// verbatim: a value containing `;`, `=`, `[` or `]` is not escaped and is
/// not guaranteed to survive a parse.
pub fn render(sections: &IndexMap<String, SettingMap>) -> String {
    let mut out = String::new();
    for (name, settings) in sections {
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        for (key, value) in settings {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
