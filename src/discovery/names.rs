//! Output name derivation for discovered nodes.

use std::collections::HashMap;

/// Characters that cannot appear in filenames on common platforms.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Turn a node name into a filesystem-safe base name.
///
/// Trims the name, turns path separators into `-`, drops characters that are
/// illegal in filenames and collapses each whitespace run into a single `-`.
/// Falls back to `slice-<id>` (colons replaced) when nothing is left.
pub fn sanitize_name(raw: &str, id: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();

    let mut name = String::with_capacity(cleaned.len());
    let mut in_whitespace = false;
    for c in cleaned.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }

    if name.is_empty() {
        format!("slice-{}", id.replace(':', "-"))
    } else {
        name
    }
}

/// Hands out collision-free names in the order they are requested.
///
/// The first request for a base name returns it unchanged; the Nth request
/// returns `<base>-N`.
#[derive(Debug, Default)]
pub struct NameRegistry {
    seen: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, base: &str) -> String {
        let count = self.seen.entry(base.to_string()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base.to_string()
        } else {
            format!("{}-{}", base, count)
        }
    }
}
