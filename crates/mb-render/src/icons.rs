//! Icon name lookup.

/// Resolves icon names from documents to displayable glyphs.
///
/// Hosts with a real icon font implement this and pass it to
/// [`crate::render_with`]; unresolved names render a placeholder.
pub trait IconRegistry {
    fn glyph(&self, name: &str) -> Option<String>;
}

/// Small built-in table of common icon names, matched loosely so that
/// `arrow_forward`, `ArrowForward` and `arrow-forward` are the same icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinIcons;

const BUILTIN: &[(&str, &str)] = &[
    ("add", "+"),
    ("plus", "+"),
    ("close", "\u{2715}"),
    ("x", "\u{2715}"),
    ("check", "\u{2713}"),
    ("home", "\u{2302}"),
    ("search", "\u{2315}"),
    ("menu", "\u{2630}"),
    ("settings", "\u{2699}"),
    ("star", "\u{2605}"),
    ("favorite", "\u{2665}"),
    ("heart", "\u{2665}"),
    ("person", "\u{263A}"),
    ("user", "\u{263A}"),
    ("mail", "\u{2709}"),
    ("email", "\u{2709}"),
    ("phone", "\u{260E}"),
    ("info", "\u{2139}"),
    ("warning", "\u{26A0}"),
    ("alerttriangle", "\u{26A0}"),
    ("arrowforward", "\u{2192}"),
    ("arrowright", "\u{2192}"),
    ("arrowback", "\u{2190}"),
    ("arrowleft", "\u{2190}"),
    ("chevronright", "\u{203A}"),
    ("chevronleft", "\u{2039}"),
    ("share", "\u{21AA}"),
    ("edit", "\u{270E}"),
    ("pencil", "\u{270E}"),
    ("delete", "\u{2421}"),
    ("trash", "\u{2421}"),
    ("camera", "\u{25C9}"),
    ("image", "\u{25A3}"),
    ("calendar", "\u{25A6}"),
    ("lock", "\u{26BF}"),
    ("notifications", "\u{266A}"),
    ("bell", "\u{266A}"),
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl IconRegistry for BuiltinIcons {
    fn glyph(&self, name: &str) -> Option<String> {
        let key = normalize(name);
        BUILTIN
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, g)| (*g).to_string())
    }
}
