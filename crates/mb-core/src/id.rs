use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for widget IDs.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Interned widget identifier: the selection key and the list key for a node.
/// Internally a `Spur` index: 4 bytes, `Copy`, O(1) hash and compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(Spur);

impl WidgetId {
    /// Intern a string as a WidgetId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        WidgetId(INTERNER.get_or_intern(s))
    }

    /// Look up an already-interned id without growing the interner.
    /// Used when an id arrives from outside (a click, a JS call) and may
    /// name nothing in the current tree.
    pub fn lookup(s: &str) -> Option<Self> {
        INTERNER.get(s).map(WidgetId)
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Last `n` characters of the id, shown as a faint hint in the outline.
    pub fn tail(&self, n: usize) -> &str {
        let s = self.as_str();
        let skip = s.chars().count().saturating_sub(n);
        match s.char_indices().nth(skip) {
            Some((pos, _)) => &s[pos..],
            None => s,
        }
    }
}

impl fmt::Debug for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WidgetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WidgetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(WidgetId::intern(&s))
    }
}
