//! Domain entities: navigation tree data structures

use serde::{Deserialize, Deserializer, Serialize};

/// Loosely typed flag value as it appears in site data files.
///
/// Navigation data is produced by an upstream site generator, so `order` and
/// `parent` arrive as whatever scalar that generator emitted (a sort index,
/// a parent key, a boolean, a whole parent record). Only whether the value
/// counts as set matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Marker {
    Flag(bool),
    Number(f64),
    Text(String),
    /// Sequence or mapping, kept as-is
    Compound(serde_json::Value),
}

impl Marker {
    /// Whether the marker counts as present.
    ///
    /// `false`, `0`, `NaN` and `""` are unset; everything else is set,
    /// including empty sequences and mappings.
    pub fn is_set(&self) -> bool {
        match self {
            Marker::Flag(flag) => *flag,
            Marker::Number(n) => *n != 0.0 && !n.is_nan(),
            Marker::Text(s) => !s.is_empty(),
            Marker::Compound(_) => true,
        }
    }
}

impl From<bool> for Marker {
    fn from(value: bool) -> Self {
        Marker::Flag(value)
    }
}

impl From<i32> for Marker {
    fn from(value: i32) -> Self {
        Marker::Number(value.into())
    }
}

impl From<i64> for Marker {
    fn from(value: i64) -> Self {
        Marker::Number(value as f64)
    }
}

impl From<&str> for Marker {
    fn from(value: &str) -> Self {
        Marker::Text(value.to_string())
    }
}

/// Scalar as written in a data file, before it is turned into label text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

/// Accept any scalar for `title`/`url`; `null` reads as empty text.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Bool(b)) => b.to_string(),
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::UInt(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Text(s)) => s,
    };
    Ok(text)
}

/// One node of the navigation tree.
///
/// Missing `title`/`url` deserialize to empty strings and render as empty
/// text; numbers and booleans are taken as their textual form. Children are
/// owned, so a deserialized tree cannot contain cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavEntry {
    /// Display text of the label
    #[serde(deserialize_with = "scalar_text")]
    pub title: String,
    /// Target handed to the client-side click handler (never an href)
    #[serde(deserialize_with = "scalar_text")]
    pub url: String,
    /// Set when the entry belongs to an explicitly ordered sibling set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Marker>,
    /// Back-reference to the parent entry; unset means top-level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavEntry>>,
}

impl NavEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_order(mut self, order: impl Into<Marker>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<Marker>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_children(mut self, children: Vec<NavEntry>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn is_ordered(&self) -> bool {
        self.order.as_ref().is_some_and(Marker::is_set)
    }

    pub fn is_top(&self) -> bool {
        !self.parent.as_ref().is_some_and(Marker::is_set)
    }

    /// True only for a present, non-empty children sequence.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn children(&self) -> &[NavEntry] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Collections exposed to the page, mirroring the site generator's data cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavEntry>>,
}

/// Data context handed to the page renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavContext {
    pub collections: Collections,
}

impl NavContext {
    pub fn from_entries(entries: Vec<NavEntry>) -> Self {
        Self {
            collections: Collections { nav: Some(entries) },
        }
    }

    pub fn nav(&self) -> Option<&[NavEntry]> {
        self.collections.nav.as_deref()
    }

    /// Total number of entries in the tree, all levels.
    pub fn entry_count(&self) -> usize {
        fn count(entries: &[NavEntry]) -> usize {
            entries.iter().map(|e| 1 + count(e.children())).sum()
        }
        self.nav().map(count).unwrap_or(0)
    }
}

/// Expand shell variables and tilde in a path-like string.
///
/// Returns the input unchanged if expansion fails (undefined variable).
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_falsy_markers_when_checking_then_unset() {
        assert!(!Marker::Flag(false).is_set());
        assert!(!Marker::Number(0.0).is_set());
        assert!(!Marker::Number(f64::NAN).is_set());
        assert!(!Marker::Text(String::new()).is_set());
    }

    #[test]
    fn given_truthy_markers_when_checking_then_set() {
        assert!(Marker::Flag(true).is_set());
        assert!(Marker::Number(3.0).is_set());
        assert!(Marker::Number(-1.0).is_set());
        assert!(Marker::Text("intro".into()).is_set());
    }

    #[test]
    fn given_entry_without_parent_when_checking_then_is_top() {
        let entry = NavEntry::new("Intro", "/intro");
        assert!(entry.is_top());
        assert!(!entry.with_parent("Home").is_top());
    }

    #[test]
    fn given_empty_parent_marker_when_checking_then_is_top() {
        let entry = NavEntry::new("Intro", "/intro").with_parent("");
        assert!(entry.is_top());
    }

    #[test]
    fn given_empty_children_when_checking_then_has_no_children() {
        let entry = NavEntry::new("Intro", "/intro").with_children(vec![]);
        assert!(!entry.has_children());
        assert!(entry.children().is_empty());
    }

    #[test]
    fn given_json_with_mixed_marker_types_when_deserializing_then_parses() {
        let json = r#"[
            {"title": "A", "url": "/a", "order": 1},
            {"title": "B", "url": "/b", "order": true, "parent": "A"},
            {"title": "C", "url": "/c", "order": null, "parent": null}
        ]"#;
        let entries: Vec<NavEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries[0].order, Some(Marker::Number(1.0)));
        assert_eq!(entries[1].order, Some(Marker::Flag(true)));
        assert_eq!(entries[1].parent, Some(Marker::Text("A".into())));
        assert_eq!(entries[2].order, None);
        assert!(entries[2].is_top());
    }

    #[test]
    fn given_entry_missing_title_and_url_when_deserializing_then_defaults_to_empty() {
        let entry: NavEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry.title, "");
        assert_eq!(entry.url, "");
        assert!(entry.children.is_none());
    }

    #[test]
    fn given_nested_tree_when_counting_then_counts_all_levels() {
        let ctx = NavContext::from_entries(vec![
            NavEntry::new("A", "/a").with_children(vec![
                NavEntry::new("A1", "/a/1").with_parent("A"),
                NavEntry::new("A2", "/a/2")
                    .with_parent("A")
                    .with_children(vec![NavEntry::new("A2x", "/a/2/x").with_parent("A2")]),
            ]),
            NavEntry::new("B", "/b"),
        ]);
        assert_eq!(ctx.entry_count(), 5);
        assert_eq!(NavContext::default().entry_count(), 0);
    }

    #[test]
    fn given_compound_markers_when_deserializing_then_counts_as_set() {
        let json = r#"[
            {"title": "A", "url": "/a", "parent": {"key": "root"}},
            {"title": "B", "url": "/b", "order": []}
        ]"#;
        let entries: Vec<NavEntry> = serde_json::from_str(json).unwrap();

        assert!(matches!(entries[0].parent, Some(Marker::Compound(_))));
        assert!(!entries[0].is_top());
        assert!(entries[1].is_ordered());
    }

    #[test]
    fn given_non_string_title_and_url_when_deserializing_then_uses_text_form() {
        let yaml = "- title: 2024\n  url: 7\n- title: true\n  url: null\n- title: 1.5\n  url: /c\n";
        let entries: Vec<NavEntry> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(entries[0].title, "2024");
        assert_eq!(entries[0].url, "7");
        assert_eq!(entries[1].title, "true");
        assert_eq!(entries[1].url, "");
        assert_eq!(entries[2].title, "1.5");
    }
}
