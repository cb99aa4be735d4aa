//! Terminal outline of a navigation tree

use termtree::Tree;

use crate::domain::entities::NavEntry;

/// Label for a single entry: `title (url) [ordered, top]`.
pub fn entry_label(entry: &NavEntry) -> String {
    let mut label = entry.title.clone();
    if !entry.url.is_empty() {
        label.push_str(&format!(" ({})", entry.url));
    }
    let mut markers = Vec::new();
    if entry.is_ordered() {
        markers.push("ordered");
    }
    if entry.is_top() {
        markers.push("top");
    }
    if !markers.is_empty() {
        label.push_str(&format!(" [{}]", markers.join(", ")));
    }
    label
}

fn entry_tree(entry: &NavEntry) -> Tree<String> {
    Tree::new(entry_label(entry)).with_leaves(entry.children().iter().map(entry_tree))
}

/// Build a displayable tree rooted at `root_label`, one branch per entry.
pub fn outline(root_label: &str, entries: Option<&[NavEntry]>) -> Tree<String> {
    Tree::new(root_label.to_string())
        .with_leaves(entries.unwrap_or_default().iter().map(entry_tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_entry_with_markers_when_labeling_then_lists_markers() {
        let entry = NavEntry::new("Intro", "/intro").with_order(1);
        assert_eq!(entry_label(&entry), "Intro (/intro) [ordered, top]");
    }

    #[test]
    fn given_child_without_url_when_labeling_then_title_only() {
        let entry = NavEntry::new("Basics", "").with_parent("Intro");
        assert_eq!(entry_label(&entry), "Basics");
    }

    #[test]
    fn given_nested_entries_when_outlining_then_displays_every_level() {
        let entries = vec![NavEntry::new("Intro", "/intro")
            .with_children(vec![NavEntry::new("Basics", "/intro/basics").with_parent("Intro")])];
        let rendered = outline("nav", Some(entries.as_slice())).to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "nav");
        assert!(lines[1].ends_with("Intro (/intro) [top]"));
        assert!(lines[2].ends_with("Basics (/intro/basics)"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn given_no_entries_when_outlining_then_root_only() {
        assert_eq!(outline("nav", None).to_string().trim_end(), "nav");
    }
}
