//! Treeviz formatter for documents
//!
//! One line per node, nesting shown with box drawing connectors, labels truncated to 30
//! characters. Handy for eyeballing how a source was split into pages and collections.
//!
//! Example:
//!
//! ⧉ Document
//! ├─ ▤ Roadmap [d/M/y]
//! │ └─ ≋ free
//! │   └─ • 2023-01-01 → 2023-01-14 Phase 1
//! └─ # Launch = blue
//!
//! Icons
//!     Document: ⧉
//!     Page: ▤
//!     Free run: ≋
//!     Group: ▣
//!     Section: §
//!     Event: •
//!     Tag: #

use crate::markwhen::ast::{Collection, CollectionKind, Document, Event, Page};

const LABEL_WIDTH: usize = 30;

struct Node {
    icon: &'static str,
    label: String,
    children: Vec<Node>,
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn event_node(event: &Event) -> Node {
    Node {
        icon: "•",
        label: format!(
            "{} → {} {}",
            event.from,
            event.to,
            truncate(&event.body, LABEL_WIDTH)
        ),
        children: Vec::new(),
    }
}

fn collection_node(collection: &Collection) -> Node {
    let (icon, keyword) = match collection.kind {
        CollectionKind::Free => ("≋", "free"),
        CollectionKind::Group => ("▣", "group"),
        CollectionKind::Section => ("§", "section"),
    };
    let mut label = format!("{} {}", keyword, truncate(&collection.title, LABEL_WIDTH))
        .trim_end()
        .to_string();
    if collection.collapsed {
        label.push_str(" (collapsed)");
    }
    Node {
        icon,
        label,
        children: collection.events.iter().map(event_node).collect(),
    }
}

fn page_node(page: &Page) -> Node {
    let title = if page.header.title.is_empty() {
        "(untitled)"
    } else {
        page.header.title.as_str()
    };
    Node {
        icon: "▤",
        label: format!(
            "{} [{}]",
            truncate(title, LABEL_WIDTH),
            page.header.date_format
        ),
        children: page.collections.iter().map(collection_node).collect(),
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!("{}{} {} {}\n", prefix, connector, node.icon, node.label));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i == child_count - 1, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut children: Vec<Node> = doc.pages.iter().map(page_node).collect();
    children.extend(doc.tags.iter().map(|(name, color)| Node {
        icon: "#",
        label: format!("{} = {}", name, color),
        children: Vec::new(),
    }));

    let mut output = String::from("⧉ Document\n");
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, "", i == child_count - 1, &mut output);
    }
    output
}
