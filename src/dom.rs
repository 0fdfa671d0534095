//! Markup capability interface.
//!
//! The extraction core only needs five operations on a document: list its
//! tables, find the heading that precedes a table, list a table's rows, list a
//! row's cells and read a node's text. [`MarkupTree`] captures exactly that;
//! [`HtmlTree`] provides it over the `dom_query` crate.

pub use dom_query::{Document, NodeRef};

/// Read-only structural view of a parsed document.
///
/// All listings are in document order.
pub trait MarkupTree {
    /// Handle to one structural block (table, row, cell or heading).
    type Node<'a>: Clone
    where
        Self: 'a;

    /// All table blocks, nested ones included.
    fn tables(&self) -> Vec<Self::Node<'_>>;

    /// The nearest heading whose tag is in `heading_tags` that starts before
    /// `table` in document order.
    fn preceding_heading<'a>(
        &'a self,
        table: &Self::Node<'a>,
        heading_tags: &[String],
    ) -> Option<Self::Node<'a>>;

    /// Row blocks of a table; the first one is the header row.
    fn rows<'a>(&'a self, table: &Self::Node<'a>) -> Vec<Self::Node<'a>>;

    /// Cell blocks (`td` and `th`) of a row.
    fn cells<'a>(&'a self, row: &Self::Node<'a>) -> Vec<Self::Node<'a>>;

    /// Raw text content of a block and its descendants.
    fn text(&self, node: &Self::Node<'_>) -> String;
}

/// HTML document parsed with `dom_query`.
pub struct HtmlTree {
    doc: Document,
}

impl HtmlTree {
    /// Parse an HTML string. Parsing never fails; broken markup is repaired
    /// by the html5ever tree builder.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Document::from(html),
        }
    }
}

impl MarkupTree for HtmlTree {
    type Node<'a> = NodeRef<'a>
    where
        Self: 'a;

    fn tables(&self) -> Vec<NodeRef<'_>> {
        descendant_elements(&self.doc.root(), &["table"])
    }

    fn preceding_heading<'a>(
        &'a self,
        table: &NodeRef<'a>,
        heading_tags: &[String],
    ) -> Option<NodeRef<'a>> {
        // Pre-order walk: ancestors and earlier siblings' subtrees come first.
        let mut last_heading = None;
        for node in self.doc.root().descendants() {
            if node.id == table.id {
                return last_heading;
            }
            if node.is_element() && has_tag(&node, heading_tags) {
                last_heading = Some(node);
            }
        }
        None
    }

    fn rows<'a>(&'a self, table: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
        descendant_elements(table, &["tr"])
    }

    fn cells<'a>(&'a self, row: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
        descendant_elements(row, &["td", "th"])
    }

    fn text(&self, node: &NodeRef<'_>) -> String {
        node.text().to_string()
    }
}

/// Element descendants of `node` whose tag is one of `tags`, in document order.
fn descendant_elements<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(|n| {
            n.is_element()
                && n.node_name()
                    .is_some_and(|name| tags.iter().any(|t| name.eq_ignore_ascii_case(t)))
        })
        .collect()
}

fn has_tag<S: AsRef<str>>(node: &NodeRef<'_>, tags: &[S]) -> bool {
    node.node_name()
        .is_some_and(|name| tags.iter().any(|t| name.eq_ignore_ascii_case(t.as_ref())))
}
