//! Abstract document surface
//!
//! Widgets are written against [`DomNode`] so the toggling logic runs the same
//! against the browser DOM (benchboard-app) and the in-memory fake used by
//! the tests. A node is a cheap handle; cloning it never copies the element.

/// Whether a click handler suppresses the element's default browsing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDefault {
    Prevent,
    Allow,
}

/// Click handler registered on a node
pub type ClickHandler = Box<dyn FnMut()>;

pub trait DomNode: Clone + 'static {
    /// Descendants matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Vec<Self>;

    /// First descendant matching a CSS selector
    fn query(&self, selector: &str) -> Option<Self> {
        self.query_all(selector).into_iter().next()
    }

    /// Element with the given id, searched from this node down
    fn by_id(&self, id: &str) -> Option<Self>;

    fn id(&self) -> String;

    /// Value of the `data-<key>` attribute
    fn data(&self, key: &str) -> Option<String>;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Replace the node's children with plain text
    fn set_text(&self, text: &str);

    /// Replace the node's children with a single heading holding `text`
    fn set_heading(&self, text: &str);

    fn on_click(&self, default: ClickDefault, handler: ClickHandler);
}

pub fn set_hidden<N: DomNode>(node: &N, hidden_class: &str, hidden: bool) {
    if hidden {
        node.add_class(hidden_class);
    } else {
        node.remove_class(hidden_class);
    }
}

pub fn set_classes<N: DomNode>(node: &N, classes: &[String], on: bool) {
    for class in classes {
        if on {
            node.add_class(class);
        } else {
            node.remove_class(class);
        }
    }
}
