//! In-memory document and chart backend for widget tests
//!
//! Supports the selector shapes the page markers use: `.class`, `#id`,
//! `[id^='prefix']` and bare tag names.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::charts::{ChartBackend, ChartHandle, RenderError, RenderRequest};
use crate::dom::{ClickDefault, ClickHandler, DomNode};

#[derive(Default)]
struct NodeData {
    tag: String,
    id: RefCell<String>,
    classes: RefCell<Vec<String>>,
    data: RefCell<HashMap<String, String>>,
    text: RefCell<String>,
    heading: RefCell<Option<String>>,
    children: RefCell<Vec<FakeNode>>,
    handlers: RefCell<Vec<(ClickDefault, ClickHandler)>>,
}

#[derive(Clone)]
pub struct FakeNode(Rc<NodeData>);

impl FakeNode {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        }))
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn with_id(self, id: &str) -> Self {
        *self.0.id.borrow_mut() = id.to_string();
        self
    }

    /// Space-separated class list
    pub fn with_class(self, classes: &str) -> Self {
        self.0
            .classes
            .borrow_mut()
            .extend(classes.split_whitespace().map(String::from));
        self
    }

    pub fn with_data(self, key: &str, value: &str) -> Self {
        self.0
            .data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_child(self, child: FakeNode) -> Self {
        self.0.children.borrow_mut().push(child);
        self
    }

    pub fn with_children(self, children: impl IntoIterator<Item = FakeNode>) -> Self {
        self.0.children.borrow_mut().extend(children);
        self
    }

    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub fn heading(&self) -> Option<String> {
        self.0.heading.borrow().clone()
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class("hidden")
    }

    pub fn handler_count(&self) -> usize {
        self.0.handlers.borrow().len()
    }

    /// Handlers registered on this node and every descendant
    pub fn total_handlers(&self) -> usize {
        self.handler_count()
            + self
                .0
                .children
                .borrow()
                .iter()
                .map(FakeNode::total_handlers)
                .sum::<usize>()
    }

    /// Fire a click. Returns true when a handler suppressed the default action.
    pub fn click(&self) -> bool {
        let mut handlers = std::mem::take(&mut *self.0.handlers.borrow_mut());
        let mut prevented = false;
        for (default, handler) in handlers.iter_mut() {
            prevented |= *default == ClickDefault::Prevent;
            handler();
        }
        let mut slot = self.0.handlers.borrow_mut();
        handlers.append(&mut slot);
        *slot = handlers;
        prevented
    }

    pub fn same_node(&self, other: &FakeNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else if let Some(id) = selector.strip_prefix('#') {
            *self.0.id.borrow() == id
        } else if let Some(rest) = selector.strip_prefix("[id^=") {
            let prefix = rest.trim_end_matches(']').trim_matches(|c| c == '\'' || c == '"');
            self.0.id.borrow().starts_with(prefix)
        } else {
            self.0.tag == selector
        }
    }

    fn collect(&self, selector: &str, out: &mut Vec<FakeNode>) {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }
}

impl DomNode for FakeNode {
    fn query_all(&self, selector: &str) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect(selector, &mut out);
        out
    }

    fn by_id(&self, id: &str) -> Option<Self> {
        self.query(&format!("#{id}"))
    }

    fn id(&self) -> String {
        self.0.id.borrow().clone()
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.data.borrow().get(key).cloned()
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.0.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_string();
    }

    fn set_heading(&self, text: &str) {
        *self.0.heading.borrow_mut() = Some(text.to_string());
    }

    fn on_click(&self, default: ClickDefault, handler: ClickHandler) {
        self.0.handlers.borrow_mut().push((default, handler));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chart backend
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct BackendLog {
    /// (container id, request) per successful render, in order
    pub rendered: Vec<(String, RenderRequest)>,
    /// Render serials of destroyed charts
    pub destroyed: Vec<usize>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    pub log: Rc<RefCell<BackendLog>>,
    fail: Rc<Cell<bool>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let backend = Self::default();
        backend.set_failing(true);
        backend
    }

    /// Applies to every clone of this backend.
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn render_count(&self) -> usize {
        self.log.borrow().rendered.len()
    }

    pub fn destroyed(&self) -> Vec<usize> {
        self.log.borrow().destroyed.clone()
    }

    pub fn last_request(&self) -> Option<RenderRequest> {
        self.log.borrow().rendered.last().map(|(_, r)| r.clone())
    }
}

pub struct FakeChart {
    pub serial: usize,
    log: Rc<RefCell<BackendLog>>,
}

impl ChartHandle for FakeChart {
    fn destroy(&mut self) {
        self.log.borrow_mut().destroyed.push(self.serial);
    }
}

impl ChartBackend<FakeNode> for FakeBackend {
    type Handle = FakeChart;

    fn render(&self, container: &FakeNode, request: RenderRequest) -> Result<FakeChart, RenderError> {
        if self.fail.get() {
            return Err(RenderError::Construct {
                reason: "canvas unavailable".to_string(),
            });
        }
        let mut log = self.log.borrow_mut();
        let serial = log.rendered.len();
        log.rendered.push((container.id(), request));
        Ok(FakeChart {
            serial,
            log: Rc::clone(&self.log),
        })
    }
}
