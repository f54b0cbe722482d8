//! Browser DOM adapter
//!
//! Implements the widget surface over `web_sys::Element`. Click closures are
//! leaked on purpose: handlers live as long as the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use benchboard_core::{ClickDefault, ClickHandler, DomNode};

#[derive(Clone, Debug)]
pub struct WebNode(web_sys::Element);

impl WebNode {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl DomNode for WebNode {
    fn query_all(&self, selector: &str) -> Vec<Self> {
        let list = match self.0.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(selector, error = ?e, "Invalid selector");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebNode)
            .collect()
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(WebNode)
    }

    fn by_id(&self, id: &str) -> Option<Self> {
        let found = self.0.owner_document()?.get_element_by_id(id)?;
        self.0.contains(Some(&found)).then_some(WebNode(found))
    }

    fn id(&self) -> String {
        self.0.id()
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.get_attribute(&format!("data-{key}"))
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_heading(&self, text: &str) {
        let Some(document) = self.0.owner_document() else {
            return;
        };
        let Ok(heading) = document.create_element("h1") else {
            return;
        };
        heading.set_class_name("text-lg font-bold");
        heading.set_text_content(Some(text));
        self.0.set_text_content(None);
        let _ = self.0.append_child(&heading);
    }

    fn on_click(&self, default: ClickDefault, handler: ClickHandler) {
        let mut handler = handler;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if default == ClickDefault::Prevent {
                event.prevent_default();
            }
            handler();
        });
        if let Err(e) = self
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(id = %self.0.id(), error = ?e, "Failed to attach click handler");
        }
        closure.forget();
    }
}
