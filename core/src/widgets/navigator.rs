//! Panel navigator
//!
//! Navigation links reveal one section among the siblings sharing an id
//! prefix. Initial visibility is whatever the markup sets.

use std::cell::RefCell;
use std::rc::Rc;

use benchboard_types::NavMarkers;

use crate::dom::{self, ClickDefault, DomNode};

/// Which section is visible, over a fixed set of section ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelNavigator {
    section_ids: Vec<String>,
    visible: Option<String>,
}

impl PanelNavigator {
    pub fn new(section_ids: Vec<String>) -> Self {
        Self {
            section_ids,
            visible: None,
        }
    }

    /// Section id a link key points at
    pub fn target_id(prefix: &str, key: &str) -> String {
        format!("{prefix}-{key}")
    }

    /// Last section selected through a link, if it exists
    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    /// Make `target` the only visible section.
    ///
    /// Returns the visibility of every section. A target that names no
    /// section hides them all.
    pub fn select(&mut self, target: &str) -> Vec<(String, bool)> {
        self.visible = self
            .section_ids
            .iter()
            .find(|id| *id == target)
            .cloned();
        self.section_ids
            .iter()
            .map(|id| (id.clone(), id == target))
            .collect()
    }
}

/// Wire every navigation link. Returns the number of links wired.
pub fn init_navigator<N: DomNode>(document: &N, markers: &NavMarkers, hidden_class: &str) -> usize {
    let Some(nav) = document.by_id(&markers.nav_id) else {
        tracing::debug!(nav_id = %markers.nav_id, "No page navigation");
        return 0;
    };

    let sections = document.query_all(&format!("[id^='{}']", markers.section_prefix));
    let navigator = Rc::new(RefCell::new(PanelNavigator::new(
        sections.iter().map(|s| s.id()).collect(),
    )));
    let sections = Rc::new(sections);

    let mut wired = 0;
    for link in nav.query_all(&markers.link_selector) {
        let Some(key) = link.data(&markers.key_attr) else {
            continue;
        };
        let target = PanelNavigator::target_id(&markers.section_prefix, &key);
        let navigator = Rc::clone(&navigator);
        let sections = Rc::clone(&sections);
        let hidden_class = hidden_class.to_string();

        link.on_click(
            ClickDefault::Prevent,
            Box::new(move || {
                let visibility = navigator.borrow_mut().select(&target);
                for (section, (_, visible)) in sections.iter().zip(visibility) {
                    dom::set_hidden(section, &hidden_class, !visible);
                }
            }),
        );
        wired += 1;
    }

    tracing::debug!(links = wired, sections = sections.len(), "Page navigation wired");
    wired
}
