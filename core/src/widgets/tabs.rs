//! Tab group controller
//!
//! Each group holds (tab, body) pairs of which exactly one is active. Pairs
//! are formed by position, or by a shared `data-*` key when every tab carries
//! one. A group whose pairs cannot be formed is left untouched.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use benchboard_types::TabMarkers;

use crate::dom::{self, ClickDefault, DomNode};

/// Reasons a tab group is left uninitialized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabSetupError {
    #[error("number of tabs ({tabs}) is different from number of bodies ({bodies})")]
    CountMismatch { tabs: usize, bodies: usize },

    #[error("no tab body with key '{key}'")]
    UnmatchedKey { key: String },
}

/// How tabs were paired with bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    Position,
    Key,
}

/// Which pair is active. `select` never leaves the group without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabGroupState {
    active: usize,
    len: usize,
}

impl TabGroupState {
    /// First pair active. Empty groups have no state.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { active: 0, len })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Activate `index`; out-of-range indices leave the state unchanged.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self {
                active: index,
                ..self
            }
        } else {
            self
        }
    }

    /// (index, active) for every pair
    pub fn activation(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, i == self.active))
    }
}

#[derive(Debug, Clone)]
pub struct TabPair<N> {
    pub tab: N,
    pub body: N,
}

/// Pair tabs with bodies.
///
/// Returns the pairing mode, the pairs in tab order, and the bodies no tab
/// refers to (only possible with key pairing).
pub fn pair_tabs<N: DomNode>(
    tabs: &[N],
    bodies: &[N],
    key_attr: &str,
) -> Result<(Pairing, Vec<TabPair<N>>, Vec<N>), TabSetupError> {
    let keys: Option<Vec<String>> = tabs.iter().map(|tab| tab.data(key_attr)).collect();

    match keys {
        Some(keys) if !keys.is_empty() => {
            let body_keys: Vec<Option<String>> = bodies.iter().map(|b| b.data(key_attr)).collect();
            let mut used = vec![false; bodies.len()];
            let mut pairs = Vec::with_capacity(tabs.len());

            for (tab, key) in tabs.iter().zip(keys) {
                let Some(index) = body_keys
                    .iter()
                    .position(|k| k.as_deref() == Some(key.as_str()))
                else {
                    return Err(TabSetupError::UnmatchedKey { key });
                };
                used[index] = true;
                pairs.push(TabPair {
                    tab: tab.clone(),
                    body: bodies[index].clone(),
                });
            }

            let orphans = bodies
                .iter()
                .zip(used)
                .filter(|(_, used)| !used)
                .map(|(body, _)| body.clone())
                .collect();
            Ok((Pairing::Key, pairs, orphans))
        }
        _ => {
            if tabs.len() != bodies.len() {
                return Err(TabSetupError::CountMismatch {
                    tabs: tabs.len(),
                    bodies: bodies.len(),
                });
            }
            let pairs = tabs
                .iter()
                .zip(bodies)
                .map(|(tab, body)| TabPair {
                    tab: tab.clone(),
                    body: body.clone(),
                })
                .collect();
            Ok((Pairing::Position, pairs, Vec::new()))
        }
    }
}

/// A wired tab group
pub struct TabGroup<N> {
    pairs: Vec<TabPair<N>>,
    pairing: Pairing,
    state: TabGroupState,
    active_classes: Vec<String>,
    hidden_class: String,
}

impl<N: DomNode> TabGroup<N> {
    pub fn state(&self) -> TabGroupState {
        self.state
    }

    pub fn pairing(&self) -> Pairing {
        self.pairing
    }

    pub fn select(&mut self, index: usize) {
        self.state = self.state.select(index);
        self.apply();
    }

    fn apply(&self) {
        // Deactivate first: with key pairing two tabs may share a body
        let (active, inactive): (Vec<_>, Vec<_>) = self.state.activation().partition(|(_, on)| *on);
        for (i, on) in inactive.into_iter().chain(active) {
            let pair = &self.pairs[i];
            dom::set_classes(&pair.tab, &self.active_classes, on);
            dom::set_hidden(&pair.body, &self.hidden_class, !on);
        }
    }
}

/// Initialize one group: force the first pair active and wire tab clicks.
///
/// Returns `Ok(None)` for a group without tabs.
pub fn init_tab_group<N: DomNode>(
    root: &N,
    markers: &TabMarkers,
    hidden_class: &str,
) -> Result<Option<Rc<RefCell<TabGroup<N>>>>, TabSetupError> {
    let tabs = root.query_all(&markers.tab_selector);
    let bodies = root.query_all(&markers.body_selector);

    let (pairing, pairs, orphans) = pair_tabs(&tabs, &bodies, &markers.key_attr)?;
    let Some(state) = TabGroupState::new(pairs.len()) else {
        return Ok(None);
    };

    for body in &orphans {
        dom::set_hidden(body, hidden_class, true);
    }

    let links: Vec<Option<N>> = pairs
        .iter()
        .map(|pair| pair.tab.query(&markers.link_selector))
        .collect();

    let group = Rc::new(RefCell::new(TabGroup {
        pairs,
        pairing,
        state,
        active_classes: markers.active_classes.clone(),
        hidden_class: hidden_class.to_string(),
    }));
    group.borrow().apply();

    for (index, link) in links.into_iter().enumerate() {
        let Some(link) = link else { continue };
        let group = Rc::clone(&group);
        link.on_click(
            ClickDefault::Prevent,
            Box::new(move || group.borrow_mut().select(index)),
        );
    }

    Ok(Some(group))
}

/// Initialize every tab group in the document. Groups that fail their
/// pairing checks are logged and skipped.
pub fn init_tab_groups<N: DomNode>(
    document: &N,
    markers: &TabMarkers,
    hidden_class: &str,
) -> Vec<Rc<RefCell<TabGroup<N>>>> {
    let mut groups = Vec::new();
    for (ordinal, root) in document.query_all(&markers.group_selector).iter().enumerate() {
        match init_tab_group(root, markers, hidden_class) {
            Ok(Some(group)) => groups.push(group),
            Ok(None) => tracing::debug!(ordinal, "Empty tab group"),
            Err(e) => tracing::warn!(ordinal, id = %root.id(), "Tab group skipped: {e}"),
        }
    }
    groups
}
