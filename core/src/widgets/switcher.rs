//! Single/multi view switcher
//!
//! Each scope shows either the overview grid or one enlarged chart. Opening
//! the detail view renders a private copy of the selected configuration into
//! the scope's canvas; going back only swaps visibility and leaves the detail
//! chart in place until the next one replaces it.

use std::cell::RefCell;
use std::rc::Rc;

use benchboard_types::{DisplayOverrides, SwitcherMarkers};

use crate::charts::{ChartBackend, ChartRegistry, ChartView, RenderRequest};
use crate::dataset::Dataset;
use crate::dom::{self, ClickDefault, DomNode};

/// Which container of a scope is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Overview,
    Detail,
}

impl ViewMode {
    /// Transition after a detail render attempt. A failed render leaves
    /// nothing to show in the detail container.
    pub fn open_detail(self, rendered: bool) -> Self {
        if rendered { Self::Detail } else { Self::Overview }
    }

    pub fn back(self) -> Self {
        Self::Overview
    }

    pub fn overview_visible(&self) -> bool {
        *self == Self::Overview
    }

    pub fn detail_visible(&self) -> bool {
        *self == Self::Detail
    }
}

/// Shared state of all switchers on a page: slot per scope ordinal
pub type DetailCharts<H> = Rc<RefCell<ChartRegistry<usize, H>>>;

pub struct ViewSwitcher<N, B: ChartBackend<N>> {
    slot: usize,
    overview: N,
    detail: N,
    title: Option<N>,
    canvas: N,
    mode: ViewMode,
    charts: DetailCharts<B::Handle>,
    dataset: Rc<Dataset>,
    backend: B,
    view: ChartView,
    hidden_class: String,
}

impl<N: DomNode, B: ChartBackend<N>> ViewSwitcher<N, B> {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Show the detail view for `key`. Returns whether the view changed.
    pub fn open(&mut self, key: &str, title: &str) -> bool {
        let Some(config) = self.dataset.get(key) else {
            tracing::debug!(slot = self.slot, key, "No chart configuration for detail view");
            return false;
        };

        // The library refuses a canvas that still holds a chart
        self.charts.borrow_mut().dispose(&self.slot);

        let request = RenderRequest::prepare(config, &self.view, true);
        let rendered = match self.backend.render(&self.canvas, request) {
            Ok(handle) => {
                self.charts.borrow_mut().replace(self.slot, handle);
                true
            }
            Err(e) => {
                tracing::warn!(slot = self.slot, key, error = %e, "Failed to render detail chart");
                false
            }
        };

        self.mode = self.mode.open_detail(rendered);
        if rendered {
            if let Some(node) = &self.title {
                node.set_text(title);
            }
        }
        self.apply();
        rendered
    }

    pub fn back(&mut self) {
        self.mode = self.mode.back();
        self.apply();
    }

    fn apply(&self) {
        dom::set_hidden(&self.overview, &self.hidden_class, !self.mode.overview_visible());
        dom::set_hidden(&self.detail, &self.hidden_class, !self.mode.detail_visible());
    }
}

/// All switchers of a page with the registry holding their detail charts.
pub struct SwitcherSet<N, B: ChartBackend<N>> {
    pub switchers: Vec<Rc<RefCell<ViewSwitcher<N, B>>>>,
    pub charts: DetailCharts<B::Handle>,
}

/// Wire every switcher scope in the document.
///
/// Scopes lacking an overview, detail or canvas element are skipped.
pub fn init_switchers<N, B>(
    document: &N,
    markers: &SwitcherMarkers,
    hidden_class: &str,
    dataset: Rc<Dataset>,
    backend: B,
    overrides: &DisplayOverrides,
) -> SwitcherSet<N, B>
where
    N: DomNode,
    B: ChartBackend<N> + Clone + 'static,
    B::Handle: 'static,
{
    let charts: DetailCharts<B::Handle> = Rc::new(RefCell::new(ChartRegistry::new()));
    let mut switchers = Vec::new();

    for (slot, scope) in document.query_all(&markers.scope_selector).into_iter().enumerate() {
        let (Some(overview), Some(detail), Some(canvas)) = (
            scope.query(&markers.overview_selector),
            scope.query(&markers.detail_selector),
            scope.query(&markers.canvas_selector),
        ) else {
            tracing::warn!(slot, id = %scope.id(), "Switcher scope is missing its containers");
            continue;
        };

        let switcher = Rc::new(RefCell::new(ViewSwitcher {
            slot,
            overview,
            detail,
            title: scope.query(&markers.title_selector),
            canvas,
            mode: ViewMode::Overview,
            charts: Rc::clone(&charts),
            dataset: Rc::clone(&dataset),
            backend: backend.clone(),
            view: ChartView::Detail(overrides.clone()),
            hidden_class: hidden_class.to_string(),
        }));
        switcher.borrow().apply();

        if let Some(back) = scope.query(&markers.back_selector) {
            let switcher = Rc::clone(&switcher);
            back.on_click(ClickDefault::Allow, Box::new(move || switcher.borrow_mut().back()));
        }

        for link in scope.query_all(&markers.link_selector) {
            let Some(key) = link.data(&markers.key_attr) else {
                continue;
            };
            let title = link.data(&markers.title_attr).unwrap_or_default();
            let switcher = Rc::clone(&switcher);
            link.on_click(
                ClickDefault::Prevent,
                Box::new(move || {
                    switcher.borrow_mut().open(&key, &title);
                }),
            );
        }

        switchers.push(switcher);
    }

    SwitcherSet { switchers, charts }
}
