//! Page initialization
//!
//! One pass over the document per page kind:
//!
//! - timeline: navigation, tab groups, overview charts, single/multi switchers
//! - runners: speedup charts
//! - single: the chart named by the URL, rendered with detail overrides
//!
//! Every step tolerates missing markup by doing nothing for the missing part.

use std::cell::RefCell;
use std::rc::Rc;

use benchboard_types::{PageConfig, PageKind};

use crate::charts::{ChartBackend, ChartRegistry, ChartView, KeySource, bind_charts};
use crate::dataset::Dataset;
use crate::dom::DomNode;
use crate::widgets::{SwitcherSet, TabGroup, init_navigator, init_switchers, init_tab_groups};

/// Everything a page created at load time. Must stay alive for as long as
/// the page does.
pub struct Page<N, B: ChartBackend<N>> {
    pub kind: PageKind,
    pub charts: ChartRegistry<usize, B::Handle>,
    pub tab_groups: Vec<Rc<RefCell<TabGroup<N>>>>,
    pub switchers: Option<SwitcherSet<N, B>>,
    pub nav_links: usize,
}

/// Initialize `document` as a page of `kind`.
///
/// `url_key` is the chart key taken from the page URL; only the single page
/// reads it.
pub fn init_page<N, B>(
    document: &N,
    kind: PageKind,
    config: &PageConfig,
    dataset: Rc<Dataset>,
    backend: B,
    url_key: Option<&str>,
) -> Page<N, B>
where
    N: DomNode,
    B: ChartBackend<N> + Clone + 'static,
    B::Handle: 'static,
{
    let markers = &config.charts;
    let attribute = KeySource::Attribute(markers.key_attr.clone());

    let mut page = Page {
        kind,
        charts: ChartRegistry::new(),
        tab_groups: Vec::new(),
        switchers: None,
        nav_links: 0,
    };

    match kind {
        PageKind::Timeline => {
            page.nav_links = init_navigator(document, &config.nav, &config.hidden_class);
            page.tab_groups = init_tab_groups(document, &config.tabs, &config.hidden_class);
            page.charts = bind_charts(
                document,
                &markers.timeline_selector,
                &attribute,
                &dataset,
                &backend,
                &ChartView::Overview,
            );
            page.switchers = Some(init_switchers(
                document,
                &config.switcher,
                &config.hidden_class,
                Rc::clone(&dataset),
                backend,
                &config.detail.overrides(),
            ));
        }
        PageKind::Runners => {
            page.charts = bind_charts(
                document,
                &markers.runner_selector,
                &attribute,
                &dataset,
                &backend,
                &ChartView::Overview,
            );
        }
        PageKind::Single => {
            let Some(key) = url_key else {
                tracing::warn!(param = %markers.url_param, "Single chart page without a chart key");
                return page;
            };
            if let Some(title) = document.by_id(&markers.single_title_id) {
                title.set_heading(key);
            }
            page.charts = bind_charts(
                document,
                &markers.timeline_selector,
                &KeySource::Fixed(key.to_string()),
                &dataset,
                &backend,
                &ChartView::Detail(config.detail.overrides()),
            );
        }
    }

    tracing::info!(
        page = kind.label(),
        charts = page.charts.len(),
        tab_groups = page.tab_groups.len(),
        nav_links = page.nav_links,
        "Page initialized"
    );
    page
}
