pub mod charts;
pub mod config;
pub mod dataset;
pub mod dom;
pub mod page;
pub mod tooltip;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use charts::{
    ChartBackend, ChartHandle, ChartRegistry, ChartView, KeySource, RenderError, RenderRequest,
    bind_charts,
};
pub use config::{ConfigError, load_page_config};
pub use dataset::{ChartConfig, ConfigIssue, Dataset, DatasetError};
pub use dom::{ClickDefault, ClickHandler, DomNode};
pub use page::{Page, init_page};
pub use tooltip::{DataPoint, PointFields, tooltip_lines};
pub use widgets::{PanelNavigator, TabGroupState, ViewMode};
