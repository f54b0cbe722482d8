//! Chart rendering boundary
//!
//! The chart library is an external collaborator: it takes a container and a
//! configuration and hands back a handle that must be destroyed before the
//! container is reused.
//!
//! ```text
//!   Dataset ──lookup──▶ ChartConfig (clone) ──overrides──▶ RenderRequest
//!                                                             │
//!                                   ChartBackend::render ◀────┘
//!                                             │
//!                              ChartRegistry (one handle per container)
//! ```

pub mod binder;
mod registry;

use thiserror::Error;

use benchboard_types::DisplayOverrides;

use crate::dataset::ChartConfig;

pub use binder::{KeySource, bind_charts};
pub use registry::ChartRegistry;

/// Errors reported by a chart backend
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart library is not loaded")]
    LibraryMissing,

    #[error("failed to convert chart configuration: {reason}")]
    Config { reason: String },

    #[error("chart construction failed: {reason}")]
    Construct { reason: String },
}

/// Rendering context of a chart, selecting which overrides apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartView {
    /// Grid of small charts, configuration used as published
    #[default]
    Overview,
    /// Enlarged single chart
    Detail(DisplayOverrides),
}

impl ChartView {
    pub fn overrides(&self) -> Option<&DisplayOverrides> {
        match self {
            Self::Overview => None,
            Self::Detail(overrides) => Some(overrides),
        }
    }
}

/// A private copy of a configuration, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub config: ChartConfig,
    /// Install the tooltip formatter as the label callback
    pub tooltip: bool,
}

impl RenderRequest {
    /// Clone `shared` and apply the view's overrides to the copy.
    pub fn prepare(shared: &ChartConfig, view: &ChartView, tooltip: bool) -> Self {
        let mut config = shared.clone();
        if let Some(overrides) = view.overrides() {
            config.apply_overrides(overrides);
        }
        Self { config, tooltip }
    }
}

/// A rendered chart instance owned by one container.
pub trait ChartHandle {
    fn destroy(&mut self);
}

pub trait ChartBackend<N> {
    type Handle: ChartHandle;

    fn render(&self, container: &N, request: RenderRequest) -> Result<Self::Handle, RenderError>;
}
