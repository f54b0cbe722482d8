pub mod commands;
pub mod logging;

pub use commands::{CheckReport, check, keys, load_dataset, show, tooltips};
