//! report-charts: charting and presentation engine for the LAMUKA
//! strategic action report.
//!
//! The crate keeps a strict split between typed data contracts with pure
//! geometry projection (`core`), backend-agnostic scene assembly (`api`,
//! `render`) and the page chrome model (`section`, `page`). All datasets are
//! fixed literal content owned by `content`; nothing is fetched or mutated
//! at runtime.

pub mod api;
pub mod content;
pub mod core;
pub mod error;
pub mod interaction;
pub mod page;
pub mod render;
pub mod section;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use page::ReportPage;
