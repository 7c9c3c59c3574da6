//! Core traits and types for revsent
//!
//! This crate defines the review analysis data model, the collaborator traits
//! (analysis service, chart renderer, results view) and the controller that
//! sequences one submit/request/render cycle over them.

pub mod chart;
pub mod controller;
pub mod error;
pub mod service;
pub mod style;
pub mod types;
pub mod view;


pub use chart::{ChartHandle, ChartRenderer, LegendPosition, PieChart};
pub use controller::{render_pie_chart, ReviewAnalysisController, SubmitOutcome};
pub use error::{Error, Result, DEFAULT_FAILURE_MESSAGE};
pub use service::AnalysisService;
pub use types::*;
pub use view::{ids, ResultsView, TableCell, TableRow, BUSY_LABEL, SUBMIT_LABEL};
