//! Service layer for the drafting pipeline.
//!
//! Interactive workflow logic separated from the command surface:
//! jurisdiction narrowing, search and suggestion, and filing.

pub mod filing;
pub mod jurisdiction;
pub mod suggest;

pub use filing::{file_request, FilingOutcome};
pub use jurisdiction::select_jurisdiction;
pub use suggest::{filter_requests, generate_suggestion, search_requests, ExampleSet, MAX_EXAMPLES};
