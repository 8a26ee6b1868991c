//! Service layer: pure derivations from the record set to chart and layout
//! specifications.
//!
//! Services take the records by reference and never fail. Validation of user
//! input happens before a service is called (see [`crate::models::selection`]).

pub mod layout;
pub mod proportion;
pub mod scatter;
pub mod summary;

pub use layout::dashboard_layout;
pub use proportion::proportion_chart;
pub use scatter::scatter_chart;
pub use summary::summarize;
