//! External collaborators consumed by the core.

pub mod backend;

pub use backend::{ChartDataProvider, FetchError, HttpBackendClient};
