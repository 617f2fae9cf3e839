pub mod service;
pub mod types;

pub use service::{select_backend, ChartError, NatalChartService, ServiceConfig, ServiceState};
pub use types::{BirthData, BirthInput, NatalChart};
