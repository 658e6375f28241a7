pub mod advisor;
pub mod dashboard;
pub mod series;

pub use dashboard::{CityOutcome, CompareOutcome, DashboardService};
