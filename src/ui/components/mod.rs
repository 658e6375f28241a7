pub mod input;
pub mod metric;

pub use input::InputWidget;
pub use metric::{humidity_metric, temperature_metric, wind_metric};
