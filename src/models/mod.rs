pub mod advisory;
pub mod forecast;
pub mod view;

pub use advisory::*;
pub use forecast::*;
pub use view::*;
