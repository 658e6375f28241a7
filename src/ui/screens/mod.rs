pub mod city;
pub mod compare;

pub use city::CityScreen;
pub use compare::{CompareField, CompareScreen};
