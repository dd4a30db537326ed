#![forbid(unsafe_code)]

pub mod category;
pub mod matcher;
pub mod model;
pub mod time;

pub use time::Clock;
