#![forbid(unsafe_code)]

pub mod auth;
pub mod error;
pub mod model;
pub mod quiz;
pub mod reminders;
pub mod time;

pub use error::Error;
pub use time::Clock;
