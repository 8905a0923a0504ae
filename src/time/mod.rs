pub mod error;
pub mod window;

pub use self::window::{millis_from_seconds, time_window, TimeWindow};
