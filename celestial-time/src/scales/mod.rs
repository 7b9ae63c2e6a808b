pub mod tt;

pub use tt::{tt_from_calendar, TT};
