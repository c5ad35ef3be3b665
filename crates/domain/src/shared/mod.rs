//! Shared kernel: value objects used across bounded contexts.

mod currency;
mod date_time;
mod money;

pub use currency::Currency;
pub use date_time::{DateTime, DateTimeInput};
pub use money::Money;
