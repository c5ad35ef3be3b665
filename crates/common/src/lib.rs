//! Capabilities shared by the domain crates.
//!
//! The domain never reaches for the wall clock or a random source directly.
//! Both are injected through the traits defined here so that tests can supply
//! deterministic doubles:
//! - [`Clock`] with [`SystemClock`] and [`FixedClock`]
//! - [`IdGenerator`] with [`RandomIdGenerator`] and [`SequentialIdGenerator`]

pub mod clock;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
