//! Domain model built from immutable value objects and a single aggregate.
//!
//! This crate provides:
//! - [`ValueObject`] and [`Entity`] building-block traits
//! - the shared kernel: [`DateTime`], [`Currency`] and [`Money`]
//! - the CRM bounded context: the [`Customer`] aggregate
//! - [`Locale`] display conventions used by the `format` operations
//!
//! Every value validates itself on construction and is immutable afterwards.
//! The wall clock and identifier source are injected through
//! [`common::Clock`] and [`common::IdGenerator`].

pub mod crm;
pub mod entity;
pub mod error;
pub mod locale;
pub mod shared;

pub use common::{
    Clock, FixedClock, IdGenerator, RandomIdGenerator, SequentialIdGenerator, SystemClock,
};
pub use crm::{Customer, CustomerId};
pub use entity::{Entity, ValueObject};
pub use error::{DomainError, ValidationError};
pub use locale::{DEFAULT_LOCALE, FormatError, Locale};
pub use shared::{Currency, DateTime, DateTimeInput, Money};
