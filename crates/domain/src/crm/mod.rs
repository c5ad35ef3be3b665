//! Customer relationship bounded context.

mod customer;

pub use customer::{Customer, CustomerId};
