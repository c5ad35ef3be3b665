//! Walkthrough of the domain model.
//!
//! Builds a currency, composes money from it and attaches an order price to a
//! customer, rendering each step with the configured locale.

pub mod config;

use std::sync::Arc;

pub use config::Config;
use domain::{Currency, Customer, DateTime, DomainError, Money};

/// Runs the walkthrough and returns one line of output per step.
#[tracing::instrument(skip(config), fields(locale = %config.locale, currency = %config.currency))]
pub fn walkthrough(config: &Config) -> Result<Vec<String>, DomainError> {
    let currency = Arc::new(Currency::new(config.currency.as_str())?);
    let mut lines = Vec::new();

    let price = Money::new(1234.56, Arc::clone(&currency))?;
    lines.push(format!("Formatted price: {}", price.format(&config.locale)?));

    let subtotal = Money::new(100.0, Arc::clone(&currency))?;
    let shipping = Money::new(50.0, Arc::clone(&currency))?;
    let total = subtotal.add(&shipping)?;
    lines.push(format!("{subtotal} + {shipping} = {total}"));

    let doubled = total.multiply(2.0)?;
    lines.push(format!("{total} x 2 = {doubled}"));

    let mut customer = Customer::new("John Doe")?;
    customer.set_last_order_price(total);
    if let Some(last) = customer.last_order_price() {
        lines.push(format!(
            "Customer {} ({}) last order: {}",
            customer.id(),
            customer.name(),
            last.format(&config.locale)?
        ));
    }

    let today = DateTime::now();
    lines.push(format!(
        "Generated at {today} ({})",
        today.format(&config.locale)?
    ));

    tracing::debug!(steps = lines.len(), "walkthrough finished");
    Ok(lines)
}
