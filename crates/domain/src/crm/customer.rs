//! Customer entity.

use std::str::FromStr;

use common::{IdGenerator, RandomIdGenerator};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;
use crate::error::ValidationError;
use crate::shared::Money;

/// Unique identifier for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Draws a fresh identifier from `ids`.
    pub fn generate<G: IdGenerator + ?Sized>(ids: &G) -> Self {
        Self(ids.generate())
    }

    /// Creates a customer ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for CustomerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<CustomerId> for Uuid {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

/// Customer aggregate root.
///
/// The identifier is assigned once at creation. The name is fixed and never
/// blank. The last order price starts absent and can be overwritten any
/// number of times, in any currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord", into = "CustomerRecord")]
pub struct Customer {
    id: CustomerId,
    name: String,
    last_order_price: Option<Money>,
}

impl Customer {
    /// Creates a customer with a random identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id_generator(name, &RandomIdGenerator)
    }

    /// Creates a customer whose identifier is drawn from `ids`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn with_id_generator<G>(name: impl Into<String>, ids: &G) -> Result<Self, ValidationError>
    where
        G: IdGenerator + ?Sized,
    {
        let name = name.into();
        validate_name(&name)?;

        let id = CustomerId::generate(ids);
        tracing::debug!(customer_id = %id, "customer created");

        Ok(Self {
            id,
            name,
            last_order_price: None,
        })
    }

    /// Returns the customer's identifier.
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Returns the customer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of the last order, if one was recorded.
    pub fn last_order_price(&self) -> Option<&Money> {
        self.last_order_price.as_ref()
    }

    /// Returns true once a last order price has been recorded.
    pub fn has_last_order(&self) -> bool {
        self.last_order_price.is_some()
    }

    /// Records the price of the latest order, replacing any earlier one.
    pub fn set_last_order_price(&mut self, price: Money) {
        tracing::trace!(customer_id = %self.id, price = %price, "last order price recorded");
        self.last_order_price = Some(price);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Wire shape of [`Customer`].
#[derive(Serialize, Deserialize)]
struct CustomerRecord {
    id: CustomerId,
    name: String,
    #[serde(default)]
    last_order_price: Option<Money>,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = ValidationError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        validate_name(&record.name)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            last_order_price: record.last_order_price,
        })
    }
}

impl From<Customer> for CustomerRecord {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            last_order_price: customer.last_order_price,
        }
    }
}
