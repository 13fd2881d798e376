use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{PricingStrategy, ServiceRates};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: Uuid,
    pub name: String,
    pub strategy: PricingStrategy,
    pub rates: ServiceRates,
}

impl ServiceType {
    pub fn new(name: String, strategy: PricingStrategy, rates: ServiceRates) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            strategy,
            rates,
        }
    }
}
