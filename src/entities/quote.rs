use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{PricingStrategy, ServiceType, TripMeasurement, Vehicle};
use crate::pricing::{calc_quote_cents, QuoteInput, QuoteResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub service_type_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub strategy: PricingStrategy,
    pub measurement: TripMeasurement,
    pub result: QuoteResult,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(
        service_type_id: Uuid,
        vehicle_id: Option<Uuid>,
        strategy: PricingStrategy,
        measurement: TripMeasurement,
        result: QuoteResult,
    ) -> Self {
        Self {
            token: Uuid::new_v4(),
            service_type_id,
            vehicle_id,
            strategy,
            measurement,
            result,
            created_at: Utc::now(),
        }
    }

    /// Prices a trip with the primary calculator and wraps it in a new quote.
    pub fn price(
        service_type: &ServiceType,
        vehicle: Option<&Vehicle>,
        measurement: TripMeasurement,
    ) -> Self {
        let result = calc_quote_cents(&QuoteInput::new(service_type, vehicle, &measurement));

        Self::new(
            service_type.id,
            vehicle.map(|v| v.id),
            service_type.strategy,
            measurement,
            result,
        )
    }
}
