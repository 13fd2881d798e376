use serde::{Deserialize, Serialize};

use super::{safe_cents, safe_number, term_cents, whole_hours};
use crate::entities::{
    PricingStrategy, ServiceRates, ServiceType, TripMeasurement, Vehicle, VehicleRates,
};

/// Everything the primary quote needs. Optional measurements default to zero.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteInput {
    pub strategy: PricingStrategy,
    pub distance_miles: Option<f64>,
    pub duration_minutes: Option<f64>,
    pub hours_requested: Option<f64>,
    pub vehicle_min_hours: Option<f64>,
    pub service: ServiceRates,
    pub vehicle: VehicleRates,
}

impl QuoteInput {
    pub fn new(
        service_type: &ServiceType,
        vehicle: Option<&Vehicle>,
        measurement: &TripMeasurement,
    ) -> Self {
        Self {
            strategy: service_type.strategy,
            distance_miles: measurement.distance_miles,
            duration_minutes: measurement.duration_minutes,
            hours_requested: measurement.hours_requested,
            vehicle_min_hours: vehicle.map(|v| v.min_hours as f64),
            service: service_type.rates.clone(),
            vehicle: vehicle.map(|v| v.rates.clone()).unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub subtotal_cents: u64,
    /// Equal to the subtotal until a taxes and fees layer exists.
    pub total_cents: u64,
    pub billed_hours: Option<u64>,
    pub requested_hours: Option<u64>,
}

impl QuoteResult {
    fn settled(
        subtotal_cents: u64,
        billed_hours: Option<u64>,
        requested_hours: Option<u64>,
    ) -> Self {
        Self {
            subtotal_cents,
            total_cents: subtotal_cents,
            billed_hours,
            requested_hours,
        }
    }
}

/// Rates in force for one quote after vehicle overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveRates {
    pub base_cents: u64,
    pub per_mile_cents: u64,
    pub per_minute_cents: u64,
    pub per_hour_cents: u64,
}

/// Resolves each rate independently: a vehicle value wins only when it is
/// set and strictly positive.
pub fn effective_rates(service: &ServiceRates, vehicle: &VehicleRates) -> EffectiveRates {
    EffectiveRates {
        base_cents: resolve(service.base_fee_cents, vehicle.base_fare_cents),
        per_mile_cents: resolve(service.per_mile_cents, vehicle.per_mile_cents),
        per_minute_cents: resolve(service.per_minute_cents, vehicle.per_minute_cents),
        per_hour_cents: resolve(service.per_hour_cents, vehicle.per_hour_cents),
    }
}

fn resolve(service: i64, vehicle: Option<i64>) -> u64 {
    match vehicle {
        Some(rate) if rate > 0 => rate as u64,
        _ => safe_cents(service),
    }
}

/// Primary quote. Never fails; the subtotal never drops below the service's
/// minimum fare.
pub fn calc_quote_cents(input: &QuoteInput) -> QuoteResult {
    let rates = effective_rates(&input.service, &input.vehicle);
    let min_fare = safe_cents(input.service.min_fare_cents);

    match input.strategy {
        PricingStrategy::Hourly => {
            let requested = whole_hours(input.hours_requested);
            let billed = requested.max(whole_hours(input.vehicle_min_hours));

            let raw = rates
                .base_cents
                .saturating_add(billed.saturating_mul(rates.per_hour_cents));

            QuoteResult::settled(min_fare.max(raw), Some(billed), Some(requested))
        }
        // FLAT has no formula of its own here and prices like point-to-point.
        PricingStrategy::PointToPoint | PricingStrategy::Flat => {
            let miles = safe_number(input.distance_miles);
            let minutes = safe_number(input.duration_minutes);

            let raw = rates
                .base_cents
                .saturating_add(term_cents(miles, rates.per_mile_cents))
                .saturating_add(term_cents(minutes, rates.per_minute_cents));

            QuoteResult::settled(min_fare.max(raw), None, None)
        }
    }
}
