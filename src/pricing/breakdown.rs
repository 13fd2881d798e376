use serde::{Deserialize, Serialize};

use super::{safe_cents, safe_number, term_cents};
use crate::entities::{PricingStrategy, ServiceRates, ServiceType, TripMeasurement};

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownInput {
    pub strategy: PricingStrategy,
    pub distance_miles: Option<f64>,
    pub duration_minutes: Option<f64>,
    pub hours_requested: Option<f64>,
    pub rates: ServiceRates,
}

impl BreakdownInput {
    pub fn new(service_type: &ServiceType, measurement: &TripMeasurement) -> Self {
        Self {
            strategy: service_type.strategy,
            distance_miles: measurement.distance_miles,
            duration_minutes: measurement.duration_minutes,
            hours_requested: measurement.hours_requested,
            rates: service_type.rates.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub mileage_cents: u64,
    pub time_cents: u64,
    pub base_cents: u64,
    pub floor_cents: u64,
    pub floor_applied: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownQuote {
    pub subtotal_cents: u64,
    pub breakdown: Breakdown,
}

impl BreakdownQuote {
    pub fn for_service_type(service_type: &ServiceType, measurement: &TripMeasurement) -> Self {
        quote_service_type(&BreakdownInput::new(service_type, measurement))
    }
}

/// Breakdown quote over service rates only.
///
/// Point-to-point leaves the base fee out, hourly bills the requested hours
/// unrounded with no vehicle minimum, and flat charges the base fee.
pub fn quote_service_type(input: &BreakdownInput) -> BreakdownQuote {
    let rates = &input.rates;
    let floor_cents = safe_cents(rates.min_fare_cents);

    let mut breakdown = Breakdown {
        floor_cents,
        ..Breakdown::default()
    };

    match input.strategy {
        PricingStrategy::PointToPoint => {
            breakdown.mileage_cents = term_cents(
                safe_number(input.distance_miles),
                safe_cents(rates.per_mile_cents),
            );
            breakdown.time_cents = term_cents(
                safe_number(input.duration_minutes),
                safe_cents(rates.per_minute_cents),
            );
        }
        PricingStrategy::Hourly => {
            breakdown.time_cents = term_cents(
                safe_number(input.hours_requested),
                safe_cents(rates.per_hour_cents),
            );
        }
        PricingStrategy::Flat => {
            breakdown.base_cents = safe_cents(rates.base_fee_cents);
        }
    }

    let computed = breakdown
        .mileage_cents
        .saturating_add(breakdown.time_cents)
        .saturating_add(breakdown.base_cents);
    breakdown.floor_applied = computed < floor_cents;

    BreakdownQuote {
        subtotal_cents: computed.max(floor_cents),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn rates() -> ServiceRates {
        ServiceRates {
            min_fare_cents: 2000,
            base_fee_cents: 999,
            per_mile_cents: 300,
            per_minute_cents: 40,
            per_hour_cents: 7500,
        }
    }

    fn input(strategy: PricingStrategy) -> BreakdownInput {
        BreakdownInput {
            strategy,
            distance_miles: None,
            duration_minutes: None,
            hours_requested: None,
            rates: rates(),
        }
    }

    #[test]
    fn point_to_point_excludes_base_fee() {
        let mut input = input(PricingStrategy::PointToPoint);
        input.distance_miles = Some(5.0);

        let quote = quote_service_type(&input);

        assert_eq!(quote.subtotal_cents, 2000);
        assert_eq!(
            quote.breakdown,
            Breakdown {
                mileage_cents: 1500,
                time_cents: 0,
                base_cents: 0,
                floor_cents: 2000,
                floor_applied: true,
            }
        );
    }

    #[test]
    fn point_to_point_above_floor() {
        let mut input = input(PricingStrategy::PointToPoint);
        input.distance_miles = Some(12.5);
        input.duration_minutes = Some(33.3);

        let quote = quote_service_type(&input);

        assert_eq!(quote.breakdown.mileage_cents, 3750);
        assert_eq!(quote.breakdown.time_cents, 1332);
        assert_eq!(quote.subtotal_cents, 5082);
        assert!(!quote.breakdown.floor_applied);
    }

    #[test]
    fn computed_equal_to_floor_is_not_floored() {
        let mut input = input(PricingStrategy::PointToPoint);
        input.distance_miles = Some(5.0);
        input.rates.min_fare_cents = 1500;

        let quote = quote_service_type(&input);
        assert_eq!(quote.subtotal_cents, 1500);
        assert!(!quote.breakdown.floor_applied);
    }

    #[test]
    fn hourly_keeps_fractional_hours() {
        let mut input = input(PricingStrategy::Hourly);
        input.hours_requested = Some(2.5);

        let quote = quote_service_type(&input);

        assert_eq!(quote.breakdown.time_cents, 18750);
        assert_eq!(quote.breakdown.mileage_cents, 0);
        assert_eq!(quote.breakdown.base_cents, 0);
        assert_eq!(quote.subtotal_cents, 18750);
    }

    #[test]
    fn flat_charges_base_fee() {
        let quote = quote_service_type(&input(PricingStrategy::Flat));

        assert_eq!(quote.breakdown.base_cents, 999);
        assert_eq!(quote.subtotal_cents, 2000);
        assert!(quote.breakdown.floor_applied);

        let mut input = input(PricingStrategy::Flat);
        input.rates.base_fee_cents = 6500;
        input.distance_miles = Some(100.0);

        let quote = quote_service_type(&input);
        assert_eq!(quote.subtotal_cents, 6500);
        assert_eq!(quote.breakdown.mileage_cents, 0);
        assert!(!quote.breakdown.floor_applied);
    }

    #[test]
    fn malformed_values_contribute_nothing() {
        for bad in [Some(-5.0), Some(f64::NAN), Some(f64::INFINITY), None] {
            let mut input = input(PricingStrategy::PointToPoint);
            input.rates.min_fare_cents = 0;
            input.distance_miles = bad;
            input.duration_minutes = bad;

            let quote = quote_service_type(&input);
            assert_eq!(quote.subtotal_cents, 0);
            assert!(!quote.breakdown.floor_applied);
        }
    }

    #[test]
    fn builds_input_from_service_type() {
        let service_type = ServiceType::new(
            "Airport transfer".into(),
            PricingStrategy::PointToPoint,
            rates(),
        );
        let quote =
            BreakdownQuote::for_service_type(&service_type, &TripMeasurement::measured(5.0, 10.0));
        assert_eq!(quote.breakdown.mileage_cents, 1500);
        assert_eq!(quote.breakdown.time_cents, 400);
        assert_eq!(quote.subtotal_cents, 2000);
    }

    #[test]
    fn floor_and_monotonicity_hold() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..2_000 {
            let input = BreakdownInput {
                strategy: PricingStrategy::ALL[rng.gen_range(0..3usize)],
                distance_miles: Some(rng.gen_range(0.0..200.0)),
                duration_minutes: Some(rng.gen_range(0.0..300.0)),
                hours_requested: Some(rng.gen_range(0.0..12.0)),
                rates: ServiceRates {
                    min_fare_cents: rng.gen_range(0..20_000),
                    base_fee_cents: rng.gen_range(0..10_000),
                    per_mile_cents: rng.gen_range(0..1_000),
                    per_minute_cents: rng.gen_range(0..200),
                    per_hour_cents: rng.gen_range(0..20_000),
                },
            };
            let quote = quote_service_type(&input);

            assert!(quote.subtotal_cents >= input.rates.min_fare_cents as u64);
            assert_eq!(quote, quote_service_type(&input));

            let mut longer = input.clone();
            longer.distance_miles = longer.distance_miles.map(|d| d + rng.gen_range(0.0..50.0));
            longer.duration_minutes = longer.duration_minutes.map(|d| d + rng.gen_range(0.0..50.0));
            longer.hours_requested = longer.hours_requested.map(|h| h + rng.gen_range(0.0..5.0));

            assert!(quote_service_type(&longer).subtotal_cents >= quote.subtotal_cents);
        }
    }
}
