mod measurement;
mod quote;
mod rates;
mod service_type;
mod strategy;
mod vehicle;

pub use measurement::{MeasurementSource, TripMeasurement};
pub use quote::Quote;
pub use rates::{ServiceRates, VehicleRates};
pub use service_type::ServiceType;
pub use strategy::PricingStrategy;
pub use vehicle::Vehicle;
