use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    MeasurementSource, PricingStrategy, Quote, ServiceRates, ServiceType, Vehicle, VehicleRates,
};
use crate::error::Error;
use crate::pricing::BreakdownQuote;

#[async_trait]
pub trait ServiceTypeAPI {
    async fn create_service_type(
        &self,
        name: String,
        strategy: PricingStrategy,
        rates: ServiceRates,
    ) -> Result<ServiceType, Error>;
    async fn find_service_type(&self, id: Uuid) -> Result<ServiceType, Error>;
    async fn list_service_types(&self) -> Result<Vec<ServiceType>, Error>;
    async fn update_service_rates(&self, id: Uuid, rates: ServiceRates)
        -> Result<ServiceType, Error>;
}

#[async_trait]
pub trait VehicleAPI {
    async fn create_vehicle(
        &self,
        name: String,
        passenger_capacity: u32,
        min_hours: i64,
        rates: VehicleRates,
    ) -> Result<Vehicle, Error>;
    async fn find_vehicle(&self, id: Uuid) -> Result<Vehicle, Error>;
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error>;
    async fn update_vehicle_rates(
        &self,
        id: Uuid,
        min_hours: i64,
        rates: VehicleRates,
    ) -> Result<Vehicle, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(
        &self,
        service_type_id: Uuid,
        vehicle_id: Option<Uuid>,
        source: MeasurementSource,
    ) -> Result<Quote, Error>;
    async fn find_quote(&self, token: Uuid) -> Result<Quote, Error>;
    async fn preview_breakdown(
        &self,
        service_type_id: Uuid,
        source: MeasurementSource,
    ) -> Result<BreakdownQuote, Error>;
}

pub trait API: ServiceTypeAPI + VehicleAPI + QuoteAPI {}
