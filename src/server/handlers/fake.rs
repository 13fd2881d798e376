use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::api::{QuoteAPI, ServiceTypeAPI, VehicleAPI, API};
use crate::entities::{
    MeasurementSource, PricingStrategy, Quote, ServiceRates, ServiceType, Vehicle, VehicleRates,
};
use crate::error::{invalid_input_error, not_found_error, Error};
use crate::pricing::BreakdownQuote;
use crate::server::DynAPI;

/// In-memory stand-in for the Postgres engine.
#[derive(Default)]
pub struct FakeAPI {
    service_types: Mutex<HashMap<Uuid, ServiceType>>,
    vehicles: Mutex<HashMap<Uuid, Vehicle>>,
    quotes: Mutex<HashMap<Uuid, Quote>>,
}

impl FakeAPI {
    pub fn shared() -> DynAPI {
        Arc::new(Self::default())
    }

    fn service_type(&self, id: &Uuid) -> Result<ServiceType, Error> {
        self.service_types
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(not_found_error)
    }

    fn vehicle(&self, id: &Uuid) -> Result<Vehicle, Error> {
        self.vehicles
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(not_found_error)
    }
}

#[async_trait]
impl ServiceTypeAPI for FakeAPI {
    async fn create_service_type(
        &self,
        name: String,
        strategy: PricingStrategy,
        rates: ServiceRates,
    ) -> Result<ServiceType, Error> {
        let service_type = ServiceType::new(name, strategy, rates);
        self.service_types
            .lock()
            .unwrap()
            .insert(service_type.id, service_type.clone());

        Ok(service_type)
    }

    async fn find_service_type(&self, id: Uuid) -> Result<ServiceType, Error> {
        self.service_type(&id)
    }

    async fn list_service_types(&self) -> Result<Vec<ServiceType>, Error> {
        let mut all: Vec<ServiceType> = self
            .service_types
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(all)
    }

    async fn update_service_rates(
        &self,
        id: Uuid,
        rates: ServiceRates,
    ) -> Result<ServiceType, Error> {
        let mut service_types = self.service_types.lock().unwrap();
        let service_type = service_types.get_mut(&id).ok_or_else(not_found_error)?;
        service_type.rates = rates;

        Ok(service_type.clone())
    }
}

#[async_trait]
impl VehicleAPI for FakeAPI {
    async fn create_vehicle(
        &self,
        name: String,
        passenger_capacity: u32,
        min_hours: i64,
        rates: VehicleRates,
    ) -> Result<Vehicle, Error> {
        let vehicle = Vehicle::new(name, passenger_capacity, min_hours, rates);
        self.vehicles
            .lock()
            .unwrap()
            .insert(vehicle.id, vehicle.clone());

        Ok(vehicle)
    }

    async fn find_vehicle(&self, id: Uuid) -> Result<Vehicle, Error> {
        self.vehicle(&id)
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        let mut all: Vec<Vehicle> = self.vehicles.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(all)
    }

    async fn update_vehicle_rates(
        &self,
        id: Uuid,
        min_hours: i64,
        rates: VehicleRates,
    ) -> Result<Vehicle, Error> {
        let mut vehicles = self.vehicles.lock().unwrap();
        let vehicle = vehicles.get_mut(&id).ok_or_else(not_found_error)?;
        vehicle.min_hours = min_hours;
        vehicle.rates = rates;

        Ok(vehicle.clone())
    }
}

#[async_trait]
impl QuoteAPI for FakeAPI {
    async fn create_quote(
        &self,
        service_type_id: Uuid,
        vehicle_id: Option<Uuid>,
        source: MeasurementSource,
    ) -> Result<Quote, Error> {
        let service_type = self.service_type(&service_type_id)?;
        let vehicle = match vehicle_id {
            Some(id) => Some(self.vehicle(&id)?),
            None => None,
        };
        // No network in tests, so place lookups are rejected.
        let measurement = source.inline().ok_or_else(invalid_input_error)?;

        let quote = Quote::price(&service_type, vehicle.as_ref(), measurement);
        self.quotes
            .lock()
            .unwrap()
            .insert(quote.token, quote.clone());

        Ok(quote)
    }

    async fn find_quote(&self, token: Uuid) -> Result<Quote, Error> {
        self.quotes
            .lock()
            .unwrap()
            .get(&token)
            .cloned()
            .ok_or_else(not_found_error)
    }

    async fn preview_breakdown(
        &self,
        service_type_id: Uuid,
        source: MeasurementSource,
    ) -> Result<BreakdownQuote, Error> {
        let service_type = self.service_type(&service_type_id)?;
        let measurement = source.inline().ok_or_else(invalid_input_error)?;

        Ok(BreakdownQuote::for_service_type(&service_type, &measurement))
    }
}

impl API for FakeAPI {}
