use super::vehicle::Vehicle;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Lookup of vehicles by identifier.
#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<Vehicle>>;
}

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type VehicleCatalogBox = Box<dyn VehicleCatalog>;
pub type ClockBox = Box<dyn Clock>;
