use crate::domain::ports::VehicleCatalog;
use crate::domain::vehicle::Vehicle;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory vehicle catalog.
///
/// Uses `Arc<RwLock<HashMap<String, Vehicle>>>`, so clones share the same
/// vehicles. Handy for tests and for catalogs assembled at startup.
#[derive(Default, Clone)]
pub struct InMemoryVehicleCatalog {
    vehicles: Arc<RwLock<HashMap<String, Vehicle>>>,
}

impl InMemoryVehicleCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding `vehicles`, keyed by their id.
    pub fn from_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let map = vehicles
            .into_iter()
            .map(|vehicle| (vehicle.id.clone(), vehicle))
            .collect();
        Self {
            vehicles: Arc::new(RwLock::new(map)),
        }
    }

    /// Adds or replaces a vehicle.
    pub async fn insert(&self, vehicle: Vehicle) {
        let mut vehicles = self.vehicles.write().await;
        vehicles.insert(vehicle.id.clone(), vehicle);
    }
}

#[async_trait]
impl VehicleCatalog for InMemoryVehicleCatalog {
    async fn find(&self, id: &str) -> Result<Option<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_catalog_find() {
        let catalog = InMemoryVehicleCatalog::from_vehicles([Vehicle::new("v1", "Fusca")]);

        let found = catalog.find("v1").await.unwrap().unwrap();
        assert_eq!(found.name, "Fusca");

        assert!(catalog.find("v2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_vehicles() {
        let catalog = InMemoryVehicleCatalog::new();
        let view = catalog.clone();

        catalog.insert(Vehicle::new("v1", "Gol")).await;
        assert!(view.find("v1").await.unwrap().is_some());

        catalog.insert(Vehicle::new("v1", "Gol G5")).await;
        assert_eq!(view.find("v1").await.unwrap().unwrap().name, "Gol G5");
    }
}
