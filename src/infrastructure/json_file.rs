use crate::domain::ports::VehicleCatalog;
use crate::domain::vehicle::Vehicle;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A vehicle catalog backed by a JSON file holding an array of vehicles.
///
/// The file is read and parsed on every lookup, so edits made while the
/// process runs are picked up by the next `find`.
#[derive(Debug, Clone)]
pub struct JsonFileVehicleCatalog {
    path: PathBuf,
}

impl JsonFileVehicleCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> Result<Vec<Vehicle>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let vehicles: Vec<Vehicle> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = vehicles.len(), "loaded vehicle catalog");
        Ok(vehicles)
    }
}

#[async_trait]
impl VehicleCatalog for JsonFileVehicleCatalog {
    async fn find(&self, id: &str) -> Result<Option<Vehicle>> {
        let vehicles = self.load().await?;
        Ok(vehicles.into_iter().find(|vehicle| vehicle.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentalError;

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let catalog = JsonFileVehicleCatalog::new("does/not/exist.json");
        assert!(matches!(
            catalog.find("v1").await,
            Err(RentalError::IoError(_))
        ));
    }
}
