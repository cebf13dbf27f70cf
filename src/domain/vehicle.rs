use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single rentable vehicle as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub gas_available: bool,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            release_year: None,
            available: true,
            gas_available: true,
        }
    }
}

/// A class of vehicle with a base daily price and the ids listed under it.
///
/// Being listed here is the only notion of availability: nothing checks
/// whether a listed vehicle is already rented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: Decimal,
    #[serde(alias = "carIds")]
    pub vehicle_ids: Vec<String>,
}

impl VehicleCategory {
    pub fn new(id: impl Into<String>, price: Decimal, vehicle_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            price,
            vehicle_ids,
        }
    }
}
