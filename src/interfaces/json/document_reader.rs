use crate::domain::customer::Customer;
use crate::domain::vehicle::VehicleCategory;
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads single JSON documents (categories, customers) from any `Read`
/// source such as a `File` or stdin.
pub struct DocumentReader<R: Read> {
    source: R,
}

impl<R: Read> DocumentReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn category(self) -> Result<VehicleCategory> {
        self.document()
    }

    pub fn customer(self) -> Result<Customer> {
        self.document()
    }

    fn document<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
