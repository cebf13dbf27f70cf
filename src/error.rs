use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("No tax bracket covers customer age {0}")]
    TaxBracketNotFound(u32),
    #[error("Vehicle {0} not found in catalog")]
    VehicleNotFound(String),
    #[error("Category {0} has no candidate vehicles")]
    EmptyCategory(String),
    #[error("Due date {days} days from today is out of range")]
    DueDateOutOfRange { days: u32 },
    #[error("Price for {days} days is out of range")]
    PriceOutOfRange { days: u32 },
    #[error("Catalog error: {0}")]
    CatalogError(String),
}

pub type Result<T> = std::result::Result<T, RentalError>;
