use super::customer::Customer;
use super::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// Outcome of a rental request. Built once by the service and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer: Customer,
    pub due_date: String,
    pub vehicle: Vehicle,
    pub amount: String,
}
