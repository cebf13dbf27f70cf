//! Domain layer: rental entities, the age-based pricing rule and the ports
//! the application layer depends on.

pub mod customer;
pub mod ports;
pub mod pricing;
pub mod tax;
pub mod transaction;
pub mod vehicle;
