use crate::domain::customer::Customer;
use crate::domain::ports::{ClockBox, VehicleCatalogBox};
use crate::domain::pricing;
use crate::domain::tax::TaxTable;
use crate::domain::transaction::Transaction;
use crate::domain::vehicle::{Vehicle, VehicleCategory};
use crate::error::{RentalError, Result};
use crate::format::Formatting;
use crate::infrastructure::clock::SystemClock;
use chrono::Days;
use rand::Rng;
use tracing::{debug, info, warn};

/// Quotes rentals and assigns a vehicle from the requested category.
///
/// The service holds no mutable state: the catalog, the tax table and the
/// formatting are read-only, so one instance can serve concurrent requests
/// behind an `Arc`. Two concurrent requests may be handed the same vehicle.
pub struct RentalQuoteService {
    catalog: VehicleCatalogBox,
    taxes: TaxTable,
    formatting: Formatting,
    clock: ClockBox,
}

impl RentalQuoteService {
    /// Creates a new `RentalQuoteService` that dates transactions with the
    /// system clock.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Where vehicle ids are resolved.
    /// * `taxes` - Age brackets and their price multipliers.
    /// * `formatting` - Currency and date presentation for transactions.
    pub fn new(catalog: VehicleCatalogBox, taxes: TaxTable, formatting: Formatting) -> Self {
        Self {
            catalog,
            taxes,
            formatting,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the clock used to compute due dates.
    pub fn with_clock(mut self, clock: ClockBox) -> Self {
        self.clock = clock;
        self
    }

    /// Picks one of the category's vehicle ids uniformly at random.
    pub fn select_vehicle_id<'a>(&self, category: &'a VehicleCategory) -> Result<&'a str> {
        if category.vehicle_ids.is_empty() {
            return Err(RentalError::EmptyCategory(category.id.clone()));
        }
        let index = rand::thread_rng().gen_range(0..category.vehicle_ids.len());
        Ok(category.vehicle_ids[index].as_str())
    }

    /// Selects a vehicle id from the category and resolves it in the catalog.
    ///
    /// "Available" only means listed under the category; nothing is reserved.
    pub async fn resolve_available_vehicle(&self, category: &VehicleCategory) -> Result<Vehicle> {
        let id = self.select_vehicle_id(category)?;
        debug!(category = %category.id, vehicle = id, "selected vehicle");

        self.catalog
            .find(id)
            .await?
            .ok_or_else(|| RentalError::VehicleNotFound(id.to_string()))
    }

    /// Computes the age-adjusted price for the rental and formats it with
    /// the configured currency.
    pub fn compute_final_price(
        &self,
        customer: &Customer,
        category: &VehicleCategory,
        number_of_days: u32,
    ) -> Result<String> {
        let price = pricing::final_price(&self.taxes, customer, category, number_of_days)
            .inspect_err(|err| warn!(age = customer.age, error = %err, "price computation failed"))?;
        Ok(self.formatting.currency.format(price))
    }

    /// Rents a vehicle of `category` to `customer` for `number_of_days`.
    ///
    /// Vehicle resolution and pricing run concurrently; the first failure of
    /// either is returned as is.
    pub async fn rent(
        &self,
        customer: Customer,
        category: &VehicleCategory,
        number_of_days: u32,
    ) -> Result<Transaction> {
        let (vehicle, amount) = tokio::try_join!(
            self.resolve_available_vehicle(category),
            async { self.compute_final_price(&customer, category, number_of_days) },
        )?;

        let due = self
            .clock
            .today()
            .checked_add_days(Days::new(u64::from(number_of_days)))
            .ok_or(RentalError::DueDateOutOfRange {
                days: number_of_days,
            })?;
        let due_date = self.formatting.date.format(due);

        info!(vehicle = %vehicle.id, amount = %amount, due_date = %due_date, "rental quoted");

        Ok(Transaction {
            customer,
            due_date,
            vehicle,
            amount,
        })
    }
}
