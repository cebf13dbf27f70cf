use super::customer::Customer;
use super::tax::TaxTable;
use super::vehicle::VehicleCategory;
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;

/// Unformatted rental price: `multiplier × category.price × number_of_days`.
///
/// The multiplier comes from the bracket of `taxes` containing the
/// customer's age. Fails with [`RentalError::TaxBracketNotFound`] when no
/// bracket does and with [`RentalError::PriceOutOfRange`] when the product
/// does not fit in a `Decimal`.
pub fn final_price(
    taxes: &TaxTable,
    customer: &Customer,
    category: &VehicleCategory,
    number_of_days: u32,
) -> Result<Decimal> {
    let bracket = taxes
        .bracket_for(customer.age)
        .ok_or(RentalError::TaxBracketNotFound(customer.age))?;

    bracket
        .multiplier
        .checked_mul(category.price)
        .and_then(|daily| daily.checked_mul(Decimal::from(number_of_days)))
        .ok_or(RentalError::PriceOutOfRange {
            days: number_of_days,
        })
}
