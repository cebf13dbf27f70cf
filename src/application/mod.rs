//! Application layer orchestrating the rental flow.
//!
//! This module defines the `RentalQuoteService`, the entry point that turns a
//! customer, a category and a duration into a priced transaction.

pub mod rental;
