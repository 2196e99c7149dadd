//! Data source abstraction trait definition

mod customer_source;

pub use customer_source::{CustomerSource, StaticCustomerSource};
