//! Parties domain module (customers).
//!
//! Holds the data captured by the new-customer form. Persistence lives in
//! `distributor-infra`.

pub mod customer;

pub use customer::NewCustomer;
