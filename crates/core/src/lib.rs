//! # Parking Core
//!
//! Domain layer of the parking backend: the entity models shared by the store
//! and the API, the error taxonomy, the store traits, and the operations that
//! move slots and tickets through their lifecycle.
//!
//! Operations never open or commit transactions themselves. Callers begin a
//! transaction through [`store::ParkingStore`], pass the handle to one or more
//! operations and commit it; dropping the handle rolls everything back.

pub mod allocation;
pub mod clock;
pub mod errors;
pub mod lifecycle;
pub mod models;
pub mod pricing;
pub mod registry;
pub mod store;
