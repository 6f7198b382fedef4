pub mod cars;
pub mod health;
pub mod parking_slots;
pub mod tickets;
