pub mod cars;
pub mod parking_slots;
pub mod tickets;
