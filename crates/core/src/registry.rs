//! Car registration. A car must be registered before it can enter a slot.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    errors::{ParkingError, ParkingResult},
    models::car::Car,
    store::CarRepository,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Created(Car),
    AlreadyRegistered(Car),
}

impl Registration {
    pub fn car(&self) -> &Car {
        match self {
            Registration::Created(car) | Registration::AlreadyRegistered(car) => car,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Registration::Created(_) => "Car created successfully",
            Registration::AlreadyRegistered(_) => "Car already exists",
        }
    }
}

/// Registers `license_plate`, or returns the existing car for it.
pub async fn register_car<T>(
    tx: &mut T,
    license_plate: &str,
    now: DateTime<Utc>,
) -> ParkingResult<Registration>
where
    T: CarRepository + ?Sized,
{
    if license_plate.trim().is_empty() {
        return Err(ParkingError::Validation(
            "license_plate must not be empty".to_string(),
        ));
    }

    if let Some(car) = tx.insert_car(license_plate, now).await? {
        info!(car_id = car.id, license_plate, "Car registered");
        return Ok(Registration::Created(car));
    }

    let car = tx
        .get_car_by_plate(license_plate)
        .await?
        .ok_or_else(|| {
            ParkingError::Internal(
                format!("car {license_plate} conflicted on insert but could not be read back").into(),
            )
        })?;

    Ok(Registration::AlreadyRegistered(car))
}

pub async fn get_car<T>(tx: &mut T, license_plate: &str) -> ParkingResult<Car>
where
    T: CarRepository + ?Sized,
{
    tx.get_car_by_plate(license_plate)
        .await?
        .ok_or_else(|| ParkingError::NotFound("Car not found".to_string()))
}
