//! # Slot allocation
//!
//! Free/occupied transitions of parking slots, plus the read operations the
//! API exposes over them. A slot is occupied exactly when it carries an
//! occupant plate; every transition here keeps the two in step.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    errors::{ParkingError, ParkingResult},
    models::slot::{NewParkingSlot, ParkingSlot},
    store::SlotRepository,
};

/// Result of seeding an empty slot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    AlreadyPresent(i64),
}

pub fn slot_not_free() -> ParkingError {
    ParkingError::Conflict("Parking slot is not free".to_string())
}

/// Occupies `slot_id` with `plate`.
///
/// Fails with `Conflict` when the slot does not exist or is taken.
pub async fn allocate<T>(tx: &mut T, slot_id: i64, plate: &str, now: DateTime<Utc>) -> ParkingResult<()>
where
    T: SlotRepository + ?Sized,
{
    if !tx.occupy_slot(slot_id, plate, now).await? {
        debug!(slot_id, plate, "Slot allocation refused");
        return Err(slot_not_free());
    }

    debug!(slot_id, plate, "Slot allocated");
    Ok(())
}

/// Frees `slot_id`. Releasing a free slot is a no-op, not an error.
pub async fn release<T>(tx: &mut T, slot_id: i64, now: DateTime<Utc>) -> ParkingResult<()>
where
    T: SlotRepository + ?Sized,
{
    tx.free_slot(slot_id, now).await?;
    debug!(slot_id, "Slot released");
    Ok(())
}

/// All free slots. An empty result is reported as `NotFound`.
pub async fn list_free<T>(tx: &mut T) -> ParkingResult<Vec<ParkingSlot>>
where
    T: SlotRepository + ?Sized,
{
    let slots = tx.list_free_slots().await?;
    if slots.is_empty() {
        return Err(ParkingError::NotFound(
            "No free parking slots available".to_string(),
        ));
    }

    Ok(slots)
}

pub async fn count_free<T>(tx: &mut T) -> ParkingResult<i64>
where
    T: SlotRepository + ?Sized,
{
    Ok(tx.count_free_slots().await?)
}

pub async fn get_slot<T>(tx: &mut T, slot_id: i64) -> ParkingResult<ParkingSlot>
where
    T: SlotRepository + ?Sized,
{
    tx.get_slot(slot_id)
        .await?
        .ok_or_else(|| ParkingError::NotFound("Parking slot not found".to_string()))
}

/// Checks one batch entry and returns it with a blank plate dropped to `None`.
fn validate_new_slot(slot: &NewParkingSlot) -> ParkingResult<NewParkingSlot> {
    if slot.slot_number <= 0 {
        return Err(ParkingError::Validation(format!(
            "slot_number must be positive, got {}",
            slot.slot_number
        )));
    }

    let license_plate = slot
        .license_plate
        .as_deref()
        .filter(|plate| !plate.trim().is_empty())
        .map(str::to_string);
    match (slot.is_free, license_plate.is_some()) {
        (true, true) => Err(ParkingError::Validation(format!(
            "slot {} is marked free but has a license plate",
            slot.slot_number
        ))),
        (false, false) => Err(ParkingError::Validation(format!(
            "slot {} is marked occupied but has no license plate",
            slot.slot_number
        ))),
        _ => Ok(NewParkingSlot {
            slot_number: slot.slot_number,
            is_free: slot.is_free,
            license_plate,
        }),
    }
}

/// Inserts a batch of slots. Every entry is validated before the first insert.
pub async fn create_slots<T>(
    tx: &mut T,
    slots: &[NewParkingSlot],
    now: DateTime<Utc>,
) -> ParkingResult<usize>
where
    T: SlotRepository + ?Sized,
{
    let slots = slots
        .iter()
        .map(validate_new_slot)
        .collect::<ParkingResult<Vec<_>>>()?;

    for slot in &slots {
        tx.insert_slot(slot, now).await?;
    }

    info!(count = slots.len(), "Parking slots created");
    Ok(slots.len())
}

/// Creates free slots numbered `1..=count` when the slot table is empty.
pub async fn seed_slots<T>(tx: &mut T, count: u32, now: DateTime<Utc>) -> ParkingResult<SeedOutcome>
where
    T: SlotRepository + ?Sized,
{
    let last_number = i32::try_from(count).map_err(|_| {
        ParkingError::Validation(format!(
            "cannot seed {count} slots, at most {} are supported",
            i32::MAX
        ))
    })?;

    let existing = tx.count_slots().await?;
    if existing > 0 {
        info!(existing, "Parking slots already present, skipping seed");
        return Ok(SeedOutcome::AlreadyPresent(existing));
    }

    let slots: Vec<NewParkingSlot> = (1..=last_number).map(NewParkingSlot::free).collect();
    let created = create_slots(tx, &slots, now).await?;

    Ok(SeedOutcome::Seeded(created))
}
