//! SQL shared by every backend. Placeholders use the `$N` form, which both
//! PostgreSQL and SQLite accept.

pub const INSERT_SLOT: &str = r#"
    INSERT INTO parking_slots (slot_number, is_free, license_plate, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, slot_number, is_free, license_plate, created_at, updated_at, deleted_at
"#;

pub const SELECT_SLOT_BY_ID: &str = r#"
    SELECT id, slot_number, is_free, license_plate, created_at, updated_at, deleted_at
    FROM parking_slots
    WHERE id = $1
"#;

pub const SELECT_FREE_SLOTS: &str = r#"
    SELECT id, slot_number, is_free, license_plate, created_at, updated_at, deleted_at
    FROM parking_slots
    WHERE is_free = TRUE
    ORDER BY slot_number ASC, id ASC
"#;

pub const COUNT_FREE_SLOTS: &str = "SELECT COUNT(*) FROM parking_slots WHERE is_free = TRUE";

pub const COUNT_SLOTS: &str = "SELECT COUNT(*) FROM parking_slots";

/// Only matches a slot that is currently free, so the availability check and
/// the write are one statement.
pub const OCCUPY_SLOT: &str = r#"
    UPDATE parking_slots
    SET is_free = FALSE, license_plate = $2, updated_at = $3
    WHERE id = $1 AND is_free = TRUE
"#;

pub const FREE_SLOT: &str = r#"
    UPDATE parking_slots
    SET is_free = TRUE, license_plate = NULL, updated_at = $2
    WHERE id = $1
"#;

pub const INSERT_CAR: &str = r#"
    INSERT INTO cars (license_plate, created_at, updated_at)
    VALUES ($1, $2, $3)
    ON CONFLICT (license_plate) DO NOTHING
    RETURNING id, license_plate, created_at, updated_at, deleted_at
"#;

pub const SELECT_CAR_BY_PLATE: &str = r#"
    SELECT id, license_plate, created_at, updated_at, deleted_at
    FROM cars
    WHERE license_plate = $1
"#;

pub const INSERT_TICKET: &str = r#"
    INSERT INTO tickets (car_id, parking_slot_id, entry_time, exit_time, paid, created_at, updated_at)
    VALUES ($1, $2, $3, $4, FALSE, $5, $6)
    RETURNING id, car_id, parking_slot_id, entry_time, exit_time, paid, created_at, updated_at, deleted_at
"#;

pub const SELECT_TICKET_BY_ID: &str = r#"
    SELECT id, car_id, parking_slot_id, entry_time, exit_time, paid, created_at, updated_at, deleted_at
    FROM tickets
    WHERE id = $1
"#;

pub const CLOSE_TICKET: &str = r#"
    UPDATE tickets
    SET exit_time = $2, updated_at = $3
    WHERE id = $1
"#;

pub const MARK_TICKET_PAID: &str = r#"
    UPDATE tickets
    SET paid = TRUE, updated_at = $2
    WHERE id = $1
"#;

pub const DELETE_TICKET: &str = "DELETE FROM tickets WHERE id = $1";
