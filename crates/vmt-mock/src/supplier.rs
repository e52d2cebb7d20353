//! Random supplier slot contents.
//!
//! Each slot is filled with the field set its source typically delivers,
//! not with its whole vocabulary. Date-valued fields fall within the 30 days
//! before the reference date.

use rand::Rng;

use vmt_core::{
    CalendarDate, Supplier1Data, Supplier2Data, Supplier3Data, Supplier4Data, SupplierData,
};

use crate::vocabulary::{
    pick, pick_char, COLORS, DEPOTS, FILE_TYPES, INSPECTION_ADDRESSES, INSPECTION_STATUSES, MAKES,
    MODELS, PARKING_LOCATIONS, TRANSPORT_STATUSES, TRANSPORT_TYPES, VEHICLE_STATUSES,
};

const RECENT_DAYS: u64 = 30;
const PARKING_ROWS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw each slot independently with probability `slot_probability`.
///
/// Returns `None` when no slot was drawn.
pub fn random_supplier_data<R: Rng + ?Sized>(
    rng: &mut R,
    reference: CalendarDate,
    slot_probability: f64,
) -> Option<SupplierData> {
    let data = SupplierData {
        supplier1: rng
            .gen_bool(slot_probability)
            .then(|| administrative(rng, reference)),
        supplier2: rng.gen_bool(slot_probability).then(|| vehicle_master(rng)),
        supplier3: rng
            .gen_bool(slot_probability)
            .then(|| transport(rng, reference)),
        supplier4: rng
            .gen_bool(slot_probability)
            .then(|| inspection(rng, reference)),
    };
    (!data.is_empty()).then_some(data)
}

fn administrative<R: Rng + ?Sized>(rng: &mut R, reference: CalendarDate) -> Supplier1Data {
    Supplier1Data {
        first_registration_date: Some(recent_date(rng, reference)),
        co2: Some(format!("{}g/km", rng.gen_range(0..150u32))),
        created_date: Some(recent_date(rng, reference)),
        modified_date: Some(recent_date(rng, reference)),
        file_type: Some(pick(rng, FILE_TYPES)),
        parking_location: Some(pick(rng, PARKING_LOCATIONS)),
        parking_place: Some(parking_spot(rng)),
        ..Default::default()
    }
}

fn vehicle_master<R: Rng + ?Sized>(rng: &mut R) -> Supplier2Data {
    Supplier2Data {
        status: Some(pick(rng, VEHICLE_STATUSES)),
        km: Some(rng.gen_range(0..100_000u32).to_string()),
        make: Some(pick(rng, MAKES)),
        model: Some(pick(rng, MODELS)),
        color: Some(pick(rng, COLORS)),
        location: Some(pick(rng, DEPOTS)),
        ..Default::default()
    }
}

fn transport<R: Rng + ?Sized>(rng: &mut R, reference: CalendarDate) -> Supplier3Data {
    Supplier3Data {
        status: Some(pick(rng, TRANSPORT_STATUSES)),
        transport_type: Some(pick(rng, TRANSPORT_TYPES)),
        loading_time: Some(clock_time(rng)),
        unloading_time: Some(clock_time(rng)),
        status_date: Some(recent_date(rng, reference)),
        ..Default::default()
    }
}

fn inspection<R: Rng + ?Sized>(rng: &mut R, reference: CalendarDate) -> Supplier4Data {
    Supplier4Data {
        inspection_status: Some(pick(rng, INSPECTION_STATUSES)),
        inspection_date: Some(recent_date(rng, reference)),
        inspection_mileage: Some(rng.gen_range(0..100_000u32).to_string()),
        location_address: Some(pick(rng, INSPECTION_ADDRESSES)),
        parking_space: Some(parking_spot(rng)),
        ..Default::default()
    }
}

fn recent_date<R: Rng + ?Sized>(rng: &mut R, reference: CalendarDate) -> String {
    reference
        .minus_days(rng.gen_range(0..RECENT_DAYS))
        .to_iso8601()
}

/// `H:MM` on a 24-hour clock.
fn clock_time<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}:{:02}", rng.gen_range(0..24u32), rng.gen_range(0..60u32))
}

/// Row letter and bay number, e.g. `K-42`.
fn parking_spot<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}-{}", pick_char(rng, PARKING_ROWS), rng.gen_range(0..100u32))
}
