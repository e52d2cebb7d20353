//! Random vehicle identities: VIN, licence plate, and contract number.

use std::collections::HashSet;

use rand::Rng;

use vmt_core::{ContractNumber, LicensePlate, Vin, VIN_ALPHABET, VIN_LENGTH};

use crate::vocabulary::{pick_char, PLATE_LETTERS};

/// The identifiers shared by every movement of one synthetic vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleIdentity {
    pub vin: Vin,
    pub license_plate: LicensePlate,
    pub contract_number: ContractNumber,
}

impl VehicleIdentity {
    /// Draw an identity whose VIN is not in `taken`, and mark it taken.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, taken: &mut HashSet<Vin>) -> Self {
        let vin = loop {
            let candidate = random_vin(rng);
            if taken.insert(candidate.clone()) {
                break candidate;
            }
        };
        Self {
            vin,
            license_plate: random_license_plate(rng),
            contract_number: random_contract_number(rng),
        }
    }
}

/// 17 characters from the VIN alphabet.
pub fn random_vin<R: Rng + ?Sized>(rng: &mut R) -> Vin {
    let vin: String = (0..VIN_LENGTH).map(|_| pick_char(rng, VIN_ALPHABET)).collect();
    Vin::new(vin)
}

/// `LL-DDD-LL`.
pub fn random_license_plate<R: Rng + ?Sized>(rng: &mut R) -> LicensePlate {
    let mut plate = String::with_capacity(9);
    plate.push(pick_char(rng, PLATE_LETTERS));
    plate.push(pick_char(rng, PLATE_LETTERS));
    plate.push('-');
    plate.push_str(&format!("{:03}", rng.gen_range(0..1000u32)));
    plate.push('-');
    plate.push(pick_char(rng, PLATE_LETTERS));
    plate.push(pick_char(rng, PLATE_LETTERS));
    LicensePlate::new(plate)
}

/// `CTR-` followed by a six-digit number without leading zero.
pub fn random_contract_number<R: Rng + ?Sized>(rng: &mut R) -> ContractNumber {
    ContractNumber::new(format!("CTR-{}", rng.gen_range(100_000..=999_999u32)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_identifiers_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let vin = random_vin(&mut rng);
            assert!(Vin::parse(vin.as_str()).is_ok(), "bad VIN {vin}");
            let plate = random_license_plate(&mut rng);
            assert!(LicensePlate::parse(plate.as_str()).is_ok(), "bad plate {plate}");
            let contract = random_contract_number(&mut rng);
            assert!(ContractNumber::parse(contract.as_str()).is_ok(), "bad contract {contract}");
        }
    }

    #[test]
    fn test_identity_vins_are_unique() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut taken = HashSet::new();
        let identities: Vec<_> = (0..100)
            .map(|_| VehicleIdentity::random(&mut rng, &mut taken))
            .collect();
        assert_eq!(taken.len(), 100);
        assert_eq!(identities.len(), 100);
    }
}
