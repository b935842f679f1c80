//! Identity and date capabilities.
//!
//! Generators ask for names, ids and dates through these traits so the name
//! corpus (or an entirely different faker) can be swapped without touching
//! any generation logic.

use chrono::NaiveDate;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::SeededRng;

pub trait IdentitySource {
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    /// Stable id for the employee at `index`; depends on the index only.
    fn employee_id(&mut self, index: u64) -> Uuid;
}

pub trait DateSource {
    fn date_in_year(&mut self, year: i32) -> NaiveDate;
}

impl DateSource for SeededRng {
    fn date_in_year(&mut self, year: i32) -> NaiveDate {
        SeededRng::date_in_year(self, year)
    }
}

/// Version-4 UUID whose random bits come from a stream seeded with `index`.
pub fn index_uuid(index: u64) -> Uuid {
    let mut rng = ChaCha8Rng::seed_from_u64(index);
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty",
    "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul",
    "Emily", "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda",
    "Brian", "Melissa", "George", "Deborah", "Timothy", "Stephanie", "Ronald", "Rebecca",
    "Jason", "Laura", "Edward", "Helen", "Jeffrey", "Sharon", "Ryan", "Cynthia", "Jacob",
    "Kathleen", "Gary", "Amy", "Nicholas", "Angela", "Eric", "Shirley", "Jonathan", "Anna",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
    "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris",
    "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper",
];

/// Built-in name corpus drawn with its own seeded stream.
#[derive(Debug, Clone)]
pub struct CatalogIdentity {
    rng: SeededRng,
}

impl CatalogIdentity {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::new(seed),
        }
    }

    fn pick(&mut self, names: &[&str]) -> String {
        names[self.rng.index(names.len())].to_string()
    }
}

impl IdentitySource for CatalogIdentity {
    fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES)
    }

    fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES)
    }

    fn employee_id(&mut self, index: u64) -> Uuid {
        index_uuid(index)
    }
}
