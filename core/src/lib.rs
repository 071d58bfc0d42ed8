//! zoo-core: animals, employees, the zoo that holds them, and the JSON
//! snapshot that persists it.

pub mod animal;
pub mod config;
pub mod employee;
pub mod error;
pub mod snapshot;
pub mod types;
pub mod zoo;

pub use animal::{Animal, AnyAnimal, Bird, Mammal, Reptile};
pub use employee::{AnyEmployee, Employee, Keeper, Veterinarian};
pub use error::{ZooError, ZooResult};
pub use zoo::{LoadOutcome, Zoo};
