//! The zoo aggregate — owns its animals and employees, in insertion order.
//!
//! Sequences are append-only. Persistence replaces the whole state at
//! once through `ZooSnapshot`; there is no merge.

use crate::{
    animal::{Animal, AnyAnimal},
    employee::{AnyEmployee, Employee},
    error::ZooResult,
    snapshot::ZooSnapshot,
};
use std::path::Path;

/// Result of `Zoo::load_from_file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// No file at the path. The zoo was left as it was.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zoo {
    name:      String,
    animals:   Vec<AnyAnimal>,
    employees: Vec<AnyEmployee>,
}

impl Zoo {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), Vec::new(), Vec::new())
    }

    pub(crate) fn from_parts(name: String, animals: Vec<AnyAnimal>, employees: Vec<AnyEmployee>) -> Self {
        Self { name, animals, employees }
    }

    pub fn name(&self) -> &str              { &self.name }
    pub fn animals(&self) -> &[AnyAnimal]   { &self.animals }
    pub fn employees(&self) -> &[AnyEmployee] { &self.employees }

    pub fn add_animal(&mut self, animal: impl Into<AnyAnimal>) {
        let animal = animal.into();
        log::info!("Added {} to the zoo.", animal.name());
        self.animals.push(animal);
    }

    pub fn add_employee(&mut self, employee: impl Into<AnyEmployee>) {
        let employee = employee.into();
        log::info!("Hired {} as a {}.", employee.name(), employee.position());
        self.employees.push(employee);
    }

    /// First animal with this name. Names are not unique.
    pub fn find_animal(&self, name: &str) -> Option<&AnyAnimal> {
        self.animals.iter().find(|a| a.name() == name)
    }

    /// `make_sound()` of every animal, in insertion order.
    pub fn animal_sounds(&self) -> Vec<String> {
        crate::animal::animal_sounds(&self.animals)
    }

    /// Overwrites any existing file at `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ZooResult<()> {
        let path = path.as_ref();
        ZooSnapshot::capture(self)?.write_to_file(path)?;
        log::info!("Zoo state saved to {}.", path.display());
        Ok(())
    }

    /// Replace this zoo's state with the snapshot at `path`.
    ///
    /// A missing file is not an error. Any other failure (bad JSON,
    /// unknown type, missing field) leaves the zoo untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> ZooResult<LoadOutcome> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("No saved state found.");
            log::debug!("looked for {}", path.display());
            return Ok(LoadOutcome::NotFound);
        }

        let restored = ZooSnapshot::read_from_file(path)?.restore()?;
        log::debug!(
            "restored {} animals and {} employees from {}",
            restored.animals.len(),
            restored.employees.len(),
            path.display()
        );
        *self = restored;
        log::info!("Zoo state loaded from {}.", path.display());
        Ok(LoadOutcome::Loaded)
    }
}
