//! Employee capability and its fixed variants.
//!
//! RULE: a position is never supplied by the caller.
//! It is a constant of the variant, so it cannot drift from the type.

use crate::{animal::Animal, types::EntityName};

pub const KEEPER_TITLE: &str = "Zoo Keeper";
pub const VETERINARIAN_TITLE: &str = "Veterinarian";

pub trait Employee {
    fn name(&self) -> &str;
    fn position(&self) -> &'static str;
}

/// Looks after the animals day to day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keeper {
    pub name: EntityName,
}

impl Keeper {
    pub const TYPE_NAME: &'static str = "Keeper";

    pub fn new(name: impl Into<EntityName>) -> Self {
        Self { name: name.into() }
    }

    pub fn feed_animal(&self, animal: &dyn Animal) -> String {
        format!("{} is feeding {}.", self.name, animal.name())
    }
}

impl Employee for Keeper {
    fn name(&self) -> &str { &self.name }
    fn position(&self) -> &'static str { KEEPER_TITLE }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veterinarian {
    pub name: EntityName,
}

impl Veterinarian {
    pub const TYPE_NAME: &'static str = "Veterinarian";

    pub fn new(name: impl Into<EntityName>) -> Self {
        Self { name: name.into() }
    }

    pub fn treat_animal(&self, animal: &dyn Animal) -> String {
        format!("{} is treating {}.", self.name, animal.name())
    }
}

impl Employee for Veterinarian {
    fn name(&self) -> &str { &self.name }
    fn position(&self) -> &'static str { VETERINARIAN_TITLE }
}

/// Any employee the zoo can hire.
/// Variants added here must also be added to the snapshot registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyEmployee {
    Keeper(Keeper),
    Veterinarian(Veterinarian),
}

impl AnyEmployee {
    pub fn type_name(&self) -> &'static str {
        match self {
            AnyEmployee::Keeper(_)       => Keeper::TYPE_NAME,
            AnyEmployee::Veterinarian(_) => Veterinarian::TYPE_NAME,
        }
    }

    /// Feed or treat, depending on the role.
    pub fn attend(&self, animal: &dyn Animal) -> String {
        match self {
            AnyEmployee::Keeper(k)       => k.feed_animal(animal),
            AnyEmployee::Veterinarian(v) => v.treat_animal(animal),
        }
    }
}

impl Employee for AnyEmployee {
    fn name(&self) -> &str {
        match self {
            AnyEmployee::Keeper(k)       => k.name(),
            AnyEmployee::Veterinarian(v) => v.name(),
        }
    }

    fn position(&self) -> &'static str {
        match self {
            AnyEmployee::Keeper(k)       => k.position(),
            AnyEmployee::Veterinarian(v) => v.position(),
        }
    }
}

impl From<Keeper> for AnyEmployee {
    fn from(k: Keeper) -> Self { AnyEmployee::Keeper(k) }
}

impl From<Veterinarian> for AnyEmployee {
    fn from(v: Veterinarian) -> Self { AnyEmployee::Veterinarian(v) }
}
