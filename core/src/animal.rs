//! Animal capability and its fixed variants.
//!
//! Every variant carries `name` and `age` plus exactly one variant-specific
//! flag. The set of variants is closed: `AnyAnimal` is the only way a zoo
//! holds animals, and the snapshot layer resolves wire names against it.

use crate::types::{Age, EntityName};

/// What every animal can do.
pub trait Animal {
    fn name(&self) -> &str;
    fn age(&self) -> Age;

    /// Fixed per-variant phrase.
    fn make_sound(&self) -> String;

    fn eat(&self) -> String {
        format!("{} is eating.", self.name())
    }
}

// ── Bird ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    pub name:    EntityName,
    pub age:     Age,
    pub can_fly: bool,
}

impl Bird {
    pub const TYPE_NAME: &'static str = "Bird";
    pub const DEFAULT_CAN_FLY: bool = true;

    pub fn new(name: impl Into<EntityName>, age: Age) -> Self {
        Self {
            name: name.into(),
            age,
            can_fly: Self::DEFAULT_CAN_FLY,
        }
    }

    pub fn with_can_fly(mut self, can_fly: bool) -> Self {
        self.can_fly = can_fly;
        self
    }

    pub fn fly(&self) -> String {
        if self.can_fly {
            format!("{} is flying.", self.name)
        } else {
            format!("{} cannot fly.", self.name)
        }
    }
}

impl Animal for Bird {
    fn name(&self) -> &str { &self.name }
    fn age(&self) -> Age   { self.age }

    fn make_sound(&self) -> String {
        format!("{} says: Chirp!", self.name)
    }
}

// ── Mammal ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mammal {
    pub name:    EntityName,
    pub age:     Age,
    pub has_fur: bool,
}

impl Mammal {
    pub const TYPE_NAME: &'static str = "Mammal";
    pub const DEFAULT_HAS_FUR: bool = true;

    pub fn new(name: impl Into<EntityName>, age: Age) -> Self {
        Self {
            name: name.into(),
            age,
            has_fur: Self::DEFAULT_HAS_FUR,
        }
    }

    pub fn with_has_fur(mut self, has_fur: bool) -> Self {
        self.has_fur = has_fur;
        self
    }

    pub fn run(&self) -> String {
        format!("{} is running.", self.name)
    }
}

impl Animal for Mammal {
    fn name(&self) -> &str { &self.name }
    fn age(&self) -> Age   { self.age }

    fn make_sound(&self) -> String {
        format!("{} says: Grr!", self.name)
    }
}

// ── Reptile ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reptile {
    pub name:        EntityName,
    pub age:         Age,
    pub is_venomous: bool,
}

impl Reptile {
    pub const TYPE_NAME: &'static str = "Reptile";
    pub const DEFAULT_IS_VENOMOUS: bool = false;

    pub fn new(name: impl Into<EntityName>, age: Age) -> Self {
        Self {
            name: name.into(),
            age,
            is_venomous: Self::DEFAULT_IS_VENOMOUS,
        }
    }

    pub fn with_is_venomous(mut self, is_venomous: bool) -> Self {
        self.is_venomous = is_venomous;
        self
    }

    pub fn crawl(&self) -> String {
        format!("{} is crawling.", self.name)
    }
}

impl Animal for Reptile {
    fn name(&self) -> &str { &self.name }
    fn age(&self) -> Age   { self.age }

    fn make_sound(&self) -> String {
        format!("{} says: Hiss!", self.name)
    }
}

// ── Closed sum ───────────────────────────────────

/// Any animal the zoo can hold.
/// Variants added here must also be added to the snapshot registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyAnimal {
    Bird(Bird),
    Mammal(Mammal),
    Reptile(Reptile),
}

impl AnyAnimal {
    /// Discriminator written to the `type` field of a snapshot.
    pub fn type_name(&self) -> &'static str {
        match self {
            AnyAnimal::Bird(_)    => Bird::TYPE_NAME,
            AnyAnimal::Mammal(_)  => Mammal::TYPE_NAME,
            AnyAnimal::Reptile(_) => Reptile::TYPE_NAME,
        }
    }

    /// The behaviour only this variant has: fly, run or crawl.
    pub fn signature_move(&self) -> String {
        match self {
            AnyAnimal::Bird(b)    => b.fly(),
            AnyAnimal::Mammal(m)  => m.run(),
            AnyAnimal::Reptile(r) => r.crawl(),
        }
    }

    fn inner(&self) -> &dyn Animal {
        match self {
            AnyAnimal::Bird(b)    => b,
            AnyAnimal::Mammal(m)  => m,
            AnyAnimal::Reptile(r) => r,
        }
    }
}

impl Animal for AnyAnimal {
    fn name(&self) -> &str        { self.inner().name() }
    fn age(&self) -> Age          { self.inner().age() }
    fn make_sound(&self) -> String { self.inner().make_sound() }
    fn eat(&self) -> String       { self.inner().eat() }
}

impl From<Bird> for AnyAnimal {
    fn from(b: Bird) -> Self { AnyAnimal::Bird(b) }
}

impl From<Mammal> for AnyAnimal {
    fn from(m: Mammal) -> Self { AnyAnimal::Mammal(m) }
}

impl From<Reptile> for AnyAnimal {
    fn from(r: Reptile) -> Self { AnyAnimal::Reptile(r) }
}

/// `make_sound()` for every animal, in order.
pub fn animal_sounds<A: Animal>(animals: &[A]) -> Vec<String> {
    animals.iter().map(Animal::make_sound).collect()
}
