//! Shared primitive types used across the zoo model.

/// An animal's age in whole years.
pub type Age = u32;

/// Display name of any animal or employee. Not required to be unique.
pub type EntityName = String;
