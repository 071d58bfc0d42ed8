//! Snapshot serialization — full zoo state to/from JSON.
//!
//! The document is a single object:
//!   { name, animals: [{type, name, age, attributes}],
//!           employees: [{type, name, position, attributes}] }
//!
//! RULES:
//!   - `type` is resolved against a closed table below. Anything else is
//!     an `UnknownVariant` error, never a guess.
//!   - `attributes` carries only the variant-specific fields.
//!   - A snapshot is decoded completely before it touches a zoo.

use crate::{
    animal::{Animal, AnyAnimal, Bird, Mammal, Reptile},
    employee::{AnyEmployee, Employee, Keeper, Veterinarian},
    error::{ZooError, ZooResult},
    types::{Age, EntityName},
    zoo::Zoo,
};
use serde::{Deserialize, Serialize};
use serde_json::{ser::PrettyFormatter, Value};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Wire name older snapshots used for keepers. Accepted on load only.
pub const LEGACY_KEEPER_TYPE_NAME: &str = "ZooKeeper";

pub const ANIMAL_TYPE_NAMES: &[&str] = &[Bird::TYPE_NAME, Mammal::TYPE_NAME, Reptile::TYPE_NAME];
pub const EMPLOYEE_TYPE_NAMES: &[&str] = &[Keeper::TYPE_NAME, Veterinarian::TYPE_NAME];

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooSnapshot {
    pub name:      String,
    pub animals:   Vec<AnimalRecord>,
    pub employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(rename = "type")]
    pub type_name:  String,
    pub name:       EntityName,
    pub age:        Age,
    pub attributes: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "type")]
    pub type_name:  String,
    pub name:       EntityName,
    pub position:   String,
    pub attributes: Value,
}

// ── Variant attribute sets ───────────────────────
// Missing flags fall back to the constructor defaults.
// Unexpected keys are rejected.

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BirdAttributes {
    #[serde(default = "default_can_fly")]
    can_fly: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MammalAttributes {
    #[serde(default = "default_has_fur")]
    has_fur: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReptileAttributes {
    #[serde(default = "default_is_venomous")]
    is_venomous: bool,
}

/// Employees carry no variant fields. A stray `position` is tolerated
/// and dropped; the variant decides the position.
#[derive(Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EmployeeAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Value>,
}

fn default_can_fly() -> bool     { Bird::DEFAULT_CAN_FLY }
fn default_has_fur() -> bool     { Mammal::DEFAULT_HAS_FUR }
fn default_is_venomous() -> bool { Reptile::DEFAULT_IS_VENOMOUS }

impl ZooSnapshot {
    pub fn capture(zoo: &Zoo) -> ZooResult<Self> {
        let animals = zoo
            .animals()
            .iter()
            .map(AnimalRecord::capture)
            .collect::<ZooResult<Vec<_>>>()?;
        let employees = zoo
            .employees()
            .iter()
            .map(EmployeeRecord::capture)
            .collect::<ZooResult<Vec<_>>>()?;

        Ok(Self {
            name: zoo.name().to_string(),
            animals,
            employees,
        })
    }

    /// Resolve every record against the variant table.
    /// Fails on the first record that does not resolve.
    pub fn restore(self) -> ZooResult<Zoo> {
        let animals = self
            .animals
            .into_iter()
            .map(AnimalRecord::restore)
            .collect::<ZooResult<Vec<_>>>()?;
        let employees = self
            .employees
            .into_iter()
            .map(EmployeeRecord::restore)
            .collect::<ZooResult<Vec<_>>>()?;

        Ok(Zoo::from_parts(self.name, animals, employees))
    }

    pub fn from_json(json: &str) -> ZooResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed with four-space indentation.
    pub fn to_json_pretty(&self) -> ZooResult<String> {
        let mut buf = Vec::new();
        self.write_pretty(&mut buf)?;
        let json = String::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(json)
    }

    pub fn write_pretty<W: Write>(&self, writer: W) -> ZooResult<()> {
        let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        Ok(())
    }

    /// Create or truncate `path` and write the snapshot into it.
    pub fn write_to_file(&self, path: &Path) -> ZooResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_pretty(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from_file(path: &Path) -> ZooResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl AnimalRecord {
    pub fn capture(animal: &AnyAnimal) -> ZooResult<Self> {
        let attributes = match animal {
            AnyAnimal::Bird(b)    => serde_json::to_value(BirdAttributes { can_fly: b.can_fly })?,
            AnyAnimal::Mammal(m)  => serde_json::to_value(MammalAttributes { has_fur: m.has_fur })?,
            AnyAnimal::Reptile(r) => serde_json::to_value(ReptileAttributes { is_venomous: r.is_venomous })?,
        };
        Ok(Self {
            type_name: animal.type_name().to_string(),
            name: animal.name().to_string(),
            age: animal.age(),
            attributes,
        })
    }

    pub fn restore(self) -> ZooResult<AnyAnimal> {
        let animal: AnyAnimal = match self.type_name.as_str() {
            Bird::TYPE_NAME => {
                let attrs: BirdAttributes = serde_json::from_value(self.attributes)?;
                Bird::new(self.name, self.age).with_can_fly(attrs.can_fly).into()
            }
            Mammal::TYPE_NAME => {
                let attrs: MammalAttributes = serde_json::from_value(self.attributes)?;
                Mammal::new(self.name, self.age).with_has_fur(attrs.has_fur).into()
            }
            Reptile::TYPE_NAME => {
                let attrs: ReptileAttributes = serde_json::from_value(self.attributes)?;
                Reptile::new(self.name, self.age).with_is_venomous(attrs.is_venomous).into()
            }
            other => {
                return Err(ZooError::UnknownVariant {
                    family:    "animal",
                    type_name: other.to_string(),
                    known:     ANIMAL_TYPE_NAMES,
                })
            }
        };
        Ok(animal)
    }
}

impl EmployeeRecord {
    pub fn capture(employee: &AnyEmployee) -> ZooResult<Self> {
        Ok(Self {
            type_name: employee.type_name().to_string(),
            name: employee.name().to_string(),
            position: employee.position().to_string(),
            attributes: serde_json::to_value(EmployeeAttributes::default())?,
        })
    }

    pub fn restore(self) -> ZooResult<AnyEmployee> {
        // Validated for unexpected keys, otherwise unused.
        let _: EmployeeAttributes = serde_json::from_value(self.attributes)?;

        let employee: AnyEmployee = match self.type_name.as_str() {
            Keeper::TYPE_NAME | LEGACY_KEEPER_TYPE_NAME => Keeper::new(self.name).into(),
            Veterinarian::TYPE_NAME => Veterinarian::new(self.name).into(),
            other => {
                return Err(ZooError::UnknownVariant {
                    family:    "employee",
                    type_name: other.to_string(),
                    known:     EMPLOYEE_TYPE_NAMES,
                })
            }
        };

        if let Some(stored) = overridden_position(&self.position, &employee) {
            log::warn!(
                "employee {}: stored position '{}' does not match '{}', using '{}'",
                employee.name(),
                stored,
                employee.position(),
                employee.position()
            );
        }
        Ok(employee)
    }
}

/// The stored position when it disagrees with the variant's title.
fn overridden_position<'a>(stored: &'a str, employee: &AnyEmployee) -> Option<&'a str> {
    (stored != employee.position()).then_some(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bird_record_matches_wire_layout() {
        let bird: AnyAnimal = Bird::new("Kesha", 2).into();
        let record = AnimalRecord::capture(&bird).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"type": "Bird", "name": "Kesha", "age": 2, "attributes": {"can_fly": true}})
        );
    }

    #[test]
    fn employee_record_has_empty_attributes() {
        let vet: AnyEmployee = Veterinarian::new("Stas").into();
        let record = EmployeeRecord::capture(&vet).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"type": "Veterinarian", "name": "Stas", "position": "Veterinarian", "attributes": {}})
        );
    }

    #[test]
    fn missing_flag_takes_constructor_default() {
        let record: AnimalRecord =
            serde_json::from_value(json!({"type": "Reptile", "name": "Kaa", "age": 3, "attributes": {}}))
                .unwrap();
        assert_eq!(
            record.restore().unwrap(),
            AnyAnimal::Reptile(Reptile::new("Kaa", 3))
        );
    }

    #[test]
    fn unexpected_attribute_is_rejected() {
        let record: AnimalRecord = serde_json::from_value(
            json!({"type": "Mammal", "name": "Leo", "age": 5, "attributes": {"can_fly": true}}),
        )
        .unwrap();
        assert!(matches!(record.restore(), Err(ZooError::Serialization(_))));
    }

    #[test]
    fn unknown_animal_type_is_named_in_error() {
        let record: AnimalRecord =
            serde_json::from_value(json!({"type": "Fish", "name": "Nemo", "age": 1, "attributes": {}}))
                .unwrap();
        match record.restore() {
            Err(ZooError::UnknownVariant { family, type_name, .. }) => {
                assert_eq!(family, "animal");
                assert_eq!(type_name, "Fish");
            }
            other => panic!("expected UnknownVariant, got {other:?}"),
        }
    }

    #[test]
    fn legacy_keeper_name_and_stray_position_are_accepted() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "type": "ZooKeeper",
            "name": "Ruslan",
            "position": "Head Keeper",
            "attributes": {"position": "Head Keeper"}
        }))
        .unwrap();
        let keeper = record.restore().unwrap();
        assert_eq!(keeper, AnyEmployee::Keeper(Keeper::new("Ruslan")));
        assert_eq!(keeper.position(), crate::employee::KEEPER_TITLE);
    }

    #[test]
    fn stored_position_is_overridden_only_when_it_differs() {
        let keeper: AnyEmployee = Keeper::new("Ruslan").into();
        assert_eq!(overridden_position("Director", &keeper), Some("Director"));
        assert_eq!(overridden_position(crate::employee::KEEPER_TITLE, &keeper), None);

        let vet: AnyEmployee = Veterinarian::new("Stas").into();
        assert_eq!(overridden_position(crate::employee::KEEPER_TITLE, &vet), Some("Zoo Keeper"));
    }

    #[test]
    fn pretty_output_uses_four_space_indent() {
        let snapshot = ZooSnapshot {
            name:      "Empty".into(),
            animals:   vec![],
            employees: vec![],
        };
        let json = snapshot.to_json_pretty().unwrap();
        assert!(json.contains("\n    \"name\": \"Empty\""), "unexpected layout:\n{json}");
    }
}
