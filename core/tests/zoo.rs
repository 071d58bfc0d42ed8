//! Zoo aggregate tests: append-only sequences.

use zoo_core::{Animal, Bird, Employee, Keeper, Mammal, Reptile, Veterinarian, Zoo};

#[test]
fn new_zoo_is_empty() {
    let zoo = Zoo::new("Kazan Zoo");
    assert_eq!(zoo.name(), "Kazan Zoo");
    assert!(zoo.animals().is_empty());
    assert!(zoo.employees().is_empty());
}

#[test]
fn add_animal_appends_exactly_one() {
    let mut zoo = Zoo::new("Kazan Zoo");
    zoo.add_animal(Bird::new("Kesha", 2));
    zoo.add_animal(Mammal::new("Leo", 5));
    assert_eq!(zoo.animals().len(), 2);

    zoo.add_animal(Reptile::new("Kaa", 3));
    assert_eq!(zoo.animals().len(), 3);

    let names: Vec<&str> = zoo.animals().iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["Kesha", "Leo", "Kaa"]);
}

#[test]
fn duplicates_are_allowed() {
    let mut zoo = Zoo::new("Kazan Zoo");
    zoo.add_animal(Mammal::new("Leo", 5));
    zoo.add_animal(Mammal::new("Leo", 5));
    assert_eq!(zoo.animals().len(), 2);
}

#[test]
fn add_employee_appends_in_order() {
    let mut zoo = Zoo::new("Kazan Zoo");
    zoo.add_employee(Keeper::new("Ruslan"));
    zoo.add_employee(Veterinarian::new("Stas"));

    let staff: Vec<(&str, &str)> = zoo
        .employees()
        .iter()
        .map(|e| (e.name(), e.position()))
        .collect();
    assert_eq!(staff, vec![("Ruslan", "Zoo Keeper"), ("Stas", "Veterinarian")]);
}

#[test]
fn find_animal_returns_first_match() {
    let mut zoo = Zoo::new("Kazan Zoo");
    zoo.add_animal(Mammal::new("Leo", 5));
    zoo.add_animal(Mammal::new("Leo", 9));

    let leo = zoo.find_animal("Leo").expect("Leo present");
    assert_eq!(leo.age(), 5);
    assert!(zoo.find_animal("Nemo").is_none());
}

#[test]
fn animal_sounds_follow_insertion_order() {
    let mut zoo = Zoo::new("Kazan Zoo");
    zoo.add_animal(Reptile::new("Kaa", 3));
    zoo.add_animal(Bird::new("Kesha", 2));
    assert_eq!(zoo.animal_sounds(), vec!["Kaa says: Hiss!", "Kesha says: Chirp!"]);
}
