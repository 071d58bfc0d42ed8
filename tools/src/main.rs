//! zoo-runner: fixed demonstration of the zoo model.
//!
//! Builds a zoo, shows each animal's behaviour, saves the zoo to
//! `zoo_state.json`, loads it into a fresh zoo and shows the sounds again.
//!
//! Usage:
//!   zoo-runner
//!   RUST_LOG=debug zoo-runner

use anyhow::{Context, Result};
use zoo_core::{
    config::ZooConfig, Animal, AnyEmployee, Bird, Keeper, LoadOutcome, Mammal, Reptile,
    Veterinarian, Zoo,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ZooConfig::default();
    let mut zoo = Zoo::new(config.zoo_name.clone());

    zoo.add_animal(Bird::new("Kesha", 2));
    zoo.add_animal(Mammal::new("Leo", 5));
    zoo.add_animal(Reptile::new("Kaa", 3));

    let keeper = Keeper::new("Ruslan");
    let vet = Veterinarian::new("Stas");
    zoo.add_employee(keeper.clone());
    zoo.add_employee(vet.clone());

    println!();
    println!("=== ANIMAL SOUNDS ===");
    print_lines(zoo.animal_sounds());

    println!();
    println!("=== DAILY ROUND ===");
    for animal in zoo.animals() {
        println!("  {}", animal.eat());
        println!("  {}", animal.signature_move());
    }
    let lion = zoo.find_animal("Leo").context("Leo missing from zoo")?;
    let snake = zoo.find_animal("Kaa").context("Kaa missing from zoo")?;
    println!("  {}", keeper.feed_animal(lion));
    println!("  {}", vet.treat_animal(snake));

    zoo.save_to_file(&config.state_path)
        .with_context(|| format!("saving {}", config.state_path.display()))?;

    let mut restored = Zoo::new("New Zoo");
    let outcome = restored
        .load_from_file(&config.state_path)
        .with_context(|| format!("loading {}", config.state_path.display()))?;

    println!();
    println!("=== LOADED ANIMAL SOUNDS ===");
    if outcome == LoadOutcome::NotFound {
        println!("  (nothing loaded)");
    }
    print_lines(restored.animal_sounds());
    print_staff(&restored);

    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("  {line}");
    }
}

fn print_staff(zoo: &Zoo) {
    use zoo_core::Employee;

    println!();
    println!("=== {} STAFF ===", zoo.name().to_uppercase());
    for employee in zoo.employees() {
        let role = match employee {
            AnyEmployee::Keeper(_)       => "keeper",
            AnyEmployee::Veterinarian(_) => "vet",
        };
        println!("  {:<8} {:<6} {}", employee.name(), role, employee.position());
    }
}
