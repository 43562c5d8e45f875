//! Basic usage example for citydb-rs
//!
//! This example demonstrates how to:
//! - Add, search, update and remove cities
//! - Import a CSV source (all rows or none)
//! - Run the aggregate reports

use citydb_rs::loader::read_csv;
use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citydb-rs Basic Usage Example ===\n");

    let mut repo = CityRepository::new();
    repo.add("lisboa", 100.05, 545_000)?;
    repo.add("  porto ", 41.42, 231_800)?;

    println!("--- Example 1: Bulk import ---");
    let table = read_csv(
        "nome,dimensao,populacao\nCoimbra,319.4,140796\nBraga,183.4,193333\n".as_bytes(),
    )?;
    println!("Imported {} cities", repo.bulk_import(&table)?);
    println!();

    println!("--- Example 2: Case-insensitive search ---");
    for city in repo.list(Some("BR")) {
        println!("- {} ({} km², {} inhabitants)", city.name(), city.area(), city.population());
    }
    println!();

    println!("--- Example 3: Partial update and removal ---");
    repo.update("porto", &CityPatch::new().with_population(232_125))?;
    match repo.remove("Faro") {
        Ok(city) => println!("Removed {}", city.name()),
        Err(e) if e.is_not_found() => println!("Not found: Faro"),
        Err(e) => return Err(e),
    }
    println!();

    println!("--- Example 4: Reports ---");
    if let Some(city) = repo.largest_by_area() {
        println!("Largest: {} ({} km²)", city.name(), city.area());
    }
    if let Some(city) = repo.most_populous() {
        println!("Most populous: {} ({})", city.name(), city.population());
    }
    println!("Average population: {:.2}", repo.average_population());

    Ok(())
}
