use citydb_core::loader::{open_table, read_csv};
use citydb_core::prelude::*;
use rust_xlsxwriter::Workbook;
use std::error::Error;
use std::result::Result;
use tempfile::TempDir;

fn seeded() -> CityRepository {
    let mut repo = CityRepository::new();
    repo.add("Lisboa", 100.05, 545_000).unwrap();
    repo
}

#[test]
fn csv_import_appends_rows_in_order() -> Result<(), Box<dyn Error>> {
    let table = read_csv(
        "nome,dimensao,populacao,pais\n\
         porto,41.42,231800,PT\n\
         VIGO,109.06,293642,ES\n"
            .as_bytes(),
    )?;

    let mut repo = seeded();
    assert_eq!(repo.bulk_import(&table)?, 2);

    let names: Vec<_> = repo.iter().map(City::name).collect();
    assert_eq!(names, ["Lisboa", "Porto", "Vigo"]);
    assert_eq!(repo.find_by_name("vigo").unwrap().population(), 293_642);
    Ok(())
}

#[test]
fn missing_population_column_is_a_schema_error() -> Result<(), Box<dyn Error>> {
    let table = read_csv("nome,dimensao\nPorto,41.42\n".as_bytes())?;

    let mut repo = seeded();
    let err = repo.bulk_import(&table).unwrap_err();
    match err {
        CityError::Schema { missing } => assert_eq!(missing, ["populacao"]),
        other => panic!("expected schema error, got {other:?}"),
    }
    assert_eq!(repo.len(), 1);
    Ok(())
}

#[test]
fn one_bad_row_aborts_the_whole_import() -> Result<(), Box<dyn Error>> {
    let table = read_csv(
        "nome,dimensao,populacao\n\
         Porto,41.42,231800\n\
         Braga,183.4,muitos\n\
         Faro,202.57,64560\n"
            .as_bytes(),
    )?;

    let mut repo = seeded();
    let err = repo.bulk_import(&table).unwrap_err();
    assert!(matches!(
        err,
        CityError::TypeConversion { field: "population", row: Some(2), .. }
    ));
    assert_eq!(repo.len(), 1);
    assert!(repo.find_by_name("porto").is_none());
    Ok(())
}

#[test]
fn blank_cell_aborts_the_import() -> Result<(), Box<dyn Error>> {
    let table = read_csv("nome,dimensao,populacao\nPorto,,231800\n".as_bytes())?;
    let mut repo = CityRepository::new();
    assert!(repo.bulk_import(&table).is_err());
    assert!(repo.is_empty());
    Ok(())
}

#[test]
fn header_only_source_imports_nothing() -> Result<(), Box<dyn Error>> {
    let table = read_csv("nome,dimensao,populacao\n".as_bytes())?;
    let mut repo = seeded();
    assert_eq!(repo.bulk_import(&table)?, 0);
    assert_eq!(repo.len(), 1);
    Ok(())
}

#[test]
fn csv_file_import_by_path() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cidades.csv");
    std::fs::write(&path, "nome,dimensao,populacao\nÉvora,1307.08,53591\n")?;

    let mut repo = CityRepository::new();
    assert_eq!(repo.import_path(&path)?, 1);
    assert_eq!(repo.find_by_name("ÉVORA").unwrap().area(), 1307.08);
    Ok(())
}

fn write_workbook(path: &std::path::Path, population: &str) -> Result<(), Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "nome")?;
    sheet.write_string(0, 1, "dimensao")?;
    sheet.write_string(0, 2, "populacao")?;
    sheet.write_string(0, 3, "observacoes")?;

    sheet.write_string(1, 0, "coimbra")?;
    sheet.write_number(1, 1, 319.4)?;
    sheet.write_number(1, 2, 140_796.0)?;
    sheet.write_string(1, 3, "universidade")?;

    sheet.write_string(2, 0, "  leiria ")?;
    sheet.write_number(2, 1, 565.09)?;
    sheet.write_string(2, 2, population)?;

    workbook.save(path)?;
    Ok(())
}

#[test]
fn xlsx_import_reads_first_sheet() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cidades.xlsx");
    write_workbook(&path, "128640")?;

    let table = open_table(&path)?;
    assert_eq!(table.headers(), ["nome", "dimensao", "populacao", "observacoes"]);

    let mut repo = CityRepository::new();
    assert_eq!(repo.bulk_import(&table)?, 2);

    let coimbra = repo.find_by_name("Coimbra").unwrap();
    assert_eq!(coimbra.area(), 319.4);
    assert_eq!(coimbra.population(), 140_796);
    assert_eq!(repo.find_by_name("leiria").unwrap().population(), 128_640);
    Ok(())
}

#[test]
fn xlsx_import_with_bad_population_adds_nothing() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cidades.xlsx");
    write_workbook(&path, "cento e tal mil")?;

    let mut repo = seeded();
    let err = repo.import_path(&path).unwrap_err();
    assert!(matches!(err, CityError::TypeConversion { row: Some(2), .. }));
    assert_eq!(repo.len(), 1);
    Ok(())
}

fn write_workbook_with_gap(path: &std::path::Path, faro_area: &str) -> Result<(), Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "nome")?;
    sheet.write_string(0, 1, "dimensao")?;
    sheet.write_string(0, 2, "populacao")?;

    sheet.write_string(1, 0, "Porto")?;
    sheet.write_number(1, 1, 41.42)?;
    sheet.write_number(1, 2, 231_800.0)?;

    // Sheet row 3 is left empty.

    sheet.write_string(3, 0, "Faro")?;
    sheet.write_string(3, 1, faro_area)?;
    sheet.write_number(3, 2, 64_560.0)?;

    workbook.save(path)?;
    Ok(())
}

#[test]
fn xlsx_blank_rows_are_skipped() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cidades.xlsx");
    write_workbook_with_gap(&path, "202.57")?;

    let mut repo = CityRepository::new();
    assert_eq!(repo.import_path(&path)?, 2);
    let names: Vec<_> = repo.iter().map(City::name).collect();
    assert_eq!(names, ["Porto", "Faro"]);
    Ok(())
}

#[test]
fn xlsx_errors_after_a_blank_row_name_the_sheet_row() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cidades.xlsx");
    write_workbook_with_gap(&path, "grande")?;

    let mut repo = CityRepository::new();
    let err = repo.import_path(&path).unwrap_err();
    assert!(
        matches!(err, CityError::TypeConversion { field: "area", row: Some(3), .. }),
        "got {err:?}"
    );
    assert!(repo.is_empty());
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() {
    let mut repo = CityRepository::new();
    let err = repo.import_path("cidades.json").unwrap_err();
    assert!(matches!(err, CityError::UnsupportedFormat(_)));
}
