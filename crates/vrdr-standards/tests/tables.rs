//! Consistency checks over every code table.

use std::collections::HashSet;

use vrdr_standards::tables;

#[test]
fn test_every_table_walks_both_directions() {
    for table in tables::all() {
        assert!(!table.rows().is_empty(), "{} has no rows", table.name());
        for row in table.rows() {
            let coded = table
                .to_coded(row.ije)
                .unwrap_or_else(|| panic!("{}: no code for '{}'", table.name(), row.ije));
            assert_eq!(coded.code(), row.code);
            assert_eq!(coded.system(), row.system);
            assert_eq!(
                table.to_ije(&coded),
                Some(row.ije),
                "{}: code {} does not map back",
                table.name(),
                row.code
            );
        }
    }
}

#[test]
fn test_categories_and_codes_unique() {
    for table in tables::all() {
        let mut categories = HashSet::new();
        let mut codes = HashSet::new();
        for row in table.rows() {
            assert!(categories.insert(row.ije), "{}: duplicate '{}'", table.name(), row.ije);
            assert!(
                codes.insert((row.code, row.system)),
                "{}: duplicate code {}",
                table.name(),
                row.code
            );
        }
    }
}

#[test]
fn test_table_names_unique() {
    let names: HashSet<_> = tables::all().iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), tables::all().len());
}

#[test]
fn test_other_rows_are_not_categories() {
    for table in tables::all() {
        if let Some(other) = table.other() {
            assert!(
                table.to_ije(&other.to_coded()).is_none(),
                "{}: Other must not map to a category",
                table.name()
            );
        }
    }
}
