//! Many compilations resolving against one shared registry.

use rayon::prelude::*;
use sqlfunc::{ResolvableFunctionReference, Resolver, SearchPath, UnresolvedName};

use crate::helpers::registry_fixtures::{path, reference, registry};

const NAMES: &[(&str, &str)] = &[
    ("lower", "pg_catalog.lower"),
    ("NOW", "pg_catalog.now"),
    ("pg_catalog.count", "pg_catalog.count"),
    ("Row_Number", "pg_catalog.row_number"),
    ("transaction_timestamp", "pg_catalog.transaction_timestamp"),
];

#[test]
fn test_parallel_resolver_reads() {
    let search_path = path("public, pg_catalog");

    let resolved: Vec<String> = (0..1000)
        .into_par_iter()
        .map(|i| {
            let (name, _) = NAMES[i % NAMES.len()];
            Resolver::new(registry())
                .resolve(&UnresolvedName::from_dotted(name), &search_path)
                .map(|definition| definition.name().to_string())
                .unwrap()
        })
        .collect();

    for (i, name) in resolved.iter().enumerate() {
        assert_eq!(name, NAMES[i % NAMES.len()].1);
    }
}

#[test]
fn test_each_compilation_owns_its_cells() {
    let template: Vec<ResolvableFunctionReference> =
        NAMES.iter().map(|(name, _)| reference(name)).collect();

    let outcomes: Vec<Vec<String>> = (0..64)
        .into_par_iter()
        .map(|_| {
            // Every compilation works on its own copy of the tree.
            let mut cells = template.clone();
            cells
                .iter_mut()
                .map(|cell| {
                    cell.resolve(registry(), &path("pg_catalog"))
                        .unwrap()
                        .name()
                        .to_string()
                })
                .collect()
        })
        .collect();

    let expected: Vec<String> = NAMES.iter().map(|(_, q)| q.to_string()).collect();
    assert!(outcomes.iter().all(|outcome| *outcome == expected));
    assert!(template.iter().all(|cell| !cell.is_resolved()));
    assert!(SearchPath::default().is_empty());
}
