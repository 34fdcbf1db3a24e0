//! Property-based tests for the report derivations.

use proptest::prelude::*;
use sbom_doc::{
    license_frequency,
    model::{Creator, CreatorKind, DocumentInfo, Package},
    NtiaConformance,
};

fn license_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "MIT".to_string(),
        "Apache-2.0".to_string(),
        "GPL-2.0-only".to_string(),
        "BSD-3-Clause".to_string(),
        "NOT KNOWN".to_string(),
    ])
}

fn opt_field() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{1,8}")
}

fn arb_package() -> impl Strategy<Value = Package> {
    (
        opt_field(),
        opt_field(),
        opt_field(),
        prop::option::of(prop::sample::select(vec![
            "Acme".to_string(),
            "NOASSERTION".to_string(),
        ])),
        prop::option::of(license_id()),
    )
        .prop_map(|(id, name, version, supplier, license_concluded)| Package {
            id,
            name,
            version,
            supplier,
            license_concluded,
        })
}

fn document() -> DocumentInfo {
    DocumentInfo {
        doc_type: "SPDX".to_string(),
        spec_version: "SPDX-2.3".to_string(),
        name: "prop".to_string(),
        creators: vec![Creator::new(CreatorKind::Organization, "Acme")],
        created: Some("2023-01-01T00:00:00Z".to_string()),
    }
}

proptest! {
    #[test]
    fn frequency_counts_sum_to_input_length(licenses in prop::collection::vec(license_id(), 0..50)) {
        let freq = license_frequency(&licenses);
        let total: usize = freq.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(total, licenses.len());
    }

    #[test]
    fn frequency_is_lexicographically_sorted(licenses in prop::collection::vec(license_id(), 0..50)) {
        let freq = license_frequency(&licenses);
        for pair in freq.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn frequency_ignores_input_order(
        licenses in prop::collection::vec(license_id(), 0..50),
        seed in any::<u64>(),
    ) {
        let mut shuffled = licenses.clone();
        // Deterministic shuffle keyed on the generated seed.
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            shuffled.swap(i, (state as usize) % (i + 1));
        }
        prop_assert_eq!(license_frequency(&licenses), license_frequency(&shuffled));
    }

    #[test]
    fn packages_valid_iff_every_package_complete(
        packages in prop::collection::vec(arb_package(), 0..20),
    ) {
        let mut verdicts = NtiaConformance::seed(&document(), 1);
        for package in &packages {
            verdicts.observe_package(package);
        }

        let all_complete = packages.iter().all(|p| {
            p.id.is_some()
                && p.name.is_some()
                && p.version.is_some()
                && p.supplier.as_deref().is_some_and(|s| s != "NOASSERTION")
        });
        prop_assert_eq!(verdicts.packages_valid, all_complete);
        // Package observations never touch the other verdicts.
        prop_assert!(verdicts.files_valid);
        prop_assert!(verdicts.relationships_valid);
    }

    #[test]
    fn conformance_requires_relationships(count in 0usize..10) {
        let verdicts = NtiaConformance::seed(&document(), count);
        prop_assert_eq!(verdicts.relationships_valid, count > 0);
        prop_assert_eq!(verdicts.is_conformant(), count > 0);
    }
}
