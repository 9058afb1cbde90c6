mod common;

#[cfg(test)]
mod test_queries {
    use std::collections::BTreeSet;

    use cladetk::structs::KitCollection;

    use crate::common::{calls, test_tree};

    #[test]
    fn empty_collection() {
        let collection = KitCollection::default();

        assert_eq!(0, collection.count());
        assert_eq!(BTreeSet::new(), collection.snps());
        assert_eq!(BTreeSet::new(), collection.consistent_snps());
        assert_eq!(BTreeSet::new(), collection.uncertain_snps());
        assert_eq!(BTreeSet::new(), collection.inconsistent_snps());
    }

    #[test]
    fn basic_set() {
        let collection = test_tree();

        // Four kits and four markers: mut1 is common to all, the rest vary.
        assert_eq!(4, collection.count());
        assert_eq!(4, collection.snps().len());
        assert_eq!(1, collection.consistent_snps().len());
        assert_eq!(3, collection.inconsistent_snps().len());
        assert_eq!(0, collection.uncertain_snps().len());

        assert!(collection.consistent_snps().contains("mut1"));
        assert!(collection.inconsistent_snps().is_disjoint(&collection.consistent_snps()));
        assert!(collection.snps().is_superset(&collection.consistent_snps()));
    }

    #[test]
    fn no_call_does_not_prove_variability() {
        let mut collection = test_tree();
        collection.add_person("uncertain", calls(&[("mut1", "mut1"), ("mut2", "nocall")]));

        assert_eq!(5, collection.count());
        assert_eq!(
            BTreeSet::from(["mut2".to_string()]),
            collection.uncertain_snps()
        );

        // The uncertain kit must not change the other classifications.
        assert_eq!(1, collection.consistent_snps().len());
        assert_eq!(3, collection.inconsistent_snps().len());
    }

    #[test]
    fn only_uncertain_markers_are_not_inconsistent() {
        // mutX is positive in one kit and no-call in the other, never
        // confirmed absent: variability is not proven.
        let mut collection = KitCollection::default();
        collection.add_person("a", calls(&[("mut1", "mut1"), ("mutX", "mutX")]));
        collection.add_person("b", calls(&[("mut1", "mut1"), ("mutX", "nc")]));

        assert!(!collection.consistent_snps().contains("mutX"));
        assert_eq!(BTreeSet::new(), collection.inconsistent_snps());
    }

    #[test]
    fn split_and_filter() {
        let mut collection = test_tree();

        assert_eq!(1, collection.filter("mut2").count());
        assert_eq!(2, collection.filter("mut3").count());

        // A no-call kit is not part of the positive partition.
        collection.add_person("uncertain", calls(&[("mut1", "mut1"), ("mut2", "nocall")]));
        assert_eq!(1, collection.filter("mut2").count());

        let (positive, negative, ambiguous) = collection.split("mut2");
        assert_eq!(
            collection.count(),
            positive.count() + negative.count() + ambiguous.count()
        );

        let mut ids: BTreeSet<&String> = positive.kit_ids().collect();
        ids.extend(negative.kit_ids());
        ids.extend(ambiguous.kit_ids());
        assert_eq!(collection.kit_ids().collect::<BTreeSet<_>>(), ids);
    }

    #[test]
    fn filter_is_idempotent() {
        let collection = test_tree();

        let once = collection.filter("mut3");
        let twice = once.filter("mut3");

        assert_eq!(once.count(), twice.count());
        assert_eq!(
            once.kit_ids().collect::<Vec<_>>(),
            twice.kit_ids().collect::<Vec<_>>()
        );
    }
}
