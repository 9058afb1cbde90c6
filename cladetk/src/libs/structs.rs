use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;

/// One kit's sparse marker calls, in spreadsheet row order.
///
/// A marker name maps to the verbatim cell value from the spreadsheet. The
/// call state is never stored, it is derived by [`call_state`].
pub type CallMap = IndexMap<String, String>;

/// The derived state of one marker in one kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// The marker maps to its own name.
    Positive,
    /// The marker is present but maps to something else, e.g. a no-call
    /// or a coverage-boundary value.
    Ambiguous,
    /// The marker is absent from the kit entirely. Absence is a negative
    /// call, not a no-call.
    Negative,
}

/// Derive the call state of `snp` in a call mapping.
pub fn call_state(calls: &CallMap, snp: &str) -> CallState {
    match calls.get(snp) {
        Some(value) if value == snp => CallState::Positive,
        Some(_) => CallState::Ambiguous,
        None => CallState::Negative,
    }
}

fn positive_snps(calls: &CallMap) -> BTreeSet<String> {
    calls
        .iter()
        .filter(|(snp, value)| snp == value)
        .map(|(snp, _)| snp.clone())
        .collect()
}

fn is_proper_superset<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> bool {
    a.len() > b.len() && a.is_superset(b)
}

/// A collection of sequenced kits, keyed by kit id.
///
/// Call mappings are shared by `Arc` between a collection and the
/// partitions produced by [`KitCollection::split`], and are treated as
/// immutable once constructed. Partitions own fresh id maps, so growing
/// the parent with [`KitCollection::add_person`] never changes a
/// previously returned partition.
#[derive(Debug, Default, Clone)]
pub struct KitCollection {
    kits: BTreeMap<String, Arc<CallMap>>,
}

impl KitCollection {
    pub fn new(kits: BTreeMap<String, Arc<CallMap>>) -> Self {
        Self { kits }
    }

    pub fn count(&self) -> usize {
        self.kits.len()
    }

    pub fn kits(&self) -> &BTreeMap<String, Arc<CallMap>> {
        &self.kits
    }

    pub fn kit_ids(&self) -> impl Iterator<Item = &String> {
        self.kits.keys()
    }

    /// Insert or overwrite one kit.
    pub fn add_person(&mut self, id: &str, calls: CallMap) {
        self.kits.insert(id.to_string(), Arc::new(calls));
    }

    /// Partition the collection on one marker into (positive, negative,
    /// ambiguous) sub-collections. The three id sets are disjoint and
    /// their union is the receiver's id set. A marker absent from every
    /// kit puts the whole collection into the negative partition.
    pub fn split(&self, snp: &str) -> (Self, Self, Self) {
        let mut positive = BTreeMap::new();
        let mut negative = BTreeMap::new();
        let mut ambiguous = BTreeMap::new();

        for (id, calls) in &self.kits {
            let partition = match call_state(calls, snp) {
                CallState::Positive => &mut positive,
                CallState::Negative => &mut negative,
                CallState::Ambiguous => &mut ambiguous,
            };
            partition.insert(id.clone(), Arc::clone(calls));
        }

        (Self::new(positive), Self::new(negative), Self::new(ambiguous))
    }

    /// The positive partition of [`KitCollection::split`].
    pub fn filter(&self, snp: &str) -> Self {
        self.split(snp).0
    }

    /// Every marker name appearing in any kit, regardless of call state.
    pub fn snps(&self) -> BTreeSet<String> {
        self.kits
            .values()
            .flat_map(|calls| calls.keys().cloned())
            .collect()
    }

    /// Markers confirmed positive in every kit of the collection.
    pub fn consistent_snps(&self) -> BTreeSet<String> {
        let mut candidates = self.snps();
        for calls in self.kits.values() {
            let positive = positive_snps(calls);
            candidates = &candidates & &positive;
        }
        candidates
    }

    /// Markers with a no-call or boundary value in at least one kit.
    pub fn uncertain_snps(&self) -> BTreeSet<String> {
        self.kits
            .values()
            .flat_map(|calls| {
                calls
                    .iter()
                    .filter(|(snp, value)| snp != value)
                    .map(|(snp, _)| snp.clone())
            })
            .collect()
    }

    /// Markers proven to vary over the collection: not consistent, and
    /// confirmed absent in at least one kit. A marker that is positive in
    /// some kits and merely uncertain in the rest is excluded, since a
    /// no-call does not prove variability.
    pub fn inconsistent_snps(&self) -> BTreeSet<String> {
        let mut candidates = &self.snps() - &self.consistent_snps();
        let mut verified = BTreeSet::new();

        for calls in self.kits.values() {
            for snp in &candidates {
                if !calls.contains_key(snp.as_str()) {
                    verified.insert(snp.clone());
                }
            }
            // A marker known to be inconsistent needs no further looks.
            candidates = &candidates - &verified;
        }

        verified
    }

    /// Markers that may define first-level subclades of the collection.
    ///
    /// Returns a map of first-level marker -> markers equivalent to it.
    ///
    /// Every varying marker is profiled by the marker set universal to its
    /// positive kits. Equal profiles mean the markers are indistinguishable
    /// with the current data; a proper-superset profile means the marker
    /// sits deeper in the tree and is dropped from the first level.
    /// Incomparable pairs that survive get a second look at the kit level:
    /// if every kit certain for one marker is certain or uncertain for the
    /// other, and the other reaches further, the first is treated as
    /// subordinate. That check is one-directional and can miss true
    /// equivalents; it only breaks ties the profile comparison cannot.
    ///
    /// Equivalence classes are collapsed in lexicographic marker order, so
    /// the smallest name of a class becomes its representative.
    pub fn subclade_candidates(&self) -> BTreeMap<String, BTreeSet<String>> {
        if self.count() < 2 {
            return BTreeMap::new();
        }

        let profiles: BTreeMap<String, BTreeSet<String>> = self
            .inconsistent_snps()
            .into_par_iter()
            .filter_map(|snp| {
                let next_level = self.filter(&snp);
                match next_level.count() {
                    0 => None,
                    _ => Some((snp, next_level.consistent_snps())),
                }
            })
            .collect();

        let mut first_level: BTreeSet<String> = profiles.keys().cloned().collect();
        let mut second_look: BTreeSet<String> = BTreeSet::new();
        let mut equivalents: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (snp1, profile1) in &profiles {
            for (snp2, profile2) in &profiles {
                if snp1 == snp2 {
                    continue;
                }
                if profile1 == profile2 {
                    equivalents.entry(snp1.clone()).or_default().insert(snp2.clone());
                } else if is_proper_superset(profile1, profile2) {
                    // Everything consistent under snp2 is consistent under
                    // snp1 and then some: snp1 is a subclade of snp2.
                    first_level.remove(snp1);
                } else if is_proper_superset(profile2, profile1) {
                    first_level.remove(snp2);
                } else {
                    second_look.insert(snp1.clone());
                    second_look.insert(snp2.clone());
                }
            }
        }

        // Second look at incomparable pairs still at the top level. Here we
        // compare kits, not markers.
        let second_look = &second_look & &first_level;
        for snp1 in &second_look {
            for snp2 in &second_look {
                let (profile1, profile2) = (&profiles[snp1], &profiles[snp2]);
                if profile1 != profile2
                    && !is_proper_superset(profile1, profile2)
                    && !is_proper_superset(profile2, profile1)
                {
                    let (snp1_yes, _, _) = self.split(snp1);
                    let (snp2_yes, _, snp2_maybe) = self.split(snp2);

                    let snp1_ids: BTreeSet<&String> = snp1_yes.kits.keys().collect();
                    let snp2_ids: BTreeSet<&String> =
                        snp2_yes.kits.keys().chain(snp2_maybe.kits.keys()).collect();

                    if is_proper_superset(&snp2_ids, &snp1_ids) {
                        first_level.remove(snp1);
                    }
                }
            }
        }

        // Present only one marker per equivalence class. BTreeSet iteration
        // is lexicographic, which fixes the representative.
        let mut do_not_present: BTreeSet<String> = BTreeSet::new();
        for snp in &first_level {
            if !do_not_present.contains(snp) {
                if let Some(equivalent) = equivalents.get(snp) {
                    do_not_present.extend(equivalent.iter().cloned());
                }
            }
        }

        first_level
            .iter()
            .filter(|snp| !do_not_present.contains(snp.as_str()))
            .map(|snp| {
                let equivalent = equivalents.get(snp).cloned().unwrap_or_default();
                (snp.clone(), equivalent)
            })
            .collect()
    }
}
