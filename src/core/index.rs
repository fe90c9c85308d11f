//! # Cross-Reference Index
//!
//! Everything the UI asks about a dressing is answered from tables built
//! once, up front, from the [`Dataset`]:
//!
//! ```text
//! Catalog
//! ├── by_name:            name → Dressing
//! ├── by_component:       component name → [Dressing]   (who uses me as an ingredient)
//! ├── salads_by_dressing: name → [Salad]                (direct use)
//! ├── bowls_by_dressing:  name → [Bowl]                 (direct use)
//! └── usage:              name → DressingUsage          (direct + one level via composites)
//! ```
//!
//! `usage` folds in second-order use: if salad S needs composite X, and X is
//! made from D and E, then S shows up under D annotated with
//! `AdditionalDressings { name: X, components: [E] }`. Composites of
//! composites are not followed; expansion is exactly one level deep.

use std::collections::HashMap;

use log::debug;

use crate::core::dataset::{Bowl, Dataset, DatasetError, Dish, Dressing, Salad};

/// The composite a dish actually requires, and which of its other
/// ingredients are still needed on top of the dressing being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalDressings {
    pub name: String,
    pub components: Vec<String>,
}

/// A dish listed under a dressing. `additional_dressings` is `Some` when the
/// dish only uses the dressing through a composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry<T> {
    pub item: T,
    pub additional_dressings: Option<AdditionalDressings>,
}

impl<T> UsageEntry<T> {
    pub fn direct(item: T) -> Self {
        Self {
            item,
            additional_dressings: None,
        }
    }

    pub fn via(item: T, additional: AdditionalDressings) -> Self {
        Self {
            item,
            additional_dressings: Some(additional),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DressingUsage {
    pub salads: Vec<UsageEntry<Salad>>,
    pub bowls: Vec<UsageEntry<Bowl>>,
    /// Composite dressings that list this one as a component.
    pub dressings: Vec<Dressing>,
}

impl DressingUsage {
    pub fn is_empty(&self) -> bool {
        self.salads.is_empty() && self.bowls.is_empty() && self.dressings.is_empty()
    }
}

/// Read-only lookup tables over one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Dataset order; the option list follows it.
    dressings: Vec<Dressing>,
    by_name: HashMap<String, usize>,
    by_component: HashMap<String, Vec<Dressing>>,
    salads_by_dressing: HashMap<String, Vec<Salad>>,
    bowls_by_dressing: HashMap<String, Vec<Bowl>>,
    usage: HashMap<String, DressingUsage>,
}

impl Catalog {
    /// Validate the dataset, then index it.
    pub fn build(dataset: Dataset) -> Result<Self, DatasetError> {
        dataset.validate()?;
        Ok(Self::index(dataset))
    }

    /// Index a dataset without validating it. Dangling references simply
    /// never match a lookup.
    pub fn index(dataset: Dataset) -> Self {
        let Dataset {
            dressings,
            salads,
            bowls,
        } = dataset;

        let by_name = dressings
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name.clone(), i))
            .collect();

        let mut by_component: HashMap<String, Vec<Dressing>> = HashMap::new();
        for dressing in &dressings {
            for component in &dressing.components {
                by_component
                    .entry(component.clone())
                    .or_default()
                    .push(dressing.clone());
            }
        }

        let salads_by_dressing = group_by_dressing(salads);
        let bowls_by_dressing = group_by_dressing(bowls);

        let usage = dressings
            .iter()
            .map(|dressing| {
                let usage = usage_for(
                    dressing,
                    &by_component,
                    &salads_by_dressing,
                    &bowls_by_dressing,
                );
                (dressing.name.clone(), usage)
            })
            .collect();

        debug!(
            "Indexed {} dressings ({} used as components)",
            dressings.len(),
            by_component.len()
        );

        Self {
            dressings,
            by_name,
            by_component,
            salads_by_dressing,
            bowls_by_dressing,
            usage,
        }
    }

    /// All dressings in dataset order.
    pub fn dressings(&self) -> &[Dressing] {
        &self.dressings
    }

    /// Look up a dressing by exact name. `None` means "no such dressing".
    pub fn dressing(&self, name: &str) -> Option<&Dressing> {
        self.by_name.get(name).map(|&i| &self.dressings[i])
    }

    /// Dressings that list `name` among their components.
    pub fn dressings_with_component(&self, name: &str) -> &[Dressing] {
        self.by_component.get(name).map_or(&[], Vec::as_slice)
    }

    /// Salads that require `name` directly.
    pub fn salads_for(&self, name: &str) -> &[Salad] {
        self.salads_by_dressing.get(name).map_or(&[], Vec::as_slice)
    }

    /// Bowls that require `name` directly.
    pub fn bowls_for(&self, name: &str) -> &[Bowl] {
        self.bowls_by_dressing.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn usage(&self, name: &str) -> Option<&DressingUsage> {
        self.usage.get(name)
    }

    /// True if a salad, a bowl, or another dressing refers to `name`.
    pub fn is_used(&self, name: &str) -> bool {
        !self.salads_for(name).is_empty()
            || !self.bowls_for(name).is_empty()
            || !self.dressings_with_component(name).is_empty()
    }
}

fn group_by_dressing(dishes: Vec<Dish>) -> HashMap<String, Vec<Dish>> {
    let mut groups: HashMap<String, Vec<Dish>> = HashMap::new();
    for dish in dishes {
        groups.entry(dish.dressing.clone()).or_default().push(dish);
    }
    groups
}

fn usage_for(
    dressing: &Dressing,
    by_component: &HashMap<String, Vec<Dressing>>,
    salads_by_dressing: &HashMap<String, Vec<Salad>>,
    bowls_by_dressing: &HashMap<String, Vec<Bowl>>,
) -> DressingUsage {
    let direct = |groups: &HashMap<String, Vec<Dish>>| -> Vec<UsageEntry<Dish>> {
        groups
            .get(&dressing.name)
            .into_iter()
            .flatten()
            .cloned()
            .map(UsageEntry::direct)
            .collect()
    };

    let mut usage = DressingUsage {
        salads: direct(salads_by_dressing),
        bowls: direct(bowls_by_dressing),
        dressings: by_component.get(&dressing.name).cloned().unwrap_or_default(),
    };

    for composite in &usage.dressings {
        let additional = additional_dressings(dressing, composite);
        let via = |groups: &HashMap<String, Vec<Dish>>| -> Vec<UsageEntry<Dish>> {
            groups
                .get(&composite.name)
                .into_iter()
                .flatten()
                .map(|dish| UsageEntry::via(dish.clone(), additional.clone()))
                .collect()
        };
        usage.salads.extend(via(salads_by_dressing));
        usage.bowls.extend(via(bowls_by_dressing));
    }

    usage
}

/// The composite's other ingredients, minus `dressing` itself and anything
/// `dressing` already contains.
fn additional_dressings(dressing: &Dressing, composite: &Dressing) -> AdditionalDressings {
    let components = composite
        .components
        .iter()
        .filter(|name| **name != dressing.name && !dressing.components.contains(name))
        .cloned()
        .collect();
    AdditionalDressings {
        name: composite.name.clone(),
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_combo_dataset, fixture_catalog, ranch_dataset};

    fn names(entries: &[UsageEntry<Dish>]) -> Vec<&str> {
        entries.iter().map(|e| e.item.name.as_str()).collect()
    }

    #[test]
    fn test_direct_usage_has_no_annotation() {
        let catalog = Catalog::build(ranch_dataset()).unwrap();
        let usage = catalog.usage("Ranch").unwrap();

        assert_eq!(usage.salads, vec![UsageEntry::direct(Dish::new("Garden", "Ranch"))]);
        assert!(usage.bowls.is_empty());
        assert!(usage.dressings.is_empty());
    }

    #[test]
    fn test_composite_usage_propagates_to_component() {
        let catalog = Catalog::build(base_combo_dataset()).unwrap();
        let usage = catalog.usage("Base").unwrap();

        assert_eq!(
            usage.salads,
            vec![UsageEntry::via(
                Dish::new("X", "Combo"),
                AdditionalDressings {
                    name: "Combo".to_string(),
                    components: vec![],
                },
            )]
        );
        let composites: Vec<&str> = usage.dressings.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(composites, vec!["Combo"]);
    }

    #[test]
    fn test_additional_dressings_lists_the_other_ingredients() {
        let catalog = fixture_catalog();
        // Spicy Ranch = Ranch + Chipotle; Southwest salad uses Spicy Ranch
        let usage = catalog.usage("Ranch").unwrap();
        let southwest = usage
            .salads
            .iter()
            .find(|e| e.item.name == "Southwest")
            .unwrap();
        assert_eq!(
            southwest.additional_dressings,
            Some(AdditionalDressings {
                name: "Spicy Ranch".to_string(),
                components: vec!["Chipotle".to_string()],
            })
        );
    }

    #[test]
    fn test_additional_dressings_skip_overlap_with_own_components() {
        let dataset = Dataset {
            dressings: vec![
                Dressing::new("Oil"),
                Dressing::new("Vinegar"),
                Dressing::new("Herbs"),
                Dressing::new("Vinaigrette").with_components(["Oil", "Vinegar"]),
                Dressing::new("Herb Vinaigrette").with_components(["Vinaigrette", "Oil", "Herbs"]),
            ],
            salads: vec![Dish::new("Green", "Herb Vinaigrette")],
            bowls: vec![],
        };
        let catalog = Catalog::build(dataset).unwrap();
        let usage = catalog.usage("Vinaigrette").unwrap();

        // "Oil" is already part of Vinaigrette, so only Herbs is extra
        assert_eq!(
            usage.salads[0].additional_dressings.as_ref().unwrap().components,
            vec!["Herbs".to_string()]
        );
    }

    #[test]
    fn test_direct_entries_come_before_second_order() {
        let catalog = fixture_catalog();
        let usage = catalog.usage("Ranch").unwrap();
        assert_eq!(names(&usage.salads), vec!["Cobb", "Southwest"]);
        assert!(usage.salads[0].additional_dressings.is_none());
        assert!(usage.salads[1].additional_dressings.is_some());
        assert_eq!(names(&usage.bowls), vec!["Burrito"]);
    }

    #[test]
    fn test_expansion_is_one_level_deep() {
        let dataset = Dataset {
            dressings: vec![
                Dressing::new("A"),
                Dressing::new("B").with_components(["A"]),
                Dressing::new("C").with_components(["B"]),
            ],
            salads: vec![Dish::new("Deep", "C")],
            bowls: vec![],
        };
        let catalog = Catalog::build(dataset).unwrap();

        assert!(catalog.usage("A").unwrap().salads.is_empty());
        assert_eq!(names(&catalog.usage("B").unwrap().salads), vec!["Deep"]);
    }

    #[test]
    fn test_by_component_preserves_dataset_order() {
        let catalog = fixture_catalog();
        let users: Vec<&str> = catalog
            .dressings_with_component("Chipotle")
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(users, vec!["Spicy Ranch", "Chipotle Lime"]);
    }

    #[test]
    fn test_dressing_without_components_contributes_nothing() {
        let catalog = fixture_catalog();
        assert!(catalog.dressings_with_component("Caesar").is_empty());
        assert!(catalog.dressings_with_component("No Such Thing").is_empty());
    }

    #[test]
    fn test_grouping_preserves_input_order() {
        let dataset = Dataset {
            dressings: vec![Dressing::new("Ranch")],
            salads: vec![
                Dish::new("Second", "Ranch"),
                Dish::new("First", "Ranch"),
            ],
            bowls: vec![],
        };
        let catalog = Catalog::build(dataset).unwrap();
        let salads: Vec<&str> = catalog.salads_for("Ranch").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(salads, vec!["Second", "First"]);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let catalog = fixture_catalog();
        assert!(catalog.dressing("Thousand Island").is_none());
        assert!(catalog.usage("Thousand Island").is_none());
    }

    #[test]
    fn test_unused_dressing_has_empty_usage() {
        let catalog = fixture_catalog();
        let usage = catalog.usage("Poppy Seed").unwrap();
        assert!(usage.is_empty());
        assert!(!catalog.is_used("Poppy Seed"));
    }

    #[test]
    fn test_indexing_is_idempotent() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(Catalog::index(dataset.clone()), Catalog::index(dataset));
    }

    #[test]
    fn test_build_rejects_malformed_dataset() {
        let dataset = Dataset {
            dressings: vec![Dressing::new("Ranch")],
            salads: vec![Dish::new("Garden", "Caesar")],
            bowls: vec![],
        };
        assert!(matches!(
            Catalog::build(dataset),
            Err(DatasetError::UnknownDressing { .. })
        ));
    }
}
