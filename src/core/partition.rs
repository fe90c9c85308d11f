//! # Usage Partition
//!
//! Splits the catalog's dressings into the ones something refers to and the
//! ones nothing does. Only used dressings are offered in the search list;
//! unused ones are a data-quality warning, never an error.

use log::warn;

use crate::core::dataset::Dressing;
use crate::core::index::Catalog;

/// One entry in the searchable dressing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DressingOption {
    /// Dressing name, passed back on select.
    pub value: String,
    pub label: String,
}

impl From<&Dressing> for DressingOption {
    fn from(dressing: &Dressing) -> Self {
        Self {
            value: dressing.name.clone(),
            label: dressing.label(),
        }
    }
}

/// Both halves keep dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    pub used: Vec<&'a Dressing>,
    pub unused: Vec<&'a Dressing>,
}

impl<'a> Partition<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let (used, unused): (Vec<&Dressing>, Vec<&Dressing>) = catalog
            .dressings()
            .iter()
            .partition(|d| catalog.is_used(&d.name));
        Self { used, unused }
    }

    pub fn options(&self) -> Vec<DressingOption> {
        self.used.iter().map(|&d| DressingOption::from(d)).collect()
    }

    pub fn unused_names(&self) -> Vec<&'a str> {
        self.unused.iter().map(|d| d.name.as_str()).collect()
    }

    /// Summary printed by `saladbook --check`.
    pub fn report(&self) -> String {
        let mut out = format!(
            "{} dressings: {} used, {} unused\n",
            self.used.len() + self.unused.len(),
            self.used.len(),
            self.unused.len()
        );
        for name in self.unused_names() {
            out.push_str(&format!("  unused: {name}\n"));
        }
        out
    }

    /// Log unused dressings. Returns how many there were.
    pub fn report_unused(&self) -> usize {
        if !self.unused.is_empty() {
            warn!("Unused dressings: {}", self.unused_names().join(", "));
        }
        self.unused.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_combo_dataset, fixture_catalog, ranch_dataset};

    #[test]
    fn test_single_used_dressing() {
        let catalog = Catalog::build(ranch_dataset()).unwrap();
        let partition = Partition::new(&catalog);
        assert_eq!(partition.used, vec![&Dressing::new("Ranch")]);
        assert!(partition.unused.is_empty());
    }

    #[test]
    fn test_component_counts_as_used() {
        let catalog = Catalog::build(base_combo_dataset()).unwrap();
        let partition = Partition::new(&catalog);
        let used: Vec<&str> = partition.used.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(used, vec!["Base", "Combo"]);
    }

    #[test]
    fn test_unused_dressings_are_split_out() {
        let catalog = fixture_catalog();
        let partition = Partition::new(&catalog);
        assert_eq!(partition.unused_names(), vec!["Poppy Seed"]);
        assert_eq!(partition.report_unused(), 1);
        assert_eq!(
            partition.used.len() + partition.unused.len(),
            catalog.dressings().len()
        );
    }

    #[test]
    fn test_used_matches_references() {
        let catalog = fixture_catalog();
        let partition = Partition::new(&catalog);
        for dressing in catalog.dressings() {
            let referenced = catalog
                .dressings()
                .iter()
                .any(|other| other.components.contains(&dressing.name))
                || !catalog.salads_for(&dressing.name).is_empty()
                || !catalog.bowls_for(&dressing.name).is_empty();
            assert_eq!(
                partition.used.contains(&dressing),
                referenced,
                "{}",
                dressing.name
            );
        }
    }

    #[test]
    fn test_options_use_dressing_labels() {
        let catalog = Catalog::build(ranch_dataset()).unwrap();
        let options = Partition::new(&catalog).options();
        assert_eq!(
            options,
            vec![DressingOption {
                value: "Ranch".to_string(),
                label: "Ranch Dressing".to_string(),
            }]
        );
    }

    #[test]
    fn test_check_report_lists_unused() {
        let catalog = fixture_catalog();
        assert_eq!(
            Partition::new(&catalog).report(),
            "7 dressings: 6 used, 1 unused\n  unused: Poppy Seed\n"
        );
    }

    #[test]
    fn test_check_report_with_none_unused() {
        let catalog = Catalog::build(ranch_dataset()).unwrap();
        assert_eq!(
            Partition::new(&catalog).report(),
            "1 dressings: 1 used, 0 unused\n"
        );
    }

    #[test]
    fn test_report_unused_with_none() {
        let catalog = Catalog::build(ranch_dataset()).unwrap();
        assert_eq!(Partition::new(&catalog).report_unused(), 0);
    }
}
