//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::dataset::{Dataset, Dish, Dressing};
use crate::core::index::Catalog;
use crate::core::state::App;

/// One dressing, one salad.
pub fn ranch_dataset() -> Dataset {
    Dataset {
        dressings: vec![Dressing::new("Ranch")],
        salads: vec![Dish::new("Garden", "Ranch")],
        bowls: vec![],
    }
}

/// A composite with a single component, used by one salad.
pub fn base_combo_dataset() -> Dataset {
    Dataset {
        dressings: vec![
            Dressing::new("Base"),
            Dressing::new("Combo").with_components(["Base"]),
        ],
        salads: vec![Dish::new("X", "Combo")],
        bowls: vec![],
    }
}

/// Small dataset with two composites, a shared component and one unused
/// dressing ("Poppy Seed").
pub fn fixture_dataset() -> Dataset {
    Dataset {
        dressings: vec![
            Dressing::new("Ranch").with_page(10),
            Dressing::new("Chipotle").with_page(11),
            Dressing::new("Lime"),
            Dressing::new("Caesar").with_page(12),
            Dressing::new("Spicy Ranch")
                .with_page(13)
                .with_components(["Ranch", "Chipotle"]),
            Dressing::new("Chipotle Lime").with_components(["Chipotle", "Lime"]),
            Dressing::new("Poppy Seed").with_page(14),
        ],
        salads: vec![
            Dish::new("Cobb", "Ranch").with_page(40),
            Dish::new("Southwest", "Spicy Ranch").with_page(41),
            Dish::new("Kale", "Caesar"),
        ],
        bowls: vec![
            Dish::new("Burrito", "Spicy Ranch").with_page(60),
            Dish::new("Taco", "Chipotle Lime"),
        ],
    }
}

pub fn fixture_catalog() -> Catalog {
    Catalog::build(fixture_dataset()).expect("fixture dataset is valid")
}

/// Creates a test App over the fixture catalog.
pub fn test_app() -> App {
    App::new(Arc::new(fixture_catalog()))
}
