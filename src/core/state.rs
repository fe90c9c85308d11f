//! # Application State
//!
//! Core business state for Saladbook. Domain data only; presentation state
//! (search text, list highlight, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>          // read-only, built once at startup
//! ├── options: Vec<DressingOption>   // used dressings, dataset order
//! ├── navigation: Navigation         // screen + back stack
//! └── status_message: String         // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::index::{Catalog, DressingUsage};
use crate::core::navigation::Navigation;
use crate::core::partition::{DressingOption, Partition};

pub struct App {
    pub catalog: Arc<Catalog>,
    pub options: Vec<DressingOption>,
    pub navigation: Navigation,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let options = Partition::new(&catalog).options();
        Self {
            catalog,
            options,
            navigation: Navigation::new(),
            status_message: String::new(),
        }
    }

    /// Usage of the dressing on screen, if one is showing.
    pub fn current_usage(&self) -> Option<&DressingUsage> {
        self.navigation
            .current()
            .and_then(|name| self.catalog.usage(name))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.status_message.is_empty());
        assert!(app.navigation.current().is_none());
        assert!(app.current_usage().is_none());
    }

    #[test]
    fn test_options_exclude_unused() {
        let app = test_app();
        assert!(app.options.iter().all(|o| o.value != "Poppy Seed"));
        assert!(app.options.iter().any(|o| o.label == "Ranch Dressing"));
    }
}
