//! # Dataset
//!
//! The raw records the catalog is built from: dressings, salads and bowls.
//!
//! ```text
//! Dataset
//! ├── dressings: Vec<Dressing>   // name, page?, components[]
//! ├── salads: Vec<Salad>         // name, page?, dressing
//! └── bowls: Vec<Bowl>           // name, page?, dressing
//! ```
//!
//! Loaded once at startup, either from the copy compiled into the binary or
//! from a JSON file. Nothing here is ever written back.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// The dataset shipped with the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../data/dressings.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dressing {
    pub name: String,
    #[serde(default)]
    pub page: Option<u32>,
    /// Other dressings this one is made from, in recipe order.
    #[serde(default)]
    pub components: Vec<String>,
}

impl Dressing {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page: None,
            components: Vec::new(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_composite(&self) -> bool {
        !self.components.is_empty()
    }

    /// Label shown in the option list and as the page heading.
    pub fn label(&self) -> String {
        format!("{} Dressing", self.name)
    }
}

/// A salad or a bowl: something that needs exactly one dressing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub page: Option<u32>,
    pub dressing: String,
}

pub type Salad = Dish;
pub type Bowl = Dish;

impl Dish {
    pub fn new(name: impl Into<String>, dressing: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page: None,
            dressing: dressing.into(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub dressings: Vec<Dressing>,
    #[serde(default)]
    pub salads: Vec<Salad>,
    #[serde(default)]
    pub bowls: Vec<Bowl>,
}

/// Which collection a dish came from. Only used for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishKind {
    Salad,
    Bowl,
}

impl std::fmt::Display for DishKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DishKind::Salad => write!(f, "salad"),
            DishKind::Bowl => write!(f, "bowl"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dressing '{0}' is defined more than once")]
    DuplicateDressing(String),

    #[error("{kind} '{dish}' requires unknown dressing '{dressing}'")]
    UnknownDressing {
        kind: DishKind,
        dish: String,
        dressing: String,
    },

    #[error("dressing '{dressing}' lists unknown component '{component}'")]
    UnknownComponent { dressing: String, component: String },
}

impl Dataset {
    /// Parse a dataset from JSON. Does not validate references.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        debug!(
            "Parsed dataset: {} dressings, {} salads, {} bowls",
            dataset.dressings.len(),
            dataset.salads.len(),
            dataset.bowls.len()
        );
        Ok(dataset)
    }

    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path)?;
        info!("Loaded dataset from {}", path.display());
        Self::from_json(&json)
    }

    /// Check that dressing names are unique and that every reference
    /// (dish → dressing, dressing → component) points at a known dressing.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut names = HashSet::with_capacity(self.dressings.len());
        for dressing in &self.dressings {
            if !names.insert(dressing.name.as_str()) {
                return Err(DatasetError::DuplicateDressing(dressing.name.clone()));
            }
        }

        for dressing in &self.dressings {
            if let Some(component) = dressing
                .components
                .iter()
                .find(|c| !names.contains(c.as_str()))
            {
                return Err(DatasetError::UnknownComponent {
                    dressing: dressing.name.clone(),
                    component: component.clone(),
                });
            }
        }

        let dishes = self
            .salads
            .iter()
            .map(|s| (DishKind::Salad, s))
            .chain(self.bowls.iter().map(|b| (DishKind::Bowl, b)));
        for (kind, dish) in dishes {
            if !names.contains(dish.dressing.as_str()) {
                return Err(DatasetError::UnknownDressing {
                    kind,
                    dish: dish.name.clone(),
                    dressing: dish.dressing.clone(),
                });
            }
        }

        Ok(())
    }
}
