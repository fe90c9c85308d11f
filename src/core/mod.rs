//! # Core Application Logic
//!
//! This module contains Saladbook's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Dataset (records)    │
//!                    │  • Catalog (indices)    │
//!                    │  • Navigation (screens) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌────────────┐
//!              │    TUI     │        │  --check   │
//!              │  Adapter   │        │  report    │
//!              │ (ratatui)  │        │  (main.rs) │
//!              └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`dataset`]: Raw records, JSON loading and validation
//! - [`index`]: The `Catalog` cross-reference tables
//! - [`partition`]: Used vs unused dressings, the option list
//! - [`navigation`]: Search/detail screens and the back stack
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file and override resolution

pub mod action;
pub mod config;
pub mod dataset;
pub mod index;
pub mod navigation;
pub mod partition;
pub mod state;
