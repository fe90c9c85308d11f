//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: back-stack depth and status message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrowing it is
//! created each frame to render.
//!
//! - `SearchPageState` / `SearchPage`: filterable list of dressings
//! - `DressingPageState` / `DressingPage`: detail view with followable links
//!
//! Components receive external data as props (the catalog, the status
//! message) instead of reaching into `App`, which keeps them testable with
//! `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── search_page.rs    (Browsing screen)
//! └── dressing_page.rs  (Viewing screen)
//! ```

pub mod dressing_page;
pub mod search_page;
pub mod title_bar;

pub use dressing_page::{DressingPage, DressingPageEvent, DressingPageState};
pub use search_page::{SearchEvent, SearchPage, SearchPageState};
pub use title_bar::TitleBar;
