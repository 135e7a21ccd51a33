//! droplist: a searchable dropdown with paginated, scroll-driven loading
//!
//! The core is UI-agnostic. A [`Dropdown`] takes [`Intent`]s and exposes its
//! entries, highlight and selection; items come from an [`ItemProvider`],
//! either a paginated [`Loader`] fed by an [`ItemSource`] or an in-memory
//! [`SelectFilter`]. The `tui` module renders a dropdown in the terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod http;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod provider;
pub mod select_filter;
pub mod sources;
pub mod tui;
pub mod viewport;
pub mod widget;

pub use config::{Config, TuiTheme};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use loader::continuation::Continuation;
pub use loader::{ItemSource, Loader, PageRequest, Reply};
pub use model::{Choice, Entry, Item};
pub use navigation::Navigator;
pub use provider::{ItemProvider, ProviderEvent};
pub use select_filter::SelectFilter;
pub use viewport::Viewport;
pub use widget::{Dropdown, DropdownBuilder, DropdownEvent, Intent, Settle, Shown};
