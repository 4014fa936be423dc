//! # TUI Components
//!
//! All UI components for the terminal interface, following two patterns:
//!
//! - **Stateless (props-based)**: [`TitleBar`], [`ShowGrid`], [`Pagination`]
//!   receive everything as props and just render.
//! - **Stateful (event-driven)**: [`SearchBar`] owns its edit buffer and
//!   emits [`SearchEvent`]s; [`SeasonViewState`] owns the episode list
//!   scroll position.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests live together.

pub mod pagination;
pub mod search_bar;
pub mod season_view;
pub mod show_grid;
pub mod title_bar;

pub use pagination::Pagination;
pub use search_bar::{SearchBar, SearchEvent};
pub use season_view::{SeasonView, SeasonViewState};
pub use show_grid::ShowGrid;
pub use title_bar::TitleBar;
