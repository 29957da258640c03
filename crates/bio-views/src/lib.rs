//! Screens and the generic paginated table for the Biographica client

pub mod columns;
pub mod detail;
pub mod search;
pub mod table;

pub use detail::{DetailAction, DetailScreen};
pub use search::{ScreenAction, SearchScreen};
pub use table::{resolve_cell, Accessor, CellValue, Column, TableAction, TableView};
