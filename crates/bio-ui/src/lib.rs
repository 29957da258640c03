//! Application chrome: theme and shell widgets

pub mod shell;
pub mod theme;

pub use shell::{empty_notice, error_banner, header_bar};
pub use theme::{apply_theme, Theme};
