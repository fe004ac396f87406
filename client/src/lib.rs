pub mod app;
pub mod routes;
pub mod title;
pub mod ui;

/// Document title used when the active route carries no `title` metadata.
pub const DEFAULT_TITLE: &str = "home";
