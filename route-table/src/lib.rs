pub mod descriptor;
pub mod table;

pub use descriptor::{Metadata, RouteDescriptor, ViewRef};
pub use table::{Conflict, NavigationMode, RouteTable};

use serde_json::json;

pub const HOME: &str = "Home";
pub const BEGIN: &str = "Begin";

/// Assembles the application's route table.
///
/// Pure and infallible; the same table is returned on every call. Nothing is
/// validated here, see [`RouteTable::conflicts`] for that.
pub fn build() -> RouteTable {
    let routes = vec![
        RouteDescriptor::new(HOME, "/", ViewRef::new(HOME))
            .alias("/Home")
            .meta("title", json!("home")),
        RouteDescriptor::new(BEGIN, "/Begin", ViewRef::new(BEGIN)),
    ];

    RouteTable::new(NavigationMode::History, routes)
}
