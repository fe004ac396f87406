use route_table::RouteTable;
use yew_router::prelude::*;

/// Every path of the route table, aliases included, as yew-router sees them.
/// Which view a variant shows is decided by the table, not by this enum.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/Home")]
    HomeAlias,
    #[at("/Begin")]
    Begin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Looks up the route declared under `name` in the table.
pub fn route_named(table: &RouteTable, name: &str) -> Option<Route> {
    table
        .by_name(name)
        .and_then(|descriptor| Route::recognize(&descriptor.path))
        .filter(|route| *route != Route::NotFound)
}

pub fn navigate_to(navigator: &Navigator, table: &RouteTable, name: &str) {
    match route_named(table, name) {
        Some(route) => navigator.push(&route),
        None => log::warn!("no route named {name:?}"),
    }
}
