//! View registry: resolves the opaque view references held by the route
//! table into components.

use route_table::{ViewRef, BEGIN, HOME};
use yew::prelude::*;

use crate::ui::{begin::Begin, home::Home, not_found::NotFound};

pub type View = fn() -> Html;

fn home_view() -> Html {
    html! { <Home /> }
}

fn begin_view() -> Html {
    html! { <Begin /> }
}

pub fn lookup(view: &ViewRef) -> Option<View> {
    match view.name() {
        HOME => Some(home_view as View),
        BEGIN => Some(begin_view as View),
        _ => None,
    }
}

pub fn render(view: &ViewRef) -> Html {
    match lookup(view) {
        Some(view) => view(),
        None => {
            log::warn!("no view registered as {view}");
            html! { <NotFound /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_view_is_registered() {
        for route in route_table::build().routes() {
            assert!(lookup(&route.component).is_some(), "{}", route.component);
        }
    }

    #[test]
    fn unknown_views_are_not_registered() {
        assert!(lookup(&ViewRef::new("Settings")).is_none());
    }
}
