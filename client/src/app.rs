use std::rc::Rc;

use route_table::{NavigationMode, RouteDescriptor, RouteTable};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::title::{document_title, use_document_title};
use crate::ui::{not_found::NotFound, views};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub table: Rc<RouteTable>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let render = {
        let table = props.table.clone();
        Callback::from(move |route: Route| switch(&table, route))
    };

    let routes = match props.table.mode() {
        NavigationMode::History => html! {
            <BrowserRouter>
                <Switch<Route> {render} />
            </BrowserRouter>
        },
        NavigationMode::Hash => html! {
            <HashRouter>
                <Switch<Route> {render} />
            </HashRouter>
        },
    };

    html! {
        <ContextProvider<Rc<RouteTable>> context={props.table.clone()}>
            {routes}
        </ContextProvider<Rc<RouteTable>>>
    }
}

fn switch(table: &RouteTable, route: Route) -> Html {
    match table.resolve(&route.to_path()) {
        Some(descriptor) => html! { <RouteView descriptor={descriptor.clone()} /> },
        None => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    descriptor: RouteDescriptor,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    use_document_title(AttrValue::from(document_title(&props.descriptor).to_string()));

    views::render(&props.descriptor.component)
}
