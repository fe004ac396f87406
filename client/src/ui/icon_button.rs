use std::rc::Rc;

use route_table::RouteTable;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

use crate::{routes::navigate_to, ui::style::{back_arrow_style, tooltip_style, tooltip_visible_style}};

#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon_id: IconId,
    pub description: AttrValue,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("5em"))]
    pub size: AttrValue,
}

/// Icon with a tooltip that shows while hovered.
#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let hovered = use_state(|| false);
    let hover = |over: bool| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(over))
    };
    let tooltip = if *hovered { tooltip_visible_style() } else { tooltip_style() };

    html! {
        <div class={classes!(props.class.clone(), "icon-button")}
            onmouseover={hover(true)}
            onmouseout={hover(false)}
        >
            <Icon
                width={props.size.to_string()}
                height={props.size.to_string()}
                icon_id={props.icon_id}
                onclick={Some(props.onclick.clone())}
            />
            <div class={tooltip}>{props.description.clone()}</div>
        </div>
    }
}

/// Callback pushing the route registered under `name`.
#[hook]
pub fn use_navigate_to(name: &'static str) -> Callback<MouseEvent> {
    let navigator = use_navigator();
    let table = use_context::<Rc<RouteTable>>();

    Callback::from(move |_| match (&navigator, &table) {
        (Some(navigator), Some(table)) => navigate_to(navigator, table, name),
        _ => log::warn!("navigation to {name:?} outside of a router"),
    })
}

#[derive(Properties, PartialEq)]
pub struct BackArrowProps {
    #[prop_or(route_table::HOME)]
    pub to: &'static str,
}

#[function_component(BackArrow)]
pub fn back_arrow(props: &BackArrowProps) -> Html {
    let go_back = use_navigate_to(props.to);

    html! {
        <IconButton
            icon_id={IconId::LucideArrowLeftCircle}
            description="Back"
            onclick={go_back}
            class={back_arrow_style()}
            size="2em"
        />
    }
}
