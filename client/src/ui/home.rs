use stylist::yew::styled_component;
use yew::prelude::*;
use yew_icons::IconId;

use crate::ui::{
    icon_button::{use_navigate_to, IconButton},
    style::{container_style, header_style, icon_style, nav_row_style, subheader_style},
};

#[derive(Properties, PartialEq)]
pub struct PageContainerProps {
    pub heading: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[styled_component(PageContainer)]
pub fn page_container(props: &PageContainerProps) -> Html {
    html! {
        <div class={container_style()}>
            <div class={header_style()}>
                {props.heading.clone()}
                <div class={subheader_style()}>
                    {format!("v{}", env!("CARGO_PKG_VERSION"))}
                </div>
            </div>
            {for props.children.iter()}
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let begin = use_navigate_to(route_table::BEGIN);

    html! {
        <PageContainer heading="Home">
            <div class={nav_row_style()}>
                <IconButton
                    icon_id={IconId::LucideArrowRightCircle}
                    description="Begin"
                    onclick={begin}
                    class={icon_style()}
                />
            </div>
        </PageContainer>
    }
}
