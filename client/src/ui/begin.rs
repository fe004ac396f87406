use yew::prelude::*;

use crate::ui::{home::PageContainer, icon_button::BackArrow, style::paragraph_style};

#[function_component(Begin)]
pub fn begin() -> Html {
    html! {
        <>
            <BackArrow />
            <PageContainer heading="Begin">
                <div class={paragraph_style()}>
                    {"Pick up where the home page left off."}
                </div>
            </PageContainer>
        </>
    }
}
