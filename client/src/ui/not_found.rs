use yew::prelude::*;

use crate::title::use_document_title;
use crate::ui::{home::PageContainer, icon_button::BackArrow, style::paragraph_style};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_document_title(AttrValue::Static(crate::DEFAULT_TITLE));

    html! {
        <>
            <BackArrow />
            <PageContainer heading="Not found">
                <div class={paragraph_style()}>
                    {"Nothing is registered at this address."}
                </div>
            </PageContainer>
        </>
    }
}
