use route_table::RouteDescriptor;
use yew::prelude::*;

use crate::DEFAULT_TITLE;

/// Title shown while `descriptor` is active: its `title` metadata when that
/// is a string, the app default otherwise.
pub fn document_title(descriptor: &RouteDescriptor) -> &str {
    descriptor.title().unwrap_or(DEFAULT_TITLE)
}

#[hook]
pub fn use_document_title(title: AttrValue) {
    use_effect_with(title, |title| {
        gloo_utils::document().set_title(title);
        || ()
    });
}
