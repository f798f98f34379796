//! DOM Binding Utilities
//!
//! Small helpers for attaching behavior to server-rendered elements.
//! Listeners bound here live for the lifetime of the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Current document, if running inside a browser window
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Find the first element matching `selector`
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Find an element by id
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Collect every `HtmlElement` matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Find the first descendant of `root` matching `selector`
pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Read a `data-*` attribute (`key` without the `data-` prefix)
pub fn data_attr(el: &Element, key: &str) -> Option<String> {
    el.get_attribute(&format!("data-{key}"))
}

/// Write a `data-*` attribute (`key` without the `data-` prefix)
pub fn set_data_attr(el: &Element, key: &str, value: &str) {
    let _ = el.set_attribute(&format!("data-{key}"), value);
}

/// Replace `remove` with `add` in the element's class list
pub fn swap_class(el: &Element, remove: &str, add: &str) {
    let classes = el.class_list();
    let _ = classes.remove_1(remove);
    let _ = classes.add_1(add);
}

/// Bind a click handler that stays attached until the page unloads
pub fn bind_click<F>(el: &Element, handler: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    let _ = el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
