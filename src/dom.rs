use canvas::camera::Point;
use canvas::input::{Cursor, Tool};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// A toolbar button and the tool it selects.
pub struct ToolButton {
    pub element: Element,
    pub tool: Tool,
}

/// Every element matching `selector` whose `data-tool` names a known tool.
pub fn tool_buttons(document: &Document, selector: &str) -> Result<Vec<ToolButton>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut buttons = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let name = element.get_attribute("data-tool").unwrap_or_default();
        match name.parse::<Tool>() {
            Ok(tool) => buttons.push(ToolButton { element, tool }),
            Err(err) => log::warn!("ignoring toolbar button: {err}"),
        }
    }
    Ok(buttons)
}

/// Pointer position relative to the target element's top-left corner.
pub fn event_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.offset_x()), f64::from(event.offset_y()))
}

/// `window.innerWidth` / `window.innerHeight`, zero when unavailable.
pub fn window_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().map(|v| v.as_f64().unwrap_or(0.0)).unwrap_or(0.0);
    let height = window.inner_height().map(|v| v.as_f64().unwrap_or(0.0)).unwrap_or(0.0);
    (width, height)
}

pub fn set_cursor(element: &HtmlElement, cursor: Cursor) {
    if let Err(err) = element.style().set_property("cursor", cursor.as_css()) {
        log::warn!("failed to set cursor: {err:?}");
    }
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "" } else { "none" };
    if let Err(err) = element.style().set_property("display", display) {
        log::warn!("failed to toggle visibility: {err:?}");
    }
}

pub fn set_pressed(element: &Element, pressed: bool) {
    let value = if pressed { "true" } else { "false" };
    if let Err(err) = element.set_attribute("aria-pressed", value) {
        log::warn!("failed to set aria-pressed: {err:?}");
    }
}
