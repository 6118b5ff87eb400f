//! Color and pen-width swatch rows.
//!
//! One button builder covers both jobs: selectable swatches carry a data
//! attribute and set shared state on click, display-only swatches just
//! reflect the current selection.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement};

#[derive(Clone, Copy, PartialEq)]
pub enum SwatchRole {
    Select,
    Display,
}

fn make_swatch(document: &Document, role: SwatchRole) -> Result<HtmlButtonElement, JsValue> {
    let button = document
        .create_element("button")?
        .dyn_into::<HtmlButtonElement>()?;
    let _ = button.set_attribute("type", "button");
    let class_name = match role {
        SwatchRole::Select => "swatch",
        SwatchRole::Display => "swatch current",
    };
    let _ = button.set_attribute("class", class_name);
    if role == SwatchRole::Display {
        button.set_disabled(true);
    }
    Ok(button)
}

pub fn render_color_row(
    document: &Document,
    row: &HtmlElement,
    colors: &[&str],
    role: SwatchRole,
) -> Result<(), JsValue> {
    row.set_inner_html("");
    for color in colors {
        let button = make_swatch(document, role)?;
        if role == SwatchRole::Select {
            let _ = button.set_attribute("data-color", color);
            let _ = button.set_attribute("aria-label", &format!("Use color {color}"));
        }
        let _ = button.style().set_property("background", color);
        let _ = row.append_child(&button);
    }
    Ok(())
}

pub fn render_pen_row(
    document: &Document,
    row: &HtmlElement,
    widths: &[f64],
    role: SwatchRole,
) -> Result<(), JsValue> {
    row.set_inner_html("");
    for width in widths {
        let button = make_swatch(document, role)?;
        if role == SwatchRole::Select {
            let _ = button.set_attribute("data-width", &width.to_string());
            let _ = button.set_attribute("aria-label", &format!("Use pen width {width}"));
        }
        let dot = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        let _ = dot.set_attribute("class", "pen-dot");
        let _ = dot.style().set_property("width", &format!("{width}px"));
        let _ = dot.style().set_property("height", &format!("{width}px"));
        let _ = button.append_child(&dot);
        let _ = row.append_child(&button);
    }
    Ok(())
}

fn swatch_attribute(event: &Event, name: &str) -> Option<String> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(value) = element.get_attribute(name) {
            return Some(value);
        }
        current = element.parent_element().map(|parent| parent.into());
    }
    None
}

pub fn color_from_event(event: &Event) -> Option<String> {
    swatch_attribute(event, "data-color")
}

pub fn width_from_event(event: &Event) -> Option<f64> {
    swatch_attribute(event, "data-width")?.parse::<f64>().ok()
}

pub fn set_current_color(row: &HtmlElement, color: &str) {
    let Ok(Some(node)) = row.query_selector(".swatch") else {
        return;
    };
    if let Ok(button) = node.dyn_into::<HtmlElement>() {
        let _ = button.style().set_property("background", color);
    }
}

pub fn set_current_width(row: &HtmlElement, width: f64) {
    let Ok(Some(node)) = row.query_selector(".pen-dot") else {
        return;
    };
    if let Ok(dot) = node.dyn_into::<HtmlElement>() {
        let _ = dot.style().set_property("width", &format!("{width}px"));
        let _ = dot.style().set_property("height", &format!("{width}px"));
    }
}
