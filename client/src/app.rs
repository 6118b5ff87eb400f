use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    PointerEvent, StorageEvent,
};

use inktale_shared::{
    decode_story, draw_steps, new_steps, BoardEvent, EventHub, EventKind, Pointer, Story,
};

use crate::controller::CanvasController;
use crate::dom::{event_to_point, get_element};
use crate::persistence::{load_story, local_storage, save_story, STORAGE_KEY};
use crate::surface::CanvasSurface;
use crate::swatches::{
    color_from_event, render_color_row, render_pen_row, set_current_color, set_current_width,
    width_from_event, SwatchRole,
};

const COLORS: [&str; 5] = ["black", "white", "red", "green", "blue"];
const PEN_WIDTHS: [f64; 3] = [1.0, 3.0, 6.0];

fn random_session() -> u32 {
    (js_sys::Math::random() * (u32::MAX as f64 + 1.0)) as u32
}

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    js_sys::Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, "canvas")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let colors_row: HtmlElement = get_element(&document, "color-btns")?;
    let pens_row: HtmlElement = get_element(&document, "pens")?;
    let curr_color_slot: HtmlElement = get_element(&document, "curr-color")?;
    let curr_pen_slot: HtmlElement = get_element(&document, "curr-pen")?;
    let save_button: HtmlButtonElement = get_element(&document, "save")?;
    let clear_button: HtmlButtonElement = get_element(&document, "clear")?;

    let hub = Rc::new(EventHub::new());
    let story = Rc::new(RefCell::new(Story::new(random_session())));
    let pointer = Rc::new(Pointer::new(hub.clone()));
    let controller = Rc::new(CanvasController::new(canvas.clone(), ctx, hub.clone()));

    render_color_row(&document, &colors_row, &COLORS, SwatchRole::Select)?;
    render_pen_row(&document, &pens_row, &PEN_WIDTHS, SwatchRole::Select)?;
    render_color_row(&document, &curr_color_slot, &COLORS[..1], SwatchRole::Display)?;
    render_pen_row(&document, &curr_pen_slot, &PEN_WIDTHS[..1], SwatchRole::Display)?;

    {
        let story = story.clone();
        let slot = curr_color_slot.clone();
        hub.subscribe(EventKind::ColorChanged, move |event| {
            let BoardEvent::ColorChanged(color) = event else {
                return Ok(());
            };
            story.borrow_mut().set_color(color);
            set_current_color(&slot, color);
            Ok(())
        });
    }

    {
        let story = story.clone();
        let slot = curr_pen_slot.clone();
        hub.subscribe(EventKind::WidthChanged, move |event| {
            let BoardEvent::WidthChanged(width) = event else {
                return Ok(());
            };
            story.borrow_mut().set_width(*width);
            set_current_width(&slot, *width);
            Ok(())
        });
    }

    {
        let story = story.clone();
        let controller = controller.clone();
        hub.subscribe(EventKind::PointMoved, move |event| {
            let BoardEvent::PointMoved { x, y } = event else {
                return Ok(());
            };
            if controller.is_drawing() {
                story.borrow_mut().accumulate(*x, *y);
            }
            Ok(())
        });
    }

    {
        let story = story.clone();
        hub.subscribe(EventKind::StrokeFinished, move |_| {
            story.borrow_mut().write();
            Ok(())
        });
    }

    {
        let controller = controller.clone();
        let pointer = pointer.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let (x, y) = event_to_point(&down_canvas, &event);
            controller.set_drawing(true);
            controller.apply_style();
            pointer.set_point(x, y);
            let ctx = controller.ctx();
            ctx.begin_path();
            ctx.move_to(pointer.x(), pointer.y());
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let controller = controller.clone();
        let pointer = pointer.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if !controller.is_drawing() {
                return;
            }
            let (x, y) = event_to_point(&move_canvas, &event);
            pointer.set_point(x, y);
            let ctx = controller.ctx();
            ctx.line_to(pointer.x(), pointer.y());
            ctx.stroke();
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let controller = controller.clone();
        let pointer = pointer.clone();
        let hub = hub.clone();
        let up_canvas = canvas.clone();
        let onup = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if !controller.is_drawing() {
                return;
            }
            let (x, y) = event_to_point(&up_canvas, &event);
            pointer.set_point(x, y);
            let ctx = controller.ctx();
            ctx.line_to(pointer.x(), pointer.y());
            ctx.stroke();
            ctx.close_path();
            controller.set_drawing(false);
            hub.dispatch(&BoardEvent::StrokeFinished);
        });
        canvas.add_event_listener_with_callback("pointerup", onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    {
        let controller = controller.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(color) = color_from_event(&event) {
                controller.set_color(&color);
            }
        });
        colors_row.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let controller = controller.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(width) = width_from_event(&event) {
                controller.set_width(width);
            }
        });
        pens_row.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    let storage = local_storage(&window)?;

    {
        let story = story.clone();
        let storage = storage.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut story = story.borrow_mut();
            story.save();
            save_story(&storage, story.steps());
        });
        save_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let story = story.clone();
        let controller = controller.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            controller.clear();
            story.borrow_mut().update(Vec::new());
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let story = story.clone();
        let controller = controller.clone();
        let document_cb = document.clone();
        let onstorage = Closure::<dyn FnMut(StorageEvent)>::new(move |event: StorageEvent| {
            // Only a hidden tab adopts remote changes; the visible tab is the
            // one that produced them.
            if !document_cb.hidden() {
                return;
            }
            if event.key().as_deref() != Some(STORAGE_KEY) {
                return;
            }
            let Some(payload) = event.new_value() else {
                return;
            };
            let snapshot = match decode_story(&payload) {
                Ok(snapshot) => snapshot,
                Err(error) => {
                    web_sys::console::warn_1(
                        &format!("Ignoring unreadable story snapshot: {error}").into(),
                    );
                    return;
                }
            };
            let mut story = story.borrow_mut();
            let fresh = new_steps(snapshot, &story);
            if fresh.is_empty() {
                return;
            }
            let mut surface = CanvasSurface::new(controller.ctx());
            draw_steps(&fresh, &mut surface);
            story.adopt(fresh);
        });
        window.add_event_listener_with_callback("storage", onstorage.as_ref().unchecked_ref())?;
        onstorage.forget();
    }

    {
        let loaded = load_story(&storage);
        let mut story = story.borrow_mut();
        story.update(loaded);
        if !story.steps().is_empty() {
            let mut surface = CanvasSurface::new(controller.ctx());
            draw_steps(story.steps(), &mut surface);
        }
    }

    controller.set_color(COLORS[0]);
    controller.set_width(PEN_WIDTHS[0]);

    Ok(())
}
