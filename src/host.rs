//! DOM event wiring around the board [`Engine`].
//!
//! One [`Host`] lives behind an `Rc<RefCell<_>>` shared by every listener.
//! Each listener borrows it for a single event, hands the event to the engine,
//! and applies the returned actions before returning.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::doc::Shape;
use canvas::engine::{Action, Engine};
use canvas::input::Tool;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, HtmlElement, HtmlTextAreaElement, PointerEvent, WheelEvent, Window};

use crate::config::HostConfig;
use crate::dom::{self, ToolButton, event_point};

struct Host {
    engine: Engine,
    canvas: HtmlCanvasElement,
    text_input: HtmlTextAreaElement,
    text_panel: HtmlElement,
    tool_buttons: Vec<ToolButton>,
    dump_shapes: bool,
}

impl Host {
    fn apply(&mut self, actions: Vec<Action>) {
        let mut needs_render = false;
        for action in actions {
            match action {
                Action::RenderNeeded => needs_render = true,
                Action::SetCursor(cursor) => dom::set_cursor(&self.canvas, cursor),
                Action::ShapeCommitted(shape) => self.log_shape("committed", &shape),
                Action::ShapeErased(shape) => self.log_shape("erased", &shape),
                Action::BoardCleared => log::info!("board cleared"),
            }
        }
        if needs_render {
            self.render();
        }
    }

    fn render(&self) {
        let started = js_sys::Date::now();
        if let Err(err) = self.engine.render() {
            log::error!("render failed: {err:?}");
        }
        log::trace!(
            "rendered {} shapes in {:.2} ms",
            self.engine.core.shapes().len(),
            js_sys::Date::now() - started
        );
    }

    fn log_shape(&self, verb: &str, shape: &Shape) {
        if !self.dump_shapes {
            return;
        }
        match serde_json::to_string(shape) {
            Ok(json) => log::debug!("{verb} {json}"),
            Err(err) => log::warn!("failed to serialize shape #{}: {err}", shape.id),
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        let actions = self.engine.set_tool(tool);
        self.sync_toolbar();
        self.apply(actions);
    }

    /// Reflect the active tool in the toolbar and the text panel.
    fn sync_toolbar(&self) {
        let active = self.engine.tool();
        for button in &self.tool_buttons {
            dom::set_pressed(&button.element, button.tool == active);
        }
        dom::set_visible(&self.text_panel, active == Tool::Text);
    }

    fn resize(&mut self, window: &Window) {
        let (width, height) = dom::window_size(window);
        self.engine.set_viewport(width, height);
        self.render();
    }

    fn capture(&self, event: &PointerEvent) {
        if let Err(err) = self.canvas.set_pointer_capture(event.pointer_id()) {
            log::warn!("pointer capture failed: {err:?}");
        }
    }

    fn release(&self, event: &PointerEvent) {
        if self.canvas.has_pointer_capture(event.pointer_id()) {
            if let Err(err) = self.canvas.release_pointer_capture(event.pointer_id()) {
                log::warn!("pointer release failed: {err:?}");
            }
        }
    }
}

/// Look up the board's elements, build the engine and attach every listener.
///
/// # Errors
///
/// Returns `Err` if an element named in `config` is missing or has the wrong
/// type, if the canvas has no 2D context, or if a listener cannot be attached.
pub fn start(window: &Window, config: &HostConfig) -> Result<(), JsValue> {
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas: HtmlCanvasElement = dom::get_element(&document, config.board_id)?;
    let text_input: HtmlTextAreaElement = dom::get_element(&document, config.text_input_id)?;
    let text_panel: HtmlElement = dom::get_element(&document, config.text_panel_id)?;
    let reset: HtmlElement = dom::get_element(&document, config.reset_id)?;
    let tool_buttons = dom::tool_buttons(&document, config.tool_selector)?;
    log::debug!("found {} toolbar buttons", tool_buttons.len());

    let engine = Engine::new(canvas.clone())?;
    let host = Rc::new(RefCell::new(Host {
        engine,
        canvas: canvas.clone(),
        text_input,
        text_panel,
        tool_buttons,
        dump_shapes: config.debug_enabled(),
    }));

    {
        let mut host = host.borrow_mut();
        let tool = host.engine.tool();
        host.select_tool(tool);
        host.resize(window);
    }

    attach_pointer_listeners(&canvas, &host)?;
    attach_wheel_listener(&canvas, &host)?;
    attach_resize_listener(window, &host)?;
    attach_toolbar_listeners(&host)?;
    attach_reset_listener(&reset, &host)?;

    log::info!("board ready");
    Ok(())
}

fn attach_pointer_listeners(canvas: &HtmlCanvasElement, host: &Rc<RefCell<Host>>) -> Result<(), JsValue> {
    {
        let host = host.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut guard = host.borrow_mut();
            let host = &mut *guard;
            // Only pans outlive the pointer leaving the board; drawing gestures end on leave.
            if host.engine.tool() == Tool::Pan {
                host.capture(&event);
            }
            let actions = host.engine.on_pointer_down(event_point(&event), &host.text_input);
            host.apply(actions);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let host = host.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut guard = host.borrow_mut();
            let host = &mut *guard;
            let actions = host.engine.on_pointer_move(event_point(&event), &host.text_input);
            host.apply(actions);
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let host = host.clone();
        let onup = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut guard = host.borrow_mut();
            let host = &mut *guard;
            host.release(&event);
            let actions = host.engine.on_pointer_up(event_point(&event), &host.text_input);
            host.apply(actions);
        });
        canvas.add_event_listener_with_callback("pointerup", onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    {
        let host = host.clone();
        let onleave = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut guard = host.borrow_mut();
            let host = &mut *guard;
            let actions = host.engine.on_pointer_leave(event_point(&event), &host.text_input);
            host.apply(actions);
        });
        canvas.add_event_listener_with_callback("pointerleave", onleave.as_ref().unchecked_ref())?;
        onleave.forget();
    }

    Ok(())
}

fn attach_wheel_listener(canvas: &HtmlCanvasElement, host: &Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let host = host.clone();
    let onwheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        event.prevent_default();
        let mut host = host.borrow_mut();
        let actions = host.engine.on_wheel(event_point(&event), event.delta_y());
        host.apply(actions);
    });
    canvas.add_event_listener_with_callback("wheel", onwheel.as_ref().unchecked_ref())?;
    onwheel.forget();
    Ok(())
}

fn attach_resize_listener(window: &Window, host: &Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let host = host.clone();
    let resize_window = window.clone();
    let onresize = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        host.borrow_mut().resize(&resize_window);
    });
    window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();
    Ok(())
}

fn attach_toolbar_listeners(host: &Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let buttons: Vec<(web_sys::Element, Tool)> = host
        .borrow()
        .tool_buttons
        .iter()
        .map(|button| (button.element.clone(), button.tool))
        .collect();

    for (element, tool) in buttons {
        let host = host.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            host.borrow_mut().select_tool(tool);
        });
        element.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

fn attach_reset_listener(reset: &HtmlElement, host: &Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let host = host.clone();
    let onclick = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let mut host = host.borrow_mut();
        let actions = host.engine.reset_board();
        host.apply(actions);
    });
    reset.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}
