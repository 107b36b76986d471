use crate::dom;
use crate::frame::Clock;
use crate::overlay::DomHost;
use glam::Vec2;
use room_core::InteractionController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<InteractionController>>,
    pub host: Rc<RefCell<DomHost>>,
    pub clock: Clock,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_resize(&w);
}

/// Event position in canvas backing pixels, the unit the controller's
/// viewport is measured in.
pub fn canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let (w_css, h_css) = (rect.width() as f32, rect.height() as f32);
    if w_css <= 0.0 || h_css <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        x_css / w_css * canvas.width() as f32,
        y_css / h_css * canvas.height() as f32,
    )
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = canvas_px(&ev, &w.canvas);
        let mut host = w.host.borrow_mut();
        w.controller
            .borrow_mut()
            .on_pointer_move(&mut *host, pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = canvas_px(&ev, &w.canvas);
        let mut host = w.host.borrow_mut();
        w.controller
            .borrow_mut()
            .on_click(&mut *host, pos.x, pos.y, w.clock.now());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = canvas_px(&ev, &w.canvas);
        w.controller.borrow_mut().on_pointer_down(pos.x, pos.y);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.controller.borrow_mut().on_pointer_up();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas);
        w.controller
            .borrow_mut()
            .resize(width as f32, height as f32);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
