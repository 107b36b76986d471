use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(target: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Elements under `root` carrying `class`, in document order.
pub fn elements_by_class(root: &web::Element, class: &str) -> Vec<web::Element> {
    let list = root.get_elements_by_class_name(class);
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn set_body_cursor(document: &web::Document, css: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("cursor", css);
    }
}

/// Resizes the canvas backing store to its CSS box times the device pixel
/// ratio and returns the new size in pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Creates the full-size canvas inside `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(id);
    _ = canvas
        .style()
        .set_css_text("display:block;width:100%;height:100%;touch-action:none");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}
