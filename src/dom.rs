use crate::core::{PatternError, SurfaceSize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    canvas_id: &str,
) -> Result<web::HtmlCanvasElement, PatternError> {
    document
        .get_element_by_id(canvas_id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or_else(|| PatternError::CanvasNotFound(canvas_id.to_string()))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Attach a page-lifetime listener. The closure is leaked on purpose; these
/// listeners live as long as the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// CSS size of the canvas as laid out on screen.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    (canvas.client_width() as f64, canvas.client_height() as f64)
}

pub fn canvas_surface_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let (w, h) = canvas_css_size(canvas);
    SurfaceSize::from_css(w, h, device_pixel_ratio())
}

pub fn set_canvas_backing_size(canvas: &web::HtmlCanvasElement, size: SurfaceSize) {
    if canvas.width() != size.width {
        canvas.set_width(size.width);
    }
    if canvas.height() != size.height {
        canvas.set_height(size.height);
    }
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, PatternError> {
    let fetch_err = |e: wasm_bindgen::JsValue| PatternError::TextureFetch(format!("{:?}", e));
    let window = web::window().ok_or_else(|| PatternError::TextureFetch("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?
        .dyn_into()
        .map_err(fetch_err)?;
    if !resp.ok() {
        return Err(PatternError::TextureFetch(format!(
            "{} returned HTTP {}",
            url,
            resp.status()
        )));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
