use crate::core::{normalize_pointer, ListenerSet, Message};
use crate::dom;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type MessageSink = Rc<dyn Fn(Message)>;

/// Window listeners owned by one pattern slot. Unlike the page listeners
/// these are kept so they can be removed again on teardown.
pub struct PatternListeners {
    resize: Option<Closure<dyn FnMut()>>,
    mousemove: Option<Closure<dyn FnMut(web::MouseEvent)>>,
    touchmove: Option<Closure<dyn FnMut(web::TouchEvent)>>,
    scroll: Option<Closure<dyn FnMut()>>,
}

fn viewport_uv(client_x: f64, client_y: f64) -> Vec2 {
    let (w, h) = dom::viewport_size();
    normalize_pointer(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(w as f32, h as f32),
    )
}

pub fn attach(set: ListenerSet, canvas: &web::HtmlCanvasElement, sink: MessageSink) -> PatternListeners {
    let Some(window) = web::window() else {
        return PatternListeners {
            resize: None,
            mousemove: None,
            touchmove: None,
            scroll: None,
        };
    };

    let resize = set.resize.then(|| {
        let sink = sink.clone();
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let (css_width, css_height) = dom::canvas_css_size(&canvas);
            sink(Message::Resized {
                css_width,
                css_height,
                device_pixel_ratio: dom::device_pixel_ratio(),
            });
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure
    });

    let mousemove = set.pointer.then(|| {
        let sink = sink.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let position = viewport_uv(ev.client_x() as f64, ev.client_y() as f64);
            sink(Message::PointerMoved { position });
        }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure
    });

    let touchmove = set.pointer.then(|| {
        let sink = sink.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                let position = viewport_uv(touch.client_x() as f64, touch.client_y() as f64);
                sink(Message::PointerMoved { position });
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure
    });

    let scroll = set.scroll.then(|| {
        let sink = sink.clone();
        let closure = Closure::wrap(Box::new(move || {
            sink(Message::Scrolled {
                offset: dom::scroll_y(),
            });
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure
    });

    PatternListeners {
        resize,
        mousemove,
        touchmove,
        scroll,
    }
}

impl PatternListeners {
    pub fn detach(self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(c) = &self.resize {
            let _ = window.remove_event_listener_with_callback("resize", c.as_ref().unchecked_ref());
        }
        if let Some(c) = &self.mousemove {
            let _ = window
                .remove_event_listener_with_callback("mousemove", c.as_ref().unchecked_ref());
        }
        if let Some(c) = &self.touchmove {
            let _ = window
                .remove_event_listener_with_callback("touchmove", c.as_ref().unchecked_ref());
        }
        if let Some(c) = &self.scroll {
            let _ = window.remove_event_listener_with_callback("scroll", c.as_ref().unchecked_ref());
        }
    }
}
