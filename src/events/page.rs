use crate::app::App;
use crate::constants::FILTER_ATTR;
use crate::core::PageEvent;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn fire(app: &Rc<RefCell<App>>, event: PageEvent) {
    app.borrow_mut().dispatch(event);
}

fn wire_nav_links(app: &Rc<RefCell<App>>) {
    let links = app.borrow().view().nav_links().to_vec();
    for link in links {
        let app = app.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        let id = href.strip_prefix('#').unwrap_or(&href).to_string();
        dom::add_listener(link.unchecked_ref(), "click", move |ev| {
            ev.prevent_default();
            let target_top = app.borrow().view().section_top(&id);
            fire(
                &app,
                PageEvent::NavClicked {
                    id: id.clone(),
                    target_top,
                },
            );
        });
    }
}

fn wire_menu_toggle(app: &Rc<RefCell<App>>) {
    let Some(toggle) = app.borrow().view().menu_toggle().cloned() else {
        return;
    };
    let app = app.clone();
    dom::add_listener(toggle.unchecked_ref(), "click", move |_| {
        fire(&app, PageEvent::MenuToggled);
    });
}

fn wire_filters(app: &Rc<RefCell<App>>) {
    let buttons = app.borrow().view().filter_buttons().to_vec();
    for btn in buttons {
        let Some(filter) = btn.get_attribute(FILTER_ATTR) else {
            continue;
        };
        let app = app.clone();
        dom::add_listener(btn.unchecked_ref(), "click", move |_| {
            fire(&app, PageEvent::FilterSelected(filter.clone()));
        });
    }
}

fn wire_contact_form(app: &Rc<RefCell<App>>) {
    let Some(form) = app.borrow().view().contact_form().cloned() else {
        return;
    };
    let app = app.clone();
    dom::add_listener(form.unchecked_ref(), "submit", move |ev| {
        ev.prevent_default();
        fire(&app, PageEvent::ContactSubmitted);
    });
}

fn wire_scroll(app: &Rc<RefCell<App>>, window: &web::Window) {
    let app = app.clone();
    dom::add_listener(window.unchecked_ref(), "scroll", move |_| {
        let extents = app.borrow().view().section_extents();
        let (_, viewport_height) = dom::viewport_size();
        fire(
            &app,
            PageEvent::Scrolled {
                scroll_y: dom::scroll_y(),
                viewport_height,
                extents,
            },
        );
        app.borrow_mut().check_reveals();
    });
}

fn wire_resize(app: &Rc<RefCell<App>>, window: &web::Window) {
    let app = app.clone();
    dom::add_listener(window.unchecked_ref(), "resize", move |_| {
        app.borrow_mut().check_reveals();
    });
}

fn wire_pagehide(app: &Rc<RefCell<App>>, window: &web::Window) {
    let app = app.clone();
    dom::add_listener(window.unchecked_ref(), "pagehide", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        fire(&app, PageEvent::PageHidden { persisted });
    });
}

/// Attach every page-lifetime listener.
pub fn wire_page(app: &Rc<RefCell<App>>) {
    let Some(window) = web::window() else {
        return;
    };
    wire_nav_links(app);
    wire_menu_toggle(app);
    wire_filters(app);
    wire_contact_form(app);
    wire_scroll(app, &window);
    wire_resize(app, &window);
    wire_pagehide(app, &window);
}
