use crate::constants::*;
use crate::core::constants::{PROJECT_FADE_SEC, PROJECT_HIDDEN_SCALE};
use crate::core::{Easing, SectionExtent, FORM_SUCCESS_REVEAL};
use crate::dom;
use crate::reveal;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles for the page chrome the controller drives.
pub struct PageView {
    document: web::Document,
    navigation: Option<web::Element>,
    menu_toggle: Option<web::Element>,
    menu_items: Option<web::Element>,
    nav_links: Vec<web::Element>,
    sections: Vec<web::HtmlElement>,
    filter_buttons: Vec<web::Element>,
    projects: Vec<web::HtmlElement>,
    contact_form: Option<web::Element>,
}

fn as_html(elements: Vec<web::Element>) -> Vec<web::HtmlElement> {
    elements
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

impl PageView {
    pub fn collect(document: &web::Document) -> Self {
        let view = Self {
            navigation: dom::query_one(document, NAVIGATION),
            menu_toggle: dom::query_one(document, MENU_TOGGLE),
            menu_items: dom::query_one(document, NAV_ITEMS),
            nav_links: dom::query_all(document, NAV_LINKS),
            sections: as_html(dom::query_all(document, SECTIONS)),
            filter_buttons: dom::query_all(document, FILTER_BUTTONS),
            projects: as_html(dom::query_all(document, PROJECTS)),
            contact_form: document.get_element_by_id(CONTACT_FORM_ID),
            document: document.clone(),
        };
        log::debug!(
            "[view] {} sections, {} nav links, {} projects",
            view.sections.len(),
            view.nav_links.len(),
            view.projects.len()
        );
        view
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id()).collect()
    }

    pub fn project_categories(&self) -> Vec<String> {
        self.projects
            .iter()
            .map(|p| p.get_attribute(CATEGORY_ATTR).unwrap_or_default())
            .collect()
    }

    pub fn section_extents(&self) -> Vec<SectionExtent> {
        self.sections
            .iter()
            .map(|s| SectionExtent {
                id: s.id(),
                top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
            .collect()
    }

    pub fn section_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| el.offset_top() as f64)
    }

    pub fn menu_toggle(&self) -> Option<&web::Element> {
        self.menu_toggle.as_ref()
    }

    pub fn nav_links(&self) -> &[web::Element] {
        &self.nav_links
    }

    pub fn filter_buttons(&self) -> &[web::Element] {
        &self.filter_buttons
    }

    pub fn contact_form(&self) -> Option<&web::Element> {
        self.contact_form.as_ref()
    }

    pub fn set_active_nav(&self, id: &str) {
        let href = format!("#{}", id);
        for link in &self.nav_links {
            let on = link.get_attribute("href").as_deref() == Some(href.as_str());
            let _ = link.class_list().toggle_with_force(CLASS_NAV_ACTIVE, on);
        }
    }

    pub fn set_nav_scrolled(&self, scrolled: bool) {
        if let Some(nav) = &self.navigation {
            let _ = nav
                .class_list()
                .toggle_with_force(CLASS_NAV_SCROLLED, scrolled);
        }
    }

    pub fn set_menu_open(&self, open: bool) {
        if let Some(t) = &self.menu_toggle {
            let _ = t.class_list().toggle_with_force(CLASS_MENU_TOGGLE_OPEN, open);
        }
        if let Some(items) = &self.menu_items {
            let _ = items
                .class_list()
                .toggle_with_force(CLASS_MENU_ITEMS_OPEN, open);
        }
        if let Some(body) = self.document.body() {
            let _ = body
                .class_list()
                .toggle_with_force(CLASS_BODY_NO_SCROLL, open);
        }
    }

    pub fn set_active_filter(&self, filter: &str) {
        for btn in &self.filter_buttons {
            let on = btn.get_attribute(FILTER_ATTR).as_deref() == Some(filter);
            let _ = btn.class_list().toggle_with_force(CLASS_FILTER_ACTIVE, on);
        }
    }

    pub fn show_project(&self, index: usize) {
        let Some(project) = self.projects.get(index) else {
            return;
        };
        let _ = project.remove_attribute(HIDING_ATTR);
        let style = project.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("transition", &fade_transition());
        // Let the display change land before the transition starts
        let target = project.clone();
        dom::set_timeout(0, move || {
            let style = target.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "scale(1)");
        });
    }

    pub fn hide_project(&self, index: usize) {
        let Some(project) = self.projects.get(index) else {
            return;
        };
        let _ = project.set_attribute(HIDING_ATTR, "");
        let style = project.style();
        let _ = style.set_property("transition", &fade_transition());
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", &format!("scale({})", PROJECT_HIDDEN_SCALE));
        let target = project.clone();
        dom::set_timeout((PROJECT_FADE_SEC * 1000.0) as i32, move || {
            // A show issued during the fade wins
            if target.has_attribute(HIDING_ATTR) {
                let _ = target.style().set_property("display", "none");
            }
        });
    }

    pub fn show_form_success(&self) {
        let Some(form) = &self.contact_form else {
            return;
        };
        form.set_inner_html(FORM_SUCCESS_HTML);
        if let Some(message) = form
            .query_selector(FORM_SUCCESS)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            reveal::play(&message, &FORM_SUCCESS_REVEAL);
        }
    }

    pub fn scroll_to(&self, top: f64) {
        let Some(window) = web::window() else {
            return;
        };
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

// CSS timing functions matching the core easings
fn css_timing(easing: Easing) -> &'static str {
    match easing {
        Easing::Linear => "linear",
        Easing::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        Easing::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
    }
}

/// Opacity + transform transition for `duration` seconds after `delay`.
pub fn transition_css(duration: f32, easing: Easing, delay: f32) -> String {
    format!(
        "opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s",
        d = duration,
        e = css_timing(easing),
        delay = delay
    )
}

fn fade_transition() -> String {
    transition_css(PROJECT_FADE_SEC, Easing::Power2Out, 0.0)
}
