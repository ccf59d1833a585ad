use crate::constants::*;
use crate::core::{
    hero_timeline, HeroPart, HeroParts, Reveal, RevealGroup, RevealTarget, RevealTracker,
};
use crate::dom;
use crate::view::transition_css;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Put `el` in its pre-reveal state with no transition running.
fn hide(el: &web::HtmlElement, from_y: f32) {
    let style = el.style();
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", &format!("translateY({}px)", from_y));
}

/// Fade and rise `el` into place.
pub fn play(el: &web::HtmlElement, reveal: &Reveal) {
    hide(el, reveal.from_y);
    // Reading layout commits the start state so the transition below runs
    let _ = el.offset_height();
    let style = el.style();
    let _ = style.set_property(
        "transition",
        &transition_css(reveal.duration, reveal.easing, reveal.delay),
    );
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}

fn play_element(el: Option<&web::Element>, reveal: &Reveal) {
    if let Some(html) = el.and_then(|e| e.dyn_ref::<web::HtmlElement>()) {
        play(html, reveal);
    }
}

/// Run the hero entrance timeline once.
pub fn play_hero(document: &web::Document) {
    let lines = dom::query_all(document, HERO_TITLE_LINES);
    let subtitle = dom::query_one(document, HERO_SUBTITLE);
    let description = dom::query_one(document, HERO_DESCRIPTION);
    let buttons = dom::query_all(document, HERO_CTA_BUTTONS);
    let indicator = dom::query_one(document, HERO_SCROLL_INDICATOR);

    let steps = hero_timeline(&HeroParts {
        title_lines: lines.len(),
        subtitle: subtitle.is_some(),
        description: description.is_some(),
        cta_buttons: buttons.len(),
        scroll_indicator: indicator.is_some(),
    });
    log::debug!("[reveal] hero entrance, {} elements", steps.len());
    for step in steps {
        let el = match step.part {
            HeroPart::TitleLine => lines.get(step.index),
            HeroPart::Subtitle => subtitle.as_ref(),
            HeroPart::Description => description.as_ref(),
            HeroPart::CtaButton => buttons.get(step.index),
            HeroPart::ScrollIndicator => indicator.as_ref(),
        };
        play_element(el, &step.reveal);
    }
}

// (members, shared trigger container)
fn group_selectors(group: RevealGroup) -> (&'static str, Option<&'static str>) {
    match group {
        RevealGroup::SectionHeader => (SECTION_HEADERS, None),
        RevealGroup::TimelineItem => (TIMELINE_ITEMS, Some(TIMELINE)),
        RevealGroup::ExpertiseArea => (EXPERTISE_AREAS, Some(EXPERTISE_GRID)),
        RevealGroup::Project => (PROJECT_ITEMS, Some(PROJECTS_GRID)),
        RevealGroup::ContactForm => (CONTACT_FORM_BLOCK, None),
    }
}

fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

/// Page content that fades in the first time it scrolls into view.
pub struct ScrollReveals {
    tracker: RevealTracker,
    elements: Vec<web::HtmlElement>,
    triggers: Vec<web::Element>,
}

impl ScrollReveals {
    /// Find every reveal target and hide it until its trigger is reached.
    pub fn collect(document: &web::Document) -> Self {
        let mut targets = Vec::new();
        let mut elements = Vec::new();
        let mut triggers = Vec::new();
        for group in RevealGroup::ALL {
            let (selector, container) = group_selectors(group);
            for (index, el) in dom::query_all(document, selector).into_iter().enumerate() {
                // The hero has its own entrance
                if group == RevealGroup::SectionHeader && closest(&el, HOME_SECTION).is_some() {
                    continue;
                }
                let trigger = container
                    .and_then(|c| closest(&el, c))
                    .unwrap_or_else(|| el.clone());
                let Ok(html) = el.dyn_into::<web::HtmlElement>() else {
                    continue;
                };
                hide(&html, group.reveal(index).from_y);
                targets.push(RevealTarget { group, index });
                elements.push(html);
                triggers.push(trigger);
            }
        }
        log::debug!("[reveal] {} scroll reveals", targets.len());
        Self {
            tracker: RevealTracker::new(targets),
            elements,
            triggers,
        }
    }

    /// Play every reveal whose trigger is now in range.
    pub fn check(&mut self) {
        if self.tracker.pending() == 0 {
            return;
        }
        let (_, viewport_height) = dom::viewport_size();
        let tops: Vec<f64> = self
            .triggers
            .iter()
            .map(|t| t.get_bounding_client_rect().top())
            .collect();
        for (i, reveal) in self.tracker.due(&tops, viewport_height) {
            if let Some(el) = self.elements.get(i) {
                play(el, &reveal);
            }
        }
    }
}
