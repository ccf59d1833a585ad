//! Entrance animations: the hero timeline played on load and the
//! play-once reveals triggered as content scrolls into view.
//!
//! Everything here is timing only. The web layer turns a [`Reveal`] into a
//! CSS transition from `translateY(from_y)`/transparent to the resting state.

use super::constants::*;
use super::tween::Easing;

/// One element's fade-and-rise: start `from_y` px below (negative: above)
/// its resting place, fully transparent, and ease in after `delay`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub from_y: f32,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Reveal {
    /// Seconds from the start of playback until the element is at rest.
    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }
}

/// The success message that replaces the contact form.
pub const FORM_SUCCESS_REVEAL: Reveal = Reveal {
    from_y: FORM_SUCCESS_RISE_PX,
    duration: FORM_SUCCESS_FADE_SEC,
    delay: 0.0,
    easing: Easing::Power2Out,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeroPart {
    TitleLine,
    Subtitle,
    Description,
    CtaButton,
    ScrollIndicator,
}

/// What the hero section actually contains. Absent parts are skipped and
/// do not shift the rest of the timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroParts {
    pub title_lines: usize,
    pub subtitle: bool,
    pub description: bool,
    pub cta_buttons: usize,
    pub scroll_indicator: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStep {
    pub part: HeroPart,
    pub index: usize,
    pub reveal: Reveal,
}

// Sequential timeline: each group starts where the previous one ended,
// pulled earlier by `overlap`.
struct Timeline {
    delay: f32,
    end: f32,
    steps: Vec<HeroStep>,
}

impl Timeline {
    fn add(
        &mut self,
        part: HeroPart,
        count: usize,
        from_y: f32,
        duration: f32,
        stagger: f32,
        overlap: f32,
    ) {
        if count == 0 {
            return;
        }
        let start = (self.end - overlap).max(0.0);
        for index in 0..count {
            self.steps.push(HeroStep {
                part,
                index,
                reveal: Reveal {
                    from_y,
                    duration,
                    delay: self.delay + start + index as f32 * stagger,
                    easing: Easing::Power2Out,
                },
            });
        }
        let last_end = start + (count - 1) as f32 * stagger + duration;
        self.end = self.end.max(last_end);
    }
}

/// Entrance schedule for the hero section, in playback order.
pub fn hero_timeline(parts: &HeroParts) -> Vec<HeroStep> {
    let mut tl = Timeline {
        delay: HERO_TIMELINE_DELAY_SEC,
        end: 0.0,
        steps: Vec::new(),
    };
    tl.add(HeroPart::TitleLine, parts.title_lines, 50.0, 0.8, 0.2, 0.0);
    tl.add(HeroPart::Subtitle, parts.subtitle as usize, 20.0, 0.6, 0.0, 0.4);
    tl.add(HeroPart::Description, parts.description as usize, 20.0, 0.6, 0.0, 0.3);
    tl.add(HeroPart::CtaButton, parts.cta_buttons, 20.0, 0.6, 0.1, 0.3);
    tl.add(HeroPart::ScrollIndicator, parts.scroll_indicator as usize, -20.0, 0.6, 0.0, 0.2);
    tl.steps
}

/// Content revealed on scroll. Staggered groups share one trigger (their
/// container) and delay each member by its position in the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    SectionHeader,
    TimelineItem,
    ExpertiseArea,
    Project,
    ContactForm,
}

impl RevealGroup {
    pub const ALL: [RevealGroup; 5] = [
        RevealGroup::SectionHeader,
        RevealGroup::TimelineItem,
        RevealGroup::ExpertiseArea,
        RevealGroup::Project,
        RevealGroup::ContactForm,
    ];

    fn stagger(self) -> f32 {
        match self {
            RevealGroup::TimelineItem | RevealGroup::ExpertiseArea => 0.2,
            RevealGroup::Project => 0.1,
            RevealGroup::SectionHeader | RevealGroup::ContactForm => 0.0,
        }
    }

    /// Reveal for the `index`-th member of this group.
    pub fn reveal(self, index: usize) -> Reveal {
        let (from_y, duration) = match self {
            RevealGroup::SectionHeader => (50.0, 0.8),
            RevealGroup::ContactForm => (30.0, 0.8),
            _ => (50.0, 0.6),
        };
        Reveal {
            from_y,
            duration,
            delay: index as f32 * self.stagger(),
            easing: Easing::Power1Out,
        }
    }
}

#[inline]
pub fn trigger_reached(trigger_top: f64, viewport_height: f64) -> bool {
    trigger_top <= viewport_height * REVEAL_START_FRACTION
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTarget {
    pub group: RevealGroup,
    pub index: usize,
}

/// Play-once bookkeeping for every scroll reveal on the page.
#[derive(Debug, Default)]
pub struct RevealTracker {
    targets: Vec<RevealTarget>,
    played: Vec<bool>,
}

impl RevealTracker {
    pub fn new(targets: Vec<RevealTarget>) -> Self {
        let played = vec![false; targets.len()];
        Self { targets, played }
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn pending(&self) -> usize {
        self.played.iter().filter(|p| !**p).count()
    }

    /// Targets whose trigger has come into range, each returned once.
    /// `trigger_tops[i]` is the viewport-relative top of target `i`'s
    /// trigger; targets past the end of the slice are left pending.
    pub fn due(&mut self, trigger_tops: &[f64], viewport_height: f64) -> Vec<(usize, Reveal)> {
        let mut out = Vec::new();
        for (i, (target, top)) in self.targets.iter().zip(trigger_tops).enumerate() {
            if self.played[i] || !trigger_reached(*top, viewport_height) {
                continue;
            }
            self.played[i] = true;
            out.push((i, target.group.reveal(target.index)));
        }
        if !out.is_empty() {
            log::debug!("[reveal] {} played, {} pending", out.len(), self.pending());
        }
        out
    }
}
