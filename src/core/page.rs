//! Page-level state: active section, menu, project filter, and which pattern
//! preset each section change pushes to which renderer slot.

use super::constants::*;
use super::pattern::{Message, PatternConfig, PatternVariant};
use fnv::FnvHashMap;
use glam::Vec3;

pub const SLOT_HOME: usize = 0;
pub const SLOT_ABOUT: usize = 1;
pub const SLOT_EXPERTISE: usize = 2;
pub const SLOT_PROJECTS: usize = 3;
pub const SLOT_CONTACT: usize = 4;

/// Parameter bundle pushed to one renderer when its section becomes active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionPreset {
    pub hue_shift: f32,
    pub brightness: f32,
    pub saturation: f32,
    pub accent_color: Vec3,
    pub pulse_speed: f32,
    pub duration: f32,
}

impl SectionPreset {
    pub const fn new(
        hue_shift: f32,
        brightness: f32,
        saturation: f32,
        accent_color: Vec3,
        pulse_speed: f32,
    ) -> Self {
        Self {
            hue_shift,
            brightness,
            saturation,
            accent_color,
            pulse_speed,
            duration: PRESET_TRANSITION_SEC,
        }
    }

    /// The renderer calls this preset expands to, in issue order.
    pub fn messages(&self) -> [Message; 5] {
        [
            Message::AnimateHueShift {
                target: self.hue_shift,
                duration: self.duration,
            },
            Message::AnimateBrightness {
                target: self.brightness,
                duration: self.duration,
            },
            Message::AnimateSaturation {
                target: self.saturation,
                duration: self.duration,
            },
            Message::ChangeAccentColor {
                color: self.accent_color,
            },
            Message::SimulateScroll {
                speed: self.pulse_speed,
                duration: self.duration,
            },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetEntry {
    pub slot: usize,
    pub preset: SectionPreset,
}

pub fn default_presets() -> FnvHashMap<String, PresetEntry> {
    let table = [
        (
            "home",
            SLOT_HOME,
            SectionPreset::new(0.0, 1.2, 1.3, Vec3::new(1.0, 0.2, 0.3), 0.8),
        ),
        (
            "about",
            SLOT_ABOUT,
            SectionPreset::new(0.05, 1.1, 1.2, Vec3::new(1.0, 0.7, 0.2), 0.7),
        ),
        (
            "expertise",
            SLOT_EXPERTISE,
            SectionPreset::new(0.6, 0.9, 1.0, Vec3::new(0.2, 0.6, 1.0), 0.6),
        ),
        (
            "projects",
            SLOT_PROJECTS,
            SectionPreset::new(0.7, 1.0, 0.9, Vec3::new(0.3, 0.5, 0.9), 0.7),
        ),
        (
            "contact",
            SLOT_CONTACT,
            SectionPreset::new(0.8, 1.2, 1.4, Vec3::new(0.1, 0.9, 0.7), 0.9),
        ),
    ];
    table
        .into_iter()
        .map(|(id, slot, preset)| (id.to_string(), PresetEntry { slot, preset }))
        .collect()
}

/// Initial configuration of the five background slots, indexed by slot.
pub fn default_slot_configs() -> Vec<PatternConfig> {
    let slot = |canvas_id: &str, variant: u32, hue: f32, bright: f32, sat: f32, accent: Vec3| {
        PatternConfig {
            canvas_id: canvas_id.to_string(),
            variant: PatternVariant::from_selector(variant),
            hue_shift: hue,
            brightness: bright,
            saturation: sat,
            interact_with_mouse: true,
            interact_with_scroll: true,
            accent_color: accent,
        }
    };
    vec![
        slot("pattern1Canvas", 1, 0.0, 1.0, 1.2, Vec3::new(1.0, 0.2, 0.3)),
        slot("pattern2Canvas", 2, 0.1, 1.0, 1.0, Vec3::new(1.0, 0.6, 0.2)),
        slot("expertiseCanvas", 1, 0.2, 0.8, 0.9, Vec3::new(0.2, 0.7, 0.9)),
        slot("projectsCanvas", 2, 0.5, 0.9, 0.8, Vec3::new(0.2, 0.5, 0.8)),
        slot("contactCanvas", 1, 0.7, 0.7, 1.1, Vec3::new(0.1, 0.8, 0.6)),
    ]
}

// Visual feedback for the filter buttons and the contact form
pub const FILTER_PULSE: (f32, f32) = (0.8, 1.0);
pub const CONTACT_PULSE: (f32, f32) = (1.0, 1.0);
pub const CONTACT_SUCCESS_ACCENT: Vec3 = Vec3::new(0.2, 1.0, 0.5);

/// Vertical extent of a section element as measured at event time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    NavClicked {
        id: String,
        target_top: Option<f64>,
    },
    Scrolled {
        scroll_y: f64,
        viewport_height: f64,
        extents: Vec<SectionExtent>,
    },
    MenuToggled,
    FilterSelected(String),
    ContactSubmitted,
    /// `pagehide`; `persisted` is set when the page is entering the
    /// back/forward cache and may be shown again.
    PageHidden { persisted: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageCommand {
    ScrollTo { top: f64 },
    SetActiveNav(String),
    SetNavScrolled(bool),
    SetMenuOpen(bool),
    ApplyPreset { slot: usize, preset: SectionPreset },
    Pattern { slot: usize, message: Message },
    SetActiveFilter(String),
    ShowProject(usize),
    HideProject(usize),
    ShowFormSuccess,
    TeardownPatterns,
}

pub struct PageController {
    sections: Vec<String>,
    active_section: String,
    menu_open: bool,
    nav_scrolled: bool,
    filter: String,
    project_categories: Vec<String>,
    project_visible: Vec<bool>,
    form_submitted: bool,
    presets: FnvHashMap<String, PresetEntry>,
}

impl PageController {
    pub fn new(sections: Vec<String>, project_categories: Vec<String>) -> Self {
        Self::with_presets(sections, project_categories, default_presets())
    }

    pub fn with_presets(
        sections: Vec<String>,
        project_categories: Vec<String>,
        presets: FnvHashMap<String, PresetEntry>,
    ) -> Self {
        let active_section = sections
            .first()
            .cloned()
            .unwrap_or_else(|| "home".to_string());
        let project_visible = vec![true; project_categories.len()];
        Self {
            sections,
            active_section,
            menu_open: false,
            nav_scrolled: false,
            filter: FILTER_ALL.to_string(),
            project_categories,
            project_visible,
            form_submitted: false,
            presets,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_project_visible(&self, index: usize) -> bool {
        self.project_visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_projects(&self) -> Vec<usize> {
        self.project_visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }

    pub fn is_form_submitted(&self) -> bool {
        self.form_submitted
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<PageCommand> {
        let mut out = Vec::new();
        match event {
            PageEvent::NavClicked { id, target_top } => {
                if self.menu_open {
                    self.menu_open = false;
                    out.push(PageCommand::SetMenuOpen(false));
                }
                if let Some(top) = target_top {
                    out.push(PageCommand::ScrollTo { top });
                    self.set_active(id, &mut out);
                }
            }
            PageEvent::Scrolled {
                scroll_y,
                viewport_height,
                extents,
            } => self.on_scroll(scroll_y, viewport_height, &extents, &mut out),
            PageEvent::MenuToggled => {
                self.menu_open = !self.menu_open;
                out.push(PageCommand::SetMenuOpen(self.menu_open));
            }
            PageEvent::FilterSelected(filter) => self.apply_filter(filter, &mut out),
            PageEvent::ContactSubmitted => {
                log::info!("[page] contact form submitted (simulated)");
                self.form_submitted = true;
                out.push(PageCommand::ShowFormSuccess);
                out.push(PageCommand::Pattern {
                    slot: SLOT_CONTACT,
                    message: Message::SimulateScroll {
                        speed: CONTACT_PULSE.0,
                        duration: CONTACT_PULSE.1,
                    },
                });
                out.push(PageCommand::Pattern {
                    slot: SLOT_CONTACT,
                    message: Message::ChangeAccentColor {
                        color: CONTACT_SUCCESS_ACCENT,
                    },
                });
            }
            PageEvent::PageHidden { persisted: true } => {
                log::debug!("[page] pagehide into bfcache, keeping patterns");
            }
            PageEvent::PageHidden { persisted: false } => {
                log::info!("[page] pagehide, disposing patterns");
                out.push(PageCommand::TeardownPatterns);
            }
        }
        out
    }

    fn set_active(&mut self, id: String, out: &mut Vec<PageCommand>) {
        out.push(PageCommand::SetActiveNav(id.clone()));
        self.active_section = id;
    }

    fn on_scroll(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        extents: &[SectionExtent],
        out: &mut Vec<PageCommand>,
    ) {
        let scrolled = scroll_y > NAV_SCROLLED_THRESHOLD_PX;
        if scrolled != self.nav_scrolled {
            self.nav_scrolled = scrolled;
            out.push(PageCommand::SetNavScrolled(scrolled));
        }

        let marker = scroll_y + viewport_height * SECTION_MARKER_FRACTION;
        let Some(current) = extents.iter().rev().find(|e| e.contains(marker)) else {
            return;
        };
        if current.id == self.active_section {
            return;
        }
        log::debug!(
            "[page] section {} -> {}",
            self.active_section,
            current.id
        );
        self.set_active(current.id.clone(), out);
        if let Some(entry) = self.presets.get(&current.id) {
            out.push(PageCommand::ApplyPreset {
                slot: entry.slot,
                preset: entry.preset,
            });
        }
    }

    fn apply_filter(&mut self, filter: String, out: &mut Vec<PageCommand>) {
        out.push(PageCommand::SetActiveFilter(filter.clone()));
        if self.project_categories.is_empty() {
            self.filter = filter;
            return;
        }
        for (i, category) in self.project_categories.iter().enumerate() {
            let visible = filter == FILTER_ALL || *category == filter;
            self.project_visible[i] = visible;
            out.push(if visible {
                PageCommand::ShowProject(i)
            } else {
                PageCommand::HideProject(i)
            });
        }
        self.filter = filter;
        out.push(PageCommand::Pattern {
            slot: SLOT_PROJECTS,
            message: Message::SimulateScroll {
                speed: FILTER_PULSE.0,
                duration: FILTER_PULSE.1,
            },
        });
    }
}
