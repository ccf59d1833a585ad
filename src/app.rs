use crate::core::{PageCommand, PageController, PageEvent};
use crate::reveal::ScrollReveals;
use crate::slot::PatternSlot;
use crate::view::PageView;

/// Page-level state: the controller, its DOM view, pending scroll reveals
/// and the mounted pattern slots (indexed as in `default_slot_configs`).
pub struct App {
    controller: PageController,
    view: PageView,
    reveals: ScrollReveals,
    slots: Vec<Option<PatternSlot>>,
}

impl App {
    pub fn new(view: PageView, reveals: ScrollReveals) -> Self {
        let controller = PageController::new(view.section_ids(), view.project_categories());
        log::info!(
            "[page] {} sections, active {}",
            controller.sections().len(),
            controller.active_section()
        );
        Self {
            controller,
            view,
            reveals,
            slots: Vec::new(),
        }
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn set_slots(&mut self, slots: Vec<Option<PatternSlot>>) {
        self.slots = slots;
    }

    pub fn check_reveals(&mut self) {
        self.reveals.check();
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        for cmd in self.controller.handle(event) {
            self.execute(cmd);
        }
    }

    fn slot(&self, index: usize) -> Option<&PatternSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn execute(&self, cmd: PageCommand) {
        match cmd {
            PageCommand::ScrollTo { top } => self.view.scroll_to(top),
            PageCommand::SetActiveNav(id) => self.view.set_active_nav(&id),
            PageCommand::SetNavScrolled(on) => self.view.set_nav_scrolled(on),
            PageCommand::SetMenuOpen(open) => self.view.set_menu_open(open),
            PageCommand::ApplyPreset { slot, preset } => {
                if let Some(s) = self.slot(slot) {
                    s.apply_preset(&preset);
                }
            }
            PageCommand::Pattern { slot, message } => {
                if let Some(s) = self.slot(slot) {
                    s.send(message);
                }
            }
            PageCommand::SetActiveFilter(filter) => self.view.set_active_filter(&filter),
            PageCommand::ShowProject(i) => self.view.show_project(i),
            PageCommand::HideProject(i) => self.view.hide_project(i),
            PageCommand::ShowFormSuccess => self.view.show_form_success(),
            PageCommand::TeardownPatterns => self.teardown(),
        }
    }

    /// Dispose every pattern slot. Safe to call more than once.
    fn teardown(&self) {
        for slot in self.slots.iter().flatten() {
            slot.teardown();
        }
    }
}
