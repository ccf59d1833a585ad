// Host-side tests for the page controller: navigation, section presets,
// project filtering and the contact form.

use clearseas_web::core::{
    default_presets, default_slot_configs, Message, PageCommand, PageController, PageEvent,
    PatternVariant, SectionExtent, SLOT_ABOUT, SLOT_CONTACT, SLOT_EXPERTISE, SLOT_PROJECTS,
};
use glam::Vec3;

const SECTION_IDS: [&str; 5] = ["home", "about", "expertise", "projects", "contact"];
const VIEWPORT: f64 = 900.0;

fn controller() -> PageController {
    PageController::new(
        SECTION_IDS.iter().map(|s| s.to_string()).collect(),
        vec!["web".into(), "mobile".into(), "web".into()],
    )
}

fn extents() -> Vec<SectionExtent> {
    SECTION_IDS
        .iter()
        .enumerate()
        .map(|(i, id)| SectionExtent {
            id: id.to_string(),
            top: i as f64 * 800.0,
            height: 800.0,
        })
        .collect()
}

fn scroll(c: &mut PageController, y: f64) -> Vec<PageCommand> {
    c.handle(PageEvent::Scrolled {
        scroll_y: y,
        viewport_height: VIEWPORT,
        extents: extents(),
    })
}

fn preset_slots(cmds: &[PageCommand]) -> Vec<usize> {
    cmds.iter()
        .filter_map(|c| match c {
            PageCommand::ApplyPreset { slot, .. } => Some(*slot),
            _ => None,
        })
        .collect()
}

#[test]
fn starts_on_first_section_with_all_projects() {
    let c = controller();
    assert_eq!(c.active_section(), "home");
    assert_eq!(c.filter(), "all");
    assert!(!c.is_menu_open());
    assert!(!c.is_nav_scrolled());
    assert_eq!(c.visible_projects(), vec![0, 1, 2]);
}

#[test]
fn empty_page_defaults_to_home() {
    let c = PageController::new(Vec::new(), Vec::new());
    assert_eq!(c.active_section(), "home");
}

#[test]
fn menu_toggle_flips_state() {
    let mut c = controller();
    assert_eq!(
        c.handle(PageEvent::MenuToggled),
        vec![PageCommand::SetMenuOpen(true)]
    );
    assert!(c.is_menu_open());
    assert_eq!(
        c.handle(PageEvent::MenuToggled),
        vec![PageCommand::SetMenuOpen(false)]
    );
    assert!(!c.is_menu_open());
}

#[test]
fn nav_click_closes_menu_and_scrolls_without_preset() {
    let mut c = controller();
    c.handle(PageEvent::MenuToggled);
    let cmds = c.handle(PageEvent::NavClicked {
        id: "projects".into(),
        target_top: Some(2400.0),
    });
    assert_eq!(
        cmds,
        vec![
            PageCommand::SetMenuOpen(false),
            PageCommand::ScrollTo { top: 2400.0 },
            PageCommand::SetActiveNav("projects".into()),
        ]
    );
    assert_eq!(c.active_section(), "projects");
    assert!(preset_slots(&cmds).is_empty());
}

#[test]
fn nav_click_to_missing_section_only_closes_menu() {
    let mut c = controller();
    assert!(c
        .handle(PageEvent::NavClicked {
            id: "nowhere".into(),
            target_top: None,
        })
        .is_empty());

    c.handle(PageEvent::MenuToggled);
    let cmds = c.handle(PageEvent::NavClicked {
        id: "nowhere".into(),
        target_top: None,
    });
    assert_eq!(cmds, vec![PageCommand::SetMenuOpen(false)]);
    assert_eq!(c.active_section(), "home");
}

#[test]
fn each_section_change_applies_exactly_one_preset() {
    let mut c = controller();

    // Marker = scroll + viewport / 3 = 300: still home
    assert!(preset_slots(&scroll(&mut c, 0.0)).is_empty());

    // Marker 900: about
    let cmds = scroll(&mut c, 600.0);
    assert!(cmds.contains(&PageCommand::SetActiveNav("about".into())));
    assert_eq!(preset_slots(&cmds), vec![SLOT_ABOUT]);

    // Same section again: nothing new
    assert!(preset_slots(&scroll(&mut c, 650.0)).is_empty());

    // Marker 1700: expertise
    let cmds = scroll(&mut c, 1400.0);
    assert_eq!(preset_slots(&cmds), vec![SLOT_EXPERTISE]);
    assert_eq!(c.active_section(), "expertise");
}

#[test]
fn applied_preset_matches_table() {
    let mut c = controller();
    let cmds = scroll(&mut c, 600.0);
    let preset = cmds
        .iter()
        .find_map(|c| match c {
            PageCommand::ApplyPreset { preset, .. } => Some(*preset),
            _ => None,
        })
        .expect("preset");
    assert_eq!(preset.hue_shift, 0.05);
    assert_eq!(preset.brightness, 1.1);
    assert_eq!(preset.saturation, 1.2);
    assert_eq!(preset.accent_color, Vec3::new(1.0, 0.7, 0.2));
    assert_eq!(preset.pulse_speed, 0.7);
    assert_eq!(preset.duration, 1.5);
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let mut c = controller();
    let mut ext = extents();
    // Stretch "about" so it overlaps "expertise"
    ext[1].height = 2000.0;
    let cmds = c.handle(PageEvent::Scrolled {
        scroll_y: 1400.0,
        viewport_height: VIEWPORT,
        extents: ext,
    });
    assert_eq!(preset_slots(&cmds), vec![SLOT_EXPERTISE]);
}

#[test]
fn scroll_marker_outside_every_section_keeps_current() {
    let mut c = controller();
    let cmds = scroll(&mut c, 10_000.0);
    assert!(preset_slots(&cmds).is_empty());
    assert_eq!(c.active_section(), "home");
}

#[test]
fn nav_scrolled_flag_toggles_at_threshold() {
    let mut c = controller();
    assert!(!scroll(&mut c, 50.0).contains(&PageCommand::SetNavScrolled(true)));
    assert!(scroll(&mut c, 51.0).contains(&PageCommand::SetNavScrolled(true)));
    assert!(c.is_nav_scrolled());
    // No repeat while it stays scrolled
    assert!(!scroll(&mut c, 120.0)
        .iter()
        .any(|cmd| matches!(cmd, PageCommand::SetNavScrolled(_))));
    assert!(scroll(&mut c, 0.0).contains(&PageCommand::SetNavScrolled(false)));
}

#[test]
fn category_filter_hides_other_projects_and_pulses() {
    let mut c = controller();
    let cmds = c.handle(PageEvent::FilterSelected("web".into()));
    assert_eq!(
        cmds,
        vec![
            PageCommand::SetActiveFilter("web".into()),
            PageCommand::ShowProject(0),
            PageCommand::HideProject(1),
            PageCommand::ShowProject(2),
            PageCommand::Pattern {
                slot: SLOT_PROJECTS,
                message: Message::SimulateScroll {
                    speed: 0.8,
                    duration: 1.0,
                },
            },
        ]
    );
    assert_eq!(c.filter(), "web");
    assert_eq!(c.visible_projects(), vec![0, 2]);
    assert!(!c.is_project_visible(1));
}

#[test]
fn all_filter_shows_every_project() {
    let mut c = controller();
    c.handle(PageEvent::FilterSelected("mobile".into()));
    assert_eq!(c.visible_projects(), vec![1]);
    let cmds = c.handle(PageEvent::FilterSelected("all".into()));
    let shown = cmds
        .iter()
        .filter(|cmd| matches!(cmd, PageCommand::ShowProject(_)))
        .count();
    assert_eq!(shown, 3);
    assert_eq!(c.visible_projects(), vec![0, 1, 2]);
}

#[test]
fn filter_without_projects_skips_pulse() {
    let mut c = PageController::new(vec!["home".into()], Vec::new());
    let cmds = c.handle(PageEvent::FilterSelected("web".into()));
    assert_eq!(cmds, vec![PageCommand::SetActiveFilter("web".into())]);
}

#[test]
fn contact_submission_shows_success_and_pulses_green() {
    let mut c = controller();
    let cmds = c.handle(PageEvent::ContactSubmitted);
    assert_eq!(
        cmds,
        vec![
            PageCommand::ShowFormSuccess,
            PageCommand::Pattern {
                slot: SLOT_CONTACT,
                message: Message::SimulateScroll {
                    speed: 1.0,
                    duration: 1.0,
                },
            },
            PageCommand::Pattern {
                slot: SLOT_CONTACT,
                message: Message::ChangeAccentColor {
                    color: Vec3::new(0.2, 1.0, 0.5),
                },
            },
        ]
    );
    assert!(c.is_form_submitted());
}

#[test]
fn pagehide_tears_down_patterns_when_page_is_discarded() {
    let mut c = controller();
    let cmds = c.handle(PageEvent::PageHidden { persisted: false });
    assert_eq!(cmds, vec![PageCommand::TeardownPatterns]);
}

#[test]
fn pagehide_into_bfcache_keeps_patterns_alive() {
    let mut c = controller();
    assert!(c.handle(PageEvent::PageHidden { persisted: true }).is_empty());
    // Restored page keeps reacting to scroll as before
    assert_eq!(preset_slots(&scroll(&mut c, 700.0)), vec![SLOT_ABOUT]);
}

#[test]
fn preset_expands_to_renderer_messages_in_order() {
    let presets = default_presets();
    let entry = presets.get("expertise").expect("expertise preset");
    let msgs = entry.preset.messages();
    assert_eq!(
        msgs[0],
        Message::AnimateHueShift {
            target: 0.6,
            duration: 1.5
        }
    );
    assert!(matches!(msgs[1], Message::AnimateBrightness { .. }));
    assert!(matches!(msgs[2], Message::AnimateSaturation { .. }));
    assert_eq!(
        msgs[3],
        Message::ChangeAccentColor {
            color: Vec3::new(0.2, 0.6, 1.0)
        }
    );
    assert_eq!(
        msgs[4],
        Message::SimulateScroll {
            speed: 0.6,
            duration: 1.5
        }
    );
}

#[test]
fn every_section_has_a_preset_on_its_own_slot() {
    let presets = default_presets();
    for (slot, id) in SECTION_IDS.iter().enumerate() {
        let entry = presets.get(*id).expect("preset");
        assert_eq!(entry.slot, slot);
    }
    assert_eq!(presets.len(), SECTION_IDS.len());
}

#[test]
fn slot_configs_cover_every_canvas() {
    let configs = default_slot_configs();
    let ids: Vec<&str> = configs.iter().map(|c| c.canvas_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "pattern1Canvas",
            "pattern2Canvas",
            "expertiseCanvas",
            "projectsCanvas",
            "contactCanvas"
        ]
    );
    assert_eq!(configs[1].variant, PatternVariant::PinkRoses);
    assert_eq!(configs[3].variant, PatternVariant::PinkRoses);
    assert_eq!(configs[0].variant, PatternVariant::RedRoses);
    assert!(configs
        .iter()
        .all(|c| c.interact_with_mouse && c.interact_with_scroll));
}
