// Page selectors and class names the web layer binds to.
pub const NAVIGATION: &str = ".navigation";
pub const MENU_TOGGLE: &str = ".navigation__menu-toggle";
pub const NAV_ITEMS: &str = ".navigation__items";
pub const NAV_LINKS: &str = ".navigation__item a";
pub const SECTIONS: &str = ".section";
pub const FILTER_BUTTONS: &str = ".projects__filter-btn[data-filter]";
pub const PROJECTS: &str = ".project[data-category]";
pub const CONTACT_FORM_ID: &str = "contactForm";

pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";
// Set while a project is fading out; cleared when it is shown again
pub const HIDING_ATTR: &str = "data-hiding";

pub const CLASS_NAV_ACTIVE: &str = "is-active";
pub const CLASS_NAV_SCROLLED: &str = "is-scrolled";
pub const CLASS_MENU_TOGGLE_OPEN: &str = "is-active";
pub const CLASS_MENU_ITEMS_OPEN: &str = "is-visible";
pub const CLASS_BODY_NO_SCROLL: &str = "no-scroll";
pub const CLASS_FILTER_ACTIVE: &str = "active";

pub const FORM_SUCCESS_HTML: &str = "<div class=\"form__success\"><h3>Thank you for your message!</h3><p>I'll get back to you as soon as possible.</p></div>";

// Entrance and scroll-reveal targets
pub const HERO_TITLE_LINES: &str = ".hero__title .hero__title-line";
pub const HERO_SUBTITLE: &str = ".hero__subtitle";
pub const HERO_DESCRIPTION: &str = ".hero__description";
pub const HERO_CTA_BUTTONS: &str = ".hero__cta .button";
pub const HERO_SCROLL_INDICATOR: &str = ".hero__scroll-indicator";
pub const HOME_SECTION: &str = "#home";
pub const SECTION_HEADERS: &str = ".section__header";
pub const TIMELINE_ITEMS: &str = ".timeline__item";
pub const TIMELINE: &str = ".timeline";
pub const EXPERTISE_AREAS: &str = ".expertise__area";
pub const EXPERTISE_GRID: &str = ".expertise__areas";
pub const PROJECT_ITEMS: &str = ".project";
pub const PROJECTS_GRID: &str = ".projects__grid";
pub const CONTACT_FORM_BLOCK: &str = ".contact__form";
pub const FORM_SUCCESS: &str = ".form__success";
