use std::fmt;
use std::rc::Rc;
use yew::prelude::*;

/// Scroll distance past which the bar leaves the top of the page.
pub const SCROLL_THRESHOLD: f64 = 100.0;
/// Offset added to the scroll position before looking up the active section.
pub const SECTION_LOOKAHEAD: f64 = 100.0;
pub const NARROW_BREAKPOINT: f64 = 768.0;
pub const SCROLL_THROTTLE_MS: u32 = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Services,
    Projects,
    Pricing,
    Contact,
}

impl Section {
    /// Page order. Scroll lookups walk this front to back.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Projects,
        Section::Pricing,
        Section::Contact,
    ];

    /// DOM id of the section element, also used as the anchor fragment.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Projects => "Work",
            Section::Pricing => "Plans",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::Services => "⚙️",
            Section::Projects => "📁",
            Section::Pricing => "₹",
            Section::Contact => "📞",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical span `[top, top + height)` a section occupies on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self { section, top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section, in page order, whose extent contains `scroll_y` plus the
/// lookahead. Sections without a measured extent are skipped.
pub fn section_at(scroll_y: f64, extents: &[SectionExtent]) -> Option<Section> {
    let probe = scroll_y + SECTION_LOOKAHEAD;
    Section::ALL.into_iter().find(|section| {
        extents
            .iter()
            .any(|extent| extent.section == *section && extent.contains(probe))
    })
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

pub fn is_narrow(viewport_width: f64) -> bool {
    viewport_width < NARROW_BREAKPOINT
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarMode {
    Top,
    Bottom,
}

impl BarMode {
    pub fn resolve(scrolled: bool, narrow: bool) -> Self {
        if scrolled || narrow {
            BarMode::Bottom
        } else {
            BarMode::Top
        }
    }
}

/// Which menu representation is on screen while the menu is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSurface {
    Dropdown,
    Sheet,
}

/// Page-owned view of the scroll position: the active section and whether
/// the threshold has been passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    pub active: Section,
    pub scrolled: bool,
}

pub enum SpyAction {
    Sample {
        scroll_y: f64,
        extents: Vec<SectionExtent>,
    },
    Jump(Section),
}

impl ScrollSpy {
    pub fn apply(&self, action: SpyAction) -> Self {
        match action {
            SpyAction::Sample { scroll_y, extents } => Self {
                // no match keeps whatever was active before
                active: section_at(scroll_y, &extents).unwrap_or(self.active),
                scrolled: is_scrolled(scroll_y),
            },
            SpyAction::Jump(section) => Self {
                active: section,
                scrolled: self.scrolled,
            },
        }
    }
}

impl Reducible for ScrollSpy {
    type Action = SpyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// State owned by a single navbar instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub current: Section,
    pub scrolled: bool,
    pub narrow: bool,
    pub menu_open: bool,
}

pub enum NavAction {
    /// Adopt the section the page reports as active.
    Adopt(Section),
    AdoptScrolled(bool),
    Resized(f64),
    Select(Section),
    ToggleMenu,
}

impl NavState {
    pub fn new(current: Section, scrolled: bool, viewport_width: f64) -> Self {
        Self {
            current,
            scrolled,
            narrow: is_narrow(viewport_width),
            menu_open: false,
        }
    }

    pub fn apply(&self, action: NavAction) -> Self {
        let mut next = self.clone();
        match action {
            NavAction::Adopt(section) => next.current = section,
            NavAction::AdoptScrolled(scrolled) => next.scrolled = scrolled,
            NavAction::Resized(width) => next.narrow = is_narrow(width),
            NavAction::Select(section) => {
                next.current = section;
                next.menu_open = false;
            }
            NavAction::ToggleMenu => next.menu_open = !self.menu_open,
        }
        next
    }

    pub fn bar_mode(&self) -> BarMode {
        BarMode::resolve(self.scrolled, self.narrow)
    }

    pub fn menu_surface(&self) -> Option<MenuSurface> {
        if !self.menu_open {
            return None;
        }
        Some(match self.bar_mode() {
            BarMode::Top => MenuSurface::Dropdown,
            BarMode::Bottom => MenuSurface::Sheet,
        })
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0..900 home, 900..1700 services, 1700..2900 projects,
    // 2900..3800 pricing, 3800..4500 contact
    fn page() -> Vec<SectionExtent> {
        vec![
            SectionExtent::new(Section::Home, 0.0, 900.0),
            SectionExtent::new(Section::Services, 900.0, 800.0),
            SectionExtent::new(Section::Projects, 1700.0, 1200.0),
            SectionExtent::new(Section::Pricing, 2900.0, 900.0),
            SectionExtent::new(Section::Contact, 3800.0, 700.0),
        ]
    }

    fn sample(spy: &ScrollSpy, scroll_y: f64) -> ScrollSpy {
        spy.apply(SpyAction::Sample {
            scroll_y,
            extents: page(),
        })
    }

    #[test]
    fn test_section_ids_round_trip_in_page_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "services", "projects", "pricing", "contact"]);
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::Pricing.anchor(), "#pricing");
    }

    #[test]
    fn test_section_at_uses_lookahead() {
        let extents = page();
        assert_eq!(section_at(0.0, &extents), Some(Section::Home));
        // 799 + 100 is still inside home, 800 + 100 is the first services pixel
        assert_eq!(section_at(799.0, &extents), Some(Section::Home));
        assert_eq!(section_at(800.0, &extents), Some(Section::Services));
        assert_eq!(section_at(2850.0, &extents), Some(Section::Pricing));
        assert_eq!(section_at(4399.0, &extents), Some(Section::Contact));
        assert_eq!(section_at(4400.0, &extents), None);
    }

    #[test]
    fn test_section_at_matches_first_in_page_order_for_every_offset() {
        let extents = page();
        let mut offset = -200.0;
        while offset < 5000.0 {
            let expected = Section::ALL.into_iter().find(|section| {
                extents
                    .iter()
                    .any(|e| e.section == *section && e.contains(offset + SECTION_LOOKAHEAD))
            });
            assert_eq!(section_at(offset, &extents), expected, "offset {offset}");
            offset += 37.5;
        }
    }

    #[test]
    fn test_overlapping_extents_prefer_earlier_section() {
        // extents listed out of order and overlapping
        let extents = vec![
            SectionExtent::new(Section::Pricing, 0.0, 1000.0),
            SectionExtent::new(Section::Services, 0.0, 1000.0),
        ];
        assert_eq!(section_at(0.0, &extents), Some(Section::Services));
    }

    #[test]
    fn test_unmatched_scroll_keeps_previous_section() {
        let spy = sample(&ScrollSpy::default(), 3000.0);
        assert_eq!(spy.active, Section::Pricing);

        let past_end = sample(&spy, 9000.0);
        assert_eq!(past_end.active, Section::Pricing);
        assert!(past_end.scrolled);

        let nothing_measured = spy.apply(SpyAction::Sample {
            scroll_y: 0.0,
            extents: Vec::new(),
        });
        assert_eq!(nothing_measured.active, Section::Pricing);
        assert!(!nothing_measured.scrolled);
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_narrow(767.0));
        assert!(!is_narrow(768.0));
    }

    #[test]
    fn test_jump_overrides_until_next_sample() {
        let spy = sample(&ScrollSpy::default(), 0.0);
        let jumped = spy.apply(SpyAction::Jump(Section::Contact));
        assert_eq!(jumped.active, Section::Contact);
        assert_eq!(sample(&jumped, 0.0).active, Section::Home);
    }

    #[test]
    fn test_bar_mode_for_all_combinations() {
        assert_eq!(BarMode::resolve(false, false), BarMode::Top);
        assert_eq!(BarMode::resolve(true, false), BarMode::Bottom);
        assert_eq!(BarMode::resolve(false, true), BarMode::Bottom);
        assert_eq!(BarMode::resolve(true, true), BarMode::Bottom);
    }

    #[test]
    fn test_narrow_viewport_forces_bottom_bar_at_top_of_page() {
        let spy = sample(&ScrollSpy::default(), 0.0);
        let nav = NavState::new(spy.active, spy.scrolled, 375.0);
        assert_eq!(nav.bar_mode(), BarMode::Bottom);
    }

    #[test]
    fn test_wide_viewport_below_threshold_keeps_top_bar() {
        let extents = vec![
            SectionExtent::new(Section::Home, 0.0, 120.0),
            SectionExtent::new(Section::Services, 120.0, 400.0),
        ];
        let spy = ScrollSpy::default().apply(SpyAction::Sample {
            scroll_y: 50.0,
            extents,
        });
        let nav = NavState::new(spy.active, spy.scrolled, 1440.0);
        assert_eq!(nav.bar_mode(), BarMode::Top);
        // offset 150 lies in services
        assert_eq!(nav.current, Section::Services);
    }

    #[test]
    fn test_resize_switches_bar_mode() {
        let nav = NavState::new(Section::Home, false, 1440.0);
        assert_eq!(nav.bar_mode(), BarMode::Top);
        let nav = nav.apply(NavAction::Resized(600.0));
        assert_eq!(nav.bar_mode(), BarMode::Bottom);
        let nav = nav.apply(NavAction::Resized(1024.0));
        assert_eq!(nav.bar_mode(), BarMode::Top);
    }

    #[test]
    fn test_select_sets_active_and_closes_menu_from_any_state() {
        for section in Section::ALL {
            for menu_open in [false, true] {
                for current in Section::ALL {
                    let nav = NavState {
                        current,
                        scrolled: menu_open,
                        narrow: false,
                        menu_open,
                    };
                    let next = nav.apply(NavAction::Select(section));
                    assert_eq!(next.current, section);
                    assert!(!next.menu_open);
                    assert_eq!(next.scrolled, nav.scrolled);
                }
            }
        }
    }

    #[test]
    fn test_menu_surface_follows_bar_mode() {
        let nav = NavState::new(Section::Home, false, 1440.0);
        assert_eq!(nav.menu_surface(), None);

        let open = nav.apply(NavAction::ToggleMenu);
        assert_eq!(open.menu_surface(), Some(MenuSurface::Dropdown));

        let scrolled = open.apply(NavAction::AdoptScrolled(true));
        assert_eq!(scrolled.menu_surface(), Some(MenuSurface::Sheet));

        let closed = scrolled.apply(NavAction::ToggleMenu);
        assert_eq!(closed.menu_surface(), None);
    }

    #[test]
    fn test_adopt_follows_page_state() {
        let nav = NavState::new(Section::Home, false, 1440.0)
            .apply(NavAction::Adopt(Section::Projects))
            .apply(NavAction::AdoptScrolled(true));
        assert_eq!(nav.current, Section::Projects);
        assert_eq!(nav.bar_mode(), BarMode::Bottom);
    }
}
