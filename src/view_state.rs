use crate::catalog::{self, Project};
use crate::contact::ContactState;
use crate::i18n::{Lang, NavStrings};

/// Vertical offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// A section becomes active when its top edge is this close to the viewport top.
pub const ACTIVE_WINDOW: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Stack,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Stack,
        Section::Projects,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Stack => "stack",
            Section::Projects => "projects",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn label(self, nav: &NavStrings) -> &'static str {
        match self {
            Section::Home => nav.home,
            Section::Stack => nav.stack,
            Section::Projects => nav.projects,
            Section::Testimonials => nav.testimonials,
            Section::Contact => nav.contact,
        }
    }
}

/// Everything on the page that changes after load.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub lang: Lang,
    pub scrolled: bool,
    pub active_section: Section,
    selected_project: Option<&'static Project>,
    pub mobile_menu_open: bool,
    pub contact: ContactState,
}

impl ViewState {
    /// Applies a scroll event.
    ///
    /// `tops` yields each section's top edge relative to the viewport, in page
    /// order, or `None` when the element isn't in the document. The last
    /// section whose top lies in `[0, ACTIVE_WINDOW]` wins; when none does the
    /// active section is left alone.
    pub fn track_scroll<I>(&mut self, scroll_y: f64, tops: I)
    where
        I: IntoIterator<Item = (Section, Option<f64>)>,
    {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        if let Some(section) = tops
            .into_iter()
            .filter_map(|(section, top)| Some((section, top?)))
            .filter(|(_, top)| (0.0..=ACTIVE_WINDOW).contains(top))
            .map(|(section, _)| section)
            .last()
        {
            self.active_section = section;
        }
    }

    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggle();
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Bookkeeping for a nav click: closes the mobile menu and resolves the
    /// target. The caller does the actual scrolling; `None` means nothing to do.
    pub fn navigate(&mut self, id: &str) -> Option<Section> {
        self.mobile_menu_open = false;
        Section::from_id(id)
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected_project
    }

    /// Opens the detail overlay for a catalog project. Unknown ids change nothing.
    pub fn select_project(&mut self, id: u32) -> bool {
        match catalog::project(id) {
            Some(p) => {
                self.selected_project = Some(p);
                true
            }
            None => false,
        }
    }

    pub fn close_project(&mut self) {
        self.selected_project = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations;

    fn tops(values: [Option<f64>; 5]) -> Vec<(Section, Option<f64>)> {
        Section::ALL.into_iter().zip(values).collect()
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.lang, Lang::En);
        assert!(!state.scrolled);
        assert_eq!(state.active_section, Section::Home);
        assert!(state.selected_project().is_none());
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut state = ViewState::default();
        state.track_scroll(50.0, Vec::new());
        assert!(!state.scrolled);
        state.track_scroll(50.5, Vec::new());
        assert!(state.scrolled);
        state.track_scroll(0.0, Vec::new());
        assert!(!state.scrolled);
    }

    #[test]
    fn test_last_section_in_window_wins() {
        let mut state = ViewState::default();
        state.track_scroll(
            900.0,
            tops([Some(-900.0), Some(10.0), Some(390.0), Some(1200.0), None]),
        );
        assert_eq!(state.active_section, Section::Projects);

        state.track_scroll(
            1300.0,
            tops([Some(-1300.0), Some(-400.0), Some(0.0), Some(400.0), Some(401.0)]),
        );
        assert_eq!(state.active_section, Section::Testimonials);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut state = ViewState::default();
        state.track_scroll(2000.0, tops([None, None, None, None, Some(120.0)]));
        assert_eq!(state.active_section, Section::Contact);

        state.track_scroll(
            2600.0,
            tops([Some(-2600.0), Some(-1800.0), Some(-1000.0), Some(-600.0), Some(-1.0)]),
        );
        assert_eq!(state.active_section, Section::Contact);
    }

    #[test]
    fn test_missing_sections_skipped() {
        let mut state = ViewState::default();
        state.track_scroll(100.0, tops([None, Some(50.0), None, None, None]));
        assert_eq!(state.active_section, Section::Stack);
    }

    #[test]
    fn test_select_and_close_project() {
        let mut state = ViewState::default();
        assert!(state.select_project(6));
        let first = state.selected_project().expect("selected");
        assert_eq!(first.title, "VIAPET.SHOP");

        state.close_project();
        assert!(state.selected_project().is_none());

        assert!(state.select_project(1));
        assert!(state.select_project(2));
        let p = state.selected_project().expect("selected");
        assert_eq!(p.id, 2);
        assert!(std::ptr::eq(p, catalog::project(2).expect("exists")));
    }

    #[test]
    fn test_select_unknown_project_is_noop() {
        let mut state = ViewState::default();
        assert!(state.select_project(3));
        assert!(!state.select_project(404));
        assert_eq!(state.selected_project().map(|p| p.id), Some(3));
    }

    #[test]
    fn test_language_round_trip() {
        let mut state = ViewState::default();
        let before = Section::ALL.map(|s| s.label(&translations(state.lang).nav));
        state.toggle_language();
        assert_eq!(state.lang, Lang::Pt);
        assert_eq!(translations(state.lang).nav.contact, "Contato");
        state.toggle_language();
        let after = Section::ALL.map(|s| s.label(&translations(state.lang).nav));
        assert_eq!(before, after);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut state = ViewState::default();
        state.toggle_menu();
        assert!(state.mobile_menu_open);
        assert_eq!(state.navigate("contact"), Some(Section::Contact));
        assert!(!state.mobile_menu_open);

        state.toggle_menu();
        assert_eq!(state.navigate("pricing"), None);
        assert!(!state.mobile_menu_open);
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_section_ids() {
        for s in Section::ALL {
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
        assert_eq!(Section::from_id("blog"), None);
    }
}
