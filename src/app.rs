mod contact;
mod header;
mod homepage;
mod projects;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::i18n::{translations, Lang};
use crate::profile::{self, FAVICON_PATH};
use crate::view_state::{Section, ViewState};

use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

/// Page-wide state, provided once by [`App`].
pub fn use_view_state() -> RwSignal<ViewState> {
    expect_context::<RwSignal<ViewState>>()
}

/// Current language as its own memo so text only re-renders on a toggle.
pub fn use_lang() -> Memo<Lang> {
    let state = use_view_state();
    Memo::new(move |_| state.with(|s| s.lang))
}

/// Closes the mobile menu and smooth-scrolls to the section, if it's on the page.
pub fn go_to(state: RwSignal<ViewState>, section: Section) {
    let Some(section) = state.try_update(|s| s.navigate(section.id())).flatten() else {
        return;
    };
    if let Some(el) = document().get_element_by_id(section.id()) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

fn section_top(section: Section) -> Option<f64> {
    document()
        .get_element_by_id(section.id())
        .map(|el| el.get_bounding_client_rect().top())
}

fn page_progress(scroll_y: f64) -> f64 {
    let max = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height() - el.client_height()))
        .unwrap_or(0.0);
    if max > 0.0 {
        (scroll_y / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = RwSignal::new(ViewState::default());
    provide_context(state);
    let lang = use_lang();

    let (progress, set_progress) = signal(0.0_f64);
    provide_context(progress);

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        let tops = Section::ALL.map(|s| (s, section_top(s)));
        state.maybe_update(|s| {
            let before = (s.scrolled, s.active_section);
            s.track_scroll(y, tops);
            before != (s.scrolled, s.active_section)
        });
        set_progress.set(page_progress(y));
    });

    let structured_data = move || profile::structured_data(lang.get()).to_string();

    view! {
        <Html {..} lang=move || lang.get().html_lang() />
        <Title text=move || translations(lang.get()).meta.title />
        <Meta name="description" content=move || translations(lang.get()).meta.description />
        <Link rel="shortcut icon" type_="image/png" href=FAVICON_PATH />
        <script type="application/ld+json" inner_html=structured_data></script>

        <Router>
            <Header />
            <main class="relative overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <projects::ProjectOverlay />
        </Router>
    }
}
