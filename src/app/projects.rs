use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::catalog::{self, Project, ProjectStatus};
use crate::i18n::{translations, Lang, ProjectStrings};
use crate::profile;
use crate::view_state::Section;

use super::{use_lang, use_view_state};

fn status_badge(status: ProjectStatus, t: &ProjectStrings) -> (&'static str, &'static str) {
    match status {
        ProjectStatus::Completed => (t.status_completed, "bg-lime-400 text-black"),
        ProjectStatus::InDevelopment => (t.status_dev, "bg-yellow-400 text-black animate-pulse"),
    }
}

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let lang = use_lang();
    let t = move || &translations(lang.get()).projects;

    view! {
        <section id=Section::Projects.id() class="py-24 bg-neutral-950">
            <div class="container mx-auto px-4">
                <p class="text-lime-400 font-bold mb-2">{move || t().label}</p>
                <h2 class="text-4xl md:text-6xl font-black mb-16">{move || t().title}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {catalog::projects()
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
                <div class="mt-12 text-center">
                    <a
                        href=profile::github_link()
                        target="_blank"
                        rel="noreferrer"
                        class="inline-block border-2 border-white px-6 py-3 font-bold hover:bg-white hover:text-black"
                    >
                        {move || t().view_github}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let state = use_view_state();
    let lang = use_lang();
    let id = project.id;

    view! {
        <article class="bg-neutral-800 border-2 border-neutral-700 hover:border-lime-400 transition-colors flex flex-col">
            <div class=format!("h-2 {}", project.accent)></div>
            <div class="p-6 flex flex-col flex-grow">
                <div class="flex justify-between items-start mb-4 gap-2 text-xs font-bold">
                    <span class="text-neutral-400">{move || project.category.get(lang.get())}</span>
                    {move || {
                        let (label, class) = status_badge(project.status, &translations(lang.get()).projects);
                        view! { <span class=format!("px-2 py-1 {class}")>{label}</span> }
                    }}
                </div>
                <h3 class="text-2xl font-black mb-2">{project.title}</h3>
                <p class="text-neutral-400 text-sm mb-4 flex-grow">
                    {move || project.summary.get(lang.get())}
                </p>
                <TagList tags=project.tags />
                <button
                    class="mt-6 w-full border-2 border-lime-400 text-lime-400 py-2 font-bold hover:bg-lime-400 hover:text-black"
                    on:click=move |_| {
                        state.update(|s| {
                            s.select_project(id);
                        });
                    }
                >
                    {move || translations(lang.get()).projects.view_details}
                </button>
            </div>
        </article>
    }
}

#[component]
fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="text-xs px-2 py-1 bg-neutral-900 border border-neutral-700">
                            {*tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Detail overlay for the selected project. Renders nothing when none is selected.
#[component]
pub fn ProjectOverlay() -> impl IntoView {
    let state = use_view_state();
    let lang = use_lang();
    let selected = Memo::new(move |_| state.with(|s| s.selected_project().map(|p| p.id)));

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            state.update(|s| s.close_project());
        }
    });

    move || {
        selected
            .get()
            .and_then(catalog::project)
            .map(|project| view! { <ProjectDetails project lang=lang.get() /> })
    }
}

#[component]
fn ProjectDetails(project: &'static Project, lang: Lang) -> impl IntoView {
    let state = use_view_state();
    let t = &translations(lang).projects;
    let (status_label, status_class) = status_badge(project.status, t);
    let close = move |_| state.update(|s| s.close_project());

    view! {
        <div
            class="fixed inset-0 z-[70] bg-black/80 backdrop-blur-sm flex items-center justify-center p-4"
            on:click=close
        >
            <div
                class="bg-neutral-900 border-2 border-lime-400 max-w-3xl w-full max-h-[90vh] overflow-y-auto"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class=format!("h-2 {}", project.accent)></div>
                <div class="p-8">
                    <div class="flex justify-between items-start mb-6 gap-4">
                        <h2 class="text-3xl md:text-5xl font-black">{project.title}</h2>
                        <button
                            class="border-2 border-white px-3 py-1 font-bold hover:bg-white hover:text-black"
                            on:click=close
                        >
                            {t.close}
                        </button>
                    </div>
                    <div class="flex gap-2 mb-8 text-xs font-bold">
                        <span class=format!("px-2 py-1 {status_class}")>{status_label}</span>
                        <span class="px-2 py-1 border border-neutral-600">
                            {project.category.get(lang)}
                        </span>
                    </div>
                    <h3 class="text-lime-400 font-bold mb-2">{t.about}</h3>
                    <p class="text-neutral-300 mb-8 leading-relaxed">{project.details.get(lang)}</p>
                    <h3 class="text-lime-400 font-bold mb-2">{t.tech}</h3>
                    <TagList tags=project.tags />
                    <div class="flex flex-col sm:flex-row gap-4 mt-8">
                        {project
                            .link
                            .map(|link| {
                                view! {
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-6 py-3 bg-lime-400 text-black font-black border-2 border-black text-center"
                                    >
                                        {t.visit}
                                    </a>
                                }
                            })}
                        {project
                            .offers_similar
                            .then(|| {
                                view! {
                                    <a
                                        href=profile::request_similar_link(lang, project.title)
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-6 py-3 border-2 border-white font-black text-center hover:bg-white hover:text-black"
                                    >
                                        {t.want_one}
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}
