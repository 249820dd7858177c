use leptos::prelude::*;

use crate::catalog::MAX_STARS;
use crate::i18n::translations;
use crate::profile;
use crate::view_state::Section;

use super::contact::ContactSection;
use super::projects::ProjectGrid;
use super::testimonials::Testimonials;
use super::{go_to, use_lang, use_view_state};

const MARQUEE: &str = "REACT // VUE.JS // NODE.JS // TYPESCRIPT // REACT NATIVE // TAILWIND // DOCKER // POSTGRESQL // NEXT.JS // SUPABASE // ";
const ACTIVITY_BARS: [u8; 12] = [40, 70, 45, 90, 60, 85, 50, 75, 95, 60, 80, 50];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Marquee />
        <Stack />
        <ProjectGrid />
        <Testimonials />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let state = use_view_state();
    let lang = use_lang();
    let t = move || &translations(lang.get()).hero;

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center pt-24 container mx-auto px-4"
        >
            <div class="grid grid-cols-1 lg:grid-cols-12 gap-12 items-center w-full">
                <div class="lg:col-span-8">
                    <div class="inline-flex items-center gap-2 border-2 border-lime-400 px-3 py-1 mb-6 text-lime-400 font-bold text-sm">
                        <span class="w-2 h-2 bg-lime-400 animate-pulse"></span>
                        {move || t().available}
                    </div>
                    <h1 class="text-5xl md:text-8xl font-black leading-none mb-8">
                        {profile::NAME}
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-lime-400 to-emerald-600">
                            {move || t().role}
                        </span>
                    </h1>
                    <p class="text-lg md:text-2xl text-neutral-400 max-w-2xl mb-10 border-l-4 border-lime-400 pl-6">
                        {move || t().description}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <button
                            class="px-8 py-4 bg-lime-400 text-black font-black text-lg border-2 border-lime-400 hover:bg-transparent hover:text-lime-400 transition-colors"
                            on:click=move |_| go_to(state, Section::Projects)
                        >
                            {move || t().view_portfolio}
                        </button>
                        <button
                            class="px-8 py-4 bg-transparent text-white font-bold text-lg border-2 border-white hover:bg-white hover:text-black transition-colors"
                            on:click=move |_| go_to(state, Section::Contact)
                        >
                            {move || t().quote}
                        </button>
                        <a
                            href=profile::CV_PATH
                            download=profile::CV_DOWNLOAD_NAME
                            class="px-8 py-4 bg-transparent text-white font-bold text-lg border-2 border-white hover:bg-white hover:text-black transition-colors text-center"
                        >
                            {move || t().download_cv}
                        </a>
                    </div>
                </div>
                <div class="lg:col-span-4 relative hidden lg:block">
                    <div class="bg-neutral-800 border-2 border-neutral-700 p-6 relative">
                        <div class="absolute -top-3 -right-3 bg-lime-400 text-black px-2 font-bold border-2 border-black text-xs">
                            {move || t().system_active}
                        </div>
                        <div class="space-y-4 text-sm">
                            <div class="flex justify-between border-b border-neutral-700 pb-2">
                                <span class="text-neutral-500">{move || t().clients}</span>
                                <span class="text-lime-400">{move || t().satisfied}</span>
                            </div>
                            <div class="flex justify-between border-b border-neutral-700 pb-2">
                                <span class="text-neutral-500">{move || t().rating}</span>
                                <Stars count=MAX_STARS />
                            </div>
                            <div class="flex justify-between pb-2">
                                <span class="text-neutral-500">{move || t().deliveries}</span>
                                <span class="animate-pulse text-lime-400 font-bold">
                                    {move || t().on_time}
                                </span>
                            </div>
                        </div>
                        <div class="mt-6 h-32 bg-black border border-neutral-700 p-2 flex items-end gap-1">
                            {ACTIVITY_BARS
                                .iter()
                                .map(|h| {
                                    view! {
                                        <div
                                            class="flex-1 bg-lime-400 hover:bg-white"
                                            style:height=format!("{h}%")
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <p class="text-xs text-neutral-500 mt-2 text-center">
                            {move || t().github_activity}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Stars(count: u8) -> impl IntoView {
    view! {
        <span class="flex gap-1 text-lime-400" aria-label=format!("{count}/{MAX_STARS}")>
            {(0..count).map(|_| view! { <span>"★"</span> }).collect_view()}
        </span>
    }
}

#[component]
fn Marquee() -> impl IntoView {
    view! {
        <div class="bg-lime-400 text-black py-3 overflow-hidden border-y-2 border-black rotate-1 scale-105 z-20 relative select-none">
            <div class="whitespace-nowrap inline-block font-black text-xl animate-marquee">
                {MARQUEE.repeat(2)}
            </div>
        </div>
    }
}

#[component]
fn Stack() -> impl IntoView {
    let lang = use_lang();
    let t = move || &translations(lang.get()).stack;

    let card = |title: String, body: &'static str| {
        view! {
            <div class="bg-neutral-800 border-2 border-neutral-700 p-6 hover:border-lime-400 transition-colors">
                <h3 class="text-xl font-black mb-4">{title}</h3>
                <p class="text-neutral-400">{body}</p>
            </div>
        }
    };

    view! {
        <section id=Section::Stack.id() class="py-24 bg-neutral-900">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl md:text-6xl font-black mb-16">
                    {move || t().title_prefix}
                    <span class="text-lime-400">{move || t().title_suffix}</span>
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {move || {
                        let t = t();
                        view! {
                            {card(t.frontend.to_string(), "React, Vue.js, Next.js, Nuxt, React Native, Tailwind")}
                            {card(t.backend.to_string(), "Node.js, PostgreSQL, MySQL, Redis, Supabase, Firebase")}
                            {card(t.devops.to_string(), t.devops_desc)}
                            <div class="bg-lime-400 text-black border-2 border-black p-6">
                                <h3 class="text-xl font-black mb-4">{t.fullstack}</h3>
                                <p class="font-bold">{t.response_time}</p>
                                <p class="text-5xl font-black">{t.time_unit}</p>
                            </div>
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let lang = use_lang();
    let year = profile::copyright_year();

    view! {
        <footer class="py-8 bg-black border-t-2 border-neutral-800 text-center text-neutral-500 text-sm">
            {move || translations(lang.get()).footer.text}
            {format!(" © {year} {}.", profile::NAME)}
        </footer>
    }
}
