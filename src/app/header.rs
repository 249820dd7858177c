use leptos::prelude::*;

use crate::i18n::translations;
use crate::profile;
use crate::view_state::Section;

use super::{go_to, use_lang, use_view_state};

#[component]
pub fn Header() -> impl IntoView {
    let state = use_view_state();
    let lang = use_lang();
    let progress = expect_context::<ReadSignal<f64>>();

    let scrolled = Memo::new(move |_| state.with(|s| s.scrolled));
    let active = Memo::new(move |_| state.with(|s| s.active_section));
    let menu_open = Memo::new(move |_| state.with(|s| s.mobile_menu_open));

    let toggle_language = move |_| state.update(|s| s.toggle_language());

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-lime-400 origin-left z-[60]"
            style:transform=move || format!("scaleX({})", progress.get())
        ></div>
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 border-b-2 bg-neutral-900/95 backdrop-blur-sm border-lime-400 py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 border-b-2 bg-transparent border-transparent py-4 md:py-6"
            }
        }>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <button
                    class="text-xl md:text-2xl font-black tracking-tighter flex items-center gap-2 z-50"
                    on:click=move |_| go_to(state, Section::Home)
                >
                    <span class="bg-lime-400 text-black px-1 border-2 border-black">">_"</span>
                    "JV_DEV"
                </button>
                <div class="hidden md:flex gap-8 font-bold">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == section {
                                            "uppercase text-lime-400"
                                        } else {
                                            "uppercase text-neutral-400 hover:text-white"
                                        }
                                    }
                                    on:click=move |_| go_to(state, section)
                                >
                                    {move || section.label(&translations(lang.get()).nav)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-4 z-50">
                    <button
                        class="px-2 py-1 border-2 border-neutral-600 font-bold hover:border-lime-400"
                        on:click=toggle_language
                    >
                        {move || translations(lang.get()).nav.switch_language}
                    </button>
                    <a
                        href=profile::whatsapp_link()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden md:block bg-lime-400 text-black px-4 py-2 font-black border-2 border-black"
                    >
                        "WHATSAPP"
                    </a>
                    <button
                        class="md:hidden text-2xl"
                        aria-label=move || translations(lang.get()).nav.open_menu
                        on:click=move |_| state.update(|s| s.toggle_menu())
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>
        <Show when=move || menu_open.get()>
            <MobileMenu />
        </Show>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let state = use_view_state();
    let lang = use_lang();

    view! {
        <div class="fixed inset-0 z-40 bg-neutral-900 flex flex-col justify-center items-center gap-8 md:hidden">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class="text-4xl font-black uppercase hover:text-lime-400"
                            on:click=move |_| go_to(state, section)
                        >
                            {move || section.label(&translations(lang.get()).nav)}
                        </button>
                    }
                })
                .collect_view()}
            <a
                href=profile::whatsapp_link()
                target="_blank"
                rel="noopener noreferrer"
                class="bg-lime-400 text-black px-8 py-4 font-black border-2 border-black"
                on:click=move |_| state.update(|s| s.mobile_menu_open = false)
            >
                "WHATSAPP"
            </a>
        </div>
    }
}
