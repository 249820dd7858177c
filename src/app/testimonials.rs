use leptos::prelude::*;

use crate::catalog::{self, MAX_STARS, PLATFORM_RATING};
use crate::i18n::translations;
use crate::profile;
use crate::view_state::Section;

use super::homepage::Stars;
use super::use_lang;

#[component]
pub fn Testimonials() -> impl IntoView {
    let lang = use_lang();
    let t = move || &translations(lang.get()).testimonials;

    view! {
        <section id=Section::Testimonials.id() class="py-24 bg-neutral-900">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl md:text-6xl font-black mb-16">
                    {move || t().title_prefix}
                    " "
                    <span class="text-lime-400">{move || t().title_suffix}</span>
                </h2>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-12">
                    <div class="bg-neutral-800 border-2 border-neutral-700 p-8 h-fit">
                        <div class="text-5xl font-black text-lime-400 mb-2">
                            {format!("{PLATFORM_RATING:.1}")}
                            <span class="text-lg text-white">{format!("/{MAX_STARS}")}</span>
                        </div>
                        <p class="text-neutral-400 text-sm mb-4">{move || t().subtitle}</p>
                        <Stars count=MAX_STARS />
                        <a
                            href=profile::REVIEWS_URL
                            target="_blank"
                            rel="noreferrer"
                            class="mt-6 inline-block text-white text-xs font-bold hover:text-lime-400"
                        >
                            {move || t().view_profile}
                        </a>
                    </div>
                    <div class="lg:col-span-2 grid grid-cols-1 md:grid-cols-2 gap-6">
                        {catalog::testimonials()
                            .iter()
                            .map(|review| {
                                view! {
                                    <div class="bg-neutral-800 p-6 border-l-4 border-lime-400">
                                        <div class="mb-3 text-xs">
                                            <Stars count=review.stars />
                                        </div>
                                        <p class="text-neutral-300 italic mb-4 text-sm">
                                            {move || format!("\"{}\"", review.quote.get(lang.get()))}
                                        </p>
                                        <p class="text-lime-400 font-bold text-xs uppercase tracking-wider">
                                            {move || format!("// {}", review.project.get(lang.get()))}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
