use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{submit_contact, FormField, FormStatus, HttpRelay, SUCCESS_RESET};
use crate::i18n::translations;
use crate::profile;
use crate::view_state::{Section, ViewState};

use super::{use_lang, use_view_state};

/// Clears a success banner after [`SUCCESS_RESET`]. The pending timer is
/// dropped when the section unmounts or a newer success replaces it.
#[derive(Clone, Copy)]
struct SuccessReset {
    pending: StoredValue<Option<TimeoutHandle>>,
}

impl SuccessReset {
    fn new() -> Self {
        let pending = StoredValue::new(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(handle) = pending.try_get_value().flatten() {
                handle.clear();
            }
        });
        Self { pending }
    }

    fn schedule(self, state: RwSignal<ViewState>) {
        self.cancel();
        match set_timeout_with_handle(
            move || {
                state.update(|s| s.contact.expire_success());
            },
            SUCCESS_RESET,
        ) {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(e) => log::warn!("couldn't schedule form reset: {e:?}"),
        }
    }

    fn cancel(self) {
        if let Some(handle) = self.pending.get_value() {
            handle.clear();
        }
        self.pending.set_value(None);
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = use_view_state();
    let lang = use_lang();
    let t = move || &translations(lang.get()).contact;
    let reset = SuccessReset::new();
    let relay = StoredValue::new(HttpRelay::default());

    let busy = Memo::new(move |_| state.with(|s| s.contact.is_busy()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = match state.try_update(|s| s.contact.begin_submit()) {
            Some(Ok(form)) => form,
            Some(Err(e)) => {
                log::debug!("contact form not sent: {e}");
                return;
            }
            None => return,
        };
        reset.cancel();
        let relay = relay.get_value();
        spawn_local(async move {
            let res = submit_contact(&relay, &form).await;
            if let Err(e) = &res {
                log::warn!("{e}");
            }
            let delivered = res.is_ok();
            state.update(|s| s.contact.finish_submit(res));
            if delivered {
                reset.schedule(state);
            }
        });
    };

    view! {
        <section id=Section::Contact.id() class="py-24 bg-lime-400 text-black relative">
            <div class="container mx-auto px-4 mt-12">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <div>
                        <h2 class="text-5xl md:text-7xl font-black mb-8 leading-none">
                            {move || t().title1}
                            <br />
                            {move || t().title2}
                        </h2>
                        <p class="text-xl font-bold mb-12 max-w-md">{move || t().subtitle}</p>
                        <div class="space-y-6 text-xl md:text-2xl font-black">
                            <a href=profile::mailto_link() class="block hover:underline">
                                {profile::EMAIL}
                            </a>
                            <a
                                href=profile::linkedin_link()
                                target="_blank"
                                rel="noreferrer"
                                class="block hover:underline"
                            >
                                {format!("/in/{}", profile::LINKEDIN_HANDLE)}
                            </a>
                            <a
                                href=profile::github_link()
                                target="_blank"
                                rel="noreferrer"
                                class="block hover:underline"
                            >
                                {format!("@{}", profile::GITHUB_HANDLE)}
                            </a>
                        </div>
                    </div>
                    <form
                        class="bg-black text-white p-8 border-2 border-black shadow-[12px_12px_0_0_#fff]"
                        on:submit=on_submit
                    >
                        <h3 class="text-2xl font-black mb-8 text-lime-400">
                            {move || t().start_transmission}
                        </h3>
                        <Field field=FormField::Name label=move || t().name_label placeholder=move || t().placeholder_name />
                        <Field field=FormField::ReplyTo label=move || t().email_label placeholder=move || t().placeholder_email />
                        <Field field=FormField::Message label=move || t().msg_label placeholder=move || t().placeholder_msg />
                        <button
                            type="submit"
                            disabled=move || busy.get()
                            class="w-full mt-4 py-4 bg-lime-400 text-black font-black text-lg border-2 border-lime-400 disabled:opacity-50 disabled:cursor-wait"
                        >
                            {move || if busy.get() { t().sending } else { t().send }}
                        </button>
                        <StatusBanner />
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Field(
    field: FormField,
    label: impl Fn() -> &'static str + Send + Sync + 'static,
    placeholder: impl Fn() -> &'static str + Send + Sync + 'static,
) -> impl IntoView {
    let state = use_view_state();
    let name = match field {
        FormField::Name => "from_name",
        FormField::ReplyTo => "reply_to",
        FormField::Message => "message",
    };
    let value = move || state.with(|s| s.contact.field(field).to_string());
    let on_input = move |ev: web_sys::Event| state.update(|s| s.contact.set_field(field, event_target_value(&ev)));
    let class = "w-full bg-neutral-900 border-2 border-neutral-700 p-3 focus:border-lime-400 focus:outline-none";

    let input = if field == FormField::Message {
        view! {
            <textarea
                id=name
                name=name
                rows="5"
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=name
                name=name
                type=if field == FormField::ReplyTo { "email" } else { "text" }
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-6">
            <label for=name class="block text-xs font-bold text-lime-400 mb-2">
                {label}
            </label>
            {input}
        </div>
    }
}

#[component]
fn StatusBanner() -> impl IntoView {
    let state = use_view_state();
    let lang = use_lang();

    move || {
        state.with(|s| {
            let message = s.contact.message(&translations(lang.get()).contact);
            let class = match s.contact.status {
                FormStatus::Success => "mt-6 p-4 border-2 border-lime-400 text-lime-400 font-bold",
                FormStatus::Error(_) => "mt-6 p-4 border-2 border-red-500 text-red-500 font-bold",
                FormStatus::Idle | FormStatus::Submitting => return None,
            };
            Some(view! {
                <div class=class role="status">
                    {message}
                </div>
            })
        })
    }
}
