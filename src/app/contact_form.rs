use leptos::either::EitherOf3;
use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::icons::{MailIcon, PhoneIcon, PinIcon};
use crate::contact::{ContactForm, SubmitStatus, STATUS_RESET_MS};

/// Contact section: details column plus the form that posts to the mail
/// relay. The status line under the button resets to idle a few seconds
/// after a submission settles.
#[component]
pub fn ContactSection() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(SubmitStatus::Idle);

    let UseTimeoutFnReturn {
        start: start_reset,
        stop: stop_reset,
        ..
    } = use_timeout_fn(
        move |_: ()| set_status.update(|s| *s = s.after_reset()),
        STATUS_RESET_MS,
    );

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Ignore re-entry while a request is in flight.
        if status.get_untracked() == SubmitStatus::Submitting {
            return;
        }
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            subject_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let form = ContactForm {
            name: name.value(),
            email: email.value(),
            subject: subject.value(),
            message: message.value(),
        };
        // A reset scheduled by the previous submission must not fire into
        // this one and re-enable the form mid-request.
        stop_reset();
        set_status.set(SubmitStatus::Submitting);
        #[cfg(feature = "hydrate")]
        {
            let start_reset = start_reset.clone();
            leptos::task::spawn_local(async move {
                let result = crate::contact::send(&form).await;
                if let Err(err) = &result {
                    log::error!("contact form submission failed: {err}");
                }
                let next = crate::contact::status_after(&result);
                if next.clears_fields() {
                    name.set_value("");
                    email.set_value("");
                    subject.set_value("");
                    message.set_value("");
                }
                set_status.set(next);
                start_reset(());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            let _ = &start_reset;
        }
    };

    let status_line = move || match status.get() {
        SubmitStatus::Success => EitherOf3::A(view! {
            <p class="text-sm text-green-600 dark:text-green-400">
                "Thanks for reaching out! I'll get back to you soon."
            </p>
        }),
        SubmitStatus::Error => EitherOf3::B(view! {
            <p class="text-sm text-red-600 dark:text-red-400">
                "Something went wrong sending your message. Please try again."
            </p>
        }),
        _ => EitherOf3::C(()),
    };

    view! {
        <section id="contact" class="bg-slate-50 dark:bg-slate-800/50 py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold mb-2">"Get In Touch"</h2>
                <div class="w-16 h-1 bg-teal-600 rounded mb-8"></div>
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <p class="text-slate-600 dark:text-slate-300">
                            "Have a project in mind, a role to fill, or just want to say \
                             hello? My inbox is always open. Drop a message and I'll \
                             respond as soon as I can."
                        </p>
                        <div class="flex items-center gap-4">
                            <span class="p-3 rounded-lg bg-teal-600/10 text-teal-600 dark:text-teal-400">
                                <MailIcon />
                            </span>
                            <div>
                                <p class="text-sm font-semibold">"Email"</p>
                                <a
                                    href="mailto:williamwritescode@gmail.com"
                                    class="text-sm text-slate-600 dark:text-slate-300 hover:text-teal-600 dark:hover:text-teal-400"
                                >
                                    "williamwritescode@gmail.com"
                                </a>
                            </div>
                        </div>
                        <div class="flex items-center gap-4">
                            <span class="p-3 rounded-lg bg-teal-600/10 text-teal-600 dark:text-teal-400">
                                <PhoneIcon />
                            </span>
                            <div>
                                <p class="text-sm font-semibold">"Phone"</p>
                                <p class="text-sm text-slate-600 dark:text-slate-300">
                                    "+(254) 7111-60437"
                                </p>
                            </div>
                        </div>
                        <div class="flex items-center gap-4">
                            <span class="p-3 rounded-lg bg-teal-600/10 text-teal-600 dark:text-teal-400">
                                <PinIcon />
                            </span>
                            <div>
                                <p class="text-sm font-semibold">"Location"</p>
                                <p class="text-sm text-slate-600 dark:text-slate-300">
                                    "Kenya, Africa"
                                </p>
                            </div>
                        </div>
                    </div>
                    <form class="space-y-4" on:submit=submit>
                        <div class="grid sm:grid-cols-2 gap-4">
                            <input
                                node_ref=name_ref
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                required
                                class="w-full px-4 py-3 rounded-md bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 focus:outline-none focus:border-teal-600"
                            />
                            <input
                                node_ref=email_ref
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                required
                                class="w-full px-4 py-3 rounded-md bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 focus:outline-none focus:border-teal-600"
                            />
                        </div>
                        <input
                            node_ref=subject_ref
                            type="text"
                            name="subject"
                            placeholder="Subject"
                            required
                            class="w-full px-4 py-3 rounded-md bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 focus:outline-none focus:border-teal-600"
                        />
                        <textarea
                            node_ref=message_ref
                            name="message"
                            placeholder="Your Message"
                            required
                            rows="5"
                            class="w-full px-4 py-3 rounded-md bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 focus:outline-none focus:border-teal-600"
                        ></textarea>
                        <button
                            type="submit"
                            disabled=move || status.get() == SubmitStatus::Submitting
                            class="px-6 py-3 rounded-md bg-teal-600 text-white font-medium hover:bg-teal-700 transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                        >
                            {move || {
                                if status.get() == SubmitStatus::Submitting {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                        {status_line}
                    </form>
                </div>
            </div>
        </section>
    }
}
