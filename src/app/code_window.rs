use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::highlight::{highlight_lang, Language};
use crate::typewriter::Typewriter;

/// Milliseconds between revealed characters.
const TYPE_SPEED_MS: u64 = 30;

const JS_SAMPLE: &str = r#"// Welcome to my portfolio!
const developer = {
  name: 'William',
  skills: ['React', 'Node.js', 'TypeScript'],
  passion: 'Building beautiful web experiences',
  coffee: true
};

function sayHello() {
  console.log('Thanks for stopping by!');
  return developer.passion;
}

sayHello();"#;

const PYTHON_SAMPLE: &str = r#"# Welcome to my portfolio!
class Developer:
    def __init__(self):
        self.name = 'William'
        self.skills = ['Django', 'FastAPI', 'Data Science']
        self.passion = 'Building beautiful web experiences'

    def say_hello(self):
        print('Thanks for stopping by!')
        return self.passion

developer = Developer()
developer.say_hello()"#;

const HTML_SAMPLE: &str = r##"<!DOCTYPE html>
<html>
  <head>
    <title>Welcome to my portfolio!</title>
  </head>
  <body>
    <h1>Hello, visitor!</h1>
    <p>I am William, a full-stack engineer.</p>
    <a href="#projects">See my work</a>
  </body>
</html>"##;

const CSS_SAMPLE: &str = r#"/* Welcome to my portfolio! */
.developer {
  display: flex;
  align-items: center;
  gap: 12px;
  font-family: 'Fira Code', monospace;
}

.developer:hover {
  transform: translateY(-4px);
  transition: all 0.3s ease;
}"#;

const JAVA_SAMPLE: &str = r#"// Welcome to my portfolio!
public class Developer {
    private final String name = "William";

    public static void main(String[] args) {
        Developer developer = new Developer();
        developer.sayHello();
    }

    public void sayHello() {
        System.out.println("Thanks for stopping by!");
    }
}"#;

fn sample_for(lang: Language) -> &'static str {
    match lang {
        Language::Javascript => JS_SAMPLE,
        Language::Python => PYTHON_SAMPLE,
        Language::Html => HTML_SAMPLE,
        Language::Css => CSS_SAMPLE,
        Language::Java => JAVA_SAMPLE,
    }
}

/// Editor-styled window that types out a greeting snippet character by
/// character, re-highlighting the visible prefix on every tick. The tab row
/// restarts the animation in the chosen language.
#[component]
pub fn CodeWindow() -> impl IntoView {
    let machine = StoredValue::new({
        let mut m = Typewriter::new(sample_for(Language::Javascript));
        m.start();
        m
    });
    let (language, set_language) = signal(Language::Javascript);
    let (revealed, set_revealed) = signal(String::new());
    let (typing, set_typing) = signal(true);
    let scroll_ref = NodeRef::<html::Div>::new();

    let Pausable { pause, resume, .. } = use_interval_fn(
        move || {
            let mut finished = false;
            machine.update_value(|m| {
                finished = m.tick();
                set_revealed.set(m.visible().to_string());
            });
            if finished {
                set_typing.set(false);
            }
            // Keep the newest line in view as the snippet grows.
            if let Some(el) = scroll_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        },
        TYPE_SPEED_MS,
    );

    Effect::new(move |_| {
        if typing.get() {
            resume();
        } else {
            pause();
        }
    });

    let switch = move |lang: Language| {
        set_language.set(lang);
        set_revealed.set(String::new());
        machine.update_value(|m| {
            m.reset(sample_for(lang));
            m.start();
        });
        set_typing.set(true);
    };

    view! {
        <section class="max-w-4xl mx-auto px-4 pb-24">
            <div class="rounded-lg overflow-hidden shadow-2xl border border-slate-200 dark:border-slate-700 bg-slate-50 dark:bg-slate-800">
                <div class="flex items-center gap-2 px-4 py-3 bg-slate-200 dark:bg-slate-700">
                    <span class="w-3 h-3 rounded-full bg-red-400"></span>
                    <span class="w-3 h-3 rounded-full bg-yellow-400"></span>
                    <span class="w-3 h-3 rounded-full bg-green-400"></span>
                    <span class="ml-3 font-mono text-xs text-slate-600 dark:text-slate-300">
                        {move || format!("welcome.{}", language.get().tag())}
                    </span>
                </div>
                <div class="flex gap-1 px-4 pt-3 flex-wrap">
                    {Language::ALL
                        .iter()
                        .map(|&lang| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if language.get() == lang {
                                            "px-3 py-1 rounded-t font-mono text-xs bg-slate-50 dark:bg-slate-900 text-teal-600 dark:text-teal-400"
                                        } else {
                                            "px-3 py-1 rounded-t font-mono text-xs text-slate-500 dark:text-slate-400 hover:text-teal-600 dark:hover:text-teal-400"
                                        }
                                    }
                                    on:click=move |_| switch(lang)
                                >
                                    {lang.tag()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    node_ref=scroll_ref
                    class="code-view h-80 overflow-y-auto px-4 py-3 font-mono text-sm leading-6 bg-slate-50 dark:bg-slate-900"
                >
                    <pre class="whitespace-pre-wrap break-words">
                        <code inner_html=move || {
                            highlight_lang(&revealed.get(), Some(language.get()))
                        } />
                        <Show when=move || typing.get()>
                            <span class="caret text-teal-600 dark:text-teal-400">"▋"</span>
                        </Show>
                    </pre>
                </div>
                <div class="flex items-center justify-between px-4 py-2 font-mono text-xs bg-slate-200 dark:bg-slate-700 text-slate-600 dark:text-slate-300">
                    <span>{move || language.get().tag()}</span>
                    <Show when=move || !typing.get()>
                        <span class="text-teal-600 dark:text-teal-400">"Welcome to my world!"</span>
                    </Show>
                </div>
            </div>
        </section>
    }
}
