use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::{Theme, STORAGE_KEY};

/// Theme context handed to every section instead of prop-threading the flag.
#[derive(Clone, Copy)]
pub struct ThemeToggle {
    pub dark: Signal<bool>,
    pub toggle: Callback<()>,
}

/// Wire up the theme flag: persisted storage wins, the OS color-scheme
/// signal fills in when nothing is stored, and an effect mirrors the flag
/// into the `dark` marker class on the document root.
pub fn provide_theme() -> ThemeToggle {
    let prefers_dark = use_preferred_dark();

    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_stored) = signal(String::new());

    let dark = Signal::derive(move || match stored.get().parse::<Theme>() {
        Ok(theme) => theme.is_dark(),
        Err(()) => prefers_dark.get(),
    });

    let toggle = Callback::new(move |()| {
        let next = Theme::from_preference(dark.get_untracked()).toggled();
        set_stored.set(next.as_str().to_string());
    });

    Effect::new(move |_| {
        let is_dark = dark.get();
        let root = document()
            .document_element()
            .expect("document should have a root element");
        let classes = root.class_list();
        let res = if is_dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(err) = res {
            log::warn!("couldn't update root theme class: {err:?}");
        }
    });

    let ctx = ThemeToggle { dark, toggle };
    provide_context(ctx);
    ctx
}
