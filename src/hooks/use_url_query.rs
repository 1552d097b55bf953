use leptos::prelude::*;

use crate::binding::{initial_value, synchronize, synchronize_renamed};
use crate::location::BrowserLocation;

/// Return type for use_url_query hook
#[derive(Clone, Copy)]
pub struct UseUrlQueryReturn {
    pub query: ReadSignal<String>,
    pub set_query: WriteSignal<String>,
}

/// Hook binding a string signal to one query-string parameter
///
/// The initial value comes from `window.location.search`, falling back to
/// `default_value`. After every committed change the query string is
/// replaced in place; an empty value removes the parameter.
///
/// # Example
/// ```rust,ignore
/// let search = use_url_query("q", "");
///
/// view! {
///     <input
///         prop:value=move || search.query.get()
///         on:input=move |ev| search.set_query.set(event_target_value(&ev))
///     />
/// }
/// ```
pub fn use_url_query(
    name: impl Into<String>,
    default_value: impl Into<String>,
) -> UseUrlQueryReturn {
    use_url_query_with(Signal::stored(name.into()), default_value)
}

/// Same as [`use_url_query`], with a reactive parameter name.
///
/// When `name` changes the value moves to the new key and the old key is
/// removed in the same write.
pub fn use_url_query_with(
    name: Signal<String>,
    default_value: impl Into<String>,
) -> UseUrlQueryReturn {
    let default_value = default_value.into();
    let initial = initial_value(&BrowserLocation, &name.get_untracked(), &default_value)
        .unwrap_or_else(|err| {
            web_sys::console::error_1(&format!("Failed to read query parameter: {}", err).into());
            default_value
        });
    let (query, set_query) = signal(initial);

    // Runs once after mount, then after each change to the name or value.
    Effect::new(move |previous: Option<String>| {
        let current = name.get();
        let value = query.get();

        let result = match previous.as_deref() {
            Some(stale) if stale != current => {
                synchronize_renamed(&BrowserLocation, stale, &current, &value)
            }
            _ => synchronize(&BrowserLocation, &current, &value),
        };
        if let Err(err) = result {
            web_sys::console::error_1(
                &format!("Failed to sync query parameter '{}': {}", current, err).into(),
            );
        }

        current
    });

    UseUrlQueryReturn { query, set_query }
}
