use leptos::prelude::*;
use url_query::hooks::use_url_query;

const TABS: &[&str] = &["notes", "tasks", "repos"];

#[component]
pub fn App() -> impl IntoView {
    // Both values survive a reload and can be shared as a link
    let search = use_url_query("q", "");
    let tab = use_url_query("tab", "notes");

    let on_input = move |ev: web_sys::Event| {
        search.set_query.set(event_target_value(&ev));
    };

    view! {
        <main class="container mx-auto p-6">
            <nav class="flex gap-2 mb-6">
                {TABS
                    .iter()
                    .map(|name| {
                        let name = *name;
                        view! {
                            <button
                                class:font-bold=move || tab.query.get() == name
                                on:click=move |_| tab.set_query.set(name.to_string())
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <input
                type="text"
                placeholder="Search..."
                prop:value=move || search.query.get()
                on:input=on_input
                class="w-full px-4 py-2 rounded-lg border"
            />
            <p class="mt-4">
                {move || {
                    let q = search.query.get();
                    if q.is_empty() {
                        format!("Showing all {}", tab.query.get())
                    } else {
                        format!("Searching {} for '{}'", tab.query.get(), q)
                    }
                }}
            </p>
        </main>
    }
}
