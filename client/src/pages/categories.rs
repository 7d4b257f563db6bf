//! Admin category management: list, create, delete.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{load_on_mount, optional_text, spawn_browser, stored_api_client};
use crate::components::list_status::ListStatus;
use crate::net::types::CategoryInput;
use crate::state::resource::use_categories;
use crate::util::clock::display_timestamp;

pub(crate) fn parse_category_form(name: &str, description: &str, icon: &str) -> Result<CategoryInput, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Category name is required.");
    }
    Ok(CategoryInput {
        name: name.to_owned(),
        description: optional_text(description),
        icon: optional_text(icon),
        is_active: true,
    })
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = use_categories();
    let api = stored_api_client();
    load_on_mount(categories, api);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let icon = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match parse_category_form(&name.get_untracked(), &description.get_untracked(), &icon.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        let client = api.get_value();
        spawn_browser(async move {
            if categories.create(&client, &input).await.is_ok() {
                name.set(String::new());
                description.set(String::new());
                icon.set(String::new());
            }
        });
    };

    let rows = move || {
        categories
            .items()
            .into_iter()
            .map(|category| {
                let id = category.id.clone();
                let on_delete = move |_| {
                    let client = api.get_value();
                    let id = id.clone();
                    spawn_browser(async move {
                        let _ = categories.delete(&client, &id).await;
                    });
                };
                view! {
                    <tr>
                        <td class="icon">{category.icon.clone().unwrap_or_default()}</td>
                        <td>{category.name.clone()}</td>
                        <td>{category.description.clone().unwrap_or_default()}</td>
                        <td>{display_timestamp(category.created_at.as_deref())}</td>
                        <td class="actions">
                            <button class="btn btn--danger" on:click=on_delete>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Categories | HomeFix Admin"/>
        <section class="page">
            <h1>"Categories"</h1>
            <form class="inline-form" on:submit=on_create>
                <input
                    class="input input--narrow"
                    type="text"
                    placeholder="Icon"
                    prop:value=move || icon.get()
                    on:input=move |ev| icon.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="Category name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add category"
                </button>
            </form>
            <Show when=move || form_error.get().is_some()>
                <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <ListStatus
                loading=Signal::derive(move || categories.is_loading())
                error=Signal::derive(move || categories.error())
                empty=Signal::derive(move || categories.state().with(|s| s.items.is_empty()))
                empty_text="No categories yet."
            />
            <table class="table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
