//! Admin service catalog: list, create, activate/deactivate, delete.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{load_on_mount, optional_text, spawn_browser, stored_api_client};
use crate::components::list_status::ListStatus;
use crate::net::types::{Category, Service, ServiceInput};
use crate::state::resource::{use_categories, use_services};
use crate::util::clock::display_timestamp;

/// Validate the create form. Price is optional but must be a non-negative number.
pub(crate) fn parse_service_form(
    name: &str,
    description: &str,
    category_id: &str,
    base_price: &str,
) -> Result<ServiceInput, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Service name is required.");
    }
    let base_price = match optional_text(base_price) {
        None => None,
        Some(raw) => match raw.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Some(price),
            _ => return Err("Base price must be a non-negative number."),
        },
    };
    Ok(ServiceInput {
        name: name.to_owned(),
        description: optional_text(description),
        category_id: optional_text(category_id),
        base_price,
        is_active: true,
    })
}

pub(crate) fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "-".to_owned(), |p| format!("{p:.2}"))
}

/// Category name for display, falling back to the raw id.
pub(crate) fn category_label(categories: &[Category], category_id: Option<&str>) -> String {
    let Some(id) = category_id else {
        return "-".to_owned();
    };
    categories
        .iter()
        .find(|c| c.id == id)
        .map_or_else(|| id.to_owned(), |c| c.name.clone())
}

/// Same record with only the active flag flipped, as an update payload.
pub(crate) fn toggled_input(service: &Service) -> ServiceInput {
    ServiceInput {
        name: service.name.clone(),
        description: service.description.clone(),
        category_id: service.category_id.clone(),
        base_price: service.base_price,
        is_active: !service.is_active,
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = use_services();
    let categories = use_categories();
    let api = stored_api_client();
    load_on_mount(services, api);
    load_on_mount(categories, api);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let base_price = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match parse_service_form(
            &name.get_untracked(),
            &description.get_untracked(),
            &category_id.get_untracked(),
            &base_price.get_untracked(),
        ) {
            Ok(input) => input,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        let client = api.get_value();
        spawn_browser(async move {
            if services.create(&client, &input).await.is_ok() {
                name.set(String::new());
                description.set(String::new());
                base_price.set(String::new());
            }
        });
    };

    let rows = move || {
        let cats = categories.items();
        services
            .items()
            .into_iter()
            .map(|service| {
                let id = service.id.clone();
                let toggle_id = id.clone();
                let toggle_input = toggled_input(&service);
                let on_toggle = move |_| {
                    let client = api.get_value();
                    let id = toggle_id.clone();
                    let input = toggle_input.clone();
                    spawn_browser(async move {
                        let _ = services.update(&client, &id, &input).await;
                    });
                };
                let on_delete = move |_| {
                    let client = api.get_value();
                    let id = id.clone();
                    spawn_browser(async move {
                        let _ = services.delete(&client, &id).await;
                    });
                };
                view! {
                    <tr>
                        <td>{service.name.clone()}</td>
                        <td>{category_label(&cats, service.category_id.as_deref())}</td>
                        <td class="num">{format_price(service.base_price)}</td>
                        <td>
                            <span class="badge" class:badge--muted=!service.is_active>
                                {if service.is_active { "Active" } else { "Inactive" }}
                            </span>
                        </td>
                        <td>{display_timestamp(service.created_at.as_deref())}</td>
                        <td class="actions">
                            <button class="btn" on:click=on_toggle>
                                {if service.is_active { "Deactivate" } else { "Activate" }}
                            </button>
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
        <Title text="Services | HomeFix Admin"/>
        <section class="page">
            <h1>"Services"</h1>
            <form class="inline-form" on:submit=on_create>
                <input
                    class="input"
                    type="text"
                    placeholder="Service name"
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
                <select class="input" on:change=move |ev| category_id.set(event_target_value(&ev))>
                    <option value="">"No category"</option>
                    {move || {
                        categories
                            .items()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    class="input input--narrow"
                    type="text"
                    inputmode="decimal"
                    placeholder="Base price"
                    prop:value=move || base_price.get()
                    on:input=move |ev| base_price.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add service"
                </button>
            </form>
            <Show when=move || form_error.get().is_some()>
                <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <ListStatus
                loading=Signal::derive(move || services.is_loading())
                error=Signal::derive(move || services.error())
                empty=Signal::derive(move || services.state().with(|s| s.items.is_empty()))
                empty_text="No services yet."
            />
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Base price"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
