//! Read-only audit trail for admins.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{load_on_mount, stored_api_client};
use crate::components::list_status::ListStatus;
use crate::net::types::ActivityLog;
use crate::state::resource::use_activity_logs;
use crate::util::clock::display_timestamp;

const DETAILS_PREVIEW_CHARS: usize = 120;

/// "<entity type> <entity id>", whichever parts are present.
pub(crate) fn target_label(log: &ActivityLog) -> String {
    match (log.entity_type.as_deref(), log.entity_id.as_deref()) {
        (Some(kind), Some(id)) => format!("{kind} {id}"),
        (Some(kind), None) => kind.to_owned(),
        (None, Some(id)) => id.to_owned(),
        (None, None) => "-".to_owned(),
    }
}

/// Compact JSON preview, cut at a char boundary.
pub(crate) fn details_preview(log: &ActivityLog) -> Option<String> {
    let details = log.details.as_ref().filter(|d| !d.is_null())?;
    let text = match details {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.chars().count() <= DETAILS_PREVIEW_CHARS {
        return Some(text);
    }
    let cut: String = text.chars().take(DETAILS_PREVIEW_CHARS).collect();
    Some(format!("{cut}..."))
}

/// Case-insensitive match on actor, action, and target.
pub(crate) fn matches_filter(log: &ActivityLog, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [log.actor_email.as_deref().unwrap_or_default(), log.action.as_str(), target_label(log).as_str()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[component]
pub fn ActivityPage() -> impl IntoView {
    let logs = use_activity_logs();
    let api = stored_api_client();
    load_on_mount(logs, api);

    let filter = RwSignal::new(String::new());

    let rows = move || {
        let needle = filter.get();
        logs.items()
            .into_iter()
            .filter(|log| matches_filter(log, &needle))
            .map(|log| {
                view! {
                    <tr>
                        <td>{display_timestamp(log.created_at.as_deref())}</td>
                        <td>{log.actor_email.clone().unwrap_or_else(|| "system".to_owned())}</td>
                        <td>
                            <code>{log.action.clone()}</code>
                        </td>
                        <td>{target_label(&log)}</td>
                        <td class="details">{details_preview(&log).unwrap_or_default()}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Activity | HomeFix Admin"/>
        <section class="page">
            <h1>"Activity log"</h1>
            <input
                class="input"
                type="search"
                placeholder="Filter by actor, action or target"
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            <ListStatus
                loading=Signal::derive(move || logs.is_loading())
                error=Signal::derive(move || logs.error())
                empty=Signal::derive(move || logs.state().with(|s| s.items.is_empty()))
                empty_text="No activity recorded yet."
            />
            <table class="table">
                <thead>
                    <tr>
                        <th>"When"</th>
                        <th>"Actor"</th>
                        <th>"Action"</th>
                        <th>"Target"</th>
                        <th>"Details"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
