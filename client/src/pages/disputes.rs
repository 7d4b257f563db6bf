//! Support dispute queue: review, resolve, or reject.
//!
//! DESIGN
//! ======
//! Status moves forward only: OPEN -> UNDER_REVIEW -> RESOLVED | REJECTED.
//! Closed disputes render without actions. A resolution note is optional
//! and sent with whichever transition the agent picks.

#[cfg(test)]
#[path = "disputes_test.rs"]
mod disputes_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{load_on_mount, optional_text, spawn_browser, stored_api_client};
use crate::components::list_status::ListStatus;
use crate::net::types::{DisputeStatus, DisputeUpdate};
use crate::state::resource::use_disputes;
use crate::util::clock::display_timestamp;

/// Transitions offered for a dispute currently in `status`.
pub(crate) fn next_statuses(status: DisputeStatus) -> &'static [DisputeStatus] {
    match status {
        DisputeStatus::Open => &[DisputeStatus::UnderReview, DisputeStatus::Resolved, DisputeStatus::Rejected],
        DisputeStatus::UnderReview => &[DisputeStatus::Resolved, DisputeStatus::Rejected],
        DisputeStatus::Resolved | DisputeStatus::Rejected | DisputeStatus::Unknown => &[],
    }
}

pub(crate) fn action_label(target: DisputeStatus) -> &'static str {
    match target {
        DisputeStatus::UnderReview => "Start review",
        DisputeStatus::Resolved => "Resolve",
        DisputeStatus::Rejected => "Reject",
        DisputeStatus::Open | DisputeStatus::Unknown => "Reopen",
    }
}

pub(crate) fn build_update(target: DisputeStatus, note: &str) -> DisputeUpdate {
    DisputeUpdate { status: target, resolution: optional_text(note) }
}

pub(crate) fn status_class(status: DisputeStatus) -> &'static str {
    match status {
        DisputeStatus::Open => "badge badge--warn",
        DisputeStatus::UnderReview => "badge badge--info",
        DisputeStatus::Resolved => "badge badge--ok",
        DisputeStatus::Rejected | DisputeStatus::Unknown => "badge badge--muted",
    }
}

#[component]
pub fn DisputesPage() -> impl IntoView {
    let disputes = use_disputes();
    let api = stored_api_client();
    load_on_mount(disputes, api);

    let show_closed = RwSignal::new(true);

    let rows = move || {
        let include_closed = show_closed.get();
        disputes
            .items()
            .into_iter()
            .filter(|d| include_closed || !d.status.is_closed())
            .map(|dispute| {
                let note = RwSignal::new(dispute.resolution.clone().unwrap_or_default());
                let actions = next_statuses(dispute.status)
                    .iter()
                    .map(|&target| {
                        let id = dispute.id.clone();
                        let on_click = move |_| {
                            let client = api.get_value();
                            let id = id.clone();
                            let update = build_update(target, &note.get_untracked());
                            spawn_browser(async move {
                                let _ = disputes.update(&client, &id, &update).await;
                            });
                        };
                        view! {
                            <button class="btn" on:click=on_click>
                                {action_label(target)}
                            </button>
                        }
                    })
                    .collect_view();
                let closed = dispute.status.is_closed();
                view! {
                    <tr>
                        <td>{dispute.booking_id.clone().unwrap_or_else(|| "-".to_owned())}</td>
                        <td>{dispute.customer_name.clone().unwrap_or_default()}</td>
                        <td>{dispute.provider_name.clone().unwrap_or_default()}</td>
                        <td>{dispute.reason.clone()}</td>
                        <td>
                            <span class=status_class(dispute.status)>{dispute.status.label()}</span>
                        </td>
                        <td>{display_timestamp(dispute.created_at.as_deref())}</td>
                        <td class="actions">
                            <input
                                class="input"
                                type="text"
                                placeholder="Resolution note"
                                disabled=closed
                                prop:value=move || note.get()
                                on:input=move |ev| note.set(event_target_value(&ev))
                            />
                            {actions}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Disputes | HomeFix Support"/>
        <section class="page">
            <h1>"Disputes"</h1>
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || show_closed.get()
                    on:change=move |ev| show_closed.set(event_target_checked(&ev))
                />
                "Show closed disputes"
            </label>
            <ListStatus
                loading=Signal::derive(move || disputes.is_loading())
                error=Signal::derive(move || disputes.error())
                empty=Signal::derive(move || disputes.state().with(|s| s.items.is_empty()))
                empty_text="No disputes to handle."
            />
            <table class="table">
                <thead>
                    <tr>
                        <th>"Booking"</th>
                        <th>"Customer"</th>
                        <th>"Provider"</th>
                        <th>"Reason"</th>
                        <th>"Status"</th>
                        <th>"Opened"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
