//! Admin payout approval queue.

#[cfg(test)]
#[path = "payouts_test.rs"]
mod payouts_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{load_on_mount, spawn_browser, stored_api_client};
use crate::components::list_status::ListStatus;
use crate::net::types::{Payout, PayoutStatus, PayoutUpdate};
use crate::state::resource::use_payouts;
use crate::util::clock::display_timestamp;

/// The single next step for a payout, if any: (button label, target status).
pub(crate) fn next_action(status: PayoutStatus) -> Option<(&'static str, PayoutStatus)> {
    match status {
        PayoutStatus::Pending => Some(("Approve", PayoutStatus::Approved)),
        PayoutStatus::Approved => Some(("Mark paid", PayoutStatus::Paid)),
        PayoutStatus::Failed => Some(("Retry", PayoutStatus::Approved)),
        PayoutStatus::Paid | PayoutStatus::Unknown => None,
    }
}

/// Sum of amounts still awaiting approval, per currency, sorted by currency.
pub(crate) fn pending_totals(payouts: &[Payout]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for payout in payouts.iter().filter(|p| p.status == PayoutStatus::Pending) {
        match totals.iter_mut().find(|(currency, _)| *currency == payout.currency) {
            Some((_, sum)) => *sum += payout.amount,
            None => totals.push((payout.currency.clone(), payout.amount)),
        }
    }
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    totals
}

#[component]
pub fn PayoutsPage() -> impl IntoView {
    let payouts = use_payouts();
    let api = stored_api_client();
    load_on_mount(payouts, api);

    let summary = move || {
        let totals = payouts.state().with(|s| pending_totals(&s.items));
        if totals.is_empty() {
            return "Nothing awaiting approval.".to_owned();
        }
        let parts: Vec<String> = totals.iter().map(|(currency, sum)| format!("{sum:.2} {currency}")).collect();
        format!("Awaiting approval: {}", parts.join(", "))
    };

    let rows = move || {
        payouts
            .items()
            .into_iter()
            .map(|payout| {
                let action = next_action(payout.status).map(|(label, target)| {
                    let id = payout.id.clone();
                    let on_click = move |_| {
                        let client = api.get_value();
                        let id = id.clone();
                        spawn_browser(async move {
                            let _ = payouts.update(&client, &id, &PayoutUpdate { status: target }).await;
                        });
                    };
                    view! {
                        <button class="btn btn--primary" on:click=on_click>
                            {label}
                        </button>
                    }
                });
                view! {
                    <tr>
                        <td>
                            {payout
                                .provider_name
                                .clone()
                                .or_else(|| payout.provider_id.clone())
                                .unwrap_or_else(|| "-".to_owned())}
                        </td>
                        <td class="num">{payout.display_amount()}</td>
                        <td>
                            <span class="badge">{payout.status.label()}</span>
                        </td>
                        <td>{display_timestamp(payout.created_at.as_deref())}</td>
                        <td class="actions">{action}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Payouts | HomeFix Admin"/>
        <section class="page">
            <h1>"Payouts"</h1>
            <p class="page__summary">{summary}</p>
            <ListStatus
                loading=Signal::derive(move || payouts.is_loading())
                error=Signal::derive(move || payouts.error())
                empty=Signal::derive(move || payouts.state().with(|s| s.items.is_empty()))
                empty_text="No payouts yet."
            />
            <table class="table">
                <thead>
                    <tr>
                        <th>"Provider"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Requested"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
