use crate::api::LeaveBalanceResponse;
use crate::pages::dashboard::utils::LeaveStats;
use leptos::*;

#[component]
pub fn BalanceSection(balance: Signal<Option<LeaveBalanceResponse>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">"Leave balance"</h3>
                <p class="text-sm text-fg-muted">"Your allowance for the current year"</p>
            </div>
            {move || match balance.get() {
                None => view! {
                    <p class="text-sm text-fg-muted">"Balance unavailable."</p>
                }.into_view(),
                Some(balance) => view! {
                    <div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
                        <Metric label="Remaining".to_string() value={format_days(balance.remaining_balance)} />
                        <Metric label="Used".to_string() value={format_days(balance.used_leave)} />
                        <Metric label="Total".to_string() value={format_days(balance.total_balance)} />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn StatsSection(stats: Signal<LeaveStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
            <Metric label="Pending".to_string() value={Signal::derive(move || stats.get().pending.to_string())} />
            <Metric label="Approved".to_string() value={Signal::derive(move || stats.get().approved.to_string())} />
            <Metric label="Rejected".to_string() value={Signal::derive(move || stats.get().rejected.to_string())} />
        </div>
    }
}

#[component]
fn Metric(label: String, #[prop(into)] value: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-surface-elevated border border-border shadow">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-3 text-3xl font-extrabold text-fg">{move || value.get()}</p>
        </div>
    }
}

fn format_days(days: f64) -> String {
    if (days - days.trunc()).abs() < f64::EPSILON {
        format!("{} days", days as i64)
    } else {
        format!("{:.1} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::format_days;

    #[test]
    fn whole_day_counts_drop_the_fraction() {
        assert_eq!(format_days(18.0), "18 days");
        assert_eq!(format_days(2.5), "2.5 days");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_balance;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn balance_section_renders_the_three_metrics() {
        let html = render_to_string(move || {
            let balance = Signal::derive(|| Some(leave_balance()));
            view! { <BalanceSection balance=balance /> }
        });
        assert!(html.contains("Remaining"));
        assert!(html.contains("18 days"));
        assert!(html.contains("Used"));
    }

    #[test]
    fn stats_section_renders_counts() {
        let html = render_to_string(move || {
            let stats = Signal::derive(|| LeaveStats {
                pending: 2,
                approved: 5,
                rejected: 1,
                other: 0,
            });
            view! { <StatsSection stats=stats /> }
        });
        assert!(html.contains("Pending"));
        assert!(html.contains("Approved"));
        assert!(html.contains("Rejected"));
    }
}
