use leptos::*;

#[component]
pub fn StatusBadge(#[prop(into)] status: MaybeSignal<String>) -> impl IntoView {
    let label_status = status.clone();
    view! {
        <span class=move || status_badge_class(&status.get())>
            {move || status_label(&label_status.get())}
        </span>
    }
}

/// Badge styling for a leave status as the backend reports it. Unknown
/// statuses still render, just with the neutral info badge.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "PENDING" => "badge badge-warning",
        "APPROVED" => "badge badge-success",
        "REJECTED" => "badge badge-danger",
        "CANCELLED" => "badge badge-neutral",
        _ => "badge badge-info",
    }
}

pub fn status_label(status: &str) -> String {
    match status {
        "PENDING" => "Pending".to_string(),
        "APPROVED" => "Approved".to_string(),
        "REJECTED" => "Rejected".to_string(),
        "CANCELLED" => "Cancelled".to_string(),
        _ => status.to_string(),
    }
}

/// "CASUAL_LEAVE" renders as "CASUAL LEAVE".
pub fn format_leave_type(leave_type: &str) -> String {
    leave_type.replace('_', " ")
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::StatusBadge;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn badge_renders_label_and_class() {
        let html = render_to_string(|| view! { <StatusBadge status="REJECTED".to_string()/> });
        assert!(html.contains("badge-danger"));
        assert!(html.contains("Rejected"));
    }
}
