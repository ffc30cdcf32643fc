use dioxus::prelude::*;

/// A dashboard tile showing one aggregate count.
#[component]
pub fn StatCard(
    label: String,
    value: usize,
    #[props(default = "accent-default".to_string())] accent: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value {accent}", "{value}" }
        }
    }
}
