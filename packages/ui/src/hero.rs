use dioxus::prelude::*;

use crate::icons::{FaChartLine, FaCircleCheck, FaShieldHalved, FaUsers};
use crate::Icon;

/// Where "Get Started" leads, inside the app router.
const GET_STARTED_ROUTE: &str = "/login";

/// One figure in the hero's metric grid.
#[derive(Clone, Copy, PartialEq)]
enum Metric {
    Funds,
    Beneficiaries,
    Stores,
    Transparency,
}

impl Metric {
    const ALL: [Metric; 4] = [
        Metric::Funds,
        Metric::Beneficiaries,
        Metric::Stores,
        Metric::Transparency,
    ];

    fn label(self) -> &'static str {
        match self {
            Metric::Funds => "Funds Distributed",
            Metric::Beneficiaries => "Beneficiaries",
            Metric::Stores => "Verified Stores",
            Metric::Transparency => "Transparency",
        }
    }

    fn value(self) -> &'static str {
        match self {
            Metric::Funds => "₹8.5K",
            Metric::Beneficiaries => "24.5K",
            Metric::Stores => "1,247",
            Metric::Transparency => "100%",
        }
    }

    fn caption(self) -> &'static str {
        match self {
            Metric::Funds => "100% Auditable",
            Metric::Beneficiaries => "Active Support",
            Metric::Stores => "Direct Payments",
            Metric::Transparency => "Real-time Audit",
        }
    }
}

/// Landing-page hero: pitch, calls to action and headline metrics.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: "hero",
            class: "relative min-h-screen flex items-center justify-center overflow-hidden bg-dark-darker",
            div {
                class: "container mx-auto px-6 lg:px-12 py-20 grid lg:grid-cols-2 gap-12 items-center",

                div {
                    class: "space-y-8",
                    h1 { class: "text-4xl font-bold tracking-tight text-white mb-12", "SALVUS" }
                    h2 {
                        class: "text-5xl lg:text-6xl font-bold leading-tight text-white",
                        "Emergency Relief."
                        br {}
                        span { class: "text-accent", "Zero Cash Misuse." }
                    }
                    p {
                        class: "text-xl text-gray-300 leading-relaxed max-w-lg",
                        "Salvus ensures disaster aid is spent only on verified essentials and paid directly to trusted stores."
                    }
                    div {
                        class: "flex flex-wrap gap-4 pt-4",
                        Link { to: GET_STARTED_ROUTE, class: "hero-cta", "Get Started" }
                        button { r#type: "button", class: "hero-cta", "Start a Relief Campaign" }
                    }
                    div {
                        class: "flex items-center gap-2 text-sm text-gray-400",
                        Icon { icon: FaCircleCheck, width: 16, height: 16 }
                        span { "Built for dignity, accountability, and speed." }
                    }
                }

                div {
                    class: "relative bg-dark/50 rounded-2xl p-8 border border-dark-lighter/50",
                    div {
                        class: "grid grid-cols-2 gap-4",
                        for (i, metric) in Metric::ALL.into_iter().enumerate() {
                            MetricCard { key: "{i}", metric: metric }
                        }
                    }
                    div {
                        class: "mt-8 pt-8 border-t border-dark-lighter/30 flex items-center justify-between text-xs text-gray-500",
                        for (i, stop) in ["Donor", "Store", "Beneficiary"].into_iter().enumerate() {
                            if i > 0 {
                                div { class: "flex-1 h-px bg-accent mx-4" }
                            }
                            div {
                                class: "flex items-center gap-2",
                                div { class: "w-2 h-2 rounded-full bg-accent" }
                                span { "{stop}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(metric: Metric) -> Element {
    let label = metric.label();
    let value = metric.value();
    let caption = metric.caption();

    rsx! {
        div {
            class: "bg-dark-lighter/30 rounded-xl p-4",
            div {
                class: "flex items-center gap-3 mb-2 text-accent",
                {match metric {
                    Metric::Funds => rsx! { Icon { icon: FaChartLine, width: 18, height: 18 } },
                    Metric::Beneficiaries => rsx! { Icon { icon: FaUsers, width: 18, height: 18 } },
                    Metric::Stores => rsx! { Icon { icon: FaShieldHalved, width: 18, height: 18 } },
                    Metric::Transparency => rsx! { Icon { icon: FaCircleCheck, width: 18, height: 18 } },
                }}
                span { class: "text-xs text-gray-400 uppercase tracking-wide", "{label}" }
            }
            div { class: "text-3xl font-bold text-white", "{value}" }
            div { class: "text-xs text-gray-500 mt-1", "{caption}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_started_targets_login_route() {
        assert_eq!(GET_STARTED_ROUTE, api::Routes::default().login);
        assert!(GET_STARTED_ROUTE.starts_with('/') && !GET_STARTED_ROUTE.starts_with("//"));
    }
}
