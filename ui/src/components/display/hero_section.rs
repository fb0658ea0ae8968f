use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section {
            class: "hero-section",
            id: "home",

            h1 {
                class: "hero-title",
                "Southern & Sons Small Engine Repair"
            }
            p {
                class: "hero-tagline",
                "Honest, reliable service for mowers, trimmers, blowers and more. "
                "Family owned and operated."
            }
            a {
                class: "cta-button",
                href: "#quote",
                "Request a Free Quote"
            }
        }
    }
}
