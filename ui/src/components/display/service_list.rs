use dioxus::prelude::*;

struct Service {
    name: &'static str,
    blurb: &'static str,
}

/// What the shop actually works on. Static content; the quote form is where
/// customers describe anything not listed here.
const SERVICES: &[Service] = &[
    Service {
        name: "Mower Tune-Ups",
        blurb: "Plugs, filters, oil and a full once-over so your mower starts on the first pull.",
    },
    Service {
        name: "Blade Sharpening",
        blurb: "Sharpened and balanced blades for a clean cut that doesn't tear the grass.",
    },
    Service {
        name: "Carburetor Service",
        blurb: "Cleaning and rebuilds for engines that surge, stall or won't idle.",
    },
    Service {
        name: "Trimmer & Blower Repair",
        blurb: "Two-stroke diagnostics, fuel line replacement and recoil starter repair.",
    },
    Service {
        name: "Generator Service",
        blurb: "Load testing and maintenance so your backup power works when you need it.",
    },
    Service {
        name: "Seasonal Storage Prep",
        blurb: "Fuel stabilization and winterizing to keep equipment healthy in the off-season.",
    },
];

#[component]
pub fn ServiceList() -> Element {
    rsx! {
        section {
            class: "services-section",
            id: "services",

            h2 {
                class: "section-title",
                "Our Services"
            }
            div {
                class: "service-grid",
                for service in SERVICES {
                    div {
                        class: "service-card",
                        h3 {
                            class: "service-name",
                            "{service.name}"
                        }
                        p {
                            class: "service-blurb",
                            "{service.blurb}"
                        }
                    }
                }
            }
        }
    }
}
