use dioxus::prelude::*;

use crate::components::display::{HeroSection, ServiceList};
use crate::console_warn;
use crate::features::quote::{QuoteAction, QuoteFormState};
use crate::services::config::SiteConfig;

#[cfg(feature = "web")]
use crate::components::forms::QuoteForm;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

/// Render the quote form for targets that can reach the email provider.
fn render_quote_form(
    state: Signal<QuoteFormState>,
    dispatch: EventHandler<QuoteAction>,
) -> Element {
    #[cfg(feature = "web")]
    {
        rsx! {
            QuoteForm {
                state: state,
                dispatch: dispatch
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = (state, dispatch);
        rsx! {
            div { "Quote form not available for non-web builds" }
        }
    }
}

#[component]
pub fn RepairSite() -> Element {
    // Consolidated state management for the quote form
    let mut state = use_signal(QuoteFormState::default);

    // Complain early about missing provider identifiers instead of failing
    // on the first submission.
    use_effect(move || {
        if let Err(problems) = SiteConfig::from_env().validate() {
            for problem in problems {
                console_warn!("[Site] Configuration incomplete: {}", problem);
            }
        }
    });

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: QuoteAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }

        div {
            class: "site-container",

            HeroSection {}
            ServiceList {}
            {render_quote_form(state, dispatch)}

            footer {
                class: "site-footer",
                p { "Southern & Sons Small Engine Repair" }
                p { "Family owned and operated · Send a quote request above or stop by the shop" }
            }
        }
    }
}
