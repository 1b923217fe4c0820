use crate::domain::inquiry::NewInquiry;
use crate::templates::components::{inquiry_form, inquiry_success};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full-page result for browsers posting the form without htmx.
pub fn inquiry_result_page(outcome: Result<&str, (&NewInquiry, &str)>) -> Markup {
    desktop_layout(
        "Contact",
        html! {
            h1 { "Contact us" }
            @match outcome {
                Ok(name) => (inquiry_success(name)),
                Err((values, message)) => (inquiry_form(values, Some(message))),
            }
        },
    )
}
