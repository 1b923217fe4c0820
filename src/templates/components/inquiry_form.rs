use crate::domain::inquiry::NewInquiry;
use maud::{html, Markup};

/// Lead-capture form. On a failed submission the visitor's values are
/// rendered back along with the error so they can retry.
pub fn inquiry_form(values: &NewInquiry, error: Option<&str>) -> Markup {
    html! {
        div id="inquiry-panel" class="inquiry-panel" {
            form
                method="post"
                action="/inquiries"
                hx-post="/inquiries"
                hx-target="#inquiry-panel"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="inquiry-form"
            {
                @if let Some(message) = error {
                    p class="form-error" role="alert" { (message) }
                }

                @if let Some(id) = &values.property_id {
                    input type="hidden" name="property_id" value=(id);
                }
                @if let Some(custom_id) = &values.property_custom_id {
                    input type="hidden" name="property_custom_id" value=(custom_id);
                }
                @if let Some(source) = &values.source {
                    input type="hidden" name="source" value=(source);
                }

                label for="inquiry-name" { "Name" }
                input type="text" id="inquiry-name" name="name" value=(values.name) autocomplete="name" required;

                label for="inquiry-email" { "Email" }
                input type="email" id="inquiry-email" name="email" value=(values.email) autocomplete="email" required;

                label for="inquiry-phone" { "Phone (optional)" }
                input type="tel" id="inquiry-phone" name="phone" value=(values.phone.as_deref().unwrap_or("")) autocomplete="tel";

                label for="inquiry-message" { "Message" }
                textarea id="inquiry-message" name="message" rows="4" required { (values.message) }

                button type="submit" class="primary" {
                    span class="btn-text" {
                        @if error.is_some() { "Try again" } @else { "Send inquiry" }
                    }
                    span class="spinner" aria-hidden="true" {}
                }

                p class="microcopy" {
                    "An advisor will get back to you within one business day."
                }
            }
        }
    }
}

pub fn inquiry_success(name: &str) -> Markup {
    html! {
        div id="inquiry-panel" class="inquiry-panel success" {
            h3 { "Thank you, " (name) "!" }
            p { "Your inquiry has been received. We will be in touch shortly." }
        }
    }
}

/// Form pre-filled with the hidden links to a listing.
pub fn property_inquiry_form(property_id: &str, custom_id: Option<&str>) -> Markup {
    let values = NewInquiry {
        property_id: Some(property_id.to_string()),
        property_custom_id: custom_id.map(str::to_string),
        source: Some("property-page".to_string()),
        ..Default::default()
    };
    inquiry_form(&values, None)
}
