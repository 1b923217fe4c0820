use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    let title = match status {
        404 => "Page not found",
        400 => "Bad request",
        _ => "Something went wrong",
    };
    desktop_layout(
        title,
        html! {
            section class="error" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}
