use crate::domain::images::{FallbackCycle, ImageCategory};
use maud::{html, Markup};

/// Position the load-error rotation starts after. A real image starts the
/// rotation at its first placeholder.
fn rotation_start(src: &str, category: ImageCategory) -> usize {
    let list = category.fallbacks();
    list.iter()
        .position(|f| *f == src)
        .unwrap_or(list.len() - 1)
}

/// An `<img>` that swaps to the next category placeholder each time it
/// fails to load, and stops once the rotation is used up.
pub fn safe_image(src: &str, alt: &str, category: ImageCategory, class: &str) -> Markup {
    let rotation = FallbackCycle::new(category, rotation_start(src, category)).remaining();
    let fallbacks = serde_json::to_string(&rotation).unwrap_or_else(|_| "[]".to_string());

    html! {
        img src=(src) alt=(alt) class=(class) loading="lazy" data-fallbacks=(fallbacks);
    }
}

/// Generated stand-in image served at `/placeholder.svg`.
pub fn placeholder_svg(width: u32, height: u32, label: &str) -> Markup {
    let font_size = (width.min(height) / 12).clamp(10, 48);
    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(width)
            height=(height)
            viewBox=(format!("0 0 {width} {height}"))
        {
            rect width="100%" height="100%" fill="#e5e7eb" {}
            text x="50%" y="50%"
                fill="#6b7280"
                font-family="system-ui, sans-serif"
                font-size=(font_size)
                text-anchor="middle"
                dominant-baseline="middle"
            { (label) }
        }
    }
}
