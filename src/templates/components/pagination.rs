use maud::{html, Markup};

/// Where a paged listing stands, plus the query string it was requested
/// with (minus `page`) so links keep the active filters.
#[derive(Debug, Clone)]
pub struct Pager {
    pub page: i64,
    pub per_page: i64,
    pub base_query: String,
}

impl Pager {
    /// A full page suggests there may be another one.
    pub fn has_more(&self, shown: usize) -> bool {
        shown as i64 >= self.per_page
    }

    pub fn href(&self, page: i64) -> String {
        if self.base_query.is_empty() {
            format!("?page={page}")
        } else {
            format!("?{}&page={page}", self.base_query)
        }
    }
}

pub fn pagination(pager: &Pager, shown: usize) -> Markup {
    html! {
        nav class="pagination" {
            @if pager.page > 1 {
                a href=(pager.href(pager.page - 1)) rel="prev" { "← Previous" }
            }
            span { "Page " (pager.page) }
            @if pager.has_more(shown) {
                a href=(pager.href(pager.page + 1)) rel="next" { "Next →" }
            }
        }
    }
}
