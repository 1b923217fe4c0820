use maud::{html, Markup, DOCTYPE};

const NAV: [(&str, &str); 6] = [
    ("/investments", "Investments"),
    ("/locations", "Locations"),
    ("/guides", "Guides"),
    ("/blog", "Blog"),
    ("/partners", "Partners"),
    ("/investment-tiers", "Investment Tiers"),
];

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Casa Portal" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
                script src="/static/site.js" defer {};
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="currentColor"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span { "Casa Portal" }
                  }
                  nav {
                      ul {
                          @for (href, label) in NAV {
                              li { a href=(href) { (label) } }
                          }
                      }
                  }
                  a href="/search" class="button" { "Search" }
              }
              main class="container" {
                  (content)
              }
              footer class="site-footer" {
                  p { "International real estate investment, from first enquiry to completion." }
              }
            }
        }
    }
}
