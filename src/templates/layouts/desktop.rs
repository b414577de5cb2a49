use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#0891b2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                  {
                      circle cx="5" cy="17" r="3" {}
                      circle cx="19" cy="17" r="3" {}
                      path d="M12 19v-4l-3 -3l5 -4l2 3h3" {}
                  }
                  h3 { "Buy Bikes" }
                  nav {
                      ul {
                          li { a href="/buy" { "All Bikes" } }
                      }
                  }
              }
                div class="max-w-7xl mx-auto p-4 mt-20 lg:mt-28" {
                    (content)
                }
            }
        }
    }
}
