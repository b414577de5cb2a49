use crate::domain::Bike;
use crate::templates::components::booked_badge;
use crate::templates::components::card::{price_text, text};
use crate::templates::desktop_layout;
use crate::templates::format::format_plain;
use maud::{html, Markup};

pub fn bike_detail_page(bike: &Bike) -> Markup {
    let year = bike.year.map(|y| y.to_string()).unwrap_or_default();
    let km = bike
        .mileage
        .map(|m| format!("{} Km", format_plain(m)))
        .unwrap_or_default();
    let title = format!("{} {}", year, text(&bike.model)).trim().to_string();

    let rows: [(&str, String); 8] = [
        ("Brand", text(&bike.brand).to_string()),
        ("Category", text(&bike.category).to_string()),
        ("Year", year),
        ("Kilometers", km),
        ("Fuel Type", text(&bike.fuel).to_string()),
        ("Color", text(&bike.color).to_string()),
        ("Owner", text(&bike.owner).to_string()),
        ("Location", text(&bike.location).to_string()),
    ];

    desktop_layout(
        &title,
        html! {
            a href="/buy" class="text-sm text-cyan-600" { "← Back to all bikes" }

            div class="bike-detail flex flex-col lg:flex-row gap-8 mt-4 relative" data-id=(bike.id) {
                @if bike.booked {
                    (booked_badge())
                }
                img src=(text(&bike.image)) alt=(text(&bike.model))
                    class="lg:w-1/2 w-full object-cover rounded";

                div class="lg:w-1/2 w-full" {
                    h1 class="text-2xl font-bold" { (title) }
                    p class="text-gray-500" { (text(&bike.specs)) }
                    p class="price text-3xl font-bold text-cyan-600 my-4" { (price_text(bike)) }

                    table class="min-w-full divide-y divide-gray-200" {
                        tbody {
                            @for (label, value) in &rows {
                                @if !value.is_empty() {
                                    tr {
                                        th scope="row" class="px-4 py-2 text-left text-sm text-gray-500" { (label) }
                                        td class="px-4 py-2 text-sm text-gray-900" { (value) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
