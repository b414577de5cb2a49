use crate::domain::Bike;
use crate::templates::format::{format_inr, format_plain};
use maud::{html, Markup};

pub(crate) fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

pub(crate) fn price_text(bike: &Bike) -> String {
    match bike.price {
        Some(p) => format!("₹{}", format_inr(p)),
        None => "Price on request".to_string(),
    }
}

pub fn booked_badge() -> Markup {
    html! {
        div class="absolute top-3 left-3 bg-red-600 text-white px-3 py-1 rounded font-semibold z-10 text-sm" {
            "Booked"
        }
    }
}

/// One grid tile on the listing page. Links to the detail page.
pub fn bike_card(bike: &Bike) -> Markup {
    html! {
        a href={ "/buy/" (bike.id) } {
            div class="bike-card flex flex-col p-4 bg-[#c2ecef] rounded-xl shadow-md relative hover:shadow-xl transition" data-id=(bike.id) {
                @if bike.booked {
                    (booked_badge())
                }
                img src=(text(&bike.image)) alt=(text(&bike.model))
                    class="w-full h-52 sm:h-60 md:h-64 object-cover rounded mb-3";
                h3 class="text-base md:text-lg font-semibold" {
                    @if let Some(year) = bike.year { (year) }
                    " | " (text(&bike.model)) " | " (text(&bike.specs))
                }
                p class="text-sm text-gray-500" {
                    @if let Some(km) = bike.mileage { (format_plain(km)) }
                    " Km • " (text(&bike.owner))
                }
                p class="price text-xl md:text-2xl font-bold text-cyan-600 mt-1" {
                    (price_text(bike))
                }
                p class="text-sm text-gray-500" { (text(&bike.location)) }
            }
        }
    }
}
