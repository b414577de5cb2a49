// templates/pages/listing.rs

use crate::domain::options::filter_sections;
use crate::domain::{Bike, FilterSelection, SortKey};
use crate::templates::components::{bike_card, filter_sidebar, sort_select};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

/// Everything the listing page shows for one request.
pub struct ListingVm<'a> {
    pub bikes: &'a [&'a Bike],
    pub filters: &'a FilterSelection,
    pub sort: SortKey,
    pub region: &'a str,
    pub loaded_at: Option<DateTime<Utc>>,
}

pub fn listing_page(vm: &ListingVm) -> Markup {
    let sections = filter_sections();

    desktop_layout(
        "Buy Bikes",
        html! {
            // One GET form carries both the checkboxes and the sort select.
            form method="get" action="/buy" class="flex flex-col lg:flex-row gap-8" {
                (filter_sidebar(&sections, vm.filters))

                main class="lg:w-3/4 w-full" {
                    div class="flex justify-between mb-6" {
                        span class="result-count text-gray-600 text-lg font-medium" {
                            (vm.bikes.len()) " Bikes In " (vm.region)
                        }
                        (sort_select(vm.sort))
                    }

                    div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6" {
                        @if vm.bikes.is_empty() {
                            p class="empty text-center col-span-full" { "No bikes found." }
                        } @else {
                            @for bike in vm.bikes {
                                (bike_card(bike))
                            }
                        }
                    }

                    @if let Some(at) = vm.loaded_at {
                        p class="catalog-updated text-xs text-gray-400 mt-6" {
                            "Catalog updated " (at.format("%d %b %Y %H:%M UTC").to_string())
                        }
                    }
                }
            }
        },
    )
}
