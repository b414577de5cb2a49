use crate::domain::options::FilterSection;
use crate::domain::{FilterSelection, SortKey};
use maud::{html, Markup};

/// Sidebar of collapsible checkbox groups. Every box reflects `selected`, so
/// submitting the surrounding form round-trips the current selection.
pub fn filter_sidebar(sections: &[FilterSection], selected: &FilterSelection) -> Markup {
    html! {
        aside class="filters lg:w-1/4 w-full p-4 lg:p-6 bg-white rounded-xl shadow-lg" {
            h2 class="text-lg lg:text-xl font-bold mb-4" { "Filters" }
            @for section in sections {
                details class="filter-section mb-4" open {
                    summary class="flex justify-between items-center w-full font-semibold text-gray-800 mb-2" {
                        (section.title)
                    }
                    div class="flex flex-col space-y-2 pl-2" {
                        @for opt in &section.options {
                            label class="flex items-center space-x-2" {
                                input type="checkbox"
                                    name=(section.dimension.key())
                                    value=(opt.value)
                                    checked[selected.is_selected(section.dimension, opt.value)];
                                span { (opt.label) }
                            }
                        }
                    }
                }
            }
            button type="submit" class="w-full px-4 py-2 bg-cyan-600 text-white rounded-lg" { "Apply" }
            @if !selected.is_empty() {
                a href="/buy" class="clear-filters block text-center text-sm text-gray-500 mt-2" { "Clear all" }
            }
        }
    }
}

pub fn sort_select(current: SortKey) -> Markup {
    html! {
        select name="sort" class="border rounded px-3 py-1" onchange="this.form.submit()" {
            @for key in SortKey::ALL {
                option value=(key.as_str()) selected[key == current] { (key.label()) }
            }
        }
    }
}
