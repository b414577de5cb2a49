// src/domain/options.rs

use crate::domain::filters::FilterDimension;

pub const BRANDS: &[&str] = &["Yamaha", "Suzuki", "Royal Enfield", "OLA", "Bajaj", "Aprilia"];
pub const CATEGORIES: &[&str] = &["Scooter", "Motorcycle"];
pub const FUELS: &[&str] = &["Petrol", "Electric"];
pub const COLORS: &[&str] = &["Blue", "Red", "Black", "White"];

/// A checkbox in the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// One collapsible block of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSection {
    pub dimension: FilterDimension,
    pub title: &'static str,
    pub options: Vec<FilterOption>,
}

/// The fixed option catalog the sidebar is built from.
pub fn filter_sections() -> Vec<FilterSection> {
    FilterDimension::ALL
        .into_iter()
        .map(|dimension| FilterSection {
            dimension,
            title: dimension.title(),
            options: options_for(dimension),
        })
        .collect()
}

fn options_for(dimension: FilterDimension) -> Vec<FilterOption> {
    if let Some(bands) = dimension.bands() {
        return bands
            .iter()
            .map(|b| FilterOption {
                label: b.label,
                value: b.token,
            })
            .collect();
    }

    let values = match dimension {
        FilterDimension::Brand => BRANDS,
        FilterDimension::Category => CATEGORIES,
        FilterDimension::Fuel => FUELS,
        FilterDimension::Color => COLORS,
        // numeric dimensions returned above
        FilterDimension::Price | FilterDimension::Year | FilterDimension::Mileage => &[],
    };

    values
        .iter()
        .map(|&v| FilterOption { label: v, value: v })
        .collect()
}
