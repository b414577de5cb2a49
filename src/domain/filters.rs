// src/domain/filters.rs

use crate::domain::bike::Bike;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// One facet the listing can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterDimension {
    Price,
    Brand,
    Category,
    Year,
    Mileage,
    Fuel,
    Color,
}

impl FilterDimension {
    /// Sidebar order.
    pub const ALL: [FilterDimension; 7] = [
        FilterDimension::Price,
        FilterDimension::Brand,
        FilterDimension::Category,
        FilterDimension::Year,
        FilterDimension::Mileage,
        FilterDimension::Fuel,
        FilterDimension::Color,
    ];

    /// Query-string key.
    pub fn key(self) -> &'static str {
        match self {
            FilterDimension::Price => "price",
            FilterDimension::Brand => "brand",
            FilterDimension::Category => "category",
            FilterDimension::Year => "year",
            FilterDimension::Mileage => "mileage",
            FilterDimension::Fuel => "fuel",
            FilterDimension::Color => "color",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FilterDimension::Price => "Budget",
            FilterDimension::Brand => "Brand",
            FilterDimension::Category => "Category",
            FilterDimension::Year => "Year",
            FilterDimension::Mileage => "Kilometers",
            FilterDimension::Fuel => "Fuel Type",
            FilterDimension::Color => "Color",
        }
    }

    /// Band table for numeric dimensions, `None` for categorical ones.
    pub fn bands(self) -> Option<&'static [RangeOption]> {
        match self {
            FilterDimension::Price => Some(PRICE_BANDS),
            FilterDimension::Year => Some(YEAR_BANDS),
            FilterDimension::Mileage => Some(MILEAGE_BANDS),
            _ => None,
        }
    }

    /// Does `bike` satisfy `token` in this dimension?
    ///
    /// A bike missing the attribute never matches. A token that is not one of
    /// the dimension's bands never matches a numeric dimension.
    pub fn matches(self, bike: &Bike, token: &str) -> bool {
        match self {
            FilterDimension::Price => band_matches(PRICE_BANDS, token, bike.price),
            FilterDimension::Mileage => band_matches(MILEAGE_BANDS, token, bike.mileage),
            FilterDimension::Year => band_matches(YEAR_BANDS, token, bike.year.map(f64::from)),
            FilterDimension::Brand => exact_matches(&bike.brand, token),
            FilterDimension::Category => exact_matches(&bike.category, token),
            FilterDimension::Fuel => exact_matches(&bike.fuel, token),
            FilterDimension::Color => exact_matches(&bike.color, token),
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterDimension::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| format!("unknown filter dimension: {s}"))
    }
}

fn band_matches(bands: &[RangeOption], token: &str, value: Option<f64>) -> bool {
    let Some(value) = value else {
        return false;
    };
    bands
        .iter()
        .find(|b| b.token == token)
        .is_some_and(|b| b.band.contains(value))
}

fn exact_matches(field: &Option<String>, token: &str) -> bool {
    field.as_deref() == Some(token)
}

/// A numeric interval. `Between` is inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    Below(f64),
    Between(f64, f64),
    Above(f64),
}

impl Band {
    pub fn contains(self, value: f64) -> bool {
        match self {
            Band::Below(limit) => value < limit,
            Band::Between(lo, hi) => value >= lo && value <= hi,
            Band::Above(limit) => value > limit,
        }
    }
}

/// A selectable band: the token carried in the query string, its label, and
/// the interval it selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeOption {
    pub token: &'static str,
    pub label: &'static str,
    pub band: Band,
}

pub const PRICE_BANDS: &[RangeOption] = &[
    RangeOption {
        token: "<50000",
        label: "Under ₹50,000",
        band: Band::Below(50_000.0),
    },
    RangeOption {
        token: "50000-100000",
        label: "₹50,000 - ₹1,00,000",
        band: Band::Between(50_000.0, 100_000.0),
    },
    RangeOption {
        token: ">100000",
        label: "Over ₹1,00,000",
        band: Band::Above(100_000.0),
    },
];

// Years above 2024 have no band; they only show with no year filter active.
pub const YEAR_BANDS: &[RangeOption] = &[
    RangeOption {
        token: "2020-2024",
        label: "2020 - 2024",
        band: Band::Between(2020.0, 2024.0),
    },
    RangeOption {
        token: "2015-2019",
        label: "2015 - 2019",
        band: Band::Between(2015.0, 2019.0),
    },
    RangeOption {
        token: "<2015",
        label: "Before 2015",
        band: Band::Below(2015.0),
    },
];

pub const MILEAGE_BANDS: &[RangeOption] = &[
    RangeOption {
        token: "<5000",
        label: "Under 5000 km",
        band: Band::Below(5_000.0),
    },
    RangeOption {
        token: "5000-20000",
        label: "5000 - 20000 km",
        band: Band::Between(5_000.0, 20_000.0),
    },
    RangeOption {
        token: ">20000",
        label: "Over 20000 km",
        band: Band::Above(20_000.0),
    },
];

/// Selected tokens per dimension. OR within a dimension, AND across them.
/// A dimension with no tokens does not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeMap<FilterDimension, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, dimension: FilterDimension, token: impl Into<String>) {
        self.selected.entry(dimension).or_default().insert(token.into());
    }

    /// Builder-style `select` for fixtures.
    #[cfg(test)]
    pub fn with(mut self, dimension: FilterDimension, token: impl Into<String>) -> Self {
        self.select(dimension, token);
        self
    }

    pub fn is_selected(&self, dimension: FilterDimension, token: &str) -> bool {
        self.selected
            .get(&dimension)
            .is_some_and(|tokens| tokens.contains(token))
    }

    /// Dimensions with at least one token.
    pub fn active(&self) -> impl Iterator<Item = (FilterDimension, &BTreeSet<String>)> {
        self.selected
            .iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(d, tokens)| (*d, tokens))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Does `bike` pass every active dimension?
    pub fn admits(&self, bike: &Bike) -> bool {
        self.active()
            .all(|(dimension, tokens)| tokens.iter().any(|t| dimension.matches(bike, t)))
    }
}
