// src/domain/sort.rs

use crate::domain::bike::Bike;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
    MileageLowHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceLowHigh,
        SortKey::PriceHighLow,
        SortKey::MileageLowHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLowHigh => "price_low_high",
            SortKey::PriceHighLow => "price_high_low",
            SortKey::MileageLowHigh => "mileage_low_high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::MileageLowHigh => "Mileage: Low to High",
        }
    }

    /// Total order for this key. Bikes missing the attribute sort after all
    /// bikes that have it.
    pub fn compare(self, a: &Bike, b: &Bike) -> Ordering {
        match self {
            SortKey::Newest => missing_last(a.year, b.year, |x, y| y.cmp(&x)),
            SortKey::PriceLowHigh => missing_last(a.price, b.price, |x, y| x.total_cmp(&y)),
            SortKey::PriceHighLow => missing_last(a.price, b.price, |x, y| y.total_cmp(&x)),
            SortKey::MileageLowHigh => {
                missing_last(a.mileage, b.mileage, |x, y| x.total_cmp(&y))
            }
        }
    }
}

fn missing_last<T: Copy>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown sort: {s}"))
    }
}
