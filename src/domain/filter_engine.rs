// src/domain/filter_engine.rs

use crate::domain::bike::Bike;
use crate::domain::filters::FilterSelection;
use crate::domain::sort::SortKey;

/// Narrows `bikes` by `filters` and orders the survivors by `sort`.
///
/// Pure: the input is never touched, and the result borrows from it, so every
/// returned bike is one of the inputs and none appears twice. Sorting is
/// stable, so bikes that compare equal keep their catalog order.
pub fn apply<'a>(bikes: &'a [Bike], filters: &FilterSelection, sort: SortKey) -> Vec<&'a Bike> {
    let mut view: Vec<&Bike> = bikes.iter().filter(|bike| filters.admits(bike)).collect();

    view.sort_by(|a, b| sort.compare(a, b));
    view
}
