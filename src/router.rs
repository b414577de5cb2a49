use crate::domain::filter_engine;
use crate::domain::{FilterDimension, FilterSelection, SortKey};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{bike_detail_page, listing_page, ListingVm};
use astra::Request;
use tracing::debug;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => redirect("/buy"),
        ("GET", "/buy") | ("GET", "/buy/") => buy_page(req.uri().query(), state),
        ("GET", p) if p.starts_with("/buy/") => bike_detail(&p["/buy/".len()..], state),
        _ => Err(ServerError::NotFound),
    }
}

fn buy_page(query: Option<&str>, state: &AppState) -> ResultResp {
    let (filters, sort) = parse_listing_query(query)?;
    let bikes = state.bikes();

    let view = filter_engine::apply(&bikes, &filters, sort);
    debug!(total = bikes.len(), shown = view.len(), %sort, "listing rendered");

    html_response(listing_page(&ListingVm {
        bikes: &view,
        filters: &filters,
        sort,
        region: &state.region,
        loaded_at: state.catalog.loaded_at(),
    }))
}

fn bike_detail(id: &str, state: &AppState) -> ResultResp {
    let id: i64 = id
        .trim_end_matches('/')
        .parse()
        .map_err(|_| ServerError::NotFound)?;

    let bikes = state.bikes();
    let bike = bikes
        .iter()
        .find(|b| b.id == id)
        .ok_or(ServerError::NotFound)?;

    html_response(bike_detail_page(bike))
}

/// Reads the filter selection and sort from a `/buy` query string.
///
/// Each dimension key may repeat (`brand=Yamaha&brand=Bajaj`). Empty values
/// and unknown keys are ignored. An unrecognised `sort` is a bad request; a
/// missing or empty one means newest first.
pub fn parse_listing_query(query: Option<&str>) -> Result<(FilterSelection, SortKey), ServerError> {
    let mut filters = FilterSelection::new();
    let mut sort = SortKey::default();

    let Some(query) = query else {
        return Ok((filters, sort));
    };

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        if key == "sort" {
            sort = value.parse().map_err(ServerError::BadRequest)?;
        } else if let Ok(dimension) = key.parse::<FilterDimension>() {
            filters.select(dimension, value.into_owned());
        }
    }

    Ok((filters, sort))
}
