use crate::catalog::{CatalogError, CatalogSource, CatalogStore};
use crate::domain::Bike;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use scraper::{Html, Selector};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// Source that must never be hit: the seeded stores below never go stale.
pub struct UnusedSource;

impl CatalogSource for UnusedSource {
    fn fetch_bikes(&self) -> Result<Vec<Bike>, CatalogError> {
        panic!("catalog should not be refetched in this test");
    }
}

pub struct FailingSource;

impl CatalogSource for FailingSource {
    fn fetch_bikes(&self) -> Result<Vec<Bike>, CatalogError> {
        Err(CatalogError::UnexpectedShape("api down".into()))
    }
}

#[allow(clippy::too_many_arguments)]
fn bike(
    id: i64,
    brand: &str,
    model: &str,
    year: i32,
    price: f64,
    mileage: f64,
    category: &str,
    fuel: &str,
    color: &str,
) -> Bike {
    Bike {
        price: Some(price),
        mileage: Some(mileage),
        year: Some(year),
        brand: Some(brand.to_string()),
        category: Some(category.to_string()),
        fuel: Some(fuel.to_string()),
        color: Some(color.to_string()),
        model: Some(model.to_string()),
        specs: Some("std".to_string()),
        owner: Some("1st Owner".to_string()),
        location: Some("Chennai".to_string()),
        image: Some(format!("http://api.test/media/bikes/{id}.jpg")),
        ..Bike::new(id)
    }
}

/// Newest-first order: 3, 1, 5, 2, 4.
pub fn fixture_bikes() -> Vec<Bike> {
    let mut pulsar = bike(2, "Bajaj", "Pulsar 220F", 2018, 120000.0, 30000.0, "Motorcycle", "Petrol", "Black");
    pulsar.booked = true;

    vec![
        bike(1, "Yamaha", "R15 V4", 2022, 40000.0, 1000.0, "Motorcycle", "Petrol", "Blue"),
        pulsar,
        bike(3, "OLA", "S1 Pro", 2023, 95000.0, 4000.0, "Scooter", "Electric", "White"),
        bike(4, "Royal Enfield", "Classic 350", 2014, 150000.0, 45000.0, "Motorcycle", "Petrol", "Red"),
        bike(5, "Suzuki", "Access 125", 2019, 55000.0, 12000.0, "Scooter", "Petrol", "Red"),
    ]
}

pub fn test_state(bikes: Vec<Bike>) -> AppState {
    AppState::new(
        CatalogStore::seeded(bikes, None),
        Arc::new(UnusedSource),
        "Tamil Nadu".to_string(),
    )
}

/// State whose catalog API is down; the first request tries once and fails.
pub fn failing_state() -> AppState {
    AppState::new(
        CatalogStore::new(Some(Duration::from_secs(60))),
        Arc::new(FailingSource),
        "Tamil Nadu".to_string(),
    )
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// `data-id` of every rendered card, in page order.
pub fn card_ids(html: &str) -> Vec<i64> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("div.bike-card").unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr("data-id"))
        .map(|id| id.parse().unwrap())
        .collect()
}

pub fn text_of(html: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

pub fn count(html: &str, selector: &str) -> usize {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}
