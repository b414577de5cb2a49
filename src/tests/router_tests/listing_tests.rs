use crate::router::handle;
use crate::tests::utils::{
    body_string, card_ids, count, failing_state, fixture_bikes, get, test_state, text_of,
};

#[test]
fn root_redirects_to_listing() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let resp = handle(get("/"), &state)?;

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/buy");
    Ok(())
}

#[test]
fn listing_shows_every_bike_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let resp = handle(get("/buy"), &state)?;
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(card_ids(&html), vec![3, 1, 5, 2, 4]);
    assert_eq!(text_of(&html, ".result-count"), vec!["5 Bikes In Tamil Nadu"]);
    assert_eq!(count(&html, "p.empty"), 0);
    assert_eq!(count(&html, "a.clear-filters"), 0);
    Ok(())
}

#[test]
fn price_band_filter_narrows_listing() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let html = body_string(handle(get("/buy?price=%3C50000"), &state)?);
    assert_eq!(card_ids(&html), vec![1]);

    let html = body_string(handle(get("/buy?price=50000-100000&sort=price_low_high"), &state)?);
    assert_eq!(card_ids(&html), vec![5, 3]);
    Ok(())
}

#[test]
fn repeated_brand_is_or_and_dimensions_are_and() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let html = body_string(handle(
        get("/buy?brand=Royal+Enfield&brand=OLA&sort=price_low_high"),
        &state,
    )?);
    assert_eq!(card_ids(&html), vec![3, 4]);

    let html = body_string(handle(get("/buy?category=Scooter&fuel=Electric"), &state)?);
    assert_eq!(card_ids(&html), vec![3]);

    let html = body_string(handle(get("/buy?year=2015-2019&mileage=5000-20000"), &state)?);
    assert_eq!(card_ids(&html), vec![5]);
    Ok(())
}

#[test]
fn price_high_low_sort() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let html = body_string(handle(get("/buy?sort=price_high_low"), &state)?);

    assert_eq!(card_ids(&html), vec![4, 2, 3, 5, 1]);
    Ok(())
}

#[test]
fn unknown_brand_shows_empty_state() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let html = body_string(handle(get("/buy?brand=Ducati"), &state)?);

    assert!(card_ids(&html).is_empty());
    assert_eq!(text_of(&html, "p.empty"), vec!["No bikes found."]);
    assert_eq!(text_of(&html, ".result-count"), vec!["0 Bikes In Tamil Nadu"]);
    Ok(())
}

#[test]
fn failed_catalog_fetch_renders_empty_page() -> Result<(), Box<dyn std::error::Error>> {
    let state = failing_state();

    let resp = handle(get("/buy"), &state)?;
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(text_of(&html, "p.empty"), vec!["No bikes found."]);
    assert_eq!(count(&html, ".catalog-updated"), 0);
    Ok(())
}

#[test]
fn controls_reflect_current_selection() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let html = body_string(handle(
        get("/buy?brand=Bajaj&price=%3E100000&sort=mileage_low_high"),
        &state,
    )?);

    assert_eq!(count(&html, r#"input[type="checkbox"][checked]"#), 2);
    assert_eq!(
        count(&html, r#"input[name="brand"][value="Bajaj"][checked]"#),
        1
    );
    assert_eq!(
        count(&html, r#"input[name="price"][value=">100000"][checked]"#),
        1
    );
    assert_eq!(
        text_of(&html, r#"select[name="sort"] option[selected]"#),
        vec!["Mileage: Low to High"]
    );
    assert_eq!(count(&html, "a.clear-filters"), 1);
    Ok(())
}

#[test]
fn sidebar_lists_every_section() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let html = body_string(handle(get("/buy"), &state)?);

    assert_eq!(
        text_of(&html, "details.filter-section summary"),
        vec!["Budget", "Brand", "Category", "Year", "Kilometers", "Fuel Type", "Color"]
    );
    // 3 + 6 + 2 + 3 + 3 + 2 + 4
    assert_eq!(count(&html, r#"input[type="checkbox"]"#), 23);
    Ok(())
}

#[test]
fn card_shows_price_badge_and_link() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let html = body_string(handle(get("/buy?brand=Bajaj"), &state)?);

    assert_eq!(text_of(&html, "div.bike-card .price"), vec!["₹1,20,000"]);
    assert_eq!(text_of(&html, "div.bike-card h3"), vec!["2018 | Pulsar 220F | std"]);
    assert_eq!(count(&html, r#"a[href="/buy/2"] div.bike-card"#), 1);
    assert!(text_of(&html, "div.bike-card div")
        .iter()
        .any(|t| t == "Booked"));
    assert_eq!(
        count(&html, r#"img[src="http://api.test/media/bikes/2.jpg"][alt="Pulsar 220F"]"#),
        1
    );
    Ok(())
}

#[test]
fn unknown_sort_is_bad_request() {
    let state = test_state(fixture_bikes());

    let err = handle(get("/buy?sort=cheapest"), &state).err().expect("request should fail");

    assert_eq!(err.status(), 400);
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state(fixture_bikes());

    let err = handle(get("/sell"), &state).err().expect("request should fail");

    assert_eq!(err.status(), 404);
}

#[test]
fn error_pages_carry_status_and_message() {
    use crate::errors::ServerError;
    use crate::responses::error_to_response;

    let resp = error_to_response(ServerError::BadRequest("unknown sort: cheapest".into()));
    assert_eq!(resp.status(), 400);
    let html = body_string(resp);
    assert_eq!(text_of(&html, "h1"), vec!["Error 400"]);
    assert!(html.contains("unknown sort: cheapest"));
}
