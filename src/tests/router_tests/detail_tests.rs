use crate::router::handle;
use crate::tests::utils::{body_string, count, fixture_bikes, get, test_state, text_of};

#[test]
fn detail_page_shows_one_bike() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(fixture_bikes());

    let resp = handle(get("/buy/4"), &state)?;
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(count(&html, r#"div.bike-detail[data-id="4"]"#), 1);
    assert_eq!(text_of(&html, "h1"), vec!["2014 Classic 350"]);
    assert_eq!(text_of(&html, ".bike-detail .price"), vec!["₹1,50,000"]);
    assert_eq!(
        text_of(&html, "th"),
        vec!["Brand", "Category", "Year", "Kilometers", "Fuel Type", "Color", "Owner", "Location"]
    );
    Ok(())
}

#[test]
fn detail_hides_missing_fields() -> Result<(), Box<dyn std::error::Error>> {
    let mut bike = crate::domain::Bike::new(9);
    bike.brand = Some("OLA".into());
    let state = test_state(vec![bike]);

    let html = body_string(handle(get("/buy/9/"), &state)?);

    assert_eq!(text_of(&html, "th"), vec!["Brand"]);
    assert_eq!(text_of(&html, ".price"), vec!["Price on request"]);
    Ok(())
}

#[test]
fn unknown_or_malformed_id_is_not_found() {
    let state = test_state(fixture_bikes());

    for uri in ["/buy/42", "/buy/abc"] {
        let err = handle(get(uri), &state).err().expect("request should fail");
        assert_eq!(err.status(), 404, "{uri}");
    }
}
