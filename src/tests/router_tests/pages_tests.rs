use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn home_page_loads_with_featured_listings() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured investments"));
    assert!(body.contains("Sea View Apartment"));
    assert!(body.contains("Modern Villa"));
    // Ultra Prime section comes from the price-derived tier
    assert!(body.contains("Sotogrande Estate"));
    assert!(body.contains("Andalusia"));
    assert!(!body.contains("Unpublished Draft"));
}

#[test]
fn every_top_level_page_renders() {
    let app = test_app();
    for path in [
        "/investments",
        "/search",
        "/locations",
        "/blog",
        "/guides",
        "/partners",
        "/investment-tiers",
    ] {
        let resp = handle(get(path), &app).unwrap_or_else(|e| panic!("{path} failed: {e}"));
        assert_eq!(resp.status(), 200, "{path} should load");
        assert!(body_string(resp).contains("<!DOCTYPE html>"));
    }
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    let result = handle(get("/no-such-page"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));

    let resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn tier_page_lists_every_band() {
    let app = test_app();
    let body = body_string(handle(get("/investment-tiers"), &app).unwrap());
    for name in ["Starter", "Mid-range", "Luxury Plus", "Luxury Premium", "Ultra Prime"] {
        assert!(body.contains(name), "missing tier {name}");
    }
    assert!(body.contains("/investments?investmentTier=Ultra+Prime"));
}

#[test]
fn static_assets_are_served() {
    let app = test_app();

    let js = handle(get("/static/site.js"), &app).unwrap();
    assert_eq!(js.status(), 200);
    assert_eq!(
        js.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/javascript; charset=utf-8"
    );
    assert!(body_string(js).contains("data-fallbacks"));

    let css = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(css.status(), 200);
}

#[test]
fn placeholder_svg_uses_requested_size_and_text() {
    let app = test_app();
    let resp = handle(get("/placeholder.svg?height=200&width=300&text=Explore+the+Region"), &app).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "image/svg+xml"
    );
    let body = body_string(resp);
    assert!(body.starts_with("<svg"));
    assert!(body.contains(r#"width="300""#));
    assert!(body.contains("Explore the Region"));
}

#[test]
fn failed_reads_render_empty_pages() {
    let app = test_app();
    app.db
        .with_conn(|conn| Ok(conn.execute_batch("DROP TABLE properties")?))
        .unwrap();

    let resp = handle(get("/investments"), &app).expect("degraded page should still render");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("No properties match these filters"));

    let missing = handle(get("/investments/sea-view-apartment-malaga"), &app);
    assert!(matches!(missing, Err(ServerError::NotFound)));
}
