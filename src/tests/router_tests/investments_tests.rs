use crate::domain::images::ImageCategory;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};
use scraper::{Html, Selector};

/// Titles of the property cards on a listing page, in display order.
fn card_titles(body: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    let selector = Selector::parse("article.property-card h3 a").unwrap();
    doc.select(&selector)
        .map(|a| a.text().collect::<String>())
        .collect()
}

#[test]
fn listings_default_to_active_by_price_descending() {
    let app = test_app();
    let body = body_string(handle(get("/investments"), &app).unwrap());

    assert_eq!(
        card_titles(&body),
        vec![
            "Sotogrande Estate",
            "Modern Villa",
            "City Penthouse",
            "Golf Townhouse",
            "Soho Loft",
            "Sea View Apartment",
        ]
    );
    assert!(!body.contains("Beach Studio"), "sold listings are hidden");
}

#[test]
fn price_bounds_filter_listings() {
    let app = test_app();
    let body = body_string(handle(get("/investments?minPrice=200000&maxPrice=500000"), &app).unwrap());
    assert_eq!(card_titles(&body), vec!["Golf Townhouse", "Soho Loft"]);
}

#[test]
fn unparseable_numbers_are_ignored() {
    let app = test_app();
    let body = body_string(handle(get("/investments?minPrice=lots&bedrooms=many"), &app).unwrap());
    assert_eq!(card_titles(&body).len(), 6);
}

#[test]
fn sort_key_changes_order() {
    let app = test_app();
    let body = body_string(handle(get("/investments?sortBy=price-asc"), &app).unwrap());
    let titles = card_titles(&body);
    assert_eq!(titles.first().map(String::as_str), Some("Sea View Apartment"));
    assert_eq!(titles.last().map(String::as_str), Some("Sotogrande Estate"));
}

#[test]
fn features_match_any_stored_encoding() {
    let app = test_app();
    // comma text, JSON object text and JSON array text all mention a pool
    let body = body_string(handle(get("/investments?features=pool"), &app).unwrap());
    assert_eq!(
        card_titles(&body),
        vec!["Sotogrande Estate", "Modern Villa", "Golf Townhouse"]
    );

    let body = body_string(handle(get("/investments?features=pool,sea+views"), &app).unwrap());
    assert_eq!(card_titles(&body), vec!["Sotogrande Estate", "Modern Villa"]);
}

#[test]
fn location_matches_city_case_insensitively() {
    let app = test_app();
    let body = body_string(handle(get("/investments?location=MALAGA"), &app).unwrap());
    assert_eq!(card_titles(&body), vec!["Soho Loft", "Sea View Apartment"]);
}

#[test]
fn tier_filter_uses_stored_or_derived_tier() {
    let app = test_app();

    let body = body_string(handle(get("/investments?investmentTier=Ultra+Prime"), &app).unwrap());
    assert_eq!(card_titles(&body), vec!["Sotogrande Estate"]);

    // p-002 stores an empty tier, so its 495k price decides
    let body = body_string(handle(get("/investments?investmentTier=Mid-range"), &app).unwrap());
    assert_eq!(card_titles(&body), vec!["Golf Townhouse", "Soho Loft"]);
}

#[test]
fn search_page_matches_keyword() {
    let app = test_app();
    let body = body_string(handle(get("/search?q=villa"), &app).unwrap());
    assert_eq!(card_titles(&body), vec!["Modern Villa"]);
    assert!(body.contains("Results for"));
}

#[test]
fn property_detail_shows_normalized_fields() {
    let app = test_app();
    let resp = handle(get("/investments/modern-villa-estepona"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Luxury Plus"));
    assert!(body.contains("€2,950,000"));
    assert!(body.contains("Infinity pool"));
    assert!(body.contains("Home cinema"));

    let doc = Html::parse_document(&body);
    let hero = Selector::parse("img.hero-image").unwrap();
    let src = doc
        .select(&hero)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap();
    assert_eq!(src, "https://images.example.com/p-003/hero.jpg");

    let gallery = Selector::parse("img.gallery-image").unwrap();
    assert_eq!(doc.select(&gallery).count(), 2);
}

#[test]
fn unusable_images_fall_back_to_placeholder() {
    let app = test_app();
    let body = body_string(handle(get("/investments/estate-sotogrande"), &app).unwrap());

    let doc = Html::parse_document(&body);
    let hero = Selector::parse("img.hero-image").unwrap();
    let img = doc.select(&hero).next().unwrap();
    assert_eq!(img.value().attr("src"), Some(ImageCategory::Property.fallback(0)));

    let fallbacks: Vec<String> =
        serde_json::from_str(img.value().attr("data-fallbacks").unwrap()).unwrap();
    assert_eq!(
        fallbacks,
        vec![ImageCategory::Property.fallback(1), ImageCategory::Property.fallback(0)]
    );
}

#[test]
fn similar_listings_exclude_the_property_itself() {
    let app = test_app();
    let body = body_string(handle(get("/investments/malaga-loft"), &app).unwrap());

    let doc = Html::parse_document(&body);
    let similar = Selector::parse("#similar article.property-card h3 a").unwrap();
    let titles: Vec<String> = doc.select(&similar).map(|a| a.text().collect()).collect();
    assert_eq!(titles, vec!["Sea View Apartment"]);
}

#[test]
fn legacy_property_urls_redirect() {
    let app = test_app();
    let resp = handle(get("/properties/sea-view-apartment-malaga"), &app).unwrap();
    assert_eq!(resp.status(), 301);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/investments/sea-view-apartment-malaga"
    );
}

#[test]
fn missing_property_is_not_found() {
    let app = test_app();
    let result = handle(get("/investments/does-not-exist"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn property_page_shows_market_figures_for_its_city() {
    let app = test_app();
    let body = body_string(handle(get("/investments/townhouse-marbella-golf"), &app).unwrap());

    assert!(body.contains("Market Insights: Marbella"));
    assert!(body.contains("Very High"));
    assert!(body.contains("width: 95%"));
    assert!(body.contains("Golden Mile resales are absorbing new supply within weeks."));
    assert!(body.contains(r#"href="/blog?locationSlug=marbella""#));

    // Estepona has no location entry
    let body = body_string(handle(get("/investments/modern-villa-estepona"), &app).unwrap());
    assert!(body.contains("Market Insights: Estepona"));
    assert!(body.contains("Indicative regional figures"));
}
