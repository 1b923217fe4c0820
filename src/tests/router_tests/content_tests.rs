use crate::db::posts::{list_posts, post_by_slug, related_posts, PostQuery};
use crate::domain::images::ImageCategory;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, test_app};
use scraper::{Html, Selector};

fn texts(body: &str, css: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn blog_tag_filter_matches_every_tag_encoding() {
    let app = test_app();
    let body = body_string(handle(get("/blog?tag=tax"), &app).unwrap());

    assert_eq!(
        texts(&body, "article.post-card h3 a"),
        vec![
            "What the Golden Visa Changes Mean for Investors",
            "The Complete Buying Process Guide",
            "Tax Guide for Non-Residents",
        ]
    );
}

#[test]
fn tag_filter_runs_before_pagination() {
    let db = init_test_db();
    let query = PostQuery {
        limit: 1,
        offset: 1,
        tag: Some("TAX".into()),
        ..Default::default()
    };
    let page = list_posts(&db, &query).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].slug, "buying-process-guide");
}

#[test]
fn unpublished_posts_are_hidden() {
    let app = test_app();
    let body = body_string(handle(get("/blog"), &app).unwrap());
    assert!(!body.contains("Unpublished Draft"));

    let result = handle(get("/blog/draft-post"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn guides_page_lists_only_guides_with_categories() {
    let app = test_app();
    let body = body_string(handle(get("/guides"), &app).unwrap());

    assert_eq!(
        texts(&body, "article.post-card h3 a"),
        vec!["The Complete Buying Process Guide", "Tax Guide for Non-Residents"]
    );
    assert_eq!(texts(&body, "nav.category-nav a"), vec!["All", "Buying", "Tax"]);
}

#[test]
fn guide_under_blog_prefix_redirects() {
    let app = test_app();
    let resp = handle(get("/blog/buying-process-guide"), &app).unwrap();
    assert_eq!(resp.status(), 301);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/guides/buying-process-guide"
    );
}

#[test]
fn post_body_is_rendered_as_html() {
    let app = test_app();
    let body = body_string(handle(get("/guides/buying-process-guide"), &app).unwrap());
    assert!(body.contains("<h2>Step 1</h2>"));
    assert_eq!(
        texts(&body, "ul.tags li a"),
        vec!["Legal", "Buying process", "Tax"]
    );
}

#[test]
fn related_posts_prefer_location_then_tag_then_recent() {
    let db = init_test_db();
    let visa = post_by_slug(&db, "golden-visa-changes").unwrap().unwrap();
    let related = related_posts(&db, &visa, 2).unwrap();
    let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
    // same location first; the unpublished draft shares it but is skipped
    assert_eq!(slugs, vec!["buying-process-guide", "marbella-market-2024"]);

    let tax = post_by_slug(&db, "tax-guide-non-residents").unwrap().unwrap();
    let related = related_posts(&db, &tax, 3).unwrap();
    let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["golden-visa-changes", "buying-process-guide", "marbella-market-2024"]
    );
}

#[test]
fn locations_are_grouped_under_parents() {
    let app = test_app();
    let body = body_string(handle(get("/locations"), &app).unwrap());
    assert_eq!(
        texts(&body, "section.location-group > article.location-card h3 a"),
        vec!["Andalusia", "Valencia"]
    );
    assert_eq!(
        texts(&body, "section.location-group .grid article.location-card h3 a"),
        vec!["Marbella", "Malaga"]
    );
}

#[test]
fn location_slug_lookup_ignores_case() {
    let app = test_app();
    let resp = handle(get("/locations/MALAGA"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // lifestyle tags stored as a Postgres array literal
    assert_eq!(texts(&body, "article.location ul.tags li"), vec!["Culture", "Food scene", "Beach"]);
    assert!(body.contains("Soho Loft"));
}

#[test]
fn parent_location_shows_children_and_listings() {
    let app = test_app();
    let body = body_string(handle(get("/locations/andalusia"), &app).unwrap());

    assert_eq!(texts(&body, "#areas article.location-card h3 a"), vec!["Marbella", "Malaga"]);
    assert_eq!(texts(&body, "#properties article.property-card").len(), 3);
    assert_eq!(texts(&body, "article.location ul.tags li"), vec!["Beach", "Golf", "Gastronomy"]);
}

#[test]
fn partners_are_grouped_by_region_featured_first() {
    let app = test_app();
    let body = body_string(handle(get("/partners"), &app).unwrap());

    assert_eq!(texts(&body, "section.partner-region h2"), vec!["Europe", "Middle East"]);
    assert_eq!(
        texts(&body, "article.partner-card h3 a"),
        vec!["Nordic Homes Abroad", "Casa UK Advisors", "Gulf Property Partners"]
    );
    assert!(!body.contains("Dormant Realty"));
}

#[test]
fn partner_is_found_by_name_slug_or_id() {
    let app = test_app();

    let body = body_string(handle(get("/partners/nordic-homes-abroad"), &app).unwrap());
    assert!(body.contains("Holiday homes"));
    assert!(body.contains("Retirement relocation"));
    assert!(body.contains("https://linkedin.example/nordic"));
    assert_eq!(
        texts(&body, "article.partner ul.tags li"),
        vec![
            "Holiday homes",
            "Retirement relocation",
            "Swedish",
            "English",
            "Spanish",
            "Los Flamingos resale portfolio",
        ]
    );

    let body = body_string(handle(get("/partners/pt-002"), &app).unwrap());
    assert!(body.contains("Casa UK Advisors"));
    assert!(body.contains("Mortgages"));

    let missing = handle(get("/partners/nobody-here"), &app);
    assert!(matches!(missing, Err(ServerError::NotFound)));
}

#[test]
fn partner_portrait_that_is_not_a_url_shows_a_placeholder() {
    let app = test_app();
    let body = body_string(handle(get("/partners/gulf-property-partners"), &app).unwrap());

    let doc = Html::parse_document(&body);
    let avatar = Selector::parse("article.partner img.avatar-large").unwrap();
    let img = doc.select(&avatar).next().expect("portrait rendered");
    assert_eq!(img.value().attr("src"), Some(ImageCategory::General.fallback(0)));
    assert!(img.value().attr("data-fallbacks").is_some());
    assert!(!body.contains(r#"src="not-a-url""#));
}

#[test]
fn blog_pages_link_to_each_other_and_keep_filters() {
    let app = test_app();
    app.db
        .with_conn(|conn| {
            for i in 0..12 {
                conn.execute(
                    "INSERT INTO blog_posts (id, slug, title, tags, published, created_at)
                     VALUES (?1, ?1, ?1, 'Tax', 1, '2023-01-01 09:00:00')",
                    [format!("tax-note-{i:02}")],
                )?;
            }
            Ok(())
        })
        .unwrap();

    let first = body_string(handle(get("/blog?tag=tax"), &app).unwrap());
    assert_eq!(texts(&first, "article.post-card h3 a").len(), 12);
    let doc = Html::parse_document(&first);
    let next = Selector::parse(r#"nav.pagination a[rel="next"]"#).unwrap();
    assert_eq!(
        doc.select(&next).next().and_then(|a| a.value().attr("href")),
        Some("?tag=tax&page=2")
    );

    let second = body_string(handle(get("/blog?tag=tax&page=2"), &app).unwrap());
    assert_eq!(texts(&second, "article.post-card h3 a").len(), 3);
    let doc = Html::parse_document(&second);
    let prev = Selector::parse(r#"nav.pagination a[rel="prev"]"#).unwrap();
    assert_eq!(
        doc.select(&prev).next().and_then(|a| a.value().attr("href")),
        Some("?tag=tax&page=1")
    );
    assert!(doc.select(&next).next().is_none());
}

#[test]
fn unknown_location_shows_coming_soon_page() {
    let app = test_app();
    let resp = handle(get("/locations/atlantis"), &app).unwrap();
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Location Coming Soon"));
    assert!(body.contains(r#"href="/locations""#));
    assert!(body.contains(r#"href="/investments""#));
}

#[test]
fn failed_location_read_also_shows_coming_soon() {
    let app = test_app();
    app.db
        .with_conn(|conn| Ok(conn.execute_batch("DROP TABLE locations")?))
        .unwrap();

    let body = body_string(handle(get("/locations/malaga"), &app).unwrap());
    assert!(body.contains("Location Coming Soon"));
}

fn insights_card(body: &str) -> Option<String> {
    let doc = Html::parse_document(body);
    let card = Selector::parse("section.market-insights").unwrap();
    doc.select(&card).next().map(|c| c.html())
}

#[test]
fn location_page_shows_stored_market_figures() {
    let app = test_app();
    let body = body_string(handle(get("/locations/malaga"), &app).unwrap());
    let card = insights_card(&body).expect("market card rendered");

    assert!(card.contains("Market Insights: Malaga"));
    assert!(card.contains("€3,900/m²"));
    assert!(card.contains("5.6%"));
    assert!(card.contains("+41%"));
    assert!(card.contains("width: 75%"));
    assert!(card.contains("Updated: May 2024"));
    assert!(!card.contains("Indicative"));
}

#[test]
fn location_without_figures_shows_defaults() {
    let app = test_app();
    let body = body_string(handle(get("/locations/andalusia"), &app).unwrap());
    let card = insights_card(&body).expect("market card rendered");

    assert!(card.contains("Indicative regional figures"));
    assert!(card.contains("€6,500/m²"));
    assert!(card.contains("High"));
}

#[test]
fn post_page_shows_figures_for_its_location() {
    let app = test_app();
    let body = body_string(handle(get("/blog/valencia-neighbourhoods"), &app).unwrap());
    let card = insights_card(&body).expect("market card rendered");

    assert!(card.contains("Market Insights: Valencia"));
    assert!(card.contains("Medium"));
    assert!(card.contains("width: 50%"));
    assert!(card.contains("6.1%"));
    assert!(!card.contains("Updated:"));
}

#[test]
fn market_card_survives_a_failed_read() {
    let app = test_app();
    app.db
        .with_conn(|conn| Ok(conn.execute_batch("DROP TABLE market_insights")?))
        .unwrap();

    let body = body_string(handle(get("/locations/malaga"), &app).unwrap());
    let card = insights_card(&body).expect("market card rendered");
    assert!(card.contains("Indicative regional figures"));
}
