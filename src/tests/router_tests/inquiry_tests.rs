use crate::db::inquiries::count_inquiries;
use crate::router::handle;
use crate::tests::utils::{body_string, post_form, test_app};
use scraper::{Html, Selector};

#[test]
fn inquiry_is_stored_and_acknowledged() {
    let app = test_app();
    let form = "name=Ana&email=Ana%40Example.com&message=Is+the+villa+still+available%3F&property_id=p-003&property_custom_id=MC-003&source=property-page";

    let resp = handle(post_form("/inquiries", form, false), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you, Ana!"));

    let stored = app
        .db
        .with_conn(|conn| {
            Ok(conn.query_row(
                "SELECT email, status, reveal, source, property_custom_id FROM inquiries",
                [],
                |r| {
                    Ok((
                        r.get::<_, String>(0)?,
                        r.get::<_, String>(1)?,
                        r.get::<_, i64>(2)?,
                        r.get::<_, String>(3)?,
                        r.get::<_, String>(4)?,
                    ))
                },
            )?)
        })
        .unwrap();
    assert_eq!(
        stored,
        (
            "ana@example.com".to_string(),
            "new".to_string(),
            0,
            "property-page".to_string(),
            "MC-003".to_string()
        )
    );
}

#[test]
fn missing_message_is_rejected_without_a_row() {
    let app = test_app();
    let form = "name=Ana&email=ana%40example.com&message=";

    let resp = handle(post_form("/inquiries", form, false), &app).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("message is required"));

    // submitted values are kept for the retry
    let doc = Html::parse_document(&body);
    let name = Selector::parse("input[name=name]").unwrap();
    assert_eq!(
        doc.select(&name).next().and_then(|i| i.value().attr("value")),
        Some("Ana")
    );

    assert_eq!(count_inquiries(&app.db).unwrap(), 0);
}

#[test]
fn htmx_submissions_get_fragments() {
    let app = test_app();

    let ok = handle(
        post_form("/inquiries", "name=Bo&email=bo%40example.org&message=Call+me", true),
        &app,
    )
    .unwrap();
    assert_eq!(ok.status(), 200);
    let body = body_string(ok);
    assert!(!body.contains("<html"));
    assert!(body.contains(r#"id="inquiry-panel""#));
    assert!(body.contains("Thank you, Bo!"));

    let bad = handle(
        post_form("/inquiries", "name=Bo&email=not-an-email&message=Call+me", true),
        &app,
    )
    .unwrap();
    assert_eq!(bad.status(), 200);
    let body = body_string(bad);
    assert!(!body.contains("<html"));
    assert!(body.contains("please enter a valid email address"));

    assert_eq!(count_inquiries(&app.db).unwrap(), 1);
}

#[test]
fn storage_failure_shows_retry_message() {
    let app = test_app();
    app.db
        .with_conn(|conn| Ok(conn.execute_batch("DROP TABLE inquiries")?))
        .unwrap();

    let resp = handle(
        post_form("/inquiries", "name=Bo&email=bo%40example.org&message=Hello", false),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 500);
    let body = body_string(resp);
    assert!(body.contains("Failed to submit inquiry. Please try again."));
    assert!(body.contains("Try again"));
}
