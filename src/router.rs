use crate::config::Config;
use crate::db::inquiries::create_inquiry;
use crate::db::insights::insights_for_location;
use crate::db::locations::{child_locations, list_locations, location_by_slug, LocationQuery};
use crate::db::partners::{list_partners, partner_by_id, partner_by_slug, PartnerQuery};
use crate::db::posts::{guide_categories, list_posts, post_by_slug, related_posts, PostQuery};
use crate::db::properties::{
    list_properties, properties_for_location, property_by_slug, similar_properties,
};
use crate::db::{or_empty, Database};
use crate::domain::inquiry::NewInquiry;
use crate::domain::location::group_locations;
use crate::domain::partner::group_by_region;
use crate::domain::post::BlogPost;
use crate::domain::search::PropertySearch;
use crate::errors::{InquiryError, ServerError};
use crate::query::{property_search, QueryParams};
use crate::responses::{
    asset_response, html_response, html_response_with_status, redirect, ResultResp,
};
use crate::templates::components::{inquiry_form, inquiry_success, placeholder_svg, InsightsVm, Pager};
use crate::templates::pages;
use astra::Request;
use std::io::Read;

const SITE_JS: &str = include_str!("../static/site.js");
const MAIN_CSS: &str = include_str!("../static/main.css");

const PER_PAGE: i64 = 12;
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Everything a request handler needs. Shared by all worker threads.
#[derive(Clone)]
pub struct App {
    pub db: Database,
    pub config: Config,
}

impl App {
    pub fn new(db: Database, config: Config) -> Self {
        Self { db, config }
    }
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let params = QueryParams::from_request(&req);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    tracing::debug!(method = %method, path = %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(app),

        ("GET", ["investments"]) => investments(app, &params),
        ("GET", ["investments", slug]) => property_detail(app, slug),
        ("GET", ["properties", slug]) => redirect(301, &format!("/investments/{slug}")),
        ("GET", ["search"]) => search(app, &params),
        ("GET", ["investment-tiers"]) => html_response(pages::tiers_page()),

        ("GET", ["locations"]) => locations(app),
        ("GET", ["locations", slug]) => location_detail(app, slug),

        ("GET", ["blog"]) => blog(app, &params),
        ("GET", ["blog", slug]) => post_detail(app, slug, false),
        ("GET", ["guides"]) => guides(app, &params),
        ("GET", ["guides", slug]) => post_detail(app, slug, true),

        ("GET", ["partners"]) => partners(app),
        ("GET", ["partners", key]) => partner_detail(app, key),

        ("POST", ["inquiries"]) => submit_inquiry(&mut req, app),

        ("GET", ["static", "site.js"]) => {
            asset_response(SITE_JS, mime::APPLICATION_JAVASCRIPT_UTF_8)
        }
        ("GET", ["static", "main.css"]) => asset_response(MAIN_CSS, mime::TEXT_CSS_UTF_8),
        ("GET", ["placeholder.svg"]) => placeholder(&params),

        _ => Err(ServerError::NotFound),
    }
}

fn pager(params: &QueryParams) -> Pager {
    Pager {
        page: params.page(),
        per_page: PER_PAGE,
        base_query: params.without("page"),
    }
}

fn home(app: &App) -> ResultResp {
    let db = &app.db;
    let featured = PropertySearch {
        featured_only: true,
        limit: Some(3),
        ..Default::default()
    };
    let ultra_prime = PropertySearch {
        investment_tier: Some("Ultra Prime".to_string()),
        limit: Some(2),
        ..Default::default()
    };
    let parents = LocationQuery {
        limit: 6,
        parent_only: true,
        include_children: false,
    };
    let recent = PostQuery {
        limit: 3,
        ..Default::default()
    };

    let vm = pages::HomeVm {
        featured: or_empty("list_properties", list_properties(db, &featured)),
        ultra_prime: or_empty("list_properties", list_properties(db, &ultra_prime)),
        locations: or_empty("list_locations", list_locations(db, parents)),
        posts: or_empty("list_posts", list_posts(db, &recent)),
        pick: app.config.image_pick,
    };
    html_response(pages::home_page(&vm))
}

fn investments(app: &App, params: &QueryParams) -> ResultResp {
    let search = property_search(params, PER_PAGE);
    let properties = or_empty("list_properties", list_properties(&app.db, &search));
    let tree = LocationQuery {
        parent_only: true,
        include_children: true,
        ..Default::default()
    };
    let locations = group_locations(or_empty("list_locations", list_locations(&app.db, tree)));

    let vm = pages::InvestmentsVm {
        search,
        properties,
        locations,
        pager: pager(params),
        pick: app.config.image_pick,
    };
    html_response(pages::investments_page(&vm))
}

fn search(app: &App, params: &QueryParams) -> ResultResp {
    let search = property_search(params, PER_PAGE);
    let vm = pages::SearchVm {
        properties: or_empty("list_properties", list_properties(&app.db, &search)),
        search,
        pick: app.config.image_pick,
    };
    html_response(pages::search_page(&vm))
}

fn property_detail(app: &App, slug: &str) -> ResultResp {
    let db = &app.db;
    let property = or_empty("property_by_slug", property_by_slug(db, slug)).ok_or(ServerError::NotFound)?;

    let similar = or_empty("similar_properties", similar_properties(db, &property, 3));
    let about_city = PostQuery {
        limit: 2,
        location_slug: Some(property.city.to_lowercase()),
        ..Default::default()
    };
    let related_posts = or_empty("list_posts", list_posts(db, &about_city));
    let insights = InsightsVm {
        location_name: property.city.clone(),
        location_slug: property.city.to_lowercase(),
        insight: or_empty("insights_for_location", insights_for_location(db, None, &property.city)),
    };

    let vm = pages::PropertyVm {
        property,
        similar,
        related_posts,
        insights,
        pick: app.config.image_pick,
    };
    html_response(pages::property_page(&vm))
}

fn locations(app: &App) -> ResultResp {
    let tree = LocationQuery {
        parent_only: true,
        include_children: true,
        ..Default::default()
    };
    let groups = group_locations(or_empty("list_locations", list_locations(&app.db, tree)));
    html_response(pages::locations_page(&groups, app.config.image_pick))
}

fn location_detail(app: &App, slug: &str) -> ResultResp {
    let db = &app.db;
    let Some(location) = or_empty("location_by_slug", location_by_slug(db, slug)) else {
        return html_response_with_status(404, pages::location_coming_soon());
    };

    let children = or_empty("child_locations", child_locations(db, &location.id));
    let properties = or_empty("properties_for_location", properties_for_location(db, &location, 3));
    let about = PostQuery {
        limit: 2,
        location_slug: Some(location.slug.clone()),
        ..Default::default()
    };
    let posts = or_empty("list_posts", list_posts(db, &about));
    let insights = InsightsVm {
        location_name: location.name.clone(),
        location_slug: location.slug.clone(),
        insight: or_empty(
            "insights_for_location",
            insights_for_location(db, Some(&location.id), &location.name),
        ),
    };

    let vm = pages::LocationVm {
        location,
        children,
        properties,
        posts,
        insights,
        pick: app.config.image_pick,
    };
    html_response(pages::location_page(&vm))
}

fn post_filters(params: &QueryParams) -> pages::PostFilters {
    pages::PostFilters {
        category: params.text("category"),
        tag: params.text("tag"),
        location_slug: params.text("locationSlug"),
    }
}

fn blog(app: &App, params: &QueryParams) -> ResultResp {
    let filters = post_filters(params);
    let query = PostQuery {
        limit: PER_PAGE,
        offset: (params.page() - 1).saturating_mul(PER_PAGE),
        category: filters.category.clone(),
        tag: filters.tag.clone(),
        location_slug: filters.location_slug.clone(),
        ..Default::default()
    };
    let posts = or_empty("list_posts", list_posts(&app.db, &query));
    html_response(pages::blog_page(&posts, &filters, &pager(params), app.config.image_pick))
}

fn guides(app: &App, params: &QueryParams) -> ResultResp {
    let filters = post_filters(params);
    let query = PostQuery {
        limit: 100,
        category: filters.category.clone(),
        tag: filters.tag.clone(),
        location_slug: filters.location_slug.clone(),
        guides_only: true,
        ..Default::default()
    };
    let guides = or_empty("list_posts", list_posts(&app.db, &query));
    let categories = or_empty("guide_categories", guide_categories(&app.db));
    html_response(pages::guides_page(&guides, &categories, &filters, app.config.image_pick))
}

/// Articles live under `/blog`, guides under `/guides`. A post requested
/// under the wrong prefix is redirected to its canonical address.
fn post_detail(app: &App, slug: &str, as_guide: bool) -> ResultResp {
    let post = or_empty("post_by_slug", post_by_slug(&app.db, slug))
        .filter(|p| p.published)
        .ok_or(ServerError::NotFound)?;

    if post.is_guide != as_guide {
        return redirect(301, &post.path());
    }

    let related = or_empty("related_posts", related_posts(&app.db, &post, 2));
    let insights = post_insights(app, &post);
    html_response(pages::post_page(&post, &related, insights.as_ref(), app.config.image_pick))
}

/// Market card for the location a post is about, when that location exists.
fn post_insights(app: &App, post: &BlogPost) -> Option<InsightsVm> {
    let slug = post.location_slug.as_deref()?;
    let location = or_empty("location_by_slug", location_by_slug(&app.db, slug))?;
    let insight = or_empty(
        "insights_for_location",
        insights_for_location(&app.db, Some(&location.id), &location.name),
    );
    Some(InsightsVm {
        location_name: location.name,
        location_slug: location.slug,
        insight,
    })
}

fn partners(app: &App) -> ResultResp {
    let all = or_empty("list_partners", list_partners(&app.db, &PartnerQuery::default()));
    html_response(pages::partners_page(&group_by_region(all)))
}

/// Partners are addressed either by id or by the slug of their name.
fn partner_detail(app: &App, key: &str) -> ResultResp {
    let by_id = or_empty("partner_by_id", partner_by_id(&app.db, key));
    let partner = match by_id {
        Some(p) => Some(p),
        None => or_empty("partner_by_slug", partner_by_slug(&app.db, key)),
    }
    .ok_or(ServerError::NotFound)?;

    html_response(pages::partner_page(&partner))
}

fn submit_inquiry(req: &mut Request, app: &App) -> ResultResp {
    let htmx = req.headers().contains_key("HX-Request");

    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    let form = QueryParams::parse(&body);
    let submitted = NewInquiry {
        name: form.text("name").unwrap_or_default(),
        email: form.text("email").unwrap_or_default(),
        message: form.text("message").unwrap_or_default(),
        phone: form.text("phone"),
        property_id: form.text("property_id"),
        property_custom_id: form.text("property_custom_id"),
        source: form.text("source"),
    };

    match create_inquiry(&app.db, submitted.clone()) {
        Ok(saved) => {
            tracing::info!(id = saved.id, source = %saved.source, "inquiry received");
            if htmx {
                html_response(inquiry_success(&saved.name))
            } else {
                html_response(pages::inquiry_result_page(Ok(&saved.name)))
            }
        }
        Err(err) => {
            let message = err.user_message();
            if htmx {
                // htmx only swaps 2xx responses
                html_response(inquiry_form(&submitted, Some(&message)))
            } else {
                let status = match err {
                    InquiryError::Persistence(_) => 500,
                    _ => 400,
                };
                html_response_with_status(
                    status,
                    pages::inquiry_result_page(Err((&submitted, &message))),
                )
            }
        }
    }
}

fn placeholder(params: &QueryParams) -> ResultResp {
    let dimension = |key: &str, default: i64| params.number(key).unwrap_or(default).clamp(1, 4000) as u32;
    let width = dimension("width", 800);
    let height = dimension("height", 600);
    let label = params
        .text("text")
        .unwrap_or_else(|| format!("{width} × {height}"));

    asset_response(placeholder_svg(width, height, &label).into_string(), mime::IMAGE_SVG)
}
