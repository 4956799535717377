//! Local upstream stand-in for HTTP round-trip tests

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;

pub const BOLT_URL: &str = "https://scryfall.com/card/m10/146/lightning-bolt";
pub const BOLT_IMAGE: &str = "https://cards.scryfall.io/large/front/m10/146.jpg";
pub const BOLT_TEXT: &str = "Lightning Bolt {R}\nInstant\nLightning Bolt deals 3 damage to any target.";

/// Serve `router` on an ephemeral localhost port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Fake card database with both endpoints
pub fn upstream() -> Router {
    Router::new()
        .route("/cards/named", get(named))
        .route("/cards/search", get(search))
}

async fn named(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("format").map(String::as_str) != Some("text") {
        return (StatusCode::BAD_REQUEST, r#"{"details":"format must be text"}"#).into_response();
    }

    match params.get("fuzzy").map(String::as_str) {
        Some("bolt") => (
            StatusCode::OK,
            [("x-scryfall-card", BOLT_URL), ("x-scryfall-card-image", BOLT_IMAGE)],
            BOLT_TEXT,
        )
            .into_response(),
        Some("cobra") => (
            StatusCode::OK,
            [("x-scryfall-card", "https://scryfall.com/card/zen/175/lotus-cobra")],
            "Lotus Cobra {1}{G}\nCreature — Snake\nLandfall — Whenever a land you control enters, add one mana of any color. (Once per land.)\n2/1",
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            r#"{"object":"error","code":"not_found","details":"No cards found matching that name"}"#,
        )
            .into_response(),
    }
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("q").map(String::as_str) {
        Some("++elf") => {
            let data: Vec<serde_json::Value> = (0..30)
                .map(|i| {
                    serde_json::json!({
                        "name": format!("Elf {i}"),
                        "set_name": "Lorwyn",
                        "scryfall_uri": format!("https://scryfall.com/card/lrw/{i}")
                    })
                })
                .collect();
            (
                StatusCode::OK,
                serde_json::json!({ "object": "list", "total_cards": 57, "data": data })
                    .to_string(),
            )
                .into_response()
        }
        Some("++nodata") => (StatusCode::OK, r#"{"object":"list","total_cards":0}"#).into_response(),
        Some("++broken") => (StatusCode::OK, "this is not json").into_response(),
        Some("++teapot") => (StatusCode::IM_A_TEAPOT, "<html>teapot</html>").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            r#"{"object":"error","details":"no such card"}"#,
        )
            .into_response(),
    }
}
