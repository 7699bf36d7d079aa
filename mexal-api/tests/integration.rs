//! End-to-end tests against an in-process mock of the Mexal web API.
//!
//! Each test builds an axum router scripted with canned responses, binds
//! it to an ephemeral port, and drives the real client over HTTP. This
//! validates request building (headers, query parameters, year override)
//! and response handling (envelope decoding, pagination, failure policy)
//! against an actual server.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use mexal_api::MexalClient;
use mexal_core::config::ServerConfig;

/// Bind the router to an ephemeral port and serve it in the background.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> MexalClient {
    MexalClient::new(&ServerConfig {
        base_url: base_url.to_string(),
        domain: "demo.passepartout.local".into(),
        username: "user".into(),
        password: "secret".into(),
        company: "PRO".into(),
        company_year: "2025".into(),
        api_timeout_ms: 5_000,
    })
    .unwrap()
}

/// Extract the `Anno` component of the managerial-coordinates header.
fn coordinate_year(headers: &HeaderMap) -> String {
    headers
        .get("Coordinate-Gestionale")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split("Anno=").nth(1))
        .unwrap_or_default()
        .to_string()
}

// -- Movements: scripted pages keyed by (year, cursor) --

type PageKey = (String, String);
type Pages = Arc<HashMap<PageKey, (StatusCode, Value)>>;

async fn movements_handler(
    State(pages): State<Pages>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let year = coordinate_year(&headers);
    let cursor = params.get("next").cloned().unwrap_or_default();
    match pages.get(&(year, cursor)) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        // Years with no scripted pages have no movements.
        None => Json(json!({ "dati": [] })).into_response(),
    }
}

fn movements_app(pages: Vec<((&str, &str), (StatusCode, Value))>) -> Router {
    let pages: HashMap<PageKey, (StatusCode, Value)> = pages
        .into_iter()
        .map(|((year, cursor), response)| ((year.to_string(), cursor.to_string()), response))
        .collect();
    Router::new()
        .route("/documenti/movimenti-magazzino", get(movements_handler))
        .with_state(Arc::new(pages))
}

fn movement(code: &str) -> Value {
    json!({ "cod_conto": code })
}

#[tokio::test]
async fn two_page_year_concatenates_in_page_order() {
    let app = movements_app(vec![
        (
            ("2025", ""),
            (
                StatusCode::OK,
                json!({ "dati": [movement("M1"), movement("M2")], "next": "tok1" }),
            ),
        ),
        (
            ("2025", "tok1"),
            (StatusCode::OK, json!({ "dati": [movement("M3")] })),
        ),
    ]);
    let client = client(&spawn(app).await);

    let movements = client.get_warehouse_movements("2025", &[]).await.unwrap();
    let codes: Vec<&str> = movements.iter().map(|m| m["cod_conto"].as_str()).collect();
    assert_eq!(codes, vec!["M1", "M2", "M3"]);
}

#[tokio::test]
async fn failing_later_page_discards_the_whole_year() {
    let app = movements_app(vec![
        (
            ("2025", ""),
            (
                StatusCode::OK,
                json!({ "dati": [movement("M1")], "next": "tok1" }),
            ),
        ),
        (
            ("2025", "tok1"),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "messaggio": "errore interno" }),
            ),
        ),
    ]);
    let client = client(&spawn(app).await);

    assert!(client.get_warehouse_movements("2025", &[]).await.is_none());
}

#[tokio::test]
async fn failing_year_contributes_nothing_to_the_aggregate() {
    let app = movements_app(vec![
        (
            ("2020", ""),
            (StatusCode::BAD_GATEWAY, json!({ "messaggio": "down" })),
        ),
        (
            ("2021", ""),
            (StatusCode::OK, json!({ "dati": [movement("M-2021")] })),
        ),
    ]);
    let client = client(&spawn(app).await);

    let movements = client
        .get_warehouse_movements_for_years([2020, 2021], &[])
        .await
        .unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0]["cod_conto"], "M-2021");
}

#[tokio::test]
async fn aggregate_of_empty_years_is_absent() {
    let client = client(&spawn(movements_app(vec![])).await);

    assert!(client
        .get_warehouse_movements_for_years([2022, 2023], &[])
        .await
        .is_none());
}

#[tokio::test]
async fn movement_request_carries_year_override_and_fields() {
    async fn strict_handler(
        Query(params): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> Response {
        let coordinates = headers
            .get("Coordinate-Gestionale")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if coordinates != "Azienda=PRO Anno=2019" {
            return (StatusCode::BAD_REQUEST, Json(json!({ "dati": [] }))).into_response();
        }
        if params.get("fields").map(String::as_str) != Some("sigla,cod_conto") {
            return (StatusCode::BAD_REQUEST, Json(json!({ "dati": [] }))).into_response();
        }
        Json(json!({ "dati": [movement("OK")] })).into_response()
    }

    let app = Router::new().route("/documenti/movimenti-magazzino", get(strict_handler));
    let client = client(&spawn(app).await);

    let properties = vec!["sigla".to_string(), "cod_conto".to_string()];
    let movements = client
        .get_warehouse_movements("2019", &properties)
        .await
        .expect("year override or fields parameter was not sent as expected");
    assert_eq!(movements[0]["cod_conto"], "OK");
}

// -- Customers --

/// Serves two customers (one active, one pre-deleted), narrowing each row
/// to the requested field list the way the real server does.
async fn customers_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let all = [
        json!({ "cod_conto": "C1", "descrizione": "Alpha", "conto_precanc": "N" }),
        json!({ "cod_conto": "C2", "descrizione": "Beta", "conto_precanc": "S" }),
    ];

    let rows: Vec<Value> = match params.get("fields") {
        Some(fields) => {
            let wanted: Vec<&str> = fields.split(',').collect();
            all.iter()
                .map(|row| {
                    let narrowed: serde_json::Map<String, Value> = row
                        .as_object()
                        .unwrap()
                        .iter()
                        .filter(|(k, _)| wanted.contains(&k.as_str()))
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                    Value::Object(narrowed)
                })
                .collect()
        }
        None => all.to_vec(),
    };
    Json(json!({ "dati": rows }))
}

fn customers_app() -> Router {
    Router::new().route("/clienti", get(customers_handler))
}

#[tokio::test]
async fn predeleted_rows_are_filtered_and_flag_never_leaks() {
    let client = client(&spawn(customers_app()).await);

    let properties = vec!["cod_conto".to_string(), "descrizione".to_string()];
    let customers = client.get_all_customers(&properties, false).await.unwrap();

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["cod_conto"], "C1");
    assert_eq!(customers[0]["descrizione"], "Alpha");
    assert!(!customers[0].contains_key("conto_precanc"));
}

#[tokio::test]
async fn explicitly_requested_predeleted_flag_is_kept() {
    let client = client(&spawn(customers_app()).await);

    let properties = vec!["cod_conto".to_string(), "conto_precanc".to_string()];
    let customers = client.get_all_customers(&properties, false).await.unwrap();

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["conto_precanc"], "N");
}

#[tokio::test]
async fn include_predeleted_returns_every_row() {
    let client = client(&spawn(customers_app()).await);

    let properties = vec!["cod_conto".to_string()];
    let customers = client.get_all_customers(&properties, true).await.unwrap();

    assert_eq!(customers.len(), 2);
    assert!(customers.iter().all(|c| !c.contains_key("conto_precanc")));
}

#[tokio::test]
async fn customer_fields_listing_decodes() {
    let client = client(&spawn(customers_app()).await);

    let fields = client.get_all_customer_fields().await.unwrap();
    assert_eq!(fields.len(), 2);
}

#[tokio::test]
async fn single_customer_is_a_bare_object() {
    async fn handler(Path(code): Path<String>) -> Response {
        if code == "C1" {
            Json(json!({ "cod_conto": "C1", "descrizione": "Alpha", "fido": 2500 }))
                .into_response()
        } else {
            (StatusCode::NOT_FOUND, Json(json!({ "messaggio": "non trovato" }))).into_response()
        }
    }

    let app = Router::new().route("/clienti/{code}", get(handler));
    let client = client(&spawn(app).await);

    let customer = client.get_customer_by_code("C1", &[]).await.unwrap();
    assert_eq!(customer["cod_conto"], "C1");
    // Values are coerced to strings.
    assert_eq!(customer["fido"], "2500");

    assert!(client.get_customer_by_code("MISSING", &[]).await.is_none());
}

// -- Categories and referees --

#[tokio::test]
async fn categories_reduce_to_id_description_map() {
    async fn handler() -> Json<Value> {
        Json(json!({ "dati": [
            { "id": 1, "descrizione": "Ingrosso" },
            { "id": 2, "descrizione": "Dettaglio" },
        ]}))
    }

    let app = Router::new().route("/dati-generali/categorie-statistiche-cli-for", get(handler));
    let client = client(&spawn(app).await);

    let categories = client.get_all_categories().await.unwrap();
    assert_eq!(categories.get("1").map(String::as_str), Some("Ingrosso"));
    assert_eq!(categories.get("2").map(String::as_str), Some("Dettaglio"));
}

#[tokio::test]
async fn non_200_yields_absence() {
    async fn handler() -> Response {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "messaggio": "manutenzione" })),
        )
            .into_response()
    }

    let app = Router::new().route("/dati-generali/categorie-statistiche-cli-for", get(handler));
    let client = client(&spawn(app).await);

    assert!(client.get_all_categories().await.is_none());
}

#[tokio::test]
async fn referees_listing_decodes() {
    async fn handler() -> Json<Value> {
        Json(json!({ "dati": [
            { "cod_conto": "C1", "nome": "Mario", "telefono": 333123 },
        ]}))
    }

    let app = Router::new().route("/referenti/clienti/", get(handler));
    let client = client(&spawn(app).await);

    let referees = client.get_all_referees(&[]).await.unwrap();
    assert_eq!(referees[0]["nome"], "Mario");
    assert_eq!(referees[0]["telefono"], "333123");
}

// -- Request headers --

#[tokio::test]
async fn requests_carry_passepartout_credentials() {
    async fn handler(headers: HeaderMap) -> Response {
        let authorization = headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        // base64("user:secret")
        if authorization != "Passepartout dXNlcjpzZWNyZXQ= Dominio=demo.passepartout.local" {
            return (StatusCode::UNAUTHORIZED, Json(json!({}))).into_response();
        }
        Json(json!({ "dati": [] })).into_response()
    }

    let app = Router::new().route("/dati-generali/categorie-statistiche-cli-for", get(handler));
    let client = client(&spawn(app).await);

    assert!(client.get_all_categories().await.is_some());
}

// -- Last delivery dates --

#[tokio::test]
async fn last_delivery_dates_reduce_the_full_history() {
    let app = movements_app(vec![(
        ("2023", ""),
        (
            StatusCode::OK,
            json!({ "dati": [
                {
                    "sigla": "FT",
                    "sigla_doc_orig": "BC",
                    "data_doc_orig": "2023-01-05",
                    "data_documento": "2023-01-10",
                    "cod_conto": "C1",
                },
                {
                    "sigla": "BC",
                    "sigla_doc_orig": "",
                    "data_doc_orig": "",
                    "data_documento": "2023-02-01",
                    "cod_conto": "C1",
                },
            ]}),
        ),
    )]);
    let client = client(&spawn(app).await);

    let dates = client.get_last_delivery_dates().await.unwrap();
    assert_eq!(dates.get("C1").map(String::as_str), Some("2023-02-01"));
}

#[tokio::test]
async fn last_delivery_dates_absent_when_history_is_absent() {
    // Every year fails, so the movement fetch yields nothing.
    async fn handler() -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response()
    }

    let app = Router::new().route("/documenti/movimenti-magazzino", get(handler));
    let client = client(&spawn(app).await);

    assert!(client.get_last_delivery_dates().await.is_none());
}
