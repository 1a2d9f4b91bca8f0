//! HTTP tests driving the full router over an in-memory SQLite database.

mod support;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use sales_service_lib::build_app;
use sales_service_lib::config::SalesServiceConfig;

async fn app() -> Router {
    let db = support::setup_seeded().await;
    build_app(db, SalesServiceConfig::with_database_url(support::SQLITE_MEMORY_URL))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .expect("array body")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

// =============================================================================
// Service endpoints
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let app = app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Welcome to the sales service");
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/commande/Tri/{top}"].is_object());
}

// =============================================================================
// Client queries
// =============================================================================

#[tokio::test]
async fn test_client_json_shape() {
    let app = app().await;

    let (status, body) = get(&app, "/client/nom/Dupont").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);

    let first = &body[0];
    assert_eq!(first["nom"], "Dupont");
    assert_eq!(first["prenom"], "Marie");
    assert_eq!(first["adresse"], "12 rue de la Paix, Paris");

    let order = &first["commandes"][0];
    assert_eq!(order["produitNom"], "Stylo");
    assert_eq!(order["quantite"], 2);
    assert_eq!(order["totalTtc"], 3.6);
    assert!(order.get("clientId").is_none());
    assert!(order.get("client_id").is_none());
}

#[tokio::test]
async fn test_client_name_lookups() {
    let app = app().await;

    let (_, sorted) = get(&app, "/client/nomTri/Dupont").await;
    assert_eq!(sorted[0]["prenom"], "Alain");
    assert_eq!(sorted[1]["prenom"], "Marie");

    let (_, both) = get(&app, "/client/nomPrenom?nom=Dupont&prenom=Marie").await;
    assert_eq!(ids(&both), vec![1]);

    let (_, either) = get(&app, "/client/nomOrPrenom?nom=Martin&prenom=Marie").await;
    assert_eq!(ids(&either), vec![1, 3]);

    let (_, prefix) = get(&app, "/client/nomStart/Du").await;
    assert_eq!(ids(&prefix), vec![1, 2, 5]);

    let (_, suffix) = get(&app, "/client/nomEnd/ont").await;
    assert_eq!(ids(&suffix), vec![1, 2]);

    let (status, none) = get(&app, "/client/nom/Inconnu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_name_and_surname_requires_both_params() {
    let app = app().await;

    let (status, _) = get(&app, "/client/nomPrenom?nom=Dupont").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_client_address_lookups() {
    let app = app().await;

    let (_, like) = get(&app, "/client/adresse/%25Lyon").await;
    assert_eq!(ids(&like), vec![2, 3]);

    let (_, exact) = get(&app, "/client/adresse/Lyon").await;
    assert_eq!(exact, json!([]));

    let (_, containing) = get(&app, "/client/adresseCase/Paris").await;
    assert_eq!(ids(&containing), vec![1]);
}

#[tokio::test]
async fn test_count_and_exists() {
    let app = app().await;

    let (status, count) = get(&app, "/client/countNom?nom=Lyon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count, json!(2));

    let (_, exists) = get(&app, "/client/existByNom?nom=Nom1").await;
    assert_eq!(exists, json!(true));

    let (_, exists) = get(&app, "/client/existByNom?nom=Nom1&prenom=Jean").await;
    assert_eq!(exists, json!(false));
}

// =============================================================================
// Order queries
// =============================================================================

#[tokio::test]
async fn test_order_comparisons() {
    let app = app().await;

    let (_, body) = get(&app, "/commande/quantite/3").await;
    assert_eq!(ids(&body), vec![4, 5, 6]);

    let (_, body) = get(&app, "/commande/quantiteEq/3").await;
    assert_eq!(ids(&body), vec![2, 4, 5, 6]);

    let (_, body) = get(&app, "/commande/prix/10").await;
    assert_eq!(ids(&body), vec![1, 5]);

    let (_, body) = get(&app, "/commande/prixEq/10").await;
    assert_eq!(ids(&body), vec![1, 4, 5]);

    let (_, body) = get(&app, "/commande/total?first=60&second=90").await;
    assert_eq!(ids(&body), vec![2, 4, 6]);

    let (_, body) = get(&app, "/commande/quantPrix?quantite=2&prix=20").await;
    assert_eq!(ids(&body), vec![4, 5]);
}

#[tokio::test]
async fn test_malformed_number_is_rejected() {
    let app = app().await;

    let (status, _) = get(&app, "/commande/quantite/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_top_orders() {
    let app = app().await;

    let (_, body) = get(&app, "/commande/Tri").await;
    assert_eq!(ids(&body), vec![3, 2, 6, 4]);

    let (_, body) = get(&app, "/commande/Tri/2").await;
    assert_eq!(ids(&body), vec![3, 2]);

    let (status, body) = get(&app, "/commande/Tri/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_client_lifecycle() {
    let app = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/client",
        Some(json!({"nom": "Petit", "prenom": "Luc", "adresse": "3 rue Haute, Nice"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 6);
    assert_eq!(created["commandes"], json!([]));

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/client/6",
        Some(json!({"nom": "Petit", "prenom": "Lucas"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["prenom"], "Lucas");
    assert_eq!(updated["adresse"], Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/client/6", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, "/client/6").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_deleting_client_keeps_its_orders() {
    let app = app().await;

    let (status, _) = send(&app, Method::DELETE, "/client/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, order) = get(&app, "/commande/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["produitNom"], "Stylo");
}

#[tokio::test]
async fn test_client_validation() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/client",
        Some(json!({"nom": "x".repeat(256)})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_order_lifecycle() {
    let app = app().await;

    let payload = json!({
        "produitNom": "Lampe",
        "quantite": 1,
        "prix": 30.0,
        "totalHt": 30.0,
        "tva": 20,
        "totalTtc": 36.0,
        "clientId": 2
    });
    let (status, created) = send(&app, Method::POST, "/commande", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 7);

    let (_, client) = get(&app, "/client/2").await;
    assert_eq!(ids(&client["commandes"]), vec![3, 7]);

    let (status, _) = send(&app, Method::DELETE, "/commande/7", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, "/commande/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_rejects_unknown_client_and_negative_values() {
    let app = app().await;

    let unknown_client = json!({
        "produitNom": "Lampe", "quantite": 1, "prix": 30.0,
        "totalHt": 30.0, "tva": 20, "totalTtc": 36.0, "clientId": 999
    });
    let (status, _) = send(&app, Method::POST, "/commande", Some(unknown_client)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let negative = json!({
        "produitNom": "Lampe", "quantite": -1, "prix": 30.0,
        "totalHt": 30.0, "tva": 20, "totalTtc": 36.0
    });
    let (status, body) = send(&app, Method::PUT, "/commande/1", Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "quantite cannot be negative");

    let (status, _) = get(&app, "/commande/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_order_is_not_found_even_with_unknown_client() {
    let app = app().await;

    let payload = json!({
        "produitNom": "Lampe", "quantite": 1, "prix": 30.0,
        "totalHt": 30.0, "tva": 20, "totalTtc": 36.0, "clientId": 999
    });
    let (status, body) = send(&app, Method::PUT, "/commande/4242", Some(payload)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
