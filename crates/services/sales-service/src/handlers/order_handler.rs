//! Order (commande) handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{Order, OrderData, TopLimit};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Order create / replace request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OrderRequest {
    /// Ordered product
    #[serde(rename = "produitNom")]
    #[validate(length(max = 255, message = "produitNom must be at most 255 characters"))]
    #[schema(example = "Clavier")]
    pub product_name: Option<String>,
    /// Number of units
    #[serde(rename = "quantite")]
    #[validate(range(min = 0, message = "quantite cannot be negative"))]
    #[schema(example = 3)]
    pub quantity: i32,
    /// Unit price
    #[serde(rename = "prix")]
    #[validate(range(min = 0.0, message = "prix cannot be negative"))]
    #[schema(example = 25.0)]
    pub unit_price: f64,
    /// Pre-tax total
    #[serde(rename = "totalHt")]
    #[validate(range(min = 0.0, message = "totalHt cannot be negative"))]
    #[schema(example = 75.0)]
    pub total_ht: f64,
    /// Tax rate, in percent
    #[validate(range(min = 0, message = "tva cannot be negative"))]
    #[schema(example = 20)]
    pub tva: i32,
    /// Tax-inclusive total
    #[serde(rename = "totalTtc")]
    #[validate(range(min = 0.0, message = "totalTtc cannot be negative"))]
    #[schema(example = 90.0)]
    pub total_ttc: f64,
    /// Owning client, if any
    #[serde(rename = "clientId")]
    #[schema(example = 1)]
    pub client_id: Option<i64>,
}

impl From<OrderRequest> for OrderData {
    fn from(request: OrderRequest) -> Self {
        Self {
            product_name: request.product_name,
            quantity: request.quantity,
            unit_price: request.unit_price,
            total_ht: request.total_ht,
            tva: request.tva,
            total_ttc: request.total_ttc,
            client_id: request.client_id,
        }
    }
}

/// Inclusive bounds on the tax-inclusive total
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TotalRangeQuery {
    /// Lower bound
    pub first: f64,
    /// Upper bound
    pub second: f64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuantityPriceQuery {
    /// Quantity to exceed
    pub quantite: i32,
    /// Price to stay under
    pub prix: f64,
}

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/quantite/:quantite", get(quantity_above))
        .route("/quantiteEq/:quantite", get(quantity_at_least))
        .route("/prix/:prix", get(price_below))
        .route("/prixEq/:prix", get(price_at_most))
        .route("/total", get(total_between))
        .route("/quantPrix", get(quantity_and_price))
        .route("/Tri", get(top_default))
        .route("/Tri/:top", get(top_n))
}

/// List all orders
#[utoipa::path(
    get,
    path = "/commande",
    tag = "Orders",
    responses((status = 200, description = "All orders", body = Vec<Order>))
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.order_service.list_orders().await?))
}

/// Get order by ID
#[utoipa::path(
    get,
    path = "/commande/{id}",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.order_service.get_order(id).await?))
}

/// Create an order
#[utoipa::path(
    post,
    path = "/commande",
    tag = "Orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Validation error or unknown client")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.order_service.create_order(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Replace an order's fields
#[utoipa::path(
    put,
    path = "/commande/{id}",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, description = "Validation error or unknown client"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(
        state.order_service.update_order(id, payload.into()).await?,
    ))
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/commande/{id}",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.order_service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Orders with a quantity strictly above the given one
#[utoipa::path(
    get,
    path = "/commande/quantite/{quantite}",
    tag = "Orders",
    params(("quantite" = i32, Path, description = "Exclusive lower bound")),
    responses((status = 200, description = "Matching orders", body = Vec<Order>))
)]
pub async fn quantity_above(
    State(state): State<AppState>,
    Path(quantite): Path<i32>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(
        state
            .order_service
            .get_orders_with_quantity_above(quantite)
            .await?,
    ))
}

/// Orders with a quantity of at least the given one
#[utoipa::path(
    get,
    path = "/commande/quantiteEq/{quantite}",
    tag = "Orders",
    params(("quantite" = i32, Path, description = "Inclusive lower bound")),
    responses((status = 200, description = "Matching orders", body = Vec<Order>))
)]
pub async fn quantity_at_least(
    State(state): State<AppState>,
    Path(quantite): Path<i32>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(
        state
            .order_service
            .get_orders_with_quantity_at_least(quantite)
            .await?,
    ))
}

/// Orders priced strictly below the given price
#[utoipa::path(
    get,
    path = "/commande/prix/{prix}",
    tag = "Orders",
    params(("prix" = f64, Path, description = "Exclusive upper bound")),
    responses((status = 200, description = "Matching orders", body = Vec<Order>))
)]
pub async fn price_below(
    State(state): State<AppState>,
    Path(prix): Path<f64>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(
        state.order_service.get_orders_with_price_below(prix).await?,
    ))
}

/// Orders priced at most the given price
#[utoipa::path(
    get,
    path = "/commande/prixEq/{prix}",
    tag = "Orders",
    params(("prix" = f64, Path, description = "Inclusive upper bound")),
    responses((status = 200, description = "Matching orders", body = Vec<Order>))
)]
pub async fn price_at_most(
    State(state): State<AppState>,
    Path(prix): Path<f64>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(
        state.order_service.get_orders_with_price_at_most(prix).await?,
    ))
}

/// Orders whose tax-inclusive total lies between both bounds
#[utoipa::path(
    get,
    path = "/commande/total",
    tag = "Orders",
    params(TotalRangeQuery),
    responses((status = 200, description = "Matching orders", body = Vec<Order>))
)]
pub async fn total_between(
    State(state): State<AppState>,
    Query(query): Query<TotalRangeQuery>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(
        state
            .order_service
            .get_orders_with_total_between(query.first, query.second)
            .await?,
    ))
}

/// Orders above a quantity and below a price
#[utoipa::path(
    get,
    path = "/commande/quantPrix",
    tag = "Orders",
    params(QuantityPriceQuery),
    responses((status = 200, description = "Matching orders", body = Vec<Order>))
)]
pub async fn quantity_and_price(
    State(state): State<AppState>,
    Query(query): Query<QuantityPriceQuery>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(
        state
            .order_service
            .get_orders_with_quantity_above_and_price_below(query.quantite, query.prix)
            .await?,
    ))
}

/// Orders with the highest tax-inclusive totals, default ranking size
#[utoipa::path(
    get,
    path = "/commande/Tri",
    tag = "Orders",
    responses((status = 200, description = "Top orders", body = Vec<Order>))
)]
pub async fn top_default(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let limit = state.config.default_top_orders;
    Ok(Json(state.order_service.top_orders(limit).await?))
}

/// Orders with the highest tax-inclusive totals, at most `top`
#[utoipa::path(
    get,
    path = "/commande/Tri/{top}",
    tag = "Orders",
    params(("top" = i64, Path, description = "Ranking size, at least 1")),
    responses(
        (status = 200, description = "Top orders", body = Vec<Order>),
        (status = 400, description = "Ranking size below 1")
    )
)]
pub async fn top_n(
    State(state): State<AppState>,
    Path(top): Path<i64>,
) -> AppResult<Json<Vec<Order>>> {
    let limit = TopLimit::new(top)?;
    Ok(Json(state.order_service.top_orders(limit).await?))
}
