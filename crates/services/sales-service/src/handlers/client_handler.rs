//! Client handlers.

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
use domain::{Client, ClientData};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Client create / replace request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClientRequest {
    /// Family name
    #[serde(rename = "nom")]
    #[validate(length(max = 255, message = "nom must be at most 255 characters"))]
    #[schema(example = "Dupont")]
    pub name: Option<String>,
    /// Given name
    #[serde(rename = "prenom")]
    #[validate(length(max = 255, message = "prenom must be at most 255 characters"))]
    #[schema(example = "Marie")]
    pub surname: Option<String>,
    /// Postal address
    #[serde(rename = "adresse")]
    #[validate(length(max = 255, message = "adresse must be at most 255 characters"))]
    #[schema(example = "12 rue de la Paix, Paris")]
    pub address: Option<String>,
}

impl From<ClientRequest> for ClientData {
    fn from(request: ClientRequest) -> Self {
        Self {
            name: request.name,
            surname: request.surname,
            address: request.address,
        }
    }
}

/// Name and surname, both required
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameSurnameQuery {
    /// Family name
    pub nom: String,
    /// Given name
    pub prenom: String,
}

/// Name and surname, either may be left out
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionalNameSurnameQuery {
    /// Family name; when absent, matches clients without one
    pub nom: Option<String>,
    /// Given name; when absent, matches clients without one
    pub prenom: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NomQuery {
    /// Text searched for in client addresses
    pub nom: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExistsQuery {
    /// Family name
    pub nom: String,
    /// Given name, `Prenom1` when absent
    pub prenom: Option<String>,
}

/// Create client routes
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route(
            "/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/nom/:nom", get(by_name))
        .route("/nomTri/:nom", get(by_name_sorted))
        .route("/nomPrenom", get(by_name_and_surname))
        .route("/nomOrPrenom", get(by_name_or_surname))
        .route("/adresse/:adresse", get(by_address_like))
        .route("/adresseCase/:adresse", get(by_address_containing))
        .route("/nomEnd/:nom", get(by_name_suffix))
        .route("/nomStart/:nom", get(by_name_prefix))
        .route("/countNom", get(count_by_address))
        .route("/existByNom", get(exists))
}

/// List all clients
#[utoipa::path(
    get,
    path = "/client",
    tag = "Clients",
    responses(
        (status = 200, description = "All clients with their orders", body = Vec<Client>)
    )
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(state.client_service.list_clients().await?))
}

/// Get client by ID
#[utoipa::path(
    get,
    path = "/client/{id}",
    tag = "Clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client with its orders", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Client>> {
    Ok(Json(state.client_service.get_client(id).await?))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/client",
    tag = "Clients",
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ClientRequest>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = state.client_service.create_client(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Replace a client's fields
#[utoipa::path(
    put,
    path = "/client/{id}",
    tag = "Clients",
    params(("id" = i64, Path, description = "Client ID")),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ClientRequest>,
) -> AppResult<Json<Client>> {
    Ok(Json(
        state.client_service.update_client(id, payload.into()).await?,
    ))
}

/// Delete a client, keeping its orders
#[utoipa::path(
    delete,
    path = "/client/{id}",
    tag = "Clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.client_service.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Clients with exactly this name
#[utoipa::path(
    get,
    path = "/client/nom/{nom}",
    tag = "Clients",
    params(("nom" = String, Path, description = "Family name")),
    responses((status = 200, description = "Matching clients", body = Vec<Client>))
)]
pub async fn by_name(
    State(state): State<AppState>,
    Path(nom): Path<String>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(state.client_service.get_clients_by_name(&nom).await?))
}

/// Clients with exactly this name, sorted by surname
#[utoipa::path(
    get,
    path = "/client/nomTri/{nom}",
    tag = "Clients",
    params(("nom" = String, Path, description = "Family name")),
    responses((status = 200, description = "Matching clients by surname", body = Vec<Client>))
)]
pub async fn by_name_sorted(
    State(state): State<AppState>,
    Path(nom): Path<String>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(
        state.client_service.get_clients_by_name_sorted(&nom).await?,
    ))
}

/// Clients matching both name and surname
#[utoipa::path(
    get,
    path = "/client/nomPrenom",
    tag = "Clients",
    params(NameSurnameQuery),
    responses((status = 200, description = "Matching clients", body = Vec<Client>))
)]
pub async fn by_name_and_surname(
    State(state): State<AppState>,
    Query(query): Query<NameSurnameQuery>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(
        state
            .client_service
            .get_clients_by_name_and_surname(&query.nom, &query.prenom)
            .await?,
    ))
}

/// Clients matching name or surname
#[utoipa::path(
    get,
    path = "/client/nomOrPrenom",
    tag = "Clients",
    params(OptionalNameSurnameQuery),
    responses((status = 200, description = "Matching clients", body = Vec<Client>))
)]
pub async fn by_name_or_surname(
    State(state): State<AppState>,
    Query(query): Query<OptionalNameSurnameQuery>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(
        state
            .client_service
            .get_clients_by_name_or_surname(query.nom, query.prenom)
            .await?,
    ))
}

/// Clients whose address matches a LIKE pattern (`%` and `_` are wildcards)
#[utoipa::path(
    get,
    path = "/client/adresse/{adresse}",
    tag = "Clients",
    params(("adresse" = String, Path, description = "LIKE pattern")),
    responses((status = 200, description = "Matching clients", body = Vec<Client>))
)]
pub async fn by_address_like(
    State(state): State<AppState>,
    Path(adresse): Path<String>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(
        state.client_service.get_clients_by_address_like(&adresse).await?,
    ))
}

/// Clients whose address contains the text, case-sensitively
#[utoipa::path(
    get,
    path = "/client/adresseCase/{adresse}",
    tag = "Clients",
    params(("adresse" = String, Path, description = "Address fragment")),
    responses((status = 200, description = "Matching clients", body = Vec<Client>))
)]
pub async fn by_address_containing(
    State(state): State<AppState>,
    Path(adresse): Path<String>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(
        state
            .client_service
            .get_clients_by_address_containing(&adresse)
            .await?,
    ))
}

/// Clients whose name ends with the text
#[utoipa::path(
    get,
    path = "/client/nomEnd/{nom}",
    tag = "Clients",
    params(("nom" = String, Path, description = "Name suffix")),
    responses((status = 200, description = "Matching clients", body = Vec<Client>))
)]
pub async fn by_name_suffix(
    State(state): State<AppState>,
    Path(nom): Path<String>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(
        state.client_service.get_clients_by_name_ending_with(&nom).await?,
    ))
}

/// Clients whose name starts with the text
#[utoipa::path(
    get,
    path = "/client/nomStart/{nom}",
    tag = "Clients",
    params(("nom" = String, Path, description = "Name prefix")),
    responses((status = 200, description = "Matching clients", body = Vec<Client>))
)]
pub async fn by_name_prefix(
    State(state): State<AppState>,
    Path(nom): Path<String>,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(
        state
            .client_service
            .get_clients_by_name_starting_with(&nom)
            .await?,
    ))
}

/// Count clients whose address mentions the given text
#[utoipa::path(
    get,
    path = "/client/countNom",
    tag = "Clients",
    params(NomQuery),
    responses((status = 200, description = "Number of matching clients", body = u64))
)]
pub async fn count_by_address(
    State(state): State<AppState>,
    Query(query): Query<NomQuery>,
) -> AppResult<Json<u64>> {
    Ok(Json(
        state
            .client_service
            .count_clients_by_address_mention(&query.nom)
            .await?,
    ))
}

/// Whether a client with this name and surname exists
#[utoipa::path(
    get,
    path = "/client/existByNom",
    tag = "Clients",
    params(ExistsQuery),
    responses((status = 200, description = "Whether a match exists", body = bool))
)]
pub async fn exists(
    State(state): State<AppState>,
    Query(query): Query<ExistsQuery>,
) -> AppResult<Json<bool>> {
    Ok(Json(
        state
            .client_service
            .client_exists(&query.nom, query.prenom)
            .await?,
    ))
}
