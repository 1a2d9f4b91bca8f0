//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::client_handler::{self, ClientRequest};
use crate::handlers::order_handler::{self, OrderRequest};
use domain::{Client, Order};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales Service",
        version = "0.1.0",
        description = "Clients and their orders (commandes)",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        client_handler::list_clients,
        client_handler::get_client,
        client_handler::create_client,
        client_handler::update_client,
        client_handler::delete_client,
        client_handler::by_name,
        client_handler::by_name_sorted,
        client_handler::by_name_and_surname,
        client_handler::by_name_or_surname,
        client_handler::by_address_like,
        client_handler::by_address_containing,
        client_handler::by_name_suffix,
        client_handler::by_name_prefix,
        client_handler::count_by_address,
        client_handler::exists,
        order_handler::list_orders,
        order_handler::get_order,
        order_handler::create_order,
        order_handler::update_order,
        order_handler::delete_order,
        order_handler::quantity_above,
        order_handler::quantity_at_least,
        order_handler::price_below,
        order_handler::price_at_most,
        order_handler::total_between,
        order_handler::quantity_and_price,
        order_handler::top_default,
        order_handler::top_n,
    ),
    components(schemas(Client, Order, ClientRequest, OrderRequest)),
    tags(
        (name = "Clients", description = "Client lookups and lifecycle"),
        (name = "Orders", description = "Order lookups, rankings and lifecycle")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/client",
            "/client/{id}",
            "/client/nomOrPrenom",
            "/client/existByNom",
            "/commande/total",
            "/commande/Tri/{top}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
