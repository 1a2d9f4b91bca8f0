//! Client repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{SimpleExpr, Value};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, Set, TransactionTrait,
};

use super::entities::client::{self, ActiveModel, Entity as ClientEntity};
use super::entities::commande::{self, Entity as CommandeEntity};
use super::filters;
use common::{AppError, AppResult};
use domain::{Client, ClientData, Order};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Client repository trait for dependency injection.
///
/// Every client returned carries its orders. Unless a query names a sort,
/// results come back by ascending id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find client by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>>;

    /// List all clients
    async fn list(&self) -> AppResult<Vec<Client>>;

    /// Clients whose name equals `name`
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Client>>;

    /// Clients whose name equals `name`, by ascending surname
    async fn find_by_name_order_by_surname(&self, name: &str) -> AppResult<Vec<Client>>;

    /// Clients matching both name and surname
    async fn find_by_name_and_surname(&self, name: &str, surname: &str) -> AppResult<Vec<Client>>;

    /// Clients matching name or surname; a `None` side matches NULL columns
    async fn find_by_name_or_surname(
        &self,
        name: Option<String>,
        surname: Option<String>,
    ) -> AppResult<Vec<Client>>;

    /// Clients whose address matches a raw LIKE pattern
    async fn find_by_address_like(&self, pattern: &str) -> AppResult<Vec<Client>>;

    /// Clients whose address matches a raw LIKE pattern, ignoring case
    async fn find_by_address_like_ignore_case(&self, pattern: &str) -> AppResult<Vec<Client>>;

    /// Clients whose address contains `fragment` (case-sensitive)
    async fn find_by_address_containing(&self, fragment: &str) -> AppResult<Vec<Client>>;

    /// Clients whose name starts with `prefix`
    async fn find_by_name_starting_with(&self, prefix: &str) -> AppResult<Vec<Client>>;

    /// Clients whose name ends with `suffix`
    async fn find_by_name_ending_with(&self, suffix: &str) -> AppResult<Vec<Client>>;

    /// Count clients whose name equals `name`
    async fn count_by_name(&self, name: &str) -> AppResult<u64>;

    /// Count clients whose name equals `name`, ignoring case
    async fn count_by_name_ignore_case(&self, name: &str) -> AppResult<u64>;

    /// Count clients whose address contains `fragment`, ignoring case
    async fn count_by_address_containing_ignore_case(&self, fragment: &str) -> AppResult<u64>;

    /// Count clients whose address matches a raw LIKE pattern
    async fn count_by_address_like(&self, pattern: &str) -> AppResult<u64>;

    /// Whether any client has this name
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    /// Whether any client has this name and surname
    async fn exists_by_name_and_surname(&self, name: &str, surname: &str) -> AppResult<bool>;

    /// Create a new client
    async fn create(&self, data: ClientData) -> AppResult<Client>;

    /// Replace the stored fields of a client
    async fn update(&self, id: i64, data: ClientData) -> AppResult<Client>;

    /// Delete a client, detaching its orders first
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ClientRepository
pub struct ClientStore {
    db: DatabaseConnection,
}

impl ClientStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run a client query in id order and attach each client's orders.
    async fn fetch(&self, select: Select<ClientEntity>) -> AppResult<Vec<Client>> {
        self.fetch_ordered(select.order_by_asc(client::Column::Id))
            .await
    }

    /// Run a client query keeping its ordering and attach each client's orders.
    async fn fetch_ordered(&self, select: Select<ClientEntity>) -> AppResult<Vec<Client>> {
        let models = select.all(&self.db).await?;
        let orders = models
            .load_many(
                CommandeEntity::find().order_by_asc(commande::Column::Id),
                &self.db,
            )
            .await?;

        Ok(models
            .into_iter()
            .zip(orders)
            .map(|(model, orders)| {
                Client::from(model).with_orders(orders.into_iter().map(Order::from).collect())
            })
            .collect())
    }

    async fn count(&self, select: Select<ClientEntity>) -> AppResult<u64> {
        Ok(select.count(&self.db).await?)
    }

    async fn exists(&self, select: Select<ClientEntity>) -> AppResult<bool> {
        Ok(select.one(&self.db).await?.is_some())
    }
}

/// `col = value`, or `col IS NULL` when no value is given
fn eq_or_null(col: client::Column, value: Option<String>) -> SimpleExpr {
    match value {
        Some(value) => col.eq(value),
        None => col.is_null(),
    }
}

#[async_trait]
impl ClientRepository for ClientStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>> {
        let clients = self.fetch(ClientEntity::find_by_id(id)).await?;
        Ok(clients.into_iter().next())
    }

    async fn list(&self) -> AppResult<Vec<Client>> {
        self.fetch(ClientEntity::find()).await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Client>> {
        self.fetch(ClientEntity::find().filter(client::Column::Nom.eq(name)))
            .await
    }

    async fn find_by_name_order_by_surname(&self, name: &str) -> AppResult<Vec<Client>> {
        self.fetch_ordered(
            ClientEntity::find()
                .filter(client::Column::Nom.eq(name))
                .order_by_asc(client::Column::Prenom)
                .order_by_asc(client::Column::Id),
        )
        .await
    }

    async fn find_by_name_and_surname(&self, name: &str, surname: &str) -> AppResult<Vec<Client>> {
        self.fetch(
            ClientEntity::find()
                .filter(client::Column::Nom.eq(name))
                .filter(client::Column::Prenom.eq(surname)),
        )
        .await
    }

    async fn find_by_name_or_surname(
        &self,
        name: Option<String>,
        surname: Option<String>,
    ) -> AppResult<Vec<Client>> {
        let condition = Condition::any()
            .add(eq_or_null(client::Column::Nom, name))
            .add(eq_or_null(client::Column::Prenom, surname));

        self.fetch(ClientEntity::find().filter(condition)).await
    }

    async fn find_by_address_like(&self, pattern: &str) -> AppResult<Vec<Client>> {
        self.fetch(ClientEntity::find().filter(filters::like(client::Column::Adresse, pattern)))
            .await
    }

    async fn find_by_address_like_ignore_case(&self, pattern: &str) -> AppResult<Vec<Client>> {
        self.fetch(
            ClientEntity::find()
                .filter(filters::like_ignore_case(client::Column::Adresse, pattern)),
        )
        .await
    }

    async fn find_by_address_containing(&self, fragment: &str) -> AppResult<Vec<Client>> {
        self.fetch(
            ClientEntity::find().filter(filters::contains(client::Column::Adresse, fragment)),
        )
        .await
    }

    async fn find_by_name_starting_with(&self, prefix: &str) -> AppResult<Vec<Client>> {
        self.fetch(ClientEntity::find().filter(filters::starts_with(client::Column::Nom, prefix)))
            .await
    }

    async fn find_by_name_ending_with(&self, suffix: &str) -> AppResult<Vec<Client>> {
        self.fetch(ClientEntity::find().filter(filters::ends_with(client::Column::Nom, suffix)))
            .await
    }

    async fn count_by_name(&self, name: &str) -> AppResult<u64> {
        self.count(ClientEntity::find().filter(client::Column::Nom.eq(name)))
            .await
    }

    async fn count_by_name_ignore_case(&self, name: &str) -> AppResult<u64> {
        self.count(ClientEntity::find().filter(filters::eq_ignore_case(client::Column::Nom, name)))
            .await
    }

    async fn count_by_address_containing_ignore_case(&self, fragment: &str) -> AppResult<u64> {
        self.count(
            ClientEntity::find()
                .filter(filters::contains_ignore_case(client::Column::Adresse, fragment)),
        )
        .await
    }

    async fn count_by_address_like(&self, pattern: &str) -> AppResult<u64> {
        self.count(ClientEntity::find().filter(filters::like(client::Column::Adresse, pattern)))
            .await
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        self.exists(ClientEntity::find().filter(client::Column::Nom.eq(name)))
            .await
    }

    async fn exists_by_name_and_surname(&self, name: &str, surname: &str) -> AppResult<bool> {
        self.exists(
            ClientEntity::find()
                .filter(client::Column::Nom.eq(name))
                .filter(client::Column::Prenom.eq(surname)),
        )
        .await
    }

    async fn create(&self, data: ClientData) -> AppResult<Client> {
        let active_model = ActiveModel {
            nom: Set(data.name),
            prenom: Set(data.surname),
            adresse: Set(data.address),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        tracing::debug!(client_id = model.id, "Client created");
        Ok(Client::from(model))
    }

    async fn update(&self, id: i64, data: ClientData) -> AppResult<Client> {
        let client = ClientEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = client.into();
        active.nom = Set(data.name);
        active.prenom = Set(data.surname);
        active.adresse = Set(data.address);

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        self.fetch(ClientEntity::find_by_id(model.id))
            .await?
            .into_iter()
            .next()
            .ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let txn = self.db.begin().await?;

        ClientEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        // Orders outlive their client: the foreign key is nullable
        let detached = CommandeEntity::update_many()
            .col_expr(commande::Column::ClientId, SimpleExpr::Value(Value::BigInt(None)))
            .filter(commande::Column::ClientId.eq(id))
            .exec(&txn)
            .await?;

        ClientEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::debug!(
            client_id = id,
            detached_orders = detached.rows_affected,
            "Client deleted"
        );
        Ok(())
    }
}
