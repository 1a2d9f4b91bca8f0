//! Order (commande) repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, SqlErr,
};

use super::entities::commande::{self, ActiveModel, Entity as CommandeEntity};
use common::{AppError, AppResult};
use domain::{Order, OrderData, TopLimit};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order repository trait for dependency injection.
///
/// Unless a query names a sort, results come back by ascending id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>>;

    /// List all orders
    async fn list(&self) -> AppResult<Vec<Order>>;

    /// Orders with `quantity > quantity`
    async fn find_by_quantity_greater_than(&self, quantity: i32) -> AppResult<Vec<Order>>;

    /// Orders with `quantity >= quantity`
    async fn find_by_quantity_greater_than_equal(&self, quantity: i32) -> AppResult<Vec<Order>>;

    /// Orders with `unit_price < price`
    async fn find_by_price_less_than(&self, price: f64) -> AppResult<Vec<Order>>;

    /// Orders with `unit_price <= price`
    async fn find_by_price_less_than_equal(&self, price: f64) -> AppResult<Vec<Order>>;

    /// Orders whose tax-inclusive total lies in `[low, high]`
    async fn find_by_total_between(&self, low: f64, high: f64) -> AppResult<Vec<Order>>;

    /// Orders with `quantity > quantity AND unit_price < price`
    async fn find_by_quantity_greater_than_and_price_less_than(
        &self,
        quantity: i32,
        price: f64,
    ) -> AppResult<Vec<Order>>;

    /// Orders with exactly this quantity and unit price
    async fn find_by_quantity_and_price(&self, quantity: i32, price: f64) -> AppResult<Vec<Order>>;

    /// Orders for any of the given product names
    async fn find_by_product_names(&self, names: Vec<String>) -> AppResult<Vec<Order>>;

    /// All orders by descending tax-inclusive total
    async fn find_all_by_total_desc(&self) -> AppResult<Vec<Order>>;

    /// At most `limit` orders by descending tax-inclusive total
    async fn find_top_by_total_desc(&self, limit: TopLimit) -> AppResult<Vec<Order>>;

    /// Create a new order
    async fn create(&self, data: OrderData) -> AppResult<Order>;

    /// Replace the stored fields of an order
    async fn update(&self, id: i64, data: OrderData) -> AppResult<Order>;

    /// Delete an order
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of OrderRepository
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, select: Select<CommandeEntity>) -> AppResult<Vec<Order>> {
        let models = select
            .order_by_asc(commande::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    /// Ties on the total keep id order
    fn by_total_desc() -> Select<CommandeEntity> {
        CommandeEntity::find().order_by_desc(commande::Column::TotalTtc)
    }
}

fn apply(active: &mut ActiveModel, data: OrderData) {
    active.produit_nom = Set(data.product_name);
    active.quantite = Set(data.quantity);
    active.prix = Set(data.unit_price);
    active.total_ht = Set(data.total_ht);
    active.tva = Set(data.tva);
    active.total_ttc = Set(data.total_ttc);
    active.client_id = Set(data.client_id);
}

/// A client deleted after the service checked it surfaces as a foreign key violation.
fn write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::bad_request("Referenced client does not exist")
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        let result = CommandeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Order::from))
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        self.fetch(CommandeEntity::find()).await
    }

    async fn find_by_quantity_greater_than(&self, quantity: i32) -> AppResult<Vec<Order>> {
        self.fetch(CommandeEntity::find().filter(commande::Column::Quantite.gt(quantity)))
            .await
    }

    async fn find_by_quantity_greater_than_equal(&self, quantity: i32) -> AppResult<Vec<Order>> {
        self.fetch(CommandeEntity::find().filter(commande::Column::Quantite.gte(quantity)))
            .await
    }

    async fn find_by_price_less_than(&self, price: f64) -> AppResult<Vec<Order>> {
        self.fetch(CommandeEntity::find().filter(commande::Column::Prix.lt(price)))
            .await
    }

    async fn find_by_price_less_than_equal(&self, price: f64) -> AppResult<Vec<Order>> {
        self.fetch(CommandeEntity::find().filter(commande::Column::Prix.lte(price)))
            .await
    }

    async fn find_by_total_between(&self, low: f64, high: f64) -> AppResult<Vec<Order>> {
        self.fetch(CommandeEntity::find().filter(commande::Column::TotalTtc.between(low, high)))
            .await
    }

    async fn find_by_quantity_greater_than_and_price_less_than(
        &self,
        quantity: i32,
        price: f64,
    ) -> AppResult<Vec<Order>> {
        self.fetch(
            CommandeEntity::find()
                .filter(commande::Column::Quantite.gt(quantity))
                .filter(commande::Column::Prix.lt(price)),
        )
        .await
    }

    async fn find_by_quantity_and_price(&self, quantity: i32, price: f64) -> AppResult<Vec<Order>> {
        self.fetch(
            CommandeEntity::find()
                .filter(commande::Column::Prix.eq(price))
                .filter(commande::Column::Quantite.eq(quantity)),
        )
        .await
    }

    async fn find_by_product_names(&self, names: Vec<String>) -> AppResult<Vec<Order>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        self.fetch(CommandeEntity::find().filter(commande::Column::ProduitNom.is_in(names)))
            .await
    }

    async fn find_all_by_total_desc(&self) -> AppResult<Vec<Order>> {
        self.fetch(Self::by_total_desc()).await
    }

    async fn find_top_by_total_desc(&self, limit: TopLimit) -> AppResult<Vec<Order>> {
        self.fetch(Self::by_total_desc().limit(limit.get())).await
    }

    async fn create(&self, data: OrderData) -> AppResult<Order> {
        let mut active_model: ActiveModel = Default::default();
        apply(&mut active_model, data);

        let model = active_model.insert(&self.db).await.map_err(write_error)?;
        tracing::debug!(order_id = model.id, "Order created");
        Ok(Order::from(model))
    }

    async fn update(&self, id: i64, data: OrderData) -> AppResult<Order> {
        let order = CommandeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = order.into();
        apply(&mut active, data);

        let model = active.update(&self.db).await.map_err(write_error)?;
        Ok(Order::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = CommandeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
