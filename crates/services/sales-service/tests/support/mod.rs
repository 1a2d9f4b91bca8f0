//! Shared fixtures for the integration tests.
//!
//! Every test gets its own migrated in-memory SQLite database.
//!
//! Seeded clients (ids in insertion order):
//!
//! | id | nom    | prenom  | adresse                  |
//! |----|--------|---------|--------------------------|
//! | 1  | Dupont | Marie   | 12 rue de la Paix, Paris |
//! | 2  | Dupont | Alain   | 5 avenue Foch, Lyon      |
//! | 3  | Martin | Jean    | 8 place Bellecour, Lyon  |
//! | 4  | Nom1   | Prenom1 | Zone_A, Lille            |
//! | 5  | Durand | NULL    | paris nord               |
//!
//! Seeded orders:
//!
//! | id | produit | qte | prix | ht  | ttc   | client |
//! |----|---------|-----|------|-----|-------|--------|
//! | 1  | Stylo   | 2   | 1.5  | 3   | 3.6   | 1      |
//! | 2  | Clavier | 3   | 25   | 75  | 90    | 1      |
//! | 3  | Ecran   | 1   | 150  | 150 | 180   | 2      |
//! | 4  | Souris  | 5   | 10   | 50  | 60    | 3      |
//! | 5  | Cahier  | 10  | 2    | 20  | 24    | NULL   |
//! | 6  | Casque  | 4   | 22.5 | 75  | 90    | 3      |

#![allow(dead_code)]

use common::DatabaseConfig;
use domain::{ClientData, OrderData};
use sales_service_lib::infra::Database;
use sales_service_lib::repository::{ClientRepository, ClientStore, OrderRepository, OrderStore};

pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// Open a fresh, migrated, empty database.
pub async fn setup() -> Database {
    Database::connect(&DatabaseConfig::with_url(SQLITE_MEMORY_URL))
        .await
        .expect("in-memory database should open")
}

/// Open a fresh database holding the fixture rows above.
pub async fn setup_seeded() -> Database {
    let db = setup().await;
    seed(&db).await;
    db
}

pub fn client_store(db: &Database) -> ClientStore {
    ClientStore::new(db.get_connection())
}

pub fn order_store(db: &Database) -> OrderStore {
    OrderStore::new(db.get_connection())
}

pub async fn seed(db: &Database) {
    let clients = client_store(db);
    let orders = order_store(db);

    let fixtures = [
        ClientData::new("Dupont", "Marie", "12 rue de la Paix, Paris"),
        ClientData::new("Dupont", "Alain", "5 avenue Foch, Lyon"),
        ClientData::new("Martin", "Jean", "8 place Bellecour, Lyon"),
        ClientData::new("Nom1", "Prenom1", "Zone_A, Lille"),
        ClientData {
            name: Some("Durand".to_string()),
            surname: None,
            address: Some("paris nord".to_string()),
        },
    ];
    for data in fixtures {
        clients.create(data).await.expect("client fixture");
    }

    let fixtures = [
        OrderData::new("Stylo", 2, 1.5, 3.0, 20, 3.6).for_client(1),
        OrderData::new("Clavier", 3, 25.0, 75.0, 20, 90.0).for_client(1),
        OrderData::new("Ecran", 1, 150.0, 150.0, 20, 180.0).for_client(2),
        OrderData::new("Souris", 5, 10.0, 50.0, 20, 60.0).for_client(3),
        OrderData::new("Cahier", 10, 2.0, 20.0, 20, 24.0),
        OrderData::new("Casque", 4, 22.5, 75.0, 20, 90.0).for_client(3),
    ];
    for data in fixtures {
        orders.create(data).await.expect("order fixture");
    }
}

/// Ids of anything carrying an `id`, in result order.
pub fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    items.iter().map(id).collect()
}
