//! Client service - Handles client lookups and lifecycle.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{Client, ClientData, DEFAULT_EXISTS_SURNAME};

use crate::repository::ClientRepository;

/// Client service trait for dependency injection.
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Get client by ID
    async fn get_client(&self, id: i64) -> AppResult<Client>;

    /// List all clients
    async fn list_clients(&self) -> AppResult<Vec<Client>>;

    /// Clients with exactly this name
    async fn get_clients_by_name(&self, name: &str) -> AppResult<Vec<Client>>;

    /// Clients with exactly this name, by ascending surname
    async fn get_clients_by_name_sorted(&self, name: &str) -> AppResult<Vec<Client>>;

    /// Clients matching both name and surname
    async fn get_clients_by_name_and_surname(
        &self,
        name: &str,
        surname: &str,
    ) -> AppResult<Vec<Client>>;

    /// Clients matching name or surname (absent values match NULL)
    async fn get_clients_by_name_or_surname(
        &self,
        name: Option<String>,
        surname: Option<String>,
    ) -> AppResult<Vec<Client>>;

    /// Clients whose address matches a LIKE pattern
    async fn get_clients_by_address_like(&self, pattern: &str) -> AppResult<Vec<Client>>;

    /// Clients whose address contains the fragment
    async fn get_clients_by_address_containing(&self, fragment: &str) -> AppResult<Vec<Client>>;

    /// Clients whose name ends with the suffix
    async fn get_clients_by_name_ending_with(&self, suffix: &str) -> AppResult<Vec<Client>>;

    /// Clients whose name starts with the prefix
    async fn get_clients_by_name_starting_with(&self, prefix: &str) -> AppResult<Vec<Client>>;

    /// Count clients whose address mentions the given text anywhere
    async fn count_clients_by_address_mention(&self, text: &str) -> AppResult<u64>;

    /// Whether a client with this name and surname exists
    /// (surname defaults to [`DEFAULT_EXISTS_SURNAME`])
    async fn client_exists(&self, name: &str, surname: Option<String>) -> AppResult<bool>;

    /// Create a new client
    async fn create_client(&self, data: ClientData) -> AppResult<Client>;

    /// Replace a client's fields
    async fn update_client(&self, id: i64, data: ClientData) -> AppResult<Client>;

    /// Delete a client; its orders are kept without a client
    async fn delete_client(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ClientService using repository.
pub struct ClientManager {
    repo: Arc<dyn ClientRepository>,
}

impl ClientManager {
    /// Create new client service instance with repository
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ClientService for ClientManager {
    async fn get_client(&self, id: i64) -> AppResult<Client> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.repo.list().await
    }

    async fn get_clients_by_name(&self, name: &str) -> AppResult<Vec<Client>> {
        self.repo.find_by_name(name).await
    }

    async fn get_clients_by_name_sorted(&self, name: &str) -> AppResult<Vec<Client>> {
        self.repo.find_by_name_order_by_surname(name).await
    }

    async fn get_clients_by_name_and_surname(
        &self,
        name: &str,
        surname: &str,
    ) -> AppResult<Vec<Client>> {
        self.repo.find_by_name_and_surname(name, surname).await
    }

    async fn get_clients_by_name_or_surname(
        &self,
        name: Option<String>,
        surname: Option<String>,
    ) -> AppResult<Vec<Client>> {
        self.repo.find_by_name_or_surname(name, surname).await
    }

    async fn get_clients_by_address_like(&self, pattern: &str) -> AppResult<Vec<Client>> {
        self.repo.find_by_address_like(pattern).await
    }

    async fn get_clients_by_address_containing(&self, fragment: &str) -> AppResult<Vec<Client>> {
        self.repo.find_by_address_containing(fragment).await
    }

    async fn get_clients_by_name_ending_with(&self, suffix: &str) -> AppResult<Vec<Client>> {
        self.repo.find_by_name_ending_with(suffix).await
    }

    async fn get_clients_by_name_starting_with(&self, prefix: &str) -> AppResult<Vec<Client>> {
        self.repo.find_by_name_starting_with(prefix).await
    }

    async fn count_clients_by_address_mention(&self, text: &str) -> AppResult<u64> {
        // The text is used as given: wildcards it contains stay wildcards
        self.repo.count_by_address_like(&format!("%{}%", text)).await
    }

    async fn client_exists(&self, name: &str, surname: Option<String>) -> AppResult<bool> {
        let surname = surname.unwrap_or_else(|| DEFAULT_EXISTS_SURNAME.to_string());
        self.repo.exists_by_name_and_surname(name, &surname).await
    }

    async fn create_client(&self, data: ClientData) -> AppResult<Client> {
        self.repo.create(data).await
    }

    async fn update_client(&self, id: i64, data: ClientData) -> AppResult<Client> {
        self.repo.update(id, data).await
    }

    async fn delete_client(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(client_id = id, "Client deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockClientRepository;
    use common::AppError;
    use mockall::predicate::eq;

    fn client(id: i64, name: &str, surname: &str) -> Client {
        Client::new(id, ClientData::new(name, surname, "Paris"))
    }

    #[tokio::test]
    async fn test_get_client_not_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = ClientManager::new(Arc::new(repo));
        let result = service.get_client(42).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_clients_by_name_forwards_to_repository() {
        let mut repo = MockClientRepository::new();
        repo.expect_find_by_name()
            .withf(|name| name == "Dupont")
            .times(1)
            .returning(|_| Ok(vec![client(1, "Dupont", "Marie")]));

        let service = ClientManager::new(Arc::new(repo));
        let clients = service.get_clients_by_name("Dupont").await.unwrap();

        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name.as_deref(), Some("Dupont"));
    }

    #[tokio::test]
    async fn test_count_wraps_text_in_wildcards() {
        let mut repo = MockClientRepository::new();
        repo.expect_count_by_address_like()
            .withf(|pattern| pattern == "%Lyon%")
            .times(1)
            .returning(|_| Ok(3));

        let service = ClientManager::new(Arc::new(repo));

        assert_eq!(service.count_clients_by_address_mention("Lyon").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_client_exists_defaults_surname() {
        let mut repo = MockClientRepository::new();
        repo.expect_exists_by_name_and_surname()
            .withf(|name, surname| name == "Nom1" && surname == DEFAULT_EXISTS_SURNAME)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ClientManager::new(Arc::new(repo));

        assert!(service.client_exists("Nom1", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_client_exists_uses_given_surname() {
        let mut repo = MockClientRepository::new();
        repo.expect_exists_by_name_and_surname()
            .withf(|name, surname| name == "Nom1" && surname == "Jean")
            .times(1)
            .returning(|_, _| Ok(false));

        let service = ClientManager::new(Arc::new(repo));

        assert!(!service
            .client_exists("Nom1", Some("Jean".to_string()))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_client_propagates_not_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_delete()
            .with(eq(5))
            .returning(|_| Err(AppError::NotFound));

        let service = ClientManager::new(Arc::new(repo));

        assert!(matches!(
            service.delete_client(5).await,
            Err(AppError::NotFound)
        ));
    }
}
