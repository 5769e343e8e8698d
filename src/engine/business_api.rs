use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::BusinessAPI,
    entities::Business,
    error::{invalid_input_error, not_found_error, Error},
};

#[async_trait]
impl BusinessAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_business(
        &self,
        name: String,
        exact_location: Option<String>,
        address: Option<String>,
    ) -> Result<Business, Error> {
        if name.trim().is_empty() {
            return Err(invalid_input_error());
        }

        // exact_location is stored as given; it is validated when routed to
        let business = Business::new(name, exact_location, address);

        self.directory.insert_business(&business).await?;

        Ok(business)
    }

    #[tracing::instrument(skip(self))]
    async fn find_business(&self, id: Uuid) -> Result<Business, Error> {
        self.directory
            .fetch_business(id)
            .await?
            .ok_or_else(not_found_error)
    }
}
