use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{BusinessAPI, RouteAPI},
    entities::{GeoPoint, Route, RoutePlan},
    error::Error,
    navigation::{acquire_current_position, estimate, Estimate, PositionProvider},
};

#[async_trait]
impl RouteAPI for Engine {
    async fn resolve_route(&self, origin: GeoPoint, destination: GeoPoint) -> Route {
        self.resolver.resolve(origin, destination).await
    }

    #[tracing::instrument(skip(self, position))]
    async fn plan_route(
        &self,
        business_id: Uuid,
        position: &(dyn PositionProvider + Send + Sync),
    ) -> Result<RoutePlan, Error> {
        let destination = async {
            let business = self.find_business(business_id).await?;
            let destination = business.destination()?;

            Ok::<_, Error>((business, destination))
        };

        // both endpoints are needed; the first failure cancels the other
        let joined = futures::try_join!(acquire_current_position(position), destination);

        let (origin, (business, destination)) = joined.map_err(|err| {
            if err.is_precondition_failure() {
                tracing::info!(%err, "route not requested");
            }
            err
        })?;

        let route = self.resolver.resolve(origin, destination).await;

        Ok(RoutePlan::new(&business, origin, destination, route))
    }

    fn estimate(&self, origin: GeoPoint, destination: GeoPoint) -> Estimate {
        estimate(origin, destination, self.resolver.speed())
    }
}
