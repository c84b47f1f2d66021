use std::future::Future;
use std::pin::Pin;

use kinetic_core::entity::{Entity, Lookup};

use crate::client::RestClient;
use crate::endpoints;
use crate::error::ApiError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// CRUD endpoints for one entity type.
///
/// Methods return boxed futures for dyn compatibility.
pub trait EntityApi<E: Entity>: Send + Sync {
    fn list(&self) -> BoxFuture<'_, Result<Vec<E>, ApiError>>;

    fn create<'a>(&'a self, entity: &'a E) -> BoxFuture<'a, Result<E, ApiError>>;

    fn update<'a>(&'a self, entity: &'a E) -> BoxFuture<'a, Result<E, ApiError>>;

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), ApiError>>;
}

/// Read-only reference lookup endpoint.
pub trait LookupApi<L: Lookup>: Send + Sync {
    fn list_lookups(&self) -> BoxFuture<'_, Result<Vec<L>, ApiError>>;
}

impl<E: Entity> EntityApi<E> for RestClient {
    fn list(&self) -> BoxFuture<'_, Result<Vec<E>, ApiError>> {
        Box::pin(async move {
            let items: Vec<E> = self.get(&endpoints::list::<E>()).await?;
            tracing::debug!(kind = E::KIND, count = items.len(), "fetched list");
            Ok(items)
        })
    }

    fn create<'a>(&'a self, entity: &'a E) -> BoxFuture<'a, Result<E, ApiError>> {
        Box::pin(async move { self.post(endpoints::collection::<E>(), entity).await })
    }

    fn update<'a>(&'a self, entity: &'a E) -> BoxFuture<'a, Result<E, ApiError>> {
        Box::pin(async move { self.patch(endpoints::collection::<E>(), entity).await })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), ApiError>> {
        Box::pin(async move { RestClient::delete(self, &endpoints::item::<E>(id)).await })
    }
}

impl<L: Lookup> LookupApi<L> for RestClient {
    fn list_lookups(&self) -> BoxFuture<'_, Result<Vec<L>, ApiError>> {
        Box::pin(async move {
            let items: Vec<L> = self.get(L::PATH).await?;
            tracing::debug!(path = L::PATH, count = items.len(), "fetched lookups");
            Ok(items)
        })
    }
}
