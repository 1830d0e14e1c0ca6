//! Depot helper extensions.

use std::any::Any;

use salvo::Depot;

use storefront_app::auth::models::UserUuid;

use crate::errors::ApiError;

const USER_UUID_KEY: &str = "user_uuid";

/// Helpers for moving request-scoped data through the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    fn user_uuid_or_401(&self) -> Result<UserUuid, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, ApiError> {
        self.get::<UserUuid>(USER_UUID_KEY)
            .copied()
            .map_err(|_ignored| ApiError::unauthorized("Missing or invalid Authorization header"))
    }
}
