//! Auth data models.

use uuid::Uuid;

use crate::uuids::TypedUuid;

/// Marker for user-scoped identifiers.
///
/// Users live in an external identity system; this service only ever sees
/// their UUID, carried by the API tokens it issues.
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// API token record as persisted in storage.
#[derive(Debug, Clone)]
pub(crate) struct ApiToken {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub token_hash: String,
}

/// Token issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub token: String,
}
