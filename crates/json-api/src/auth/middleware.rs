//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use storefront_app::auth::AuthServiceError;

use crate::{errors::ApiError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(ApiError::unauthorized(
            "Missing or invalid Authorization header",
        ));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(ApiError::internal());

            return;
        }
    };

    let user_uuid = match state.app.auth.authenticate_bearer(token).await {
        Ok(user_uuid) => user_uuid,
        Err(AuthServiceError::UnknownToken) => {
            res.render(ApiError::unauthorized("Invalid API token"));

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate api token: {source}");

            res.render(ApiError::internal());

            return;
        }
    };

    depot.insert_user_uuid(user_uuid);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
