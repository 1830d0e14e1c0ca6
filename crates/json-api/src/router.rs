//! App Router

use salvo::Router;

use crate::{auth, carts, orders};

pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("cart")
                .get(carts::handlers::get::handler)
                .push(
                    Router::with_path("{product}")
                        .post(carts::handlers::add::handler)
                        .put(carts::handlers::update::handler)
                        .delete(carts::handlers::remove::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .post(orders::handlers::checkout::handler)
                .push(Router::with_path("history").get(orders::handlers::history::handler))
                .push(Router::with_path("{order}").get(orders::handlers::get::handler)),
        )
}
