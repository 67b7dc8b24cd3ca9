//! App Router

use salvo::Router;

use crate::{auth, cart, products, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("users")
                .push(Router::with_path("register").post(users::register::handler))
                .push(Router::with_path("login").post(users::login::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("cart/checkout").post(cart::checkout::handler)),
        )
}
