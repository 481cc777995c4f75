use axum::{
	http::{
		header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
		Method,
	},
	routing::{get, post},
	Extension, Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::endpoints::mytube::{
	bulletins::index::handler as bulletins_handler,
	categories::index::handler as categories_handler,
	checkpoint::index::handler as checkpoint_handler,
	my_uploads::index::handler as my_uploads_handler,
	new_uploads::index::handler as new_uploads_handler,
	subscriptions::index::handler as subscriptions_handler,
	uploads::index::handler as uploads_handler,
};
use crate::state::AppState;

/// Browsers reject a literal `*` origin together with credentials, so the
/// request origin is echoed back instead.
pub fn cors_layer() -> CorsLayer {
	CorsLayer::new()
		.allow_origin(AllowOrigin::mirror_request())
		.allow_credentials(true)
		.allow_methods([
			Method::GET,
			Method::PUT,
			Method::POST,
			Method::DELETE,
			Method::OPTIONS,
		])
		.allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT])
}

pub fn build_router(state: AppState) -> Router {
	Router::new()
		.route("/new_uploads", get(new_uploads_handler))
		.route("/new_uploads/checkpoint", post(checkpoint_handler))
		.route("/categories", get(categories_handler))
		.route("/subscriptions", get(subscriptions_handler))
		.route("/uploads", get(uploads_handler))
		.route("/my_uploads", get(my_uploads_handler))
		.route("/bulletins", post(bulletins_handler))
		.layer(Extension(state))
		.layer(cors_layer())
		.layer(TraceLayer::new_for_http())
}
