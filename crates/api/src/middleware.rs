//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use promovote_common::TokenService;
use promovote_core::{
    AccountService, CatalogService, CommentService, ModerationService, VoteService,
};
use promovote_db::repositories::UserRepository;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub account_service: AccountService,
    pub vote_service: VoteService,
    pub catalog_service: CatalogService,
    pub comment_service: CommentService,
    pub moderation_service: ModerationService,
    pub token_service: TokenService,
    pub user_repo: UserRepository,
    pub admin_key: String,
}

/// Authentication middleware.
///
/// Verifies the bearer token and loads the live account row, so a
/// blocked or deleted account is cut off immediately even while its
/// token is still within its validity window. Requests without a valid
/// token pass through unauthenticated; handlers that need an identity
/// reject them via the extractor.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && let Ok(claims) = state.token_service.verify(token)
        && let Ok(Some(user)) = state.user_repo.find_by_id(&claims.sub).await
        && !user.is_blocked
    {
        req.extensions_mut().insert(user);
    }

    next.run(req).await
}
