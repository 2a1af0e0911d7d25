use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, bonus, deposit, docs, finance, media, shift, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Umbra Platform API"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        auth::setup,
        user::get_users,
        user::create_user,
        user::get_user,
        user::update_user,
        user::set_password,
        user::delete_user,
        shift::start_shift,
        shift::end_shift,
        shift::get_shifts,
        shift::update_shift,
        shift::delete_shift,
        deposit::create_deposit,
        deposit::get_deposits,
        bonus::get_tiers,
        bonus::create_tier,
        bonus::update_tier,
        bonus::delete_tier,
        bonus::get_report,
        docs::get_sections,
        docs::create_section,
        docs::update_section,
        docs::delete_section,
        docs::get_page,
        docs::create_page,
        docs::update_page,
        docs::delete_page,
        finance::get_accounts,
        finance::create_account,
        finance::update_account,
        finance::delete_account,
        finance::get_categories,
        finance::create_category,
        finance::update_category,
        finance::delete_category,
        finance::get_counterparties,
        finance::create_counterparty,
        finance::update_counterparty,
        finance::delete_counterparty,
        finance::get_transactions,
        finance::create_transaction,
        finance::update_transaction,
        finance::delete_transaction,
        finance::get_report,
        media::upload,
    )
)]
struct ApiDoc;

/// Builds the full application router: API routes, Swagger UI, and the static
/// media directory.
pub fn router(media_dir: &std::path::Path) -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/setup", post(auth::setup))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/users/{id}/password", put(user::set_password))
        .route("/api/shifts/start", post(shift::start_shift))
        .route("/api/shifts/{id}/end", post(shift::end_shift))
        .route("/api/shifts", get(shift::get_shifts))
        .route(
            "/api/shifts/{id}",
            put(shift::update_shift).delete(shift::delete_shift),
        )
        .route(
            "/api/deposits",
            get(deposit::get_deposits).post(deposit::create_deposit),
        )
        .route(
            "/api/bonus/tiers",
            get(bonus::get_tiers).post(bonus::create_tier),
        )
        .route(
            "/api/bonus/tiers/{id}",
            put(bonus::update_tier).delete(bonus::delete_tier),
        )
        .route("/api/bonus/report", get(bonus::get_report))
        .route(
            "/api/docs/sections",
            get(docs::get_sections).post(docs::create_section),
        )
        .route(
            "/api/docs/sections/{id}",
            put(docs::update_section).delete(docs::delete_section),
        )
        .route("/api/docs/pages", post(docs::create_page))
        // GET addresses pages by slug; PUT and DELETE by numeric id.
        .route(
            "/api/docs/pages/{key}",
            get(docs::get_page)
                .put(docs::update_page)
                .delete(docs::delete_page),
        )
        .route(
            "/api/finance/accounts",
            get(finance::get_accounts).post(finance::create_account),
        )
        .route(
            "/api/finance/accounts/{id}",
            put(finance::update_account).delete(finance::delete_account),
        )
        .route(
            "/api/finance/categories",
            get(finance::get_categories).post(finance::create_category),
        )
        .route(
            "/api/finance/categories/{id}",
            put(finance::update_category).delete(finance::delete_category),
        )
        .route(
            "/api/finance/counterparties",
            get(finance::get_counterparties).post(finance::create_counterparty),
        )
        .route(
            "/api/finance/counterparties/{id}",
            put(finance::update_counterparty).delete(finance::delete_counterparty),
        )
        .route(
            "/api/finance/transactions",
            get(finance::get_transactions).post(finance::create_transaction),
        )
        .route(
            "/api/finance/transactions/{id}",
            put(finance::update_transaction).delete(finance::delete_transaction),
        )
        .route("/api/finance/report", get(finance::get_report))
        .route("/api/media", post(media::upload))
        .nest_service("/media", ServeDir::new(media_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
