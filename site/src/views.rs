//! Page handlers.
//!
//! Every handler builds a tera context from the shared state, renders a
//! template, and maps failures into [`PageError`]. The contact and
//! admin-login handlers run the form pipeline from `northlight-forms`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tera::Context;

use northlight_content::{blog_posts, nav_for, services, team_members};
use northlight_core::SiteError;
use northlight_forms::contact::{contact_form, contact_message};
use northlight_forms::login::login_form;
use northlight_forms::{FormState, NoticeBoard, SubmissionController};

use crate::state::AppState;

/// An error on its way out of a handler: logs and maps to a status code.
pub struct PageError(SiteError);

impl From<SiteError> for PageError {
    fn from(err: SiteError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("page error: {}", self.0);
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.0.to_string()).into_response()
    }
}

fn render(state: &AppState, template: &str, ctx: &Context) -> Result<Html<String>, PageError> {
    state
        .templates
        .render(template, ctx)
        .map(Html)
        .map_err(|e| PageError(SiteError::TemplateError(e.to_string())))
}

fn base_context(state: &AppState, path: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("site_name", &state.settings.site_name);
    ctx.insert("nav", &nav_for(path));
    ctx
}

/// Drains the board into the flat shape the base template expects.
fn notice_json(board: &mut NoticeBoard) -> Vec<serde_json::Value> {
    board
        .drain()
        .into_iter()
        .map(|n| serde_json::json!({ "tag": n.level.tag(), "text": n.text }))
        .collect()
}

/// Inserts form values, errors, drained notices, and the submission
/// flag into the context.
fn insert_form(ctx: &mut Context, form: &FormState, board: &mut NoticeBoard, submitting: bool) {
    ctx.insert("values", form.values());
    ctx.insert("errors", form.errors());
    ctx.insert("notices", &notice_json(board));
    ctx.insert("submitting", &submitting);
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let mut ctx = base_context(&state, "/");
    ctx.insert("services", &services());
    render(&state, "home.html", &ctx)
}

pub async fn services_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let mut ctx = base_context(&state, "/services");
    ctx.insert("services", &services());
    render(&state, "services.html", &ctx)
}

pub async fn team_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let mut ctx = base_context(&state, "/team");
    ctx.insert("members", &team_members());
    render(&state, "team.html", &ctx)
}

pub async fn blog_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let mut ctx = base_context(&state, "/blog");
    ctx.insert("posts", &blog_posts());
    render(&state, "blog.html", &ctx)
}

pub async fn contact_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let form = contact_form();
    let mut board = NoticeBoard::new();
    let mut ctx = base_context(&state, "/contact");
    insert_form(&mut ctx, &form, &mut board, false);
    render(&state, "contact.html", &ctx)
}

pub async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Form(data): Form<HashMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let mut form = contact_form();
    form.bind(&data);

    let mut controller = SubmissionController::new();
    let mut board = NoticeBoard::new();
    controller
        .submit(&mut form, contact_message, state.relay.as_ref(), &mut board)
        .await;

    let mut ctx = base_context(&state, "/contact");
    insert_form(&mut ctx, &form, &mut board, controller.is_submitting());
    render(&state, "contact.html", &ctx)
}

pub async fn admin_login_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let form = login_form();
    let mut board = NoticeBoard::new();
    let mut ctx = base_context(&state, "/admin/login");
    insert_form(&mut ctx, &form, &mut board, false);
    render(&state, "admin/login.html", &ctx)
}

/// Validates the sign-in form. This is a format gate for the demo
/// dashboard; no credential store exists or is consulted.
pub async fn admin_login_submit(
    State(state): State<Arc<AppState>>,
    Form(data): Form<HashMap<String, String>>,
) -> Result<Response, PageError> {
    let mut form = login_form();
    form.bind(&data);

    if form.validate() {
        tracing::info!("admin sign-in accepted for demo dashboard");
        return Ok(Redirect::to("/admin/dashboard?signed_in=1").into_response());
    }

    let mut board = NoticeBoard::new();
    let mut ctx = base_context(&state, "/admin/login");
    insert_form(&mut ctx, &form, &mut board, false);
    Ok(render(&state, "admin/login.html", &ctx)?.into_response())
}

pub async fn admin_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let term = params.get("q").map_or("", String::as_str);
    let results = state.inquiries.search(term);

    let mut ctx = base_context(&state, "/admin/dashboard");
    if params.contains_key("signed_in") {
        let mut board = NoticeBoard::new();
        board.info("Signed in to the demo dashboard.");
        ctx.insert("notices", &notice_json(&mut board));
    }
    ctx.insert("q", term);
    ctx.insert("inquiries", &results);
    ctx.insert("result_count", &results.len());
    render(&state, "admin/dashboard.html", &ctx)
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
