use crate::markdown::render_markdown;
use crate::pages::{
    render_brochure_page, render_error, render_error_page, render_poster_page, render_report_page,
};
use axum::extract::Query;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use futures::{Stream, StreamExt};
use leptos::prelude::provide_context;
use leptos_axum::handle_server_fns_with_context;
use serde::Deserialize;
use showcase_app::application::LlmBackend;
use showcase_app::domain::Report;
use showcase_app::AppContext;
use showcase_errors::AppError;
use showcase_ui::pages::{
    BackendStatusFn, ExplainConceptFn, RunDebateFn, SummarizeForKidsFn, SummarizeWebsiteFn,
};
use std::convert::Infallible;

#[derive(Deserialize)]
pub struct ConceptForm {
    question: String,
    backend: String,
}

#[derive(Deserialize)]
pub struct SummarizeForm {
    url: String,
    // Unchecked checkboxes are absent from the form body.
    #[serde(default)]
    explain_like_child: Option<String>,
}

#[derive(Deserialize)]
pub struct KidSummaryForm {
    url: String,
}

#[derive(Deserialize)]
pub struct DebateForm {
    topic: String,
    turns: u32,
    temperature: f32,
}

#[derive(Deserialize)]
pub struct PosterForm {
    city: String,
    style: String,
    palette: String,
}

#[derive(Deserialize)]
pub struct BrochureQuery {
    company_name: String,
    url: String,
    #[serde(default)]
    extra: String,
}

/// Form and stream routes for every demo, independent of the leptos state.
pub fn demo_routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/concept", post({
            let ctx = ctx.clone();
            move |form: Form<ConceptForm>| async move { handle_concept(ctx, form.0).await }
        }))
        .route("/summarize", post({
            let ctx = ctx.clone();
            move |form: Form<SummarizeForm>| async move { handle_summarize(ctx, form.0).await }
        }))
        .route("/kid-summary", post({
            let ctx = ctx.clone();
            move |form: Form<KidSummaryForm>| async move {
                tracing::info!("Kid summary requested for {}", form.url);
                report_response(ctx.summarize_for_kids.execute(&form.url).await)
            }
        }))
        .route("/debate", post({
            let ctx = ctx.clone();
            move |form: Form<DebateForm>| async move {
                tracing::info!("Debate requested: '{}' for {} turns", form.topic, form.turns);
                report_response(ctx.run_debate.execute(&form.topic, form.turns, form.temperature).await)
            }
        }))
        .route("/poster", post({
            let ctx = ctx.clone();
            move |form: Form<PosterForm>| async move { handle_poster(ctx, form.0).await }
        }))
        .route("/brochure", get(|query: Query<BrochureQuery>| async move {
            Html(render_brochure_page(&query.company_name, &brochure_stream_url(&query.0)))
        }))
        .route("/brochure/stream", get({
            let ctx = ctx.clone();
            move |query: Query<BrochureQuery>| async move { brochure_stream(ctx, query.0) }
        }))
}

pub fn register_server_fns() {
    server_fn::axum::register_explicit::<BackendStatusFn>();
    server_fn::axum::register_explicit::<ExplainConceptFn>();
    server_fn::axum::register_explicit::<SummarizeWebsiteFn>();
    server_fn::axum::register_explicit::<SummarizeForKidsFn>();
    server_fn::axum::register_explicit::<RunDebateFn>();
}

/// Serves `/api/{fn}` with the context every server function expects.
pub fn server_fn_routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/{*fn_name}", post(move |req: axum::extract::Request| {
        let ctx = ctx.clone();
        async move {
            handle_server_fns_with_context(move || provide_context(ctx.clone()), req).await
        }
    }))
}

fn report_response(result: Result<Report, AppError>) -> Response {
    match result {
        Ok(report) => Html(render_report_page(&report)).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: AppError) -> Response {
    tracing::warn!("Demo request failed: {}", error);
    (error.status_code(), Html(render_error_page(&error))).into_response()
}

async fn handle_concept(ctx: AppContext, form: ConceptForm) -> Response {
    let backend: LlmBackend = match form.backend.parse() {
        Ok(backend) => backend,
        Err(e) => return error_response(e),
    };
    tracing::info!("Concept question via {:?}", backend);
    report_response(ctx.explain_concept.execute(&form.question, backend).await)
}

async fn handle_summarize(ctx: AppContext, form: SummarizeForm) -> Response {
    let explain_like_child = form.explain_like_child.is_some();
    tracing::info!("Summary requested for {} (eli5={})", form.url, explain_like_child);
    report_response(ctx.summarize_website.execute(&form.url, explain_like_child).await)
}

async fn handle_poster(ctx: AppContext, form: PosterForm) -> Response {
    tracing::info!("Poster requested for {}", form.city);
    match ctx.generate_poster.execute(&form.city, &form.style, &form.palette).await {
        Ok(poster) => Html(render_poster_page(&poster)).into_response(),
        Err(e) => error_response(e),
    }
}

fn brochure_stream_url(query: &BrochureQuery) -> String {
    format!(
        "/brochure/stream?company_name={}&url={}&extra={}",
        urlencoding::encode(&query.company_name),
        urlencoding::encode(&query.url),
        urlencoding::encode(&query.extra)
    )
}

/// Each `snapshot` carries the whole brochure so far, rendered to HTML.
/// The stream ends with exactly one `done` or `failure` event.
fn brochure_stream(
    ctx: AppContext,
    query: BrochureQuery,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = async_stream::stream! {
        tracing::info!("Brochure requested for {} ({})", query.company_name, query.url);

        let mut snapshots = match ctx
            .generate_brochure
            .start(&query.company_name, &query.url, &query.extra)
            .await
        {
            Ok(snapshots) => snapshots,
            Err(e) => {
                tracing::warn!("Brochure failed before streaming: {}", e);
                yield Ok(Event::default().event("failure").data(render_error(&e)));
                return;
            }
        };

        while let Some(snapshot) = snapshots.next().await {
            match snapshot {
                Ok(markdown) => {
                    yield Ok(Event::default().event("snapshot").data(render_markdown(&markdown)));
                }
                Err(e) => {
                    tracing::error!("Brochure stream failed: {}", e);
                    yield Ok(Event::default().event("failure").data(render_error(&e)));
                    return;
                }
            }
        }

        yield Ok(Event::default().event("done").data("complete"));
    };

    Sse::new(events).keep_alive(KeepAlive::default())
}
