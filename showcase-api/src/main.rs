mod markdown;
mod pages;
mod routes;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use showcase_app::AppContext;
use showcase_ui::App;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env();

    let routes = generate_route_list(App);

    routes::register_server_fns();
    tracing::info!("Registered server functions");

    let app = Router::new()
        .merge(routes::demo_routes(app_context.clone()))
        .merge(routes::server_fn_routes(app_context.clone()))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    let submit_script = r#"
        document.addEventListener('DOMContentLoaded', function() {
            document.querySelectorAll('.demo__form').forEach(function(form) {
                form.addEventListener('submit', function() {
                    var button = form.querySelector('.demo__button');
                    button.disabled = true;
                    button.textContent = 'Working...';
                    button.style.cursor = 'wait';
                });
            });
        });
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"LLM Showcase"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🤖</text></svg>"/>
                <style>{pages::CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script>{submit_script}</script>
            </body>
        </html>
    }
}
