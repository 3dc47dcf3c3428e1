use crate::components::{DemoCard, ErrorDisplay, NumberField, SelectField, StatusPanel, TextField};
use leptos::prelude::*;
use showcase_app::domain::{BackendStatus, Palette, Report, VisualStyle};
use server_fn::ServerFnError;

#[server(BackendStatusFn, "/api", endpoint = "backend_status")]
pub async fn backend_status() -> Result<BackendStatus, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.backend_status().await)
}

#[server(ExplainConceptFn, "/api", endpoint = "explain_concept")]
pub async fn explain_concept(question: String, backend: String) -> Result<Report, ServerFnError> {
    use showcase_app::application::LlmBackend;
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    let backend: LlmBackend = backend.parse()?;
    tracing::info!("explain_concept via {:?}", backend);

    Ok(ctx.explain_concept.execute(&question, backend).await?)
}

#[server(SummarizeWebsiteFn, "/api", endpoint = "summarize_website")]
pub async fn summarize_website(url: String, explain_like_child: bool) -> Result<Report, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.summarize_website.execute(&url, explain_like_child).await?)
}

#[server(SummarizeForKidsFn, "/api", endpoint = "summarize_for_kids")]
pub async fn summarize_for_kids(url: String) -> Result<Report, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.summarize_for_kids.execute(&url).await?)
}

#[server(RunDebateFn, "/api", endpoint = "run_debate")]
pub async fn run_debate(topic: String, turns: u32, temperature: f32) -> Result<Report, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.run_debate.execute(&topic, turns, temperature).await?)
}

fn choices<T: ToString>(items: impl IntoIterator<Item = T>) -> Vec<(String, String)> {
    items
        .into_iter()
        .map(|item| (item.to_string(), item.to_string()))
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let status = Resource::new(|| (), |_| backend_status());

    view! {
        <div class="hero">
            <h1 class="hero__title">"LLM Showcase"</h1>
            <p class="hero__subtitle">
                "Hosted and local language models side by side. Each card is an independent demo."
            </p>
            <Suspense fallback=move || view! { <p class="status__loading">"Checking backends..."</p> }>
                {move || {
                    status.get().map(|result| match result {
                        Ok(status) => view! { <StatusPanel status=status/> }.into_any(),
                        Err(e) => view! { <ErrorDisplay message=e.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>
        </div>

        <div class="demos">
            <DemoCard
                title="Tech Concept Assistant"
                description="Ask about a technical concept and pick which model answers."
                action="/concept"
                submit_label="Explain"
            >
                <TextField name="question" label="Question" placeholder="What is a vector database?" multiline=true required=true/>
                <SelectField
                    name="backend"
                    label="Model"
                    options=vec![
                        ("openai".to_string(), "OpenAI (gpt-4o-mini)".to_string()),
                        ("ollama".to_string(), "Ollama (llama3.2)".to_string()),
                    ]
                />
            </DemoCard>

            <DemoCard
                title="Website Summarizer"
                description="Scrape a page and summarize it with a hosted model."
                action="/summarize"
                submit_label="Summarize"
            >
                <TextField name="url" label="Website URL" input_type="url" placeholder="https://example.com" required=true/>
                <label class="field field--inline">
                    <input type="checkbox" name="explain_like_child" value="true"/>
                    <span class="field__label">"Explain like I'm five"</span>
                </label>
            </DemoCard>

            <DemoCard
                title="Kid-Friendly Summary"
                description="The same idea, fully local: a small Ollama model explains a page to a child."
                action="/kid-summary"
                submit_label="Summarize locally"
            >
                <TextField name="url" label="Website URL" input_type="url" placeholder="https://example.com" required=true/>
            </DemoCard>

            <DemoCard
                title="AI Debate"
                description="A hosted model and a local model argue for a fixed number of rounds."
                action="/debate"
                submit_label="Start debate"
            >
                <TextField name="topic" label="Topic" placeholder="Tabs or spaces?" required=true/>
                <NumberField name="turns" label="Rounds" min=1.0 max=8.0 step=1.0 value=3.0/>
                <NumberField name="temperature" label="Creativity" min=0.1 max=1.2 step=0.1 value=0.7/>
            </DemoCard>

            <DemoCard
                title="Brochure Generator"
                description="Reads a company website, picks the relevant pages and streams a marketing brochure."
                action="/brochure"
                method="get"
                submit_label="Generate brochure"
            >
                <TextField name="company_name" label="Company name" placeholder="Acme" required=true/>
                <TextField name="url" label="Website URL" input_type="url" placeholder="https://acme.com" required=true/>
                <TextField name="extra" label="Extra requirements" placeholder="Tone, audience, length..." multiline=true/>
            </DemoCard>

            <DemoCard
                title="Tourism Poster"
                description="Generate a city poster in a chosen style and palette."
                action="/poster"
                submit_label="Render poster"
            >
                <TextField name="city" label="City" placeholder="Lisbon" required=true/>
                <SelectField name="style" label="Visual style" options=choices(VisualStyle::ALL)/>
                <SelectField name="palette" label="Palette" options=choices(Palette::ALL)/>
            </DemoCard>
        </div>
    }
}
