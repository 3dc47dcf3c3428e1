use leptos::prelude::*;
use showcase_app::domain::BackendStatus;

#[component]
pub fn StatusPanel(status: BackendStatus) -> impl IntoView {
    let badge = |label: &'static str, ok: bool, ok_text: &'static str, bad_text: &'static str| {
        let class = if ok { "status__badge status__badge--ok" } else { "status__badge status__badge--off" };
        view! {
            <li class=class>
                <span class="status__label">{label}</span>
                <span class="status__value">{if ok { ok_text } else { bad_text }}</span>
            </li>
        }
    };

    view! {
        <ul class="status">
            {badge("OpenAI", status.openai_configured, "key configured", "OPENAI_API_KEY missing")}
            {badge("Gemini", status.gemini_configured, "key configured", "GEMINI_API_KEY missing")}
            {badge("Ollama", status.ollama_online, "online", "offline")}
        </ul>
    }
}
