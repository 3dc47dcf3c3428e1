use leptos::prelude::*;

/// One demo: a heading, a short blurb and a plain HTML form.
#[component]
pub fn DemoCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] action: String,
    #[prop(optional, into)] method: Option<String>,
    #[prop(into)] submit_label: String,
    children: Children,
) -> impl IntoView {
    let method = method.unwrap_or_else(|| "post".to_string());

    view! {
        <section class="demo">
            <h2 class="demo__title">{title}</h2>
            <p class="demo__description">{description}</p>
            <form action=action method=method class="demo__form">
                {children()}
                <button type="submit" class="demo__button">{submit_label}</button>
            </form>
        </section>
    }
}
