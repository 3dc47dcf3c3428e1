use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            {if multiline {
                view! {
                    <textarea name=name class="field__input" placeholder=placeholder required=required rows="4"></textarea>
                }.into_any()
            } else {
                view! {
                    <input type=input_type name=name class="field__input" placeholder=placeholder required=required/>
                }.into_any()
            }}
        </label>
    }
}

#[component]
pub fn NumberField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                type="number"
                name=name
                class="field__input"
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                value=value.to_string()
            />
        </label>
    }
}

/// A `<select>` whose first option is preselected.
#[component]
pub fn SelectField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select name=name class="field__input">
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
