use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<&'static str>,
    #[prop_or_default]
    pub tooltip: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Labelled wrapper around one form control with its validation message.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let tooltip = props.tooltip.as_ref().map(|text| {
        html! {
            <span class="field-tooltip">
                {"ⓘ"}
                <span class="field-tooltip-text">
                    { for text.split('\n').map(|line| html! { <>{line.trim()}<br /></> }) }
                </span>
            </span>
        }
    });

    html! {
        <div class={classes!("form-field", props.error.is_some().then(|| "has-error"))}>
            <label class="form-field-label">
                {props.label.clone()}
                {tooltip}
            </label>
            { for props.children.iter() }
            if let Some(error) = props.error {
                <span class="form-field-error">{error}</span>
            }
        </div>
    }
}
