use shared::{Field, FieldValue, FormEvent, RegistrationForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod services;

use components::registration_form::RegistrationFormView;

#[function_component(App)]
fn app() -> Html {
    let form = use_state(RegistrationForm::default);

    // Single change handler for all three inputs, keyed by the input's
    // name attribute. Checkboxes contribute their checked state, text
    // inputs their raw value.
    let on_field_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(field) = Field::from_name(&input.name()) else {
                return;
            };
            let value = FieldValue::from_input(&input.type_(), input.value(), input.checked());
            let (next, _) = (*form).clone().update(FormEvent::FieldEdited { field, value });
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_| {
            let (next, accepted) = (*form).clone().update(FormEvent::SubmitRequested);
            form.set(next);
            if let Some(values) = accepted {
                services::submit::deliver(&values);
            } else {
                gloo::console::log!("Form is invalid, fix the highlighted fields.");
            }
        })
    };

    html! {
        <RegistrationFormView
            values={(*form).values.clone()}
            errors={(*form).errors}
            {on_field_change}
            {on_submit}
        />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
