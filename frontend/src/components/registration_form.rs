use shared::{Field, FieldErrors, RegistrationValues};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    // Form state
    pub values: RegistrationValues,
    pub errors: FieldErrors,

    // Event handlers
    pub on_field_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

/// The registration form. Purely presentational: every change event is
/// routed through `on_field_change`, submission through `on_submit`; the
/// submit button tracks recomputed form validity, never the error flags.
#[function_component(RegistrationFormView)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let is_valid = props.values.is_valid();

    html! {
        <div class="form">
            <h1>{"Sign Up"}</h1>
            <form onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <label
                    class={classes!("form-input-line", props.errors.email.then_some("hasError"))}
                    data-testid="email-label"
                >
                    <span class="form-label">{"Email"}</span>
                    <input
                        class="form-input"
                        name={Field::Email.name()}
                        type="text"
                        value={props.values.email.clone()}
                        onchange={props.on_field_change.clone()}
                        data-testid="email"
                    />
                    {if props.errors.email {
                        html! {
                            <span class="error-message" data-testid="email-error">
                                {Field::Email.error_message()}
                            </span>
                        }
                    } else { html! {} }}
                </label>

                <label
                    class={classes!("form-input-line", props.errors.password.then_some("hasError"))}
                    data-testid="password-label"
                >
                    <span class="form-label">{"Password"}</span>
                    // unmasked on purpose; tests key on the input type
                    <input
                        class="form-input"
                        name={Field::Password.name()}
                        type="text"
                        value={props.values.password.clone()}
                        onchange={props.on_field_change.clone()}
                        data-testid="password"
                    />
                    {if props.errors.password {
                        html! {
                            // the password span is keyed by role, not testid,
                            // in the markup consumers already target
                            <span class="error-message" role="password-error">
                                {Field::Password.error_message()}
                            </span>
                        }
                    } else { html! {} }}
                </label>

                <label
                    class={classes!("form-ch-line", props.errors.terms.then_some("hasError"))}
                    data-testid="terms-label"
                >
                    <input
                        type="checkbox"
                        name={Field::Terms.name()}
                        checked={props.values.terms}
                        onchange={props.on_field_change.clone()}
                        data-testid="terms"
                    />
                    <span class="ch-label">{"I accept the terms of use."}</span>
                    {if props.errors.terms {
                        html! {
                            <span class="error-message" data-testid="terms-error">
                                {Field::Terms.error_message()}
                            </span>
                        }
                    } else { html! {} }}
                </label>

                <button
                    class="send-button"
                    data-testid="send"
                    disabled={!is_valid}
                    style={if is_valid { "background-color: green" } else { "background-color: gray" }}
                >
                    {if is_valid { "Send" } else { "Can't Send" }}
                </button>
            </form>
        </div>
    }
}
