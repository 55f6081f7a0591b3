use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::form_field::FormField;
use crate::intake::validation::{validate, Field, FieldErrors, IntakeDraft};
use crate::models::{CheckoutSession, ExperienceLevel, PlanMonths};
use crate::plan_store;
use crate::tasks::use_view_lifetime;

const SUBMIT_FAILED: &str = "Ocorreu um erro ao processar seu pedido. Por favor, tente novamente.";

const GOAL_TOOLTIP: &str = "Descreva seu objetivo de corrida em detalhes. Informe também seu progresso com as corridas.

Por exemplo:
- \"Quero melhorar minha resistência para completar uma meia maratona. Hoje em dia já consigo correr 15km com uma leve dificuldade.\"
- \"Desejo apenas melhorar minha performance.\"";

fn level_tooltip() -> String {
    ExperienceLevel::ALL
        .iter()
        .map(|level| format!("{}: {}", level.label(), level.description()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn control_value<E: TargetCast>(e: &E) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Keeps `field` of the draft in sync with the control that fired `E`.
fn bind<E: TargetCast + 'static>(draft: &UseStateHandle<IntakeDraft>, field: Field) -> Callback<E> {
    let draft = draft.clone();
    Callback::from(move |e: E| {
        let mut next = (*draft).clone();
        next.set(field, control_value(&e));
        draft.set(next);
    })
}

/// What the form does once the checkout request settles.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Redirect(String),
    ShowError,
}

impl SubmitOutcome {
    pub fn from_checkout(result: Result<CheckoutSession, ApiError>) -> Self {
        match result {
            Ok(session) if !session.url.trim().is_empty() => SubmitOutcome::Redirect(session.url),
            Ok(_) => {
                log::error!("Checkout session came back without a URL");
                SubmitOutcome::ShowError
            }
            Err(e) => {
                log::error!("Failed to create checkout session: {}", e);
                SubmitOutcome::ShowError
            }
        }
    }
}

/// Lets one checkout request through at a time.
#[derive(Debug, Default)]
pub struct SubmitGate {
    busy: bool,
}

impl SubmitGate {
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn release(&mut self) {
        self.busy = false;
    }
}

fn redirect_to(url: &str) -> bool {
    match window().map(|w| w.location().set_href(url)) {
        Some(Ok(())) => true,
        _ => {
            log::error!("Could not navigate to checkout at {}", url);
            false
        }
    }
}

fn initial_draft() -> IntakeDraft {
    let mut draft = IntakeDraft::default();
    if let Some(months) = plan_store::take() {
        log::info!("Pre-selecting plan of {} months", months);
        draft.months = months.to_string();
    }
    draft
}

#[function_component(Intake)]
pub fn intake() -> Html {
    let draft = use_state(initial_draft);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);
    let message = use_state(|| None::<&'static str>);
    let gate = use_mut_ref(SubmitGate::default);
    let lifetime = use_view_lifetime();

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !gate.borrow_mut().try_begin() {
                return;
            }
            message.set(None);
            let submission = match validate(&draft) {
                Ok(submission) => submission,
                Err(field_errors) => {
                    log::debug!("Intake form rejected, {} invalid fields", field_errors.len());
                    errors.set(field_errors);
                    gate.borrow_mut().release();
                    return;
                }
            };
            errors.set(FieldErrors::default());
            submitting.set(true);

            let submitting = submitting.clone();
            let message = message.clone();
            let gate = gate.clone();
            let lifetime = lifetime.clone();
            spawn_local(async move {
                let outcome = SubmitOutcome::from_checkout(api::create_checkout_session(&submission).await);
                if let SubmitOutcome::Redirect(url) = &outcome {
                    // Leave the form locked while the browser leaves the page.
                    if redirect_to(url) {
                        return;
                    }
                }
                gate.borrow_mut().release();
                lifetime.run_if_alive(|| {
                    message.set(Some(SUBMIT_FAILED));
                    submitting.set(false);
                });
            });
        })
    };

    let value = |field: Field| AttrValue::from(draft.value(field).to_string());

    html! {
        <div class="intake-page">
            <style>
                {r#"
                .intake-page { min-height: 100vh; background: linear-gradient(to right, #1e40af, #312e81); display: flex; align-items: center; justify-content: center; padding: 2rem 1rem; }
                .intake-card { width: 100%; max-width: 80rem; display: flex; border-radius: 24px; overflow: hidden; box-shadow: 0 20px 40px rgba(0,0,0,0.3); }
                .intake-visual { position: relative; width: 50%; background-image: url('/images/Planilha.png'); background-size: cover; background-position: center 20%; }
                .intake-visual .caption { position: absolute; bottom: 0; left: 0; right: 0; padding: 2rem; background: rgba(0,0,0,0.85); color: white; text-align: center; }
                .intake-visual .caption strong { color: #60a5fa; font-size: 1.25rem; display: block; margin-bottom: 0.5rem; }
                .intake-form-side { width: 50%; background: #f8f8ff; padding: 2rem; display: flex; flex-direction: column; }
                .intake-form-side h1 { text-align: center; color: #2563eb; font-size: 1.6rem; }
                .benefit-box { background: #eff6ff; border-left: 4px solid #3b82f6; border-radius: 12px; padding: 0.75rem 1rem; margin-bottom: 1rem; }
                .benefit-box h2 { font-size: 1.1rem; color: #1d4ed8; margin: 0 0 0.25rem; }
                .benefit-box ul { display: grid; grid-template-columns: 1fr 1fr; gap: 0.25rem; list-style: none; padding: 0; margin: 0; font-size: 0.9rem; }
                .intake-form { display: flex; flex-direction: column; gap: 0.5rem; }
                .field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
                .form-field { position: relative; margin-bottom: 0.75rem; }
                .form-field-label { display: block; color: #374151; font-weight: 500; margin-bottom: 0.25rem; }
                .form-field input, .form-field select, .form-field textarea { width: 100%; padding: 0.5rem; border-radius: 8px; border: 1px solid #d1d5db; box-sizing: border-box; }
                .form-field textarea { min-height: 80px; max-height: 120px; }
                .form-field.has-error input, .form-field.has-error select, .form-field.has-error textarea { border-color: #ef4444; }
                .form-field-error { display: block; color: #ef4444; font-size: 0.75rem; margin-top: 0.25rem; }
                .field-tooltip { position: relative; margin-left: 0.5rem; color: #3b82f6; cursor: pointer; }
                .field-tooltip-text { display: none; position: absolute; left: 0; bottom: 1.5rem; z-index: 50; width: 16rem; background: white; color: #1f2937; font-size: 0.85rem; font-weight: normal; border-radius: 8px; padding: 0.5rem; box-shadow: 0 4px 12px rgba(0,0,0,0.2); }
                .field-tooltip:hover .field-tooltip-text { display: block; }
                .submit-button { width: 100%; padding: 0.9rem; margin-top: 0.75rem; border: none; border-radius: 8px; background: linear-gradient(to right, #2563eb, #4f46e5); color: white; font-size: 1.1rem; font-weight: 600; cursor: pointer; }
                .submit-button:disabled { opacity: 0.5; cursor: default; }
                .spinner { display: inline-block; width: 18px; height: 18px; margin-right: 0.75rem; border: 3px solid rgba(255,255,255,.3); border-radius: 50%; border-top-color: #fff; animation: spin 1s ease-in-out infinite; vertical-align: middle; }
                @keyframes spin { to { transform: rotate(360deg); } }
                .guarantee { text-align: center; color: #4b5563; font-size: 0.9rem; margin-top: 0.75rem; }
                .form-message { padding: 1rem; border-radius: 8px; background: #fee2e2; color: #b91c1c; border: 1px solid #f87171; }
                @media (max-width: 768px) {
                    .intake-visual { display: none; }
                    .intake-form-side { width: 100%; padding: 1rem; }
                    .field-row, .benefit-box ul { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="intake-card">
                <div class="intake-visual">
                    <div class="caption">
                        <strong>{"Tecnologia a seu Favor"}</strong>
                        {"Utilizamos inteligência artificial para montar o melhor treino para você."}
                    </div>
                </div>
                <div class="intake-form-side">
                    <h1>{"Crie seu Plano de Treino Personalizado em Minutos"}</h1>
                    <div class="benefit-box">
                        <h2>{"Benefícios do seu plano personalizado:"}</h2>
                        <ul>
                            <li>{"✅ Treinos adaptados ao seu nível"}</li>
                            <li>{"✅ Progressão segura sem lesões"}</li>
                            <li>{"✅ Baseado em dados de atletas"}</li>
                            <li>{"✅ Resultados em semanas"}</li>
                        </ul>
                    </div>

                    <form class="intake-form" {onsubmit} novalidate=true>
                        <FormField label="Email" error={errors.get(Field::Email)}>
                            <input
                                type="email"
                                placeholder="Digite seu email"
                                value={value(Field::Email)}
                                oninput={bind::<InputEvent>(&draft, Field::Email)}
                            />
                        </FormField>

                        <div class="field-row">
                            <FormField label="Idade" error={errors.get(Field::Age)}>
                                <input
                                    type="number"
                                    placeholder="Sua idade"
                                    value={value(Field::Age)}
                                    oninput={bind::<InputEvent>(&draft, Field::Age)}
                                />
                            </FormField>
                            <FormField label="Nível atual" error={errors.get(Field::Level)} tooltip={level_tooltip()}>
                                <select onchange={bind::<Event>(&draft, Field::Level)}>
                                    <option value="" selected={draft.level.is_empty()}>{"Selecione seu nível"}</option>
                                    { for ExperienceLevel::ALL.iter().map(|level| html! {
                                        <option value={level.label()} selected={draft.level == level.label()}>
                                            {level.label()}
                                        </option>
                                    }) }
                                </select>
                            </FormField>
                        </div>

                        <div class="field-row">
                            <FormField label="Altura (cm)" error={errors.get(Field::Height)}>
                                <input
                                    type="number"
                                    step="any"
                                    placeholder="Sua altura em cm"
                                    value={value(Field::Height)}
                                    oninput={bind::<InputEvent>(&draft, Field::Height)}
                                />
                            </FormField>
                            <FormField label="Peso (kg)" error={errors.get(Field::Weight)}>
                                <input
                                    type="number"
                                    step="any"
                                    placeholder="Seu peso em kg"
                                    value={value(Field::Weight)}
                                    oninput={bind::<InputEvent>(&draft, Field::Weight)}
                                />
                            </FormField>
                        </div>

                        <div class="field-row">
                            <FormField label="Dias disponíveis por semana" error={errors.get(Field::DaysPerWeek)}>
                                <select onchange={bind::<Event>(&draft, Field::DaysPerWeek)}>
                                    <option value="" selected={draft.days_per_week.is_empty()}>{"Selecione os dias"}</option>
                                    { for (1..=5u32).map(|day| html! {
                                        <option value={day.to_string()} selected={draft.days_per_week == day.to_string()}>
                                            {format!("{} {}", day, if day == 1 { "dia" } else { "dias" })}
                                        </option>
                                    }) }
                                </select>
                            </FormField>
                            <FormField label="Meses de acompanhamento" error={errors.get(Field::Months)}>
                                <select onchange={bind::<Event>(&draft, Field::Months)}>
                                    <option value="" selected={draft.months.is_empty()}>{"Selecione o plano"}</option>
                                    { for PlanMonths::ALLOWED.iter().map(|months| html! {
                                        <option value={months.to_string()} selected={draft.months == months.to_string()}>
                                            {format!("{} meses", months)}
                                        </option>
                                    }) }
                                </select>
                            </FormField>
                        </div>

                        <FormField label="Objetivo" error={errors.get(Field::Goal)} tooltip={GOAL_TOOLTIP}>
                            <textarea
                                rows="3"
                                placeholder="Descreva seu objetivo com o treinamento"
                                value={value(Field::Goal)}
                                oninput={bind::<InputEvent>(&draft, Field::Goal)}
                            />
                        </FormField>

                        <button type="submit" class="submit-button" disabled={*submitting}>
                            if *submitting {
                                <span class="spinner"></span>{"Gerando seu plano..."}
                            } else {
                                {"Gerar Meu Plano de Treinamento Agora →"}
                            }
                        </button>

                        <div class="guarantee">
                            <p>{"🛡️ Garantia de satisfação ou seu dinheiro de volta em até 7 dias."}</p>
                            <p>{"Seus dados estão seguros e protegidos."}</p>
                        </div>

                        if let Some(text) = *message {
                            <div class="form-message">{text}</div>
                        }
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_url_is_followed_verbatim() {
        let url = "https://checkout.stripe.com/c/pay/cs_test_a1?locale=pt-BR#fragment";
        let session = CheckoutSession { url: url.to_string() };
        assert_eq!(
            SubmitOutcome::from_checkout(Ok(session)),
            SubmitOutcome::Redirect(url.to_string())
        );
    }

    #[test]
    fn failed_checkout_shows_the_retry_message() {
        assert_eq!(SubmitOutcome::from_checkout(Err(ApiError::Status(500))), SubmitOutcome::ShowError);
        let blank = CheckoutSession { url: "  ".to_string() };
        assert_eq!(SubmitOutcome::from_checkout(Ok(blank)), SubmitOutcome::ShowError);
    }

    #[test]
    fn second_submit_is_dropped_while_one_is_in_flight() {
        let mut gate = SubmitGate::default();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        assert!(!gate.try_begin());
        gate.release();
        assert!(gate.try_begin());
    }
}
