use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::config::CONTACT_EMAIL;
use crate::models::{PaymentLookupKey, PaymentRecord};
use crate::tasks::use_mount_task;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum LookupState {
    Loading,
    Loaded(PaymentRecord),
    Failed,
    /// The provider sent the buyer back without any identifier we know.
    NoReference,
}

impl LookupState {
    pub fn initial(key: Option<&PaymentLookupKey>) -> Self {
        match key {
            Some(_) => LookupState::Loading,
            None => LookupState::NoReference,
        }
    }

    pub fn settle(result: Result<PaymentRecord, ApiError>) -> Self {
        match result {
            Ok(record) => LookupState::Loaded(record),
            Err(e) => {
                log::error!("Failed to fetch payment details: {}", e);
                LookupState::Failed
            }
        }
    }
}

/// Labelled rows shown for a confirmed purchase, in display order.
pub fn record_rows(record: &PaymentRecord) -> [(&'static str, String); 8] {
    [
        ("Email", record.email.clone()),
        ("Altura", format!("{} cm", record.altura)),
        ("Peso", format!("{} kg", record.peso)),
        ("Idade", format!("{} anos", record.idade)),
        ("Objetivo", record.objetivo.clone()),
        ("Dias disponíveis", format!("{} dias/semana", record.dias)),
        ("Meses de acompanhamento", format!("{} meses", record.meses)),
        ("Nível", record.nivel.clone()),
    ]
}

fn render_record(record: &PaymentRecord) -> Html {
    let rows = record_rows(record);
    html! {
        <>
            <p class="lead">
                {"Obrigado por adquirir com a PlannerRun! Sua planilha será enviada para o email cadastrado assim que um dos nossos profissionais analisar se os dados estão corretos."}
            </p>
            <div class="record">
                <h2>{"Seus dados cadastrados:"}</h2>
                <ul>
                    { for rows.into_iter().map(|(label, value)| html! {
                        <li><strong>{format!("{}:", label)}</strong>{" "}{value}</li>
                    }) }
                </ul>
            </div>
        </>
    }
}

#[function_component(Success)]
pub fn success() -> Html {
    let session_id = use_search_param("session_id".to_string());
    let external_reference = use_search_param("external_reference".to_string());
    let key = PaymentLookupKey::from_query(session_id, external_reference);
    let state = {
        let key = key.clone();
        use_state(move || LookupState::initial(key.as_ref()))
    };

    {
        let set_state = state.setter();
        use_mount_task(move |lifetime| async move {
            let Some(key) = key else {
                log::info!("No payment identifier in the URL, skipping lookup");
                return;
            };
            let next = LookupState::settle(api::fetch_payment_details(&key).await);
            lifetime.run_if_alive(|| set_state.set(next));
        });
    }

    let navigator = use_navigator();
    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Landing);
        }
    });

    html! {
        <div class="success-page">
            <style>
                {r#"
                .success-page { min-height: 100vh; display: flex; align-items: center; justify-content: center; background: linear-gradient(to right, #2563eb, #1e40af); color: white; padding: 1.5rem; }
                .success-card { background: rgba(255,255,255,0.2); backdrop-filter: blur(12px); padding: 2rem; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.2); text-align: center; max-width: 32rem; }
                .success-card .check { font-size: 4rem; color: #4ade80; }
                .success-card h1 { font-size: 1.9rem; }
                .success-card .lead { font-size: 1.1rem; }
                .success-card .record { background: white; color: #1f2937; text-align: left; border-radius: 8px; padding: 1rem; margin-top: 1rem; }
                .success-card .record h2 { font-size: 1.1rem; margin-top: 0; }
                .success-card .record ul { list-style: none; padding: 0; font-size: 0.9rem; }
                .success-card .error { color: #f87171; }
                .success-card button { margin-top: 1.5rem; padding: 0.75rem 1.5rem; border: none; border-radius: 8px; background: #22c55e; color: white; font-weight: 600; cursor: pointer; }
                .success-card button:hover { background: #16a34a; }
                "#}
            </style>
            <div class="success-card">
                <div class="check">{"✔"}</div>
                <h1>{"Compra Concluída!"}</h1>
                {
                    match &*state {
                        LookupState::Loading => html! { <p class="lead">{"Carregando informações..."}</p> },
                        LookupState::Loaded(record) => render_record(record),
                        LookupState::Failed => html! { <p class="error">{"Erro ao carregar os dados do pagamento."}</p> },
                        LookupState::NoReference => html! {},
                    }
                }
                <p>
                    {"Caso tenha alguma dúvida, entre em contato conosco pelo email: "}
                    <strong>{CONTACT_EMAIL}</strong>
                </p>
                <button onclick={go_home}>{"Voltar para a Página Inicial"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PaymentRecord {
        PaymentRecord {
            user_id: Some(7),
            email: "ana@example.com".to_string(),
            altura: 165.0,
            peso: 58.0,
            idade: 31,
            objetivo: "Correr 10km abaixo de 50 minutos".to_string(),
            dias: 3,
            meses: 4,
            nivel: "Intermediário".to_string(),
        }
    }

    #[test]
    fn lookup_starts_loading_only_with_a_key() {
        let key = PaymentLookupKey::SessionId("cs_1".to_string());
        assert_eq!(LookupState::initial(Some(&key)), LookupState::Loading);
        assert_eq!(LookupState::initial(None), LookupState::NoReference);
    }

    #[test]
    fn successful_lookup_shows_the_record() {
        assert_eq!(LookupState::settle(Ok(record())), LookupState::Loaded(record()));
    }

    #[test]
    fn loaded_record_lists_every_field_with_its_label() {
        let rows = record_rows(&record());
        let expected = [
            ("Email", "ana@example.com"),
            ("Altura", "165 cm"),
            ("Peso", "58 kg"),
            ("Idade", "31 anos"),
            ("Objetivo", "Correr 10km abaixo de 50 minutos"),
            ("Dias disponíveis", "3 dias/semana"),
            ("Meses de acompanhamento", "4 meses"),
            ("Nível", "Intermediário"),
        ];
        for ((label, value), (want_label, want_value)) in rows.iter().zip(expected) {
            assert_eq!(*label, want_label);
            assert_eq!(value, want_value);
        }
    }

    #[test]
    fn decimal_measurements_keep_their_fraction() {
        let mut record = record();
        record.altura = 172.5;
        record.peso = 64.3;
        let rows = record_rows(&record);
        assert_eq!(rows[1].1, "172.5 cm");
        assert_eq!(rows[2].1, "64.3 kg");
    }

    #[test]
    fn failed_lookup_is_an_error_not_loading() {
        assert_eq!(LookupState::settle(Err(ApiError::Status(500))), LookupState::Failed);
        assert_eq!(LookupState::settle(Err(ApiError::Status(404))), LookupState::Failed);
    }
}
