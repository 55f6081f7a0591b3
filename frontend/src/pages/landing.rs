use gloo_timers::callback::Timeout;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::countdown_widget::CountdownWidget;
use crate::config::{CONTACT_EMAIL, HERO_FADE_DELAY_MS};
use crate::models::PlanMonths;
use crate::plan_store;
use crate::Route;

const PITCH_SECTION_ID: &str = "apelativo-section";
const PRICING_SECTION_ID: &str = "pricing-section";

#[derive(Clone, Copy, PartialEq)]
pub struct Plan {
    pub months: u32,
    pub price_cents: u32,
    pub tier: &'static str,
}

pub const PLANS: [Plan; 3] = [
    Plan { months: 4, price_cents: 3990, tier: "Basic" },
    Plan { months: 5, price_cents: 4990, tier: "Intermediary" },
    Plan { months: 6, price_cents: 5690, tier: "Advanced" },
];

const PLAN_FEATURES: [&str; 3] = [
    "Treinos adaptados ao seu perfil",
    "Estratégias de treino baseadas em dados reais",
    "Suporte prioritário para dúvidas e orientações",
];

const BENEFITS: [(&str, &str); 3] = [
    (
        "Plano 100% sob medida para você!",
        "Nada de fórmulas prontas. Planos de treinamento adaptados ao seu perfil usando estratégias modernas.",
    ),
    ("Progressão Inteligente", "Progrida como um atleta de alto nível, sem lesões."),
    ("Aprenda com os melhores", "Beneficie-se de técnicas testadas por campeões."),
];

const TESTIMONIAL_VIDEOS: [&str; 3] = [
    "https://www.youtube.com/shorts/vipdva3TJCM",
    "https://www.youtube.com/shorts/DpF45oM_CbQ",
    "https://www.youtube.com/shorts/CMe63_yuDEw",
];

const FAQ: [(&str, &str); 4] = [
    (
        "Como a IA cria um plano personalizado para mim?",
        "Nossa IA estuda o treinamento de milhares de atletas e ajusta cada detalhe para você. Seu plano será único, respeitando seu ritmo e objetivos, sempre com base em estratégias comprovadas.",
    ),
    (
        "Nunca fiz um treino estruturado. Esse plano é para mim?",
        "Com certeza! Nossa IA ajusta tudo ao seu nível atual, seja você um iniciante ou um corredor experiente. Você evolui no seu ritmo, sem exageros e sem risco de lesões.",
    ),
    (
        "Em quanto tempo verei resultados?",
        "A maioria dos corredores percebe evolução em média de 4 a 6 semanas. Alguns já batem seus recordes pessoais antes mesmo de completar 3 meses!",
    ),
    (
        "Vale o investimento?",
        "Quanto vale ter um plano que otimiza seu tempo e evita lesões? Por menos que um café por dia, você recebe um treinador virtual de ponta e acelera sua evolução.",
    ),
];

/// Formats cents as Brazilian reais, e.g. `R$ 39,90`.
pub fn format_brl(cents: u32) -> String {
    format!("R$ {},{:02}", cents / 100, cents % 100)
}

/// Price per day assuming 30-day months, rounded to the nearest cent.
pub fn daily_cost_cents(plan: &Plan) -> u32 {
    let days = plan.months * 30;
    (plan.price_cents + days / 2) / days
}

pub fn embed_url(video_url: &str) -> String {
    video_url.replace("youtube.com/shorts/", "youtube.com/embed/")
}

fn scroll_to(section_id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id))
    else {
        log::warn!("Section #{} not found", section_id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_callback(section_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| scroll_to(section_id))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_message = use_state(|| false);
    let navigator = use_navigator();

    {
        let show_message = show_message.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(HERO_FADE_DELAY_MS, move || show_message.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let select_plan = |months: u32| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            match PlanMonths::try_from(months) {
                Ok(plan) => plan_store::store(plan),
                Err(m) => log::error!("Plan of {} months isn't sold", m),
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Guide);
            }
        })
    };

    html! {
        <div class="landing">
            <style>
                {r#"
                .landing { display: flex; flex-direction: column; min-height: 100vh; overflow-x: hidden; font-family: Inter, sans-serif; }
                .landing section { padding: 4rem 1rem; }
                .landing .container { max-width: 1100px; margin: 0 auto; }
                .hero {
                    position: relative;
                    height: 100vh;
                    padding: 0 !important;
                    background-image: url('https://media.giphy.com/media/1k1Z46tjQWIAlcXYt6/giphy.gif');
                    background-size: cover;
                    background-position: center;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-message { color: white; text-align: center; opacity: 0; transition: opacity 1s; padding: 0 1rem; }
                .hero-message.visible { opacity: 1; }
                .hero-message h1 { font-size: 3.5rem; margin-bottom: 1rem; }
                .hero-message p { font-size: 1.5rem; margin-bottom: 2rem; }
                .cta-button {
                    background: #2563eb;
                    color: white;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cta-button:hover { background: #1d4ed8; }
                .cta-button.light { background: white; color: #2563eb; }
                .pitch { background: linear-gradient(to right, #93c5fd, white); }
                .pitch h2 { color: #dc2626; text-align: center; }
                .pitch h3 { color: #2563eb; text-align: center; }
                .pitch-card { background: white; padding: 2rem; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.15); }
                .pitch-card p { display: flex; gap: 0.75rem; font-size: 1.1rem; color: #1f2937; }
                .offer { background: #e5e7eb; }
                .offer-grid, .about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
                .offer-grid img, .about-grid img { max-width: 100%; border-radius: 16px; }
                .benefits { background: #eff6ff; }
                .card-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                .card { background: white; padding: 1.5rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); }
                .video-card { aspect-ratio: 16 / 9; }
                .video-card iframe { width: 100%; height: 100%; border: 0; border-radius: 4px; }
                .pricing { background: #f3f4f6; }
                .special-offer {
                    background: linear-gradient(to right, #2563eb, #1e40af);
                    color: white;
                    padding: 1.5rem;
                    border-radius: 12px;
                    max-width: 760px;
                    margin: 0 auto 2.5rem;
                    text-align: center;
                }
                .special-offer .highlight { color: #fde047; font-weight: bold; }
                .plans { display: flex; justify-content: center; gap: 2rem; }
                .plan-card { position: relative; flex: 1; background: white; padding: 2rem; border-radius: 8px; text-align: center; display: flex; flex-direction: column; box-shadow: 0 4px 12px rgba(0,0,0,0.08); }
                .plan-card .daily { position: absolute; top: 0.75rem; right: 0.75rem; background: #3b82f6; color: white; padding: 0.25rem 0.6rem; border-radius: 8px; font-size: 0.85rem; }
                .plan-card .price { font-size: 2.25rem; font-weight: bold; }
                .plan-card ul { text-align: left; flex-grow: 1; padding-left: 1rem; }
                .plan-card .months { color: #2563eb; font-weight: bold; }
                .faq-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                .final-cta { background: #2563eb; color: white; text-align: center; }
                .landing footer { background: #374151; color: white; padding: 1rem; display: flex; justify-content: space-between; align-items: center; }
                .landing footer a { color: white; }
                @media (max-width: 768px) {
                    .offer-grid, .about-grid, .card-grid, .faq-grid { grid-template-columns: 1fr; }
                    .plans { flex-direction: column; }
                    .hero-message h1 { font-size: 2rem; }
                    .hero-message p { font-size: 1.1rem; }
                    .landing footer { flex-direction: column; gap: 1rem; }
                }
                "#}
            </style>
            <main>
                <section class="hero">
                    <div class="hero-overlay">
                        <div class={classes!("hero-message", (*show_message).then(|| "visible"))}>
                            <h1>{"PlannerRun"}</h1>
                            <p>{"Treinamentos Personalizados Criados com Dados de Atletas"}</p>
                            <button class="cta-button" onclick={scroll_callback(PITCH_SECTION_ID)}>
                                {"Comece Sua Jornada →"}
                            </button>
                        </div>
                    </div>
                </section>

                <section id={PITCH_SECTION_ID} class="pitch">
                    <div class="container">
                        <h2>{"🚨 VOCÊ NÃO PRECISA PAGAR UMA FORTUNA 🚨 PARA TER UM TREINO EFICIENTE!"}</h2>
                        <div class="pitch-card">
                            <p><span>{"❌"}</span>{"Consultorias esportivas cobram absurdos por treinos que poderiam ser acessíveis."}</p>
                            <p><span>{"❌"}</span>{"Planos prontos na internet não respeitam seu nível e só te fazem perder tempo."}</p>
                            <p><span>{"❌"}</span>{"Você sente que está estagnado e não sabe como evoluir com segurança?"}</p>
                            <h3>{"🔥 CHEGOU A PLANNERRUN – O TREINAMENTO QUE 🔥 REALMENTE FUNCIONA PARA VOCÊ!"}</h3>
                            <p>
                                <span>{"💡"}</span>
                                {"Geramos um plano de treinamento totalmente personalizado em segundos! Sem mensalidades abusivas, sem treinos genéricos. Nosso sistema usa métodos cientificamente comprovados para criar um treino sob medida para você, respeitando seu nível, sua rotina e seu corpo, garantindo evolução e evitando lesões."}
                            </p>
                            <p><span>{"✅"}</span>{"Sem pagar caro para ter um treino de verdade"}</p>
                            <p><span>{"✅"}</span>{"Treinamento específico para seu corpo e objetivo, sem riscos desnecessários"}</p>
                            <p><span>{"✅"}</span>{"Evolução contínua e segura, sem achismos"}</p>
                            <div style="text-align: center; margin-top: 2rem;">
                                <p style="justify-content: center; font-weight: bold; color: #1d4ed8;">
                                    {"⚡ Pare de gastar dinheiro com consultorias caras! Receba seu plano completo agora e comece a correr do jeito certo!"}
                                </p>
                                <button class="cta-button" onclick={scroll_callback(PRICING_SECTION_ID)}>
                                    {"QUERO MEU PLANO PERSONALIZADO →"}
                                </button>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="offer">
                    <div class="container">
                        <h2 style="text-align: center;">{"O que oferecemos?"}</h2>
                        <div class="offer-grid">
                            <img src="/images/Planilha.png" alt="Plano de Treino Personalizado" />
                            <div>
                                <h3>{"Planos de Treino Personalizados"}</h3>
                                <p>
                                    {"Nossa inteligência artificial analisa seu perfil, objetivos e histórico para criar um plano de treinamento "}
                                    <b>{"exclusivo"}</b>
                                    {". Utilizamos uma abordagem baseada em dados, levando em conta:"}
                                </p>
                                <ul>
                                    <li>{"🏅 Seu nível atual de condicionamento físico"}</li>
                                    <li>{"📈 Seus objetivos específicos de tempo e distância"}</li>
                                    <li>{"⏱️ Sua disponibilidade de tempo para treinos"}</li>
                                    <li>{"✔️ Histórico de lesões e limitações físicas"}</li>
                                </ul>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="benefits">
                    <div class="container">
                        <h2 style="text-align: center;">{"Por que escolher a PlannerRun?"}</h2>
                        <div class="card-grid">
                            { for BENEFITS.iter().map(|(title, description)| html! {
                                <div class="card">
                                    <h3>{"✅ "}{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section>
                    <div class="container">
                        <h2 style="text-align: center;">{"Veja como outros corredores estão melhorando seu desempenho"}</h2>
                        <div class="card-grid">
                            { for TESTIMONIAL_VIDEOS.iter().enumerate().map(|(i, url)| html! {
                                <div class="card video-card">
                                    <iframe
                                        src={embed_url(url)}
                                        title={format!("Depoimento de corredor {}", i + 1)}
                                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                        allowfullscreen=true
                                    ></iframe>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id={PRICING_SECTION_ID} class="pricing">
                    <div class="container">
                        <h2 style="text-align: center;">{"Quanto vale o seu progresso?"}</h2>
                        <div class="special-offer">
                            <h3>{"🎁 OFERTA ESPECIAL LIMITADA! 🎁"}</h3>
                            <p>
                                {"Para os "}<span class="highlight">{"100 primeiros compradores"}</span>
                                {", iremos sortear "}<span class="highlight">{"3 Galaxy Fit 3"}</span>
                                {" para monitorar seus treinos!"}
                            </p>
                            <CountdownWidget />
                        </div>
                        <div class="plans">
                            { for PLANS.iter().map(|plan| html! {
                                <div class="plan-card">
                                    <div class="daily">{format!("{}/dia", format_brl(daily_cost_cents(plan)))}</div>
                                    <h3>{plan.tier}</h3>
                                    <p class="price">{format_brl(plan.price_cents)}</p>
                                    <p>{"Plano de "}<span class="months">{format!("{} meses", plan.months)}</span></p>
                                    <ul>
                                        { for PLAN_FEATURES.iter().map(|feature| html! { <li>{"✔️ "}{*feature}</li> }) }
                                    </ul>
                                    <button class="cta-button" onclick={select_plan(plan.months)}>
                                        {"Comece Agora →"}
                                    </button>
                                </div>
                            }) }
                        </div>
                        <p style="text-align: center; color: #4b5563; margin-top: 2rem;">
                            {"Não perca tempo! Escolha o período que melhor se adapta aos seus objetivos e comece a treinar como um atleta hoje mesmo."}
                        </p>
                    </div>
                </section>

                <section id="quem-somos">
                    <div class="container">
                        <h2 style="text-align: center; color: #1d4ed8;">{"Quem Somos?"}</h2>
                        <div class="about-grid">
                            <img src="/images/im1-removebg-preview.png" alt="Equipe PlannerRun" />
                            <div>
                                <h3>{"🏆 PlannerRun: A Revolução dos Treinos de Corrida Personalizados"}</h3>
                                <p>
                                    {"A PlannerRun nasceu da paixão pela corrida e da necessidade de treinos realmente personalizados. Diferente dos métodos tradicionais, utilizamos inteligência artificial treinada com milhares de dados de corredores profissionais para criar treinos exclusivos."}
                                </p>
                                <h3>{"📈 Tecnologia e Ciência no Seu Treinamento"}</h3>
                                <p>
                                    {"Combinamos ciência esportiva, aprendizado de máquina e análise de performance para gerar treinos otimizados, levando em conta nível de condicionamento, tempo disponível e objetivos individuais."}
                                </p>
                                <h3>{"🛡️ Evolução e Segurança no seu Ritmo"}</h3>
                                <p>
                                    {"Nossa IA aprende e evolui com o seu desempenho, garantindo que cada fase do treinamento seja eficiente e segura. "}
                                    <b>{"Corra no seu melhor ritmo e atinja seus objetivos!"}</b>
                                </p>
                            </div>
                        </div>
                    </div>
                </section>

                <section>
                    <div class="container">
                        <h2 style="text-align: center;">{"Tem perguntas? Nós temos as respostas."}</h2>
                        <p style="text-align: center; color: #374151;">
                            {"Se sua pergunta não estiver aqui, fale com a gente. Queremos que você treine com total confiança!"}
                        </p>
                        <div class="faq-grid">
                            { for FAQ.iter().map(|(question, answer)| html! {
                                <div>
                                    <h3>{*question}</h3>
                                    <p style="color: #4b5563;">{*answer}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="final-cta">
                    <div class="container">
                        <h2>{"Sua História de Campeão Começa Hoje"}</h2>
                        <p>
                            {"Não espere mais para descobrir o que milhares de corredores já sabem: com a PlannerRun, você está a um passo de se tornar um campeão."}
                            <br />
                            <strong>{"Comece hoje e veja a diferença em semanas."}</strong>
                        </p>
                        <button class="cta-button light" onclick={scroll_callback(PRICING_SECTION_ID)}>
                            {"Comece seu treino de elite →"}
                        </button>
                    </div>
                </section>
            </main>

            <footer>
                <img src="/images/im1-removebg-preview.png" alt="PlannerRun Logo" width="100" />
                <Link<Route> to={Route::Guide} classes="footer-link">{"Como funciona"}</Link<Route>>
                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{"✉️ "}{CONTACT_EMAIL}</a>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reais_with_comma() {
        assert_eq!(format_brl(3990), "R$ 39,90");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(10000), "R$ 100,00");
    }

    #[test]
    fn daily_cost_per_plan() {
        let daily: Vec<String> = PLANS.iter().map(|p| format_brl(daily_cost_cents(p))).collect();
        assert_eq!(daily, ["R$ 0,33", "R$ 0,33", "R$ 0,32"]);
    }

    #[test]
    fn every_plan_is_a_sold_duration() {
        for plan in PLANS {
            assert!(PlanMonths::try_from(plan.months).is_ok());
        }
    }

    #[test]
    fn shorts_become_embeds() {
        assert_eq!(
            embed_url("https://www.youtube.com/shorts/vipdva3TJCM"),
            "https://www.youtube.com/embed/vipdva3TJCM"
        );
    }
}
