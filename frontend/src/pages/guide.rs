use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Step {
    title: &'static str,
    description: &'static str,
    image: Option<&'static str>,
    benefits: &'static [&'static str],
}

const STEPS: [Step; 6] = [
    Step {
        title: "Preencha Suas Informações Básicas",
        description: "Forneça sua idade, peso e altura para um plano adaptado à sua condição física atual.",
        image: Some("/images/dados.png"),
        benefits: &[
            "Cálculo preciso da intensidade ideal dos treinos",
            "Adaptação personalizada das distâncias",
            "Prevenção de lesões através de progressão adequada",
        ],
    },
    Step {
        title: "Selecione Seu Nível Atual",
        description: "Escolha o nível que melhor representa sua experiência com corrida.",
        image: Some("/images/nivel.png"),
        benefits: &[
            "Treinos adequados ao seu nível de experiência",
            "Progressão segura e eficiente",
            "Desafios na medida certa",
        ],
    },
    Step {
        title: "Detalhe Seu Objetivo",
        description: "Quanto mais detalhes você fornecer sobre seus objetivos, melhor será seu plano personalizado.",
        image: Some("/images/objetivo.png"),
        benefits: &[
            "Plano 100% focado no seu objetivo",
            "Metas intermediárias realistas",
            "Adaptação contínua do treino",
        ],
    },
    Step {
        title: "Escolha Seu Plano",
        description: "Selecione o plano que melhor se adapta aos seus objetivos, com garantia de satisfação.",
        image: Some("/images/pagamento.png"),
        benefits: &["Pagamento 100% seguro", "Garantia de 7 dias", "Suporte prioritário"],
    },
    Step {
        title: "Receba a Confirmação",
        description: "Após o pagamento, você receberá um email com a confirmação e seus dados cadastrados.",
        image: Some("/images/confirmacao.png"),
        benefits: &[
            "Confirmação instantânea",
            "Revisão dos dados cadastrados",
            "Instruções detalhadas do próximo passo",
        ],
    },
    Step {
        title: "Seu Plano Personalizado",
        description: "Em poucos minutos, receba seu plano de treino completo e comece sua jornada.",
        image: Some("/images/Planilha.png"),
        benefits: &[
            "Plano detalhado semana a semana",
            "Instruções claras para cada treino",
            "Progressão científica e segura",
        ],
    },
];

// Shown under step 3.
const GOAL_EXAMPLE: &str = "Quero completar minha primeira meia maratona em 6 meses. Atualmente corro 10km em 1h05min, treino 3x por semana. Preciso melhorar minha resistência e tenho dificuldade com respiração em ritmos mais intensos.";

const TESTIMONIALS: [(&str, &str, &str, &str); 3] = [
    (
        "Carlos Silva",
        "Completou sua primeira meia maratona",
        "O plano personalizado foi fundamental para minha evolução. Em 6 meses, saí do zero até completar 21km, minha primeira meia maratona. Estou muito contente com o resultado!",
        "/images/pexels-mvdheuvel-2284163.jpg",
    ),
    (
        "Ana Paula",
        "Melhorou 8min nos 10km",
        "Nunca pensei que conseguiria correr tão rápido. O plano respeitou meus limites e me fez evoluir constantemente.",
        "/images/pexels-runffwpu-1571939.jpg",
    ),
    (
        "Roberto Santos",
        "Perdeu 12kg com o treino",
        "Além da evolução na corrida, o plano me ajudou a transformar meu corpo e minha saúde. Sensacional!",
        "/images/pexels-runffwpu-1578384.jpg",
    ),
];

fn render_step(number: usize, step: &Step) -> Html {
    html! {
        <div class="guide-step">
            <div class="step-number">{number.to_string()}</div>
            <h3>{step.title}</h3>
            if let Some(image) = step.image {
                <img src={image} alt={format!("Exemplo de {}", step.title)} />
            }
            <div class="step-description">
                <p>{step.description}</p>
                if number == 3 {
                    <div class="goal-example">
                        <p class="goal-example-title">{"Exemplo de objetivo bem detalhado:"}</p>
                        <p>{format!("“{}”", GOAL_EXAMPLE)}</p>
                    </div>
                }
            </div>
            <ul>
                { for step.benefits.iter().map(|benefit| html! { <li>{"✔️ "}{*benefit}</li> }) }
            </ul>
        </div>
    }
}

fn render_step_row(first: usize, steps: &[Step]) -> Html {
    let last = steps.len().saturating_sub(1);
    html! {
        <div class="guide-steps">
            { for steps.iter().enumerate().map(|(i, step)| html! {
                <>
                    { render_step(first + i, step) }
                    if i < last {
                        <div class="step-arrow">{"→"}</div>
                    }
                </>
            }) }
        </div>
    }
}

#[function_component(Guide)]
pub fn guide() -> Html {
    let navigator = use_navigator();
    let go_to_form = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Intake);
        }
    });

    html! {
        <div class="guide-page">
            <style>
                {r#"
                .guide-page { min-height: 100vh; background: linear-gradient(to right, #eff6ff, #eef2ff); padding: 3rem 1rem; overflow-x: hidden; }
                .guide-inner { max-width: 1200px; margin: 0 auto; }
                .guide-header { text-align: center; margin-bottom: 4rem; }
                .guide-header h1 {
                    font-size: 3rem;
                    background: linear-gradient(to right, #2563eb, #4f46e5);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .guide-header .lead { font-size: 1.2rem; color: #4b5563; max-width: 760px; margin: 0 auto 2rem; }
                .trust-badges { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 2rem; }
                .trust-badges span { background: white; padding: 0.5rem 0.9rem; border-radius: 999px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); color: #374151; }
                .offer-banner { display: inline-block; background: #2563eb; color: white; padding: 1rem; border-radius: 8px; font-weight: 600; }
                .guide-steps { display: flex; flex-wrap: wrap; justify-content: center; align-items: flex-start; margin-bottom: 4rem; }
                .guide-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                    max-width: 24rem;
                    margin: 0 1rem 2rem;
                    background: white;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 20px rgba(0,0,0,0.08);
                    transition: transform 0.3s;
                }
                .guide-step:hover { transform: translateY(-4px); }
                .step-number {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: linear-gradient(to right, #3b82f6, #2563eb);
                    color: white;
                    font-size: 1.5rem;
                    font-weight: bold;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .guide-step h3 { color: #1e40af; text-align: center; }
                .guide-step img { width: 100%; max-width: 300px; border-radius: 8px; margin-bottom: 1rem; }
                .step-description { text-align: center; color: #4b5563; }
                .goal-example { background: #eff6ff; padding: 1rem; border-radius: 8px; text-align: left; font-size: 0.9rem; }
                .goal-example-title { font-weight: 600; color: #1e40af; }
                .guide-step ul { list-style: none; padding: 0; width: 100%; }
                .guide-step li { font-size: 0.9rem; color: #374151; margin-bottom: 0.5rem; }
                .step-arrow { color: #3b82f6; font-size: 2rem; margin-top: 2rem; }
                .testimonials { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; max-width: 1000px; margin: 0 auto 4rem; }
                .testimonial { background: white; border-radius: 8px; padding: 1.5rem; box-shadow: 0 10px 20px rgba(0,0,0,0.08); }
                .testimonial header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
                .testimonial img { width: 50px; height: 50px; border-radius: 50%; object-fit: cover; }
                .testimonial .achievement { color: #2563eb; font-size: 0.9rem; }
                .testimonial .quote { color: #4b5563; font-style: italic; }
                .guide-cta { background: linear-gradient(to right, #2563eb, #4f46e5); color: white; border-radius: 16px; padding: 3rem; text-align: center; max-width: 900px; margin: 0 auto; }
                .guide-cta .perks { display: flex; justify-content: center; gap: 1.5rem; flex-wrap: wrap; margin-bottom: 2rem; }
                .guide-cta button { background: white; color: #2563eb; border: none; border-radius: 8px; padding: 1rem 2rem; font-size: 1.1rem; font-weight: 600; cursor: pointer; }
                @media (max-width: 768px) {
                    .step-arrow { display: none; }
                    .testimonials { grid-template-columns: 1fr; }
                    .guide-header h1 { font-size: 2rem; }
                    .guide-cta { padding: 1.5rem; }
                }
                "#}
            </style>
            <div class="guide-inner">
                <div class="guide-header">
                    <h1>{"Seu Plano de Treino Personalizado em 6 Passos Simples"}</h1>
                    <p class="lead">
                        {"Em poucos minutos, você terá acesso a um plano de treino profissional adaptado ao seu perfil e objetivos."}
                    </p>
                    <div class="trust-badges">
                        <span>{"👥 +2.500 corredores"}</span>
                        <span>{"⭐ 4.8/5 de satisfação"}</span>
                        <span>{"🛡️ 7 dias de garantia"}</span>
                    </div>
                    <div class="offer-banner">
                        {"🎁 Oferta Especial: 3 Galaxy Fit 3 serão sorteados entre os 100 primeiros compradores!"}
                    </div>
                </div>

                { render_step_row(1, &STEPS[..3]) }
                { render_step_row(4, &STEPS[3..]) }

                <h2 style="text-align: center;">{"O Que Nossos Corredores Dizem"}</h2>
                <div class="testimonials">
                    { for TESTIMONIALS.iter().map(|(name, achievement, quote, image)| html! {
                        <div class="testimonial">
                            <header>
                                <img src={*image} alt={*name} />
                                <div>
                                    <h4>{*name}</h4>
                                    <p class="achievement">{*achievement}</p>
                                </div>
                            </header>
                            <p class="quote">{format!("“{}”", quote)}</p>
                        </div>
                    }) }
                </div>

                <div class="guide-cta">
                    <h2>{"Comece Sua Transformação Hoje"}</h2>
                    <p>
                        {"Junte-se a milhares de corredores que já transformaram seus treinos com a PlannerRun. Seu plano personalizado está a apenas alguns cliques de distância."}
                    </p>
                    <div class="perks">
                        <span>{"⏱️ Pronto em poucos minutos"}</span>
                        <span>{"🛡️ 7 dias de garantia"}</span>
                        <span>{"🏆 Resultados comprovados"}</span>
                    </div>
                    <button onclick={go_to_form}>{"Criar Meu Plano Personalizado →"}</button>
                    <p style="font-size: 0.9rem; opacity: 0.75;">{"Comece agora e receba seu plano em poucos minutos"}</p>
                </div>
            </div>
        </div>
    }
}
