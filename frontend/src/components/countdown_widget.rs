use chrono::Utc;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::api;
use crate::config::{self, TICK_MS};
use crate::countdown::{remaining_slots, sold_percent, time_left, TimeLeft};
use crate::tasks::{use_interval_task, use_mount_task};

fn current_time_left() -> TimeLeft {
    match config::offer_deadline() {
        Some(deadline) => time_left(deadline, Utc::now()),
        None => TimeLeft::default(),
    }
}

/// Offer countdown plus the "slots left" bar. Shows a skeleton until the
/// first tick has run.
#[styled_component(CountdownWidget)]
pub fn countdown_widget() -> Html {
    let left = use_state(|| None::<TimeLeft>);
    let buyers = use_state(|| 0u32);

    {
        let set_left = left.setter();
        use_interval_task(TICK_MS, move || set_left.set(Some(current_time_left())));
    }

    {
        let set_buyers = buyers.setter();
        use_mount_task(move |lifetime| async move {
            match api::fetch_buyer_count().await {
                Ok(count) => lifetime.run_if_alive(|| set_buyers.set(count.count)),
                Err(e) => log::error!("Failed to fetch buyer count: {}", e),
            }
        });
    }

    let tiles = css!(
        r#"
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.75rem;
        margin-bottom: 1rem;

        .tile {
            background: #1e3a8a;
            padding: 0.6rem;
            border-radius: 8px;
            width: 4.5rem;
        }
        .tile .value { font-size: 1.6rem; font-weight: bold; }
        .tile .unit { font-size: 0.75rem; }
        .tile .bar { height: 1.6rem; background: #1d4ed8; border-radius: 4px; margin-bottom: 0.25rem; }
        .tile .bar.short { height: 0.8rem; width: 50%; margin: 0 auto; }
        "#
    );
    let slots = css!(
        r#"
        margin-bottom: 1rem;

        .track {
            height: 1rem;
            background: #e5e7eb;
            border-radius: 999px;
            overflow: hidden;
        }
        .fill {
            height: 100%;
            background: #ef4444;
            transition: width 0.5s;
        }
        .notice { margin-top: 0.5rem; color: #fde047; font-weight: bold; }
        .placeholder { height: 1.5rem; width: 75%; margin: 0.5rem auto 0; background: #d1d5db; border-radius: 4px; }
        "#
    );

    let Some(left) = *left else {
        return html! {
            <div class="countdown skeleton" aria-busy="true">
                <div class={tiles}>
                    { for (0..4).map(|_| html! {
                        <div class="tile">
                            <div class="bar"></div>
                            <div class="bar short"></div>
                        </div>
                    }) }
                </div>
                <div class={slots}>
                    <div class="track"></div>
                    <div class="placeholder"></div>
                </div>
            </div>
        };
    };

    let buyers = *buyers;
    let units = [
        (left.days, "Dias"),
        (left.hours, "Horas"),
        (left.minutes, "Minutos"),
        (left.seconds, "Segundos"),
    ];

    html! {
        <div class="countdown">
            <div class={tiles}>
                { for units.iter().map(|(value, unit)| html! {
                    <div class="tile">
                        <div class="value">{value.to_string()}</div>
                        <div class="unit">{*unit}</div>
                    </div>
                }) }
            </div>
            <div class={slots}>
                <div class="track">
                    <div class="fill" style={format!("width: {}%;", sold_percent(buyers))}></div>
                </div>
                <p class="notice">
                    {format!(
                        "Apenas {} vagas restantes! Já temos {} compradores.",
                        remaining_slots(buyers),
                        buyers
                    )}
                </p>
            </div>
        </div>
    }
}
