use yew::prelude::*;

use crate::content::HOME_STATS;

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats-strip">
            <style>
            {r#"
            .stats-strip {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                align-items: center;
                gap: 3rem;
                max-width: 1280px;
                margin: 0 auto;
                padding: 2rem;
                position: relative;
                z-index: 1;
            }
            .stat-item {
                display: flex;
                align-items: center;
                gap: 1rem;
            }
            .stat-value {
                font-size: 2.5rem;
                font-weight: 700;
            }
            .stat-label {
                font-size: 1.1rem;
                letter-spacing: 0.1em;
                text-transform: uppercase;
            }
            "#}
            </style>
            {
                HOME_STATS.iter().map(|stat| html! {
                    <div class="stat-item">
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label text-gradient">{stat.label}</span>
                    </div>
                }).collect::<Html>()
            }
        </section>
    }
}
