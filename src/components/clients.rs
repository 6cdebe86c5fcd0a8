use yew::prelude::*;

use crate::content::CLIENTS;

#[function_component(Clients)]
pub fn clients() -> Html {
    html! {
        <section class="clients-strip">
            <style>
            {r#"
            .clients-strip {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                align-items: center;
                gap: 4rem;
                max-width: 1280px;
                margin: 0 auto;
                padding: 3rem 2rem;
                position: relative;
                z-index: 1;
            }
            .client-logo {
                font-size: 1.6rem;
                font-weight: 600;
                color: rgba(255, 255, 255, 0.4);
                letter-spacing: 0.05em;
                transition: color 0.3s ease;
            }
            .client-logo:hover {
                color: rgba(255, 255, 255, 0.9);
            }
            "#}
            </style>
            {
                CLIENTS.iter().map(|client| html! {
                    <span class="client-logo">{*client}</span>
                }).collect::<Html>()
            }
        </section>
    }
}
