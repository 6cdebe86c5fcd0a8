use yew::prelude::*;

use crate::components::typography::{Typography, TypographyVariant};

#[function_component(Billing)]
pub fn billing() -> Html {
    html! {
        <section class="section billing">
            <style>
            {r#"
            .billing .section-inner {
                display: flex;
                gap: 4rem;
                align-items: center;
            }
            .billing-visual {
                flex: 1;
                position: relative;
                min-height: 320px;
            }
            .billing-card-mock {
                position: relative;
                max-width: 420px;
                margin: 0 auto;
                padding: 2.5rem;
                border-radius: 20px;
                background: linear-gradient(144.39deg, rgba(255, 255, 255, 0.04) -278.56%, rgba(20, 16, 30, 0.95) 91.61%);
                border: 1px solid #3F3E45;
                box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
            }
            .billing-card-mock .row {
                display: flex;
                justify-content: space-between;
                color: rgba(255, 255, 255, 0.7);
                padding: 0.75rem 0;
                border-bottom: 1px solid rgba(63, 62, 69, 0.5);
            }
            .billing-card-mock .row:last-child { border-bottom: none; }
            .billing-copy { flex: 1; }
            .billing-copy .typo-body {
                color: rgba(255, 255, 255, 0.7);
                max-width: 470px;
                margin: 1.5rem 0 2rem;
            }
            .store-badges {
                display: flex;
                gap: 1rem;
            }
            .store-badge {
                padding: 0.75rem 1.5rem;
                border-radius: 10px;
                border: 1px solid #3F3E45;
                background: rgba(0, 0, 0, 0.4);
                color: #ffffff;
                cursor: pointer;
                transition: border-color 0.3s ease;
            }
            .store-badge:hover { border-color: #00f6ff; }
            @media (max-width: 900px) {
                .billing .section-inner { flex-direction: column-reverse; }
            }
            "#}
            </style>
            <div class="section-inner">
                <div class="billing-visual">
                    <div class="billing-card-mock">
                        <div class="row"><span>{"Monthly statement"}</span><span>{"$1,420.50"}</span></div>
                        <div class="row"><span>{"Pending invoices"}</span><span>{"3"}</span></div>
                        <div class="row"><span>{"Auto-pay"}</span><span class="text-gradient">{"Enabled"}</span></div>
                    </div>
                </div>
                <div class="billing-copy">
                    <Typography
                        variant={TypographyVariant::H2}
                        text="Easily control your billing & invoicing."
                    />
                    <Typography
                        variant={TypographyVariant::Body}
                        gradient=false
                        text="Elit enim sed massa etiam. Mauris eu adipiscing ultrices ametodio \
                              aenean neque. Fusce ipsum orci rhoncus aliporttitor integer platea \
                              placerat."
                    />
                    <div class="store-badges">
                        <button class="store-badge">{"🍎 App Store"}</button>
                        <button class="store-badge">{"▶ Google Play"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
