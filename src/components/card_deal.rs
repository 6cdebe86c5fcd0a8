use yew::prelude::*;

use crate::components::button::Button;
use crate::components::typography::{Typography, TypographyVariant};

#[function_component(CardDeal)]
pub fn card_deal() -> Html {
    html! {
        <section class="section card-deal">
            <style>
            {r#"
            .card-deal .section-inner {
                display: flex;
                gap: 4rem;
                align-items: center;
            }
            .card-deal-copy { flex: 1; }
            .card-deal-copy .typo-body {
                color: rgba(255, 255, 255, 0.7);
                max-width: 470px;
                margin: 1.5rem 0 2rem;
            }
            .card-stack {
                flex: 1;
                position: relative;
                min-height: 280px;
            }
            .card-mock {
                position: absolute;
                width: 300px;
                height: 180px;
                border-radius: 16px;
                padding: 1.5rem;
                background: linear-gradient(135deg, rgba(0, 246, 255, 0.2), rgba(20, 16, 30, 0.95));
                border: 1px solid rgba(0, 246, 255, 0.3);
                font-weight: 600;
                letter-spacing: 0.15em;
            }
            .card-mock.back {
                top: 40px;
                left: 60px;
                opacity: 0.5;
            }
            .card-mock.front {
                top: 0;
                left: 0;
                box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
            }
            @media (max-width: 900px) {
                .card-deal .section-inner { flex-direction: column; }
                .card-stack { width: 100%; }
            }
            "#}
            </style>
            <div class="section-inner">
                <div class="card-deal-copy">
                    <Typography
                        variant={TypographyVariant::H2}
                        text="Find a better card deal in few easy steps."
                    />
                    <Typography
                        variant={TypographyVariant::Body}
                        gradient=false
                        text="Arcu tortor, purus in mattis at sed integer faucibus. Aliquet quis \
                              aliquet eget mauris tortor ac aliquet."
                    />
                    <Button label="Get Started" />
                </div>
                <div class="card-stack">
                    <div class="card-mock back"></div>
                    <div class="card-mock front">
                        {"HOOBANK"}
                        <div style="margin-top: 3rem; color: rgba(255,255,255,0.7);">
                            {"•••• •••• •••• 4521"}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
