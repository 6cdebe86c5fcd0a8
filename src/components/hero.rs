use yew::prelude::*;

use crate::components::get_started::GetStarted;
use crate::components::typography::{Typography, TypographyVariant};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
            {r#"
            .hero {
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 3rem;
                max-width: 1280px;
                margin: 0 auto;
                padding: 10rem 2rem 6rem;
                position: relative;
                z-index: 1;
            }
            .hero-copy {
                flex: 1;
                max-width: 640px;
            }
            .discount-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.4rem 1rem;
                margin-bottom: 1.5rem;
                border-radius: 10px;
                background: linear-gradient(125deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0));
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.95rem;
            }
            .discount-badge b {
                color: #ffffff;
                font-weight: 600;
            }
            .hero-paragraph {
                color: rgba(255, 255, 255, 0.7);
                font-size: 1.1rem;
                line-height: 1.7;
                max-width: 470px;
                margin-top: 1.5rem;
            }
            .hero-orbs {
                position: relative;
                flex: 1;
                min-height: 420px;
            }
            .hero-orb {
                position: absolute;
                border-radius: 50%;
                filter: blur(60px);
            }
            .hero-cta-desktop {
                position: absolute;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
            }
            @media (max-width: 900px) {
                .hero {
                    flex-direction: column;
                    padding-top: 8rem;
                }
                .hero-orbs { display: none; }
                .hero-cta-mobile { margin-top: 2rem; }
            }
            @media (min-width: 901px) {
                .hero-cta-mobile { display: none; }
            }
            "#}
            </style>
            <div class="hero-copy">
                <div class="discount-badge">
                    {"💎 "}<b>{"20% DISCOUNT"}</b>{" FOR "}<b>{"1 MONTH"}</b>{" ACCOUNT"}
                </div>
                <Typography
                    variant={TypographyVariant::H1}
                    text="The Next Generation Payment Method."
                    animated=true
                />
                <p class="hero-paragraph">
                    {"Our team of experts uses a methodology to identify the credit cards \
                      most likely to fit your needs. We examine annual percentage rates, \
                      annual fees."}
                </p>
                <div class="hero-cta-mobile">
                    <GetStarted />
                </div>
            </div>
            <div class="hero-orbs">
                <div class="hero-orb" style="top: 0; right: 10%; width: 16rem; height: 16rem; background: rgba(0, 246, 255, 0.25);"></div>
                <div class="hero-orb" style="bottom: 10%; left: 0; width: 12rem; height: 12rem; background: rgba(126, 178, 255, 0.25);"></div>
                <div class="hero-cta-desktop">
                    <GetStarted />
                </div>
            </div>
        </section>
    }
}
