use yew::prelude::*;

use crate::components::button::Button;
use crate::components::typography::{Typography, TypographyVariant};

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="section cta">
            <style>
            {r#"
            .cta-box {
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 2rem;
                max-width: 1000px;
                margin: 0 auto;
                padding: 4rem;
                border-radius: 20px;
                background: linear-gradient(144.39deg, rgba(255, 255, 255, 0.04) -278.56%, rgba(20, 16, 30, 0.95) 91.61%);
                border: 1px solid #3F3E45;
                box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
            }
            .cta-copy .typo-body {
                color: rgba(255, 255, 255, 0.7);
                max-width: 470px;
                margin-top: 1rem;
            }
            @media (max-width: 900px) {
                .cta-box { flex-direction: column; text-align: center; }
            }
            "#}
            </style>
            <div class="cta-box">
                <div class="cta-copy">
                    <Typography
                        variant={TypographyVariant::H2}
                        text="Let's try our service now!"
                    />
                    <Typography
                        variant={TypographyVariant::Body}
                        gradient=false
                        text="Everything you need to accept card payments and grow your business \
                              anywhere on the planet."
                    />
                </div>
                <Button label="Get Started" />
            </div>
        </section>
    }
}
