use yew::prelude::*;

use crate::components::button::Button;
use crate::components::typography::{Typography, TypographyVariant};
use crate::content::BUSINESS_FEATURES;

#[function_component(Business)]
pub fn business() -> Html {
    html! {
        <section class="section business">
            <style>
            {r#"
            .business .section-inner {
                display: flex;
                gap: 4rem;
                align-items: center;
            }
            .business-copy { flex: 1; }
            .business-copy .typo-body {
                color: rgba(255, 255, 255, 0.7);
                max-width: 470px;
                margin: 1.5rem 0 2rem;
            }
            .business-features {
                flex: 1;
                display: flex;
                flex-direction: column;
                gap: 1.5rem;
            }
            .feature-row {
                display: flex;
                gap: 1.5rem;
                padding: 1.5rem;
                border-radius: 20px;
                transition: background 0.3s ease;
            }
            .feature-row:hover {
                background: linear-gradient(144.39deg, rgba(255, 255, 255, 0.02) -278.56%, rgba(20, 16, 30, 0.9) 91.61%);
            }
            .feature-icon {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 64px;
                height: 64px;
                flex-shrink: 0;
                border-radius: 50%;
                font-size: 1.5rem;
                background: rgba(9, 151, 124, 0.1);
            }
            .feature-row h4 {
                font-size: 1.15rem;
                margin-bottom: 0.5rem;
            }
            .feature-row p {
                color: rgba(255, 255, 255, 0.7);
                line-height: 1.6;
            }
            @media (max-width: 900px) {
                .business .section-inner { flex-direction: column; }
            }
            "#}
            </style>
            <div class="section-inner">
                <div class="business-copy">
                    <Typography
                        variant={TypographyVariant::H2}
                        text="You do the business, we'll handle the money."
                    />
                    <Typography
                        variant={TypographyVariant::Body}
                        gradient=false
                        text="With the right credit card, you can improve your financial life by \
                              building credit, earning rewards and saving money. But with hundreds \
                              of credit cards on the market."
                    />
                    <Button label="Get Started" />
                </div>
                <div class="business-features">
                    {
                        BUSINESS_FEATURES.iter().map(|feature| html! {
                            <div class="feature-row">
                                <div class="feature-icon">{feature.icon}</div>
                                <div>
                                    <h4>{feature.title}</h4>
                                    <p>{feature.content}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
