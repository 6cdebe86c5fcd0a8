use yew::prelude::*;

use crate::components::background::{AnimatedBackground, BackgroundVariant};
use crate::components::button::Button;
use crate::components::count_up::CountUp;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::{use_reveal_on_scroll, use_scroll_to_top};
use crate::components::typography::{Typography, TypographyVariant};
use crate::content::{NETWORK_STATS, ONBOARDING_STEPS, PLATFORM_FEATURES};

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    use_scroll_to_top();
    use_reveal_on_scroll();

    html! {
        <div class="how-page">
            <style>
            {r#"
            .how-page {
                position: relative;
                min-height: 100vh;
            }
            .how-hero {
                text-align: center;
                padding: 12rem 2rem 4rem;
                position: relative;
                z-index: 1;
            }
            .how-hero .typo-subtitle {
                color: rgba(255, 255, 255, 0.7);
                max-width: 800px;
                margin: 2rem auto 3rem;
            }
            .how-hero .accent { color: #00f6ff; font-weight: 600; }
            .network-stats {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 2rem;
                max-width: 900px;
                margin: 0 auto 3rem;
            }
            .network-stat .count-up {
                font-size: 2.75rem;
                font-weight: 700;
                background: linear-gradient(45deg, #00f6ff, #7EB2FF);
                -webkit-background-clip: text;
                background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .network-stat .label {
                color: rgba(255, 255, 255, 0.7);
                margin-top: 0.5rem;
            }
            .steps-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                gap: 3rem;
                margin-top: 4rem;
            }
            .step-card {
                position: relative;
                padding-top: 3rem;
            }
            .step-number {
                position: absolute;
                top: -1.5rem;
                left: 2rem;
                width: 60px;
                height: 60px;
                display: flex;
                align-items: center;
                justify-content: center;
                border-radius: 16px;
                font-size: 1.25rem;
                font-weight: 700;
                color: #00040f;
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
            }
            .step-icon { font-size: 2.5rem; margin-bottom: 1.5rem; }
            .step-card p {
                color: rgba(255, 255, 255, 0.7);
                line-height: 1.7;
                margin: 1rem 0 1.5rem;
            }
            .step-feature {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                padding: 0.4rem 0;
            }
            .step-feature .check { color: #00f6ff; }
            .platform-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                gap: 2rem;
                margin-top: 4rem;
            }
            .platform-card .icon { font-size: 3rem; margin-bottom: 1.5rem; }
            .platform-card p {
                color: rgba(255, 255, 255, 0.7);
                line-height: 1.7;
                margin: 1rem 0 1.5rem;
            }
            .platform-card .stats-tag {
                color: #00f6ff;
                font-weight: 600;
            }
            .section-header {
                text-align: center;
                max-width: 760px;
                margin: 0 auto;
            }
            .section-header .typo-body {
                color: rgba(255, 255, 255, 0.7);
                margin-top: 1.5rem;
            }
            .closing-cta {
                text-align: center;
                max-width: 900px;
                margin: 0 auto;
                padding: 5rem 3rem;
                border-radius: 20px;
                background: linear-gradient(144.39deg, rgba(255, 255, 255, 0.04) -278.56%, rgba(20, 16, 30, 0.95) 91.61%);
                border: 1px solid #3F3E45;
            }
            .closing-cta .typo-body {
                color: rgba(255, 255, 255, 0.7);
                margin: 2rem auto 3rem;
                max-width: 640px;
            }
            .closing-cta .actions {
                display: flex;
                justify-content: center;
                gap: 1.5rem;
                flex-wrap: wrap;
            }
            "#}
            </style>
            <AnimatedBackground variant={BackgroundVariant::Blue} />
            <Navbar />

            <section class="how-hero">
                <Typography
                    variant={TypographyVariant::H1}
                    text="How HooBank Works"
                    animated=true
                />
                <div class="typo-subtitle">
                    {"Experience the future of digital payments with our revolutionary platform that combines "}
                    <span class="accent">{"quantum security"}</span>
                    {", "}
                    <span class="accent">{"AI-powered routing"}</span>
                    {", and "}
                    <span class="accent">{"instant global transfers"}</span>
                    {"."}
                </div>
                <div class="network-stats">
                    {
                        NETWORK_STATS.iter().map(|stat| html! {
                            <div class="network-stat">
                                <CountUp
                                    target={stat.target}
                                    decimals={stat.decimals}
                                    prefix={stat.prefix}
                                    suffix={stat.suffix}
                                />
                                <div class="label">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <Button label="Start Your Journey" />
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="section-header reveal">
                        <Typography
                            variant={TypographyVariant::H2}
                            text="Simple Steps to Financial Freedom"
                        />
                        <Typography
                            variant={TypographyVariant::Body}
                            gradient=false
                            text="Experience seamless onboarding with our revolutionary 3-step \
                                  process designed for maximum security and minimal friction."
                        />
                    </div>
                    <div class="steps-grid">
                        {
                            ONBOARDING_STEPS.iter().map(|step| html! {
                                <div class="card step-card reveal">
                                    <div class="step-number">{step.number}</div>
                                    <div class="step-icon">{step.icon}</div>
                                    <Typography
                                        variant={TypographyVariant::H4}
                                        gradient=false
                                        text={step.title}
                                    />
                                    <p>{step.description}</p>
                                    {
                                        step.features.iter().map(|feature| html! {
                                            <div class="step-feature">
                                                <span class="check">{"✓"}</span>
                                                <span>{*feature}</span>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="section-header reveal">
                        <Typography
                            variant={TypographyVariant::H2}
                            text="Why Industry Leaders Choose HooBank"
                        />
                        <Typography
                            variant={TypographyVariant::Body}
                            gradient=false
                            text="Trusted by Fortune 500 companies and used by millions worldwide \
                                  for mission-critical financial operations."
                        />
                    </div>
                    <div class="platform-grid">
                        {
                            PLATFORM_FEATURES.iter().map(|feature| html! {
                                <div class="card platform-card reveal">
                                    <div class="icon">{feature.icon}</div>
                                    <Typography
                                        variant={TypographyVariant::H4}
                                        gradient=false
                                        text={feature.title}
                                    />
                                    <p>{feature.description}</p>
                                    <div class="stats-tag">{"🏆 "}{feature.stats}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="closing-cta reveal">
                    <Typography
                        variant={TypographyVariant::H2}
                        text="Ready to Transform Your Financial Future?"
                    />
                    <Typography
                        variant={TypographyVariant::Body}
                        gradient=false
                        text="Join over 5 million users who trust HooBank for their digital \
                              payment needs. Experience the future of finance with quantum \
                              security, AI-powered routing, and instant global transfers."
                    />
                    <div class="actions">
                        <Button label="Start Free Trial" />
                        <button class="btn-outline">{"Watch Demo"}</button>
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}
