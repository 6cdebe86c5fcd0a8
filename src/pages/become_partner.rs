use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::background::{AnimatedBackground, BackgroundVariant};
use crate::components::count_up::CountUp;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::{use_reveal_on_scroll, use_scroll_to_top};
use crate::components::typography::{Typography, TypographyVariant};
use crate::config;
use crate::content::{
    EMPLOYEE_OPTIONS, FORM_STEPS, INDUSTRY_OPTIONS, PARTNERSHIP_TYPES, PARTNER_BENEFITS,
    PARTNER_STATS, PARTNER_TESTIMONIALS,
};
use crate::state::wizard::{PartnerAction, PartnerField, PartnerState, MAX_STEP};
use crate::submit::{SimulatedBackend, SubmissionPort};

#[function_component(BecomePartner)]
pub fn become_partner() -> Html {
    use_scroll_to_top();
    use_reveal_on_scroll();

    let state = use_reducer(PartnerState::default);

    let text_input = |field: PartnerField| {
        let state = state.clone();
        move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PartnerAction::Update(field, input.value()));
        }
    };

    let select_input = |field: PartnerField| {
        let state = state.clone();
        move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(PartnerAction::Update(field, select.value()));
        }
    };

    let on_retreat = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PartnerAction::Retreat))
    };

    let on_advance = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PartnerAction::Advance))
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.submitting {
                return;
            }
            let payload = serde_json::to_value(&state.form).unwrap_or_default();
            state.dispatch(PartnerAction::SubmitStarted);
            let state = state.clone();
            spawn_local(async move {
                let backend = SimulatedBackend::new(config::partner_submit_latency_ms());
                // The simulated channel never fails; a real one would branch here
                if let Ok(ack) = backend.submit("Partnership application", payload).await {
                    state.dispatch(PartnerAction::SubmitResolved(ack));
                }
            });
        })
    };

    let step_one = html! {
        <div class="form-step">
            <div class="field-grid">
                <div>
                    <label class="field-label">{"Company Name *"}</label>
                    <input
                        type="text"
                        class="field-input"
                        placeholder="Enter your company name"
                        required=true
                        value={state.form.company_name.clone()}
                        oninput={text_input(PartnerField::CompanyName)}
                    />
                </div>
                <div>
                    <label class="field-label">{"Industry *"}</label>
                    <select
                        class="field-input"
                        required=true
                        onchange={select_input(PartnerField::Industry)}
                    >
                        {
                            INDUSTRY_OPTIONS.iter().map(|(value, label)| html! {
                                <option
                                    value={*value}
                                    selected={state.form.industry == *value}
                                >
                                    {*label}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>
            <div>
                <label class="field-label">{"Website *"}</label>
                <input
                    type="url"
                    class="field-input"
                    placeholder="https://yourcompany.com"
                    required=true
                    value={state.form.website.clone()}
                    oninput={text_input(PartnerField::Website)}
                />
            </div>
            <div class="field-grid">
                <div>
                    <label class="field-label">{"Contact Name *"}</label>
                    <input
                        type="text"
                        class="field-input"
                        placeholder="Your full name"
                        required=true
                        value={state.form.contact_name.clone()}
                        oninput={text_input(PartnerField::ContactName)}
                    />
                </div>
                <div>
                    <label class="field-label">{"Email *"}</label>
                    <input
                        type="email"
                        class="field-input"
                        placeholder="your@email.com"
                        required=true
                        value={state.form.email.clone()}
                        oninput={text_input(PartnerField::Email)}
                    />
                </div>
            </div>
        </div>
    };

    let step_two = html! {
        <div class="form-step">
            <div>
                <label class="field-label">{"Partnership Type *"}</label>
                {
                    PARTNERSHIP_TYPES.iter().map(|partnership| {
                        let onchange = {
                            let state = state.clone();
                            let slug = partnership.slug;
                            move |_: Event| {
                                state.dispatch(PartnerAction::Update(
                                    PartnerField::PartnershipType,
                                    slug.to_string(),
                                ));
                            }
                        };
                        html! {
                            <label class="radio-card">
                                <input
                                    type="radio"
                                    name="partnership-type"
                                    value={partnership.slug}
                                    checked={state.form.partnership_type == partnership.slug}
                                    {onchange}
                                />
                                <span class="radio-icon">{partnership.icon}</span>
                                <span>
                                    <span class="radio-name">{partnership.name}</span>
                                    <span class="radio-description">{partnership.description}</span>
                                </span>
                            </label>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="field-grid">
                <div>
                    <label class="field-label">{"Phone"}</label>
                    <input
                        type="tel"
                        class="field-input"
                        placeholder="+1 (555) 123-4567"
                        value={state.form.phone.clone()}
                        oninput={text_input(PartnerField::Phone)}
                    />
                </div>
                <div>
                    <label class="field-label">{"Company Size"}</label>
                    <select class="field-input" onchange={select_input(PartnerField::Employees)}>
                        {
                            EMPLOYEE_OPTIONS.iter().map(|(value, label)| html! {
                                <option
                                    value={*value}
                                    selected={state.form.employees == *value}
                                >
                                    {*label}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>
        </div>
    };

    let step_three = {
        let oninput = {
            let state = state.clone();
            move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                state.dispatch(PartnerAction::Update(PartnerField::Description, area.value()));
            }
        };
        html! {
            <div class="form-step">
                <div>
                    <label class="field-label">{"Partnership Goals & Vision"}</label>
                    <textarea
                        class="field-input"
                        rows="6"
                        placeholder="Tell us about your partnership goals, target market, and how you envision working with HooBank..."
                        value={state.form.description.clone()}
                        {oninput}
                    />
                </div>
                <div class="next-steps-box">
                    <h4>{"✨ What happens next?"}</h4>
                    <ul>
                        <li>{"Partnership team review within 24 hours"}</li>
                        <li>{"Personalized strategy call with our experts"}</li>
                        <li>{"Custom partnership agreement proposal"}</li>
                        <li>{"Fast-track onboarding and activation"}</li>
                    </ul>
                </div>
            </div>
        }
    };

    let form_body = if state.submitted {
        html! {
            <div class="form-confirmation">
                <div class="confirmation-check">{"✓"}</div>
                <Typography
                    variant={TypographyVariant::H3}
                    text="Application received"
                />
                <p>{"Our partnership team will review your application and reach out within 24 hours."}</p>
            </div>
        }
    } else {
        html! {
            <form {onsubmit}>
                {
                    match state.step {
                        1 => step_one,
                        2 => step_two,
                        _ => step_three,
                    }
                }
                <div class="form-controls">
                    {
                        if state.step > 1 {
                            html! {
                                <button type="button" class="btn-outline" onclick={on_retreat}>
                                    {"Previous"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if state.step < MAX_STEP {
                            html! {
                                <button type="button" class="btn-primary push-right" onclick={on_advance}>
                                    {"Next Step →"}
                                </button>
                            }
                        } else {
                            html! {
                                <button
                                    type="submit"
                                    class="btn-primary push-right"
                                    disabled={state.submitting}
                                >
                                    {
                                        if state.submitting {
                                            html! { <><span class="loading-spinner"></span>{" Submitting..."}</> }
                                        } else {
                                            html! { {"Submit Application →"} }
                                        }
                                    }
                                </button>
                            }
                        }
                    }
                </div>
            </form>
        }
    };

    html! {
        <div class="partner-page">
            <style>
            {r#"
            .partner-page {
                position: relative;
                min-height: 100vh;
            }
            .partner-hero {
                text-align: center;
                padding: 12rem 2rem 4rem;
                position: relative;
                z-index: 1;
            }
            .partner-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1.75rem;
                margin-bottom: 2rem;
                border-radius: 9999px;
                border: 1px solid rgba(34, 197, 94, 0.3);
                background: linear-gradient(90deg, rgba(34, 197, 94, 0.2), rgba(16, 185, 129, 0.2));
                color: #bbf7d0;
                font-weight: 600;
            }
            .partner-hero .typo-subtitle {
                color: rgba(255, 255, 255, 0.7);
                max-width: 800px;
                margin: 2rem auto 3rem;
            }
            .partner-stats {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 2rem;
                max-width: 1000px;
                margin: 0 auto 3rem;
            }
            .partner-stat {
                padding: 1.5rem;
                border-radius: 16px;
                border: 1px solid #3F3E45;
                background: rgba(0, 0, 0, 0.3);
            }
            .partner-stat .count-up {
                font-size: 2.5rem;
                font-weight: 700;
                background: linear-gradient(45deg, #4ade80, #60a5fa);
                -webkit-background-clip: text;
                background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .partner-stat .label {
                color: rgba(255, 255, 255, 0.7);
                margin-top: 0.5rem;
            }
            .types-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                gap: 2.5rem;
                margin-top: 4rem;
            }
            .type-card { text-align: center; }
            .type-icon {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 80px;
                height: 80px;
                margin: 0 auto 2rem;
                border-radius: 16px;
                font-size: 2rem;
                background: linear-gradient(45deg, rgba(0, 246, 255, 0.2), rgba(126, 178, 255, 0.2));
            }
            .type-card p {
                color: rgba(255, 255, 255, 0.7);
                line-height: 1.7;
                margin: 1rem 0 1.5rem;
            }
            .commission-badge {
                display: inline-block;
                padding: 0.5rem 1rem;
                margin-bottom: 1.5rem;
                border-radius: 9999px;
                font-size: 0.85rem;
                font-weight: 700;
                color: #00040f;
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
            }
            .type-feature {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.75rem;
                padding: 0.4rem 0;
            }
            .type-feature .check { color: #00f6ff; }
            .benefits-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
                gap: 2.5rem;
                margin-top: 4rem;
            }
            .benefit-header {
                display: flex;
                align-items: flex-start;
                justify-content: space-between;
                gap: 1rem;
                margin-bottom: 1.5rem;
            }
            .benefit-icon { font-size: 3rem; }
            .benefit-stats {
                padding: 0.4rem 0.9rem;
                border-radius: 9999px;
                font-size: 0.8rem;
                font-weight: 700;
                white-space: nowrap;
                color: #00040f;
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
            }
            .benefit-card p {
                color: rgba(255, 255, 255, 0.7);
                line-height: 1.7;
                margin-bottom: 1.5rem;
            }
            .benefit-feature {
                display: flex;
                align-items: center;
                gap: 1rem;
                padding: 0.9rem 1.25rem;
                margin-bottom: 0.75rem;
                border-radius: 12px;
                background: rgba(0, 0, 0, 0.2);
            }
            .benefit-feature .check { color: #00f6ff; }
            .quotes-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                gap: 2rem;
                margin-top: 3rem;
            }
            .quote-stars { color: #facc15; margin-bottom: 1.25rem; letter-spacing: 0.2em; }
            .quote-text { font-style: italic; font-size: 1.1rem; line-height: 1.8; margin-bottom: 1.5rem; }
            .quote-author { display: flex; align-items: center; gap: 1rem; }
            .quote-avatar {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 48px;
                height: 48px;
                border-radius: 50%;
                font-weight: 700;
                color: #00040f;
                background: linear-gradient(45deg, #00f6ff, #7EB2FF);
            }
            .quote-author .name { font-weight: 600; }
            .quote-author .company { color: rgba(255, 255, 255, 0.7); font-size: 0.9rem; }
            .application-layout {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 4rem;
                align-items: start;
            }
            @media (max-width: 1100px) {
                .application-layout { grid-template-columns: 1fr; }
                .benefits-grid { grid-template-columns: 1fr; }
            }
            .application-pitch .typo-body {
                color: rgba(255, 255, 255, 0.7);
                margin: 2rem 0 2.5rem;
            }
            .pitch-point {
                display: flex;
                align-items: flex-start;
                gap: 1.5rem;
                margin-bottom: 2rem;
            }
            .pitch-icon {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 56px;
                height: 56px;
                flex-shrink: 0;
                border-radius: 16px;
                font-size: 1.5rem;
                background: linear-gradient(45deg, rgba(0, 246, 255, 0.2), rgba(126, 178, 255, 0.2));
            }
            .pitch-point h4 { margin-bottom: 0.5rem; }
            .pitch-point p { color: rgba(255, 255, 255, 0.7); }
            .step-indicator {
                display: flex;
                align-items: center;
                justify-content: space-between;
                margin-bottom: 2.5rem;
            }
            .step-dot {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 40px;
                height: 40px;
                border-radius: 50%;
                font-weight: 700;
                font-size: 0.9rem;
                background: #3F3E45;
                color: rgba(255, 255, 255, 0.7);
                transition: all 0.3s ease;
            }
            .step-dot.reached {
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
                color: #00040f;
            }
            .step-bar {
                flex: 1;
                height: 4px;
                margin: 0 1rem;
                background: #3F3E45;
                transition: background 0.3s ease;
            }
            .step-bar.reached { background: #00f6ff; }
            .form-step-description { color: rgba(255, 255, 255, 0.7); margin: 0.5rem 0 2rem; }
            .form-step { display: flex; flex-direction: column; gap: 1.5rem; }
            .field-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1.5rem;
            }
            @media (max-width: 700px) {
                .field-grid { grid-template-columns: 1fr; }
            }
            .radio-card {
                display: flex;
                align-items: center;
                gap: 1rem;
                padding: 1rem 1.25rem;
                margin-bottom: 1rem;
                border-radius: 16px;
                border: 1px solid #3F3E45;
                background: rgba(0, 0, 0, 0.2);
                cursor: pointer;
                transition: border-color 0.3s ease;
            }
            .radio-card:hover { border-color: #00f6ff; }
            .radio-icon { font-size: 1.5rem; }
            .radio-name { display: block; font-weight: 600; }
            .radio-description { display: block; color: rgba(255, 255, 255, 0.7); font-size: 0.85rem; }
            .next-steps-box {
                padding: 1.5rem;
                border-radius: 16px;
                border: 1px solid rgba(34, 197, 94, 0.3);
                background: rgba(34, 197, 94, 0.1);
            }
            .next-steps-box h4 { color: #4ade80; margin-bottom: 1rem; }
            .next-steps-box ul { list-style: none; }
            .next-steps-box li {
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.9rem;
                padding: 0.25rem 0;
            }
            .next-steps-box li::before { content: '• '; }
            .form-controls {
                display: flex;
                justify-content: space-between;
                gap: 1rem;
                padding-top: 2rem;
            }
            .push-right { margin-left: auto; }
            .btn-primary:disabled {
                opacity: 0.5;
                cursor: not-allowed;
                transform: none;
            }
            .form-confirmation { text-align: center; padding: 3rem 1rem; }
            .confirmation-check {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 80px;
                height: 80px;
                margin: 0 auto 2rem;
                border-radius: 50%;
                font-size: 2.5rem;
                color: #00040f;
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
            }
            .form-confirmation p { color: rgba(255, 255, 255, 0.7); margin-top: 1.5rem; }
            "#}
            </style>
            <AnimatedBackground variant={BackgroundVariant::Green} />
            <Navbar />

            <section class="partner-hero">
                <div class="partner-badge">{"💼 Partner Program"}</div>
                <Typography
                    variant={TypographyVariant::H1}
                    text="Become a HooBank Partner"
                    animated=true
                />
                <Typography
                    variant={TypographyVariant::Subtitle}
                    gradient=false
                    text="Join our elite network of industry leaders and innovative companies \
                          shaping the future of digital finance. Together, we're building \
                          tomorrow's financial ecosystem."
                />
                <div class="partner-stats">
                    {
                        PARTNER_STATS.iter().map(|stat| html! {
                            <div class="partner-stat">
                                <CountUp
                                    target={stat.target}
                                    decimals={stat.decimals}
                                    prefix={stat.prefix}
                                    suffix={stat.suffix}
                                    duration_ms={2_500}
                                />
                                <div class="label">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="section-header reveal" style="text-align: center; max-width: 760px; margin: 0 auto;">
                        <Typography
                            variant={TypographyVariant::H2}
                            text="Choose Your Partnership Path"
                        />
                        <Typography
                            variant={TypographyVariant::Body}
                            gradient=false
                            text="Select the partnership model that aligns with your business goals \
                                  and capabilities. Each path offers unique advantages and growth \
                                  opportunities."
                        />
                    </div>
                    <div class="types-grid">
                        {
                            PARTNERSHIP_TYPES.iter().map(|partnership| html! {
                                <div class="card type-card reveal">
                                    <div class="type-icon">{partnership.icon}</div>
                                    <Typography
                                        variant={TypographyVariant::H4}
                                        gradient=false
                                        text={partnership.name}
                                    />
                                    <p>{partnership.description}</p>
                                    <div class="commission-badge">
                                        {partnership.commission}{" Commission"}
                                    </div>
                                    {
                                        partnership.features.iter().map(|feature| html! {
                                            <div class="type-feature">
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
                    <div class="section-header reveal" style="text-align: center; max-width: 760px; margin: 0 auto;">
                        <Typography
                            variant={TypographyVariant::H2}
                            text="Exclusive Partner Benefits"
                        />
                    </div>
                    <div class="benefits-grid">
                        {
                            PARTNER_BENEFITS.iter().map(|benefit| html! {
                                <div class="card benefit-card reveal">
                                    <div class="benefit-header">
                                        <span class="benefit-icon">{benefit.icon}</span>
                                        <span class="benefit-stats">{benefit.stats}</span>
                                    </div>
                                    <Typography
                                        variant={TypographyVariant::H4}
                                        gradient=false
                                        text={benefit.title}
                                    />
                                    <p>{benefit.description}</p>
                                    {
                                        benefit.features.iter().map(|feature| html! {
                                            <div class="benefit-feature">
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
                    <div class="section-header reveal" style="text-align: center;">
                        <Typography
                            variant={TypographyVariant::H2}
                            text="What Our Partners Say"
                        />
                    </div>
                    <div class="quotes-grid">
                        {
                            PARTNER_TESTIMONIALS.iter().map(|quote| html! {
                                <div class="card reveal">
                                    <div class="quote-stars">{"★★★★★"}</div>
                                    <p class="quote-text">{"\""}{quote.quote}{"\""}</p>
                                    <div class="quote-author">
                                        <div class="quote-avatar">{quote.avatar}</div>
                                        <div>
                                            <div class="name">{quote.name}</div>
                                            <div class="company">{quote.company}</div>
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-inner application-layout">
                    <div class="application-pitch">
                        <Typography
                            variant={TypographyVariant::H2}
                            text="Ready to Transform Your Business?"
                        />
                        <Typography
                            variant={TypographyVariant::Body}
                            gradient=false
                            text="Join the ranks of successful partners who have transformed their \
                                  businesses with HooBank. Our dedicated partnership team will \
                                  guide you through every step of the journey."
                        />
                        <div class="pitch-point">
                            <div class="pitch-icon">{"⚡"}</div>
                            <div>
                                <h4>{"Lightning Fast Approval"}</h4>
                                <p>{"Get approved within 24 hours and start earning immediately."}</p>
                            </div>
                        </div>
                        <div class="pitch-point">
                            <div class="pitch-icon">{"♥"}</div>
                            <div>
                                <h4>{"Dedicated Support"}</h4>
                                <p>{"24/7 access to our expert partnership success managers."}</p>
                            </div>
                        </div>
                        <div class="pitch-point">
                            <div class="pitch-icon">{"🛡"}</div>
                            <div>
                                <h4>{"Guaranteed Success"}</h4>
                                <p>{"Industry-leading resources and training for guaranteed growth."}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="step-indicator">
                            {
                                FORM_STEPS.iter().enumerate().map(|(index, _)| {
                                    let number = (index + 1) as u8;
                                    let dot = classes!(
                                        "step-dot",
                                        (number <= state.step).then(|| "reached"),
                                    );
                                    html! {
                                        <>
                                            <div class={dot}>{number}</div>
                                            {
                                                if number < MAX_STEP {
                                                    let bar = classes!(
                                                        "step-bar",
                                                        (number < state.step).then(|| "reached"),
                                                    );
                                                    html! { <div class={bar}></div> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                        <Typography
                            variant={TypographyVariant::H3}
                            text="Partnership Application"
                        />
                        <p class="form-step-description">
                            { FORM_STEPS[usize::from(state.step) - 1].description }
                        </p>
                        { form_body }
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}
