use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::background::{AnimatedBackground, BackgroundVariant};
use crate::components::count_up::group_thousands;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::use_scroll_to_top;
use crate::components::typography::{Typography, TypographyVariant};
use crate::config;
use crate::state::waitlist::{WaitlistAction, WaitlistField, WaitlistState};
use crate::submit::{SimulatedBackend, SubmissionPort};
use crate::Route;

#[function_component(JoinWaitlist)]
pub fn join_waitlist() -> Html {
    use_scroll_to_top();

    let state = use_reducer(WaitlistState::default);

    let text_input = |field: WaitlistField| {
        let state = state.clone();
        move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(WaitlistAction::Update(field, input.value()));
        }
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.submitting {
                return;
            }
            let payload = serde_json::to_value(&state.form).unwrap_or_default();
            state.dispatch(WaitlistAction::SubmitStarted);
            let state = state.clone();
            spawn_local(async move {
                let backend = SimulatedBackend::new(config::waitlist_submit_latency_ms());
                if let Ok(ack) = backend.submit("Waitlist signup", payload).await {
                    state.dispatch(WaitlistAction::SubmitResolved(ack));
                }
            });
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(WaitlistAction::Reset))
    };

    let body = if state.submitted {
        html! {
            <section class="waitlist-main">
                <div class="success-view">
                    <div class="success-check">{"✓"}</div>
                    <Typography
                        variant={TypographyVariant::H1}
                        text="🎉 You're In!"
                        animated=true
                    />
                    <p class="success-greeting">
                        {"Welcome "}
                        <span class="accent">{state.form.first_name.clone()}</span>
                        {"! You've successfully joined "}
                        <span class="accent">{group_thousands(state.count)}{"+"}</span>
                        {" visionaries pioneering the future of finance."}
                    </p>
                    <div class="card next-box">
                        <h3>{"✨ What Happens Next?"}</h3>
                        <div class="next-grid">
                            <div class="next-item">
                                <div class="next-icon">{"🔔"}</div>
                                <div>
                                    <p class="next-title">{"Weekly Updates"}</p>
                                    <p class="next-copy">
                                        {"We'll send you exclusive progress updates and \
                                          behind-the-scenes insights every week."}
                                    </p>
                                </div>
                            </div>
                            <div class="next-item">
                                <div class="next-icon">{"⭐"}</div>
                                <div>
                                    <p class="next-title">{"VIP Early Access"}</p>
                                    <p class="next-copy">
                                        {"Get priority access to HooBank when we launch, plus \
                                          exclusive features and bonuses."}
                                    </p>
                                </div>
                            </div>
                        </div>
                        <div class="inbox-note">
                            <p class="next-title">{"🚀 We're launching soon!"}</p>
                            <p class="next-copy">
                                {"Keep an eye on your inbox at "}
                                <span class="accent">{state.form.email.clone()}</span>
                                {". We'll be back with amazing updates very soon."}
                            </p>
                        </div>
                    </div>
                    <div class="success-actions">
                        <Link<Route> to={Route::Home} classes="btn-primary">
                            {"🏠 Back to Home"}
                        </Link<Route>>
                        <button class="btn-outline" onclick={on_reset}>
                            {"← Join Another Person"}
                        </button>
                    </div>
                    <p class="fine-print">
                        {"✨ Your data is secure • No spam ever • Unsubscribe anytime"}
                    </p>
                </div>
            </section>
        }
    } else {
        html! {
            <section class="waitlist-main">
                <div class="waitlist-badge">
                    {"👥 EXCLUSIVE EARLY ACCESS"}
                    <span class="live-dot"></span>
                </div>
                <Typography
                    variant={TypographyVariant::H1}
                    text="Join the Revolution"
                    animated=true
                />
                <p class="waitlist-pitch">
                    {"Be among the "}
                    <span class="accent">{"first 1,000"}</span>
                    {" pioneers to experience the next generation of digital banking."}
                </p>

                <div class="card counter-card">
                    <div class="counter-header">
                        <span class="counter-icon">{"👥"}</span>
                        <span>{"Pioneers Waiting"}</span>
                    </div>
                    <div class="counter-value">{group_thousands(state.count)}{"+"}</div>
                    <p class="counter-note">{"Limited spots remaining"}</p>
                </div>

                <div class="card form-card">
                    <Typography
                        variant={TypographyVariant::H3}
                        text="Secure Your Access"
                    />
                    <p class="form-subtitle">
                        {"Join visionaries reshaping the future of finance"}
                    </p>
                    <form {onsubmit}>
                        <div class="signup-grid">
                            <input
                                type="text"
                                class="field-input"
                                placeholder="First name"
                                required=true
                                value={state.form.first_name.clone()}
                                oninput={text_input(WaitlistField::FirstName)}
                            />
                            <input
                                type="email"
                                class="field-input"
                                placeholder="Email address"
                                required=true
                                value={state.form.email.clone()}
                                oninput={text_input(WaitlistField::Email)}
                            />
                        </div>
                        <div class="guarantee-badge">
                            <span class="guarantee-icon">{"✨"}</span>
                            <span>
                                <span class="guarantee-title">{"Lifetime Priority Access"}</span>
                                <span class="guarantee-copy">
                                    {"Guaranteed early access to all features"}
                                </span>
                            </span>
                        </div>
                        <button
                            type="submit"
                            class="btn-primary submit-wide"
                            disabled={state.submitting}
                        >
                            {
                                if state.submitting {
                                    html! { <><span class="loading-spinner"></span>{" Securing Your Spot..."}</> }
                                } else {
                                    html! { {"Join the Revolution →"} }
                                }
                            }
                        </button>
                    </form>
                    <p class="fine-print">
                        {"✨ No spam • Unsubscribe anytime • Your data is secure"}
                    </p>
                </div>
            </section>
        }
    };

    html! {
        <div class="waitlist-page">
            <style>
            {r#"
            .waitlist-page {
                position: relative;
                min-height: 100vh;
            }
            .waitlist-main {
                text-align: center;
                max-width: 900px;
                margin: 0 auto;
                padding: 12rem 2rem 6rem;
                position: relative;
                z-index: 1;
            }
            .accent { color: #00f6ff; font-weight: 600; }
            .waitlist-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.75rem;
                padding: 0.75rem 1.5rem;
                margin-bottom: 3rem;
                border-radius: 9999px;
                border: 1px solid rgba(0, 246, 255, 0.2);
                background: linear-gradient(90deg, rgba(0, 246, 255, 0.1), rgba(126, 178, 255, 0.1));
                color: #00f6ff;
                font-weight: 600;
                letter-spacing: 0.05em;
            }
            .live-dot {
                width: 8px;
                height: 8px;
                border-radius: 50%;
                background: #00f6ff;
                animation: pulse 2s ease-in-out infinite;
            }
            .waitlist-pitch {
                color: rgba(255, 255, 255, 0.85);
                font-size: 1.4rem;
                font-weight: 300;
                line-height: 1.7;
                max-width: 640px;
                margin: 2rem auto 3rem;
            }
            .counter-card {
                display: inline-block;
                margin-bottom: 3rem;
            }
            .counter-card:hover { transform: none; }
            .counter-header {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.75rem;
                margin-bottom: 1rem;
                color: rgba(255, 255, 255, 0.7);
            }
            .counter-icon {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 48px;
                height: 48px;
                border-radius: 16px;
                background: linear-gradient(45deg, rgba(0, 246, 255, 0.3), rgba(126, 178, 255, 0.3));
            }
            .counter-value {
                font-size: 3rem;
                font-weight: 800;
                background: linear-gradient(90deg, #00f6ff, #7EB2FF, #c084fc);
                -webkit-background-clip: text;
                background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .counter-note { color: rgba(255, 255, 255, 0.5); font-size: 0.9rem; }
            .form-card {
                max-width: 640px;
                margin: 0 auto;
                text-align: center;
            }
            .form-card:hover { transform: none; }
            .form-subtitle {
                color: rgba(255, 255, 255, 0.7);
                margin: 0.75rem 0 2.5rem;
            }
            .signup-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1.5rem;
                margin-bottom: 2rem;
            }
            @media (max-width: 700px) {
                .signup-grid { grid-template-columns: 1fr; }
            }
            .guarantee-badge {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 1rem;
                padding: 1.5rem;
                margin-bottom: 2rem;
                border-radius: 16px;
                border: 1px solid rgba(0, 246, 255, 0.3);
                background: linear-gradient(90deg, rgba(0, 246, 255, 0.15), rgba(126, 178, 255, 0.15));
            }
            .guarantee-icon { font-size: 1.5rem; }
            .guarantee-title { display: block; color: #00f6ff; font-weight: 700; }
            .guarantee-copy { display: block; color: rgba(255, 255, 255, 0.7); font-size: 0.85rem; }
            .submit-wide {
                width: 100%;
                padding: 1.5rem;
                font-size: 1.2rem;
                font-weight: 700;
            }
            .btn-primary:disabled {
                opacity: 0.5;
                cursor: not-allowed;
                transform: none;
            }
            .fine-print {
                color: rgba(255, 255, 255, 0.5);
                font-size: 0.85rem;
                margin-top: 2rem;
            }
            .success-view { text-align: center; }
            .success-check {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 120px;
                height: 120px;
                margin: 0 auto 3rem;
                border-radius: 50%;
                font-size: 3.5rem;
                color: #00040f;
                background: linear-gradient(135deg, #00f6ff, #7EB2FF, #c084fc);
            }
            .success-greeting {
                color: rgba(255, 255, 255, 0.85);
                font-size: 1.4rem;
                font-weight: 300;
                line-height: 1.7;
                max-width: 640px;
                margin: 2rem auto 3rem;
            }
            .next-box { text-align: left; margin-bottom: 3rem; }
            .next-box:hover { transform: none; }
            .next-box h3 {
                text-align: center;
                font-size: 1.5rem;
                margin-bottom: 2rem;
            }
            .next-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 2rem;
                margin-bottom: 2rem;
            }
            @media (max-width: 700px) {
                .next-grid { grid-template-columns: 1fr; }
            }
            .next-item { display: flex; gap: 1.25rem; }
            .next-icon {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 56px;
                height: 56px;
                flex-shrink: 0;
                border-radius: 16px;
                font-size: 1.5rem;
                background: linear-gradient(45deg, rgba(0, 246, 255, 0.3), rgba(126, 178, 255, 0.3));
            }
            .next-title { font-weight: 700; margin-bottom: 0.5rem; }
            .next-copy { color: rgba(255, 255, 255, 0.7); line-height: 1.6; }
            .inbox-note {
                padding: 1.5rem;
                border-radius: 16px;
                border: 1px solid rgba(0, 246, 255, 0.2);
                background: linear-gradient(90deg, rgba(0, 246, 255, 0.1), rgba(126, 178, 255, 0.1));
            }
            .success-actions {
                display: flex;
                justify-content: center;
                gap: 1.5rem;
                flex-wrap: wrap;
            }
            "#}
            </style>
            <AnimatedBackground variant={BackgroundVariant::Default} />
            <Navbar />
            { body }
            <Footer />
        </div>
    }
}
