use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
            {r#"
            .site-footer {
                padding: 4rem 2rem 2rem;
                position: relative;
                z-index: 1;
            }
            .footer-inner {
                max-width: 1280px;
                margin: 0 auto;
                display: flex;
                flex-direction: column;
                align-items: center;
            }
            .footer-logo {
                font-size: 2rem;
                font-weight: 700;
                margin-bottom: 2rem;
            }
            .footer-links {
                list-style: none;
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 2rem;
                margin-bottom: 2rem;
            }
            .footer-links a {
                color: rgba(255, 255, 255, 0.7);
                transition: color 0.2s ease;
            }
            .footer-links a:hover {
                color: #00f6ff;
            }
            .footer-tagline {
                color: rgba(255, 255, 255, 0.7);
                max-width: 320px;
                text-align: center;
                margin-bottom: 2rem;
            }
            .footer-copyright {
                width: 100%;
                padding-top: 1.5rem;
                border-top: 1px solid #3F3E45;
                text-align: center;
                color: #ffffff;
            }
            "#}
            </style>
            <div class="footer-inner">
                <Link<Route> to={Route::Home} classes="footer-logo text-gradient">
                    {"HooBank"}
                </Link<Route>>
                <ul class="footer-links">
                    <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                    <li><Link<Route> to={Route::HowItWorks}>{"How It Works"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                    <li><Link<Route> to={Route::BecomePartner}>{"Become a Partner"}</Link<Route>></li>
                    <li><Link<Route> to={Route::JoinWaitlist}>{"Join Waitlist"}</Link<Route>></li>
                </ul>
                <p class="footer-tagline">
                    {"A new way to make the payments easy, reliable and secure."}
                </p>
                <div class="footer-copyright">
                    {"Copyright Ⓒ 2022 HooBank. All Rights Reserved."}
                </div>
            </div>
        </footer>
    }
}
