use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(GetStarted)]
pub fn get_started() -> Html {
    html! {
        <Link<Route> to={Route::JoinWaitlist} classes="get-started">
            <style>
            {r#"
            .get-started {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 140px;
                height: 140px;
                border-radius: 50%;
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
                padding: 2px;
                cursor: pointer;
                transition: transform 0.3s ease;
            }
            .get-started:hover {
                transform: scale(1.1);
            }
            .get-started-inner {
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                width: 100%;
                height: 100%;
                border-radius: 50%;
                background: #00040f;
                font-size: 18px;
                font-weight: 500;
            }
            "#}
            </style>
            <div class="get-started-inner">
                <span><span class="text-gradient">{"Join"}</span>{" ↗"}</span>
                <span class="text-gradient">{"Waitlist"}</span>
            </div>
        </Link<Route>>
    }
}
