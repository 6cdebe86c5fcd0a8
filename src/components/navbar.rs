use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
            {r#"
            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                z-index: 100;
                padding: 1rem 2rem;
                transition: background 0.3s ease;
            }
            .top-nav.scrolled {
                background: rgba(0, 4, 15, 0.9);
                backdrop-filter: blur(10px);
                border-bottom: 1px solid rgba(0, 246, 255, 0.1);
            }
            .nav-content {
                max-width: 1280px;
                margin: 0 auto;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                font-size: 1.5rem;
                font-weight: 700;
            }
            .nav-right {
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-link {
                color: rgba(255, 255, 255, 0.7);
                transition: color 0.2s ease;
            }
            .nav-link:hover {
                color: #00f6ff;
            }
            .nav-waitlist-button {
                padding: 0.6rem 1.2rem;
                border-radius: 10px;
                font-weight: 600;
                color: #00040f;
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
            }
            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
                cursor: pointer;
            }
            .burger-menu span {
                width: 24px;
                height: 2px;
                background: #ffffff;
            }
            @media (max-width: 768px) {
                .burger-menu { display: flex; }
                .nav-right {
                    display: none;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    flex-direction: column;
                    padding: 1.5rem;
                    background: rgba(0, 4, 15, 0.97);
                    border-bottom: 1px solid rgba(0, 246, 255, 0.1);
                }
                .nav-right.mobile-menu-open { display: flex; }
            }
            "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo text-gradient">
                    {"HooBank"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::HowItWorks} classes="nav-link">
                            {"How It Works"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::BecomePartner} classes="nav-link">
                            {"Become a Partner"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::JoinWaitlist} classes="nav-waitlist-button">
                            {"Join Waitlist"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
