use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod submit;
mod state {
    pub mod filter;
    pub mod waitlist;
    pub mod wizard;
}
mod components {
    pub mod background;
    pub mod billing;
    pub mod business;
    pub mod button;
    pub mod card_deal;
    pub mod clients;
    pub mod count_up;
    pub mod cta;
    pub mod footer;
    pub mod get_started;
    pub mod hero;
    pub mod navbar;
    pub mod reveal;
    pub mod stats;
    pub mod testimonials;
    pub mod theme;
    pub mod typography;
}
mod pages {
    pub mod become_partner;
    pub mod blog;
    pub mod home;
    pub mod how_it_works;
    pub mod join_waitlist;
}

use components::theme::GlobalStyle;
use pages::{
    become_partner::BecomePartner, blog::Blog, home::Home, how_it_works::HowItWorks,
    join_waitlist::JoinWaitlist,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/blog")]
    Blog,
    #[at("/become-a-partner")]
    BecomePartner,
    #[at("/join-waitlist")]
    JoinWaitlist,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BecomePartner => {
            info!("Rendering Become a Partner page");
            html! { <BecomePartner /> }
        }
        Route::JoinWaitlist => {
            info!("Rendering Join Waitlist page");
            html! { <JoinWaitlist /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyle />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
