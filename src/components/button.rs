use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or(AttrValue::Static("Join Waitlist"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

// Primary CTA; every instance leads to the waitlist signup.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <Link<Route>
            to={Route::JoinWaitlist}
            classes={classes!("btn-primary", props.class.clone())}
        >
            { props.label.clone() }
        </Link<Route>>
    }
}
