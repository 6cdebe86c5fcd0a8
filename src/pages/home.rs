use yew::prelude::*;

use crate::components::background::{AnimatedBackground, BackgroundVariant};
use crate::components::billing::Billing;
use crate::components::business::Business;
use crate::components::card_deal::CardDeal;
use crate::components::clients::Clients;
use crate::components::cta::Cta;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::reveal::use_scroll_to_top;
use crate::components::stats::Stats;
use crate::components::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="home-page">
            <AnimatedBackground variant={BackgroundVariant::Default} />
            <Navbar />
            <Hero />
            <Stats />
            <Business />
            <Billing />
            <CardDeal />
            <Testimonials />
            <Clients />
            <Cta />
            <Footer />
        </div>
    }
}
