use yew::prelude::*;

use crate::components::typography::{Typography, TypographyVariant};
use crate::content::FEEDBACK;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section testimonials">
            <style>
            {r#"
            .testimonials-header {
                display: flex;
                justify-content: space-between;
                align-items: flex-end;
                gap: 2rem;
                margin-bottom: 3rem;
            }
            .testimonials-header .typo-body {
                color: rgba(255, 255, 255, 0.7);
                max-width: 450px;
            }
            .testimonial-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                gap: 1.5rem;
            }
            .testimonial-quote-mark {
                font-size: 2.5rem;
                color: #00f6ff;
                line-height: 1;
                margin-bottom: 1rem;
            }
            .testimonial-text {
                color: #ffffff;
                font-size: 1.1rem;
                line-height: 1.8;
                margin-bottom: 2rem;
            }
            .testimonial-author .name {
                font-weight: 600;
            }
            .testimonial-author .title {
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.9rem;
            }
            @media (max-width: 900px) {
                .testimonials-header { flex-direction: column; align-items: flex-start; }
            }
            "#}
            </style>
            <div class="section-inner">
                <div class="testimonials-header">
                    <Typography
                        variant={TypographyVariant::H2}
                        text="What People are saying about us"
                    />
                    <Typography
                        variant={TypographyVariant::Body}
                        gradient=false
                        text="Everything you need to accept card payments and grow your business \
                              anywhere on the planet."
                    />
                </div>
                <div class="testimonial-grid">
                    {
                        FEEDBACK.iter().map(|feedback| html! {
                            <div class="card">
                                <div class="testimonial-quote-mark">{"“"}</div>
                                <p class="testimonial-text">{feedback.quote}</p>
                                <div class="testimonial-author">
                                    <div class="name">{feedback.name}</div>
                                    <div class="title">{feedback.title}</div>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
