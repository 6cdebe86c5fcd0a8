use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::background::{AnimatedBackground, BackgroundVariant};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::{use_reveal_on_scroll, use_scroll_to_top};
use crate::components::typography::{Typography, TypographyVariant};
use crate::content::{BlogPost, BLOG_POSTS, FEATURED_POST, KNOWLEDGE_STATS};
use crate::state::filter::{visible_posts, Category, FilterAction, FilterCriteria};

fn post_card(post: &'static BlogPost) -> Html {
    html! {
        <article class="card post-card">
            <div class="post-meta-row">
                <span class="post-category">{post.icon}{" "}{post.category.label()}</span>
                <span class="post-tags">
                    {
                        post.tags.iter().take(2).map(|tag| html! {
                            <span class="post-tag">{"#"}{*tag}</span>
                        }).collect::<Html>()
                    }
                </span>
            </div>
            <Typography variant={TypographyVariant::H4} gradient=false text={post.title} />
            <p class="post-excerpt">{post.excerpt}</p>
            <div class="post-author">
                <div class="post-avatar">{post.author.chars().next().unwrap_or('?')}</div>
                <div>
                    <div class="author-name">{post.author}</div>
                    <div class="author-title">{post.author_title}</div>
                </div>
            </div>
            <div class="post-footer">
                <span>{"📅 "}{post.date}</span>
                <span>{"🕐 "}{post.read_time}</span>
                <span>{"👁 "}{post.views}</span>
                <span>{"♡ "}{post.likes}</span>
            </div>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_to_top();
    use_reveal_on_scroll();

    let criteria = use_reducer(FilterCriteria::default);

    let on_search = {
        let criteria = criteria.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            criteria.dispatch(FilterAction::SetSearch(input.value()));
        })
    };

    // Recomputed on every render; the list is a handful of static entries
    let visible = visible_posts(&criteria, &BLOG_POSTS);

    html! {
        <div class="blog-page">
            <style>
            {r#"
            .blog-page {
                position: relative;
                min-height: 100vh;
            }
            .blog-hero {
                text-align: center;
                padding: 12rem 2rem 3rem;
                position: relative;
                z-index: 1;
            }
            .knowledge-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1.5rem;
                margin-bottom: 2rem;
                border-radius: 9999px;
                border: 1px solid rgba(168, 85, 247, 0.3);
                background: linear-gradient(90deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
                color: #e9d5ff;
                font-weight: 500;
            }
            .blog-hero .typo-subtitle {
                color: rgba(255, 255, 255, 0.7);
                max-width: 800px;
                margin: 2rem auto;
            }
            .search-bar {
                position: relative;
                max-width: 640px;
                margin: 0 auto 2rem;
            }
            .search-bar .field-input {
                padding-left: 3.5rem;
                font-size: 1.05rem;
            }
            .search-icon {
                position: absolute;
                left: 1.25rem;
                top: 50%;
                transform: translateY(-50%);
                color: rgba(255, 255, 255, 0.5);
            }
            .knowledge-stats {
                display: flex;
                justify-content: center;
                gap: 3rem;
                flex-wrap: wrap;
            }
            .knowledge-stat .value {
                font-size: 1.75rem;
                font-weight: 700;
                background: linear-gradient(45deg, #c084fc, #60a5fa);
                -webkit-background-clip: text;
                background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .knowledge-stat .label {
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.9rem;
            }
            .category-row {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 1rem;
                padding: 0 2rem 3rem;
                position: relative;
                z-index: 1;
            }
            .category-pill {
                padding: 0.75rem 2rem;
                border-radius: 16px;
                font-weight: 600;
                cursor: pointer;
                border: 1px solid #3F3E45;
                background: rgba(0, 0, 0, 0.4);
                color: rgba(255, 255, 255, 0.7);
                transition: all 0.3s ease;
            }
            .category-pill:hover {
                border-color: #00f6ff;
                color: #00f6ff;
            }
            .category-pill.selected {
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
                color: #00040f;
                border-color: transparent;
            }
            .featured-card {
                max-width: 1000px;
                margin: 0 auto 4rem;
                overflow: hidden;
            }
            .featured-badge {
                display: inline-block;
                padding: 0.4rem 1rem;
                margin-bottom: 1.5rem;
                border-radius: 9999px;
                font-size: 0.85rem;
                font-weight: 700;
                color: #00040f;
                background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
            }
            .post-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                gap: 2rem;
            }
            .post-card {
                display: flex;
                flex-direction: column;
            }
            .post-meta-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 1.25rem;
            }
            .post-category {
                color: #00f6ff;
                font-size: 0.9rem;
                font-weight: 500;
            }
            .post-tag {
                font-size: 0.75rem;
                color: rgba(255, 255, 255, 0.7);
                background: rgba(0, 0, 0, 0.3);
                border-radius: 4px;
                padding: 0.2rem 0.5rem;
                margin-left: 0.5rem;
            }
            .post-excerpt {
                color: rgba(255, 255, 255, 0.7);
                line-height: 1.7;
                margin: 1rem 0 1.5rem;
                flex-grow: 1;
            }
            .post-author {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                margin-bottom: 1.25rem;
            }
            .post-avatar {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 40px;
                height: 40px;
                border-radius: 50%;
                font-weight: 700;
                color: #00040f;
                background: linear-gradient(45deg, #00f6ff, #7EB2FF);
            }
            .author-name { font-weight: 500; font-size: 0.95rem; }
            .author-title { color: rgba(255, 255, 255, 0.7); font-size: 0.8rem; }
            .post-footer {
                display: flex;
                flex-wrap: wrap;
                gap: 1rem;
                padding-top: 1rem;
                border-top: 1px solid #3F3E45;
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.8rem;
            }
            .empty-state {
                text-align: center;
                padding: 4rem 0;
            }
            .empty-state p { color: rgba(255, 255, 255, 0.7); margin-top: 1rem; }
            .newsletter-box {
                text-align: center;
                max-width: 900px;
                margin: 0 auto;
                padding: 5rem 3rem;
                border-radius: 20px;
                background: linear-gradient(144.39deg, rgba(255, 255, 255, 0.04) -278.56%, rgba(20, 16, 30, 0.95) 91.61%);
                border: 1px solid #3F3E45;
            }
            .newsletter-box .typo-body {
                color: rgba(255, 255, 255, 0.7);
                margin: 2rem auto 3rem;
                max-width: 640px;
            }
            .newsletter-form {
                display: flex;
                gap: 1rem;
                max-width: 520px;
                margin: 0 auto 1rem;
            }
            .newsletter-note { color: rgba(255, 255, 255, 0.5); font-size: 0.85rem; }
            @media (max-width: 768px) {
                .newsletter-form { flex-direction: column; }
            }
            "#}
            </style>
            <AnimatedBackground variant={BackgroundVariant::Purple} />
            <Navbar />

            <section class="blog-hero">
                <div class="knowledge-badge">{"📖 Knowledge Hub"}</div>
                <Typography
                    variant={TypographyVariant::H1}
                    text="HooBank Insights"
                    animated=true
                />
                <Typography
                    variant={TypographyVariant::Subtitle}
                    gradient=false
                    text="Stay ahead of the curve with our expert analysis, industry insights, \
                          and innovative perspectives on the future of digital finance."
                />
                <div class="search-bar">
                    <span class="search-icon">{"🔍"}</span>
                    <input
                        type="text"
                        class="field-input"
                        placeholder="Search for insights, trends, and expert analysis..."
                        value={criteria.search.clone()}
                        oninput={on_search}
                    />
                </div>
                <div class="knowledge-stats">
                    {
                        KNOWLEDGE_STATS.iter().map(|stat| html! {
                            <div class="knowledge-stat">
                                <div class="value">{stat.value}</div>
                                <div class="label">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <div class="category-row">
                {
                    Category::ALL.iter().map(|category| {
                        let selected = criteria.category == *category;
                        let onclick = {
                            let criteria = criteria.clone();
                            let category = *category;
                            Callback::from(move |_| {
                                criteria.dispatch(FilterAction::SetCategory(category));
                            })
                        };
                        html! {
                            <button
                                class={classes!("category-pill", selected.then(|| "selected"))}
                                {onclick}
                            >
                                {category.label()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <section class="section">
                <div class="section-inner">
                    <div class="card featured-card reveal">
                        <span class="featured-badge">{"⭐ Featured"}</span>
                        <Typography
                            variant={TypographyVariant::H3}
                            gradient=false
                            text={FEATURED_POST.title}
                        />
                        <p class="post-excerpt">{FEATURED_POST.excerpt}</p>
                        <div class="post-author">
                            <div class="post-avatar">
                                {FEATURED_POST.author.chars().next().unwrap_or('?')}
                            </div>
                            <div>
                                <div class="author-name">{FEATURED_POST.author}</div>
                                <div class="author-title">{FEATURED_POST.author_title}</div>
                            </div>
                        </div>
                        <div class="post-footer">
                            <span>{"📅 "}{FEATURED_POST.date}</span>
                            <span>{"🕐 "}{FEATURED_POST.read_time}</span>
                            <span>{"👁 "}{FEATURED_POST.views}</span>
                        </div>
                    </div>

                    <div class="section-header reveal" style="text-align: center; margin-bottom: 3rem;">
                        <Typography
                            variant={TypographyVariant::H2}
                            text="Latest Expert Analysis"
                        />
                    </div>
                    {
                        if visible.is_empty() {
                            html! {
                                <div class="empty-state">
                                    <Typography
                                        variant={TypographyVariant::H3}
                                        text="No articles found"
                                    />
                                    <p>{"Try adjusting your search or category filter."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="post-grid">
                                    { visible.iter().map(|post| post_card(post)).collect::<Html>() }
                                </div>
                            }
                        }
                    }
                </div>
            </section>

            <section class="section">
                <div class="newsletter-box reveal">
                    <Typography
                        variant={TypographyVariant::H2}
                        text="Stay Ahead of Financial Innovation"
                    />
                    <Typography
                        variant={TypographyVariant::Body}
                        gradient=false
                        text="Join 50,000+ finance professionals who rely on our expert analysis. \
                              Get weekly insights on emerging trends, regulatory changes, and \
                              breakthrough technologies delivered directly to your inbox."
                    />
                    <div class="newsletter-form">
                        <input
                            type="email"
                            class="field-input"
                            placeholder="Enter your professional email"
                        />
                        <button class="btn-primary">{"Subscribe"}</button>
                    </div>
                    <p class="newsletter-note">
                        {"Free forever. Unsubscribe anytime. No spam, just valuable insights."}
                    </p>
                </div>
            </section>

            <Footer />
        </div>
    }
}
