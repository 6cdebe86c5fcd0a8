use std::rc::Rc;

use yew::prelude::Reducible;

use crate::content::BlogPost;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Category {
    #[default]
    All,
    Technology,
    Security,
    Crypto,
    Mobile,
    Partnerships,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Technology,
        Category::Security,
        Category::Crypto,
        Category::Mobile,
        Category::Partnerships,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Technology => "Technology",
            Category::Security => "Security",
            Category::Crypto => "Crypto",
            Category::Mobile => "Mobile",
            Category::Partnerships => "Partnerships",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterCriteria {
    pub category: Category,
    pub search: String,
}

impl FilterCriteria {
    pub fn matches(&self, post: &BlogPost) -> bool {
        let category_ok = self.category == Category::All || post.category == self.category;
        let needle = self.search.to_lowercase();
        let search_ok = post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle);
        category_ok && search_ok
    }
}

pub enum FilterAction {
    SetCategory(Category),
    SetSearch(String),
}

impl Reducible for FilterCriteria {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: FilterAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FilterAction::SetCategory(category) => next.category = category,
            FilterAction::SetSearch(search) => next.search = search,
        }
        Rc::new(next)
    }
}

// Fresh linear scan on every call; the list is small and static.
pub fn visible_posts<'a>(criteria: &FilterCriteria, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
    posts.iter().filter(|post| criteria.matches(post)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BLOG_POSTS;

    fn criteria(category: Category, search: &str) -> FilterCriteria {
        FilterCriteria {
            category,
            search: search.to_string(),
        }
    }

    #[test]
    fn default_criteria_returns_full_list_in_order() {
        let visible = visible_posts(&FilterCriteria::default(), &BLOG_POSTS);
        assert_eq!(visible.len(), BLOG_POSTS.len());
        for (shown, post) in visible.iter().zip(BLOG_POSTS.iter()) {
            assert_eq!(shown.title, post.title);
        }
    }

    #[test]
    fn every_returned_post_satisfies_both_predicates() {
        let c = criteria(Category::Security, "the");
        let visible = visible_posts(&c, &BLOG_POSTS);
        assert!(!visible.is_empty());
        for post in &visible {
            assert_eq!(post.category, Category::Security);
            assert!(
                post.title.to_lowercase().contains("the")
                    || post.excerpt.to_lowercase().contains("the")
            );
        }
        // Everything excluded fails at least one predicate
        for post in BLOG_POSTS.iter() {
            if !visible.iter().any(|p| p.title == post.title) {
                assert!(!c.matches(post));
            }
        }
    }

    #[test]
    fn category_narrows_without_search() {
        let visible = visible_posts(&criteria(Category::Crypto, ""), &BLOG_POSTS);
        assert_eq!(visible.len(), 1);
        assert_eq!(
            visible[0].title,
            "Cryptocurrency Integration: The Next Financial Evolution"
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let lower = visible_posts(&criteria(Category::All, "quantum"), &BLOG_POSTS);
        let upper = visible_posts(&criteria(Category::All, "QUANTUM"), &BLOG_POSTS);
        assert_eq!(lower.len(), upper.len());
        assert!(!lower.is_empty());
    }

    #[test]
    fn security_bio_finds_exactly_the_biometric_post() {
        let visible = visible_posts(&criteria(Category::Security, "bio"), &BLOG_POSTS);
        assert_eq!(visible.len(), 1);
        assert_eq!(
            visible[0].title,
            "Biometric Authentication: The Password-Free Future"
        );
    }

    #[test]
    fn no_match_returns_empty() {
        let visible = visible_posts(&criteria(Category::All, "zzz"), &BLOG_POSTS);
        assert!(visible.is_empty());
    }

    #[test]
    fn reduce_overwrites_one_criterion_at_a_time() {
        let state = Rc::new(FilterCriteria::default());
        let state = state.reduce(FilterAction::SetCategory(Category::Mobile));
        assert_eq!(state.category, Category::Mobile);
        assert_eq!(state.search, "");
        let state = state.reduce(FilterAction::SetSearch("ux".to_string()));
        assert_eq!(state.category, Category::Mobile);
        assert_eq!(state.search, "ux");
    }
}
