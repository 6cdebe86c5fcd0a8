use yew::prelude::*;

// Closed set of text styles; an unknown variant is unrepresentable, unlike the
// stringly-typed prop it replaces.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypographyVariant {
    H1,
    H2,
    H3,
    H4,
    Subtitle,
    Body,
}

impl TypographyVariant {
    pub fn class(self) -> &'static str {
        match self {
            TypographyVariant::H1 => "typo-h1",
            TypographyVariant::H2 => "typo-h2",
            TypographyVariant::H3 => "typo-h3",
            TypographyVariant::H4 => "typo-h4",
            TypographyVariant::Subtitle => "typo-subtitle",
            TypographyVariant::Body => "typo-body",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypographyProps {
    pub variant: TypographyVariant,
    pub text: AttrValue,
    #[prop_or(true)]
    pub gradient: bool,
    #[prop_or(false)]
    pub animated: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Typography)]
pub fn typography(props: &TypographyProps) -> Html {
    let classes = classes!(
        props.variant.class(),
        props.gradient.then_some("text-gradient"),
        props.class.clone(),
    );

    if props.animated {
        // Per-character entrance, staggered by index
        let chars = props
            .text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let style = format!("animation-delay: {}ms;", i * 20);
                let shown = if ch == ' ' { '\u{a0}' } else { ch };
                html! { <span class="typo-char" style={style}>{shown}</span> }
            })
            .collect::<Html>();
        html! { <div class={classes}>{chars}</div> }
    } else {
        html! { <div class={classes}>{props.text.clone()}</div> }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_maps_to_its_own_class() {
        let variants = [
            TypographyVariant::H1,
            TypographyVariant::H2,
            TypographyVariant::H3,
            TypographyVariant::H4,
            TypographyVariant::Subtitle,
            TypographyVariant::Body,
        ];
        let classes: Vec<_> = variants.iter().map(|v| v.class()).collect();
        for (i, class) in classes.iter().enumerate() {
            assert!(class.starts_with("typo-"));
            assert!(!classes[..i].contains(class));
        }
    }
}
