use web_sys::js_sys::Math;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BackgroundVariant {
    #[default]
    Default,
    Blue,
    Green,
    Purple,
}

impl BackgroundVariant {
    pub fn class(self) -> &'static str {
        match self {
            BackgroundVariant::Default => "bg-tint-default",
            BackgroundVariant::Blue => "bg-tint-blue",
            BackgroundVariant::Green => "bg-tint-green",
            BackgroundVariant::Purple => "bg-tint-purple",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    scale: f64,
    opacity: f64,
    duration: f64,
    delay: f64,
    drift: f64,
}

const PARTICLE_COUNT: usize = 30;

#[derive(Properties, PartialEq)]
pub struct AnimatedBackgroundProps {
    #[prop_or_default]
    pub variant: BackgroundVariant,
}

#[function_component(AnimatedBackground)]
pub fn animated_background(props: &AnimatedBackgroundProps) -> Html {
    // Randomized once per mount; the tweens themselves are CSS keyframes
    let particles = use_memo(
        |_| {
            (0..PARTICLE_COUNT)
                .map(|_| Particle {
                    left: Math::random() * 100.0,
                    top: Math::random() * 100.0,
                    scale: Math::random() * 0.5 + 0.3,
                    opacity: Math::random() * 0.6 + 0.2,
                    duration: Math::random() * 10.0 + 15.0,
                    delay: Math::random() * 5.0,
                    drift: Math::random() * 200.0 - 100.0,
                })
                .collect::<Vec<_>>()
        },
        (),
    );

    html! {
        <div class={classes!("animated-background", props.variant.class())}>
            <style>
            {r#"
            .animated-background {
                position: fixed;
                inset: 0;
                overflow: hidden;
                pointer-events: none;
                z-index: -1;
            }
            .bg-tint-default { background: linear-gradient(135deg, rgba(17, 24, 39, 0.2), #00040f 50%, rgba(30, 58, 138, 0.2)); }
            .bg-tint-blue { background: linear-gradient(135deg, rgba(30, 58, 138, 0.2), #00040f 50%, rgba(88, 28, 135, 0.2)); }
            .bg-tint-green { background: linear-gradient(135deg, rgba(20, 83, 45, 0.2), #00040f 50%, rgba(19, 78, 74, 0.2)); }
            .bg-tint-purple { background: linear-gradient(135deg, rgba(88, 28, 135, 0.2), #00040f 50%, rgba(131, 24, 67, 0.2)); }
            .bg-particle {
                position: absolute;
                width: 8px;
                height: 8px;
                background: rgba(0, 246, 255, 0.3);
                border-radius: 50%;
                box-shadow: 0 0 10px rgba(0, 246, 255, 0.3);
                animation-name: particle-float;
                animation-timing-function: ease-in-out;
                animation-iteration-count: infinite;
                animation-direction: alternate;
            }
            @keyframes particle-float {
                from { transform: translate(0, 0) rotate(0deg); }
                to { transform: translate(var(--drift), -100px) rotate(360deg); }
            }
            .bg-blob {
                position: absolute;
                width: 18rem;
                height: 18rem;
                border-radius: 50%;
                filter: blur(40px);
                opacity: 0.3;
                animation: pulse 6s ease-in-out infinite;
            }
            .bg-grid {
                position: absolute;
                inset: 0;
                opacity: 0.03;
                background-image:
                    linear-gradient(rgba(0, 246, 255, 0.1) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(0, 246, 255, 0.1) 1px, transparent 1px);
                background-size: 50px 50px;
            }
            "#}
            </style>
            <div class="bg-blob" style="top: 0; left: 0; background: rgba(0, 246, 255, 0.2);"></div>
            <div class="bg-blob" style="top: 0; right: 0; background: rgba(96, 165, 250, 0.2); animation-delay: 1s;"></div>
            <div class="bg-blob" style="bottom: 0; left: 0; background: rgba(192, 132, 252, 0.2); animation-delay: 2s;"></div>
            {
                particles.iter().map(|p| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; transform: scale({:.2}); opacity: {:.2}; \
                         animation-duration: {:.1}s; animation-delay: {:.1}s; --drift: {:.0}px;",
                        p.left, p.top, p.scale, p.opacity, p.duration, p.delay, p.drift,
                    );
                    html! { <div class="bg-particle" style={style}></div> }
                }).collect::<Html>()
            }
            <div class="bg-grid"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_tint_classes() {
        let variants = [
            BackgroundVariant::Default,
            BackgroundVariant::Blue,
            BackgroundVariant::Green,
            BackgroundVariant::Purple,
        ];
        let classes: Vec<_> = variants.iter().map(|v| v.class()).collect();
        for (i, class) in classes.iter().enumerate() {
            assert!(class.starts_with("bg-tint-"));
            assert!(!classes[..i].contains(class));
        }
    }
}
