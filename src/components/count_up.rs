use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TICK_MS: u32 = 40;

pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub target: f64,
    #[prop_or(0)]
    pub decimals: usize,
    #[prop_or(2_000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

// Ticks toward the target with a chain of timeouts, one per render, the same
// way the staged animations elsewhere advance their state.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let shown = use_state(|| 0.0f64);

    {
        let shown = shown.clone();
        let target = props.target;
        let duration = props.duration_ms.max(TICK_MS);
        use_effect(move || {
            if *shown < target {
                let step = target * f64::from(TICK_MS) / f64::from(duration);
                let next = (*shown + step).min(target);
                let setter = shown.setter();
                let timeout = Timeout::new(TICK_MS, move || {
                    setter.set(next);
                });
                timeout.forget();
            }
            || ()
        });
    }

    let number = if props.decimals == 0 {
        group_thousands(shown.round() as u32)
    } else {
        format!("{:.*}", props.decimals, *shown)
    };

    html! {
        <span class="count-up">
            { props.prefix.clone() }{ number }{ props.suffix.clone() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_847), "12,847");
        assert_eq!(group_thousands(12_848), "12,848");
        assert_eq!(group_thousands(5_000_000), "5,000,000");
    }
}
