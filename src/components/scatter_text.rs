use yew::prelude::*;

/// Where a letter starts before it flies into place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scatter {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

/// Deterministic per-letter offset so re-renders never reshuffle letters.
pub fn scatter_for(index: usize) -> Scatter {
    let seed = index as f64 * 137.5;
    Scatter {
        x: seed.sin() * 80.0 + (seed * 0.7).cos() * 60.0,
        y: (seed * 1.3).cos() * 60.0 + (seed * 0.5).sin() * 40.0,
        rotate: (seed * 2.0).sin() * 60.0,
    }
}

/// Lines of words of `(letter, running index)`. Spaces and line breaks do
/// not consume an index.
pub fn layout(text: &str) -> Vec<Vec<Vec<(char, usize)>>> {
    let mut index = 0;
    text.split('\n')
        .map(|line| {
            line.split(' ')
                .map(|word| {
                    word.chars()
                        .map(|letter| {
                            index += 1;
                            (letter, index - 1)
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ScatterTextProps {
    pub text: String,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(1.2)]
    pub duration: f64,
    #[prop_or(0.03)]
    pub stagger: f64,
}

#[function_component(ScatterText)]
pub fn scatter_text(props: &ScatterTextProps) -> Html {
    let lines = layout(&props.text);
    let line_count = lines.len();

    html! {
        <span class="scatter-text" aria-label={props.text.clone()}>
            <style>
                {r#"
                .scatter-line, .scatter-word { display: inline-block; white-space: nowrap; }
                .scatter-char {
                    display: inline-block;
                    opacity: 0;
                    transform: translate(var(--dx), var(--dy)) rotate(var(--rot)) scale(0.2);
                    filter: blur(10px);
                    animation-name: scatterIn;
                    animation-timing-function: cubic-bezier(0.23, 1, 0.32, 1);
                    animation-fill-mode: forwards;
                }
                @keyframes scatterIn {
                    to { opacity: 1; transform: none; filter: blur(0); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .scatter-char { animation: none; opacity: 1; transform: none; filter: none; }
                }
                "#}
            </style>
            { for lines.into_iter().enumerate().map(|(line_index, words)| {
                let word_count = words.len();
                html! {
                    <span class="scatter-line" aria-hidden="true">
                        { for words.into_iter().enumerate().map(|(word_index, letters)| html! {
                            <span class="scatter-word">
                                { for letters.into_iter().map(|(letter, index)| {
                                    let scatter = scatter_for(index);
                                    let style = format!(
                                        "--dx: {:.1}px; --dy: {:.1}px; --rot: {:.1}deg; animation-duration: {:.2}s; animation-delay: {:.2}s",
                                        scatter.x,
                                        scatter.y,
                                        scatter.rotate,
                                        props.duration,
                                        props.delay + index as f64 * props.stagger,
                                    );
                                    html! { <span class="scatter-char" {style}>{ letter }</span> }
                                }) }
                                if word_index + 1 < word_count {
                                    <span class="scatter-space">{ "\u{00a0}" }</span>
                                }
                            </span>
                        }) }
                        if line_index + 1 < line_count {
                            <br />
                        }
                    </span>
                }
            }) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_skip_spaces_and_breaks() {
        let lines = layout("ab c\nd");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![vec![('a', 0), ('b', 1)], vec![('c', 2)]]);
        assert_eq!(lines[1], vec![vec![('d', 3)]]);
    }

    #[test]
    fn scatter_is_stable_and_bounded() {
        assert_eq!(scatter_for(7), scatter_for(7));
        assert_eq!(scatter_for(0), Scatter { x: 60.0, y: 60.0, rotate: 0.0 });
        for index in 0..200 {
            let scatter = scatter_for(index);
            assert!(scatter.x.abs() <= 140.0);
            assert!(scatter.y.abs() <= 100.0);
            assert!(scatter.rotate.abs() <= 60.0);
        }
    }
}
