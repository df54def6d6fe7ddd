//! Scroll-linked animation math shared by the pages.

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Piecewise linear mapping of `value` from `input` stops to `output` stops,
/// clamped to the first and last output.
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let (Some(first), Some(last)) = (input.first(), input.last()) else {
        return 0.0;
    };
    if value <= *first {
        return output[0];
    }
    if value >= *last {
        return output[output.len() - 1];
    }

    for i in 1..input.len() {
        if value <= input[i] {
            let span = input[i] - input[i - 1];
            if span <= 0.0 {
                return output[i];
            }
            let t = (value - input[i - 1]) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[output.len() - 1]
}

/// Progress of an element scrolling through the viewport, from its top
/// reaching the viewport top (0.0) to its bottom reaching the viewport
/// bottom (1.0). `top` is the element's bounding-rect top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height - viewport_height;
    if travel <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / travel).clamp(0.0, 1.0)
}

/// Whether at least `threshold` of an element's height is inside the viewport.
pub fn is_visible(top: f64, height: f64, viewport_height: f64, threshold: f64) -> bool {
    if height <= 0.0 {
        return false;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    visible / height >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_clamps_and_blends() {
        let input = [0.0, 0.15, 0.8, 0.95];
        let output = [0.0, 1.0, 1.0, 0.0];
        assert_eq!(interpolate(-1.0, &input, &output), 0.0);
        assert_eq!(interpolate(0.5, &input, &output), 1.0);
        assert_eq!(interpolate(2.0, &input, &output), 0.0);
        assert!((interpolate(0.075, &input, &output) - 0.5).abs() < 1e-9);
        assert!((interpolate(0.875, &input, &output) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn interpolate_handles_descending_output() {
        assert!((interpolate(0.5, &[0.1, 0.9], &[0.0, -800.0]) + 400.0).abs() < 1e-6);
    }

    #[test]
    fn progress_runs_from_top_to_bottom() {
        assert_eq!(scroll_progress(100.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(-2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 800.0, 1000.0), 1.0);
    }

    #[test]
    fn visibility_threshold() {
        assert!(is_visible(0.0, 1000.0, 1000.0, 0.3));
        assert!(is_visible(700.0, 1000.0, 1000.0, 0.3));
        assert!(!is_visible(701.0, 1000.0, 1000.0, 0.3));
        assert!(!is_visible(-900.0, 1000.0, 1000.0, 0.3));
    }
}
