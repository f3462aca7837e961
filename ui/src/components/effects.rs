//! Ambient decoration behind the navigation bar. Purely visual: these read no
//! app state and their animations are plain CSS keyframes.

use dioxus::prelude::*;

const PARTICLE_COUNT: usize = 20;

/// Placement and timing of one drifting particle, in percent and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    /// Inline style placing the particle and feeding the drift keyframes.
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.y, self.drift_x, self.drift_y, self.duration, self.delay
        )
    }
}

/// Spreads `count` particles over the bar using golden-ratio steps, which
/// looks random but renders identically on every platform.
pub fn particle_layout(count: usize) -> Vec<Particle> {
    const PHI: f64 = 0.618_033_988_749_895;
    (0..count)
        .map(|i| {
            let n = i as f64 + 1.0;
            let fx = (n * PHI).fract();
            let fy = (n * PHI * PHI).fract();
            Particle {
                x: fx * 100.0,
                y: fy * 100.0,
                drift_x: ((n * 0.37).fract() - 0.5) * 60.0,
                drift_y: ((n * 0.71).fract() - 0.5) * 60.0,
                duration: 5.0 + (n * 0.53).fract() * 5.0,
                delay: (n * 0.29).fract() * 3.0,
            }
        })
        .collect()
}

/// The glowing line along the bottom edge of the bar.
#[component]
pub fn NeonLine() -> Element {
    rsx! {
        div { class: "neon-line",
            div { class: "neon-line-glow" }
            div { class: "neon-line-core" }
        }
    }
}

#[component]
pub fn ParticleField() -> Element {
    let particles = use_hook(|| particle_layout(PARTICLE_COUNT));

    rsx! {
        div { class: "particle-field", "aria-hidden": "true",
            for (i, p) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: p.style(),
                }
            }
        }
    }
}
