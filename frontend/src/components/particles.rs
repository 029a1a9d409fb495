use yew::prelude::*;
use log::debug;

use crate::config;
use crate::motion::particles::{generate, Particle, ParticleSpec};

fn render(particles: &[Particle], class: &'static str) -> Html {
    particles
        .iter()
        .map(|p| html! { <div key={p.id} class={class} style={p.style()}></div> })
        .collect::<Html>()
}

/// Drifting motes behind the whole journey. Generated once per mount.
#[function_component(Particles)]
pub fn particles() -> Html {
    let particles = use_memo(
        |_| {
            let count = config::ambient_particle_count(config::viewport_width());
            debug!("Generating {} ambient particles", count);
            generate(count, &ParticleSpec::ambient(), None)
        },
        (),
    );

    html! {
        <div class="particles">
            { render(&particles, "particle") }
        </div>
    }
}

#[function_component(CelebrationParticles)]
pub fn celebration_particles() -> Html {
    let particles = use_memo(
        |_| generate(config::CELEBRATION_PARTICLES, &ParticleSpec::celebration(), None),
        (),
    );

    html! { <>{ render(&particles, "celebration__particle") }</> }
}

#[function_component(AmbientCanvas)]
pub fn ambient_canvas() -> Html {
    html! {
        <div class="ambient-canvas">
            <div class="ambient-orb ambient-orb--1"></div>
            <div class="ambient-orb ambient-orb--2"></div>
            <div class="ambient-orb ambient-orb--3"></div>
        </div>
    }
}
