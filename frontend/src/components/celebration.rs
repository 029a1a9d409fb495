use yew::prelude::*;

use crate::components::particles::CelebrationParticles;

#[function_component(Celebration)]
pub fn celebration() -> Html {
    html! {
        <div class="celebration" role="dialog" aria-live="polite">
            <CelebrationParticles />
            <div class="celebration__content">
                <h2 class="display-text" style="color: #fff; font-size: clamp(40px, 8vw, 80px);">
                    {"I love you."}
                </h2>
                <p class="body-text" style="color: rgba(255,255,255,0.7); margin-top: 20px;">
                    {"Always."}
                </p>
            </div>
        </div>
    }
}
