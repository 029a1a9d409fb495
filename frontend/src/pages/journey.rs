use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;
use log::info;

use crate::audio::hooks::use_audio_unlock;
use crate::components::celebration::Celebration;
use crate::components::music_toggle::MusicToggle;
use crate::components::particles::{AmbientCanvas, Particles};
use crate::components::progressive_text::ProgressiveText;
use crate::components::reveal::{BlurFragment, Reveal, TimelineNode};
use crate::config;
use crate::motion::parallax::{scroll_progress, PresencePose};
use crate::motion::tween::Direction;
use crate::pages::artifact::ArtifactAct;
use crate::session::{use_scroll_lock, SessionAction, SessionState};

fn page_metrics() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let scroll_height = window.document()?.document_element()?.scroll_height() as f64;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some((scroll_height, viewport_height))
}

#[function_component(Presence)]
fn presence() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let progress = page_metrics()
        .map(|(height, viewport)| scroll_progress(scroll_y, height, viewport))
        .unwrap_or(0.0);
    let pose = PresencePose::at(progress);

    html! {
        <section class="act act--presence" id="act-presence">
            <div class="presence__breath-ring"></div>
            <div class="presence__breath-ring presence__breath-ring--2"></div>
            <div class="presence__breath-ring presence__breath-ring--3"></div>

            <div class="presence__text-container" style={pose.style()}>
                <h1 class="display-text display-text--sub fade-in" style="color: var(--full); margin-bottom: 10px; animation-duration: 3s; animation-delay: 0.5s;">
                    {"♡ For Oprah"}
                </h1>
                <p class="body-text fade-in" style="color: rgba(255,255,255,0.45); text-align: center; animation-duration: 3s; animation-delay: 1.5s;">
                    {"This is a journey through words."}
                </p>
                <p class="body-text fade-in" style="color: rgba(255,255,255,0.35); text-align: center; animation-duration: 3s; animation-delay: 3s;">
                    {"Words that, to me, are the only way to describe you."}
                </p>
                <p class="body-text fade-in" style="color: rgba(255,255,255,0.15); text-align: center; font-size: 14px; animation-duration: 4s; animation-delay: 5s;">
                    {"scroll slowly"}
                </p>
            </div>

            <div class="presence__scroll-hint">
                <div class="scroll-line"></div>
                <span class="scroll-label">{"begin"}</span>
            </div>
        </section>
    }
}

fn ethereal_act() -> Html {
    html! {
        <section class="act act--ethereal" id="act-ethereal">
            <div class="act__inner">
                <Reveal>
                    <p class="chapter-label">{"Act I"}</p>
                </Reveal>
                <Reveal delay={0.2}>
                    <div class="ethereal__definition">
                        <h2 class="display-text display-text--section">
                            <span class="ethereal__glow-word">{"Ethereal"}</span>
                        </h2>
                        <p class="ethereal__phonetic">{"/ɪˈθɪəriəl/"}</p>
                        <p class="ethereal__meaning">
                            {"adjective, extremely delicate and light, in a way that seems too perfect for this world."}
                        </p>
                    </div>
                </Reveal>

                <div class="ethereal__moments">
                    <Reveal delay={0.1}>
                        <div class="ethereal__moment">
                            <p class="poetic-text">
                                {"There is a kind of beauty"}<br />
                                {"that doesn't demand to be seen."}
                            </p>
                            <div class="ethereal__divider"></div>
                            <p class="body-text">
                                {"It doesn't shout. It doesn't compete. It simply exists, and somehow, that's enough to re-arrange every room it enters."}
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay={0.1} direction={Direction::Right}>
                        <div class="ethereal__moment ethereal__moment--right">
                            <p class="poetic-text">
                                {"She moves through the world"}<br />
                                {"like light moves through water."}
                            </p>
                            <div class="ethereal__divider"></div>
                            <p class="body-text" style="margin-left: auto;">
                                {"Softly. Without force. Bending everything around her effortlessly, and making the ordinary feel impossibly beautiful."}
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <div class="ethereal__moment ethereal__moment--center">
                            <p class="poetic-text">
                                {"Some people remind you"}<br />
                                <span class="ethereal__glow-word">{"that gentleness is not weakness."}</span>
                            </p>
                            <div class="ethereal__divider"></div>
                            <p class="body-text" style="text-align: center; margin: 0 auto;">
                                {"That the softest voice in the room can carry the most weight. That kindness, in a world this loud, is an act of quiet rebellion."}
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay={0.15} direction={Direction::Left}>
                        <div class="ethereal__moment">
                            <p class="poetic-text">{"You are that person."}</p>
                            <p class="body-text">
                                {"Every smile, every glance, every unspoken understanding. It all feels like it was lifted from somewhere beyond here. Somewhere softer. Somewhere "}
                                <span class="ethereal__glow-word">{"ethereal"}</span>
                                {"."}
                            </p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

fn ineffable_act() -> Html {
    html! {
        <section class="act act--ineffable" id="act-ineffable">
            <div class="act__inner">
                <Reveal>
                    <p class="chapter-label">{"Act II"}</p>
                </Reveal>
                <Reveal delay={0.2}>
                    <h2 class="display-text display-text--section" style="margin-bottom: 20px;">
                        <span class="ineffable__rose-accent">{"Ineffable"}</span>
                    </h2>
                    <p class="body-text" style="margin-bottom: 60px;">
                        <em>{"/ɪnˈɛfəb(ə)l/"}</em>{", too great or extreme to be expressed in words."}
                    </p>
                </Reveal>

                <div class="ineffable__fragments">
                    <BlurFragment>
                        <Reveal delay={0.1}>
                            <p class="poetic-text">
                                {"How do you describe something"}<br />
                                {"that refuses to fit inside language?"}
                            </p>
                            <p class="body-text" style="margin-top: 20px;">
                                {"I've tried. I've searched for the right word. The exact combination of letters that captures what it feels like to be near you. But every word I find feels too small. Too flat. Too "}
                                <em>{"human"}</em>{"."}
                            </p>
                        </Reveal>
                    </BlurFragment>
                    <BlurFragment>
                        <Reveal delay={0.1}>
                            <p class="poetic-text">
                                {"It's the feeling"}<br />
                                <span class="ineffable__rose-accent">{"between the last note"}</span><br />
                                {"and the silence after."}
                            </p>
                            <p class="body-text" style="margin-top: 20px;">
                                {"That pause where your chest tightens and the world holds its breath. That's the closest I can get. That tiny, infinite moment. That's what you feel like."}
                            </p>
                        </Reveal>
                    </BlurFragment>
                    <BlurFragment>
                        <Reveal delay={0.1}>
                            <p class="poetic-text">
                                {"You are the word"}<br />
                                {"I keep trying to invent."}
                            </p>
                            <p class="body-text" style="margin-top: 20px;">
                                {"A word that means "}<em>{"\"safe\""}</em>{" and "}<em>{"\"thrilling\""}</em>
                                {" at the same time. That means "}<em>{"\"home\""}</em>
                                {" even when we're nowhere near one. That means"}
                                <span class="ineffable__rose-accent">{" \"everything I didn't know I was looking for.\""}</span>
                            </p>
                        </Reveal>
                    </BlurFragment>
                    <BlurFragment>
                        <Reveal delay={0.1}>
                            <div class="ethereal__moment ethereal__moment--center">
                                <p class="poetic-text" style="font-size: clamp(24px, 3vw, 36px);">
                                    {"Some things are too real for words."}
                                </p>
                                <p class="body-text" style="text-align: center; margin: 20px auto 0;">
                                    {"So I won't try to contain this in a sentence."}<br />
                                    {"I'll just let you feel it, the way I do."}
                                </p>
                            </div>
                        </Reveal>
                    </BlurFragment>
                </div>
            </div>
        </section>
    }
}

fn serendipity_act() -> Html {
    html! {
        <section class="act act--serendipity" id="act-serendipity">
            <div class="act__inner">
                <Reveal>
                    <p class="chapter-label">{"Act III"}</p>
                </Reveal>
                <Reveal delay={0.2}>
                    <h2 class="display-text display-text--section" style="margin-bottom: 16px;">
                        <span class="serendipity__amber">{"Serendipity"}</span>
                    </h2>
                    <p class="body-text" style="margin-bottom: 60px;">
                        <em>{"/ˌsɛr.ənˈdɪp.ɪ.ti/"}</em>{". The occurrence of events by chance in a happy way."}
                    </p>
                </Reveal>

                <div class="serendipity__timeline">
                    <TimelineNode label="The Probability">
                        <p class="poetic-text">{"Of all the lives being lived right now,"}</p>
                        <p class="body-text" style="margin-top: 12px;">
                            {"in all the cities, on all the streets, in all the rooms where someone is staring at the ceiling wondering if the universe ever gets these things right, somehow, inexplicably, our timelines intersected."}
                        </p>
                    </TimelineNode>
                    <TimelineNode label="The Coincidence">
                        <p class="poetic-text">
                            {"There wasn't supposed to be "}<span class="serendipity__amber">{"a moment."}</span>
                        </p>
                        <p class="body-text" style="margin-top: 12px;">
                            {"Not a grand entrance, not a movie scene. Just ordinary circumstance doing extraordinary things. A conversation that lasted too long, a laugh that rang too clear, a silence that felt too comfortable for two people who barely knew each other."}
                        </p>
                    </TimelineNode>
                    <TimelineNode label="The Recognition">
                        <p class="poetic-text">{"And then something clicked."}</p>
                        <p class="body-text" style="margin-top: 12px;">
                            {"Not like a switch. More like a sunrise. Gradual, undeniable, and impossible to look away from once you noticed it was happening. The recognition that this wasn't chance anymore. This was"}
                            <span class="serendipity__amber">{" something."}</span>
                        </p>
                    </TimelineNode>
                    <TimelineNode label="The Certainty">
                        <p class="poetic-text">
                            {"I don't believe in coincidences"}<br />{" that feel this deliberate."}
                        </p>
                        <p class="body-text" style="margin-top: 12px;">
                            {"The universe isn't that random. Not when every \"accident\" keeps leading back to the same person. Not when every road I wasn't supposed to take led me closer to "}
                            <span class="serendipity__amber">{"you."}</span>
                        </p>
                    </TimelineNode>
                    <TimelineNode label="The Truth">
                        <p class="poetic-text" style="font-size: clamp(24px, 3vw, 36px);">
                            {"This wasn't planned."}<br />
                            <span class="serendipity__amber">{"But it was right."}</span>
                        </p>
                    </TimelineNode>
                </div>
            </div>
        </section>
    }
}

fn radiance_act() -> Html {
    html! {
        <section class="act act--radiance" id="act-radiance">
            <div class="radiance__warm-glow"></div>
            <div class="act__inner">
                <Reveal>
                    <p class="chapter-label">{"Act IV"}</p>
                </Reveal>
                <Reveal delay={0.2}>
                    <h2 class="display-text display-text--section" style="margin-bottom: 16px;">
                        <span class="radiance__gold-text">{"Radiance"}</span>
                    </h2>
                    <p class="body-text" style="margin-bottom: 60px;">
                        <em>{"/ˈreɪ.di.əns/"}</em>{". Light or heat as emitted or reflected; warm joy."}
                    </p>
                </Reveal>

                <div class="radiance__layers">
                    <Reveal delay={0.1}>
                        <div class="ethereal__moment">
                            <p class="poetic-text">
                                {"Before you,"}<br />
                                {"I didn't know light could be "}<span class="radiance__gold-text">{"warm."}</span>
                            </p>
                            <div class="ethereal__divider" style="background: linear-gradient(to right, transparent, var(--radiance-gold), transparent);"></div>
                            <p class="body-text">
                                {"I saw the world in clear, cold detail. Everything was visible but nothing glowed. Nothing pulsed. Nothing made the ordinary feel like it belonged in a memory worth keeping."}
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay={0.1} direction={Direction::Right}>
                        <div class="ethereal__moment ethereal__moment--right">
                            <p class="poetic-text">
                                {"You changed the temperature"}<br />
                                {"of "}<span class="radiance__warm-text">{"everything."}</span>
                            </p>
                            <div class="ethereal__divider" style="background: linear-gradient(to right, transparent, var(--radiance-warm), transparent); margin-left: auto;"></div>
                            <p class="body-text" style="margin-left: auto;">
                                {"Mornings feel different. Sounds land softer. Even the air tastes different when I know I'm going to hear your voice. You didn't just brighten my world. You "}
                                <em>{"warmed"}</em>{" it."}
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <div class="ethereal__moment ethereal__moment--center">
                            <p class="poetic-text" style="font-size: clamp(24px, 3.5vw, 40px);">
                                {"You don't shine"}<br />
                                <span class="radiance__gold-text">{"to be seen."}</span>
                            </p>
                            <p class="body-text" style="text-align: center; margin: 20px auto 0;">
                                {"You shine because you can't help it. It comes from somewhere deep. A steadiness, a kindness, a radiance that isn't performed but"}
                                <em>{" lived"}</em>
                                {". And I watch it light up every room, every conversation, every silence we share."}
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay={0.15}>
                        <div class="ethereal__moment">
                            <p class="poetic-text">
                                {"I want to spend my life"}<br />
                                {"in that glow."}
                            </p>
                            <p class="body-text">
                                {"Not standing in the spotlight. Standing beside you. In the quiet warmth. In the golden edge of your "}
                                <span class="radiance__gold-text">{"radiance."}</span>
                            </p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

fn stillness_act() -> Html {
    html! {
        <section class="act act--stillness" id="act-stillness">
            <div class="act__inner">
                <div class="stillness__center">
                    <Reveal>
                        <div style="display: flex; justify-content: center;">
                            <div class="stillness__dot"></div>
                        </div>
                    </Reveal>
                    <p class="stillness__text">
                        <ProgressiveText text="Take a breath." delay={0.5} />
                    </p>
                    <Reveal delay={1.5}>
                        <p class="stillness__text" style="opacity: 0.5;">
                            {"What comes next is everything."}
                        </p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

const LETTER_STYLE: &str = "margin: 0 auto 32px; max-width: 520px;";
const LETTER_LINE_STYLE: &str = "margin: 0 auto 20px; max-width: 520px;";

#[derive(Properties, PartialEq)]
struct QuestionActProps {
    on_yes: Callback<()>,
}

#[function_component(QuestionAct)]
fn question_act(props: &QuestionActProps) -> Html {
    let onclick = {
        let on_yes = props.on_yes.clone();
        Callback::from(move |_: MouseEvent| on_yes.emit(()))
    };

    html! {
        <section class="act act--question" id="act-question">
            <div class="act__inner">
                <div class="question__container">
                    <Reveal>
                        <p class="chapter-label" style="text-align: center;">{"ACT VI — LOVE"}</p>
                    </Reveal>
                    <div class="question__letter" style="text-align: center; margin-bottom: 80px;">
                        <Reveal delay={0.2}>
                            <p class="body-text" style={LETTER_STYLE}>
                                {"I don't believe much in labels. Not because they don't matter, but because they're too small for what I feel."}
                            </p>
                        </Reveal>
                        <Reveal delay={0.4}>
                            <p class="body-text" style={LETTER_STYLE}>
                                {"Words like boyfriend and girlfriend try to simplify something that, to me, is anything but simple."}
                            </p>
                        </Reveal>
                        <Reveal delay={0.6}>
                            <p class="body-text" style={LETTER_LINE_STYLE}>{"What I believe in is choosing someone."}</p>
                            <p class="body-text" style={LETTER_LINE_STYLE}>{"Showing up."}</p>
                            <p class="body-text" style={LETTER_LINE_STYLE}>{"Listening."}</p>
                            <p class="body-text" style={LETTER_LINE_STYLE}>{"Caring, even when it's inconvenient."}</p>
                            <p class="body-text" style={LETTER_STYLE}>{"Staying, even when it's hard."}</p>
                        </Reveal>
                        <Reveal delay={0.8}>
                            <p class="body-text" style={LETTER_STYLE}>
                                {"I believe in love that feels safe. Love that feels honest. Love that doesn't need a name to be real, but chooses one anyway, because it wants to mean something."}
                            </p>
                        </Reveal>
                        <Reveal delay={1.0}>
                            <p class="body-text" style={LETTER_STYLE}>
                                {"I've poured everything I feel into this. Every word, every breath, every quiet thought I never knew how to say out loud."}
                            </p>
                        </Reveal>
                        <Reveal delay={1.2}>
                            <p class="body-text" style="margin: 0 auto; max-width: 520px;">
                                {"And after all of it, there's one thing I know with certainty."}
                            </p>
                        </Reveal>
                    </div>

                    <Reveal delay={0.5}>
                        <h2 class="question__main" style="margin-top: 40px;">
                            {"Will you be my "}
                            <span class="question__highlight">{"love"}</span>
                            {"?"}
                        </h2>
                    </Reveal>
                    <Reveal delay={0.4}>
                        <div class="question__response">
                            <button class="question__btn question__btn--yes" onclick={onclick}>
                                {"Yes ♡"}
                            </button>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Journey)]
pub fn journey() -> Html {
    let session = use_reducer(SessionState::default);
    let audio_ref = use_node_ref();

    use_scroll_lock(session.scroll_locked);

    let on_unlock = {
        let session = session.dispatcher();
        Callback::from(move |_: ()| session.dispatch(SessionAction::AudioUnlocked))
    };
    use_audio_unlock(audio_ref.clone(), on_unlock);

    let on_playback_change = {
        let session = session.dispatcher();
        Callback::from(move |playing: bool| session.dispatch(SessionAction::PlaybackChanged(playing)))
    };

    let on_toggle_artifact = {
        let session = session.dispatcher();
        Callback::from(move |_: ()| session.dispatch(SessionAction::ToggleArtifact))
    };

    let on_yes = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            if !session.celebrated {
                info!("Proposal accepted");
            }
            session.dispatch(SessionAction::Celebrate);
        })
    };

    html! {
        <>
            <AmbientCanvas />
            <Particles />

            <audio
                ref={audio_ref.clone()}
                src={config::audio_source_url()}
                playsinline=true
                preload="none"
            />

            <MusicToggle
                audio_ref={audio_ref}
                playing={session.audio_playing}
                on_change={on_playback_change}
            />

            <div class="journey">
                <Presence />
                { ethereal_act() }
                { ineffable_act() }
                { serendipity_act() }
                { radiance_act() }
                <ArtifactAct expanded={session.expanded_artifact} on_toggle={on_toggle_artifact} />
                { stillness_act() }
                <QuestionAct on_yes={on_yes} />
            </div>

            if session.celebrated {
                <Celebration />
            }

            <style>{ STYLES }</style>
        </>
    }
}

const STYLES: &str = r#"
    :root {
        --full: #fdf2f8;
        --light: rgba(255, 255, 255, 0.85);
        --rose: #fda4af;
        --amber: #fcd34d;
        --radiance-gold: #fbbf24;
        --radiance-warm: #fb923c;
        --ease: cubic-bezier(0.25, 0.1, 0.25, 1);
    }

    body {
        margin: 0;
        background: #07060b;
        color: var(--light);
        font-family: "Cormorant Garamond", Georgia, serif;
        overflow-x: hidden;
    }

    .ambient-canvas {
        position: fixed;
        inset: 0;
        z-index: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .ambient-orb {
        position: absolute;
        border-radius: 50%;
        filter: blur(120px);
        opacity: 0.25;
        animation: orbDrift 30s ease-in-out infinite alternate;
    }
    .ambient-orb--1 { width: 520px; height: 520px; top: -10%; left: -10%; background: #7c3aed; }
    .ambient-orb--2 { width: 440px; height: 440px; bottom: -15%; right: -10%; background: #db2777; animation-delay: -10s; }
    .ambient-orb--3 { width: 360px; height: 360px; top: 40%; left: 40%; background: #f59e0b; opacity: 0.12; animation-delay: -20s; }
    @keyframes orbDrift {
        from { transform: translate(0, 0) scale(1); }
        to { transform: translate(60px, -40px) scale(1.15); }
    }

    .particles {
        position: fixed;
        inset: 0;
        z-index: 1;
        pointer-events: none;
        overflow: hidden;
    }
    .particle {
        position: absolute;
        bottom: -10px;
        border-radius: 50%;
        background: #fff;
        animation-name: particleRise;
        animation-timing-function: linear;
        animation-iteration-count: infinite;
    }
    @keyframes particleRise {
        from { transform: translateY(0); }
        to { transform: translateY(-110vh); }
    }

    .music-toggle {
        position: fixed;
        bottom: 20px;
        right: 20px;
        z-index: 1000;
        width: 40px;
        height: 40px;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: white;
        cursor: pointer;
        opacity: 0.6;
        backdrop-filter: blur(4px);
        transition: opacity 0.3s ease, transform 0.3s ease;
    }
    .music-toggle:hover {
        opacity: 1;
        transform: scale(1.1);
    }

    .journey {
        position: relative;
        z-index: 2;
    }
    .act {
        position: relative;
        min-height: 100vh;
        padding: 120px 24px;
        box-sizing: border-box;
    }
    .act__inner {
        max-width: 880px;
        margin: 0 auto;
    }
    .chapter-label {
        font-size: 12px;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.35);
    }
    .display-text {
        font-weight: 300;
        line-height: 1.1;
        margin: 0;
    }
    .display-text--section { font-size: clamp(48px, 8vw, 96px); }
    .display-text--sub { font-size: clamp(32px, 5vw, 56px); }
    .poetic-text {
        font-size: clamp(22px, 2.6vw, 30px);
        font-style: italic;
        line-height: 1.5;
        color: var(--full);
    }
    .body-text {
        font-size: 18px;
        line-height: 1.8;
        max-width: 560px;
        color: rgba(255, 255, 255, 0.6);
    }

    .fade-in {
        opacity: 0;
        animation-name: fadeIn;
        animation-fill-mode: forwards;
        animation-timing-function: var(--ease);
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    .act--presence {
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .presence__text-container {
        position: relative;
        z-index: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        will-change: transform, opacity;
    }
    .presence__breath-ring {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 280px;
        height: 280px;
        margin: -140px 0 0 -140px;
        border-radius: 50%;
        border: 1px solid rgba(253, 164, 175, 0.15);
        animation: breathe 8s ease-in-out infinite;
    }
    .presence__breath-ring--2 { animation-delay: 2.6s; }
    .presence__breath-ring--3 { animation-delay: 5.3s; }
    @keyframes breathe {
        0% { transform: scale(0.6); opacity: 0; }
        50% { opacity: 1; }
        100% { transform: scale(2.2); opacity: 0; }
    }
    .presence__scroll-hint {
        position: absolute;
        bottom: 40px;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 8px;
    }
    .scroll-line {
        width: 1px;
        height: 48px;
        background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.4));
        animation: scrollPulse 2.4s ease-in-out infinite;
    }
    .scroll-label {
        font-size: 11px;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.3);
    }
    @keyframes scrollPulse {
        0%, 100% { opacity: 0.2; }
        50% { opacity: 1; }
    }

    .ethereal__glow-word {
        color: var(--full);
        text-shadow: 0 0 24px rgba(244, 114, 182, 0.6);
    }
    .ethereal__phonetic { color: rgba(255, 255, 255, 0.4); font-style: italic; }
    .ethereal__meaning { color: rgba(255, 255, 255, 0.55); max-width: 480px; }
    .ethereal__moments, .radiance__layers {
        display: flex;
        flex-direction: column;
        gap: 140px;
        margin-top: 120px;
    }
    .ethereal__moment--right { text-align: right; }
    .ethereal__moment--center { text-align: center; }
    .ethereal__divider {
        width: 120px;
        height: 1px;
        margin: 24px 0;
        background: linear-gradient(to right, transparent, rgba(244, 114, 182, 0.5), transparent);
    }
    .ethereal__moment--center .ethereal__divider { margin: 24px auto; }

    .ineffable__rose-accent { color: var(--rose); }
    .ineffable__fragments {
        display: flex;
        flex-direction: column;
        gap: 120px;
    }
    .ineffable__fragment {
        position: relative;
    }
    .ineffable__blur-overlay {
        position: absolute;
        inset: 0;
        pointer-events: none;
        backdrop-filter: blur(8px);
        transition: backdrop-filter 1.6s var(--ease), opacity 1.6s var(--ease);
    }
    .ineffable__fragment.revealed .ineffable__blur-overlay {
        backdrop-filter: blur(0);
        opacity: 0;
    }

    .serendipity__amber { color: var(--amber); }
    .serendipity__timeline {
        position: relative;
        padding-left: 32px;
        border-left: 1px solid rgba(252, 211, 77, 0.2);
        display: flex;
        flex-direction: column;
        gap: 80px;
    }
    .serendipity__node { position: relative; }
    .serendipity__node::before {
        content: '';
        position: absolute;
        left: -37px;
        top: 6px;
        width: 9px;
        height: 9px;
        border-radius: 50%;
        background: rgba(252, 211, 77, 0.3);
        transition: background 0.8s var(--ease), box-shadow 0.8s var(--ease);
    }
    .serendipity__node.visible::before {
        background: var(--amber);
        box-shadow: 0 0 12px var(--amber);
    }
    .serendipity__label {
        font-size: 12px;
        letter-spacing: 0.25em;
        text-transform: uppercase;
        color: rgba(252, 211, 77, 0.6);
        margin-bottom: 8px;
    }

    .radiance__warm-glow {
        position: absolute;
        inset: 0;
        pointer-events: none;
        background: radial-gradient(ellipse at center, rgba(251, 146, 60, 0.08), transparent 70%);
    }
    .radiance__gold-text { color: var(--radiance-gold); }
    .radiance__warm-text { color: var(--radiance-warm); }

    .artifact__container {
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .artifact__button-hint {
        font-size: 13px;
        color: rgba(255, 255, 255, 0.35);
        margin: 0;
    }
    .artifact__toggle-btn {
        padding: 8px 20px;
        border-radius: 999px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.04);
        color: var(--light);
        cursor: pointer;
        font-family: inherit;
        letter-spacing: 0.1em;
    }
    .artifact__word {
        word-break: break-all;
        font-size: clamp(16px, 1.8vw, 22px);
        line-height: 1.9;
        text-align: justify;
        color: var(--full);
    }
    .artifact__instruction {
        margin-top: 40px;
        font-style: italic;
        color: rgba(255, 255, 255, 0.3);
    }

    .stillness__center {
        min-height: 60vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 32px;
        text-align: center;
    }
    .stillness__dot {
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: var(--full);
        animation: scrollPulse 4s ease-in-out infinite;
    }
    .stillness__text {
        font-size: clamp(22px, 3vw, 32px);
        font-style: italic;
        margin: 0;
    }

    .question__container { text-align: center; }
    .question__main {
        font-size: clamp(40px, 7vw, 84px);
        font-weight: 300;
    }
    .question__highlight {
        color: #f472b6;
        text-shadow: 0 0 32px rgba(244, 114, 182, 0.7);
    }
    .question__response {
        margin-top: 60px;
        display: flex;
        justify-content: center;
    }
    .question__btn {
        padding: 16px 48px;
        border-radius: 999px;
        border: none;
        font-size: 20px;
        font-family: inherit;
        cursor: pointer;
    }
    .question__btn--yes {
        background: linear-gradient(135deg, #f472b6, #fb923c);
        color: #fff;
        box-shadow: 0 0 40px rgba(244, 114, 182, 0.4);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .question__btn--yes:hover {
        transform: scale(1.05);
        box-shadow: 0 0 60px rgba(244, 114, 182, 0.6);
    }

    .celebration {
        position: fixed;
        inset: 0;
        z-index: 2000;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: rgba(7, 6, 11, 0.92);
        animation: fadeIn 0.8s var(--ease) forwards;
    }
    .celebration__particle {
        position: absolute;
        border-radius: 50%;
        animation-name: celebrationRise;
        animation-timing-function: ease-out;
        animation-iteration-count: infinite;
    }
    @keyframes celebrationRise {
        from { transform: translateY(0) rotate(0deg); opacity: 1; }
        to { transform: translateY(-110vh) rotate(540deg); opacity: 0; }
    }
    .celebration__content {
        position: relative;
        text-align: center;
        opacity: 0;
        animation: popIn 0.9s cubic-bezier(0.34, 1.56, 0.64, 1) 0.5s forwards;
    }
    @keyframes popIn {
        from { transform: scale(0.8); opacity: 0; }
        to { transform: scale(1); opacity: 1; }
    }

    @media (max-width: 768px) {
        .act { padding: 80px 20px; }
        .ethereal__moments, .radiance__layers { gap: 90px; margin-top: 80px; }
        .ambient-orb { filter: blur(80px); }
    }
"#;
