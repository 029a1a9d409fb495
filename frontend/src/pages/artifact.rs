use std::borrow::Cow;

use yew::prelude::*;

use crate::components::reveal::Reveal;

const DEVOTION: &str = "she is just like a time machine to me everytime i am with her i travel back to my childhood her arms are so comfortable it feels like sleeping is much harder her smile is brighter than the sun that illuminates my dark life with her everything is ease without her even breathing is harder she is more precious to me than any other valuables her laugh holds a smooth soothing sense which calms my mind and makes me glance at her because how cute and pretty she look while laughing her eyes are like a black dark night that sucks up all my pain and suffering and give a look that is so soft that is so hypnotising her sense of humour is unmatchable she knows when and where to speak and about how to make up someone sad she lends ear to me she is my audience she is my biggest supporter she is my judge she is my autocorrect or who corrects me everytime she might be my all time bestfriend she is my one and only one who understands me the most the one who know how to turn that pain into laughter her beauty is not an earthly thing but she herself is a heavenly being with her heavenly beauty she is so captivating none can take eyes off her she is my comfort she is love";

/// The one made-up word: the spaced sentence with every space removed.
pub fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn devotion_text(expanded: bool) -> Cow<'static, str> {
    if expanded {
        Cow::Borrowed(DEVOTION)
    } else {
        Cow::Owned(compact(DEVOTION))
    }
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "hide spaces"
    } else {
        "add spaces"
    }
}

#[derive(Properties, PartialEq)]
pub struct ArtifactActProps {
    pub expanded: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ArtifactAct)]
pub fn artifact_act(props: &ArtifactActProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let spacing = if props.expanded { "0.05em" } else { "0em" };

    html! {
        <section class="act act--artifact" id="act-artifact">
            <div class="act__inner">
                <Reveal>
                    <p class="chapter-label">{"Act V"}</p>
                </Reveal>
                <Reveal delay={0.2}>
                    <h2
                        class="display-text display-text--sub"
                        style="text-align: center; margin-bottom: 20px; color: var(--light);"
                    >
                        {"A Devotion Without Spaces"}
                    </h2>
                    <p class="body-text" style="text-align: center; margin-bottom: 40px; opacity: 0.6;">
                        {"This is the final made up word that I would describe you with."}
                    </p>
                </Reveal>
                <Reveal delay={0.3}>
                    <div class="artifact__container" style="padding-top: 0;">
                        <div style="display: flex; flex-direction: column; align-items: center; gap: 8px; margin-bottom: 40px;">
                            <p class="artifact__button-hint">
                                {"If it gets too much, press this to help out."}
                            </p>
                            <button class="artifact__toggle-btn" onclick={onclick}>
                                { toggle_label(props.expanded) }
                            </button>
                        </div>
                        <p
                            class="artifact__word"
                            style={format!("letter-spacing: {}; transition: letter-spacing 0.8s ease;", spacing)}
                        >
                            { devotion_text(props.expanded).into_owned() }
                        </p>
                        <p class="artifact__instruction">
                            {"read slowly, this is not a paragraph, it's a promise"}
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_variant_has_no_spaces() {
        let text = devotion_text(false);
        assert!(!text.contains(' '));
        assert!(text.starts_with("sheisjustlikeatimemachine"));
        assert!(text.ends_with("sheislove"));
    }

    #[test]
    fn expanding_swaps_to_the_same_words_with_spaces() {
        let compact_text = devotion_text(false);
        let spaced = devotion_text(true);
        assert!(spaced.contains(' '));
        assert_ne!(compact_text, spaced);
        assert_eq!(compact(&spaced), compact_text);
    }

    #[test]
    fn label_follows_state() {
        assert_eq!(toggle_label(false), "add spaces");
        assert_eq!(toggle_label(true), "hide spaces");
    }
}
