use yew::prelude::*;

use crate::config;
use crate::motion::progressive::stagger;
use crate::motion::visibility::{use_reveal, RevealTrigger};

#[derive(Properties, PartialEq)]
pub struct ProgressiveTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::CHAR_STAGGER_S)]
    pub stagger: f64,
    #[prop_or_default]
    pub delay: f64,
}

/// Reveals `text` letter by letter once the line is 30% visible.
#[function_component(ProgressiveText)]
pub fn progressive_text(props: &ProgressiveTextProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealTrigger::at(config::PROGRESSIVE_THRESHOLD));
    let units = stagger(&props.text, props.delay, props.stagger);

    html! {
        <span ref={node} class={props.class.clone()} aria-label={props.text.clone()}>
            {
                units.iter().map(|unit| html! {
                    <span key={unit.index} aria-hidden="true" style={unit.style(revealed)}>
                        { unit.ch.to_string() }
                    </span>
                }).collect::<Html>()
            }
        </span>
    }
}
