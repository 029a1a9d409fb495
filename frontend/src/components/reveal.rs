use yew::prelude::*;

use crate::config;
use crate::motion::tween::{Direction, Tween};
use crate::motion::visibility::{use_reveal, RevealTrigger};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and slides its children into place the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let trigger = use_memo(
        |_| {
            RevealTrigger::at(config::reveal_threshold(config::viewport_width()))
                .with_margin(config::REVEAL_ROOT_MARGIN)
        },
        (),
    );
    let revealed = use_reveal(node.clone(), (*trigger).clone());
    let style = Tween::reveal(props.direction, props.delay).style(revealed);

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlurFragmentProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BlurFragment)]
pub fn blur_fragment(props: &BlurFragmentProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealTrigger::above(config::BLUR_MIN_RATIO));

    html! {
        <div
            ref={node}
            class={classes!("ineffable__fragment", revealed.then(|| "revealed"), props.class.clone())}
        >
            { for props.children.iter() }
            <div class="ineffable__blur-overlay"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineNodeProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TimelineNode)]
pub fn timeline_node(props: &TimelineNodeProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealTrigger::at(config::TIMELINE_THRESHOLD));
    let style = Tween::timeline().style(revealed);

    html! {
        <div
            ref={node}
            class={classes!("serendipity__node", revealed.then(|| "visible"))}
            style={style}
        >
            <div class="serendipity__label">{ props.label.to_string() }</div>
            { for props.children.iter() }
        </div>
    }
}
