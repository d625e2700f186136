use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::Reveal;

/// Wraps children in a div that plays `motion` when it enters the viewport,
/// or right after hydration when `on_mount` is set.
///
/// Leaving the viewport hides it again, so the animation replays on the way back.
#[component]
pub fn Animated(
    motion: Reveal,
    #[prop(optional)] on_mount: bool,
    #[prop(into, optional)] class: String,
    #[prop(default = None)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let shown: Signal<bool> = if on_mount {
        let (mounted, set_mounted) = signal(false);
        // wait a frame so the hidden state is painted before the transition starts
        Effect::new(move |_| request_animation_frame(move || set_mounted.set(true)));
        mounted.into()
    } else {
        use_element_visibility(node_ref)
    };

    view! {
        <div
            node_ref=node_ref
            id=id
            class=move || format!("{class} ease-out {}", motion.class(shown.get()))
            style=motion.style()
        >
            {children()}
        </div>
    }
}
