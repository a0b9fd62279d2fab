use leptos::{html, prelude::*};

use crate::{
    reveal::{RevealMotion, RevealState},
    scroll::opens_new_context,
    style::{
        button_class, join_classes, splice_class, Size, Variant, CARD, CARD_CONTENT, CARD_HEADER,
        CARD_TITLE,
    },
};

#[component]
pub fn Button(
    #[prop(optional)] variant: Variant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <button class=button_class(variant, size, &class)>{children()}</button> }
}

/// A button rendered as the link itself: the anchor takes the button classes
/// and no `<button>` is emitted. Links leaving the site open in a new tab.
#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(optional)] variant: Variant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] class: String,
    /// Classes belonging to the anchor, kept ahead of the button classes.
    #[prop(optional)]
    link_class: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let computed = button_class(variant, size, &class);
    let external = opens_new_context(href);
    view! {
        <a
            href=href
            class=splice_class(link_class, &computed)
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            aria-label=label
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes([CARD, class.as_str()])>{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class=CARD_HEADER>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=join_classes([CARD_TITLE, class.as_str()])>{children()}</h3> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class=CARD_CONTENT>{children()}</div> }
}

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: RevealMotion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::Hidden);

    #[cfg(feature = "hydrate")]
    watch_visibility(node, state, motion.threshold);

    view! {
        <div node_ref=node class=class style=move || motion.style(state.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn watch_visibility(node: NodeRef<html::Div>, state: RwSignal<RevealState>, threshold: f64) {
    use leptos_use::{
        js, use_intersection_observer_with_options, use_supported,
        UseIntersectionObserverOptions, UseIntersectionObserverReturn,
    };

    use crate::reveal::Visibility;

    let supported = use_supported(|| js!("IntersectionObserver" in &window()));
    let start = RevealState::initial(supported.get_untracked());
    if start.is_revealed() {
        log::debug!("IntersectionObserver unsupported, revealing immediately");
        // set after hydration, the server-rendered style is only replaced by a change
        Effect::new(move |_| state.set(start));
        return;
    }

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                let sample = Visibility {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                let current = state.get_untracked();
                let next = current.observe(sample, threshold);
                if next != current {
                    state.set(next);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if state.get().is_revealed() {
            stop();
        }
    });
}

/// List-item reveal. Item `index` starts `index * stagger_ms` after the first.
#[component]
pub fn FadeIn(
    #[prop(optional)] index: usize,
    #[prop(optional)] stagger_ms: u32,
    children: Children,
) -> impl IntoView {
    let motion = RevealMotion::ITEM.staggered(index, stagger_ms);
    view! { <Reveal motion=motion>{children()}</Reveal> }
}

#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="scroll-mt-24 py-20" aria-label=title>
            <div class="mx-auto max-w-6xl px-6">
                <Reveal motion=RevealMotion::SECTION class="mb-10">
                    <h2 class="text-3xl font-bold tracking-tight">{title}</h2>
                    {subtitle.map(|s| view! { <p class="mt-2 text-muted-foreground max-w-3xl">{s}</p> })}
                </Reveal>
                {children()}
            </div>
        </section>
    }
}
