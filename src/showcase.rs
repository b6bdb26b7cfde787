use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use portfolio_core::content::PROJECTS;
use portfolio_core::{CardDeck, DeckEvent, DeckState, DisplayItem, LayoutTransform};

use crate::app_runtime;
use crate::icons::Icon;
use crate::input;
use crate::listeners::Subscription;
use crate::style::deck_card_style;

#[function_component(ProjectShowcase)]
pub(crate) fn project_showcase() -> Html {
    let deck = use_mut_ref(|| CardDeck::from_items(PROJECTS));
    let deck_state = use_state(|| DeckState::Idle);
    let deck_ref = use_node_ref();

    let dispatch: Rc<dyn Fn(DeckEvent)> = {
        let deck = deck.clone();
        let deck_state = deck_state.clone();
        Rc::new(move |event: DeckEvent| {
            let result = deck.borrow_mut().apply(event);
            match result {
                Ok(transition) if transition.changed() => {
                    app_runtime::trace("deck", transition);
                    deck_state.set(transition.to);
                }
                Ok(_) => {}
                Err(err) => {
                    gloo::console::warn!("deck", err.to_string());
                }
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        let deck_ref = deck_ref.clone();
        use_effect_with((), move |_| {
            let subscription = Subscription::new().document("pointerdown", move |event| {
                let inside = deck_ref
                    .cast::<Element>()
                    .map(|deck| input::event_inside(&deck, event))
                    .unwrap_or(false);
                dispatch(DeckEvent::GlobalPointerDown { inside });
            });
            move || drop(subscription)
        });
    }

    let on_enter = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(DeckEvent::PointerEnter))
    };
    let on_leave = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(DeckEvent::PointerLeave))
    };

    let deck_view = deck.borrow();
    let cards = PROJECTS
        .iter()
        .zip(deck_view.layout())
        .map(|(project, transform)| {
            let id = project.id;
            let onclick = {
                let dispatch = dispatch.clone();
                Callback::from(move |_: MouseEvent| dispatch(DeckEvent::ItemClick(id)))
            };
            html! {
                <DeckCard
                    key={id.0}
                    project={*project}
                    transform={transform}
                    expanded={deck_view.is_expanded(id)}
                    onclick={onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="min-h-screen bg-gray-900 text-white p-4 md:p-8 relative overflow-hidden">
            <header class="max-w-4xl mx-auto text-center mb-12 mt-8">
                <h1 class="text-4xl md:text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-cyan-400 to-pink-400 mb-4">
                    {"Project Showcase"}
                </h1>
            </header>
            <div
                ref={deck_ref}
                class="relative max-w-6xl mx-auto h-[550px] flex items-center justify-center"
                data-deck-state={deck_state.to_string()}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                if deck_view.shows_deck_base() {
                    <DeckBase />
                }
                { cards }
            </div>
            <div class="fixed top-20 left-10 w-32 h-32 rounded-full bg-pink-500/10 blur-3xl -z-0"></div>
            <div class="fixed bottom-40 right-20 w-40 h-40 rounded-full bg-cyan-500/10 blur-3xl -z-0"></div>
            <div class="fixed top-1/3 right-1/4 w-24 h-24 rounded-full bg-purple-500/10 blur-3xl -z-0"></div>
        </div>
    }
}

#[function_component(DeckBase)]
fn deck_base() -> Html {
    html! {
        <div class="absolute w-64 h-96 bg-gradient-to-br from-indigo-600 to-purple-800 rounded-2xl shadow-2xl border-4 border-white/20 flex flex-col items-center justify-center z-0">
            <div class="text-6xl mb-4">{"🃏"}</div>
            <h2 class="text-2xl font-bold">{"Project Deck"}</h2>
            <p class="mt-2 text-indigo-200">{"Hover to reveal projects"}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DeckCardProps {
    project: DisplayItem,
    transform: LayoutTransform,
    expanded: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(DeckCard)]
fn deck_card(props: &DeckCardProps) -> Html {
    let project = props.project;
    let expanded = props.expanded;
    let cursor = if expanded { "cursor-auto" } else { "cursor-pointer" };
    let details_class = if expanded {
        "max-h-96 opacity-100"
    } else {
        "max-h-0 opacity-0"
    };
    // Links open in a new tab and must not toggle the card behind them.
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class={classes!("deck-card", "ease-in-out", "origin-center", cursor)}
            style={deck_card_style(&props.transform)}
            onclick={props.onclick.clone()}
        >
            <div class={classes!(
                "w-full", "h-full", "rounded-2xl", "shadow-2xl", "overflow-hidden", "bg-gradient-to-br",
                project.gradient, "filter", "grayscale", "hover:filter-none", "transition", "duration-300"
            )}>
                <div class="relative p-6 h-full flex flex-col">
                    <div class="flex justify-between items-start mb-4">
                        <span class="px-3 py-1 bg-white/20 backdrop-blur-sm rounded-full text-xs font-bold text-white">
                            { project.category }
                        </span>
                        <div class="text-white">
                            <Icon name={project.icon} class={classes!("h-16", "w-16")} />
                        </div>
                    </div>
                    <div class="flex-grow flex flex-col">
                        <h3 class="text-2xl font-bold text-white mb-2">{ project.title }</h3>
                        <p class="text-white/80 text-sm mb-4">{ project.description }</p>
                        <div class={classes!("overflow-hidden", "transition-all", "duration-500", details_class)}>
                            <p class="text-white/90 text-sm mb-4">{ project.details }</p>
                            <div class="mb-4">
                                <h4 class="text-white font-semibold mb-2">{"Technologies Used"}</h4>
                                <div class="flex flex-wrap gap-2">
                                    { for project.technologies.iter().map(|tech| html! {
                                        <span class="px-2 py-1 bg-white/10 backdrop-blur-sm rounded text-xs text-white">
                                            { *tech }
                                        </span>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="mt-auto pt-4 border-t border-white/20">
                        <div class="flex justify-between items-center">
                            <button class={classes!(
                                "px-3", "py-1", project.accent, "rounded-full", "text-xs", "font-bold",
                                "text-white", "hover:opacity-90", "transition"
                            )}>
                                { if expanded { "Close Details" } else { "View Details" } }
                            </button>
                            if expanded && project.has_links() {
                                <div class="flex gap-2">
                                    if let Some(href) = project.source_code {
                                        <a
                                            href={href}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-3 py-1 bg-white/10 backdrop-blur-sm rounded-full text-xs text-white hover:bg-white/20 transition"
                                            onclick={keep_open.clone()}
                                        >
                                            {"Source"}
                                        </a>
                                    }
                                    if let Some(href) = project.live_demo {
                                        <a
                                            href={href}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-3 py-1 bg-white text-indigo-800 rounded-full text-xs font-bold hover:bg-indigo-100 transition"
                                            onclick={keep_open.clone()}
                                        >
                                            {"Live Demo"}
                                        </a>
                                    }
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
