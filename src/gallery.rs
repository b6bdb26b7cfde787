use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use portfolio_core::content::{GALLERY, PROFILE};
use portfolio_core::reveal::{GALLERY_GRID, VIEWPORT_MARGIN_PX};
use portfolio_core::{GalleryHover, GalleryItem};

use crate::app_runtime;
use crate::icons::Icon;
use crate::reveal_view::{Reveal, RevealItem};

#[function_component(ProjectGallery)]
pub(crate) fn project_gallery() -> Html {
    let hover = use_mut_ref(GalleryHover::new);
    let redraw = use_force_update();

    let cards = GALLERY
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item.id;
            let on_enter = {
                let hover = hover.clone();
                let redraw = redraw.clone();
                Callback::from(move |_: MouseEvent| {
                    hover.borrow_mut().on_hover_start(id);
                    redraw.force_update();
                })
            };
            let on_leave = {
                let hover = hover.clone();
                let redraw = redraw.clone();
                Callback::from(move |_: MouseEvent| {
                    hover.borrow_mut().on_hover_end(id);
                    redraw.force_update();
                })
            };
            let on_image_error = {
                let hover = hover.clone();
                let redraw = redraw.clone();
                Callback::from(move |_: Event| {
                    if hover.borrow_mut().on_image_error(id) {
                        app_runtime::trace("gallery", format!("image for {id} failed, showing icon"));
                        redraw.force_update();
                    }
                })
            };
            let view = hover.borrow();
            html! {
                <RevealItem key={id.0} index={index}>
                    <GalleryCard
                        item={*item}
                        hovered={view.is_hovered(id)}
                        show_image={view.shows_image(id)}
                        on_enter={on_enter}
                        on_leave={on_leave}
                        on_image_error={on_image_error}
                    />
                </RevealItem>
            }
        })
        .collect::<Html>();

    html! {
        <section class="relative w-full min-h-screen bg-slate-50 py-24 px-6 md:px-12 lg:px-20 overflow-hidden font-sans text-slate-900">
            <div
                class="absolute inset-0 pointer-events-none opacity-[0.4]"
                style="background-image: radial-gradient(#cbd5e1 1px, transparent 1px); background-size: 32px 32px;"
            ></div>
            <div class="max-w-7xl mx-auto relative z-10">
                <Reveal schedule={GALLERY_GRID} margin={0.0} class={classes!("max-w-3xl", "mb-20")}>
                    <RevealItem index={0} class={classes!("flex", "items-center", "space-x-2", "mb-4")}>
                        <span class="h-px w-8 bg-blue-600"></span>
                        <span class="text-blue-600 font-semibold tracking-wider text-sm uppercase">{"Selected Works"}</span>
                    </RevealItem>
                    <RevealItem index={1}>
                        <h2 class="text-4xl md:text-5xl font-bold text-slate-900 leading-tight mb-6">
                            {"Engineering digital experiences with "}
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-indigo-600">
                                {"precision & passion."}
                            </span>
                        </h2>
                    </RevealItem>
                    <RevealItem index={2}>
                        <p class="text-lg text-slate-600 leading-relaxed max-w-2xl">
                            {"A curated showcase of technical projects ranging from full-stack web applications \
                              to machine learning research and IoT integrations."}
                        </p>
                    </RevealItem>
                </Reveal>
                <Reveal
                    schedule={GALLERY_GRID}
                    margin={VIEWPORT_MARGIN_PX}
                    class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-8")}
                >
                    { cards }
                </Reveal>
                <Reveal class={classes!("mt-20", "text-center")} margin={0.0}>
                    <RevealItem>
                        <a
                            href={PROFILE.github_url}
                            class="inline-flex items-center gap-2 text-slate-500 hover:text-blue-600 font-medium transition-colors"
                        >
                            {"View Github Profile "}<Icon name="external-link" class={classes!("w-4", "h-4")} />
                        </a>
                    </RevealItem>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryCardProps {
    item: GalleryItem,
    hovered: bool,
    show_image: bool,
    on_enter: Callback<MouseEvent>,
    on_leave: Callback<MouseEvent>,
    on_image_error: Callback<Event>,
}

#[function_component(GalleryCard)]
fn gallery_card(props: &GalleryCardProps) -> Html {
    let item = props.item;
    let lift = if props.hovered {
        "shadow-xl -translate-y-1"
    } else {
        "shadow-sm"
    };
    html! {
        <a
            href={item.url}
            target="_blank"
            rel="noopener noreferrer"
            class="group block h-full outline-none"
            onmouseenter={props.on_enter.clone()}
            onmouseleave={props.on_leave.clone()}
        >
            <article class={classes!(
                "h-full", "flex", "flex-col", "bg-white", "rounded-2xl", "overflow-hidden", "border",
                "border-slate-200", "transition-all", "duration-300", "ease-in-out", "transform", lift
            )}>
                <div class="relative w-full h-56 overflow-hidden bg-slate-100">
                    <div class="absolute inset-0 flex items-center justify-center text-slate-300">
                        <Icon name={item.icon} />
                    </div>
                    if props.show_image {
                        <img
                            src={item.image}
                            alt={item.title}
                            class="absolute inset-0 w-full h-full object-cover transition-transform duration-700 ease-in-out group-hover:scale-105"
                            onerror={props.on_image_error.clone()}
                        />
                    }
                    <div class="absolute inset-0 bg-slate-900/0 group-hover:bg-slate-900/10 transition-colors duration-300"></div>
                    <div class="absolute top-4 right-4 bg-white/90 backdrop-blur-sm p-2 rounded-full shadow-sm opacity-0 group-hover:opacity-100 translate-y-2 group-hover:translate-y-0 transition-all duration-300">
                        <Icon name="arrow-up-right" class={classes!("w-5", "h-5", "text-slate-900")} />
                    </div>
                </div>
                <div class="flex flex-col flex-grow p-6">
                    <div class="flex justify-between items-start mb-3">
                        <h3 class="text-xl font-bold text-slate-900 group-hover:text-blue-600 transition-colors duration-300">
                            { item.title }
                        </h3>
                    </div>
                    <p class="text-slate-600 text-sm leading-relaxed mb-6 flex-grow">{ item.description }</p>
                    <div class="flex flex-wrap gap-2 mt-auto pt-4 border-t border-slate-100">
                        { for item.tags.iter().map(|tag| html! {
                            <span class="px-2.5 py-1 text-xs font-medium text-slate-600 bg-slate-100 rounded-md border border-slate-200">
                                { *tag }
                            </span>
                        }) }
                    </div>
                </div>
            </article>
        </a>
    }
}
