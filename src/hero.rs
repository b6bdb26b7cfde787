use web_sys::MouseEvent;
use yew::prelude::*;

use portfolio_core::content::PROFILE;
use portfolio_core::parallax::HERO_LAYERS;
use portfolio_core::reveal::HERO_INTRO;
use portfolio_core::ParallaxTracker;

use crate::app_router::{self, NAV_ANCHORS};
use crate::app_runtime;
use crate::icons::Icon;
use crate::input::scroll_y;
use crate::listeners::{FrameSlot, Subscription};
use crate::reveal_view::{Reveal, RevealItem};
use crate::style::parallax_style;

fn anchor_click(id: &'static str, menu_open: UseStateHandle<bool>) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        if app_router::scroll_to_anchor(id) {
            event.prevent_default();
        } else {
            app_runtime::trace("nav", format!("no section #{id}"));
        }
        menu_open.set(false);
    })
}

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let desktop_links = NAV_ANCHORS.iter().map(|anchor| {
        html! {
            <li key={anchor.id} class="relative group">
                <a
                    href={format!("#{}", anchor.id)}
                    class="text-gray-300 font-semibold tracking-wide transition-all duration-300 transform group-hover:scale-105"
                    onclick={anchor_click(anchor.id, menu_open.clone())}
                >
                    <span class="bg-gradient-to-r from-white via-gray-200 to-white bg-clip-text text-transparent group-hover:text-white">
                        { anchor.label }
                    </span>
                    <span class="block h-0.5 w-0 bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 transition-all duration-500 group-hover:w-full rounded-full mt-1"></span>
                </a>
            </li>
        }
    });

    let mobile_links = NAV_ANCHORS.iter().map(|anchor| {
        html! {
            <li key={anchor.id}>
                <a
                    href={format!("#{}", anchor.id)}
                    class="block py-2 text-gray-300 hover:text-white font-semibold"
                    onclick={anchor_click(anchor.id, menu_open.clone())}
                >
                    { anchor.label }
                </a>
            </li>
        }
    });

    html! {
        <nav class="w-full bg-gray-900/90 text-white px-6 py-4 fixed top-0 z-50 backdrop-blur-md">
            <div class="flex justify-between items-center">
                <h1 class="text-xl md:text-2xl font-semibold tracking-tight bg-gradient-to-r from-gray-100 to-gray-300 text-transparent bg-clip-text transition-transform hover:scale-105">
                    { PROFILE.name }
                </h1>
                <ul class="hidden md:flex space-x-8">
                    { for desktop_links }
                </ul>
                <button
                    class="md:hidden text-gray-300 hover:text-white transition-transform hover:scale-110 active:scale-90"
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <Icon name={if *menu_open { "close" } else { "menu" }} class={classes!("w-6", "h-6")} />
                </button>
            </div>
            if *menu_open {
                <ul class="md:hidden mt-4 border-t border-gray-700 pt-2">
                    { for mobile_links }
                </ul>
            }
        </nav>
    }
}

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    let tracker = use_mut_ref(ParallaxTracker::new);
    let frame = use_memo((), |_| FrameSlot::default());
    let redraw = use_force_update();

    {
        let tracker = tracker.clone();
        let frame = frame.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let subscription = {
                let tracker = tracker.clone();
                let frame = frame.clone();
                Subscription::new().window("scroll", move |_| {
                    if !tracker.borrow_mut().on_scroll(scroll_y()) {
                        return;
                    }
                    let tracker = tracker.clone();
                    let redraw = redraw.clone();
                    frame.request(move || {
                        if tracker.borrow_mut().on_animation_frame() {
                            redraw.force_update();
                        }
                    });
                })
            };
            move || {
                drop(subscription);
                frame.cancel();
                tracker.borrow_mut().reset();
            }
        });
    }

    let offsets = tracker.borrow().offsets(&HERO_LAYERS);
    let blobs = [
        "absolute top-1/4 left-1/4 w-60 h-60 rounded-full bg-blue-500/20 filter blur-3xl animate-float1",
        "absolute bottom-1/3 right-1/3 w-80 h-80 rounded-full bg-purple-500/20 filter blur-3xl animate-float2",
        "absolute top-1/3 right-1/4 w-40 h-40 rounded-full bg-teal-500/20 filter blur-3xl animate-float3",
    ];

    html! {
        <section
            id="home"
            class="w-full min-h-screen bg-gray-900 text-gray-100 flex flex-col md:flex-row items-center justify-center px-8 md:px-12 lg:px-24 relative overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden">
                { for blobs.iter().zip(offsets.iter()).map(|(class, offset)| html! {
                    <div class="absolute inset-0 will-change-transform" style={parallax_style(*offset)}>
                        <div class={*class}></div>
                    </div>
                }) }
            </div>
            <Reveal schedule={HERO_INTRO} margin={0.0} class={classes!("z-10", "text-center", "md:text-left", "space-y-6", "max-w-2xl", "mx-auto", "md:mx-0")}>
                <RevealItem index={0}>
                    <h1 class="text-3xl md:text-4xl font-light text-gray-300">
                        {"Hello, I'm "}<span class="text-white font-medium">{ PROFILE.first_name }</span>
                    </h1>
                </RevealItem>
                <RevealItem index={1}>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold bg-gradient-to-r from-gray-100 via-gray-300 to-gray-100 text-transparent bg-clip-text leading-tight">
                        { PROFILE.role }
                    </h2>
                </RevealItem>
                <RevealItem index={2}>
                    <p class="text-lg md:text-xl text-gray-400 mb-8">{ PROFILE.tagline }</p>
                </RevealItem>
                <RevealItem index={3} class={classes!("flex", "flex-col", "sm:flex-row", "gap-4", "justify-center", "md:justify-start")}>
                    <a
                        href={PROFILE.resume_href}
                        download={PROFILE.resume_download}
                        class="bg-white text-gray-900 px-8 py-3 rounded-md font-medium hover:bg-gray-100 hover:-translate-y-1 transition-all duration-300 shadow-lg flex items-center justify-center gap-2"
                    >
                        <Icon name="download" />{"Download Resume"}
                    </a>
                    <a
                        href="#contact"
                        class="border border-gray-600 text-white px-8 py-3 rounded-md font-medium hover:bg-gray-800/50 hover:-translate-y-1 transition-all duration-300 flex items-center justify-center gap-2"
                    >
                        <Icon name="send" />{"Contact Me"}
                    </a>
                </RevealItem>
                <RevealItem index={4} class={classes!("flex", "justify-center", "md:justify-start", "space-x-5", "pt-8")}>
                    { for PROFILE.socials.iter().map(|social| html! {
                        <a
                            href={social.url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-white hover:-translate-y-1 hover:scale-125 transition-all duration-300"
                            aria-label={social.label}
                        >
                            <Icon name={social.icon} />
                        </a>
                    }) }
                </RevealItem>
            </Reveal>
            <div class="z-10 flex justify-center items-center mt-12 md:mt-0 md:ml-12 lg:ml-24">
                <div class="relative w-64 h-64 md:w-72 md:h-72 lg:w-80 lg:h-80 rounded-full border-2 border-gray-700 overflow-hidden group">
                    <div class="absolute inset-0 bg-gradient-to-br from-gray-700 to-gray-900 opacity-20 group-hover:opacity-30 transition-all duration-500"></div>
                    <img
                        src={PROFILE.image}
                        alt={PROFILE.image_alt}
                        class="w-full h-full object-cover grayscale group-hover:grayscale-0 group-hover:scale-105 transition-all duration-500"
                    />
                    <div class="absolute inset-0 border-2 border-dashed border-gray-600 rounded-full opacity-70 animate-spin-slow pointer-events-none"></div>
                    <div class="absolute inset-0 rounded-full shadow-[inset_0_0_50px_rgba(255,255,255,0.1)] group-hover:shadow-[inset_0_0_80px_rgba(255,255,255,0.2)] transition-all duration-500"></div>
                </div>
            </div>
        </section>
    }
}
