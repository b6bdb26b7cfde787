use js_sys::Date;
use yew::prelude::*;

use portfolio_core::content::{EDUCATION, EXPERIENCE, FEATURED, PROFILE, RESEARCH};
use portfolio_core::reveal::{FADE_IN_UP, STAGGER_GRID};

use crate::icons::Icon;
use crate::reveal_view::{Reveal, RevealItem};

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mb-3">{ props.title.clone() }</h2>
            <div class="w-16 h-1 bg-blue-600 mx-auto rounded-full mb-4"></div>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="text-slate-500">{ subtitle }</p>
            }
        </div>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <section class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader title="Experience" subtitle={AttrValue::from("My professional journey")} />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                    <div>
                        <div class="flex items-center gap-3 mb-8">
                            <Icon name="briefcase" class={classes!("h-6", "w-6", "text-blue-600")} />
                            <h3 class="text-2xl font-bold text-slate-800">{"Internship"}</h3>
                        </div>
                        { for EXPERIENCE.iter().map(|job| html! {
                            <Reveal schedule={FADE_IN_UP} margin={0.0}>
                                <RevealItem class={classes!("border-l-2", "border-slate-200", "pl-8", "ml-3", "py-2", "relative")}>
                                    <div class="absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-blue-600 border-4 border-white shadow-sm"></div>
                                    <h4 class="text-xl font-bold text-slate-900">{ job.company }</h4>
                                    <p class="text-slate-500 text-sm mb-4 font-medium">{ format!("{} • {}", job.role, job.period) }</p>
                                    <div class="space-y-4">
                                        { for job.projects.iter().map(|project| html! {
                                            <div class="bg-slate-50 p-4 rounded-xl border border-slate-100">
                                                <h5 class="font-semibold text-slate-800 flex justify-between items-center">{ project.name }</h5>
                                                <p class="text-slate-600 text-sm mt-1 mb-2">{ project.desc }</p>
                                                <div class="flex flex-wrap gap-2">
                                                    { for project.tags.iter().map(|tag| html! {
                                                        <span class="text-xs bg-white border border-slate-200 text-slate-500 px-2 py-1 rounded-md">{ *tag }</span>
                                                    }) }
                                                </div>
                                            </div>
                                        }) }
                                    </div>
                                </RevealItem>
                            </Reveal>
                        }) }
                    </div>
                    <div>
                        <div class="flex items-center gap-3 mb-8">
                            <Icon name="graduation-cap" class={classes!("h-6", "w-6", "text-teal-600")} />
                            <h3 class="text-2xl font-bold text-slate-800">{"Education"}</h3>
                        </div>
                        <Reveal schedule={STAGGER_GRID} margin={0.0} class={classes!("space-y-6")}>
                            { for EDUCATION.iter().enumerate().map(|(index, entry)| html! {
                                <RevealItem index={index} class={classes!("bg-white", "p-6", "rounded-2xl", "shadow-sm", "border", "border-slate-100", "hover:shadow-md", "transition-shadow")}>
                                    <div class="flex justify-between items-start">
                                        <div>
                                            <h4 class="text-lg font-bold text-slate-900">{ entry.degree }</h4>
                                            <p class="text-slate-600">{ entry.school }</p>
                                        </div>
                                        <span class="bg-teal-50 text-teal-700 text-xs font-bold px-3 py-1 rounded-full">{ entry.period }</span>
                                    </div>
                                    <div class="mt-3 pt-3 border-t border-slate-100 flex items-center gap-2 text-sm text-slate-500">
                                        <Icon name="book-open" class={classes!("h-3.5", "w-3.5")} />
                                        {"Score: "}<span class="text-slate-900 font-medium">{ entry.score }</span>
                                    </div>
                                </RevealItem>
                            }) }
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturedSection)]
fn featured_section() -> Html {
    html! {
        <section class="py-20 bg-slate-50">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader title="Featured Projects" />
                if let Some(research) = RESEARCH {
                    <Reveal schedule={FADE_IN_UP} margin={0.0} class={classes!("mb-12")}>
                        <RevealItem class={classes!("bg-gradient-to-br", "from-slate-900", "to-slate-800", "rounded-2xl", "p-8", "md:p-12", "text-white", "shadow-xl", "relative", "overflow-hidden")}>
                            <div class="absolute top-0 right-0 w-64 h-64 bg-blue-500 rounded-full blur-3xl opacity-20 -mr-16 -mt-16"></div>
                            <div class="relative z-10">
                                <div class="flex items-center gap-2 mb-4 text-blue-300 font-semibold text-sm uppercase tracking-wide">
                                    <Icon name="cpu" class={classes!("h-4", "w-4")} />{"Research Project"}
                                </div>
                                <h3 class="text-2xl md:text-3xl font-bold mb-2">{ research.title }</h3>
                                <p class="text-slate-300 text-lg mb-6">{ research.subtitle }</p>
                                <p class="text-slate-400 mb-8 max-w-2xl leading-relaxed">{ research.desc }</p>
                                <div class="flex flex-wrap gap-3">
                                    { for research.tags.iter().map(|tag| html! {
                                        <span class="px-3 py-1 bg-white/10 rounded-full text-sm backdrop-blur-sm border border-white/10">{ *tag }</span>
                                    }) }
                                </div>
                            </div>
                        </RevealItem>
                    </Reveal>
                }
                <Reveal schedule={STAGGER_GRID} margin={0.0} class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-6")}>
                    { for FEATURED.iter().enumerate().map(|(index, project)| html! {
                        <RevealItem index={index} class={classes!("group", "bg-white", "p-6", "rounded-2xl", "border", "border-slate-100", "hover:shadow-lg", "hover:-translate-y-1", "transition-all", "duration-300")}>
                            <div class="w-12 h-12 bg-slate-50 rounded-xl flex items-center justify-center mb-4 text-blue-600 shadow-sm group-hover:bg-blue-600 group-hover:text-white transition-colors">
                                <Icon name={project.icon} />
                            </div>
                            <h3 class="text-lg font-bold text-slate-900 mb-2 group-hover:text-blue-600 transition-colors">{ project.title }</h3>
                            <p class="text-slate-500 text-sm">{ project.desc }</p>
                        </RevealItem>
                    }) }
                </Reveal>
            </div>
        </section>
    }
}

fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="bg-white border-t border-slate-200 py-12">
            <div class="max-w-6xl mx-auto px-6 text-center">
                <h2 class="text-2xl font-bold text-slate-900 mb-6">{"Let's Connect"}</h2>
                <div class="flex flex-wrap justify-center gap-6 mb-8 text-slate-600">
                    <span class="flex items-center gap-2">
                        <Icon name="map-pin" class={classes!("h-[18px]", "w-[18px]", "text-blue-600")} />{ PROFILE.location }
                    </span>
                    <a href={format!("mailto:{}", PROFILE.email)} class="flex items-center gap-2 hover:text-blue-600">
                        <Icon name="mail" class={classes!("h-[18px]", "w-[18px]", "text-blue-600")} />{ PROFILE.email }
                    </a>
                    <span class="flex items-center gap-2">
                        <Icon name="phone" class={classes!("h-[18px]", "w-[18px]", "text-blue-600")} />{ PROFILE.phone }
                    </span>
                </div>
                <p class="text-slate-400 text-sm">
                    { format!("© {} {}. All rights reserved.", current_year(), PROFILE.name) }
                </p>
            </div>
        </footer>
    }
}

#[function_component(AboutSections)]
pub(crate) fn about_sections() -> Html {
    html! {
        <div class="bg-slate-50 min-h-screen font-sans selection:bg-blue-100 selection:text-blue-900">
            <ExperienceSection />
            <FeaturedSection />
            <Footer />
            <a
                href={format!("mailto:{}", PROFILE.email)}
                aria-label="Send an email"
                class="fixed bottom-6 right-6 bg-blue-600 text-white p-4 rounded-full shadow-lg hover:shadow-blue-500/30 hover:scale-110 active:scale-90 transition z-40"
            >
                <Icon name="mail" class={classes!("h-6", "w-6")} />
            </a>
        </div>
    }
}
