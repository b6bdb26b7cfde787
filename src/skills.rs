use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use portfolio_core::content::SKILLS;
use portfolio_core::reveal::STAGGER_GRID;
use portfolio_core::{PointerTilt, TileId, TileMeasure, TileRect};

use crate::app_runtime;
use crate::icons::Icon;
use crate::input::{client_to_local, local_rect};
use crate::listeners::FrameSlot;
use crate::reveal_view::{Reveal, RevealItem};
use crate::style::tilt_style;

struct DomTiles<'a> {
    container: &'a NodeRef,
    tiles: &'a [(TileId, NodeRef)],
}

impl TileMeasure for DomTiles<'_> {
    fn tile_rect(&self, id: TileId) -> Option<TileRect> {
        let container = self.container.cast::<Element>()?;
        let (_, node) = self.tiles.iter().find(|(tile, _)| *tile == id)?;
        let tile = node.cast::<Element>()?;
        local_rect(&tile, &container)
    }
}

#[function_component(SkillsGrid)]
pub(crate) fn skills_grid() -> Html {
    let tilt = use_mut_ref(|| PointerTilt::from_tiles(SKILLS));
    let frame = use_memo((), |_| FrameSlot::default());
    let grid_ref = use_node_ref();
    let tile_refs = use_memo((), |_| {
        SKILLS
            .iter()
            .map(|skill| (skill.id, NodeRef::default()))
            .collect::<Vec<_>>()
    });
    let redraw = use_force_update();

    {
        let tilt = tilt.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.cancel();
                tilt.borrow_mut().reset();
            }
        });
    }

    let on_pointer_move = {
        let tilt = tilt.clone();
        let frame = frame.clone();
        let grid_ref = grid_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: PointerEvent| {
            let Some(grid) = grid_ref.cast::<Element>() else {
                return;
            };
            let Some((x, y)) = client_to_local(event.client_x() as f32, event.client_y() as f32, &grid)
            else {
                return;
            };
            if !tilt.borrow_mut().on_pointer_move(x, y) {
                return;
            }
            let tilt = tilt.clone();
            let redraw = redraw.clone();
            frame.request(move || {
                if tilt.borrow_mut().on_animation_frame() {
                    redraw.force_update();
                }
            });
        })
    };

    let on_pointer_leave = {
        let tilt = tilt.clone();
        let frame = frame.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            frame.cancel();
            tilt.borrow_mut().on_pointer_leave();
            app_runtime::trace("tilt", "grid left");
            redraw.force_update();
        })
    };

    let tilt_view = tilt.borrow();
    let measure = DomTiles {
        container: &grid_ref,
        tiles: tile_refs.as_slice(),
    };
    let tiles = SKILLS
        .iter()
        .zip(tile_refs.iter())
        .enumerate()
        .map(|(index, (skill, (id, node)))| {
            let id = *id;
            let hovered = tilt_view.is_hovered(id);
            let style = tilt_style(tilt_view.compute_tilt(id, &measure), hovered);
            let on_enter = {
                let tilt = tilt.clone();
                let redraw = redraw.clone();
                Callback::from(move |_: PointerEvent| {
                    let result = tilt.borrow_mut().on_tile_hover_start(id);
                    match result {
                        Ok(hover) => app_runtime::trace("tilt", hover),
                        Err(err) => {
                            gloo::console::warn!("tilt", err.to_string());
                            return;
                        }
                    }
                    redraw.force_update();
                })
            };
            let on_leave = {
                let tilt = tilt.clone();
                let redraw = redraw.clone();
                Callback::from(move |_: PointerEvent| {
                    let hover = tilt.borrow_mut().on_tile_hover_end(id);
                    app_runtime::trace("tilt", hover);
                    redraw.force_update();
                })
            };
            html! {
                <RevealItem key={id.0} index={index}>
                    <div ref={node.clone()} onpointerenter={on_enter} onpointerleave={on_leave}>
                        <div
                            class="tilt-tile flex items-center p-6 rounded-2xl border border-slate-100 bg-slate-50 hover:bg-white hover:shadow-lg hover:border-blue-100 transition-all duration-300 group cursor-default"
                            style={style}
                        >
                            <div class={classes!(
                                "p-4", "rounded-xl", skill.bg, skill.color,
                                "group-hover:scale-110", "transition-transform", "duration-300"
                            )}>
                                <Icon name={skill.icon} class={classes!("h-7", "w-7")} />
                            </div>
                            <div class="ml-5">
                                <h3 class="text-lg font-bold text-slate-800 group-hover:text-blue-600 transition-colors">
                                    { skill.name }
                                </h3>
                            </div>
                        </div>
                    </div>
                </RevealItem>
            }
        })
        .collect::<Html>();

    html! {
        <section id="skills" class="py-24 bg-white relative">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <Reveal class={classes!("text-center", "mb-16")}>
                    <RevealItem>
                        <h2 class="text-3xl md:text-5xl font-bold text-slate-900 mb-4">{"Technical Skills"}</h2>
                        <p class="text-slate-600 max-w-2xl mx-auto">
                            {"My core technology stack for building modern, responsive web applications."}
                        </p>
                    </RevealItem>
                </Reveal>
                <Reveal schedule={STAGGER_GRID} margin={0.0}>
                    <div
                        ref={grid_ref.clone()}
                        class="grid grid-cols-2 md:grid-cols-3 gap-6 lg:gap-8 max-w-5xl mx-auto"
                        onpointermove={on_pointer_move}
                        onpointerleave={on_pointer_leave}
                    >
                        { tiles }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
