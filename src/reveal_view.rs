use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use portfolio_core::reveal::{FADE_IN_UP, VIEWPORT_MARGIN_PX};
use portfolio_core::{intersects_viewport, RevealLatch, RevealSchedule};

use crate::input::viewport_height;
use crate::listeners::Subscription;
use crate::style::reveal_style;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RevealContext {
    pub(crate) revealed: bool,
    pub(crate) schedule: RevealSchedule,
}

#[derive(Properties, PartialEq)]
pub(crate) struct RevealProps {
    #[prop_or(FADE_IN_UP)]
    pub schedule: RevealSchedule,
    #[prop_or(VIEWPORT_MARGIN_PX)]
    pub margin: f32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

type SubscriptionSlot = Rc<RefCell<Option<Subscription>>>;

/// Checks the element against the viewport now and on every window scroll or
/// resize until it is first visible. The returned slot holds the listeners
/// and is emptied as soon as `on_reveal` runs.
fn watch_until_visible<L, F>(locate: L, margin: f32, on_reveal: F) -> SubscriptionSlot
where
    L: Fn() -> Option<Element> + 'static,
    F: Fn() + 'static,
{
    let slot: SubscriptionSlot = Rc::new(RefCell::new(None));
    let latch = Rc::new(RefCell::new(RevealLatch::new()));
    let check: Rc<dyn Fn()> = Rc::new({
        let slot = Rc::downgrade(&slot);
        let latch = latch.clone();
        move || {
            let Some(element) = locate() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let visible = intersects_viewport(
                rect.top() as f32,
                rect.bottom() as f32,
                viewport_height(),
                margin,
            );
            if !latch.borrow_mut().observe(visible) {
                return;
            }
            on_reveal();
            if let Some(slot) = slot.upgrade() {
                let released = slot.borrow_mut().take();
                drop(released);
            }
        }
    });
    check();
    if latch.borrow().revealed() {
        return slot;
    }
    let on_scroll = check.clone();
    let on_resize = check;
    *slot.borrow_mut() = Some(
        Subscription::new()
            .window("scroll", move |_| on_scroll())
            .window("resize", move |_| on_resize()),
    );
    slot
}

/// Container that flips to revealed the first time it scrolls into view.
/// Children read the flag through `RevealItem`.
#[function_component(Reveal)]
pub(crate) fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);
    let margin = props.margin;

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let slot = watch_until_visible(
                move || node.cast::<Element>(),
                margin,
                move || revealed.set(true),
            );
            move || {
                let released = slot.borrow_mut().take();
                drop(released);
            }
        });
    }

    let context = RevealContext {
        revealed: *revealed,
        schedule: props.schedule,
    };
    html! {
        <ContextProvider<RevealContext> context={context}>
            <div ref={node} id={props.id.clone()} class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        </ContextProvider<RevealContext>>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RevealItemProps {
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealItem)]
pub(crate) fn reveal_item(props: &RevealItemProps) -> Html {
    let context = use_context::<RevealContext>().unwrap_or(RevealContext {
        revealed: true,
        schedule: FADE_IN_UP,
    });
    html! {
        <div
            class={classes!("reveal", props.class.clone())}
            style={reveal_style(&context.schedule, props.index, context.revealed)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixed_box(top: i32) -> Element {
        let element = gloo::utils::document().create_element("div").unwrap();
        element
            .set_attribute(
                "style",
                &format!("position:fixed;left:0;top:{top}px;width:50px;height:50px"),
            )
            .unwrap();
        gloo::utils::body().append_child(&element).unwrap();
        element
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0u32));
        let bump = {
            let hits = hits.clone();
            move || hits.set(hits.get() + 1)
        };
        (hits, bump)
    }

    #[wasm_bindgen_test]
    fn visible_element_reveals_without_listening() {
        let element = fixed_box(10);
        let (hits, bump) = counter();
        let target = element.clone();
        let slot = watch_until_visible(move || Some(target.clone()), 0.0, bump);
        assert_eq!(hits.get(), 1);
        assert!(slot.borrow().is_none());
        element.remove();
    }

    #[wasm_bindgen_test]
    fn listeners_are_released_after_the_first_reveal() {
        let element = fixed_box(100_000);
        let (hits, bump) = counter();
        let target = element.clone();
        let slot = watch_until_visible(move || Some(target.clone()), 0.0, bump);
        assert_eq!(hits.get(), 0);
        assert!(slot.borrow().is_some());

        element
            .set_attribute("style", "position:fixed;left:0;top:10px;width:50px;height:50px")
            .unwrap();
        let window = gloo::utils::window();
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);
        assert!(slot.borrow().is_none());

        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);
        element.remove();
    }
}
