use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, Event, Node};

use portfolio_core::TileRect;

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

/// Converts viewport coordinates into coordinates relative to the top-left
/// corner of `element`. `None` while the element has no layout box.
pub(crate) fn client_to_local(
    client_x: f32,
    client_y: f32,
    element: &impl HasClientRect,
) -> Option<(f32, f32)> {
    let rect = element.client_rect();
    let width = rect.width() as f32;
    let height = rect.height() as f32;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((client_x - rect.left() as f32, client_y - rect.top() as f32))
}

pub(crate) fn local_rect(
    element: &impl HasClientRect,
    container: &impl HasClientRect,
) -> Option<TileRect> {
    let rect = element.client_rect();
    let origin = container.client_rect();
    let tile = TileRect {
        left: (rect.left() - origin.left()) as f32,
        top: (rect.top() - origin.top()) as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    };
    if tile.is_measured() {
        Some(tile)
    } else {
        None
    }
}

pub(crate) fn event_inside(container: &Element, event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(node) = target.dyn_ref::<Node>() else {
        return false;
    };
    container.contains(Some(node))
}

pub(crate) fn viewport_height() -> f32 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as f32
}

pub(crate) fn scroll_y() -> f32 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixed_box(left: u32, top: u32, width: u32, height: u32) -> Element {
        let document = gloo::utils::document();
        let element = document.create_element("div").unwrap();
        element
            .set_attribute(
                "style",
                &format!(
                    "position:fixed;left:{left}px;top:{top}px;width:{width}px;height:{height}px"
                ),
            )
            .unwrap();
        gloo::utils::body().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn client_coords_become_container_relative() {
        let element = fixed_box(10, 20, 100, 50);
        assert_eq!(client_to_local(15.0, 30.0, &element), Some((5.0, 10.0)));
        element.remove();
    }

    #[wasm_bindgen_test]
    fn detached_element_has_no_local_coords() {
        let element = gloo::utils::document().create_element("div").unwrap();
        assert_eq!(client_to_local(1.0, 1.0, &element), None);
    }

    #[wasm_bindgen_test]
    fn tile_rect_is_relative_to_container() {
        let container = fixed_box(40, 40, 300, 200);
        let tile = fixed_box(60, 90, 80, 60);
        let rect = local_rect(&tile, &container).unwrap();
        assert_eq!((rect.left, rect.top, rect.width, rect.height), (20.0, 50.0, 80.0, 60.0));
        tile.remove();
        container.remove();
    }
}
