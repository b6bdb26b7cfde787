use web_sys::Element;
use yew::prelude::*;

use portfolio_core::content::{GALLERY, PROJECTS, SKILLS};

use crate::about::AboutSections;
use crate::app_runtime;
use crate::gallery::ProjectGallery;
use crate::hero::{Hero, Navbar};
use crate::showcase::ProjectShowcase;
use crate::skills::SkillsGrid;

pub(crate) const ROOT_ID: &str = "app";

#[function_component(App)]
pub(crate) fn app() -> Html {
    use_effect_with((), |_| {
        app_runtime::trace(
            "app",
            format!(
                "mounted with {} projects, {} skills, {} gallery items",
                PROJECTS.len(),
                SKILLS.len(),
                GALLERY.len()
            ),
        );
        || ()
    });

    html! {
        <div class="App">
            <div class="bg-gray-900">
                <Navbar />
                <Hero />
            </div>
            <section id="projects">
                <ProjectShowcase />
            </section>
            <SkillsGrid />
            <ProjectGallery />
            <section id="about">
                <AboutSections />
            </section>
            <section id="contact"></section>
        </div>
    }
}

fn mount_root() -> Option<Element> {
    let window = web_sys::window()?;
    let document = window.document()?;
    document.get_element_by_id(ROOT_ID)
}

pub(crate) fn run() -> bool {
    let Some(root) = mount_root() else {
        return false;
    };
    let _app_handle = yew::Renderer::<App>::with_root(root).render();
    true
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn app_renders_every_anchor_section() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        yew::platform::time::sleep(Duration::from_millis(50)).await;

        for id in ["home", "projects", "skills", "about", "contact"] {
            assert!(document.get_element_by_id(id).is_some(), "missing #{id}");
        }
        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Project Deck"));
        assert!(text.contains("Technical Skills"));

        handle.destroy();
        root.remove();
    }
}
