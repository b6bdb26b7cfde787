mod about;
mod app_router;
mod app_runtime;
mod boot;
mod gallery;
mod hero;
mod icons;
mod input;
mod listeners;
mod reveal_view;
mod showcase;
mod skills;
mod style;
mod yew_app;

use boot::BootPhase;

fn main() {
    console_error_panic_hook::set_once();
    let config = app_router::load_init_config();
    app_runtime::set_init_config(config);

    boot::set_phase(BootPhase::Content, "catalog");
    app_runtime::trace(
        "boot",
        format!(
            "{} projects, {} skills",
            portfolio_core::content::PROJECTS.len(),
            portfolio_core::content::SKILLS.len()
        ),
    );

    boot::set_phase(BootPhase::Mount, yew_app::ROOT_ID);
    if !yew_app::run() {
        boot::fail("mount", "no #app element in the page");
        return;
    }
    boot::ready();
}
