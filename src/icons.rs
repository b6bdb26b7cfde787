use yew::prelude::*;

const ICON_PATHS: &[(&str, &[&str])] = &[
    ("cart", &["M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z"]),
    ("utensils", &["M8 3v18M16 3c0 3-1 5-3 6v12"]),
    ("shield", &["M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"]),
    ("smile", &["M14.828 14.828a4 4 0 01-5.656 0M9 10h.01M15 10h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"]),
    ("atom", &["M12 12h.01", "M20.2 20.2c2-2-.5-7.8-5.5-12.9S3.8 1.8 1.8 3.8s.5 7.8 5.5 12.9 10.9 5.5 12.9 3.5z", "M15.7 15.7c5-5.1 7.5-10.9 5.5-12.9s-7.8.5-12.9 5.5-7.5 10.9-5.5 12.9 7.8-.5 12.9-5.5z"]),
    ("palette", &["M12 22a10 10 0 1 1 10-10c0 2.8-2.2 4-4 4h-2a2 2 0 0 0-1.5 3.3A2 2 0 0 1 12 22z", "M7.5 10.5h.01M10.5 7.5h.01M15.5 8.5h.01"]),
    ("file-code", &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z", "M14 2v6h6", "M10 13l-2 2 2 2M14 17l2-2-2-2"]),
    ("layout", &["M3 3h18v18H3z", "M3 9h18M9 21V9"]),
    ("code", &["M16 18l6-6-6-6M8 6l-6 6 6 6"]),
    ("globe", &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M2 12h20M12 2a15.3 15.3 0 0 1 0 20 15.3 15.3 0 0 1 0-20z"]),
    ("shopping-bag", &["M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z", "M3 6h18M16 10a4 4 0 0 1-8 0"]),
    ("database", &["M12 8c4.97 0 9-1.34 9-3s-4.03-3-9-3-9 1.34-9 3 4.03 3 9 3z", "M21 12c0 1.66-4 3-9 3s-9-1.34-9-3M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"]),
    ("cpu", &["M6 6h12v12H6z", "M9 9h6v6H9zM9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3"]),
    ("brain", &["M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18z", "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18z"]),
    ("pen-tool", &["M12 19l7-7 3 3-7 7-3-3z", "M18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5zM2 2l7.586 7.586"]),
    ("terminal", &["M4 17l6-6-6-6M12 19h8"]),
    ("github", &["M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"]),
    ("linkedin", &["M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z", "M2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"]),
    ("twitter", &["M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"]),
    ("download", &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3"]),
    ("send", &["M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z"]),
    ("mail", &["M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z", "M22 6l-10 7L2 6"]),
    ("map-pin", &["M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z", "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"]),
    ("phone", &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"]),
    ("briefcase", &["M2 7h20v14H2z", "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"]),
    ("graduation-cap", &["M22 10L12 5 2 10l10 5 10-5z", "M6 12v5c3 3 9 3 12 0v-5"]),
    ("book-open", &["M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z", "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"]),
    ("external-link", &["M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14L21 3"]),
    ("arrow-up-right", &["M7 17L17 7M7 7h10v10"]),
    ("menu", &["M4 6h16M4 12h16M4 18h16"]),
    ("close", &["M6 18L18 6M6 6l12 12"]),
];

fn icon_paths(name: &str) -> &'static [&'static str] {
    ICON_PATHS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, paths)| *paths)
        .unwrap_or(&[])
}

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub(crate) fn icon(props: &IconProps) -> Html {
    let paths = icon_paths(props.name.as_str());
    if paths.is_empty() {
        gloo::console::warn!("unknown icon", props.name.to_string());
    }
    let class = if props.class.is_empty() {
        classes!("h-5", "w-5")
    } else {
        props.class.clone()
    };
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={class}
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
