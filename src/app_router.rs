use web_sys::UrlSearchParams;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct InitConfig {
    pub(crate) debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NavAnchor {
    pub(crate) label: &'static str,
    pub(crate) id: &'static str,
}

pub(crate) const NAV_ANCHORS: &[NavAnchor] = &[
    NavAnchor { label: "Home", id: "home" },
    NavAnchor { label: "About", id: "about" },
    NavAnchor { label: "Projects", id: "projects" },
    NavAnchor { label: "Contact", id: "contact" },
];

pub(crate) fn load_init_config() -> InitConfig {
    let Some(window) = web_sys::window() else {
        return InitConfig::default();
    };
    let location = window.location();
    let hash = location.hash().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    InitConfig {
        debug: debug_flag_from_hash(&hash) || debug_flag_from_query(&search),
    }
}

pub(crate) fn scroll_to_anchor(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    element.scroll_into_view_with_bool(true);
    true
}

fn flag_enabled(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || matches!(value, "1" | "true" | "on" | "yes")
}

fn debug_flag_from_hash(hash: &str) -> bool {
    let raw = hash.trim().trim_start_matches('#').trim();
    if raw.is_empty() {
        return false;
    }
    raw.split(';').any(|chunk| {
        let mut iter = chunk.splitn(2, '=');
        let key = iter.next().unwrap_or("").trim();
        let value = iter.next().unwrap_or("");
        key.eq_ignore_ascii_case("debug") && flag_enabled(value)
    })
}

fn debug_flag_from_query(search: &str) -> bool {
    let search = search.trim();
    if search.is_empty() {
        return false;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return false;
    };
    params
        .get("debug")
        .map(|value| flag_enabled(&value))
        .unwrap_or(false)
}
