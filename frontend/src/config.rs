#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://crestovix.com"
}

pub const STUDIO_NAME: &str = "Crestovix Studio";

/// WhatsApp destination for project enquiries, international format without `+`.
pub const WHATSAPP_NUMBER: &str = "917736314029";

pub const START_PROJECT_MESSAGE: &str =
    "Hello! I'm interested in starting a project with Crestovix Studio. Can we discuss my requirements?";

pub fn whatsapp_link(text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(text)
    )
}

pub fn start_project_link() -> String {
    whatsapp_link(START_PROJECT_MESSAGE)
}

/// Opens `url` in a new tab. Returns false when the browser refused.
pub fn open_in_new_tab(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => true,
        Ok(None) => {
            log::warn!("Popup blocked for {}", url);
            false
        }
        Err(err) => {
            log::warn!("Failed to open {}: {:?}", url, err);
            false
        }
    }
}
