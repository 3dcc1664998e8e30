use wasm_bindgen::JsCast;

/// Browser facilities used by the dashboard actions
pub trait Browser {
    /// Blocking yes/no question
    fn confirm(&self, message: &str) -> bool;
    fn reload_after(&self, delay_ms: u32);
    fn focus(&self, element_id: &str);
}

/// The real window
#[derive(Debug, Clone, Copy, Default)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload_after(&self, delay_ms: u32) {
        gloo_timers::callback::Timeout::new(delay_ms, || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        })
        .forget();
    }

    fn focus(&self, element_id: &str) {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());

        if let Some(element) = element {
            let _ = element.focus();
        }
    }
}
