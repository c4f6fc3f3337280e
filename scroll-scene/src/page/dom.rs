use bevy::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use super::settings::SceneSettings;
use super::{PageError, PageSignals, sanitise_measurement};

/// Resolved page handles. `!Send`, so it lives in a non-send resource.
pub struct DomPage {
    window: Window,
    body: HtmlElement,
    size_reference: Element,
    title: Option<Element>,
}

impl DomPage {
    /// Resolve every handle the scene needs.
    ///
    /// Both canvases are only checked for presence here; Bevy attaches to
    /// them through the window selectors.
    pub fn resolve(settings: &SceneSettings) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::MissingWindow)?;
        let document = window.document().ok_or(PageError::MissingDocument)?;
        let body = document.body().ok_or(PageError::MissingDocument)?;

        select(&document, "front canvas", &settings.front_canvas)?;
        select(&document, "back canvas", &settings.back_canvas)?;
        let size_reference = select(&document, "size reference", &settings.size_reference)?;
        let title = if settings.landmark {
            Some(select(&document, "title", &settings.title)?)
        } else {
            None
        };

        Ok(Self {
            window,
            body,
            size_reference,
            title,
        })
    }

    pub fn read(&self) -> PageSignals {
        let viewport = Vec2::new(
            self.size_reference.client_width() as f32,
            self.size_reference.client_height() as f32,
        );
        let scroll_offset = sanitise_measurement(self.window.scroll_y().unwrap_or(0.0));
        let document_height = sanitise_measurement(self.body.client_height() as f64);
        let title_height = self
            .title
            .as_ref()
            .map_or(0.0, |title| sanitise_measurement(title.client_height() as f64));

        PageSignals {
            viewport,
            scroll_offset,
            document_height,
            title_height,
        }
    }
}

fn select(document: &Document, role: &'static str, selector: &str) -> Result<Element, PageError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| PageError::MissingElement {
            role,
            selector: selector.to_string(),
        })
}

/// Startup system installing the DOM handles. A missing handle is fatal.
pub fn install_dom_page(world: &mut World) {
    let resolved = {
        let settings = world.resource::<SceneSettings>();
        DomPage::resolve(settings)
    };

    match resolved {
        Ok(page) => {
            info!("Page handles resolved");
            world.insert_non_send_resource(page);
        }
        Err(e) => {
            error!("Cannot attach scene to page: {}", e);
            panic!("scene startup failed: {e}");
        }
    }
}
