//! Bridge between the host page and the scene.
//!
//! On wasm32 the page is the real DOM: two canvases, a sizing element, an
//! optional title element and the window scroll position. Native builds
//! stand in for the page with the primary window and a wheel-driven
//! virtual scroll offset so the scene can be developed without a browser.

use bevy::math::Vec2;
use std::fmt;

/// DOM handles and per-frame reads for wasm32 builds.
#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Window-backed page stand-in for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

/// Runtime scene settings and where they are read from.
pub mod settings;

/// Raw page measurements for one frame, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageSignals {
    pub viewport: Vec2,
    pub scroll_offset: f32,
    pub document_height: f32,
    pub title_height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    MissingWindow,
    MissingDocument,
    MissingElement {
        role: &'static str,
        selector: String,
    },
    InvalidSettings(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::MissingWindow => write!(f, "no global window object"),
            PageError::MissingDocument => write!(f, "window has no document"),
            PageError::MissingElement { role, selector } => {
                write!(f, "required {role} element not found for selector '{selector}'")
            }
            PageError::InvalidSettings(reason) => write!(f, "invalid scene settings: {reason}"),
        }
    }
}

impl std::error::Error for PageError {}

/// Clamp a browser measurement to a usable pixel value.
///
/// Layout reads can be fractional, negative during overscroll, or NaN while
/// the page is detached; anything that is not a finite positive value is 0.
pub fn sanitise_measurement(value: f64) -> f32 {
    if value.is_finite() && value > 0.0 {
        value as f32
    } else {
        0.0
    }
}
