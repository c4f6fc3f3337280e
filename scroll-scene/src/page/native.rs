use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::page::{NATIVE_DOCUMENT_PAGES, NATIVE_PIXELS_PER_LINE, NATIVE_TITLE_HEIGHT_PX};

use super::PageSignals;

/// Virtual page scrolled with the mouse wheel.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct NativePage {
    pub scroll_offset: f32,
}

impl NativePage {
    pub fn read(&self, viewport: Vec2) -> PageSignals {
        PageSignals {
            viewport,
            scroll_offset: self.scroll_offset,
            document_height: document_height(viewport),
            title_height: NATIVE_TITLE_HEIGHT_PX,
        }
    }

    /// Scroll by `pixels` (positive scrolls down), staying inside the page.
    pub fn scroll_by(&mut self, pixels: f32, viewport: Vec2) {
        let max_offset = (document_height(viewport) - viewport.y).max(0.0);
        self.scroll_offset = (self.scroll_offset + pixels).clamp(0.0, max_offset);
    }
}

fn document_height(viewport: Vec2) -> f32 {
    viewport.y * NATIVE_DOCUMENT_PAGES
}

pub fn scroll_native_page(
    mut page: ResMut<NativePage>,
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let pixels: f32 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => -ev.y * NATIVE_PIXELS_PER_LINE,
            MouseScrollUnit::Pixel => -ev.y,
        })
        .sum();

    if pixels != 0.0 {
        page.scroll_by(pixels, Vec2::new(window.width(), window.height()));
    }
}
