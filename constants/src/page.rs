/// Canvas receiving the front layer (near objects, drawn over the text).
pub const FRONT_CANVAS_SELECTOR: &str = ".my-block__canvas--front";

/// Canvas receiving the back layer (everything, drawn under the text).
pub const BACK_CANVAS_SELECTOR: &str = ".my-block__canvas--back";

/// Element whose client size defines the viewport.
pub const SIZE_REFERENCE_SELECTOR: &str = ".dummy-for-size";

/// Header element bounding the landmark's resting region.
pub const TITLE_SELECTOR: &str = ".my-dom__title";

/// `<body>` attribute holding JSON scene settings.
pub const SETTINGS_ATTRIBUTE: &str = "data-scene-settings";

/// Native view: document height as a multiple of the window height.
pub const NATIVE_DOCUMENT_PAGES: f32 = 4.0;

pub const NATIVE_TITLE_HEIGHT_PX: f32 = 300.0;

/// Native view: pixels scrolled per mouse-wheel line.
pub const NATIVE_PIXELS_PER_LINE: f32 = 40.0;
