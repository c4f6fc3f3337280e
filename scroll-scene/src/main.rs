use crate::engine::core::app_setup::create_app;
use crate::page::settings::load_scene_settings;

mod engine;
mod page;

fn main() {
    let settings = load_scene_settings();
    let mut app = create_app(settings);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
