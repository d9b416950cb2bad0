mod app;
mod convert;
mod panels;
mod states;

use easycrop_core::config::CropperConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = CropperConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 240.0])
            .with_drag_and_drop(true)
            .with_title("Image Cropper"),
        ..Default::default()
    };

    eframe::run_native(
        "EasyCrop",
        options,
        Box::new(|_cc| Ok(Box::new(app::CropperApp::new(config)))),
    )
}
