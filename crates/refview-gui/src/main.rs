mod app;
mod convert;
mod host;
mod messages;
mod panels;
mod settings;
mod state;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Reference Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "RefviewPanel",
        options,
        Box::new(|_cc| Ok(Box::new(app::RefviewApp::new()))),
    )
}
