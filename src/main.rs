mod app;
mod config;
mod error;
mod notice;
mod recipes;

use crate::app::RecipeApp;
use crate::config::{DEFAULT_LOG_FILTER, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use eframe::egui::{Context, ViewportBuilder};
use eframe::{App, Frame, NativeOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

impl App for RecipeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.render_ui(ctx);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result {
    init_logging();

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    info!("starting {WINDOW_TITLE}");
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RecipeApp::new(&cc.egui_ctx)))
        }),
    )
}
