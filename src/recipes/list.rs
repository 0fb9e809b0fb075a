use super::item::Recipe;
use super::store::RecipeStore;
use super::thumbnail::{Thumbnail, ThumbnailLoader};
use crate::config::{FADE_SECONDS, ROW_PADDING, THUMBNAIL_SIZE};
use eframe::egui::load::SizedTexture;
use eframe::egui::{
    Align, Color32, Id, Image, Layout, Response, RichText, ScrollArea, Sense, Spinner, Ui, Vec2,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Renders the store as a scrolling list of rows.
///
/// Rows are rebuilt from the store every frame. Per-row state lives here,
/// keyed by row index, which is stable because the store only appends.
#[derive(Default)]
pub struct RecipeList {
    highlighted: HashSet<usize>,
    // (row, uri) pairs whose image load already failed and was logged.
    failed: HashSet<(usize, String)>,
}

impl RecipeList {
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.highlighted.remove(&index) {
            self.highlighted.insert(index);
        }
    }

    pub fn resolve_thumbnail(
        &mut self,
        loader: &impl ThumbnailLoader,
        index: usize,
        uri: &str,
    ) -> Thumbnail {
        let result = loader.poll(uri);
        if let Err(err) = &result {
            if self.failed.insert((index, uri.to_owned())) {
                warn!(row = index, %uri, "thumbnail failed to load: {err}");
            }
        }
        Thumbnail::from_poll(&result)
    }

    /// Row height without item spacing, which `show_rows` adds itself.
    pub fn row_height() -> f32 {
        THUMBNAIL_SIZE + 2.0 * ROW_PADDING
    }

    /// Only rows inside the visible range are built, so off-screen rows
    /// never poll for their image.
    pub fn show(&mut self, ui: &mut Ui, store: &RecipeStore, placeholder: SizedTexture) {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show_rows(ui, Self::row_height(), store.len(), |ui, rows| {
                for index in rows {
                    if let Some(recipe) = store.get(index) {
                        self.show_row(ui, index, recipe, placeholder);
                    }
                }
            });
    }

    fn show_row(
        &mut self,
        ui: &mut Ui,
        index: usize,
        recipe: &Recipe,
        placeholder: SizedTexture,
    ) -> Response {
        let ctx = ui.ctx().clone();
        let thumbnail = self.resolve_thumbnail(&ctx, index, &recipe.image_uri);
        let opacity = ctx.animate_bool_with_time(
            Id::new(("recipe_thumbnail", index)),
            thumbnail.is_ready(),
            FADE_SECONDS,
        );
        let size = Vec2::splat(THUMBNAIL_SIZE);

        let response = ui
            .horizontal(|ui| {
                ui.set_min_height(Self::row_height());
                ui.add_space(ROW_PADDING);
                ui.label(RichText::new(&recipe.title).size(16.0));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add_space(ROW_PADDING);
                    match thumbnail {
                        Thumbnail::Loading => {
                            ui.add_sized(size, Spinner::new());
                        }
                        Thumbnail::Ready(texture) => {
                            ui.add(
                                Image::from_texture(texture)
                                    .fit_to_exact_size(size)
                                    .tint(Color32::WHITE.gamma_multiply(opacity)),
                            );
                        }
                        Thumbnail::Placeholder => {
                            ui.add(Image::from_texture(placeholder).fit_to_exact_size(size));
                        }
                    }
                });
            })
            .response
            .interact(Sense::click());

        if response.clicked() {
            self.toggle(index);
            debug!(row = index, highlighted = self.is_highlighted(index), "row toggled");
        }
        response
    }
}
