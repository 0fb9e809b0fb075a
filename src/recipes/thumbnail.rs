use eframe::egui::load::{LoadError, SizeHint, SizedTexture, TextureLoadResult, TexturePoll};
use eframe::egui::{Context, TextureOptions};

/// What a row shows in its image slot on this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thumbnail {
    Loading,
    Ready(SizedTexture),
    Placeholder,
}

/// Source of row images. Implemented by the egui context, whose installed
/// loaders fetch and decode in the background and repaint once done.
pub trait ThumbnailLoader {
    fn poll(&self, uri: &str) -> TextureLoadResult;
}

impl ThumbnailLoader for Context {
    fn poll(&self, uri: &str) -> TextureLoadResult {
        self.try_load_texture(uri, TextureOptions::LINEAR, SizeHint::default())
    }
}

impl Thumbnail {
    pub fn from_poll(result: &Result<TexturePoll, LoadError>) -> Self {
        match result {
            Ok(TexturePoll::Ready { texture }) => Thumbnail::Ready(*texture),
            Ok(TexturePoll::Pending { .. }) => Thumbnail::Loading,
            Err(_) => Thumbnail::Placeholder,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Thumbnail::Ready(_))
    }
}
