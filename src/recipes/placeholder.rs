use crate::config::{PLACEHOLDER_BACKGROUND, PLACEHOLDER_FOREGROUND, PLACEHOLDER_SIZE};
use eframe::egui::load::SizedTexture;
use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};
use image::RgbaImage;

/// Grey tile with a frame and a diagonal cross, drawn where an image failed to load.
pub fn draw_placeholder(size: u32) -> RgbaImage {
    let border = (size / 16).max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        let on_border = x < border || y < border || x >= size - border || y >= size - border;
        let on_cross = x.abs_diff(y) < border || (x + y + 1).abs_diff(size) < border;
        if on_border || on_cross {
            PLACEHOLDER_FOREGROUND
        } else {
            PLACEHOLDER_BACKGROUND
        }
    })
}

/// Placeholder texture, uploaded on first use and shared by all rows.
#[derive(Default)]
pub struct Placeholder {
    texture: Option<TextureHandle>,
}

impl Placeholder {
    pub fn texture(&mut self, ctx: &Context) -> SizedTexture {
        let handle = self.texture.get_or_insert_with(|| {
            let pixels = draw_placeholder(PLACEHOLDER_SIZE);
            let egui_image = ColorImage::from_rgba_unmultiplied(
                [pixels.width() as usize, pixels.height() as usize],
                pixels.as_raw(),
            );
            ctx.load_texture("recipe_placeholder", egui_image, TextureOptions::LINEAR)
        });
        SizedTexture::from_handle(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_and_cross_use_foreground() {
        let img = draw_placeholder(64);

        assert_eq!(img.dimensions(), (64, 64));
        assert_eq!(*img.get_pixel(0, 10), PLACEHOLDER_FOREGROUND);
        assert_eq!(*img.get_pixel(63, 10), PLACEHOLDER_FOREGROUND);
        assert_eq!(*img.get_pixel(32, 32), PLACEHOLDER_FOREGROUND);
        assert_eq!(*img.get_pixel(10, 53), PLACEHOLDER_FOREGROUND);
        assert_eq!(*img.get_pixel(20, 10), PLACEHOLDER_BACKGROUND);
    }

    #[test]
    fn tiny_sizes_still_draw() {
        let img = draw_placeholder(2);
        assert_eq!(img.dimensions(), (2, 2));
    }
}
