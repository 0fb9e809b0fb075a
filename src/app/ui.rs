use super::state::RecipeApp;
use crate::config::{
    ADD_BUTTON, FIELD_SPACING, HEADING, IMAGE_HINT, NAME_HINT, SCREEN_PADDING, SECTION_SPACING,
};
use eframe::egui::{self, CentralPanel, Context, Frame, Id, Margin, TextEdit, Ui, Vec2};

pub const NAME_FIELD_ID: &str = "recipe_name_field";
pub const IMAGE_FIELD_ID: &str = "recipe_image_field";

impl RecipeApp {
    pub fn render_ui(&mut self, ctx: &Context) {
        // Global styles
        self.setup_custom_styles(ctx);

        // Whole screen is one padded central panel
        CentralPanel::default()
            .frame(Frame::central_panel(&ctx.style()).inner_margin(Margin::same(SCREEN_PADDING as i8)))
            .show(ctx, |ui| {
                // Title
                ui.vertical_centered(|ui| {
                    ui.heading(HEADING);
                });
                ui.add_space(SECTION_SPACING);

                // Name and image URL drafts with the add button
                self.render_form(ui);
                ui.add_space(SECTION_SPACING);

                // Recipes, lazily laid out
                let placeholder = self.placeholder.texture(ctx);
                self.list.show(ui, &self.store, placeholder);
            });

        // Toasts on top of everything
        self.notices.render(ctx);
    }

    fn setup_custom_styles(&self, ctx: &Context) {
        let mut style = (*ctx.style()).clone();

        // Bigger heading
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        // Body text for titles and hints
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        // Roomier buttons and rows
        style.spacing.button_padding = Vec2::new(10.0, 6.0);
        style.spacing.item_spacing = Vec2::new(8.0, 8.0);

        ctx.set_style(style);
    }

    fn render_form(&mut self, ui: &mut Ui) {
        let mut name = self.form.name().to_owned();
        let name_field = ui.add(
            TextEdit::singleline(&mut name)
                .id(Id::new(NAME_FIELD_ID))
                .hint_text(NAME_HINT)
                .desired_width(f32::INFINITY),
        );
        if name_field.changed() {
            self.form.update_name(name);
        }
        ui.add_space(FIELD_SPACING);

        let mut image_uri = self.form.image_uri().to_owned();
        let image_field = ui.add(
            TextEdit::singleline(&mut image_uri)
                .id(Id::new(IMAGE_FIELD_ID))
                .hint_text(IMAGE_HINT)
                .desired_width(f32::INFINITY),
        );
        if image_field.changed() {
            self.form.update_image_uri(image_uri);
        }
        ui.add_space(FIELD_SPACING);

        // Enter in a field works like the button
        self.enter_submits(ui.ctx(), &[&name_field, &image_field]);

        ui.vertical_centered(|ui| {
            if ui.add(egui::Button::new(ADD_BUTTON).min_size(Vec2::new(140.0, 36.0))).clicked() {
                let now = ui.input(|i| i.time);
                self.submit_form(now);
            }
        });
    }
}
