use super::state::RecipeApp;
use eframe::egui::{Context, Key, Response};

impl RecipeApp {
    /// Enter in either draft field submits, same as the button.
    pub fn enter_submits(&mut self, ctx: &Context, fields: &[&Response]) {
        let editing = fields.iter().any(|field| field.lost_focus());
        if !editing || !ctx.input(|i| i.key_pressed(Key::Enter)) {
            return;
        }
        let now = ctx.input(|i| i.time);
        self.submit_form(now);
    }
}
