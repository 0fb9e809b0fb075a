use crate::notice::Notices;
use crate::recipes::form::RecipeForm;
use crate::recipes::list::RecipeList;
use crate::recipes::placeholder::Placeholder;
use crate::recipes::store::RecipeStore;
use eframe::egui::Context;
use tracing::{info, warn};

#[derive(Default)]
pub struct RecipeApp {
    pub store: RecipeStore,
    pub form: RecipeForm,
    pub list: RecipeList,
    pub notices: Notices,
    pub placeholder: Placeholder,
}

impl RecipeApp {
    /// Screen bound to `ctx`: every append to the store schedules a repaint.
    pub fn new(ctx: &Context) -> Self {
        let mut app = Self::default();
        let ctx = ctx.clone();
        app.store.subscribe(move |_| ctx.request_repaint());
        app
    }

    /// Submits the drafts. A rejected submit only shows a notice.
    pub fn submit_form(&mut self, now: f64) {
        match self.form.submit(&mut self.store) {
            Ok(()) => info!(count = self.store.len(), "recipe added"),
            Err(err) => {
                warn!(
                    name_empty = self.form.name().is_empty(),
                    uri_empty = self.form.image_uri().is_empty(),
                    "submit rejected: {err}"
                );
                self.notices.show(err.to_string(), now);
            }
        }
    }
}
