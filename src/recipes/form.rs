use super::item::Recipe;
use super::store::RecipeStore;
use crate::error::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    Empty,
    PartiallyFilled,
    Filled,
}

/// Draft values of the "add recipe" form.
///
/// Text is stored verbatim: no trimming, so whitespace counts as content.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    name: String,
    image_uri: String,
}

impl RecipeForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_uri(&self) -> &str {
        &self.image_uri
    }

    pub fn update_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    pub fn update_image_uri(&mut self, text: impl Into<String>) {
        self.image_uri = text.into();
    }

    pub fn status(&self) -> DraftStatus {
        match (self.name.is_empty(), self.image_uri.is_empty()) {
            (true, true) => DraftStatus::Empty,
            (false, false) => DraftStatus::Filled,
            _ => DraftStatus::PartiallyFilled,
        }
    }

    /// Appends a recipe built from the drafts and clears them.
    /// On error neither the store nor the drafts are touched.
    pub fn submit(&mut self, store: &mut RecipeStore) -> Result<(), SubmitError> {
        if self.status() != DraftStatus::Filled {
            return Err(SubmitError::MissingFields);
        }

        let name = std::mem::take(&mut self.name);
        let image_uri = std::mem::take(&mut self.image_uri);
        store.append(Recipe::new(name, image_uri));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, uri: &str) -> RecipeForm {
        let mut form = RecipeForm::default();
        form.update_name(name);
        form.update_image_uri(uri);
        form
    }

    #[test]
    fn successful_submit_appends_and_clears() {
        let mut store = RecipeStore::default();
        let mut form = filled("Pasta", "http://x/img.png");

        assert_eq!(form.submit(&mut store), Ok(()));

        assert_eq!(store.items(), &[Recipe::new("Pasta", "http://x/img.png")]);
        assert_eq!(form.name(), "");
        assert_eq!(form.image_uri(), "");
        assert_eq!(form.status(), DraftStatus::Empty);
    }

    #[test]
    fn missing_name_keeps_everything() {
        let mut store = RecipeStore::default();
        let mut form = filled("", "http://x/img.png");

        assert_eq!(form.submit(&mut store), Err(SubmitError::MissingFields));

        assert!(store.is_empty());
        assert_eq!(form.name(), "");
        assert_eq!(form.image_uri(), "http://x/img.png");
    }

    #[test]
    fn missing_image_keeps_everything() {
        let mut store = RecipeStore::default();
        let mut form = filled("Pasta", "");

        assert_eq!(form.submit(&mut store), Err(SubmitError::MissingFields));

        assert!(store.is_empty());
        assert_eq!(form.name(), "Pasta");
        assert_eq!(form.image_uri(), "");
    }

    #[test]
    fn empty_form_is_rejected() {
        let mut store = RecipeStore::default();
        let mut form = RecipeForm::default();

        assert_eq!(form.status(), DraftStatus::Empty);
        assert!(form.submit(&mut store).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn whitespace_counts_as_content() {
        let mut store = RecipeStore::default();
        let mut form = filled(" ", "\t");

        assert_eq!(form.status(), DraftStatus::Filled);
        assert_eq!(form.submit(&mut store), Ok(()));
        assert_eq!(store.items(), &[Recipe::new(" ", "\t")]);
    }

    #[test]
    fn updates_are_verbatim() {
        let mut form = RecipeForm::default();
        form.update_name("  Pasta  ");
        assert_eq!(form.status(), DraftStatus::PartiallyFilled);
        form.update_image_uri("not a url");

        assert_eq!(form.name(), "  Pasta  ");
        assert_eq!(form.image_uri(), "not a url");
        assert_eq!(form.status(), DraftStatus::Filled);
    }

    #[test]
    fn only_successful_submits_are_counted() {
        let mut store = RecipeStore::default();
        let mut form = RecipeForm::default();

        form.update_name("A");
        form.update_image_uri("urlA");
        form.submit(&mut store).unwrap();

        form.update_name("B");
        assert!(form.submit(&mut store).is_err());
        form.update_image_uri("urlB");
        form.submit(&mut store).unwrap();

        assert_eq!(
            store.items(),
            &[Recipe::new("A", "urlA"), Recipe::new("B", "urlB")]
        );
    }
}
