use super::item::Recipe;
use tracing::debug;

type Listener = Box<dyn FnMut(usize)>;

/// Append-only list of recipes for the lifetime of the screen.
///
/// Views register listeners with [`RecipeStore::subscribe`]; every append
/// calls each listener with the new length.
#[derive(Default)]
pub struct RecipeStore {
    items: Vec<Recipe>,
    listeners: Vec<Listener>,
}

impl RecipeStore {
    pub fn append(&mut self, recipe: Recipe) {
        debug!(title = %recipe.title, uri = %recipe.image_uri, "appending recipe");
        self.items.push(recipe);

        let len = self.items.len();
        for listener in &mut self.listeners {
            listener(len);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn items(&self) -> &[Recipe] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_empty() {
        let store = RecipeStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(0).is_none());
    }

    #[test]
    fn append_keeps_submission_order() {
        let mut store = RecipeStore::default();
        store.append(Recipe::new("A", "urlA"));
        store.append(Recipe::new("B", "urlB"));
        store.append(Recipe::new("A", "urlA"));

        assert_eq!(
            store.items(),
            &[
                Recipe::new("A", "urlA"),
                Recipe::new("B", "urlB"),
                Recipe::new("A", "urlA"),
            ]
        );
        assert_eq!(store.get(1), Some(&Recipe::new("B", "urlB")));
    }

    #[test]
    fn listeners_see_every_append() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = RecipeStore::default();

        let first = Rc::clone(&seen);
        store.subscribe(move |len| first.borrow_mut().push(("first", len)));
        let second = Rc::clone(&seen);
        store.subscribe(move |len| second.borrow_mut().push(("second", len)));

        store.append(Recipe::new("Pasta", "http://x/img.png"));
        store.append(Recipe::new("Soup", "http://x/soup.png"));

        assert_eq!(
            *seen.borrow(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );
    }
}
