/// One submitted recipe. Rows are identified by position, there is no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub image_uri: String,
}

impl Recipe {
    pub fn new(title: impl Into<String>, image_uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_uri: image_uri.into(),
        }
    }
}
