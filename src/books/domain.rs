use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;

    // case-insensitive substring match against title or author; `needle`
    // must already be lowercased
    fn matches(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle) || self.author().to_lowercase().contains(needle)
    }
}
