pub const MIN_YEAR: i32 = 1800;
pub const MAX_YEAR: i32 = 2100;

// Identifiable defines the key a catalog record is addressed by
pub trait Identifiable {
    fn id(&self) -> String;
}

// Configuration abstracts config options for a catalog session
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub min_year: i32,
    pub max_year: i32,
    pub publish_events: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
            publish_events: true,
        }
    }

    pub fn with_publish_events(mut self, publish_events: bool) -> Self {
        self.publish_events = publish_events;
        self
    }

    pub fn accepts_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}
