use tracing::debug;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::repository::Repository;

#[derive(Debug, Default, Clone)]
pub struct MemoryBookRepository {
    records: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) {
        debug!(title = entity.title.as_str(), "appending book");
        self.records.push(entity);
    }

    fn update(&mut self, key: &str, entity: BookEntity) -> bool {
        match self.records.iter_mut().find(|b| b.title == key) {
            Some(existing) => {
                *existing = entity;
                true
            }
            None => false,
        }
    }

    fn get(&self, key: &str) -> Option<&BookEntity> {
        self.records.iter().find(|b| b.title == key)
    }

    fn delete(&mut self, key: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|b| b.title != key);
        before - self.records.len()
    }

    fn list(&self) -> &[BookEntity] {
        &self.records
    }
}

impl BookRepository for MemoryBookRepository {
    fn search(&self, term: &str) -> Vec<&BookEntity> {
        let needle = term.to_lowercase();
        self.records.iter().filter(|b| b.matches(needle.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    fn dune() -> BookEntity {
        BookEntity::new("Dune", "Herbert", "Sci-Fi", 1965)
    }

    fn nineteen_eighty_four() -> BookEntity {
        BookEntity::new("1984", "Orwell", "Dystopian", 1949)
    }

    #[test]
    fn test_should_start_empty() {
        let repo = MemoryBookRepository::new();
        assert!(repo.is_empty());
        assert_eq!(0, repo.len());
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_should_add_book() {
        let mut repo = MemoryBookRepository::new();
        repo.create(dune());
        assert_eq!(vec![dune()], repo.list().to_vec());
    }

    #[test]
    fn test_should_search_by_author() {
        let mut repo = MemoryBookRepository::new();
        repo.create(dune());
        repo.create(nineteen_eighty_four());
        assert_eq!(vec![&dune()], repo.search("he"));
        assert_eq!(vec![&nineteen_eighty_four()], repo.search("ORW"));
        assert!(repo.search("tolkien").is_empty());
    }

    #[test]
    fn test_should_ignore_delete_of_missing_title() {
        let mut repo = MemoryBookRepository::new();
        repo.create(nineteen_eighty_four());
        assert_eq!(0, repo.delete("Dune"));
        assert_eq!(vec![nineteen_eighty_four()], repo.list().to_vec());
    }

    #[test]
    fn test_should_delete_every_match() {
        let mut repo = MemoryBookRepository::new();
        repo.create(dune());
        repo.create(nineteen_eighty_four());
        repo.create(BookEntity::new("Dune", "Someone Else", "Sci-Fi", 2021));
        assert_eq!(2, repo.delete("Dune"));
        assert_eq!(vec![nineteen_eighty_four()], repo.list().to_vec());
    }

    #[test]
    fn test_should_delete_case_sensitively() {
        let mut repo = MemoryBookRepository::new();
        repo.create(dune());
        assert_eq!(0, repo.delete("dune"));
        assert_eq!(1, repo.len());
    }

    #[test]
    fn test_should_update_book() {
        let mut repo = MemoryBookRepository::new();
        repo.create(dune());
        repo.create(nineteen_eighty_four());
        let updated = BookEntity::new("Nineteen Eighty-Four", "Orwell", "Dystopian", 1949);
        assert!(repo.update("1984", updated.clone()));
        assert_eq!(vec![dune(), updated], repo.list().to_vec());
    }

    #[test]
    fn test_should_update_first_match_only() {
        let mut repo = MemoryBookRepository::new();
        let second = BookEntity::new("Dune", "Someone Else", "Sci-Fi", 2021);
        repo.create(dune());
        repo.create(second.clone());
        let replacement = BookEntity::new("Dune Messiah", "Herbert", "Sci-Fi", 1969);
        assert!(repo.update("Dune", replacement.clone()));
        assert_eq!(vec![replacement, second], repo.list().to_vec());
        assert_eq!(Some(&BookEntity::new("Dune", "Someone Else", "Sci-Fi", 2021)), repo.get("Dune"));
    }

    #[test]
    fn test_should_ignore_update_of_missing_title() {
        let mut repo = MemoryBookRepository::new();
        repo.create(dune());
        assert!(!repo.update("1984", nineteen_eighty_four()));
        assert_eq!(vec![dune()], repo.list().to_vec());
    }

    fn arb_book() -> impl Strategy<Value = BookEntity> {
        ("[A-Za-z]{1,6}", "[A-Za-z]{0,6}", "[A-Za-z]{0,6}", 1800..=2100i32)
            .prop_map(|(t, a, g, y)| BookEntity::new(&t, &a, &g, y))
    }

    proptest! {
        #[test]
        fn prop_added_book_is_last(books in prop::collection::vec(arb_book(), 0..20), book in arb_book()) {
            let mut repo = MemoryBookRepository::new();
            for b in books {
                repo.create(b);
            }
            let before = repo.len();
            repo.create(book.clone());
            prop_assert_eq!(before + 1, repo.len());
            prop_assert_eq!(Some(&book), repo.list().last());
        }

        #[test]
        fn prop_delete_keeps_others_in_order(books in prop::collection::vec(arb_book(), 0..20), pick in any::<prop::sample::Index>()) {
            let mut repo = MemoryBookRepository::new();
            for b in books.iter().cloned() {
                repo.create(b);
            }
            let title = if books.is_empty() { "missing".to_string() } else { books[pick.index(books.len())].title.clone() };
            let expected: Vec<BookEntity> = books.iter().filter(|b| b.title != title).cloned().collect();
            let removed = repo.delete(&title);
            prop_assert_eq!(books.len() - expected.len(), removed);
            prop_assert_eq!(expected, repo.list().to_vec());
        }

        #[test]
        fn prop_update_changes_first_match_only(books in prop::collection::vec(arb_book(), 1..20), pick in any::<prop::sample::Index>(), replacement in arb_book()) {
            let mut repo = MemoryBookRepository::new();
            for b in books.iter().cloned() {
                repo.create(b);
            }
            let title = books[pick.index(books.len())].title.clone();
            let first = books.iter().position(|b| b.title == title).unwrap();
            let mut expected = books.clone();
            expected[first] = replacement.clone();
            prop_assert!(repo.update(&title, replacement));
            prop_assert_eq!(expected, repo.list().to_vec());
        }

        #[test]
        fn prop_search_returns_exact_subset(books in prop::collection::vec(arb_book(), 0..20), term in "[a-zA-Z]{1,3}") {
            let mut repo = MemoryBookRepository::new();
            for b in books.iter().cloned() {
                repo.create(b);
            }
            let needle = term.to_lowercase();
            let expected: Vec<&BookEntity> = books.iter()
                .filter(|b| b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle))
                .collect();
            prop_assert_eq!(expected, repo.search(&term));
        }
    }
}
