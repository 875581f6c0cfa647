// Repository abstracts an ordered, in-memory collection of entities addressed by
// a non-unique key. Entities keep insertion order and no operation fails.
pub trait Repository<Entity> {
    // append an entity
    fn create(&mut self, entity: Entity);

    // overwrite the first entity stored under key, true if one matched
    fn update(&mut self, key: &str, entity: Entity) -> bool;

    // first entity stored under key
    fn get(&self, key: &str) -> Option<&Entity>;

    // remove every entity stored under key and return how many went
    fn delete(&mut self, key: &str) -> usize;

    // all entities in current order
    fn list(&self) -> &[Entity];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
