pub trait Entity {
    fn id(&self) -> &str;
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
