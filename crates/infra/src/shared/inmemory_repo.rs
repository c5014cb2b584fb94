use super::lock;
use dayplan_domain::Entity;
use std::sync::Mutex;

// Useful functions for creating inmemory collaborators

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    lock(collection).push(val.clone());
}

/// Replaces the item with the same id. Returns false when there is none.
pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> bool {
    let mut collection = lock(collection);
    match collection.iter().position(|item| item.same_entity(val)) {
        Some(index) => {
            collection[index] = val.clone();
            true
        }
        None => false,
    }
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    lock(collection).clone()
}

pub fn delete<T: Clone + Entity>(val_id: &str, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = lock(collection);
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}
