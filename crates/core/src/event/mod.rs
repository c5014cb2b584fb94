pub mod create_event;
pub mod delete_event;
pub mod load_events;
pub mod update_event;
