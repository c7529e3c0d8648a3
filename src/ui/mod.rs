pub mod elide;
pub mod queue_status;
pub mod slot_list;
pub mod toolbar;
pub mod viewport;
