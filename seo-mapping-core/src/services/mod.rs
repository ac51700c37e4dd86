pub mod alt_text;
pub mod classify;
pub mod filename;
pub mod generator;
pub mod pipeline;
pub mod report;
pub mod slug;
pub mod store;
