pub mod page;
pub mod project;
pub mod task;
