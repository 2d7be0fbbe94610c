pub mod sort;
pub mod time;
