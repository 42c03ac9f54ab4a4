// tests/support/mocks/mod.rs
pub mod memory;
pub mod time;
pub mod util;

pub use memory::InMemoryBlog;
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug};
