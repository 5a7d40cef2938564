//! Blog repository implementations.

mod memory;

pub use memory::InMemoryBlogRepository;

#[cfg(test)]
mod tests;
