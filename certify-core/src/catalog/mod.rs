pub mod industry;
pub mod loader;

#[cfg(test)]
mod tests;

pub use industry::*;
pub use loader::*;
