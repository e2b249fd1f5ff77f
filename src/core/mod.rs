//! Syllable reordering engine

pub mod category;
pub mod converter;
pub mod driver;
pub mod normalize;
pub mod rewrite;
pub mod serializer;
pub mod syllable;
