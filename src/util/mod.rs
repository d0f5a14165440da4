/// GLIDE Project
/// `File` util/mod.rs
/// `Description` Utility module
/// `Author` TioT2
/// `Last changed` 18.10.2026

pub mod unordered_pair;

// file mod.rs
