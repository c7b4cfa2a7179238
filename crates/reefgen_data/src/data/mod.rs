//! Core data structures shared by the reef generator and its consumers.

pub mod category;
