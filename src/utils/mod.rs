// Utility functions

pub mod clipboard;
