//! different utility modules used throughout the project
/// tiny module to initialize console/file logging for the calculators
pub mod logger;
/// tiny module to render calculator charts into in-memory base64 PNG images
pub mod plots;
