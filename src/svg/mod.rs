/// SVG handling module
///
/// This module handles:
/// - Turning file/folder picks into selected files
/// - Reading SVG files into icon records
/// - Measuring the intrinsic size of SVG documents

pub mod dimensions;
pub mod loader;
