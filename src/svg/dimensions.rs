/// Intrinsic size detection for SVG documents
///
/// Reads `width`/`height` from the first `<svg>` element, falling back to the
/// `viewBox` and finally to 24x24. Never fails: broken markup simply yields
/// the fallback size.

use tracing::debug;

/// Size used when nothing usable can be read from the document
pub const FALLBACK_SIZE: u32 = 24;

/// Pixel size of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: FALLBACK_SIZE,
            height: FALLBACK_SIZE,
        }
    }
}

/// Extract the intrinsic size of an SVG document
pub fn extract(svg_text: &str) -> Dimensions {
    // Exported SVGs often carry a DOCTYPE header
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = match roxmltree::Document::parse_with_options(svg_text, options) {
        Ok(doc) => doc,
        Err(e) => {
            debug!("SVG parse failed, using fallback size: {}", e);
            return Dimensions::default();
        }
    };

    let Some(svg) = doc.descendants().find(|n| n.has_tag_name("svg")) else {
        return Dimensions::default();
    };

    let mut width = non_empty_attribute(svg, "width");
    let mut height = non_empty_attribute(svg, "height");

    if width.is_none() || height.is_none() {
        if let Some(view_box) = svg.attribute("viewBox") {
            let values: Vec<&str> = view_box
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .collect();
            if values.len() >= 4 {
                width = Some(values[2]);
                height = Some(values[3]);
            }
        }
    }

    Dimensions {
        width: to_pixels(width),
        height: to_pixels(height),
    }
}

/// Blank attribute values count as missing
fn non_empty_attribute<'a>(node: roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.trim().is_empty())
}

/// Convert an attribute value ("24", "24.6px", "100%") to whole pixels
fn to_pixels(value: Option<&str>) -> u32 {
    value
        .and_then(parse_leading_number)
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| (v.round() as u32).max(1))
        .unwrap_or(FALLBACK_SIZE)
}

/// Parse the longest numeric prefix of `text`, ignoring trailing units
fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    let mantissa = &text[digits_start..end];
    if mantissa.is_empty() || mantissa == "." {
        return None;
    }

    // Optional exponent, only consumed when it is complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn test_explicit_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="16"></svg>"#;
        assert_eq!(extract(svg), dims(32, 16));
    }

    #[test]
    fn test_explicit_size_is_rounded() {
        let svg = r#"<svg width="23.5" height="10.4"></svg>"#;
        assert_eq!(extract(svg), dims(24, 10));
    }

    #[test]
    fn test_units_are_ignored() {
        let svg = r#"<svg width="48px" height="2.4e1pt"></svg>"#;
        assert_eq!(extract(svg), dims(48, 24));
    }

    #[test]
    fn test_view_box_fallback() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100.6 50.2"><path d="M0 0"/></svg>"#;
        assert_eq!(extract(svg), dims(101, 50));
    }

    #[test]
    fn test_view_box_used_when_only_one_side_missing() {
        let svg = r#"<svg width="10" viewBox="0 0 64 32"></svg>"#;
        assert_eq!(extract(svg), dims(64, 32));
    }

    #[test]
    fn test_blank_size_uses_view_box() {
        let svg = r#"<svg width="" height="  " viewBox="0 0 64 32"></svg>"#;
        assert_eq!(extract(svg), dims(64, 32));
    }

    #[test]
    fn test_doctype_header_is_accepted() {
        let svg = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" width="48px" height="32px" viewBox="0 0 48 32"><rect width="48" height="32"/></svg>"#;
        assert_eq!(extract(svg), dims(48, 32));
    }

    #[test]
    fn test_view_box_with_commas() {
        let svg = r#"<svg viewBox="0,0,  20,40"></svg>"#;
        assert_eq!(extract(svg), dims(20, 40));
    }

    #[test]
    fn test_short_view_box_falls_back() {
        let svg = r#"<svg viewBox="0 0 20"></svg>"#;
        assert_eq!(extract(svg), dims(24, 24));
    }

    #[test]
    fn test_no_size_information() {
        assert_eq!(extract("<svg></svg>"), Dimensions::default());
    }

    #[test]
    fn test_malformed_markup() {
        assert_eq!(extract("<svg width=\"10\""), Dimensions::default());
        assert_eq!(extract(""), Dimensions::default());
        assert_eq!(extract("not xml at all"), Dimensions::default());
    }

    #[test]
    fn test_missing_svg_element() {
        assert_eq!(extract(r#"<html width="5" height="5"/>"#), Dimensions::default());
    }

    #[test]
    fn test_nested_svg_element_is_found() {
        let doc = r#"<root><svg width="12" height="8"/></root>"#;
        assert_eq!(extract(doc), dims(12, 8));
    }

    #[test]
    fn test_unparseable_and_zero_values_fall_back() {
        let svg = r#"<svg width="auto" height="0"></svg>"#;
        assert_eq!(extract(svg), dims(24, 24));
    }

    #[test]
    fn test_tiny_values_stay_positive() {
        let svg = r#"<svg width="0.2" height="0.7"></svg>"#;
        assert_eq!(extract(svg), dims(1, 1));
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("24"), Some(24.0));
        assert_eq!(parse_leading_number(" 12.5px"), Some(12.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("3e"), Some(3.0));
        assert_eq!(parse_leading_number("-4"), Some(-4.0));
        assert_eq!(parse_leading_number("px"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number(""), None);
    }
}
