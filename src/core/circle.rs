use std::f64::consts::PI;

/// Area of a circle with the given radius.
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Renders an area with exactly six decimals. Non-finite areas print as
/// `nan` and `inf`.
pub fn format_area(area: f64) -> String {
    if area.is_nan() {
        return "nan".to_string();
    }
    format!("{area:.6}")
}
