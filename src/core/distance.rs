use std::cmp::Ordering;
use crate::models::RecyclingPoint;

/// Parse the leading numeric portion of a distance display string
///
/// "12.5 km" -> 12.5, "234 km" -> 234.0, "1e3 km" -> 1000.0. Returns `None`
/// when the string does not start with a number (after leading whitespace).
///
/// # Examples
/// ```
/// use recycle_match::core::distance::parse_distance_km;
///
/// assert_eq!(parse_distance_km("8 km"), Some(8.0));
/// assert_eq!(parse_distance_km("n/a"), None);
/// ```
pub fn parse_distance_km(display: &str) -> Option<f64> {
    let trimmed = display.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits = bytes[exp_end..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp_end + digits;
        }
    }

    trimmed[..end].parse().ok()
}

/// Order points by rating (descending), then distance (ascending)
///
/// Points without a parsable distance go after those with one.
pub fn compare_points(a: &RecyclingPoint, b: &RecyclingPoint) -> Ordering {
    b.rating
        .partial_cmp(&a.rating)
        .unwrap_or(Ordering::Equal)
        .then_with(|| compare_distance(a.distance_km(), b.distance_km()))
}

#[inline]
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, rating: f64, distance: &str) -> RecyclingPoint {
        RecyclingPoint {
            id: id.to_string(),
            name: format!("Point {}", id),
            address: "Rua A".to_string(),
            distance: distance.to_string(),
            rating,
            accepted_materials: vec!["pneus".to_string()],
            price: String::new(),
            phone: String::new(),
            hours: String::new(),
            coordinates: None,
            certifications: vec![],
            capacity: String::new(),
        }
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance_km("12.5 km"), Some(12.5));
        assert_eq!(parse_distance_km("234 km"), Some(234.0));
        assert_eq!(parse_distance_km("  8km"), Some(8.0));
        assert_eq!(parse_distance_km(".5 km"), Some(0.5));
        assert_eq!(parse_distance_km("1.2.3 km"), Some(1.2));
    }

    #[test]
    fn test_parse_distance_exponent() {
        assert_eq!(parse_distance_km("1e3 km"), Some(1000.0));
        assert_eq!(parse_distance_km("2.5E-1 km"), Some(0.25));
        assert_eq!(parse_distance_km("4e km"), Some(4.0));
        assert_eq!(parse_distance_km("4e+ km"), Some(4.0));
    }

    #[test]
    fn test_parse_distance_without_number() {
        assert_eq!(parse_distance_km("km"), None);
        assert_eq!(parse_distance_km(""), None);
        assert_eq!(parse_distance_km("-"), None);
        assert_eq!(parse_distance_km("."), None);
    }

    #[test]
    fn test_compare_by_rating_first() {
        let high = point("1", 4.9, "200 km");
        let low = point("2", 4.5, "1 km");

        assert_eq!(compare_points(&high, &low), Ordering::Less);
        assert_eq!(compare_points(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_compare_ties_by_distance() {
        let far = point("1", 4.9, "12.5 km");
        let near = point("2", 4.9, "8 km");

        assert_eq!(compare_points(&near, &far), Ordering::Less);
    }

    #[test]
    fn test_unparsable_distance_sorts_last() {
        let known = point("1", 4.7, "500 km");
        let unknown = point("2", 4.7, "sob consulta");

        assert_eq!(compare_points(&known, &unknown), Ordering::Less);
        assert_eq!(compare_points(&unknown, &unknown.clone()), Ordering::Equal);
    }
}
