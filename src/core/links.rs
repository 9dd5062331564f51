/// Base URL for map searches by address
pub const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/";

// Characters a URI component keeps literal besides alphanumerics and "-_.~".
const COMPONENT_LITERALS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Build a `tel:` link from a display phone number, unchanged
pub fn phone_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Build a map search URL for a postal address
///
/// The address is encoded as a URI component: `!'()*` stay literal.
pub fn directions_url(address: &str) -> String {
    let encoded = COMPONENT_LITERALS
        .iter()
        .fold(urlencoding::encode(address).into_owned(), |acc, (escaped, literal)| {
            acc.replace(escaped, literal)
        });

    format!("{}{}", MAP_SEARCH_URL, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_link_passes_through() {
        assert_eq!(phone_link("(31) 3333-4567"), "tel:(31) 3333-4567");
        assert_eq!(phone_link(""), "tel:");
    }

    #[test]
    fn test_directions_url_encodes_address() {
        let url = directions_url("Via Expressa, Km 8 - Nova Lima, MG");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/Via%20Expressa%2C%20Km%208%20-%20Nova%20Lima%2C%20MG"
        );
    }

    #[test]
    fn test_directions_url_keeps_component_literals() {
        assert!(directions_url("Rua (A) 1").ends_with("Rua%20(A)%201"));
        assert!(directions_url("Lote 4*'!").ends_with("Lote%204*'!"));
        assert!(directions_url(" Rua A").ends_with("search/%20Rua%20A"));
    }

    #[test]
    fn test_directions_url_escapes_percent() {
        assert!(directions_url("100%28").ends_with("100%2528"));
    }

    #[test]
    fn test_directions_url_encodes_non_ascii() {
        let url = directions_url("Complexo Portuário");
        assert!(url.ends_with("Complexo%20Portu%C3%A1rio"));
    }
}
