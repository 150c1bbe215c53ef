/// Columns every listing must carry with a non-empty value to survive loading.
pub const REQUIRED_FIELDS: [&str; 4] = ["listing_id", "date", "available", "price"];

pub const PRICE_FIELD: &str = "price";
pub const AVAILABLE_FIELD: &str = "available";

/// One validated row of the listings file.
///
/// Fields keep the header order of the source file so the table renders
/// columns in the order the user sees them in the CSV.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    fields: Vec<(String, String)>,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut listing = Self::new();
        for (key, value) in pairs {
            listing.insert(key, value);
        }
        listing
    }

    /// Sets a field, replacing the value in place when the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn listing_id(&self) -> Option<&str> {
        self.get("listing_id")
    }

    pub fn raw_price(&self) -> Option<&str> {
        self.get(PRICE_FIELD)
    }

    /// True when every required field is present and non-empty.
    pub fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS
            .iter()
            .all(|name| self.get(name).is_some_and(|v| !v.is_empty()))
    }
}

/// A listing annotated with the numeric price the ranking was computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedListing {
    pub listing: Listing,
    pub price: f64,
}

impl RankedListing {
    pub fn new(listing: Listing, price: f64) -> Self {
        Self { listing, price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Listing {
        Listing::from_pairs([
            ("listing_id", "42"),
            ("date", "2024-01-01"),
            ("available", "t"),
            ("price", "$100"),
        ])
    }

    #[test]
    fn keeps_insertion_order() {
        let listing = complete();
        let names: Vec<_> = listing.field_names().collect();
        assert_eq!(names, vec!["listing_id", "date", "available", "price"]);
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut listing = complete();
        listing.insert("price", "$200");
        assert_eq!(listing.raw_price(), Some("$200"));
        assert_eq!(listing.fields().len(), 4);
    }

    #[test]
    fn complete_listing_passes_validation() {
        assert!(complete().has_required_fields());
    }

    #[test]
    fn missing_field_fails_validation() {
        let listing = Listing::from_pairs([
            ("listing_id", "42"),
            ("date", "2024-01-01"),
            ("available", "t"),
        ]);
        assert!(!listing.has_required_fields());
    }

    #[test]
    fn empty_field_fails_validation() {
        let mut listing = complete();
        listing.insert("date", "");
        assert!(!listing.has_required_fields());
    }
}
