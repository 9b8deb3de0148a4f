//! Country records as delivered by the REST Countries provider.
//!
//! Only the fields the viewer displays are modelled; everything else in the
//! provider's payload is ignored during deserialization. The record is
//! consumed read-only.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Names of a country. Only the common (display) name is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// Flag image reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryFlags {
    /// URL of the PNG rendition of the flag
    pub png: String,
    /// Accessibility text. Not every country carries one.
    #[serde(default)]
    pub alt: Option<String>,
}

/// One country as returned by `GET /v3.1/all`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    pub flags: CountryFlags,
    /// Zero or more capitals. Absent for some territories.
    #[serde(default, rename = "capital")]
    pub capitals: Option<Vec<String>>,
    pub population: u64,
    pub region: String,
    /// Language names in the order the provider lists them. The provider's
    /// language codes are not kept.
    #[serde(default, deserialize_with = "deserialize_languages")]
    pub languages: Option<Vec<String>>,
}

impl CountryRecord {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn flag_image_url(&self) -> &str {
        &self.flags.png
    }

    pub fn flag_alt_text(&self) -> Option<&str> {
        self.flags.alt.as_deref()
    }

    /// First listed capital, if any
    pub fn first_capital(&self) -> Option<&str> {
        self.capitals.as_ref()?.first().map(String::as_str)
    }

    /// Language names in provider order. Empty when no languages are known.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .flatten()
            .map(String::as_str)
    }
}

/// The provider sends languages as a JSON object (`{"eng": "English"}`). A map
/// type would lose the provider's ordering, so the names are collected into a
/// vector as they are visited.
fn deserialize_languages<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedLanguages(Vec<String>);

    impl<'de> Deserialize<'de> for OrderedLanguages {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(LanguageVisitor)
        }
    }

    struct LanguageVisitor;

    impl<'de> Visitor<'de> for LanguageVisitor {
        type Value = OrderedLanguages;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of language code to language name")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((IgnoredAny, name)) = map.next_entry::<IgnoredAny, String>()? {
                out.push(name);
            }
            Ok(OrderedLanguages(out))
        }
    }

    let langs = Option::<OrderedLanguages>::deserialize(deserializer)?;
    Ok(langs.map(|l| l.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn testland() -> serde_json::Value {
        json!({
            "name": { "common": "Testland", "official": "Republic of Testland" },
            "flags": { "png": "x.png", "svg": "x.svg", "alt": "flag" },
            "capital": ["Testville"],
            "population": 1000,
            "region": "TestRegion",
            "languages": { "en": "English" },
            "area": 12.5
        })
    }

    #[test]
    fn parses_provider_record_and_ignores_unknown_fields() {
        let rec: CountryRecord = serde_json::from_value(testland()).unwrap();

        assert_eq!(rec.common_name(), "Testland");
        assert_eq!(rec.flag_image_url(), "x.png");
        assert_eq!(rec.flag_alt_text(), Some("flag"));
        assert_eq!(rec.first_capital(), Some("Testville"));
        assert_eq!(rec.population, 1000);
        assert_eq!(rec.region, "TestRegion");
        assert_eq!(rec.language_names().collect::<Vec<_>>(), vec!["English"]);
    }

    #[test]
    fn optional_fields_may_be_missing_or_null() {
        let rec: CountryRecord = serde_json::from_value(json!({
            "name": { "common": "Antarctica" },
            "flags": { "png": "aq.png" },
            "population": 1000,
            "region": "Antarctic",
            "languages": null
        }))
        .unwrap();

        assert!(rec.capitals.is_none());
        assert!(rec.languages.is_none());
        assert!(rec.flag_alt_text().is_none());
        assert!(rec.first_capital().is_none());
        assert_eq!(rec.language_names().count(), 0);
    }

    #[test]
    fn empty_capital_list_has_no_first_capital() {
        let mut value = testland();
        value["capital"] = json!([]);
        let rec: CountryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(rec.capitals.as_deref(), Some(&[][..]));
        assert!(rec.first_capital().is_none());
    }

    #[test]
    fn languages_keep_provider_order() {
        // Parse from text: json! would hand us a sorted map.
        let raw = r#"{
            "name": { "common": "Switzerland" },
            "flags": { "png": "ch.png" },
            "population": 8654622,
            "region": "Europe",
            "languages": { "roh": "Romansh", "fra": "French", "gsw": "Swiss German", "ita": "Italian" }
        }"#;
        let rec: CountryRecord = serde_json::from_str(raw).unwrap();

        let names: Vec<_> = rec.language_names().collect();
        assert_eq!(names, vec!["Romansh", "French", "Swiss German", "Italian"]);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let mut value = testland();
        value.as_object_mut().unwrap().remove("population");
        assert!(serde_json::from_value::<CountryRecord>(value).is_err());
    }
}
