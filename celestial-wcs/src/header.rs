use std::collections::HashMap;

use crate::error::{WcsError, WcsResult};

/// Read access to FITS-style header keywords.
///
/// Lookups are case-insensitive; `CRPIX1` and `crpix1` are the same keyword.
pub trait KeywordProvider {
    fn get_string(&self, key: &str) -> Option<String>;
    fn get_float(&self, key: &str) -> Option<f64>;
    fn get_int(&self, key: &str) -> Option<i64>;

    fn require_float(&self, key: &str) -> WcsResult<f64> {
        self.get_float(key)
            .ok_or_else(|| WcsError::missing_keyword(key))
    }

    fn require_string(&self, key: &str) -> WcsResult<String> {
        self.get_string(key)
            .ok_or_else(|| WcsError::missing_keyword(key))
    }

    /// A non-negative integer keyword such as `NAXISn`.
    fn require_usize(&self, key: &str) -> WcsResult<usize> {
        let value = self
            .get_int(key)
            .ok_or_else(|| WcsError::missing_keyword(key))?;
        usize::try_from(value)
            .map_err(|_| WcsError::invalid_keyword(key, format!("negative value {}", value)))
    }
}

/// An in-memory header, typed by value kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMap {
    strings: HashMap<String, String>,
    floats: HashMap<String, f64>,
    ints: HashMap<String, i64>,
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

impl KeywordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = normalize_key(&key.into());
        self.remove(&key);
        self.strings.insert(key, value.into());
        self
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        let key = normalize_key(&key.into());
        self.remove(&key);
        self.floats.insert(key, value);
        self
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i64) -> &mut Self {
        let key = normalize_key(&key.into());
        self.remove(&key);
        self.ints.insert(key, value);
        self
    }

    /// Removes a keyword of any kind. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let key = normalize_key(key);
        let s = self.strings.remove(&key).is_some();
        let f = self.floats.remove(&key).is_some();
        let i = self.ints.remove(&key).is_some();
        s || f || i
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let key = normalize_key(key);
        self.strings.contains_key(&key)
            || self.floats.contains_key(&key)
            || self.ints.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.strings.len() + self.floats.len() + self.ints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keyword names, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .strings
            .keys()
            .chain(self.floats.keys())
            .chain(self.ints.keys())
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl KeywordProvider for KeywordMap {
    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(&normalize_key(key)).cloned()
    }

    /// Integer keywords are widened, so `CRPIX1 = 512` reads as a float.
    fn get_float(&self, key: &str) -> Option<f64> {
        let key = normalize_key(key);
        self.floats
            .get(&key)
            .copied()
            .or_else(|| self.ints.get(&key).map(|&i| i as f64))
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.ints.get(&normalize_key(key)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_map_strings() {
        let mut map = KeywordMap::new();
        map.set_string("CTYPE1", "HPLN-TAN");
        assert_eq!(map.get_string("ctype1"), Some("HPLN-TAN".to_string()));
        assert_eq!(map.get_string("CTYPE2"), None);
    }

    #[test]
    fn test_float_reads_widen_ints() {
        let mut map = KeywordMap::new();
        map.set_int("NAXIS1", 1024).set_float("cdelt1", 0.6);
        assert_eq!(map.get_float("naxis1"), Some(1024.0));
        assert_eq!(map.get_float("CDELT1"), Some(0.6));
        assert_eq!(map.get_int("cdelt1"), None);
    }

    #[test]
    fn test_set_replaces_other_kinds() {
        let mut map = KeywordMap::new();
        map.set_int("crpix1", 512);
        map.set_float("CRPIX1", 512.5);
        assert_eq!(map.get_int("crpix1"), None);
        assert_eq!(map.get_float("crpix1"), Some(512.5));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut map = KeywordMap::new();
        map.set_string("date_obs", "2010-09-10T12:00:00");
        assert!(map.contains_key("DATE_OBS"));
        assert!(map.remove("date_obs"));
        assert!(!map.remove("date_obs"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_require_present_and_missing() {
        let mut map = KeywordMap::new();
        map.set_float("crval1", 0.0).set_int("naxis2", 64);
        assert_eq!(map.require_float("crval1").unwrap(), 0.0);
        assert_eq!(map.require_usize("naxis2").unwrap(), 64);

        let err = map.require_string("date-obs").unwrap_err();
        assert!(err.to_string().contains("date-obs"));
    }

    #[test]
    fn test_require_usize_rejects_negative() {
        let mut map = KeywordMap::new();
        map.set_int("naxis1", -3);
        assert!(matches!(
            map.require_usize("naxis1"),
            Err(WcsError::InvalidKeyword { .. })
        ));
    }

    #[test]
    fn test_keys_sorted() {
        let mut map = KeywordMap::new();
        map.set_float("crval2", 0.0)
            .set_string("cunit1", "arcsec")
            .set_int("naxis1", 4);
        assert_eq!(map.keys(), vec!["crval2", "cunit1", "naxis1"]);
    }
}
