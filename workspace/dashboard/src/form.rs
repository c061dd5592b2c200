use common::{FeatureCatalog, FeatureVector};

/// Parse raw input text the way the form stores it.
///
/// Anything that is not a finite number (empty text, garbage, `NaN`,
/// `inf`) is stored as 0.
pub fn parse_input(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Current values of the manual prediction form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    catalog: FeatureCatalog,
    values: FeatureVector,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FeatureCatalog::builtin())
    }
}

impl FormState {
    pub fn new(catalog: FeatureCatalog) -> Self {
        let values = catalog.defaults();
        Self { catalog, values }
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn values(&self) -> &FeatureVector {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name)
    }

    /// Store one field from raw input text, leaving every other field unchanged.
    ///
    /// Returns `false` for names outside the catalog, which are ignored.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> bool {
        let value = parse_input(raw);
        let updated = self.values.set(name, value);
        if !updated {
            log::warn!("Ignoring input for unknown feature `{}`", name);
        }
        updated
    }

    /// Restore every field to its catalog default.
    pub fn reset(&mut self) {
        self.values = self.catalog.defaults();
    }

    /// Switch to another field list; values start over from its defaults.
    pub fn replace_catalog(&mut self, catalog: FeatureCatalog) {
        log::debug!("Replacing form catalog with {} fields", catalog.len());
        self.catalog = catalog;
        self.reset();
    }
}
