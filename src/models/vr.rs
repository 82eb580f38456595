//! Request payloads for the visual-recognition service

/// Options for `classify`; all travel as query parameters
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub url: Option<String>,
    pub threshold: Option<f64>,
    pub owners: Option<Vec<String>>,
    pub classifier_ids: Option<Vec<String>>,
    pub accept_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_nothing_set() {
        let options = ClassifyOptions::default();
        assert!(options.url.is_none());
        assert!(options.threshold.is_none());
        assert!(options.owners.is_none());
    }
}
