use crate::error::DetectError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8877";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
const DETECT_PATH: &str = "detect";

/// Where the detection service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectConfig {
    base_url: Url,
    pub timeout: Duration,
}

impl DetectConfig {
    pub fn from_base_url(base_url: &str) -> Result<Self, DetectError> {
        let mut url = Url::parse(base_url.trim())?;
        if url.cannot_be_a_base() {
            return Err(DetectError::Config(format!("{} cannot be a base url", base_url)));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Picks up a build-time override, keeping the default when it is absent
    /// or unusable.
    pub fn resolve(override_url: Option<&str>) -> Self {
        match override_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::from_base_url(url).unwrap_or_else(|e| {
                log::warn!("Ignoring detection endpoint override {:?}: {}", url, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn detect_url(&self) -> Result<Url, DetectError> {
        Ok(self.base_url.join(DETECT_PATH)?)
    }
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_BASE_URL).expect("default detection endpoint is a valid url")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let config = DetectConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.detect_url().unwrap().as_str(),
            "http://localhost:8877/detect"
        );
    }

    #[test]
    fn test_path_prefix_is_kept() {
        for base in ["https://api.example.com/v1", "https://api.example.com/v1/"] {
            let config = DetectConfig::from_base_url(base).unwrap();
            assert_eq!(
                config.detect_url().unwrap().as_str(),
                "https://api.example.com/v1/detect"
            );
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            DetectConfig::from_base_url("localhost without scheme"),
            Err(DetectError::Config(_))
        ));
        assert!(matches!(
            DetectConfig::from_base_url("mailto:someone@example.com"),
            Err(DetectError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(DetectConfig::resolve(None), DetectConfig::default());
        assert_eq!(DetectConfig::resolve(Some("  ")), DetectConfig::default());
        assert_eq!(DetectConfig::resolve(Some("::::")), DetectConfig::default());

        let config = DetectConfig::resolve(Some("https://detector.onrender.com"));
        assert_eq!(
            config.detect_url().unwrap().as_str(),
            "https://detector.onrender.com/detect"
        );
    }

    #[test]
    fn test_with_timeout() {
        let config = DetectConfig::default().with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
