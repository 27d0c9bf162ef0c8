use serde::{Deserialize, Serialize};

pub const ALPHARETTA_URL: &str = "https://leagues.bluesombrero.com/Default.aspx?tabid=1508807&mid=1621009&templateid=0&ctl=viewallfieldstatus";
pub const ALPHARETTA_SOURCE: &str = "Alpharetta Youth Baseball (Blue Sombrero)";

pub const OCEE_PARK_URL: &str = "https://www.oceepark.com/home";
pub const OCEE_PARK_SOURCE: &str = "OceePark.com";

/// Which page layout a source publishes, and therefore which extractor reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    BlueSombrero,
    OceePark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Label written to the `source` key of every park from this site.
    pub name: String,
    pub url: String,
}

impl SourceConfig {
    pub fn new(kind: SourceKind, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            url: url.into(),
        }
    }

    /// The built-in sources, in the order they are scraped and written.
    pub fn defaults() -> Vec<SourceConfig> {
        vec![
            SourceConfig::new(SourceKind::BlueSombrero, ALPHARETTA_SOURCE, ALPHARETTA_URL),
            SourceConfig::new(SourceKind::OceePark, OCEE_PARK_SOURCE, OCEE_PARK_URL),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_alpharetta_first() {
        let sources = SourceConfig::defaults();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].kind, SourceKind::BlueSombrero);
        assert_eq!(sources[0].name, ALPHARETTA_SOURCE);
        assert_eq!(sources[1].kind, SourceKind::OceePark);
        assert_eq!(sources[1].url, OCEE_PARK_URL);
    }

    #[test]
    fn parses_sources_file_format() {
        let json = r#"[
            { "kind": "ocee_park", "name": "Ocee (mirror)", "url": "http://localhost:8080/ocee" }
        ]"#;
        let sources: Vec<SourceConfig> = serde_json::from_str(json).unwrap();
        assert_eq!(
            sources,
            vec![SourceConfig::new(
                SourceKind::OceePark,
                "Ocee (mirror)",
                "http://localhost:8080/ocee"
            )]
        );
    }
}
