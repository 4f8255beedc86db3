use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::SinkError;
use crate::figure::Figure;

/// Destination of finished charts.
pub trait ChartSink: Send + Sync {
    /// Publish `figure` under `name`, returning where it went.
    fn publish(&self, name: &str, title: &str, figure: &Figure) -> Result<String, SinkError>;
}

/// Writes every chart as `<dir>/<name>.html`.
#[derive(Debug, Clone)]
pub struct HtmlDirectorySink {
    dir: PathBuf,
}

impl HtmlDirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChartSink for HtmlDirectorySink {
    fn publish(&self, name: &str, title: &str, figure: &Figure) -> Result<String, SinkError> {
        let html = figure.to_html(title).map_err(|source| SinkError::Serialize {
            name: name.to_string(),
            source,
        })?;

        let io_error = |source| SinkError::Io {
            name: name.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_error)?;
        let path = self.dir.join(format!("{}.html", name));
        debug!("Writing chart {} to {}", name, path.display());
        fs::write(&path, html).map_err(io_error)?;

        info!("Chart {} written to {}", name, path.display());
        Ok(path.display().to_string())
    }
}

/// Keeps published figures in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    published: Mutex<Vec<(String, Figure)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(String, Figure)> {
        self.published
            .lock()
            .map(|published| published.clone())
            .unwrap_or_default()
    }

    pub fn names(&self) -> Vec<String> {
        self.published().into_iter().map(|(name, _)| name).collect()
    }
}

impl ChartSink for MemorySink {
    fn publish(&self, name: &str, _title: &str, figure: &Figure) -> Result<String, SinkError> {
        if let Ok(mut published) = self.published.lock() {
            published.push((name.to_string(), figure.clone()));
        }
        Ok(format!("memory:{}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_html_sink_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = HtmlDirectorySink::new(dir.path().join("charts"));
        let figure = Figure::new(vec![json!({"y": [1, 2]})], json!({}));

        let location = sink.publish("baseline", "Baseline", &figure).unwrap();

        let path = dir.path().join("charts").join("baseline.html");
        assert_eq!(location, path.display().to_string());
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("<title>Baseline</title>"));
        assert!(html.contains(r#"[{"y":[1,2]}]"#));
    }

    #[test]
    fn test_html_sink_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = dir.path().join("charts");
        fs::write(&blocker, "not a directory").unwrap();
        let sink = HtmlDirectorySink::new(&blocker);

        let err = sink
            .publish("chronic", "Chronic", &Figure::new(vec![], json!({})))
            .unwrap_err();
        assert!(matches!(err, SinkError::Io { ref name, .. } if name == "chronic"));
    }
}
