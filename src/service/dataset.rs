//! Historical dataset ingestion
//!
//! Fetches the Pima Indians Diabetes CSV once at start-up and keeps the parsed
//! rows in memory for the dashboard. Ingestion failures never reach the user:
//! they are logged and the dataset stays empty.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::model::BiometricRecord;

/// Number of positional columns in a data line
const FIELD_COUNT: usize = 9;

const FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected status {0} fetching dataset")]
    Status(reqwest::StatusCode),

    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row {row}: {message}")]
    Malformed { row: usize, message: String },
}

/// Parse the CSV text into records
///
/// The first line is the header and is discarded. Blank lines are skipped.
/// Every remaining line must start with nine comma-separated numeric fields
/// in dataset column order; trailing extra fields are ignored. A shorter or
/// non-numeric line fails the whole document.
pub fn parse_dataset(text: &str) -> Result<Vec<BiometricRecord>, DatasetError> {
    let data_lines: Vec<&str> = text
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let body = data_lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::with_capacity(data_lines.len());
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|e| DatasetError::Malformed {
            row,
            message: e.to_string(),
        })?;

        if raw.len() < FIELD_COUNT {
            return Err(DatasetError::Malformed {
                row,
                message: format!("expected {} fields, found {}", FIELD_COUNT, raw.len()),
            });
        }

        let fields: csv::StringRecord = raw.iter().take(FIELD_COUNT).collect();
        let record: BiometricRecord =
            fields.deserialize(None).map_err(|e| DatasetError::Malformed {
                row,
                message: e.to_string(),
            })?;
        records.push(record);
    }

    Ok(records)
}

/// Where the CSV comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    Remote(Url),
    File(PathBuf),
}

impl DatasetSource {
    /// Interpret a configured location as either an HTTP(S) URL or a file path
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DatasetSource::Remote(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(DatasetSource::File)
                .unwrap_or_else(|_| DatasetSource::File(PathBuf::from(location))),
            _ => DatasetSource::File(PathBuf::from(location)),
        }
    }
}

/// Snapshot of the loaded dataset
#[derive(Debug, Clone, Default)]
pub struct DatasetStatus {
    /// Whether the one-time load has completed (successfully or not)
    pub finished: bool,
    pub record_count: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct StoreInner {
    records: Arc<Vec<BiometricRecord>>,
    status: DatasetStatus,
}

/// In-memory dataset shared between the loader and the request handlers
///
/// Written once by [`DatasetLoader::load_into`], read by every dashboard render.
#[derive(Clone, Default)]
pub struct DatasetStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current records (empty until the loader succeeds)
    pub async fn records(&self) -> Arc<Vec<BiometricRecord>> {
        Arc::clone(&self.inner.read().await.records)
    }

    pub async fn status(&self) -> DatasetStatus {
        self.inner.read().await.status.clone()
    }

    /// Publish a freshly parsed dataset
    pub async fn replace(&self, records: Vec<BiometricRecord>) {
        let mut inner = self.inner.write().await;
        inner.status = DatasetStatus {
            finished: true,
            record_count: records.len(),
            loaded_at: Some(Utc::now()),
        };
        inner.records = Arc::new(records);
    }

    /// Record that loading ended without data
    pub async fn mark_failed(&self) {
        let mut inner = self.inner.write().await;
        inner.status.finished = true;
    }
}

/// Fetches and parses the dataset
#[derive(Clone)]
pub struct DatasetLoader {
    client: Client,
    source: DatasetSource,
}

impl DatasetLoader {
    pub fn new(location: &str) -> Self {
        let client = Client::builder()
            .user_agent("diabetes-risk-predictor/0.1")
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            source: DatasetSource::parse(location),
        }
    }

    /// Read and parse the dataset from its source
    pub async fn fetch(&self) -> Result<Vec<BiometricRecord>, DatasetError> {
        let text = match &self.source {
            DatasetSource::Remote(url) => {
                tracing::debug!(url = %url, "Fetching dataset");
                let response = self.client.get(url.clone()).send().await?;
                if !response.status().is_success() {
                    return Err(DatasetError::Status(response.status()));
                }
                response.text().await?
            }
            DatasetSource::File(path) => {
                tracing::debug!(path = %path.display(), "Reading dataset file");
                tokio::fs::read_to_string(path).await?
            }
        };

        parse_dataset(&text)
    }

    /// Load the dataset into `store`, degrading to an empty dataset on failure
    pub async fn load_into(&self, store: &DatasetStore) {
        let start_time = std::time::Instant::now();

        match self.fetch().await {
            Ok(records) => {
                tracing::info!(
                    source = ?self.source,
                    records = records.len(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    "Dataset loaded"
                );
                store.replace(records).await;
            }
            Err(e) => {
                tracing::error!(
                    source = ?self.source,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Failed to load dataset, continuing with an empty dataset"
                );
                store.mark_failed().await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::service::stub_server::StubServer;

    const HEADER: &str = "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome";

    #[test]
    fn test_parse_positional_fields() {
        let text = format!("{}\n1,85,66,29,0,26.6,0.351,31,0\n", HEADER);
        let records = parse_dataset(&text).unwrap();

        assert_eq!(
            records,
            vec![BiometricRecord {
                pregnancies: 1,
                glucose: 85,
                blood_pressure: 66,
                skin_thickness: 29,
                insulin: 0,
                bmi: 26.6,
                diabetes_pedigree_function: 0.351,
                age: 31,
                outcome: 0,
            }]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let compact = format!(
            "{}\n6,148,72,35,0,33.6,0.627,50,1\n1,85,66,29,0,26.6,0.351,31,0",
            HEADER
        );
        let padded = format!(
            "{}\n\n6,148,72,35,0,33.6,0.627,50,1\n\n   \n\n1,85,66,29,0,26.6,0.351,31,0\n\n\n",
            HEADER
        );

        let compact = parse_dataset(&compact).unwrap();
        let padded = parse_dataset(&padded).unwrap();

        assert_eq!(compact.len(), 2);
        assert_eq!(compact, padded);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = format!("{}\r\n8,183,64,0,0,23.3,0.672,32,1\r\n", HEADER);
        let records = parse_dataset(&text).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].glucose, 183);
        assert!(records[0].is_diabetic());
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        assert!(parse_dataset(HEADER).unwrap().is_empty());
        assert!(parse_dataset("").unwrap().is_empty());
    }

    #[test]
    fn test_short_row_is_rejected() {
        let text = format!("{}\n1,85,66,29,0,26.6,0.351,31,0\n1,85,66\n", HEADER);
        let err = parse_dataset(&text).unwrap_err();

        assert!(matches!(err, DatasetError::Malformed { row: 2, .. }));
    }

    #[test]
    fn test_trailing_extra_fields_are_ignored() {
        let text = format!(
            "{}\n1,85,66,29,0,26.6,0.351,31,0,\n6,148,72,35,0,33.6,0.627,50,1,extra\n",
            HEADER
        );
        let records = parse_dataset(&text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, 31);
        assert_eq!(records[0].outcome, 0);
        assert_eq!(records[1].glucose, 148);
        assert!(records[1].is_diabetic());
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let text = format!("{}\n1,high,66,29,0,26.6,0.351,31,0\n", HEADER);
        assert!(matches!(
            parse_dataset(&text),
            Err(DatasetError::Malformed { row: 1, .. })
        ));
    }

    #[test]
    fn test_source_detection() {
        assert!(matches!(
            DatasetSource::parse("https://example.com/diabetes.csv"),
            DatasetSource::Remote(_)
        ));
        assert_eq!(
            DatasetSource::parse("data/diabetes.csv"),
            DatasetSource::File(PathBuf::from("data/diabetes.csv"))
        );
        assert_eq!(
            DatasetSource::parse("file:///tmp/diabetes.csv"),
            DatasetSource::File(PathBuf::from("/tmp/diabetes.csv"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file_into_store() {
        let path = temp_csv_path();
        std::fs::write(
            &path,
            format!("{}\n6,148,72,35,0,33.6,0.627,50,1\n1,85,66,29,0,26.6,0.351,31,0\n", HEADER),
        )
        .unwrap();

        let store = DatasetStore::new();
        DatasetLoader::new(path.to_str().unwrap())
            .load_into(&store)
            .await;
        std::fs::remove_file(&path).ok();

        let status = store.status().await;
        assert!(status.finished);
        assert_eq!(status.record_count, 2);
        assert!(status.loaded_at.is_some());
        assert_eq!(store.records().await.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_leaves_dataset_empty() {
        let path = temp_csv_path();

        let store = DatasetStore::new();
        DatasetLoader::new(path.to_str().unwrap())
            .load_into(&store)
            .await;

        let status = store.status().await;
        assert!(status.finished);
        assert_eq!(status.record_count, 0);
        assert!(status.loaded_at.is_none());
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_leaves_dataset_empty() {
        let path = temp_csv_path();
        std::fs::write(&path, format!("{}\n1,85,66,29,0,26.6,0.351,31,0\nnot,a,row\n", HEADER))
            .unwrap();

        let store = DatasetStore::new();
        DatasetLoader::new(path.to_str().unwrap())
            .load_into(&store)
            .await;
        std::fs::remove_file(&path).ok();

        assert!(store.status().await.finished);
        assert!(store.records().await.is_empty());
    }

    #[actix_web::test]
    async fn test_load_from_remote_source() {
        let server = StubServer::start(
            200,
            "text/csv",
            &format!(
                "{}\n1,85,66,29,0,26.6,0.351,31,0,\n6,148,72,35,0,33.6,0.627,50,1\n",
                HEADER
            ),
        )
        .await;
        let loader = DatasetLoader::new(&server.url("/data/diabetes.csv"));
        assert!(matches!(loader.source, DatasetSource::Remote(_)));

        let store = DatasetStore::new();
        loader.load_into(&store).await;

        let status = store.status().await;
        assert!(status.finished);
        assert_eq!(status.record_count, 2);
        assert_eq!(store.records().await[1].glucose, 148);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/data/diabetes.csv");
        server.stop().await;
    }

    #[actix_web::test]
    async fn test_remote_not_found_leaves_dataset_empty() {
        let server = StubServer::start(404, "text/plain", "404: Not Found").await;
        let loader = DatasetLoader::new(&server.url("/missing.csv"));

        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(err, DatasetError::Status(status) if status == StatusCode::NOT_FOUND));

        let store = DatasetStore::new();
        loader.load_into(&store).await;
        assert!(store.status().await.finished);
        assert!(store.records().await.is_empty());
        server.stop().await;
    }

    #[actix_web::test]
    async fn test_remote_server_error_leaves_dataset_empty() {
        let server = StubServer::start(500, "text/plain", "boom").await;
        let loader = DatasetLoader::new(&server.url("/diabetes.csv"));

        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));

        let store = DatasetStore::new();
        loader.load_into(&store).await;
        let status = store.status().await;
        assert!(status.finished);
        assert_eq!(status.record_count, 0);
        server.stop().await;
    }

    fn temp_csv_path() -> PathBuf {
        std::env::temp_dir().join(format!("diabetes-{}.csv", uuid::Uuid::new_v4()))
    }
}
