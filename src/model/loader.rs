use super::{PatientRecord, VisitRecord};
use serde::de::DeserializeOwned;

pub async fn load_patients(url: String) -> Result<Vec<PatientRecord>, String> {
    fetch_csv(url, "patients").await
}

pub async fn load_visits(url: String) -> Result<Vec<VisitRecord>, String> {
    fetch_csv(url, "visits").await
}

async fn fetch_csv<T: DeserializeOwned>(url: String, label: &'static str) -> Result<Vec<T>, String> {
    log::info!("Loading {label} CSV from {url}");
    let response = reqwest::get(&url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| {
            let message = format!("{label}: failed to fetch CSV ({err})");
            log::error!("{message}");
            message
        })?;

    let body = response.text().await.map_err(|err| {
        let message = format!("{label}: failed to read CSV body ({err})");
        log::error!("{message}");
        message
    })?;

    parse_csv(&body).map_err(|err| {
        let message = format!("{label}: failed to parse CSV ({err})");
        log::error!("{message}");
        message
    })
}

/// Parses header-plus-rows CSV text into records. Cell whitespace is
/// trimmed; blank lines are skipped by the reader.
pub fn parse_csv<T: DeserializeOwned>(input: &str) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes())
        .into_deserialize()
        .collect()
}
