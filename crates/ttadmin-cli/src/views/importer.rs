//! XML import: one file, one flag, one request

use crate::api::{ImportResponse, TimetableApi};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const MISSING_FILE: &str = "Por favor selecciona un archivo XML";
pub const IMPORT_FAILED: &str = "Error al importar el archivo XML";

#[derive(Debug, Clone)]
pub struct ImportView {
    file: Option<PathBuf>,
    clear_existing: bool,
    error: Option<String>,
    result: Option<ImportResponse>,
}

impl ImportView {
    pub fn new(clear_existing: bool) -> Self {
        Self {
            file: None,
            clear_existing,
            error: None,
            result: None,
        }
    }

    /// Choosing a file clears the previous outcome
    pub fn select(&mut self, file: Option<PathBuf>) {
        self.file = file;
        self.error = None;
        self.result = None;
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn clear_existing(&self) -> bool {
        self.clear_existing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&ImportResponse> {
        self.result.as_ref()
    }

    /// Upload the selected file.
    ///
    /// Without a readable file nothing is sent. On success the selection is
    /// cleared; on failure it is kept so the operator can retry.
    pub async fn submit<A: TimetableApi>(&mut self, api: &A) -> bool {
        self.error = None;
        self.result = None;

        let Some(path) = self.file.clone() else {
            self.error = Some(MISSING_FILE.to_string());
            return false;
        };

        let contents = match read_upload(&path).await {
            Ok(contents) => contents,
            Err(err) => {
                debug!("{:#}", err);
                self.error = Some(MISSING_FILE.to_string());
                return false;
            },
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "import.xml".to_string());

        match api.import_xml(file_name, contents, self.clear_existing).await {
            Ok(response) => {
                info!(stats = ?response.stats, "import finished");
                self.result = Some(response);
                self.file = None;
                true
            },
            Err(err) => {
                debug!(error = %err, "import failed");
                self.error = Some(
                    err.server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| IMPORT_FAILED.to_string()),
                );
                false
            },
        }
    }
}

async fn read_upload(path: &Path) -> anyhow::Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("Cannot read import file '{}'", path.display()))
}
