use super::localize;
use crate::api::{DashboardStats, TimetableApi};

pub const LOADING: &str = "Cargando estadísticas...";
pub const LOAD_ERROR: &str = "Error al cargar las estadísticas";

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    stats: Option<DashboardStats>,
    error: Option<String>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load<A: TimetableApi>(&mut self, api: &A) -> bool {
        match api.dashboard_stats().await {
            Ok(stats) => {
                self.stats = Some(stats);
                self.error = None;
                true
            },
            Err(err) => {
                self.error = Some(localize(&err, LOAD_ERROR));
                false
            },
        }
    }
}
