//! Collection view: fetch, show, and for editable resources create, update
//! and delete with a re-fetch after every successful write

use super::localize;
use crate::api::{Editable, Resource, TimetableApi};
use crate::prompt::Confirm;
use crate::error::Result;
use tracing::info;

/// Outcome of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator said no; nothing was sent
    Declined,
    Deleted,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ListView<R> {
    rows: Vec<R>,
    error: Option<String>,
    notice: Option<String>,
}

impl<R> Default for ListView<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            error: None,
            notice: None,
        }
    }
}

impl<R: Resource> ListView<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Confirmation of the last successful write
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Replace the rows with a fresh fetch. On failure the previous rows stay.
    pub async fn load<A: TimetableApi>(&mut self, api: &A) -> bool {
        match api.list::<R>().await {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                true
            },
            Err(err) => {
                self.error = Some(localize(&err, R::LABELS.load_error));
                false
            },
        }
    }
}

impl<R: Editable> ListView<R> {
    pub async fn create<A: TimetableApi>(&mut self, api: &A, form: &R::Form) -> bool {
        self.notice = None;
        match api.create::<R>(form).await {
            Ok(created) => {
                info!(resource = R::PATH, id = created.id(), "created");
                self.notice = Some(R::MUTATION_LABELS.created.to_string());
                self.load(api).await
            },
            Err(err) => {
                self.error = Some(localize(&err, R::MUTATION_LABELS.save_error));
                false
            },
        }
    }

    pub async fn update<A: TimetableApi>(&mut self, api: &A, id: i64, form: &R::Form) -> bool {
        self.notice = None;
        match api.update::<R>(id, form).await {
            Ok(_) => {
                info!(resource = R::PATH, id, "updated");
                self.notice = Some(R::MUTATION_LABELS.updated.to_string());
                self.load(api).await
            },
            Err(err) => {
                self.error = Some(localize(&err, R::MUTATION_LABELS.save_error));
                false
            },
        }
    }

    /// Ask first; only an explicit yes sends the request
    pub async fn delete<A, C>(&mut self, api: &A, id: i64, confirm: &mut C) -> Result<DeleteOutcome>
    where
        A: TimetableApi,
        C: Confirm,
    {
        self.notice = None;
        if !confirm.confirm(R::MUTATION_LABELS.confirm_delete)? {
            return Ok(DeleteOutcome::Declined);
        }

        match api.delete::<R>(id).await {
            Ok(()) => {
                info!(resource = R::PATH, id, "deleted");
                self.notice = Some(R::MUTATION_LABELS.deleted.to_string());
                self.load(api).await;
                Ok(DeleteOutcome::Deleted)
            },
            Err(err) => {
                self.error = Some(localize(&err, R::MUTATION_LABELS.delete_error));
                Ok(DeleteOutcome::Failed)
            },
        }
    }
}
