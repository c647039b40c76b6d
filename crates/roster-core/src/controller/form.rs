use std::sync::Arc;

use crate::{
    validation::{self, Field, FieldErrors, RecordForm},
    Record, RecordStore, StoreError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormMode {
    Create,
    Edit(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Submitted {
    Created(Record),
    Updated(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form has invalid fields")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns a single record's editable state from first render to submit.
///
/// A form opened with a route id edits that record; without one it drafts a
/// new record. Nothing is retried: a failed fetch leaves the form blank and a
/// failed submit leaves the form as the user typed it.
pub struct FormController {
    store: Arc<dyn RecordStore>,

    form: RecordForm,
    field_errors: FieldErrors,
    mode: FormMode,
}

impl FormController {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            form: RecordForm::default(),
            field_errors: FieldErrors::default(),
            mode: FormMode::Create,
        }
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// `Err(StoreError::NotFound)` means there is nothing to edit and the
    /// caller should navigate away.
    #[tracing::instrument(name = "controller::form::initialize", skip(self))]
    pub async fn initialize(&mut self, route_id: Option<&str>) -> Result<(), StoreError> {
        self.form = RecordForm::default();
        self.field_errors = FieldErrors::default();

        let id = match route_id {
            Some(id) => id,
            None => {
                self.mode = FormMode::Create;
                return Ok(());
            }
        };

        self.mode = FormMode::Edit(id.to_string());

        match self.store.read(id).await {
            Ok(record) => {
                self.form = record.into();
                Ok(())
            }
            Err(err @ StoreError::NotFound { .. }) => {
                tracing::warn!("record with id {id} not found");
                Err(err)
            }
            Err(err) => {
                tracing::error!("an error has occurred fetching record {id}: {err}");
                Err(err)
            }
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.field_errors.clear(field);
        self.form.set(field, value.into());
    }

    pub fn validate(&mut self) -> bool {
        self.field_errors = match validation::validate(&self.form) {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors,
        };

        self.field_errors.is_empty()
    }

    #[tracing::instrument(name = "controller::form::submit", skip(self))]
    pub async fn submit(&mut self) -> Result<Submitted, SubmitError> {
        let new_record = match validation::validate(&self.form) {
            Ok(new_record) => {
                self.field_errors = FieldErrors::default();
                new_record
            }
            Err(errors) => {
                self.field_errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };

        let result = match &self.mode {
            FormMode::Create => self.store.create(new_record).await.map(Submitted::Created),
            FormMode::Edit(id) => self
                .store
                .update(id, new_record)
                .await
                .map(|_| Submitted::Updated(id.clone())),
        };

        match result {
            Ok(submitted) => {
                self.form = RecordForm::default();
                Ok(submitted)
            }
            Err(err) => {
                tracing::error!("a problem occurred adding or updating a record: {err}");
                Err(err.into())
            }
        }
    }
}
