//! New-book form controller

use crate::board::BookStore;
use crate::error::FormError;
use crate::types::{BookId, BookRecord, Status};
use serde::{Deserialize, Serialize};

/// Input fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Author,
    Status,
}

/// Current contents of the add-book form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub status: Status,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with the given values
    pub fn filled(title: impl Into<String>, author: impl Into<String>, status: Status) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            status,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Handle a change event from one of the inputs.
    ///
    /// An unrecognised status value leaves the selection as it was.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Title => self.set_title(value),
            FormField::Author => self.set_author(value),
            FormField::Status => match value.parse() {
                Ok(status) => self.set_status(status),
                Err(e) => tracing::debug!(error = %e, "Ignoring status selection"),
            },
        }
    }

    /// Check the form without submitting it
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.author.is_empty() {
            return Err(FormError::MissingAuthor);
        }
        Ok(())
    }

    /// Submit the form.
    ///
    /// On success a new book is appended to the end of the store and the form
    /// is reset. On rejection neither the store nor the form input changes.
    pub fn submit(&mut self, store: &mut BookStore) -> Result<BookId, FormError> {
        if let Err(e) = self.validate() {
            tracing::debug!(error = %e, "Form submission rejected");
            return Err(e);
        }

        let book = BookRecord::new(
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.author),
            self.status,
        );
        let id = book.id;
        store.push(book);
        self.reset();

        tracing::debug!(%id, "Book added");
        Ok(id)
    }

    /// Clear title and author and select the default status
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
