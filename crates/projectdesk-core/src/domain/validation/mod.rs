//! Client-side validation of the project form.
//!
//! [`FormValidator`] borrows a draft record and an error record (plain or
//! [`Observable`](crate::domain::Observable)) and writes one message per
//! field into the latter. The per-field checks live in [`rules`] as pure
//! functions; message text lives in [`MessageCatalog`].

mod messages;
pub mod rules;

pub use messages::MessageCatalog;
pub use rules::ValidationFailure;

use crate::domain::entities::form::{FormErrors, FormProject};
use crate::domain::observable::{FormSink, FormSource};
use crate::domain::value_objects::Locale;

/// Validates a project draft into an error record.
///
/// Holds no state of its own between calls besides the borrows and the
/// message catalog; `validate_form` can be called any number of times.
///
/// ```rust
/// use projectdesk_core::domain::{FormErrors, FormProject, FormValidator, Observable};
///
/// let draft = FormProject::new("Acme", "", "10/05/2024", "01/05/2024");
/// let mut errors = Observable::new(FormErrors::default());
///
/// let valid = FormValidator::new(&draft, &mut errors).validate_form();
///
/// assert!(!valid);
/// assert_eq!(errors.get().project_name, "Please enter at least two words");
/// assert_eq!(errors.get().start_date, "Start date cannot be later than end date");
/// ```
pub struct FormValidator<'a, D, E> {
    draft: &'a D,
    errors: &'a mut E,
    catalog: MessageCatalog,
}

impl<'a, D, E> FormValidator<'a, D, E>
where
    D: FormSource<FormProject>,
    E: FormSink<FormErrors>,
{
    pub fn new(draft: &'a D, errors: &'a mut E) -> Self {
        Self {
            draft,
            errors,
            catalog: MessageCatalog::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.catalog = MessageCatalog::new(locale);
        self
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Current state of the error record.
    pub fn errors(&self) -> &FormErrors {
        self.errors.current()
    }

    pub fn validate_project_name(&self, value: &str) -> String {
        self.catalog.render_opt(rules::project_name(value), "")
    }

    pub fn validate_client(&self, value: &str) -> String {
        self.catalog.render_opt(rules::client(value), "")
    }

    pub fn validate_date(&self, value: &str, label: &str) -> String {
        self.catalog.render_opt(rules::date(value), label)
    }

    /// Flag an inverted date range on both date fields.
    ///
    /// Skipped when either date is empty or already carries an error, so a
    /// format problem is never buried under a range message.
    ///
    /// Dates that fail the calendar check (`31/04/2024`) are not rolled over
    /// into the next month; the pair is left unflagged even when the error
    /// record is clean. `validate_form` never reaches this case because it
    /// records the calendar error first.
    pub fn validate_date_range(&mut self) {
        let draft: &'a D = self.draft;
        let form = draft.current();
        let errors = self.errors.current();

        if form.start_date.is_empty()
            || form.end_date.is_empty()
            || !errors.start_date.is_empty()
            || !errors.end_date.is_empty()
        {
            return;
        }

        if let Some((start_failure, end_failure)) =
            rules::date_range(&form.start_date, &form.end_date)
        {
            let end_message = self.catalog.render(end_failure, "");
            let start_message = self.catalog.render(start_failure, "");
            self.errors.write(|e| e.end_date = end_message);
            self.errors.write(|e| e.start_date = start_message);
        }
    }

    /// Validate every field, then the date range. Returns `true` iff the
    /// error record ends up empty.
    ///
    /// All four fields are overwritten on every call.
    pub fn validate_form(&mut self) -> bool {
        let draft: &'a D = self.draft;
        let form = draft.current();

        let project_name = self.validate_project_name(&form.project_name);
        let client = self.validate_client(&form.client);
        let start_date = self.validate_date(&form.start_date, self.catalog.start_date_label());
        let end_date = self.validate_date(&form.end_date, self.catalog.end_date_label());

        self.errors.write(|e| e.project_name = project_name);
        self.errors.write(|e| e.client = client);
        self.errors.write(|e| e.start_date = start_date);
        self.errors.write(|e| e.end_date = end_date);

        self.validate_date_range();

        self.errors.current().is_empty()
    }
}
