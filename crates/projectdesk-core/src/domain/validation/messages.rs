//! User-facing validation messages, keyed by failure kind and locale.
//!
//! Logic never builds message text itself; adding a locale only touches
//! this file.

use crate::domain::validation::rules::ValidationFailure;
use crate::domain::value_objects::Locale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub const fn start_date_label(&self) -> &'static str {
        match self.locale {
            Locale::En => "Start date",
            Locale::PtBr => "Data de início",
        }
    }

    pub const fn end_date_label(&self) -> &'static str {
        match self.locale {
            Locale::En => "End date",
            Locale::PtBr => "Data final",
        }
    }

    /// Render a failure. `label` is only used by [`ValidationFailure::DateRequired`].
    pub fn render(&self, failure: ValidationFailure, label: &str) -> String {
        use ValidationFailure as F;

        match (self.locale, failure) {
            (Locale::En, F::ProjectNameRequired) => "Project name is required".into(),
            (Locale::En, F::ProjectNameTooShort) => "Please enter at least two words".into(),
            (Locale::En, F::ClientRequired) => "Please enter at least one word".into(),
            (Locale::En, F::DateRequired) => format!("{label} is required"),
            (Locale::En, F::DateMalformed) => "Select a valid date".into(),
            (Locale::En, F::DateNonexistent) => "Invalid or nonexistent date".into(),
            (Locale::En, F::EndBeforeStart) => "End date cannot be earlier than start date".into(),
            (Locale::En, F::StartAfterEnd) => "Start date cannot be later than end date".into(),

            (Locale::PtBr, F::ProjectNameRequired) => "Nome do projeto é obrigatório".into(),
            (Locale::PtBr, F::ProjectNameTooShort) => {
                "Por favor, digite ao menos duas palavras".into()
            }
            (Locale::PtBr, F::ClientRequired) => "Por favor, digite ao menos uma palavra".into(),
            (Locale::PtBr, F::DateRequired) => format!("{label} é obrigatória"),
            (Locale::PtBr, F::DateMalformed) => "Selecione uma data válida".into(),
            (Locale::PtBr, F::DateNonexistent) => "Data inválida ou inexistente".into(),
            (Locale::PtBr, F::EndBeforeStart) => {
                "Data final não pode ser anterior à data de início".into()
            }
            (Locale::PtBr, F::StartAfterEnd) => {
                "Data de início não pode ser posterior à data final".into()
            }
        }
    }

    /// Render an optional failure; `None` becomes the empty "no error" string.
    pub fn render_opt(&self, failure: Option<ValidationFailure>, label: &str) -> String {
        failure
            .map(|f| self.render(f, label))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_date_message_uses_label() {
        let en = MessageCatalog::new(Locale::En);
        assert_eq!(
            en.render(ValidationFailure::DateRequired, en.end_date_label()),
            "End date is required"
        );

        let pt = MessageCatalog::new(Locale::PtBr);
        assert_eq!(
            pt.render(ValidationFailure::DateRequired, pt.start_date_label()),
            "Data de início é obrigatória"
        );
    }

    #[test]
    fn no_failure_renders_empty() {
        assert_eq!(MessageCatalog::default().render_opt(None, "x"), "");
    }
}
