//! Template rendering - selects and renders the invitation mail body
//!
//! Template selection is a pure function of (salutation, contact): each
//! sender persona maintains one template per salutation. Records without a
//! contact fall back to the shared office persona.

use crate::core::AppError;
use crate::entities::{Invitation, Salutation};
use tera::{Context, Tera};
use tracing::debug;

/// Persona used when a record carries no contact.
pub const DEFAULT_CONTACT: &str = "office";

/// Builds the template name for a salutation and an optional contact,
/// e.g. `email_formal_female_anna.txt`.
pub fn template_name(salutation: Salutation, contact: Option<&str>) -> String {
    let contact = match contact {
        Some(name) if !name.is_empty() => name.to_lowercase(),
        _ => DEFAULT_CONTACT.to_string(),
    };
    format!("email_{}_{}.txt", salutation.template_key(), contact)
}

/// Renders a named template with the invitation bound into the context.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, name: &str, invitation: &Invitation) -> Result<String, AppError>;
}

/// Tera-backed engine; templates address the record as `{{ invitation.* }}`.
pub struct TeraTemplateEngine {
    tera: Tera,
}

impl TeraTemplateEngine {
    /// Loads every template below `dir`. Template names are the file names
    /// relative to that directory.
    pub fn from_dir(dir: &str) -> Result<Self, AppError> {
        let tera = Tera::new(&format!("{dir}/**/*.txt"))?;
        debug!(
            "Loaded {} templates from {dir}",
            tera.get_template_names().count()
        );
        Ok(Self { tera })
    }

    /// Builds an engine from in-memory templates; used by the test suites.
    pub fn from_raw_templates<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, AppError> {
        let mut tera = Tera::default();
        for (name, body) in templates {
            tera.add_raw_template(name, body)?;
        }
        Ok(Self { tera })
    }
}

impl TemplateEngine for TeraTemplateEngine {
    fn render(&self, name: &str, invitation: &Invitation) -> Result<String, AppError> {
        let mut context = Context::new();
        context.insert("invitation", invitation);
        Ok(self.tera.render(name, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{InvitationState, Salutation};
    use chrono::Utc;

    fn invitation() -> Invitation {
        let now = Utc::now();
        Invitation {
            id: "inv-1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            contact: None,
            comment: None,
            internal_comment: None,
            salutation: Salutation::InformalFemale,
            invitation_state: InvitationState::Initial,
            created_at: now,
            created_by: "tester".to_string(),
            modified_at: now,
            modified_by: "tester".to_string(),
        }
    }

    #[test]
    fn template_name_combines_salutation_and_contact() {
        assert_eq!(
            template_name(Salutation::FormalMale, Some("anna")),
            "email_formal_male_anna.txt"
        );
        assert_eq!(
            template_name(Salutation::InformalFemale, Some("Anna")),
            "email_informal_female_anna.txt"
        );
    }

    #[test]
    fn template_name_falls_back_to_the_default_persona() {
        assert_eq!(
            template_name(Salutation::InformalMale, None),
            "email_informal_male_office.txt"
        );
        assert_eq!(
            template_name(Salutation::FormalFemale, Some("")),
            "email_formal_female_office.txt"
        );
    }

    #[test]
    fn render_binds_the_invitation_into_the_context() {
        let engine = TeraTemplateEngine::from_raw_templates([(
            "email_informal_female_office.txt",
            "Hi {{ invitation.first_name }} {{ invitation.last_name }}!",
        )])
        .unwrap();

        let body = engine
            .render("email_informal_female_office.txt", &invitation())
            .unwrap();
        assert_eq!(body, "Hi Ann Lee!");
    }

    #[test]
    fn render_fails_for_an_unknown_template() {
        let engine = TeraTemplateEngine::from_raw_templates([(
            "email_informal_female_office.txt",
            "Hi {{ invitation.first_name }}!",
        )])
        .unwrap();
        let err = engine.render("email_formal_male_office.txt", &invitation());
        assert!(matches!(err, Err(AppError::Internal(_))));
    }
}
