//! JSON form presenter.
//!
//! Describes profile forms as plain data for a client-side renderer.

use serde_json::{Map, Value};

use crate::domain::profile::user_profile_path;
use crate::ports::{FormMode, FormPresenter, FormSubject, RenderableForm};

/// Builds [`RenderableForm`]s whose default values come from the profile payload.
#[derive(Debug, Clone, Default)]
pub struct JsonFormPresenter {
    base_path: String,
}

impl JsonFormPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for form action paths, e.g. when mounted under `/api`.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into().trim_end_matches('/').to_string();
        self
    }

    fn action(&self, subject: &FormSubject, mode: FormMode) -> String {
        let root = format!(
            "{}{}",
            self.base_path,
            user_profile_path(subject.owner(), subject.profile_type())
        );
        match (subject.profile_id(), mode) {
            (Some(id), FormMode::Delete) => format!("{}/{}/delete", root, id),
            (Some(id), _) => format!("{}/{}", root, id),
            (None, _) => format!("{}/add", root),
        }
    }
}

impl FormPresenter for JsonFormPresenter {
    fn present(&self, subject: FormSubject, mode: FormMode) -> RenderableForm {
        let values = match &subject {
            FormSubject::New(new_profile) => {
                let mut values = Map::new();
                values.insert("uid".into(), Value::String(new_profile.owner.to_string()));
                values.insert(
                    "created".into(),
                    Value::from(new_profile.created_at.as_unix_secs()),
                );
                values
            }
            FormSubject::Existing(record) => match &record.fields {
                Value::Object(fields) => fields.clone(),
                _ => Map::new(),
            },
        };

        let submit_label = match mode {
            FormMode::Add | FormMode::Edit => "Save",
            FormMode::Delete => "Delete",
        };

        RenderableForm {
            form_id: format!("profile_{}_{}_form", subject.profile_type(), mode),
            mode,
            title: None,
            profile_id: subject.profile_id(),
            active: subject.is_active(),
            owner: subject.owner().clone(),
            profile_type: subject.profile_type().clone(),
            action: self.action(&subject, mode),
            submit_label: submit_label.to_string(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProfileTypeId, UserId};
    use crate::domain::profile::{NewProfile, ProfileRecord, ProfileStatus, ProfileType};
    use serde_json::json;

    fn owner() -> UserId {
        UserId::new("21").unwrap()
    }

    fn employee() -> ProfileType {
        ProfileType::new(ProfileTypeId::new("employee").unwrap(), "Employee", true).unwrap()
    }

    #[test]
    fn add_form_prefills_owner_and_created() {
        let new_profile = NewProfile::for_owner(&owner(), &employee());
        let created = new_profile.created_at.as_unix_secs();

        let form = JsonFormPresenter::new().present(FormSubject::New(new_profile), FormMode::Add);

        assert_eq!(form.form_id, "profile_employee_add_form");
        assert_eq!(form.action, "/user/21/edit/profile/employee/add");
        assert_eq!(form.submit_label, "Save");
        assert_eq!(form.values.get("uid"), Some(&json!("21")));
        assert_eq!(form.values.get("created"), Some(&json!(created)));
    }

    #[test]
    fn edit_form_carries_field_values() {
        let record = ProfileRecord::new(
            owner(),
            employee().id().clone(),
            ProfileStatus::NotActive,
            json!({"job_title": "Engineer"}),
        );
        let id = record.id;

        let form = JsonFormPresenter::new()
            .with_base_path("/api/")
            .present(FormSubject::Existing(record), FormMode::Edit);

        assert_eq!(form.form_id, "profile_employee_edit_form");
        assert_eq!(form.action, format!("/api/user/21/edit/profile/employee/{}", id));
        assert_eq!(form.values.get("job_title"), Some(&json!("Engineer")));
        assert_eq!(form.active, Some(false));
    }

    #[test]
    fn payload_status_field_survives_in_values() {
        let record = ProfileRecord::new(
            owner(),
            employee().id().clone(),
            ProfileStatus::Active,
            json!({"status": "married", "job_title": "Engineer"}),
        );

        let form = JsonFormPresenter::new().present(FormSubject::Existing(record), FormMode::Edit);

        assert_eq!(form.values.get("status"), Some(&json!("married")));
        assert_eq!(form.values.len(), 2);
        assert_eq!(form.active, Some(true));
    }

    #[test]
    fn action_path_escapes_user_id() {
        let owner = UserId::new("a b/c?d").unwrap();
        let new_profile = NewProfile::for_owner(&owner, &employee());

        let form = JsonFormPresenter::new().present(FormSubject::New(new_profile), FormMode::Add);

        assert_eq!(form.action, "/user/a%20b%2Fc%3Fd/edit/profile/employee/add");
        assert_eq!(form.active, None);
    }

    #[test]
    fn delete_form_posts_to_delete_path() {
        let record = ProfileRecord::new(
            owner(),
            employee().id().clone(),
            ProfileStatus::Active,
            json!("not an object"),
        );
        let id = record.id;

        let form = JsonFormPresenter::new().present(FormSubject::Existing(record), FormMode::Delete);

        assert_eq!(form.submit_label, "Delete");
        assert_eq!(
            form.action,
            format!("/user/21/edit/profile/employee/{}/delete", id)
        );
        assert!(form.values.is_empty());
        assert_eq!(form.active, Some(true));
    }
}
