//! FormPresenter port for building profile forms

use serde::Serialize;
use std::fmt;

use crate::domain::{
    foundation::{ProfileId, ProfileTypeId, UserId},
    profile::{NewProfile, ProfileRecord},
};

/// Which operation a profile form performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Add,
    Edit,
    Delete,
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Edit => write!(f, "edit"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The profile a form is built for.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubject {
    /// An unsaved profile (add form)
    New(NewProfile),
    /// A stored profile (edit and delete forms)
    Existing(ProfileRecord),
}

impl FormSubject {
    pub fn owner(&self) -> &UserId {
        match self {
            Self::New(profile) => &profile.owner,
            Self::Existing(record) => &record.owner,
        }
    }

    pub fn profile_type(&self) -> &ProfileTypeId {
        match self {
            Self::New(profile) => &profile.profile_type,
            Self::Existing(record) => &record.profile_type,
        }
    }

    /// Stored id, `None` for unsaved profiles
    pub fn profile_id(&self) -> Option<ProfileId> {
        match self {
            Self::New(_) => None,
            Self::Existing(record) => Some(record.id),
        }
    }

    /// Status of a stored profile, `None` for unsaved profiles
    pub fn is_active(&self) -> Option<bool> {
        match self {
            Self::New(_) => None,
            Self::Existing(record) => Some(record.is_active()),
        }
    }
}

/// Form description handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableForm {
    pub form_id: String,
    pub mode: FormMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    /// Status of the stored profile, kept apart from the payload defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    pub owner: UserId,
    pub profile_type: ProfileTypeId,
    pub action: String,
    pub submit_label: String,
    /// Default widget values keyed by field name
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl RenderableForm {
    /// Sets the page title shown above the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Builds forms for profiles. Rendering itself happens elsewhere.
pub trait FormPresenter: Send + Sync {
    fn present(&self, subject: FormSubject, mode: FormMode) -> RenderableForm;
}
