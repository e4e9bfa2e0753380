//! Hand-written port doubles shared by the handler tests.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

use crate::domain::foundation::{ProfileId, ProfileTypeId, UserId};
use crate::domain::profile::{ProfileRecord, ProfileStatus, ProfileType};
use crate::ports::{
    FormMode, FormPresenter, FormSubject, ProfileRepository, RenderableForm, RepositoryError,
};

pub struct MockProfileRepository {
    profiles: Mutex<Vec<ProfileRecord>>,
    fail_on_call: Option<usize>,
    calls: Mutex<usize>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(Vec::new()),
            fail_on_call: None,
            calls: Mutex::new(0),
        }
    }

    pub fn with_profile(self, profile: ProfileRecord) -> Self {
        self.profiles.lock().unwrap().push(profile);
        self
    }

    /// Fail the n-th repository call (1-based) and every call after it.
    pub fn failing_from_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) -> Result<(), RepositoryError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        match self.fail_on_call {
            Some(n) if *calls >= n => Err(RepositoryError::Unavailable("database offline".into())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_active(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
    ) -> Result<Option<ProfileRecord>, RepositoryError> {
        self.record_call()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.belongs_to(user, profile_type) && p.is_active())
            .cloned())
    }

    async fn find_all_by_status(
        &self,
        user: &UserId,
        profile_type: &ProfileTypeId,
        status: ProfileStatus,
    ) -> Result<Vec<ProfileRecord>, RepositoryError> {
        self.record_call()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.belongs_to(user, profile_type) && p.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        self.record_call()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}

/// Presenter that remembers what it was asked to build.
pub struct RecordingPresenter {
    pub requests: Mutex<Vec<(FormSubject, FormMode)>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl FormPresenter for RecordingPresenter {
    fn present(&self, subject: FormSubject, mode: FormMode) -> RenderableForm {
        let form = RenderableForm {
            form_id: format!("profile_{}_{}_form", subject.profile_type(), mode),
            mode,
            title: None,
            profile_id: subject.profile_id(),
            active: subject.is_active(),
            owner: subject.owner().clone(),
            profile_type: subject.profile_type().clone(),
            action: String::new(),
            submit_label: "Save".to_string(),
            values: serde_json::Map::new(),
        };
        self.requests.lock().unwrap().push((subject, mode));
        form
    }
}

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn single_type() -> ProfileType {
    ProfileType::new(ProfileTypeId::new("main").unwrap(), "Main profile", false).unwrap()
}

pub fn multiple_type() -> ProfileType {
    ProfileType::new(ProfileTypeId::new("employee").unwrap(), "Employee", true).unwrap()
}

pub fn profile(owner: &UserId, profile_type: &ProfileType, status: ProfileStatus) -> ProfileRecord {
    ProfileRecord::new(
        owner.clone(),
        profile_type.id().clone(),
        status,
        json!({"name": "Ada"}),
    )
}
