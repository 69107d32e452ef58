//! Control Center: load, edit and save the team's feature overrides.
//!
//! Ties the [`OverrideEditor`] to the settings endpoint. Failures become
//! notices; a failed save drops the pending edits and keeps the last
//! confirmed state.

use tracing::{info, warn};

use salesdesk_core::errors::{ApiError, EntitlementError};
use salesdesk_core::{FeatureKey, Role};
use salesdesk_entitlements::{EntitlementResolver, OverrideEditor};

use crate::api::ApiClient;
use crate::notice::{Notice, Notices};
use crate::settings::SettingsApi;
use crate::transport::HttpTransport;

pub struct ControlCenter<'a, T> {
    settings: SettingsApi<'a, T>,
    notices: &'a Notices,
    editor: Option<OverrideEditor>,
}

impl<'a, T: HttpTransport> ControlCenter<'a, T> {
    pub fn new(client: &'a ApiClient<T>, notices: &'a Notices) -> Self {
        Self {
            settings: SettingsApi::new(client),
            notices,
            editor: None,
        }
    }

    /// Fetch the current settings. On failure the previously loaded state,
    /// if any, is kept.
    pub fn load(&mut self) -> Result<(), ApiError> {
        match self.settings.fetch_features() {
            Ok(settings) => {
                self.editor = Some(OverrideEditor::new(settings));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "control center load failed");
                self.notices.push(Notice::from_api_error(&e));
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&OverrideEditor> {
        self.editor.as_ref()
    }

    /// Confirmed entitlements; a loading resolver until the first load.
    pub fn resolver(&self, role: Role) -> EntitlementResolver {
        match &self.editor {
            Some(editor) => editor.confirmed_resolver(role),
            None => EntitlementResolver::loading(role),
        }
    }

    /// Entitlements with the unsaved toggles applied.
    pub fn preview(&self, role: Role) -> EntitlementResolver {
        match &self.editor {
            Some(editor) => editor.preview(role),
            None => EntitlementResolver::loading(role),
        }
    }

    pub fn toggle(&mut self, key: impl Into<FeatureKey>, enabled: bool) -> Result<(), EntitlementError> {
        let result = match self.editor.as_mut() {
            Some(editor) => editor.toggle(key, enabled),
            None => Err(EntitlementError::NotEditable),
        };
        if let Err(e) = &result {
            self.notices.push(Notice::warning(e.to_string()));
        }
        result
    }

    /// Send the pending edits. No request is made when nothing changed.
    pub fn save(&mut self) -> Result<(), ApiError> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(());
        };
        if !editor.is_dirty() {
            return Ok(());
        }

        match self.settings.save_overrides(&editor.patch()) {
            Ok(server) => {
                editor.commit(server);
                self.notices.push(Notice::success("Feature settings saved"));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, pending = editor.pending().len(), "override save failed, reverting");
                editor.revert();
                self.notices.push(Notice::from_api_error(&e));
                Err(e)
            }
        }
    }

    /// Discard unsaved toggles.
    pub fn discard(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            if editor.is_dirty() {
                info!(discarded = editor.pending().len(), "control center edits discarded");
            }
            editor.revert();
        }
    }
}
