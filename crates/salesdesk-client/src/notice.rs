//! Toast queue. Producers push, the UI drains.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use salesdesk_core::errors::ApiError;
use salesdesk_core::SalesdeskErrorCode;

/// Notices beyond this many are dropped until the UI drains the queue.
const MAX_QUEUED: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub code: Option<&'static str>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            code: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn from_api_error(error: &ApiError) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: error.user_message(),
            code: Some(error.error_code()),
        }
    }
}

#[derive(Debug, Default)]
pub struct Notices {
    queue: Mutex<Vec<Notice>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice. Returns `false` when the queue is full and the
    /// notice was dropped; the drop is still logged.
    pub fn push(&self, notice: Notice) -> bool {
        let mut queue = self.lock();
        if queue.len() >= MAX_QUEUED {
            warn!(
                level = ?notice.level,
                code = notice.code.unwrap_or(""),
                message = %notice.message,
                "notice queue full, dropping notice"
            );
            return false;
        }
        queue.push(notice);
        true
    }

    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
