//! Notification Settings Endpoints
//!
//! The backend auto-creates default settings on first fetch, so `get` never
//! returns 404 for a known user.

use chrono::NaiveTime;
use reqwest::Method;
use serde::Serialize;

use crate::domain::{DomainResult, NotificationSettings};
use super::client::ApiClient;

/// Partial update; unset fields keep their stored value
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_warning_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_warning_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_warning_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_warning_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_time: Option<NaiveTime>,
}

impl ApiClient {
    pub async fn notification_settings(&self) -> DomainResult<NotificationSettings> {
        let response = self
            .request(Method::GET, "/notifications/settings")
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn update_notification_settings(
        &self,
        update: &NotificationSettingsUpdate,
    ) -> DomainResult<NotificationSettings> {
        let response = self
            .request(Method::PUT, "/notifications/settings")
            .json(update)
            .send()
            .await?;
        let settings: NotificationSettings = Self::expect_json(response).await?;
        log::info!("updated notification settings");
        Ok(settings)
    }
}
