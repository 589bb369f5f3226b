//! Delivery of complaint lifecycle notices.
//!
//! The creation notice is rendered from a Jinja2 template and either POSTed
//! to a configured webhook or, when no webhook is set, written to the log.
//! Delivery runs in the background and never fails the request that
//! triggered it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use minijinja::{Environment, Value};

use crate::core::config::NotifyConfig;
use crate::core::error::{AppError, Result};
use crate::shared::constants::SITE_NAME;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template directory relative to the project root
const TEMPLATE_DIR: &str = "templates";

const CREATED_TEMPLATE: &str = "complaint_created.jinja";

/// Compiled-in copy of the creation notice, used when the template file is
/// not deployed next to the binary.
const CREATED_TEMPLATE_FALLBACK: &str = include_str!("../../../templates/complaint_created.jinja");

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    let path = Path::new(TEMPLATE_DIR).join(CREATED_TEMPLATE);
    if let Ok(content) = std::fs::read_to_string(&path) {
        // Convert to 'static str by leaking (safe for long-lived templates)
        let static_content: &'static str = Box::leak(content.into_boxed_str());
        if let Err(e) = env.add_template(CREATED_TEMPLATE, static_content) {
            tracing::warn!("Failed to load template {}: {}", CREATED_TEMPLATE, e);
        } else {
            tracing::debug!("Loaded template: {}", CREATED_TEMPLATE);
        }
    }

    if env.get_template(CREATED_TEMPLATE).is_err() {
        if let Err(e) = env.add_template(CREATED_TEMPLATE, CREATED_TEMPLATE_FALLBACK) {
            tracing::warn!("Failed to load built-in template: {}", e);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Everything the creation notice template can reference. All fields are
/// already formatted for display.
#[derive(Debug, Clone)]
pub struct NotificationContext {
    pub complain_id: i32,
    pub passenger_name: String,
    pub user_phone_number: String,
    pub train_no: String,
    pub train_name: String,
    pub train_depot: String,
    pub pnr: String,
    pub coach: String,
    pub berth: String,
    pub description: String,
    pub date_of_journey: String,
    pub created_at: String,
}

fn render_created(ctx: &NotificationContext) -> std::result::Result<String, minijinja::Error> {
    let mut vars: HashMap<&str, Value> = HashMap::new();
    vars.insert("complain_id", Value::from(ctx.complain_id));
    vars.insert("passenger_name", Value::from(ctx.passenger_name.as_str()));
    vars.insert(
        "user_phone_number",
        Value::from(ctx.user_phone_number.as_str()),
    );
    vars.insert("train_no", Value::from(ctx.train_no.as_str()));
    vars.insert("train_name", Value::from(ctx.train_name.as_str()));
    vars.insert("train_depot", Value::from(ctx.train_depot.as_str()));
    vars.insert("pnr", Value::from(ctx.pnr.as_str()));
    vars.insert("coach", Value::from(ctx.coach.as_str()));
    vars.insert("berth", Value::from(ctx.berth.as_str()));
    vars.insert("description", Value::from(ctx.description.as_str()));
    vars.insert("date_of_journey", Value::from(ctx.date_of_journey.as_str()));
    vars.insert("created_at", Value::from(ctx.created_at.as_str()));
    vars.insert("site_name", Value::from(SITE_NAME));

    let template = get_environment().get_template(CREATED_TEMPLATE)?;
    template.render(Value::from_iter(vars))
}

/// Sends complaint lifecycle notices
pub struct ComplaintNotifier {
    config: NotifyConfig,
    http_client: reqwest::Client,
}

impl ComplaintNotifier {
    pub fn new(config: NotifyConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Render and deliver the creation notice for a complaint. Failures are
    /// logged, never propagated.
    pub async fn notify_created(&self, ctx: NotificationContext) {
        let subject = format!("Complaint received for train number: {}", ctx.train_no);

        let body = match render_created(&ctx) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(
                    "Failed to render creation notice for complaint {}: {}",
                    ctx.complain_id,
                    e
                );
                return;
            }
        };

        let Some(webhook_url) = &self.config.webhook_url else {
            tracing::info!(
                "No notification webhook configured; creation notice for complaint {}:\n{}",
                ctx.complain_id,
                body
            );
            return;
        };

        let payload = serde_json::json!({
            "subject": subject,
            "body": body,
        });

        match self.http_client.post(webhook_url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(
                    "Creation notice delivered for complaint {}",
                    ctx.complain_id
                );
            }
            Ok(response) => {
                tracing::warn!(
                    "Notification webhook returned {} for complaint {}",
                    response.status(),
                    ctx.complain_id
                );
            }
            Err(e) => {
                tracing::error!(
                    "Failed to deliver creation notice for complaint {}: {}",
                    ctx.complain_id,
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> NotificationContext {
        NotificationContext {
            complain_id: 42,
            passenger_name: "Asha Verma".to_string(),
            user_phone_number: "+91-9876543210".to_string(),
            train_no: "12621".to_string(),
            train_name: "Tamil Nadu Express".to_string(),
            train_depot: "MAS".to_string(),
            pnr: "1234567890".to_string(),
            coach: "S4".to_string(),
            berth: "32".to_string(),
            description: "Food served cold".to_string(),
            date_of_journey: "01 Jun 2025".to_string(),
            created_at: "01 Jun 2025, 14:30".to_string(),
        }
    }

    #[test]
    fn test_render_includes_context_fields() {
        let body = render_created(&sample_context()).expect("render");

        assert!(body.contains("42"));
        assert!(body.contains("Asha Verma"));
        assert!(body.contains("+91-9876543210"));
        assert!(body.contains("12621"));
        assert!(body.contains("1234567890"));
        assert!(body.contains(SITE_NAME));
    }

    #[tokio::test]
    async fn test_notify_without_webhook_only_logs() {
        let notifier = ComplaintNotifier::new(NotifyConfig {
            webhook_url: None,
            timeout_secs: 1,
        })
        .expect("notifier");

        // Must complete without touching the network.
        notifier.notify_created(sample_context()).await;
    }
}
