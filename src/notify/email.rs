//! SMTP email delivery
//!
//! One message per run: plain-text body with the rounded maximum price
//! and the chart PNG attached, submitted over STARTTLS with plain
//! credentials.

use super::Notify;
use crate::config::EmailConfig;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Summary delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("message build failed: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("bad attachment content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),
    #[error("attachment read failed: {0}")]
    Attachment(#[from] std::io::Error),
    #[error("smtp failure: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Sends the run summary over an authenticated SMTP relay
pub struct EmailNotifier {
    config: EmailConfig,
}

impl EmailNotifier {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Compose the multipart summary message
    fn build_message(
        &self,
        max_price: Decimal,
        chart_name: &str,
        chart_bytes: Vec<u8>,
    ) -> Result<Message, NotifyError> {
        let body = format!(
            "The maximum BTC price in the last hour was {}$.",
            max_price.round_dp(2)
        );

        let attachment = Attachment::new(chart_name.to_string())
            .body(chart_bytes, ContentType::parse("image/png")?);

        let message = Message::builder()
            .from(self.config.from.parse()?)
            .to(self.config.to.parse()?)
            .subject(self.config.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(body))
                    .singlepart(attachment),
            )?;

        Ok(message)
    }
}

#[async_trait]
impl Notify for EmailNotifier {
    async fn notify(&self, max_price: Decimal, chart_path: &Path) -> Result<(), NotifyError> {
        let chart_bytes = tokio::fs::read(chart_path).await?;
        let chart_name = chart_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("chart.png");

        let message = self.build_message(max_price, chart_name, chart_bytes)?;

        let credentials = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(credentials)
            .build();

        mailer.send(message).await?;

        tracing::info!("Email with chart and max price sent to {}", self.config.to);

        Ok(())
    }
}
