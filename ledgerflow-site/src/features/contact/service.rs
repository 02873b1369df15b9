// ledgerflow-site/src/features/contact/service.rs

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{
    ConsultationRequest, ConsultationResponse, ContactRequest, ContactSubmissionResponse,
};
use super::templates::{consultation_notification, lead_notification};
use crate::infrastructure::email::{EmailMessage, EmailSender, EmailTemplate};

pub const CONTACT_ACKNOWLEDGEMENT: &str = "We've received your information and will contact you within 24 hours to discuss your bookkeeping needs and schedule a consultation.";
pub const CONSULTATION_ACKNOWLEDGEMENT: &str =
    "Consultation request submitted! We'll confirm your appointment within 2 hours.";

pub struct ContactService {
    email_sender: Arc<dyn EmailSender>,
    operator_email: String,
}

impl ContactService {
    pub fn new(email_sender: Arc<dyn EmailSender>, operator_email: impl Into<String>) -> Self {
        Self {
            email_sender,
            operator_email: operator_email.into(),
        }
    }

    /// 問い合わせを受け付け、オペレーターに通知する
    pub async fn submit_lead(&self, request: ContactRequest) -> ContactSubmissionResponse {
        let reference_id = Uuid::new_v4();

        info!(
            reference_id = %reference_id,
            business_name = %request.business_name.trim(),
            email = %request.email.trim(),
            preferred_contact = request.preferred_contact.label(),
            service_interest = ?request.service_interest,
            "Contact form submitted"
        );

        self.notify_operator(reference_id, lead_notification(&request, reference_id))
            .await;

        ContactSubmissionResponse {
            reference_id,
            acknowledgement: CONTACT_ACKNOWLEDGEMENT.to_string(),
        }
    }

    /// 相談予約を受け付け、オペレーターに通知する
    pub async fn schedule_consultation(
        &self,
        request: ConsultationRequest,
    ) -> ConsultationResponse {
        let reference_id = Uuid::new_v4();

        info!(
            reference_id = %reference_id,
            preferred_date = %request.preferred_date,
            time_slot = %request.time_slot,
            timezone = %request.timezone,
            "Consultation scheduled"
        );

        self.notify_operator(
            reference_id,
            consultation_notification(&request, reference_id),
        )
        .await;

        ConsultationResponse {
            reference_id,
            preferred_date: request.preferred_date,
            time_slot: request.time_slot,
            timezone: request.timezone,
            acknowledgement: CONSULTATION_ACKNOWLEDGEMENT.to_string(),
        }
    }

    async fn notify_operator(&self, reference_id: Uuid, template: EmailTemplate) {
        let message = EmailMessage::from_template(self.operator_email.clone(), template);

        // メール送信失敗はログに記録するが、処理は継続
        if let Err(e) = self.email_sender.send(message).await {
            warn!(reference_id = %reference_id, error = %e, "Failed to send operator notification");
        }
    }
}
