// ledgerflow-site/src/features/contact/templates.rs

use uuid::Uuid;

use super::dto::{ConsultationRequest, ContactRequest};
use crate::infrastructure::email::EmailTemplate;
use crate::utils::html::escape_html;

const NOT_PROVIDED: &str = "Not provided";

/// 新規リードの通知メール（オペレーター宛）
pub fn lead_notification(request: &ContactRequest, reference_id: Uuid) -> EmailTemplate {
    let rows = [
        ("Reference", reference_id.to_string()),
        ("Business Name", request.business_name.trim().to_string()),
        ("Contact Name", request.contact_name.trim().to_string()),
        ("Email", request.email.trim().to_string()),
        ("Phone", optional(&request.phone)),
        ("Business Type", optional(&request.business_type)),
        ("Primary Interest", optional(&request.service_interest)),
        (
            "Preferred Contact",
            request.preferred_contact.label().to_string(),
        ),
    ];

    let challenges = [
        ("Challenge #1", request.primary_challenge.trim().to_string()),
        ("Challenge #2", request.secondary_challenge.trim().to_string()),
        ("Additional Information", optional(&request.additional_info)),
    ];

    let subject = format!("New Consultation Lead: {}", request.business_name.trim());

    let html_rows: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<tr><td style="padding: 6px 0; font-weight: bold; color: #555;">{}:</td><td style="padding: 6px 0; color: #333;">{}</td></tr>"#,
                label,
                escape_html(value)
            )
        })
        .collect();

    let html_challenges: String = challenges
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<h3 style="color: #333; margin-bottom: 4px;">{}</h3><p style="color: #666; white-space: pre-wrap; margin-top: 0;">{}</p>"#,
                label,
                escape_html(value)
            )
        })
        .collect();

    let html_body = format!(
        r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
        <h1 style="color: #333; font-size: 22px;">{subject}</h1>
        <table style="width: 100%; border-collapse: collapse;">{rows}</table>
        <div style="margin-top: 20px;">{challenges}</div>
        <p style="font-size: 12px; color: #666;">Respond within 24 hours.</p>
      </div>
    "#,
        subject = escape_html(&subject),
        rows = html_rows,
        challenges = html_challenges,
    );

    let text_body = rows
        .iter()
        .chain(challenges.iter())
        .map(|(label, value)| format!("- {}: {}", label, value))
        .fold(format!("{}\n\n", subject), |mut body, line| {
            body.push_str(&line);
            body.push('\n');
            body
        });

    EmailTemplate {
        subject,
        html_body,
        text_body,
    }
}

/// 相談予約の通知メール（オペレーター宛）
pub fn consultation_notification(request: &ConsultationRequest, reference_id: Uuid) -> EmailTemplate {
    let date = request.preferred_date.format("%A, %B %-d, %Y").to_string();
    let subject = format!("Consultation Request: {}", date);

    let html_body = format!(
        r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
        <h1 style="color: #333; font-size: 22px;">Free 30-minute consultation requested</h1>
        <ul style="color: #333; line-height: 1.6;">
          <li>Reference: {reference}</li>
          <li>Date: {date}</li>
          <li>Time: {slot} ({timezone})</li>
        </ul>
        <p style="font-size: 12px; color: #666;">Confirm the appointment within 2 hours.</p>
      </div>
    "#,
        reference = reference_id,
        date = date,
        slot = escape_html(&request.time_slot),
        timezone = escape_html(&request.timezone),
    );

    let text_body = format!(
        "Free 30-minute consultation requested\n\n- Reference: {}\n- Date: {}\n- Time: {} ({})\n",
        reference_id, date, request.time_slot, request.timezone
    );

    EmailTemplate {
        subject,
        html_body,
        text_body,
    }
}

fn optional(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_PROVIDED)
        .to_string()
}
