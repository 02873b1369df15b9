// ledgerflow-site/src/features/account/templates.rs

use crate::infrastructure::email::EmailTemplate;
use crate::types::IsoTimestamp;
use crate::utils::html::escape_html;

pub const CANCELLATION_SUBJECT: &str = "Account Cancellation Confirmation";

/// 解約確認メールのテンプレート
pub fn cancellation_confirmation(
    user_id: &str,
    cancelled_at: IsoTimestamp,
    recipient: &str,
) -> EmailTemplate {
    let dt = cancelled_at.inner();
    let date = dt.format("%B %-d, %Y").to_string();
    let time = dt.format("%-I:%M:%S %p UTC").to_string();

    let html_body = format!(
        r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
        <div style="text-align: center; margin-bottom: 30px;">
          <h1 style="color: #333; font-size: 24px; margin: 0;">{subject}</h1>
        </div>

        <div style="background-color: #f8f9fa; border-left: 4px solid #28a745; padding: 20px; margin: 20px 0;">
          <h2 style="color: #28a745; margin-top: 0;">Cancellation Completed</h2>
          <p style="margin: 0; color: #333;">Your account cancellation request has been successfully processed.</p>
        </div>

        <div style="background-color: #f5f5f5; padding: 20px; margin: 20px 0; border-radius: 8px;">
          <h3 style="color: #333; margin-top: 0;">Cancellation Details</h3>
          <table style="width: 100%; border-collapse: collapse;">
            <tr>
              <td style="padding: 8px 0; font-weight: bold; color: #555;">User ID:</td>
              <td style="padding: 8px 0; color: #333;">{user_id}</td>
            </tr>
            <tr>
              <td style="padding: 8px 0; font-weight: bold; color: #555;">Cancellation Date:</td>
              <td style="padding: 8px 0; color: #333;">{date}</td>
            </tr>
            <tr>
              <td style="padding: 8px 0; font-weight: bold; color: #555;">Cancellation Time:</td>
              <td style="padding: 8px 0; color: #333;">{time}</td>
            </tr>
          </table>
        </div>

        <div style="margin: 30px 0;">
          <h3 style="color: #333;">What Happens Next?</h3>
          <ul style="color: #666; line-height: 1.6;">
            <li>Your account has been immediately deactivated</li>
            <li>All personal data will be processed according to our data retention policies</li>
            <li>Any active subscriptions have been cancelled</li>
            <li>You will not be charged any further fees</li>
          </ul>
        </div>

        <div style="background-color: #fff3cd; border: 1px solid #ffeaa7; padding: 15px; border-radius: 5px; margin: 20px 0;">
          <p style="margin: 0; color: #856404;">
            <strong>Note:</strong> If you believe this cancellation was made in error, please contact our support team immediately.
          </p>
        </div>

        <hr style="margin: 40px 0; border: none; border-top: 1px solid #ddd;">

        <div style="text-align: center;">
          <p style="font-size: 12px; color: #666; margin: 0;">
            This is an automated confirmation email. Please do not reply to this message.
          </p>
          <p style="font-size: 12px; color: #666; margin: 5px 0 0 0;">
            Sent to: {recipient}
          </p>
        </div>
      </div>
    "#,
        subject = CANCELLATION_SUBJECT,
        user_id = escape_html(user_id),
        date = date,
        time = time,
        recipient = escape_html(recipient),
    );

    let text_body = format!(
        r#"
Account Cancellation Confirmation
================================

Your account cancellation request has been successfully processed.

Cancellation Details:
- User ID: {user_id}
- Cancellation Date: {date}
- Cancellation Time: {time}

What Happens Next?
- Your account has been immediately deactivated
- All personal data will be processed according to our data retention policies
- Any active subscriptions have been cancelled
- You will not be charged any further fees

Note: If you believe this cancellation was made in error, please contact our support team immediately.

This is an automated confirmation email. Please do not reply to this message.
Sent to: {recipient}
    "#,
        user_id = user_id,
        date = date,
        time = time,
        recipient = recipient,
    );

    EmailTemplate {
        subject: CANCELLATION_SUBJECT.to_string(),
        html_body,
        text_body,
    }
}
