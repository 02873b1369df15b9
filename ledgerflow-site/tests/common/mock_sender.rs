// tests/common/mock_sender.rs

use async_trait::async_trait;
use ledgerflow_site::infrastructure::email::{
    EmailError, EmailMessage, EmailReceipt, EmailSender,
};
use std::sync::Mutex;

/// 送信内容を記録するだけの送信者
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message);
        Ok(EmailReceipt {
            success: true,
            message_id: format!("recorded-{}", sent.len()),
        })
    }
}

/// 常に失敗する送信者
#[derive(Default)]
pub struct FailingSender {
    attempts: Mutex<usize>,
}

impl FailingSender {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl EmailSender for FailingSender {
    async fn send(&self, _message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        *self.attempts.lock().unwrap() += 1;
        Err(EmailError::SendError("SMTP connection refused".to_string()))
    }
}

/// 送信時にパニックする送信者
#[derive(Default)]
pub struct PanickingSender;

#[async_trait]
impl EmailSender for PanickingSender {
    async fn send(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        panic!("mail transport crashed while sending to {}", message.to_email);
    }
}
