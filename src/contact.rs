use std::time::Duration;

use http::{header, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::i18n::ContactStrings;
use crate::profile::FORM_ENDPOINT;

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_RESET: Duration = Duration::from_secs(5);

/// Body posted to the form relay. Field names are the wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        [&self.from_name, &self.reply_to, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    ReplyTo,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Not all contact fields were filled in")]
    MissingFields,
    #[error("A submission is already in flight")]
    InFlight,
    #[error("Form relay rejected the submission with {0}")]
    Rejected(StatusCode),
    #[error("Couldn't reach the form relay: {0}")]
    Transport(String),
}

impl ContactError {
    /// Localized message shown under the form.
    pub fn notice(&self, strings: &ContactStrings) -> &'static str {
        match self {
            ContactError::MissingFields => strings.fill_fields,
            ContactError::InFlight | ContactError::Rejected(_) => strings.error,
            ContactError::Transport(_) => strings.conn_error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(ContactError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub status: FormStatus,
    pub data: ContactForm,
}

impl ContactState {
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.data.from_name = value,
            FormField::ReplyTo => self.data.reply_to = value,
            FormField::Message => self.data.message = value,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.data.from_name,
            FormField::ReplyTo => &self.data.reply_to,
            FormField::Message => &self.data.message,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Starts a submission, returning the payload to send.
    ///
    /// Refuses without touching the state while another submission is in flight.
    /// Incomplete forms move straight to the error state and yield no payload.
    pub fn begin_submit(&mut self) -> Result<ContactForm, ContactError> {
        if self.is_busy() {
            return Err(ContactError::InFlight);
        }
        if !self.data.is_complete() {
            self.status = FormStatus::Error(ContactError::MissingFields);
            return Err(ContactError::MissingFields);
        }
        self.status = FormStatus::Submitting;
        Ok(self.data.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), ContactError>) {
        if !self.is_busy() {
            return;
        }
        match result {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.data = ContactForm::default();
            }
            Err(e) => self.status = FormStatus::Error(e),
        }
    }

    /// Timer callback after a successful submission. Ignored in any other state.
    pub fn expire_success(&mut self) {
        if self.status == FormStatus::Success {
            self.status = FormStatus::Idle;
        }
    }

    /// Empty while idle or submitting.
    pub fn message(&self, strings: &ContactStrings) -> &'static str {
        match &self.status {
            FormStatus::Idle | FormStatus::Submitting => "",
            FormStatus::Success => strings.success,
            FormStatus::Error(e) => e.notice(strings),
        }
    }
}

/// Something that can carry a contact form to its destination.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn deliver(&self, form: &ContactForm) -> Result<StatusCode, ContactError>;
}

/// Posts the form as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(FORM_ENDPOINT)
    }
}

impl FormRelay for HttpRelay {
    async fn deliver(&self, form: &ContactForm) -> Result<StatusCode, ContactError> {
        let res = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        Ok(res.status())
    }
}

pub async fn submit_contact<R: FormRelay>(
    relay: &R,
    form: &ContactForm,
) -> Result<(), ContactError> {
    let status = relay.deliver(form).await?;
    if status.is_success() {
        log::info!("contact form delivered ({status})");
        Ok(())
    } else {
        log::warn!("contact form rejected ({status})");
        Err(ContactError::Rejected(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translations, Lang};
    use std::cell::RefCell;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct FakeRelay {
        answer: Result<StatusCode, ContactError>,
        seen: RefCell<Vec<ContactForm>>,
    }

    impl FakeRelay {
        fn answering(answer: Result<StatusCode, ContactError>) -> Self {
            Self {
                answer,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormRelay for FakeRelay {
        async fn deliver(&self, form: &ContactForm) -> Result<StatusCode, ContactError> {
            self.seen.borrow_mut().push(form.clone());
            self.answer.clone()
        }
    }

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.set_field(FormField::Name, "Ana".to_string());
        state.set_field(FormField::ReplyTo, "ana@example.com".to_string());
        state.set_field(FormField::Message, "Need a landing page".to_string());
        state
    }

    async fn run(state: &mut ContactState, relay: &FakeRelay) {
        let form = state.begin_submit().expect("form should be accepted");
        assert_eq!(state.status, FormStatus::Submitting);
        let res = submit_contact(relay, &form).await;
        state.finish_submit(res);
    }

    #[test]
    fn test_missing_fields_never_sends() {
        let strings = &translations(Lang::En).contact;
        for (field, blank) in [
            (FormField::Name, ""),
            (FormField::ReplyTo, "   "),
            (FormField::Message, "\n\t"),
        ] {
            let mut state = filled();
            state.set_field(field, blank.to_string());
            assert_eq!(state.begin_submit(), Err(ContactError::MissingFields));
            assert_eq!(state.status, FormStatus::Error(ContactError::MissingFields));
            assert_eq!(state.message(strings), strings.fill_fields);
            assert_eq!(state.field(field), blank);
        }
    }

    #[test]
    fn test_message_empty_when_idle_or_submitting() {
        let strings = &translations(Lang::Pt).contact;
        let mut state = filled();
        assert_eq!(state.message(strings), "");
        state.begin_submit().expect("complete form");
        assert_eq!(state.message(strings), "");
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut state = filled();
        state.begin_submit().expect("first submit");
        assert!(state.is_busy());
        assert_eq!(state.begin_submit(), Err(ContactError::InFlight));
        assert_eq!(state.status, FormStatus::Submitting);
    }

    /// Serves a single request with `status` and returns it as raw text.
    async fn answer_once(listener: TcpListener, status: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&raw[..end]).to_ascii_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if raw.len() >= end + 4 + len {
                    break;
                }
            }
        }
        let reply = format!(
            "HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
        );
        socket.write_all(reply.as_bytes()).await.expect("write reply");
        String::from_utf8(raw).expect("utf-8 request")
    }

    #[tokio::test]
    async fn test_http_relay_posts_json() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(answer_once(listener, "422 Unprocessable Entity"));

        let relay = HttpRelay::new(format!("http://{addr}/f"));
        let form = ContactForm {
            from_name: "A".to_string(),
            reply_to: "b@c".to_string(),
            message: "m".to_string(),
        };
        let res = submit_contact(&relay, &form).await;
        assert_eq!(
            res,
            Err(ContactError::Rejected(StatusCode::UNPROCESSABLE_ENTITY))
        );

        let request = server.await.expect("server task");
        let (head, body) = request.split_once("\r\n\r\n").expect("request head");
        let head_lc = head.to_ascii_lowercase();
        assert!(head.starts_with("POST /f HTTP/1.1\r\n"));
        assert!(head_lc.contains("\r\naccept: application/json\r\n"));
        assert!(head_lc.contains("\r\ncontent-type: application/json"));
        let sent: serde_json::Value = serde_json::from_str(body).expect("json body");
        assert_eq!(
            sent,
            serde_json::json!({ "from_name": "A", "reply_to": "b@c", "message": "m" })
        );
    }

    #[tokio::test]
    async fn test_http_relay_unreachable_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let relay = HttpRelay::new(format!("http://{addr}/f"));
        let mut state = filled();
        let form = state.begin_submit().expect("complete form");
        let res = submit_contact(&relay, &form).await;
        assert!(matches!(res, Err(ContactError::Transport(_))));

        state.finish_submit(res);
        let strings = &translations(Lang::En).contact;
        assert_eq!(state.message(strings), strings.conn_error);
        assert!(state.data.is_complete());
    }

    #[tokio::test]
    async fn test_success_clears_and_expires() {
        assert_eq!(SUCCESS_RESET, Duration::from_secs(5));
        let strings = &translations(Lang::En).contact;
        let relay = FakeRelay::answering(Ok(StatusCode::OK));
        let mut state = filled();
        let sent = state.data.clone();

        run(&mut state, &relay).await;

        assert_eq!(relay.seen.borrow().as_slice(), &[sent]);
        assert_eq!(state.status, FormStatus::Success);
        assert_eq!(state.message(strings), strings.success);
        assert_eq!(state.data, ContactForm::default());

        state.expire_success();
        assert_eq!(state.status, FormStatus::Idle);
        assert_eq!(state.message(strings), "");
    }

    #[tokio::test]
    async fn test_rejection_preserves_fields() {
        let strings = &translations(Lang::En).contact;
        let relay = FakeRelay::answering(Ok(StatusCode::UNPROCESSABLE_ENTITY));
        let mut state = filled();
        let entered = state.data.clone();

        run(&mut state, &relay).await;

        assert_eq!(
            state.status,
            FormStatus::Error(ContactError::Rejected(StatusCode::UNPROCESSABLE_ENTITY))
        );
        assert_eq!(state.message(strings), strings.error);
        assert_eq!(state.data, entered);

        // a stale reset timer must not clear the error
        state.expire_success();
        assert_eq!(state.message(strings), strings.error);
        assert_eq!(state.data, entered);
    }

    #[tokio::test]
    async fn test_transport_failure_has_distinct_message() {
        let strings = &translations(Lang::Pt).contact;
        let relay =
            FakeRelay::answering(Err(ContactError::Transport("dns error".to_string())));
        let mut state = filled();

        run(&mut state, &relay).await;

        assert!(matches!(
            state.status,
            FormStatus::Error(ContactError::Transport(_))
        ));
        assert_eq!(state.message(strings), strings.conn_error);
        assert_ne!(state.message(strings), strings.error);
        assert!(state.data.is_complete());
    }

    #[tokio::test]
    async fn test_resubmit_after_error() {
        let mut state = filled();
        run(&mut state, &FakeRelay::answering(Ok(StatusCode::BAD_GATEWAY))).await;
        assert!(matches!(state.status, FormStatus::Error(_)));

        run(&mut state, &FakeRelay::answering(Ok(StatusCode::CREATED))).await;
        assert_eq!(state.status, FormStatus::Success);
    }

    #[tokio::test]
    async fn test_pending_reset_spares_newer_submission() {
        let mut state = filled();
        run(&mut state, &FakeRelay::answering(Ok(StatusCode::OK))).await;
        assert_eq!(state.status, FormStatus::Success);

        state.data = filled().data;
        state.begin_submit().expect("second submit");
        // reset from the first success fires late
        state.expire_success();
        assert_eq!(state.status, FormStatus::Submitting);

        state.finish_submit(Err(ContactError::Rejected(StatusCode::BAD_REQUEST)));
        state.expire_success();
        assert!(matches!(state.status, FormStatus::Error(_)));
    }

    #[test]
    fn test_finish_ignored_when_not_submitting() {
        let mut state = filled();
        state.finish_submit(Ok(()));
        assert_eq!(state.status, FormStatus::Idle);
        assert!(state.data.is_complete());
    }

    #[test]
    fn test_wire_format() {
        let form = ContactForm {
            from_name: "Ana".to_string(),
            reply_to: "ana@example.com".to_string(),
            message: "Oi".to_string(),
        };
        let value = serde_json::to_value(&form).expect("form serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "from_name": "Ana",
                "reply_to": "ana@example.com",
                "message": "Oi",
            })
        );
    }
}
