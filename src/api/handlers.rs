//! API handlers

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::api::AppState;
use crate::error::Error;
use crate::types::{Employee, PayrollRecord, User, UserId};

const DEFAULT_EMPLOYEE_ID: &str = "1";
const USER_NOT_FOUND: &str = "User not found";

/// Look up a user by the integer id in the path
///
/// Segments that are not plain decimal digits never reach the lookup and get
/// a bare 404, the same as an unmatched route.
pub async fn get_user(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(segment) = segment.ok().and_then(|Path(raw)| UserIdSegment::parse(&raw)) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match find_user(&state, segment) {
        Ok(user) => Json(user).into_response(),
        Err(err) => err.into_response(),
    }
}

fn find_user(state: &AppState, segment: UserIdSegment) -> Result<User, ApiError> {
    let id = match segment {
        UserIdSegment::Id(id) => id,
        UserIdSegment::OutOfRange => return Err(ApiError::not_found(USER_NOT_FOUND)),
    };

    state
        .users
        .find(id)
        .cloned()
        .ok_or(Error::UserNotFound(id))
        .map_err(ApiError::from)
}

/// A path segment made only of ASCII digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserIdSegment {
    Id(UserId),
    /// Valid digits, but larger than any id we can store
    OutOfRange,
}

impl UserIdSegment {
    fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(match raw.parse::<UserId>() {
            Ok(id) => UserIdSegment::Id(id),
            Err(_) => UserIdSegment::OutOfRange,
        })
    }
}

/// Fixed employee record; `id` is only echoed to the log
pub async fn get_employee(query: Option<Query<Vec<(String, String)>>>) -> Json<Employee> {
    let emp_id = requested_id(query.as_ref().map(|Query(params)| params.as_slice()));

    let employee = Employee::fixed();

    tracing::info!(
        id = %emp_id,
        "[JSON Service] Responded with employee {} in JSON format",
        emp_id
    );
    Json(employee)
}

/// Fixed payroll record rendered as XML; `id` is only echoed to the log
pub async fn get_payroll(
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Response, ApiError> {
    let emp_id = requested_id(query.as_ref().map(|Query(params)| params.as_slice()));

    let xml = PayrollRecord::fixed().to_element().to_xml_string()?;

    tracing::info!(
        id = %emp_id,
        "[XML Service] Responded with payroll for employee {} in XML format",
        emp_id
    );
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

/// First `id` query value, or `"1"` when absent
fn requested_id(params: Option<&[(String, String)]>) -> &str {
    params
        .and_then(|params| params.iter().find(|(key, _)| key == "id"))
        .map(|(_, value)| value.as_str())
        .unwrap_or(DEFAULT_EMPLOYEE_ID)
}

/// Error body returned as `{"error": message}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::UserNotFound(_) => ApiError::not_found(USER_NOT_FOUND),
            other => {
                tracing::error!(error = %other, "Request failed");
                ApiError::internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_user_id_segment_parsing() {
        assert_eq!(UserIdSegment::parse("1"), Some(UserIdSegment::Id(1)));
        assert_eq!(UserIdSegment::parse("007"), Some(UserIdSegment::Id(7)));
        assert_eq!(
            UserIdSegment::parse("99999999999999999999999"),
            Some(UserIdSegment::OutOfRange)
        );

        assert_eq!(UserIdSegment::parse(""), None);
        assert_eq!(UserIdSegment::parse("abc"), None);
        assert_eq!(UserIdSegment::parse("-1"), None);
        assert_eq!(UserIdSegment::parse("+1"), None);
        assert_eq!(UserIdSegment::parse("1.5"), None);
    }

    #[test]
    fn test_requested_id_defaults_and_first_wins() {
        assert_eq!(requested_id(None), "1");
        assert_eq!(requested_id(Some(params(&[("other", "x")]).as_slice())), "1");
        assert_eq!(requested_id(Some(params(&[("id", "42")]).as_slice())), "42");
        assert_eq!(
            requested_id(Some(params(&[("id", "first"), ("id", "second")]).as_slice())),
            "first"
        );
        assert_eq!(requested_id(Some(params(&[("id", "")]).as_slice())), "");
    }

    #[tokio::test]
    async fn test_employee_logs_requested_id_once() {
        let (logs, _guard) = capture_logs();

        let Json(employee) = get_employee(Some(Query(params(&[("id", "42")])))).await;
        assert_eq!(employee, Employee::fixed());

        let output = logs.contents();
        let lines: Vec<&str> = output
            .lines()
            .filter(|line| {
                line.contains("[JSON Service] Responded with employee 42 in JSON format")
            })
            .collect();
        assert_eq!(lines.len(), 1, "captured: {output}");
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("id=42"));
        assert_eq!(output.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_payroll_logs_default_id_once() {
        let (logs, _guard) = capture_logs();

        let response = get_payroll(None).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = logs.contents();
        let lines: Vec<&str> = output
            .lines()
            .filter(|line| {
                line.contains("[XML Service] Responded with payroll for employee 1 in XML format")
            })
            .collect();
        assert_eq!(lines.len(), 1, "captured: {output}");
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("id=1"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_error_mapping() {
        let err = ApiError::from(Error::UserNotFound(9));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "User not found");

        let err = ApiError::from(Error::xml("broken"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
