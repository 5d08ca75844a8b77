pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generate::handlers as generate;
use crate::resume::handlers as resume;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/score", post(scoring::handle_score))
        .route("/compare", post(scoring::handle_compare))
        .route("/extract-keywords", post(scoring::handle_extract_keywords))
        // Résumé upload
        .route("/parse-resume", post(resume::handle_parse_resume))
        // Résumé generation
        .route("/generate-resume", post(generate::handle_generate_resume))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body, Bytes},
        http::{header, HeaderMap, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::generate::docx::render_docx;
    use crate::generate::model::{LineStyle, ResumeLine};
    use crate::resume::parser::{extract_docx_text, DOCX_MIME};
    use crate::scoring::engine::AtsEngine;

    fn app_with(config: Config) -> Router {
        build_router(AppState {
            engine: Arc::new(AtsEngine::new().unwrap()),
            config,
        })
    }

    async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, bytes)
    }

    async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, _, bytes) = send_raw(app, request).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(app_with(Config::default()), request).await
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_upload(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let boundary = "X-ATS-TEST-BOUNDARY";
        let mut body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method(Method::POST)
            .uri("/parse-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    const RESUME: &str = "I have 5 years experience as a Python developer with React and Django skills. Contact: a@b.com Education: BS CS. Skills: Python, React, Django.";
    const JD: &str = "Looking for Python developer with Django and AWS experience.";

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "ats-scorer");
    }

    #[tokio::test]
    async fn test_score_returns_report() {
        let (status, body) = send(post_json(
            "/score",
            json!({ "resume_text": RESUME, "job_description": JD }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched_skills"], json!(["django", "python"]));
        assert_eq!(body["missing_skills"], json!(["aws"]));
        assert_eq!(body["match_percentage"], json!(66.67));
        assert_eq!(body["ats_score"], json!(53.5));
        assert_eq!(body["score_breakdown"]["experience_relevance"], json!(7.5));
        assert_eq!(body["suggestions"][0]["priority"], "high");
        assert_eq!(body["experience_level"], "unknown");
    }

    #[tokio::test]
    async fn test_score_rejects_blank_fields() {
        let (status, body) = send(post_json(
            "/score",
            json!({ "resume_text": "  ", "job_description": JD }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_score_rejects_missing_fields() {
        let (status, _) = send(post_json("/score", json!({ "resume_text": RESUME }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_compare_returns_counts() {
        let (status, body) = send(post_json(
            "/compare",
            json!({ "resume_text": RESUME, "job_description": JD }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_jd_skills"], 3);
        assert_eq!(body["total_resume_skills"], 3);
        assert_eq!(body["missing_skills"], json!(["aws"]));
    }

    #[tokio::test]
    async fn test_compare_rejects_empty_job_description() {
        let (status, _) = send(post_json(
            "/compare",
            json!({ "resume_text": RESUME, "job_description": "" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_keywords() {
        let (status, body) = send(post_json(
            "/extract-keywords",
            json!({ "text": "Kubernetes, Docker and C++" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywords"], json!(["c++", "docker", "kubernetes"]));
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn test_extract_keywords_requires_text() {
        let (status, _) = send(post_json("/extract-keywords", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_resume_plain_text() {
        let (status, body) = send(multipart_upload(
            "resume",
            "cv.txt",
            "text/plain",
            b"Jane Doe\n\nRust   engineer",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "cv.txt");
        assert_eq!(body["content"], "Jane Doe Rust engineer");
        assert_eq!(body["filesize"], 25);
    }

    #[tokio::test]
    async fn test_parse_resume_docx() {
        let docx = render_docx(&[
            ResumeLine {
                style: LineStyle::Title,
                text: "Jane Doe".to_string(),
            },
            ResumeLine {
                style: LineStyle::Body,
                text: "Rust engineer, 6 years".to_string(),
            },
        ])
        .unwrap();
        let (status, body) = send(multipart_upload("resume", "cv.docx", DOCX_MIME, &docx)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "cv.docx");
        assert_eq!(body["content"], "Jane Doe Rust engineer, 6 years");
        assert_eq!(body["filesize"], docx.len());
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_unknown_format() {
        let (status, body) = send(multipart_upload(
            "resume",
            "cv.odt",
            "application/vnd.oasis.opendocument.text",
            b"PK",
        ))
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_parse_resume_corrupt_docx_is_unprocessable() {
        let (status, _) = send(multipart_upload("resume", "cv.docx", DOCX_MIME, b"PK garbage")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_parse_resume_requires_resume_field() {
        let (status, _) = send(multipart_upload("other", "cv.txt", "text/plain", b"hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    fn small_limit_app() -> Router {
        app_with(Config {
            max_upload_bytes: 64,
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn test_oversized_upload_is_413() {
        let data = vec![b'a'; 1024];
        let (status, body) = send_to(
            small_limit_app(),
            multipart_upload("resume", "cv.txt", "text/plain", &data),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_oversized_json_is_413() {
        let (status, body) = send_to(
            small_limit_app(),
            post_json(
                "/score",
                json!({ "resume_text": "rust ".repeat(200), "job_description": JD }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_small_json_fits_under_limit() {
        let (status, _) = send_to(
            small_limit_app(),
            post_json("/extract-keywords", json!({ "text": "rust" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    fn resume_data() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "(555) 123-4567",
            "summary": "Backend engineer with 6 years of Rust.",
            "skills": ["Rust", "Docker", "AWS"],
            "experience": [
                { "title": "Engineer", "company": "Acme", "duration": "2019 - 2025",
                  "description": "Built payment services." }
            ],
            "education": [
                { "degree": "BSc", "field": "Computer Science", "school": "State U", "year": "2018" }
            ]
        })
    }

    #[tokio::test]
    async fn test_generate_docx_attachment() {
        let (status, headers, bytes) = send_raw(
            app_with(Config::default()),
            post_json(
                "/generate-resume",
                json!({ "resume_data": resume_data(), "format": "docx" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], DOCX_MIME);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"ats-friendly-resume.docx\""
        );

        let text = extract_docx_text(&bytes).unwrap();
        assert!(text.starts_with("Jane Doe\njane@example.com | (555) 123-4567\n"));
        assert!(text.contains("SKILLS\nRust, Docker, AWS\n"));
        assert!(text.contains("Engineer at Acme"));
        assert!(text.contains("State U, 2018"));
    }

    #[tokio::test]
    async fn test_generate_pdf_attachment() {
        let (status, headers, bytes) = send_raw(
            app_with(Config::default()),
            post_json(
                "/generate-resume",
                json!({ "resume_data": resume_data(), "format": "pdf" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_generate_requires_resume_data() {
        let (status, body) = send(post_json("/generate-resume", json!({ "format": "pdf" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "resume_data is required");

        let (status, _) = send(post_json(
            "/generate-resume",
            json!({ "resume_data": {}, "format": "pdf" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_rejects_unknown_format() {
        let (status, body) = send(post_json(
            "/generate-resume",
            json!({ "resume_data": resume_data(), "format": "odt" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "format must be pdf or docx");
    }
}
