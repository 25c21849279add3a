use axum::{response::Html, Json};
use utoipa::OpenApi;

use crate::admin::handlers as admin;
use crate::assessment::handlers as assessment;
use crate::errors::ErrorBody;
use crate::feedback::handlers as feedback;
use crate::models::analytics::{FeedbackQuestionStats, TraitStats, UserTypeStats};
use crate::models::assessment::Assessment;
use crate::models::feedback::Feedback;
use crate::models::user::{User, UserType};
use crate::routes::health;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personality Assessment API",
        description = "Backend server for personality assessment application"
    ),
    paths(
        health::health_handler,
        assessment::submit_assessment,
        assessment::get_assessment,
        feedback::submit_feedback,
        admin::list_users,
        admin::list_assessments,
        admin::list_feedbacks,
        admin::user_analytics,
        admin::assessment_analytics,
        admin::feedback_analytics,
    ),
    components(schemas(
        assessment::AssessmentSubmission,
        assessment::AssessmentSubmitted,
        assessment::AssessmentView,
        assessment::UserData,
        feedback::FeedbackSubmission,
        feedback::FeedbackSubmitted,
        User,
        UserType,
        Assessment,
        Feedback,
        UserTypeStats,
        TraitStats,
        FeedbackQuestionStats,
        ErrorBody,
    ))
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Personality Assessment API Docs</title>
  <meta charset="utf-8" />
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>"##;

/// GET /docs
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}
