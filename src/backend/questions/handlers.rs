use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::questions::db::{QuestionRecord, QuestionRepository};

#[derive(Serialize, Debug)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionRecord>,
}

/// GET /questions
pub async fn list_questions(
    State(questions): State<Arc<QuestionRepository>>,
) -> Result<Json<QuestionsResponse>, BackendError> {
    let questions = questions.list_all().await.map_err(BackendError::Questions)?;
    tracing::debug!("Returning {} questions", questions.len());

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
    }))
}
