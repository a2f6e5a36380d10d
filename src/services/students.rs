//! Student lookup service (read-only; students come from the academic system)

use crate::{
    error::AppResult,
    models::student::{Student, StudentQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search students with pagination
    pub async fn search(&self, query: &StudentQuery) -> AppResult<(Vec<Student>, i64)> {
        self.repository.students_search(query).await
    }

    /// Get a student by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Student> {
        self.repository.students_get_by_id(id).await
    }
}
