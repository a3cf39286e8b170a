//! Google Classroom v1 client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{WorkspaceClient, error::ServiceError, http::check_response};

const COURSES_URL: &str = "https://classroom.googleapis.com/v1/courses";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<UserName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Deserialize)]
struct CourseListResponse {
    #[serde(default)]
    courses: Vec<Course>,
}

#[derive(Deserialize)]
struct StudentListResponse {
    #[serde(default)]
    students: Vec<Student>,
}

impl WorkspaceClient {
    /// List courses taught by `teacher_id` (`"me"` for the signed-in user).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails, Classroom returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn classroom_list_courses(
        &self,
        token: &str,
        teacher_id: &str,
    ) -> Result<Vec<Course>, ServiceError> {
        let url = format!("{COURSES_URL}?teacherId={}", urlencoding::encode(teacher_id));
        let resp = check_response(self.http.get(&url).bearer_auth(token).send().await?).await?;
        let data: CourseListResponse = resp.json().await?;
        Ok(data.courses)
    }

    /// List the students enrolled in a course.
    ///
    /// # Errors
    ///
    /// Same as [`classroom_list_courses`](Self::classroom_list_courses).
    pub async fn classroom_list_students(
        &self,
        token: &str,
        course_id: &str,
    ) -> Result<Vec<Student>, ServiceError> {
        let url = format!("{COURSES_URL}/{}/students", urlencoding::encode(course_id));
        let resp = check_response(self.http.get(&url).bearer_auth(token).send().await?).await?;
        let data: StudentListResponse = resp.json().await?;
        Ok(data.students)
    }
}
