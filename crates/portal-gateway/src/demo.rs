//! Fixed responses served while the gateway runs in demo mode.
//!
//! Everything here is deterministic: the same call always yields the same
//! data, and nothing touches the network.

use portal_core::Profile;
use portal_workspace::{
    Course, DriveFile, FileUpload, ListFilesRequest, SendResult, Student, UserName, UserProfile,
};
use serde_json::Map;

pub const DEMO_NAME: &str = "Demo Teacher";
pub const DEMO_EMAIL: &str = "demo.teacher@school.edu";
pub const DEMO_AVATAR: &str = "https://via.placeholder.com/100x100/4285f4/white?text=DT";

pub const DEMO_COURSE_ID: &str = "demo-course-1";
const DEMO_TIMESTAMP: &str = "2024-09-03T08:00:00.000Z";

/// The placeholder identity used for demo sign-in.
#[must_use]
pub fn profile() -> Profile {
    Profile::new(DEMO_NAME, DEMO_EMAIL, DEMO_AVATAR)
}

fn file(id: &str, name: &str, mime_type: &str) -> DriveFile {
    DriveFile {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: Some(mime_type.to_string()),
        created_time: Some(DEMO_TIMESTAMP.to_string()),
        extra: Map::new(),
    }
}

const SAMPLE_FILES: [(&str, &str, &str); 4] = [
    ("demo-file-1", "Plant Life Cycle Lesson.pdf", "application/pdf"),
    ("demo-file-2", "Simple Machines Lab Worksheet", "application/vnd.google-apps.document"),
    ("demo-file-3", "Rock Cycle Diagram.png", "image/png"),
    ("demo-file-4", "Engineering Design Rubric", "application/vnd.google-apps.spreadsheet"),
];

/// Sample Drive listing, truncated to the requested page size.
#[must_use]
pub fn files(request: &ListFilesRequest) -> Vec<DriveFile> {
    let limit = usize::try_from(request.page_size).unwrap_or(usize::MAX);
    SAMPLE_FILES
        .iter()
        .take(limit)
        .map(|(id, name, mime)| file(id, name, mime))
        .collect()
}

/// What Drive would have returned for `upload`.
#[must_use]
pub fn uploaded(upload: &FileUpload) -> DriveFile {
    let mime_type = upload
        .metadata
        .mime_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    file("demo-upload-1", &upload.metadata.name, mime_type)
}

#[must_use]
pub fn courses() -> Vec<Course> {
    vec![Course {
        id: DEMO_COURSE_ID.to_string(),
        name: "Grade 4 Science".to_string(),
        section: Some("Period 2".to_string()),
        description: Some("Hands-on STEM activities".to_string()),
        course_state: Some("ACTIVE".to_string()),
        extra: Map::new(),
    }]
}

const SAMPLE_STUDENTS: [(&str, &str, &str); 3] = [
    ("demo-student-1", "Maya", "Lopez"),
    ("demo-student-2", "Jordan", "Kim"),
    ("demo-student-3", "Sam", "Okafor"),
];

/// Fixed roster, tagged with the requested course id.
#[must_use]
pub fn roster(course_id: &str) -> Vec<Student> {
    SAMPLE_STUDENTS
        .iter()
        .map(|(id, given, family)| Student {
            course_id: course_id.to_string(),
            user_id: (*id).to_string(),
            profile: Some(UserProfile {
                id: (*id).to_string(),
                name: Some(UserName {
                    given_name: (*given).to_string(),
                    family_name: (*family).to_string(),
                    full_name: format!("{given} {family}"),
                }),
                email_address: Some(format!(
                    "{}.{}@school.edu",
                    given.to_lowercase(),
                    family.to_lowercase()
                )),
                extra: Map::new(),
            }),
            extra: Map::new(),
        })
        .collect()
}

#[must_use]
pub fn sent() -> SendResult {
    SendResult {
        id: "demo-message-1".to_string(),
        thread_id: "demo-thread-1".to_string(),
        label_ids: vec!["SENT".to_string()],
    }
}
