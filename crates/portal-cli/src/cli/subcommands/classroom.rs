use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum ClassroomCommands {
    /// Courses you teach.
    Courses,
    /// Students enrolled in a course.
    Roster(ClassroomRosterArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ClassroomRosterArgs {
    pub course_id: String,
}
