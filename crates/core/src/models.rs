//! Data models for projectmgt
//!
//! Read-only snapshots of projects, tasks, users, clients and attachments.
//! Nothing here is mutated after construction.

use chrono::NaiveDate;
use serde::Serialize;

use crate::color::Color;
use crate::error::{CoreError, CoreResult};

/// Date format accepted by the task-creation form.
pub const FORM_DATE_FORMAT: &str = "%d.%m.%Y";

/// Human-readable form of [`FORM_DATE_FORMAT`] for error messages.
const FORM_DATE_HINT: &str = "DD.MM.YYYY";

/// Task status
///
/// Each variant carries its own display color and label. Status changes
/// are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    New,
    InProgress,
    Review,
    Done,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Status; 4] = [
        Status::New,
        Status::InProgress,
        Status::Review,
        Status::Done,
    ];

    /// Display color for the status dot and label.
    pub const fn color(self) -> Color {
        match self {
            Status::New => Color::from_argb(0xFF2C_C09C),
            Status::InProgress => Color::from_argb(0xFFF2_6950),
            Status::Review => Color::RED,
            Status::Done => Color::from_argb(0xFF5A_55CA),
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In Progress",
            Status::Review => "Review",
            Status::Done => "Done",
        }
    }

    /// Machine-readable name used in CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::New => "new",
            Status::InProgress => "in_progress",
            Status::Review => "review",
            Status::Done => "done",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A project member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Up to two uppercase initials, used where an avatar image would go.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// Avatar image URL for a square of `size` pixels.
    pub fn image_url_for_size(&self, size: u32) -> String {
        format!("https://i.pravatar.cc/{}?img={}", size, self.id)
    }
}

/// A task on the project timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Task number shown as `N° id`.
    pub id: u32,
    /// Display time-code (`DD.YY`), also the adjacency key for connectors.
    pub time_code: String,
    pub title: String,
    /// Tag with leading `#`.
    pub tag: String,
    pub status: Status,
    /// Ids of assigned users; the users themselves belong to the project.
    pub assignees: Vec<u32>,
    pub comment_count: u32,
    pub attachment_count: u32,
}

/// A project with its members and ordered tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub start_date: NaiveDate,
    pub days: u32,
    pub status: Status,
    /// Completion fraction in `[0, 1]`.
    pub progress: f32,
    pub users: Vec<User>,
    /// Tasks in display order, grouped by time-code.
    pub tasks: Vec<Task>,
}

impl Project {
    /// Start date as shown in the project header, e.g. `Dec 18, 2019`.
    pub fn date_label(&self) -> String {
        self.start_date.format("%b %d, %Y").to_string()
    }

    /// Duration as shown in the project header, e.g. `3 days`.
    pub fn days_label(&self) -> String {
        match self.days {
            1 => "1 day".to_string(),
            n => format!("{} days", n),
        }
    }

    /// Look up a project member by id.
    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Resolve a task's assignee ids to project members.
    ///
    /// Ids with no matching member are skipped.
    pub fn assignees<'a>(&'a self, task: &'a Task) -> impl Iterator<Item = &'a User> + 'a {
        task.assignees.iter().filter_map(move |id| self.user(*id))
    }
}

/// A client a project can be created for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    /// Logo URL, empty when the client has none.
    pub logo: String,
}

/// A file attached to a task draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub name: String,
    /// Size in kilobytes.
    pub size_kb: u32,
    /// Preview image URL.
    pub preview: String,
    /// Upload progress fraction in `[0, 1]`.
    pub progress: f32,
}

impl Attachment {
    /// Size as shown next to the attachment name, e.g. `168 KB`.
    pub fn size_label(&self) -> String {
        format!("{} KB", self.size_kb)
    }
}

/// Task category offered by the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Category {
    #[default]
    Design,
    Frontend,
    Backend,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Design, Category::Frontend, Category::Backend];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Design => "Design",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
        }
    }

    /// Tag text a task in this category carries.
    pub fn tag(self) -> String {
        format!("#{}", self.label())
    }

    /// The next category, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Category::Design => Category::Frontend,
            Category::Frontend => Category::Backend,
            Category::Backend => Category::Design,
        }
    }

    /// The previous category, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Category::Design => Category::Backend,
            Category::Frontend => Category::Design,
            Category::Backend => Category::Frontend,
        }
    }
}

/// Start and end dates entered on the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectTimeline {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ProjectTimeline {
    /// Parse both dates in `DD.MM.YYYY` form.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if either date does not parse.
    /// Returns `CoreError::InvertedTimeline` if the end is before the start.
    pub fn parse(start: &str, end: &str) -> CoreResult<Self> {
        let start = parse_form_date(start)?;
        let end = parse_form_date(end)?;

        if end < start {
            return Err(CoreError::InvertedTimeline {
                start: start.format(FORM_DATE_FORMAT).to_string(),
                end: end.format(FORM_DATE_FORMAT).to_string(),
            });
        }

        Ok(Self { start, end })
    }

    /// Number of days between start and end.
    pub fn days(&self) -> u32 {
        (self.end - self.start).num_days().max(0) as u32
    }
}

fn parse_form_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), FORM_DATE_FORMAT).map_err(|_| {
        CoreError::InvalidDate {
            value: value.to_string(),
            format: FORM_DATE_HINT,
        }
    })
}
