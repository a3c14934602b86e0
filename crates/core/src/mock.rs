//! In-memory sample data shown by the screens.

use chrono::NaiveDate;

use crate::models::{Attachment, Client, Project, Status, Task, User};

const ZACHARY: u32 = 2;
const MARY: u32 = 3;
const SARAH: u32 = 4;

#[allow(clippy::too_many_arguments)]
fn task(
    id: u32,
    time_code: &str,
    title: &str,
    tag: &str,
    status: Status,
    assignees: &[u32],
    comment_count: u32,
    attachment_count: u32,
) -> Task {
    Task {
        id,
        time_code: time_code.to_string(),
        title: title.to_string(),
        tag: tag.to_string(),
        status,
        assignees: assignees.to_vec(),
        comment_count,
        attachment_count,
    }
}

/// The sample project: four two-task groups with descending time-codes.
pub fn mock_project() -> Project {
    Project {
        id: 1,
        title: "Create additional pages".to_string(),
        start_date: NaiveDate::from_ymd_opt(2019, 12, 18).unwrap_or(NaiveDate::MIN),
        days: 3,
        status: Status::InProgress,
        progress: 0.85,
        users: vec![
            User::new(MARY, "Mary Brown"),
            User::new(SARAH, "Sarah Murphy"),
            User::new(ZACHARY, "Zachary Butler"),
        ],
        tasks: vec![
            task(163, "24.19", "Contact page", "#Design", Status::InProgress, &[ZACHARY], 3, 5),
            task(158, "24.19", "Calculator page", "#Design", Status::Done, &[SARAH, MARY], 8, 2),
            task(157, "23.19", "Technical Task", "#Frontend", Status::Review, &[ZACHARY], 4, 8),
            task(159, "23.19", "Calculator page", "#Backend", Status::Done, &[MARY], 4, 6),
            task(163, "22.19", "Contact page", "#Design", Status::InProgress, &[ZACHARY], 3, 5),
            task(158, "22.19", "Calculator page", "#Design", Status::Done, &[SARAH, MARY], 8, 2),
            task(157, "21.19", "Technical Task", "#Frontend", Status::Review, &[ZACHARY], 4, 8),
            task(159, "21.19", "Calculator page", "#Backend", Status::Done, &[MARY], 4, 6),
        ],
    }
}

/// Clients offered by the creation form.
pub fn mock_clients() -> Vec<Client> {
    ["Awsmd Team", "Google", "Airbnb"]
        .iter()
        .enumerate()
        .map(|(id, name)| Client {
            id: id as u32,
            name: name.to_string(),
            logo: String::new(),
        })
        .collect()
}

/// The attachment pre-filled on the creation form.
pub fn mock_attachment() -> Attachment {
    Attachment {
        name: "Reference_1".to_string(),
        size_kb: 168,
        preview: "https://i.pravatar.cc/200?img=50".to_string(),
        progress: 0.8,
    }
}
