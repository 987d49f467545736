use crate::models::SpeedStatus;
use crate::types::StatusTone;

/// One block of the help tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub title: &'static str,
    pub body: String,
}

/// Contents of the help tab
pub fn help_sections() -> Vec<HelpSection> {
    let statuses = [
        (SpeedStatus::Excellent, "excellent speed"),
        (SpeedStatus::Good, "good"),
        (SpeedStatus::Average, "average"),
    ]
    .iter()
    .map(|(status, meaning)| {
        format!("{} ({}) - {}", status, StatusTone::from_status(status).name(), meaning)
    })
    .collect::<Vec<_>>()
    .join(", ");

    vec![
        HelpSection {
            title: "Sorting data",
            body: "Select any column header to sort ascending or descending".to_string(),
        },
        HelpSection {
            title: "Search and filtering",
            body: "Use the search field to quickly find services, test types or locations".to_string(),
        },
        HelpSection {
            title: "Speed statuses",
            body: statuses,
        },
    ]
}
