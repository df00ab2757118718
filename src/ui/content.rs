//! Fixed text shown on the survey-status, schedule and help pages.

use crate::models::SurveyStatus;

pub const TITLE: &str = "WMEFI Access Dashboard";
pub const BRAND: &str = "WMEFI";
pub const BRAND_SUBTITLE: &str = "Access Dashboard";
pub const SEARCH_PLACEHOLDER: &str = "Search by name, specialty, manager, territory, mobile...";

pub struct Activity {
    pub name: &'static str,
    pub action: &'static str,
    pub time: &'static str,
    pub status: SurveyStatus,
}

pub const RECENT_ACTIVITIES: [Activity; 5] = [
    Activity {
        name: "Dr. Sarah Johnson",
        action: "Completed survey",
        time: "2 hours ago",
        status: SurveyStatus::Completed,
    },
    Activity {
        name: "Dr. David Miller",
        action: "Completed survey",
        time: "30 minutes ago",
        status: SurveyStatus::Completed,
    },
    Activity {
        name: "Dr. Lisa Wang",
        action: "Started survey",
        time: "4 hours ago",
        status: SurveyStatus::InProgress,
    },
    Activity {
        name: "Dr. Thomas Anderson",
        action: "Updated progress",
        time: "6 hours ago",
        status: SurveyStatus::InProgress,
    },
    Activity {
        name: "Dr. Jennifer Lee",
        action: "Completed survey",
        time: "1 hour ago",
        status: SurveyStatus::Completed,
    },
];

pub struct Appointment {
    pub time: &'static str,
    pub researcher: &'static str,
    pub kind: &'static str,
}

pub const TODAYS_SCHEDULE: [Appointment; 4] = [
    Appointment {
        time: "09:00 AM",
        researcher: "Dr. Sarah Johnson",
        kind: "Follow-up Call",
    },
    Appointment {
        time: "11:30 AM",
        researcher: "Dr. Robert Kim",
        kind: "Survey Review",
    },
    Appointment {
        time: "02:00 PM",
        researcher: "Dr. Emily Davis",
        kind: "Initial Contact",
    },
    Appointment {
        time: "04:30 PM",
        researcher: "Dr. James Wilson",
        kind: "Progress Check",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

pub struct Deadline {
    pub date: &'static str,
    pub researcher: &'static str,
    pub task: &'static str,
    pub priority: Priority,
}

pub const DEADLINES: [Deadline; 4] = [
    Deadline {
        date: "Jan 25",
        researcher: "Dr. Maria Garcia",
        task: "Survey Completion",
        priority: Priority::High,
    },
    Deadline {
        date: "Jan 27",
        researcher: "Dr. Thomas Anderson",
        task: "Progress Review",
        priority: Priority::Medium,
    },
    Deadline {
        date: "Jan 30",
        researcher: "Dr. Amanda Taylor",
        task: "Initial Survey",
        priority: Priority::Low,
    },
    Deadline {
        date: "Feb 02",
        researcher: "Dr. Christopher Davis",
        task: "Follow-up",
        priority: Priority::Medium,
    },
];

/// (title, description)
pub const HELP_RESOURCES: [(&str, &str); 3] = [
    (
        "Documentation",
        "Comprehensive guides and tutorials for using the dashboard",
    ),
    ("Video Tutorials", "Step-by-step video guides for common tasks"),
    ("Live Chat", "Get instant help from our support team"),
];

/// (question, answer)
pub const FAQ: [(&str, &str); 3] = [
    (
        "How do I add a new researcher to the system?",
        "Click the 'Add Researcher' button in the Researchers section and fill out the required information including name, contact details, and assignment.",
    ),
    (
        "How can I track survey completion progress?",
        "Navigate to the Survey Status page where you can see real-time progress for each researcher, including completion percentages and status updates.",
    ),
    (
        "How do I export survey data?",
        "Press 'e' on the dashboard to export the filtered table, or go to Settings > Data Export.",
    ),
];

pub const SUPPORT_EMAIL: &str = "connect@wmefi.co.in";
pub const SUPPORT_PHONE: &str = "+91 919920154297";
pub const BUSINESS_HOURS: [&str; 2] = [
    "Monday - Friday: 9:00 AM - 6:00 PM EST",
    "Saturday: 10:00 AM - 4:00 PM EST",
];
