//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{Local, TimeZone};
use minidash::models::{DashboardStats, Mode, Researcher, SurveyStatus};
use serde_json::{json, Value};

pub fn fixed_now() -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, 22, 14, 30, 5)
        .single()
        .expect("unambiguous local time")
}

pub fn researcher(id: &str, name: &str, mode: Mode, status: SurveyStatus) -> Researcher {
    Researcher {
        id: id.to_string(),
        name: name.to_string(),
        mobile: format!("+1-555-01{:0>2}", id),
        email: format!("{}@hospital.org", id),
        unit: "Cardiology".to_string(),
        specialty: "Interventional Cardiology".to_string(),
        department: "Cardiology".to_string(),
        zsm: "Michael Chen".to_string(),
        bdm: "Lisa Rodriguez".to_string(),
        mode,
        status,
        completion_date: match status {
            SurveyStatus::Completed => Some("2024-01-15".to_string()),
            _ => None,
        },
        location: "Boston MA".to_string(),
        experience: 12,
        rating: 4.6,
        last_activity: "2 hours ago".to_string(),
        survey_progress: match status {
            SurveyStatus::Completed => 100,
            SurveyStatus::InProgress => 65,
            SurveyStatus::Pending => 10,
            SurveyStatus::NotStarted => 0,
        },
        join_date: "2023-03-01".to_string(),
        designation: "Senior Consultant".to_string(),
        emp1_mobile: String::new(),
        emp2_mobile: String::new(),
    }
}

/// Four researchers, one per status, two per mode.
pub fn roster() -> Vec<Researcher> {
    let mut oncology = researcher("2", "Dr. Emily Davis", Mode::Gc, SurveyStatus::InProgress);
    oncology.unit = "Oncology".to_string();
    oncology.specialty = "Medical Oncology".to_string();
    oncology.department = "Oncology".to_string();
    oncology.zsm = "Sarah Kim".to_string();
    oncology.location = "Chicago IL".to_string();

    let mut neuro = researcher("3", "Dr. Robert Kim", Mode::Cp, SurveyStatus::Pending);
    neuro.unit = "Neurology".to_string();
    neuro.specialty = "Neurophysiology".to_string();
    neuro.department = String::new();
    neuro.location = "Chicago IL".to_string();

    vec![
        researcher("1", "Dr. Sarah Johnson", Mode::Cp, SurveyStatus::Completed),
        oncology,
        neuro,
        researcher("4", "Dr. James Wilson", Mode::Gc, SurveyStatus::NotStarted),
    ]
}

pub fn stats() -> DashboardStats {
    DashboardStats {
        total_researchers: 40,
        completed_surveys: 18,
        in_progress_surveys: 9,
        pending_surveys: 8,
        not_started_surveys: 5,
        cp_researchers: 22,
        gc_researchers: 18,
        completion_rate: 45,
    }
}

pub fn researcher_json(id: u32, name: &str, mode: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "mobile": "+1-555-0101",
        "email": "doctor@hospital.org",
        "unit": "Cardiology",
        "specialty": "Interventional Cardiology",
        "department": "Cardiology",
        "zsm": "Michael Chen",
        "bdm": "Lisa Rodriguez",
        "mode": mode,
        "status": status,
        "completionDate": null,
        "location": "Boston MA",
        "experience": 12,
        "rating": 4.8,
        "lastActivity": "2 hours ago",
        "surveyProgress": 40,
        "joinDate": "2023-03-01",
        "designation": "Consultant",
        "emp1_mobile": null,
        "emp2_mobile": null
    })
}

pub fn researchers_body(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({ "success": true, "researchers": items, "total": total })
}

pub fn stats_body() -> Value {
    json!({
        "success": true,
        "stats": {
            "totalResearchers": 40,
            "completedSurveys": 18,
            "inProgressSurveys": 9,
            "pendingSurveys": 8,
            "notStartedSurveys": 5,
            "cpResearchers": 22,
            "gcResearchers": 18,
            "completionRate": 45
        }
    })
}
