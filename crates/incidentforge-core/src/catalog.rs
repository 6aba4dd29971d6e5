use chrono::{NaiveDate, NaiveDateTime};

/// Ticket lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    InProgress,
    OnHold,
    Resolved,
    Closed,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Open,
        Status::InProgress,
        Status::OnHold,
        Status::Resolved,
        Status::Closed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In progress",
            Status::OnHold => "On hold",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }

    /// Relative sampling weight; terminal states dominate.
    pub fn weight(self) -> u32 {
        match self {
            Status::Open => 5,
            Status::InProgress => 10,
            Status::OnHold => 5,
            Status::Resolved => 50,
            Status::Closed => 30,
        }
    }
}

/// Ticket severity, P1 highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::P1, Priority::P2, Priority::P3, Priority::P4];

    pub fn label(self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        }
    }

    /// Relative sampling weight; mid and low severities dominate.
    pub fn weight(self) -> u32 {
        match self {
            Priority::P1 => 5,
            Priority::P2 => 15,
            Priority::P3 => 50,
            Priority::P4 => 30,
        }
    }

    /// Maximum allowed resolution time in hours for this severity.
    pub fn sla_target_hours(self) -> u32 {
        match self {
            Priority::P1 => 4,
            Priority::P2 => 8,
            Priority::P3 => 24,
            Priority::P4 => 72,
        }
    }
}

pub const CATEGORIES: [&str; 6] = [
    "Hardware", "Software", "Network", "Access", "MDM", "Security",
];

pub const SUBCATEGORIES: [&str; 8] = [
    "Enrollment",
    "Policy sync",
    "App install",
    "Password reset",
    "WiFi",
    "Display",
    "MDM profile",
    "Antivirus",
];

pub const ASSIGNMENT_GROUPS: [&str; 4] = ["Service Desk", "MDM", "Endpoint", "Network"];

pub const CHANNELS: [&str; 4] = ["Email", "Portal", "Phone", "Chat"];

/// Inclusive lower bound of the `created_at` window.
pub fn window_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap_or_default()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
}

/// Exclusive upper bound of the `created_at` window.
pub fn window_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap_or_default()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
}
