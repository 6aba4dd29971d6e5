use chrono::NaiveDateTime;

use crate::catalog::{Priority, Status};

/// Column order of the output file. One entry per `IncidentRecord` field.
pub const FIELD_NAMES: [&str; 17] = [
    "ticket_id",
    "created_at",
    "resolved_at",
    "status",
    "priority",
    "category",
    "subcategory",
    "short_description",
    "asset_id",
    "assigned_group",
    "assignee",
    "channel",
    "sla_target_hours",
    "time_to_respond_minutes",
    "time_to_resolve_minutes",
    "breached_sla",
    "customer_sat_score",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One synthetic help-desk incident row.
///
/// `resolved_at` is always `created_at` plus the resolution duration, and
/// `breached_sla` compares that duration against the priority's SLA target.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentRecord {
    pub ticket_id: String,
    pub created_at: NaiveDateTime,
    pub resolved_at: NaiveDateTime,
    pub status: Status,
    pub priority: Priority,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub short_description: String,
    pub asset_id: String,
    pub assigned_group: &'static str,
    pub assignee: String,
    pub channel: &'static str,
    pub sla_target_hours: u32,
    pub time_to_respond_minutes: u32,
    pub time_to_resolve_minutes: i64,
    pub breached_sla: bool,
    pub customer_sat_score: u8,
}

impl IncidentRecord {
    /// Field values in `FIELD_NAMES` order, rendered for the delimited output.
    pub fn to_fields(&self) -> [String; 17] {
        let breached = if self.breached_sla { "Yes" } else { "No" };
        [
            self.ticket_id.clone(),
            self.created_at.format(TIMESTAMP_FORMAT).to_string(),
            self.resolved_at.format(TIMESTAMP_FORMAT).to_string(),
            self.status.label().to_string(),
            self.priority.label().to_string(),
            self.category.to_string(),
            self.subcategory.to_string(),
            self.short_description.clone(),
            self.asset_id.clone(),
            self.assigned_group.to_string(),
            self.assignee.clone(),
            self.channel.to_string(),
            self.sla_target_hours.to_string(),
            self.time_to_respond_minutes.to_string(),
            self.time_to_resolve_minutes.to_string(),
            breached.to_string(),
            self.customer_sat_score.to_string(),
        ]
    }
}
