use chrono::Duration;
use rand::Rng;
use rand::seq::IndexedRandom;

use incidentforge_core::catalog::{
    ASSIGNMENT_GROUPS, CATEGORIES, CHANNELS, Priority, SUBCATEGORIES, Status, window_end,
    window_start,
};
use incidentforge_core::record::IncidentRecord;

const TICKET_PREFIX: &str = "INC";
const RESOLUTION_MINUTES_MIN: i64 = 10;
const RESOLUTION_MINUTES_MAX: i64 = 5 * 24 * 60;
const ASSET_ID_MAX: u32 = 200_000;
const ASSIGNEE_MAX: u32 = 2_000;
const RESPONSE_MINUTES_MAX: u32 = 240;

/// Synthesize the record for one row index.
///
/// Callers must pass `index >= 1`; the index maps one-to-one onto the ticket
/// id, so indices handed out in increasing order yield strictly increasing
/// ids. Field draws are intentionally independent of each other, so a closed
/// ticket may still carry a breached SLA or a long resolution.
pub fn synthesize(index: u64, rng: &mut impl Rng) -> IncidentRecord {
    let ticket_id = format!("{TICKET_PREFIX}{index:08}");

    let start = window_start();
    let window_seconds = (window_end() - start).num_seconds();
    let created_at = start + Duration::seconds(rng.random_range(0..window_seconds));

    let resolution_minutes = rng.random_range(RESOLUTION_MINUTES_MIN..=RESOLUTION_MINUTES_MAX);
    let resolution = Duration::minutes(resolution_minutes);
    let resolved_at = created_at + resolution;

    let status = weighted_choice(&Status::ALL, |status| status.weight(), rng);
    let priority = weighted_choice(&Priority::ALL, |priority| priority.weight(), rng);

    let category = pick(&CATEGORIES, rng);
    let subcategory = pick(&SUBCATEGORIES, rng);
    let asset_id = format!("AT-{:06}", rng.random_range(1..=ASSET_ID_MAX));
    let assigned_group = pick(&ASSIGNMENT_GROUPS, rng);
    let assignee = format!("user_{}", rng.random_range(1..=ASSIGNEE_MAX));
    let channel = pick(&CHANNELS, rng);

    let sla_target_hours = priority.sla_target_hours();
    let time_to_respond_minutes = rng.random_range(1..=RESPONSE_MINUTES_MAX);
    let time_to_resolve_minutes = resolution.num_seconds() / 60;
    let breached_sla = time_to_resolve_minutes > i64::from(sla_target_hours) * 60;
    let customer_sat_score: u8 = rng.random_range(1..=5);

    let short_description = format!("{category} issue - {subcategory}");

    IncidentRecord {
        ticket_id,
        created_at,
        resolved_at,
        status,
        priority,
        category,
        subcategory,
        short_description,
        asset_id,
        assigned_group,
        assignee,
        channel,
        sla_target_hours,
        time_to_respond_minutes,
        time_to_resolve_minutes,
        breached_sla,
        customer_sat_score,
    }
}

fn pick<const N: usize>(values: &[&'static str; N], rng: &mut impl Rng) -> &'static str {
    values.choose(rng).copied().unwrap_or(values[0])
}

/// Walk the choices subtracting weights from a single roll in `[0, total)`.
fn weighted_choice<T: Copy>(choices: &[T], weight_of: impl Fn(T) -> u32, rng: &mut impl Rng) -> T {
    let total: u32 = choices.iter().map(|choice| weight_of(*choice)).sum();
    let mut roll = rng.random_range(0..total);
    for choice in choices {
        let weight = weight_of(*choice);
        if roll < weight {
            return *choice;
        }
        roll -= weight;
    }
    choices[choices.len() - 1]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn resolution_window_and_derived_minutes_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for index in 1..=500 {
            let record = synthesize(index, &mut rng);
            let resolution = record.resolved_at - record.created_at;
            assert!(resolution >= Duration::minutes(RESOLUTION_MINUTES_MIN));
            assert!(resolution <= Duration::minutes(RESOLUTION_MINUTES_MAX));
            assert_eq!(record.time_to_resolve_minutes, resolution.num_seconds() / 60);
        }
    }

    #[test]
    fn breached_flag_matches_sla_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for index in 1..=500 {
            let record = synthesize(index, &mut rng);
            let target_minutes = i64::from(record.priority.sla_target_hours()) * 60;
            assert_eq!(
                record.breached_sla,
                record.time_to_resolve_minutes > target_minutes
            );
            assert_eq!(
                record.sla_target_hours,
                record.priority.sla_target_hours()
            );
        }
    }

    #[test]
    fn created_at_stays_inside_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for index in 1..=500 {
            let record = synthesize(index, &mut rng);
            assert!(record.created_at >= window_start());
            assert!(record.created_at < window_end());
        }
    }

    #[test]
    fn ticket_ids_track_the_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let first = synthesize(1, &mut rng);
        let ninth = synthesize(9, &mut rng);
        let large = synthesize(12_345_678, &mut rng);
        assert_eq!(first.ticket_id, "INC00000001");
        assert_eq!(ninth.ticket_id, "INC00000009");
        assert_eq!(large.ticket_id, "INC12345678");
        assert!(first.ticket_id < ninth.ticket_id);
        assert!(ninth.ticket_id < large.ticket_id);
    }

    #[test]
    fn bounded_fields_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        for index in 1..=500 {
            let record = synthesize(index, &mut rng);
            assert!((1..=RESPONSE_MINUTES_MAX).contains(&record.time_to_respond_minutes));
            assert!((1..=5).contains(&record.customer_sat_score));
            assert!(record.asset_id.starts_with("AT-"));
            assert_eq!(record.asset_id.len(), "AT-".len() + 6);
            assert!(record.assignee.starts_with("user_"));
            assert_eq!(
                record.short_description,
                format!("{} issue - {}", record.category, record.subcategory)
            );
        }
    }

    #[test]
    fn weighted_draws_cover_every_priority() {
        let mut rng = ChaCha8Rng::seed_from_u64(16);
        let mut seen = [false; 4];
        for index in 1..=2_000 {
            let record = synthesize(index, &mut rng);
            let slot = Priority::ALL
                .iter()
                .position(|priority| *priority == record.priority)
                .unwrap_or(0);
            seen[slot] = true;
        }
        assert!(seen.iter().all(|present| *present));
    }
}
