//! Mock data generator.
//!
//! Wipes the events directory and fills it with a season of rounds, each
//! with the same roster in a random finishing order.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;
use rand::Rng;
use rand::seq::SliceRandom;
use standings_core::{EventInput, EventStore, Participant};
use tracing::debug;

pub const DEFAULT_ROUNDS: u32 = 10;

const ROSTER: [&str; 10] = [
    "Thomas Guibert",
    "John Smith",
    "Emma Wilson",
    "Michael Brown",
    "Sarah Davis",
    "David Lee",
    "Lisa Anderson",
    "James Taylor",
    "Laura Martin",
    "Robert White",
];

const FORMAT: &str = "Slalom Racing";

/// Days between consecutive rounds
const ROUND_SPACING_DAYS: i64 = 3;

pub async fn run(store: &EventStore, rounds: u32) -> Result<()> {
    let removed = store
        .clear()
        .await
        .with_context(|| format!("Failed to clear {}", store.dir().display()))?;
    debug!(removed, "cleared existing events");

    let mut rng = rand::rng();
    for round in 1..=rounds {
        let event = store.create(mock_round(round, &mut rng)).await?;
        println!("Generated event: {}", event.name);
    }

    println!("{}", "Mock data generation complete!".green());
    Ok(())
}

/// Build round `round` (1-based): every roster member with a distinct position.
fn mock_round<R: Rng + ?Sized>(round: u32, rng: &mut R) -> EventInput {
    let mut positions: Vec<i64> = (1..=ROSTER.len() as i64).collect();
    positions.shuffle(rng);

    let participants = ROSTER
        .iter()
        .zip(positions)
        .map(|(name, position)| Participant {
            name: name.to_string(),
            position,
        })
        .collect();

    EventInput {
        id: None,
        name: Some(format!("LHN 25 - Round {}", round)),
        format: Some(FORMAT.to_string()),
        date: Some(round_date(round)),
        participants: Some(participants),
    }
}

/// Round `n` falls on January `3n`, 2024 (continuing into February and beyond).
fn round_date(round: u32) -> NaiveDate {
    let season_start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    season_start + Duration::days(ROUND_SPACING_DAYS * i64::from(round) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    #[test]
    fn test_round_date() {
        assert_eq!(round_date(1), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(round_date(10), NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        assert_eq!(round_date(11), NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
    }

    #[test]
    fn test_mock_round_positions_are_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = mock_round(4, &mut rng);

        assert_eq!(input.name.as_deref(), Some("LHN 25 - Round 4"));
        let participants = input.participants.unwrap();
        assert_eq!(participants.len(), ROSTER.len());

        let mut positions: Vec<i64> = participants.iter().map(|p| p.position).collect();
        positions.sort();
        assert_eq!(positions, (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_run_replaces_existing_events() {
        let tmp = TempDir::new().unwrap();
        let store = EventStore::new(tmp.path());

        run(&store, 3).await.unwrap();
        run(&store, 2).await.unwrap();

        let events = store.list().await.unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.participants.len() == 10));
    }
}
