use anyhow::Result;
use owo_colors::OwoColorize;
use standings_core::{Event, EventStore};

pub async fn run(store: &EventStore) -> Result<()> {
    let mut events = store.list().await?;

    if events.is_empty() {
        println!("No events in {}", store.dir().display());
        return Ok(());
    }

    sort_for_display(&mut events);

    for event in &events {
        println!(
            "{}  {}  {}  {}",
            event.date,
            event.name.bold(),
            format!("({}, {} participants)", event.format, event.participants.len()).dimmed(),
            event.id.dimmed()
        );
    }

    Ok(())
}

/// Oldest first; ties broken by name so output is stable across runs.
fn sort_for_display(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(name: &str, day: u32) -> Event {
        Event {
            id: name.to_lowercase(),
            name: name.to_string(),
            format: "Slalom".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            participants: vec![],
        }
    }

    #[test]
    fn test_sort_for_display() {
        let mut events = vec![event("B", 6), event("C", 3), event("A", 6)];
        sort_for_display(&mut events);

        let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
