//! Tests for the batch upload orchestrator.

use async_trait::async_trait;
use caravel_batch::BatchUploader;
use caravel_core::{MediaDescriptor, Pacer, UploadOutcome, UploadResult, Uploader};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Observable orchestrator activity, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Upload(String),
    Pause,
}

type EventLog = Arc<Mutex<Vec<Event>>>;

/// Uploader stub that records calls and fails a configured id set.
struct RecordingUploader {
    events: EventLog,
    fail_ids: HashSet<String>,
}

#[async_trait]
impl Uploader for RecordingUploader {
    async fn upload(&self, descriptor: &MediaDescriptor) -> UploadOutcome {
        self.events
            .lock()
            .unwrap()
            .push(Event::Upload(descriptor.id.clone()));

        if self.fail_ids.contains(&descriptor.id) {
            return UploadOutcome::Failed {
                id: descriptor.id.clone(),
                title: descriptor.title.clone(),
                reason: "Upload endpoint returned 502".to_string(),
            };
        }

        UploadOutcome::Uploaded(UploadResult {
            id: descriptor.id.clone(),
            url: format!("https://res.example.com/stored/{}.jpg", descriptor.id),
            title: descriptor.title.clone(),
            description: descriptor.description.clone(),
        })
    }
}

/// Pacer stub that records pauses instead of sleeping.
struct RecordingPacer {
    events: EventLog,
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self) {
        self.events.lock().unwrap().push(Event::Pause);
    }
}

fn make_descriptors(count: usize) -> Vec<MediaDescriptor> {
    (0..count)
        .map(|i| MediaDescriptor {
            id: format!("id-{}", i),
            source_url: format!("https://images.example.com/{}.jpg", i),
            title: format!("Title {}", i),
            description: if i % 2 == 0 {
                format!("Description {}", i)
            } else {
                String::new()
            },
        })
        .collect()
}

fn harness(fail_ids: &[&str]) -> (RecordingUploader, RecordingPacer, EventLog) {
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let uploader = RecordingUploader {
        events: events.clone(),
        fail_ids: fail_ids.iter().map(|s| s.to_string()).collect(),
    };
    let pacer = RecordingPacer {
        events: events.clone(),
    };
    (uploader, pacer, events)
}

/// Split the event log into upload groups separated by pauses.
fn groups(events: &[Event]) -> Vec<Vec<String>> {
    let mut result = vec![Vec::new()];
    for event in events {
        match event {
            Event::Upload(id) => result.last_mut().unwrap().push(id.clone()),
            Event::Pause => result.push(Vec::new()),
        }
    }
    result
}

#[tokio::test]
async fn test_25_items_batch_10_gives_three_batches_and_two_pauses() {
    let (uploader, pacer, events) = harness(&[]);
    let descriptors = make_descriptors(25);

    let uploaded = BatchUploader::new(uploader, pacer)
        .with_batch_size(10)
        .run(&descriptors)
        .await;

    assert_eq!(uploaded.len(), 25);

    let events = events.lock().unwrap();
    let pauses = events.iter().filter(|e| **e == Event::Pause).count();
    assert_eq!(pauses, 2);
    // No pause after the final batch.
    assert_ne!(events.last(), Some(&Event::Pause));

    let groups = groups(&events);
    let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    assert_eq!(sizes, vec![10, 10, 5]);
}

#[tokio::test]
async fn test_batches_are_sequential_groups_of_at_most_batch_size() {
    let (uploader, pacer, events) = harness(&[]);
    let descriptors = make_descriptors(7);

    BatchUploader::new(uploader, pacer)
        .with_batch_size(3)
        .run(&descriptors)
        .await;

    let events = events.lock().unwrap();
    let groups = groups(&events);

    // ceil(7/3) = 3 groups, each of size <= 3, in manifest order.
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.len() <= 3));
    let flattened: Vec<String> = groups.concat();
    let expected: Vec<String> = (0..7).map(|i| format!("id-{}", i)).collect();
    assert_eq!(flattened, expected);
}

#[tokio::test]
async fn test_failed_upload_is_dropped_but_batch_completes() {
    let (uploader, pacer, events) = harness(&["id-2"]);
    let descriptors = make_descriptors(5);

    let uploaded = BatchUploader::new(uploader, pacer)
        .with_batch_size(5)
        .run(&descriptors)
        .await;

    // Every descriptor was attempted despite the failure.
    let attempts = events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| matches!(e, Event::Upload(_)))
        .count();
    assert_eq!(attempts, 5);

    // The failing id is absent, everything else made it through.
    assert_eq!(uploaded.len(), 4);
    assert!(uploaded.iter().all(|r| r.id != "id-2"));
}

#[tokio::test]
async fn test_results_round_trip_descriptor_fields() {
    let (uploader, pacer, _events) = harness(&[]);
    let descriptors = make_descriptors(4);

    let uploaded = BatchUploader::new(uploader, pacer)
        .with_batch_size(2)
        .run(&descriptors)
        .await;

    assert_eq!(uploaded.len(), descriptors.len());
    for (descriptor, result) in descriptors.iter().zip(&uploaded) {
        assert_eq!(result.id, descriptor.id);
        assert_eq!(result.title, descriptor.title);
        assert_eq!(result.description, descriptor.description);
        // The stored url is remote-assigned, never the source.
        assert!(!result.url.is_empty());
        assert_ne!(result.url, descriptor.source_url);
    }
}

#[tokio::test]
async fn test_empty_manifest_runs_no_batches_and_no_pauses() {
    let (uploader, pacer, events) = harness(&[]);

    let uploaded = BatchUploader::new(uploader, pacer).run(&[]).await;

    assert!(uploaded.is_empty());
    assert!(events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_batch_size_is_clamped_to_one() {
    let (uploader, pacer, events) = harness(&[]);
    let descriptors = make_descriptors(2);

    let orchestrator = BatchUploader::new(uploader, pacer).with_batch_size(0);
    assert_eq!(orchestrator.batch_size(), 1);

    let uploaded = orchestrator.run(&descriptors).await;
    assert_eq!(uploaded.len(), 2);

    // Two single-item batches means exactly one pause between them.
    let pauses = events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| **e == Event::Pause)
        .count();
    assert_eq!(pauses, 1);
}
