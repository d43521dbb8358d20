use chrono::{Duration, NaiveDateTime};

use crate::calendar::Event;
use crate::utils::overlap::parse_date_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationOption {
    pub minutes: u32,
    pub label: &'static str,
}

pub const NOTIFICATION_OPTIONS: [NotificationOption; 5] = [
    NotificationOption { minutes: 1, label: "1분 전" },
    NotificationOption { minutes: 10, label: "10분 전" },
    NotificationOption { minutes: 60, label: "1시간 전" },
    NotificationOption { minutes: 120, label: "2시간 전" },
    NotificationOption { minutes: 1440, label: "1일 전" },
];

/// Events whose notification window is open at `now`.
///
/// The window runs from `notification_time` minutes before the start
/// (inclusive) up to the start itself (exclusive).
pub fn get_upcoming_events<'a>(events: &'a [Event], now: NaiveDateTime, notified_ids: &[String]) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            let Some(start) = parse_date_time(&event.date, &event.start_time) else {
                return false;
            };
            let until_start = start - now;

            until_start > Duration::zero()
                && until_start <= Duration::minutes(i64::from(event.notification_time))
                && !notified_ids.contains(&event.id)
        })
        .collect()
}

pub fn create_notification_message(event: &Event) -> String {
    format!("{}분 후 {} 일정이 시작됩니다.", event.notification_time, event.title)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event_id: String,
    pub message: String,
}

/// Tracks which events were already announced so each fires once.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notified_ids: Vec<String>,
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises notifications for newly due events and returns them.
    pub fn poll(&mut self, events: &[Event], now: NaiveDateTime) -> Vec<Notification> {
        let fresh: Vec<Notification> = get_upcoming_events(events, now, &self.notified_ids)
            .into_iter()
            .map(|event| Notification {
                event_id: event.id.clone(),
                message: create_notification_message(event),
            })
            .collect();

        for notification in &fresh {
            tracing::info!("Notifying event {}: {}", notification.event_id, notification.message);
            self.notified_ids.push(notification.event_id.clone());
        }
        self.notifications.extend(fresh.iter().cloned());

        fresh
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notified_ids(&self) -> &[String] {
        &self.notified_ids
    }

    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        (index < self.notifications.len()).then(|| self.notifications.remove(index))
    }
}
