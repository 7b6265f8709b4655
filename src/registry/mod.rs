use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use thiserror::Error;

use crate::models::Activity;

/// Thread-safe handle handed to request handlers via axum state.
pub type SharedRegistry = Arc<ActivityRegistry>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    /// No activity with the requested name exists.
    #[error("Activity not found")]
    ActivityNotFound,
    /// The email is already in the activity's participant list.
    #[error("Student is already signed up")]
    AlreadySignedUp,
}

/// The in-memory store mapping activity names to activity records.
///
/// All state mutation goes through here. The map is ordered so listings come
/// back in seed order, and every signup runs its check-then-append under a
/// single write-lock acquisition so concurrent signups to the same activity
/// can neither duplicate an email nor lose an append.
pub struct ActivityRegistry {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        ActivityRegistry {
            activities: RwLock::new(activities),
        }
    }

    /// Registry populated with the fixed Mergington seed activities.
    pub fn with_seed_data() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of the full name→activity map, in seed order.
    pub fn list(&self) -> IndexMap<String, Activity> {
        self.activities
            .read()
            .expect("activity registry lock poisoned")
            .clone()
    }

    /// Sign a student up for an activity. On success the email is appended to
    /// the participant list and the confirmation message is returned.
    ///
    /// `max_participants` is deliberately not checked: capacity is
    /// informational only and signups past it succeed.
    pub fn sign_up(&self, activity_name: &str, email: &str) -> Result<String, SignupError> {
        let mut activities = self
            .activities
            .write()
            .expect("activity registry lock poisoned");

        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }
}

fn seed_activities() -> IndexMap<String, Activity> {
    let seed = [
        // Intellectual activities
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Science Olympiad",
            Activity::new(
                "Prepare for competitive science events and experiments",
                "Saturdays, 9:00 AM - 11:00 AM",
                15,
                &["alice@mergington.edu", "bob@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills through competitive debates",
                "Wednesdays, 4:00 PM - 5:30 PM",
                18,
                &["carlos@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            Activity::new(
                "Explore advanced mathematics concepts and participate in competitions",
                "Thursdays, 3:45 PM - 5:15 PM",
                14,
                &["jennifer@mergington.edu", "kevin@mergington.edu"],
            ),
        ),
        (
            "Robotics Team",
            Activity::new(
                "Build and program robots for competitive robotics challenges",
                "Saturdays, 2:00 PM - 5:00 PM",
                12,
                &["ryan@mergington.edu"],
            ),
        ),
        // Sports activities
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball training and inter-school tournaments",
                "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
                15,
                &["marcus@mergington.edu", "sarah@mergington.edu"],
            ),
        ),
        (
            "Swimming Club",
            Activity::new(
                "Swimming techniques, water safety, and competitive swimming",
                "Tuesdays and Thursdays, 6:00 AM - 7:30 AM",
                20,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Competitive soccer training and inter-school matches",
                "Tuesdays and Fridays, 4:00 PM - 6:00 PM",
                22,
                &["diego@mergington.edu", "maria@mergington.edu"],
            ),
        ),
        (
            "Track and Field",
            Activity::new(
                "Running, jumping, and throwing events for athletic development",
                "Mondays and Thursdays, 3:30 PM - 5:30 PM",
                25,
                &[
                    "james@mergington.edu",
                    "natalie@mergington.edu",
                    "victor@mergington.edu",
                ],
            ),
        ),
        // Artistic activities
        (
            "Drama Club",
            Activity::new(
                "Acting, scriptwriting, and theatrical productions",
                "Fridays, 4:00 PM - 6:00 PM",
                25,
                &[
                    "elena@mergington.edu",
                    "david@mergington.edu",
                    "lisa@mergington.edu",
                ],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Painting, drawing, sculpture and various visual arts techniques",
                "Saturdays, 1:00 PM - 4:00 PM",
                16,
                &["maya@mergington.edu", "jackson@mergington.edu"],
            ),
        ),
        (
            "Music Band",
            Activity::new(
                "Learn instruments and perform in school concerts and events",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                30,
                &[
                    "sophia@mergington.edu",
                    "lucas@mergington.edu",
                    "isabella@mergington.edu",
                ],
            ),
        ),
        (
            "Photography Club",
            Activity::new(
                "Learn photography techniques, digital editing, and showcase artistic vision",
                "Sundays, 10:00 AM - 1:00 PM",
                18,
                &["rachel@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
    ];

    seed.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
