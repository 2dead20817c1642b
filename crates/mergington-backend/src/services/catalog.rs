use dashmap::DashMap;
use dashmap::mapref::one::RefMut;

use mergington::data::{ActivityInfo, ActivityListing};

/// The process-wide table of activities and their rosters.
///
/// The set of activity names is fixed when the catalog is built; only the
/// rosters inside each entry change afterwards. Entries live in a `DashMap`,
/// so a roster mutation holds the lock of the entry's shard and nothing else.
pub struct ActivityCatalog {
    activities: DashMap<String, ActivityInfo>,
}

impl ActivityCatalog {
    /// Builds a catalog from the given activities. A repeated name keeps the last entry.
    pub fn new<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, ActivityInfo)>,
    {
        Self {
            activities: activities.into_iter().collect(),
        }
    }

    /// The catalog the service starts with.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of every activity, keyed by name.
    pub fn list(&self) -> ActivityListing {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<ActivityInfo> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Total number of roster entries across all activities.
    pub fn participant_count(&self) -> usize {
        self.activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum()
    }

    pub(crate) fn get_mut(&self, name: &str) -> Option<RefMut<'_, String, ActivityInfo>> {
        self.activities.get_mut(name)
    }
}

fn seed_activities() -> Vec<(String, ActivityInfo)> {
    let activities = [
        (
            "Chess Club",
            ActivityInfo::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            ActivityInfo::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            ActivityInfo::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            ActivityInfo::new(
                "Train and play matches against other schools",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team",
            ActivityInfo::new(
                "Practice drills and compete in the regional league",
                "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club",
            ActivityInfo::new(
                "Explore painting, drawing and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club",
            ActivityInfo::new(
                "Act, direct and stage the school plays",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club",
            ActivityInfo::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team",
            ActivityInfo::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ];

    activities
        .into_iter()
        .map(|(name, info)| (name.to_string(), info))
        .collect()
}
