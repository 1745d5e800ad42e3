//! Read-only records shown by the screens, plus the compiled-in catalog.
//! Nothing here is ever written back; screens only look things up.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    New,
    Favorite,
    SuperLike,
    Matched,
    Unavailable,
}

impl MatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::New => "NEW",
            MatchStatus::Favorite => "FAVORITE",
            MatchStatus::SuperLike => "SUPER LIKE",
            MatchStatus::Matched => "MATCHED",
            MatchStatus::Unavailable => "UNAVAILABLE",
        }
    }

    /// Badge background colour.
    pub fn color(self) -> &'static str {
        match self {
            MatchStatus::New => "#3b82f6",
            MatchStatus::Favorite => "#eab308",
            MatchStatus::SuperLike => "#a855f7",
            MatchStatus::Matched => "#22c55e",
            MatchStatus::Unavailable => "#ef4444",
        }
    }
}

/// What a swipe card shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileItem {
    pub id: u64,
    pub name: String,
    /// Project age in months.
    pub age: u32,
    pub bio: String,
    pub images: Vec<String>,
    pub status: MatchStatus,
}

/// Full project record behind a card, shown on the details screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub profile: ProfileItem,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub team_size: u32,
    pub looking_for: Vec<String>,
    pub time_commitment: String,
    pub contact_person: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatContact {
    /// Id of the project this conversation belongs to.
    pub id: u64,
    pub name: String,
    pub last_message: String,
    pub last_message_time: String,
    pub unread_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from_me: bool,
    pub text: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub skills: Vec<String>,
    pub availability: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn images(ids: [u32; 3]) -> Vec<String> {
    ids.iter().map(|i| format!("assets/images/{}.jpg", i)).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            profile: ProfileItem {
                id: 1,
                name: "AI-assisted learning portal".to_string(),
                age: 2,
                bio: "Looking for a frontend developer with React experience for an adaptive learning portal".to_string(),
                images: images([1, 2, 3]),
                status: MatchStatus::New,
            },
            description: "A platform that uses AI to adapt learning material to each learner. React frontend, Node.js backend and TensorFlow for the models.".to_string(),
            tech_stack: strings(&["React", "Node.js", "TensorFlow", "MongoDB"]),
            team_size: 3,
            looking_for: strings(&["Frontend Developer", "UX Designer"]),
            time_commitment: "10-15 hours/week".to_string(),
            contact_person: "Sarah Miller".to_string(),
        },
        Project {
            profile: ProfileItem {
                id: 2,
                name: "E-commerce mobile app".to_string(),
                age: 4,
                bio: "Flutter/Dart developer wanted for an innovative shopping app".to_string(),
                images: images([4, 5, 6]),
                status: MatchStatus::Favorite,
            },
            description: "A mobile app connecting local shops with customers. Flutter for cross-platform UI and Firebase for backend services.".to_string(),
            tech_stack: strings(&["Flutter", "Dart", "Firebase", "Google Maps API"]),
            team_size: 2,
            looking_for: strings(&["Mobile Developer", "Backend Developer"]),
            time_commitment: "15-20 hours/week".to_string(),
            contact_person: "Tim Johnson".to_string(),
        },
        Project {
            profile: ProfileItem {
                id: 3,
                name: "Open-source game engine".to_string(),
                age: 8,
                bio: "C++/OpenGL skills required. Already 3 contributors on the team".to_string(),
                images: images([7, 8, 9]),
                status: MatchStatus::SuperLike,
            },
            description: "A lightweight open-source engine for 2D and simple 3D games, rendering with C++ and OpenGL.".to_string(),
            tech_stack: strings(&["C++", "OpenGL", "CMake", "Python"]),
            team_size: 5,
            looking_for: strings(&["C++ Developer", "Game Designer", "Documentation Specialist"]),
            time_commitment: "5-10 hours/week".to_string(),
            contact_person: "Julia Chen".to_string(),
        },
    ]
}

/// Cards for the home deck, in catalog order.
pub fn profile_items() -> Vec<ProfileItem> {
    projects().into_iter().map(|p| p.profile).collect()
}

/// Unknown ids fall back to the first project.
pub fn find_project(projects: &[Project], id: u64) -> Option<&Project> {
    projects
        .iter()
        .find(|p| p.profile.id == id)
        .or_else(|| projects.first())
}

pub fn contacts() -> Vec<ChatContact> {
    vec![
        ChatContact {
            id: 1,
            name: "Sarah - AI learning portal".to_string(),
            last_message: "Can you tell me more about your React experience?".to_string(),
            last_message_time: "14:25".to_string(),
            unread_count: 2,
        },
        ChatContact {
            id: 2,
            name: "Tim - E-commerce app".to_string(),
            last_message: "Have you worked with Flutter before?".to_string(),
            last_message_time: "Yesterday".to_string(),
            unread_count: 0,
        },
        ChatContact {
            id: 3,
            name: "Julia - Game engine".to_string(),
            last_message: "We just shipped a new feature!".to_string(),
            last_message_time: "Monday".to_string(),
            unread_count: 0,
        },
    ]
}

/// Seed conversation shown on the chat tab.
pub fn seed_thread() -> Vec<ChatMessage> {
    let msg = |from_me: bool, text: &str| ChatMessage {
        from_me,
        text: text.to_string(),
        time: String::new(),
    };
    vec![
        msg(false, "Hi! I'm interested in your project. Can you share more details?"),
        msg(true, "Sure! We're looking for a frontend developer with React experience."),
        msg(false, "Perfect, I have 3 years of React. How much time per week would it take?"),
    ]
}

/// Appends a local message; blank text is dropped.
pub fn push_message(thread: &mut Vec<ChatMessage>, text: &str, time: String) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    thread.push(ChatMessage {
        from_me: true,
        text: text.to_string(),
        time,
    });
    true
}

pub fn current_user() -> UserProfile {
    UserProfile {
        name: "Max Mustermann".to_string(),
        headline: "Full-Stack Developer".to_string(),
        about: "Full-stack developer with 5 years of experience, focused on React, Node.js and TypeScript.".to_string(),
        skills: strings(&["React", "TypeScript", "Node.js", "MongoDB"]),
        availability: "10-15 hours/week".to_string(),
    }
}
