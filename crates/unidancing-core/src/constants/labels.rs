// ABOUTME: Localized display labels for participation, locomotion, and difficulty
// ABOUTME: The app UI is German; these strings are shown next to icons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

/// Participation mode labels
pub mod personal {
    /// Label for solo exercises
    pub const INDIVIDUAL: &str = "Einzel";
    /// Label for partner exercises
    pub const PAIR: &str = "Paar";
    /// Label for group exercises
    pub const GROUP: &str = "Gruppe";
}

/// Locomotion labels
pub mod locomotion {
    /// Label for exercises on the unicycle
    pub const UNICYCLE: &str = "Einrad";
    /// Label for exercises on foot
    pub const PEDES: &str = "Zu Fuß";
}

/// Difficulty labels
pub mod difficulty {
    /// Beginner label
    pub const BEGINNER: &str = "Anfänger";
    /// Intermediate label
    pub const INTERMEDIATE: &str = "Fortgeschritten";
    /// Advanced label
    pub const ADVANCED: &str = "Experte";
}
