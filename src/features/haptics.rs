//! Haptic feedback
//!
//! Fire-and-forget impacts. Desktop hosts have no actuator, so the default
//! provider only traces what a phone would have played.

/// Impact strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impact {
    Soft,
    Light,
    Medium,
    Heavy,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Soft => write!(f, "soft"),
            Impact::Light => write!(f, "light"),
            Impact::Medium => write!(f, "medium"),
            Impact::Heavy => write!(f, "heavy"),
        }
    }
}

pub trait HapticFeedback {
    fn impact(&self, impact: Impact);

    fn soft(&self) {
        self.impact(Impact::Soft);
    }

    #[allow(dead_code)]
    fn light(&self) {
        self.impact(Impact::Light);
    }

    fn medium(&self) {
        self.impact(Impact::Medium);
    }

    #[allow(dead_code)]
    fn heavy(&self) {
        self.impact(Impact::Heavy);
    }
}

/// Logs impacts instead of playing them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn impact(&self, impact: Impact) {
        tracing::debug!("Haptic impact: {}", impact);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingHaptics;
    use super::*;

    #[test]
    fn shortcuts_map_to_impacts() {
        let haptics = RecordingHaptics::default();
        haptics.soft();
        haptics.light();
        haptics.medium();
        haptics.heavy();
        assert_eq!(
            haptics.impacts(),
            vec![Impact::Soft, Impact::Light, Impact::Medium, Impact::Heavy]
        );
    }

    #[test]
    fn clones_share_log() {
        let haptics = RecordingHaptics::default();
        let handle = haptics.clone();
        handle.medium();
        assert_eq!(haptics.count(Impact::Medium), 1);
    }
}
