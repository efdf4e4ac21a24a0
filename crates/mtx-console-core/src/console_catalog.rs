//! Hardcoded panel data shown on the dashboard, commands and settings tabs.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ConsoleLocale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual tone of a stat card's change badge.
pub enum StatChangeTone {
    /// Change text carries a `-` (e.g. fewer errors).
    Improving,
    Neutral,
}

impl StatChangeTone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Neutral => "neutral",
        }
    }
}

/// One dashboard stat tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub accent: &'static str,
}

impl StatCard {
    /// A negative change is rendered as an improvement.
    pub fn change_tone(&self) -> StatChangeTone {
        if self.change.contains('-') {
            StatChangeTone::Improving
        } else {
            StatChangeTone::Neutral
        }
    }
}

/// Reference card on the commands tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandReference {
    pub name: &'static str,
    pub description: &'static str,
}

const ARABIC_STAT_CARDS: [StatCard; 4] = [
    StatCard {
        key: "users",
        label: "المستخدمون",
        value: "1,234",
        change: "+12%",
        accent: "blue",
    },
    StatCard {
        key: "commands-executed",
        label: "الأوامر المنفذة",
        value: "5,678",
        change: "+23%",
        accent: "green",
    },
    StatCard {
        key: "uptime",
        label: "وقت التشغيل",
        value: "45 يوم",
        change: "مستقر",
        accent: "purple",
    },
    StatCard {
        key: "error-rate",
        label: "معدل الخطأ",
        value: "0.2%",
        change: "-5%",
        accent: "orange",
    },
];

const ENGLISH_STAT_CARDS: [StatCard; 4] = [
    StatCard {
        key: "users",
        label: "Users",
        value: "1,234",
        change: "+12%",
        accent: "blue",
    },
    StatCard {
        key: "commands-executed",
        label: "Commands executed",
        value: "5,678",
        change: "+23%",
        accent: "green",
    },
    StatCard {
        key: "uptime",
        label: "Uptime",
        value: "45 days",
        change: "stable",
        accent: "purple",
    },
    StatCard {
        key: "error-rate",
        label: "Error rate",
        value: "0.2%",
        change: "-5%",
        accent: "orange",
    },
];

const ARABIC_ACTIVITY: [&str; 4] = [
    "تم تنفيذ الأمر /broadcast بواسطة Admin",
    "انضم 5 مستخدمين جدد",
    "تم إصلاح خطأ في نظام الرسائل",
    "تم تحديث قاعدة البيانات",
];

const ENGLISH_ACTIVITY: [&str; 4] = [
    "Command /broadcast executed by Admin",
    "5 new users joined",
    "Fixed a bug in the messaging system",
    "Database updated",
];

const ARABIC_COMMANDS: [CommandReference; 6] = [
    CommandReference {
        name: "/broadcast",
        description: "إرسال رسالة جماعية",
    },
    CommandReference {
        name: "/ban",
        description: "حظر مستخدم",
    },
    CommandReference {
        name: "/unban",
        description: "إلغاء حظر مستخدم",
    },
    CommandReference {
        name: "/mute",
        description: "كتم صوت مستخدم",
    },
    CommandReference {
        name: "/unmute",
        description: "إلغاء كتم الصوت",
    },
    CommandReference {
        name: "/warn",
        description: "تحذير مستخدم",
    },
];

const ENGLISH_COMMANDS: [CommandReference; 6] = [
    CommandReference {
        name: "/broadcast",
        description: "Send a message to everyone",
    },
    CommandReference {
        name: "/ban",
        description: "Ban a user",
    },
    CommandReference {
        name: "/unban",
        description: "Lift a user ban",
    },
    CommandReference {
        name: "/mute",
        description: "Mute a user",
    },
    CommandReference {
        name: "/unmute",
        description: "Unmute a user",
    },
    CommandReference {
        name: "/warn",
        description: "Warn a user",
    },
];

/// Stat tiles for the dashboard tab.
pub fn stat_cards(locale: ConsoleLocale) -> &'static [StatCard] {
    match locale {
        ConsoleLocale::Arabic => &ARABIC_STAT_CARDS,
        ConsoleLocale::English => &ENGLISH_STAT_CARDS,
    }
}

/// Recent-activity lines for the dashboard tab.
pub fn recent_activity(locale: ConsoleLocale) -> &'static [&'static str] {
    match locale {
        ConsoleLocale::Arabic => &ARABIC_ACTIVITY,
        ConsoleLocale::English => &ENGLISH_ACTIVITY,
    }
}

/// Moderation commands listed on the commands tab.
pub fn command_reference(locale: ConsoleLocale) -> &'static [CommandReference] {
    match locale {
        ConsoleLocale::Arabic => &ARABIC_COMMANDS,
        ConsoleLocale::English => &ENGLISH_COMMANDS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Checkbox toggles on the settings tab.
pub enum ConsoleSetting {
    Notifications,
    DarkMode,
    ActivityLogging,
}

/// Returned when a setting name is not one of the three toggles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown setting '{0}'")]
pub struct SettingParseError(pub String);

impl ConsoleSetting {
    /// Toggles in panel order.
    pub const ALL: [Self; 3] = [Self::Notifications, Self::DarkMode, Self::ActivityLogging];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::DarkMode => "dark-mode",
            Self::ActivityLogging => "activity-logging",
        }
    }

    /// Localized checkbox label.
    pub fn label(self, locale: ConsoleLocale) -> &'static str {
        let strings = locale.strings();
        match self {
            Self::Notifications => strings.setting_notifications,
            Self::DarkMode => strings.setting_dark_mode,
            Self::ActivityLogging => strings.setting_activity_logging,
        }
    }
}

impl fmt::Display for ConsoleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleSetting {
    type Err = SettingParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|setting| setting.as_str() == raw.trim())
            .ok_or_else(|| SettingParseError(raw.to_string()))
    }
}

/// Checkbox state of the settings tab; everything starts enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    pub notifications: bool,
    pub dark_mode: bool,
    pub activity_logging: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: true,
            activity_logging: true,
        }
    }
}

impl ConsoleSettings {
    pub fn is_enabled(&self, setting: ConsoleSetting) -> bool {
        match setting {
            ConsoleSetting::Notifications => self.notifications,
            ConsoleSetting::DarkMode => self.dark_mode,
            ConsoleSetting::ActivityLogging => self.activity_logging,
        }
    }

    /// Flips one toggle and returns its new value.
    pub fn toggle(&mut self, setting: ConsoleSetting) -> bool {
        let slot = match setting {
            ConsoleSetting::Notifications => &mut self.notifications,
            ConsoleSetting::DarkMode => &mut self.dark_mode,
            ConsoleSetting::ActivityLogging => &mut self.activity_logging,
        };
        *slot = !*slot;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::{
        command_reference, recent_activity, stat_cards, ConsoleSetting, ConsoleSettings,
        StatChangeTone,
    };
    use crate::ConsoleLocale;

    #[test]
    fn unit_stat_cards_mark_negative_change_as_improving() {
        let tones = stat_cards(ConsoleLocale::Arabic)
            .iter()
            .map(|card| card.change_tone())
            .collect::<Vec<_>>();
        assert_eq!(
            tones,
            vec![
                StatChangeTone::Neutral,
                StatChangeTone::Neutral,
                StatChangeTone::Neutral,
                StatChangeTone::Improving,
            ]
        );
    }

    #[test]
    fn functional_catalog_sizes_match_across_locales() {
        for locale in [ConsoleLocale::Arabic, ConsoleLocale::English] {
            assert_eq!(stat_cards(locale).len(), 4);
            assert_eq!(recent_activity(locale).len(), 4);
            assert_eq!(command_reference(locale).len(), 6);
        }
        let arabic_names = command_reference(ConsoleLocale::Arabic)
            .iter()
            .map(|command| command.name)
            .collect::<Vec<_>>();
        let english_names = command_reference(ConsoleLocale::English)
            .iter()
            .map(|command| command.name)
            .collect::<Vec<_>>();
        assert_eq!(arabic_names, english_names);
    }

    #[test]
    fn unit_settings_default_on_and_toggle_flips() {
        let mut settings = ConsoleSettings::default();
        for setting in ConsoleSetting::ALL {
            assert!(settings.is_enabled(setting));
        }
        assert!(!settings.toggle(ConsoleSetting::DarkMode));
        assert!(!settings.dark_mode);
        assert!(settings.notifications);
        assert!(settings.toggle(ConsoleSetting::DarkMode));
    }

    #[test]
    fn regression_setting_parse_rejects_unknown_key() {
        assert_eq!(
            "dark-mode".parse::<ConsoleSetting>(),
            Ok(ConsoleSetting::DarkMode)
        );
        assert!("sound".parse::<ConsoleSetting>().is_err());
    }
}
