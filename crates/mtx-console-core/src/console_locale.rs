//! Localized string tables for the console.
//!
//! Every user-visible label and every canned interpreter response is looked up
//! here so the Arabic and English renditions stay in lockstep.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display language of the console.
pub enum ConsoleLocale {
    #[default]
    Arabic,
    English,
}

/// Returned for a locale name other than arabic/ar/english/en.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown console locale '{0}' (expected arabic|ar|english|en)")]
pub struct LocaleParseError(pub String);

impl ConsoleLocale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::English => "english",
        }
    }

    /// BCP-47 language tag for the `lang` attribute.
    pub fn lang_tag(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn text_direction(self) -> &'static str {
        match self {
            Self::Arabic => "rtl",
            Self::English => "ltr",
        }
    }

    /// String table for this locale.
    pub fn strings(self) -> &'static ConsoleStrings {
        match self {
            Self::Arabic => &ARABIC_STRINGS,
            Self::English => &ENGLISH_STRINGS,
        }
    }
}

impl fmt::Display for ConsoleLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleLocale {
    type Err = LocaleParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "arabic" | "ar" => Ok(Self::Arabic),
            "english" | "en" => Ok(Self::English),
            _ => Err(LocaleParseError(raw.to_string())),
        }
    }
}

/// Every user-visible string of the console, including canned replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStrings {
    pub brand: &'static str,
    pub bot_title: &'static str,
    pub subtitle: &'static str,
    pub username_label: &'static str,
    pub username_placeholder: &'static str,
    pub password_label: &'static str,
    pub password_placeholder: &'static str,
    pub login_submit: &'static str,
    pub login_succeeded: &'static str,
    pub login_missing_credentials: &'static str,
    pub logout: &'static str,
    pub menu_open: &'static str,
    pub menu_close: &'static str,
    pub tab_dashboard: &'static str,
    pub tab_commands: &'static str,
    pub tab_chat: &'static str,
    pub tab_settings: &'static str,
    pub activity_heading: &'static str,
    pub commands_heading: &'static str,
    pub chat_heading: &'static str,
    pub settings_heading: &'static str,
    pub chat_empty: &'static str,
    pub chat_placeholder: &'static str,
    pub chat_send: &'static str,
    pub chat_clear: &'static str,
    pub chat_cleared: &'static str,
    pub setting_notifications: &'static str,
    pub setting_dark_mode: &'static str,
    pub setting_activity_logging: &'static str,
    pub setting_toggle: &'static str,
    pub help_response: &'static str,
    pub status_response: &'static str,
    pub stats_response: &'static str,
    pub unknown_command_response: &'static str,
}

pub static ARABIC_STRINGS: ConsoleStrings = ConsoleStrings {
    brand: "MTX",
    bot_title: "MTX SX TEAM Bot",
    subtitle: "لوحة التحكم والمحادثة",
    username_label: "اسم المستخدم",
    username_placeholder: "أدخل اسم المستخدم",
    password_label: "كلمة المرور",
    password_placeholder: "أدخل كلمة المرور",
    login_submit: "تسجيل الدخول",
    login_succeeded: "تم تسجيل الدخول بنجاح",
    login_missing_credentials: "يرجى إدخال اسم المستخدم وكلمة المرور",
    logout: "تسجيل الخروج",
    menu_open: "القائمة",
    menu_close: "إغلاق",
    tab_dashboard: "لوحة التحكم",
    tab_commands: "الأوامر",
    tab_chat: "المحادثة",
    tab_settings: "الإعدادات",
    activity_heading: "النشاط الأخير",
    commands_heading: "الأوامر المتاحة",
    chat_heading: "المحادثة",
    settings_heading: "الإعدادات",
    chat_empty: "لا توجد رسائل. اكتب أمرًا للبدء",
    chat_placeholder: "اكتب أمرًا... (اكتب /help للمساعدة)",
    chat_send: "إرسال",
    chat_clear: "مسح",
    chat_cleared: "تم مسح المحادثة",
    setting_notifications: "الإشعارات",
    setting_dark_mode: "الوضع الداكن",
    setting_activity_logging: "تسجيل الأنشطة",
    setting_toggle: "تبديل",
    help_response: "الأوامر المتاحة:\n/help - عرض المساعدة\n/status - حالة البوت\n/stats - الإحصائيات\n/clear - مسح المحادثة",
    status_response: "البوت يعمل بشكل طبيعي ✅",
    stats_response: "عدد المستخدمين: 1,234\nعدد الأوامر: 5,678\nوقت التشغيل: 45 يوم",
    unknown_command_response: "أمر غير معروف. اكتب /help للمساعدة",
};

pub static ENGLISH_STRINGS: ConsoleStrings = ConsoleStrings {
    brand: "MTX",
    bot_title: "MTX SX TEAM Bot",
    subtitle: "Control panel and chat",
    username_label: "Username",
    username_placeholder: "Enter username",
    password_label: "Password",
    password_placeholder: "Enter password",
    login_submit: "Log in",
    login_succeeded: "Logged in successfully",
    login_missing_credentials: "Please enter username and password",
    logout: "Log out",
    menu_open: "Menu",
    menu_close: "Close",
    tab_dashboard: "Dashboard",
    tab_commands: "Commands",
    tab_chat: "Chat",
    tab_settings: "Settings",
    activity_heading: "Recent activity",
    commands_heading: "Available commands",
    chat_heading: "Chat",
    settings_heading: "Settings",
    chat_empty: "No messages. Type a command to start",
    chat_placeholder: "Type a command... (type /help for help)",
    chat_send: "Send",
    chat_clear: "Clear",
    chat_cleared: "Chat cleared",
    setting_notifications: "Notifications",
    setting_dark_mode: "Dark mode",
    setting_activity_logging: "Activity logging",
    setting_toggle: "Toggle",
    help_response: "Available commands:\n/help - show help\n/status - bot status\n/stats - statistics\n/clear - clear the chat",
    status_response: "The bot is running normally ✅",
    stats_response: "Users: 1,234\nCommands: 5,678\nUptime: 45 days",
    unknown_command_response: "Unknown command. Type /help for help",
};
