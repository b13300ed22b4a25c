use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Copy,
    ToggleHelp,
    CloseHelp,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Copy => "copy",
            Action::ToggleHelp => "toggle_help",
            Action::CloseHelp => "close_help",
            Action::Quit => "quit",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(Action::Copy),
            "toggle_help" => Ok(Action::ToggleHelp),
            "close_help" => Ok(Action::CloseHelp),
            "quit" => Ok(Action::Quit),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self::normalized(event.code, event.modifiers)
    }

    /// SHIFT is dropped for non-alphabetic chars, since the char already
    /// carries it and terminals disagree on whether '?' arrives with SHIFT set.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => modifiers - KeyModifiers::SHIFT,
            _ => modifiers,
        };
        Self { code, modifiers }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("A");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };

        parts.push(&key_str);

        if parts.len() > 1 || key_str.len() > 1 {
            write!(f, "<{}>", parts.join("-"))
        } else {
            write!(f, "{}", key_str)
        }
    }
}

/// Parse "c", "<Enter>", "<C-c>", "<S-A-F5>".
impl FromStr for KeyBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
            let inner = &s[1..s.len() - 1];
            return parse_bracket_notation(inner);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(KeyBinding::new(KeyCode::Char(c), KeyModifiers::NONE)),
            _ => Err(format!("Invalid key binding: {}", s)),
        }
    }
}

fn parse_bracket_notation(s: &str) -> Result<KeyBinding, String> {
    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = "";

    for (i, part) in parts.iter().enumerate() {
        if i == parts.len() - 1 {
            key_part = part;
        } else {
            match part.to_uppercase().as_str() {
                "C" | "CTRL" | "CONTROL" => modifiers |= KeyModifiers::CONTROL,
                "A" | "ALT" | "M" | "META" => modifiers |= KeyModifiers::ALT,
                "S" | "SHIFT" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(format!("Unknown modifier: {}", part)),
            }
        }
    }

    let code = parse_key_code(key_part)?;

    Ok(KeyBinding::normalized(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let s_lower = s.to_lowercase();

    match s_lower.as_str() {
        "space" => Ok(KeyCode::Char(' ')),
        "tab" => Ok(KeyCode::Tab),
        "enter" | "return" | "cr" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        f if f.starts_with('f') && f.len() > 1 => {
            let n: u8 = f[1..].parse().map_err(|_| format!("Invalid F key: {}", s))?;
            Ok(KeyCode::F(n))
        }
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(KeyCode::Char(c)),
                _ => Err(format!("Unknown key: {}", s)),
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingCache {
    single: HashMap<KeyBinding, Action>,
}

impl KeybindingCache {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut single = HashMap::new();

        for (key_str, action_str) in &config.bindings {
            match (key_str.parse::<KeyBinding>(), action_str.parse::<Action>()) {
                (Ok(binding), Ok(action)) => {
                    single.insert(binding, action);
                }
                (Err(e), _) | (_, Err(e)) => {
                    warn!(key = %key_str, action = %action_str, error = %e, "ignoring keybinding");
                }
            }
        }

        Self { single }
    }

    pub fn lookup(&self, event: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.single.get(&binding).copied()
    }

    /// Keys bound to `action`, shortest first.
    pub fn keys_for(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .single
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| k.to_string())
            .collect();
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        keys
    }
}

impl Default for KeybindingCache {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeybindingsConfig {
    pub bindings: HashMap<String, String>,
}

impl KeybindingsConfig {
    /// User entries override defaults bound to the same key.
    pub fn merge_with_defaults(self) -> Self {
        let mut bindings = default_bindings();
        bindings.extend(self.bindings);
        Self { bindings }
    }
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }
}

fn default_bindings() -> HashMap<String, String> {
    let mut m = HashMap::new();

    m.insert("<Enter>".to_string(), "copy".to_string());
    m.insert("<Space>".to_string(), "copy".to_string());
    m.insert("c".to_string(), "copy".to_string());
    m.insert("y".to_string(), "copy".to_string());
    m.insert("?".to_string(), "toggle_help".to_string());
    m.insert("<Esc>".to_string(), "close_help".to_string());
    m.insert("q".to_string(), "quit".to_string());
    m.insert("<C-c>".to_string(), "quit".to_string());

    m
}
