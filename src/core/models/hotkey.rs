use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    pub logo: bool,
}

/// A single key combination such as `Ctrl+C` or `Alt+Shift+S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub modifiers: KeyModifiers,
    pub key: String,
}

impl HotkeyBinding {
    pub fn parse(binding: &str) -> anyhow::Result<Self> {
        let mut modifiers = KeyModifiers::default();
        let mut key: Option<String> = None;

        for part in binding.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "" => anyhow::bail!("Empty key in hotkey '{}'", binding),
                "ctrl" | "control" => modifiers.control = true,
                "shift" => modifiers.shift = true,
                "alt" | "option" => modifiers.alt = true,
                "cmd" | "super" | "meta" | "logo" => modifiers.logo = true,
                other => {
                    if key.is_some() {
                        anyhow::bail!("Hotkey '{}' names more than one key", binding);
                    }
                    key = Some(other.to_string());
                }
            }
        }

        let key = key.ok_or_else(|| anyhow::anyhow!("Hotkey '{}' has no key", binding))?;

        Ok(Self { modifiers, key })
    }

    pub fn matches(&self, key: &str, modifiers: KeyModifiers) -> bool {
        self.modifiers == modifiers && self.key.eq_ignore_ascii_case(key)
    }
}

impl Default for HotkeyBinding {
    /// `Ctrl+C`
    fn default() -> Self {
        Self {
            modifiers: KeyModifiers {
                control: true,
                ..Default::default()
            },
            key: "c".to_string(),
        }
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.control {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift+")?;
        }
        if self.modifiers.logo {
            write!(f, "Super+")?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}
