use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    OpenHelp,
    // Scoped to the active window
    CloseWindow,
    MinimizeWindow,
    ToggleMaximize,
    // Focus cycling
    CycleNextWindow,
    CyclePrevWindow,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::OpenHelp => "Open help",
            Action::CloseWindow => "Close window",
            Action::MinimizeWindow => "Minimize window",
            Action::ToggleMaximize => "Maximize / restore window",
            Action::CycleNextWindow => "Cycle next window",
            Action::CyclePrevWindow => "Cycle previous window",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Letter keys match case-insensitively so that Shift or caps lock do not
    /// defeat a binding like Ctrl+M.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        code_matches && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Cmd".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        kb.add(OpenHelp, KeyCombo::new(KeyCode::F(1), KeyModifiers::NONE));
        kb.add(CloseWindow, KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE));
        kb.add(
            MinimizeWindow,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::CONTROL),
        );
        kb.add(
            MinimizeWindow,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::SUPER),
        );
        kb.add(ToggleMaximize, KeyCombo::new(KeyCode::F(11), KeyModifiers::NONE));
        kb.add(
            CycleNextWindow,
            KeyCombo::new(KeyCode::Tab, KeyModifiers::ALT),
        );
        // The keyboard normalizer folds Shift+Tab into BackTab.
        kb.add(
            CyclePrevWindow,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::ALT),
        );
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        if let Some(list) = self.map.get(&action) {
            list.iter().any(|c| c.matches(key))
        } else {
            false
        }
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (act, list) in &self.map {
            if list.iter().any(|c| c.matches(key)) {
                return Some(*act);
            }
        }
        None
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}
