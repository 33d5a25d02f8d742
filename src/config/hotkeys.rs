//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per view and input mode.

use crate::state::{Mode, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // ProductList view actions
    NavigateNext,
    NavigatePrev,
    NextPage,
    PrevPage,
    CyclePageSize,
    NewProduct,
    EditProduct,
    CopyProduct,
    DuplicateProduct,
    DeleteProduct,
    EnterSearch,
    CycleSort,
    ToggleSortOrder,
    EnterDebug,
    CycleTheme,
    Quit,

    // Shared by the list and the form
    Cancel,

    // ProductForm view actions
    NextField,
    PrevField,
    SubmitForm,
    InsertNewline,

    // Special mode actions
    SearchConfirm,
    SearchCancel,
    DeleteConfirm,
    DeleteCancel,
    DebugModeNavigateNext,
    DebugModeNavigatePrev,
    DebugModeExit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Bind a plain character key.
    ///
    pub fn char(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Bind a character key pressed together with Ctrl.
    ///
    pub fn ctrl(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Bind a non-character key without modifiers.
    ///
    pub fn key(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => return Err(serde::de::Error::missing_field("char")),
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings for each view and mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewHotkeys {
    pub product_list: HashMap<HotkeyAction, Hotkey>,
    pub product_form: HashMap<HotkeyAction, Hotkey>,
    pub search_mode: HashMap<HotkeyAction, Hotkey>,
    pub delete_confirmation: HashMap<HotkeyAction, Hotkey>,
    pub debug_mode: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ViewHotkeys {
    /// Add the bindings of `defaults` for every action this set lacks, so
    /// files written before an action existed still get a key for it.
    ///
    pub fn fill_missing(&mut self, defaults: &ViewHotkeys) {
        let pairs = [
            (&mut self.product_list, &defaults.product_list),
            (&mut self.product_form, &defaults.product_form),
            (&mut self.search_mode, &defaults.search_mode),
            (&mut self.delete_confirmation, &defaults.delete_confirmation),
            (&mut self.debug_mode, &defaults.debug_mode),
        ];
        for (bindings, default_bindings) in pairs {
            for (action, hotkey) in default_bindings {
                bindings.entry(*action).or_insert_with(|| hotkey.clone());
            }
        }
    }
}

/// Returns default hotkey mappings for all views.
///
pub fn default_hotkeys() -> ViewHotkeys {
    use HotkeyAction::*;

    let product_list = HashMap::from([
        (NavigateNext, Hotkey::char('j')),
        (NavigatePrev, Hotkey::char('k')),
        (NextPage, Hotkey::char('l')),
        (PrevPage, Hotkey::char('h')),
        (CyclePageSize, Hotkey::char('p')),
        (NewProduct, Hotkey::char('n')),
        (EditProduct, Hotkey::key(KeyCode::Enter)),
        (CopyProduct, Hotkey::char('c')),
        (DuplicateProduct, Hotkey::char('D')),
        (DeleteProduct, Hotkey::char('x')),
        (EnterSearch, Hotkey::char('/')),
        (CycleSort, Hotkey::char('s')),
        (ToggleSortOrder, Hotkey::char('o')),
        (EnterDebug, Hotkey::char('d')),
        (CycleTheme, Hotkey::char('t')),
        (Cancel, Hotkey::key(KeyCode::Esc)),
        (Quit, Hotkey::char('q')),
    ]);

    let product_form = HashMap::from([
        (NextField, Hotkey::key(KeyCode::Tab)),
        (PrevField, Hotkey::key(KeyCode::BackTab)),
        (SubmitForm, Hotkey::key(KeyCode::Enter)),
        (InsertNewline, Hotkey::ctrl('j')),
        (Cancel, Hotkey::key(KeyCode::Esc)),
    ]);

    let search_mode = HashMap::from([
        (SearchConfirm, Hotkey::key(KeyCode::Enter)),
        (SearchCancel, Hotkey::key(KeyCode::Esc)),
    ]);

    let delete_confirmation = HashMap::from([
        (DeleteConfirm, Hotkey::key(KeyCode::Enter)),
        (DeleteCancel, Hotkey::key(KeyCode::Esc)),
    ]);

    let debug_mode = HashMap::from([
        (DebugModeNavigateNext, Hotkey::char('j')),
        (DebugModeNavigatePrev, Hotkey::char('k')),
        (DebugModeExit, Hotkey::key(KeyCode::Esc)),
    ]);

    ViewHotkeys {
        product_list,
        product_form,
        search_mode,
        delete_confirmation,
        debug_mode,
    }
}

/// Shift is implied by the character itself (or by BackTab), and terminals
/// disagree on whether they report it, so it is ignored for those keys.
fn normalized_modifiers(code: &KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers - KeyModifiers::SHIFT,
        _ => modifiers,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code
        && normalized_modifiers(&event.code, event.modifiers)
            == normalized_modifiers(&hotkey.code, hotkey.modifiers)
}

fn find_action(event: &KeyEvent, bindings: &HashMap<HotkeyAction, Hotkey>) -> Option<HotkeyAction> {
    bindings
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Returns the bindings of a view.
///
pub fn view_bindings<'a>(view: &View, hotkeys: &'a ViewHotkeys) -> &'a HashMap<HotkeyAction, Hotkey> {
    match view {
        View::ProductList => &hotkeys.product_list,
        View::ProductForm => &hotkeys.product_form,
    }
}

/// Returns the bindings of a special mode, or None for normal mode.
///
pub fn mode_bindings<'a>(mode: &Mode, hotkeys: &'a ViewHotkeys) -> Option<&'a HashMap<HotkeyAction, Hotkey>> {
    match mode {
        Mode::Normal => None,
        Mode::Search => Some(&hotkeys.search_mode),
        Mode::DeleteConfirmation => Some(&hotkeys.delete_confirmation),
        Mode::Debug => Some(&hotkeys.debug_mode),
    }
}

/// Gets the action for a KeyEvent in a specific view.
///
pub fn get_action_for_event(event: &KeyEvent, view: &View, hotkeys: &ViewHotkeys) -> Option<HotkeyAction> {
    find_action(event, view_bindings(view, hotkeys))
}

/// Gets the action for a KeyEvent in a special mode.
///
pub fn get_action_for_special_mode(
    event: &KeyEvent,
    mode: &Mode,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    mode_bindings(mode, hotkeys).and_then(|bindings| find_action(event, bindings))
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let paired = paired_action.and_then(|paired| hotkeys.get(&paired));
            Some(match paired {
                Some(paired_hotkey) => format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                ),
                None => format!(" {}: {}", format_hotkey_display(hotkey), description),
            })
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::char('j');
        assert!(matches_hotkey(&press(KeyCode::Char('j'), KeyModifiers::empty()), &hotkey));
        assert!(!matches_hotkey(&press(KeyCode::Char('k'), KeyModifiers::empty()), &hotkey));
        assert!(!matches_hotkey(&press(KeyCode::Char('j'), KeyModifiers::CONTROL), &hotkey));
    }

    #[test]
    fn test_matches_hotkey_ignores_shift_on_chars() {
        let hotkey = Hotkey::char('D');
        assert!(matches_hotkey(&press(KeyCode::Char('D'), KeyModifiers::SHIFT), &hotkey));
        assert!(matches_hotkey(&press(KeyCode::Char('D'), KeyModifiers::empty()), &hotkey));
        let back_tab = Hotkey::key(KeyCode::BackTab);
        assert!(matches_hotkey(&press(KeyCode::BackTab, KeyModifiers::SHIFT), &back_tab));
    }

    #[test]
    fn test_get_action_for_event() {
        let hotkeys = default_hotkeys();
        let event = press(KeyCode::Char('j'), KeyModifiers::empty());
        let action = get_action_for_event(&event, &View::ProductList, &hotkeys);
        assert_eq!(action, Some(HotkeyAction::NavigateNext));

        let enter = press(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(
            get_action_for_event(&enter, &View::ProductForm, &hotkeys),
            Some(HotkeyAction::SubmitForm)
        );
        assert_eq!(
            get_action_for_event(&enter, &View::ProductList, &hotkeys),
            Some(HotkeyAction::EditProduct)
        );
    }

    #[test]
    fn test_newline_does_not_collide_with_submit() {
        let hotkeys = default_hotkeys();
        let ctrl_j = press(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(
            get_action_for_event(&ctrl_j, &View::ProductForm, &hotkeys),
            Some(HotkeyAction::InsertNewline)
        );
        let plain_j = press(KeyCode::Char('j'), KeyModifiers::empty());
        assert_eq!(get_action_for_event(&plain_j, &View::ProductForm, &hotkeys), None);
        assert_eq!(
            format_hotkey_display(&hotkeys.product_form[&HotkeyAction::InsertNewline]),
            "Ctrl+j"
        );
    }

    #[test]
    fn test_fill_missing_keeps_custom_bindings() {
        let mut hotkeys = default_hotkeys();
        hotkeys.product_form.remove(&HotkeyAction::InsertNewline);
        hotkeys
            .product_form
            .insert(HotkeyAction::SubmitForm, Hotkey::ctrl('s'));
        hotkeys.fill_missing(&default_hotkeys());
        assert_eq!(
            hotkeys.product_form[&HotkeyAction::InsertNewline],
            Hotkey::ctrl('j')
        );
        assert_eq!(hotkeys.product_form[&HotkeyAction::SubmitForm], Hotkey::ctrl('s'));
    }

    #[test]
    fn test_get_action_for_special_mode() {
        let hotkeys = default_hotkeys();
        let esc = press(KeyCode::Esc, KeyModifiers::empty());
        assert_eq!(
            get_action_for_special_mode(&esc, &Mode::DeleteConfirmation, &hotkeys),
            Some(HotkeyAction::DeleteCancel)
        );
        assert_eq!(
            get_action_for_special_mode(&esc, &Mode::Search, &hotkeys),
            Some(HotkeyAction::SearchCancel)
        );
        assert_eq!(get_action_for_special_mode(&esc, &Mode::Normal, &hotkeys), None);
    }

    #[test]
    fn test_default_hotkeys() {
        let hotkeys = default_hotkeys();
        assert!(!hotkeys.product_list.is_empty());
        assert!(!hotkeys.product_form.is_empty());
        assert!(!hotkeys.search_mode.is_empty());
        assert!(!hotkeys.delete_confirmation.is_empty());
        assert!(!hotkeys.debug_mode.is_empty());
    }

    #[test]
    fn test_list_bindings_are_unique() {
        let hotkeys = default_hotkeys();
        let mut seen = std::collections::HashSet::new();
        for hotkey in hotkeys.product_list.values() {
            assert!(seen.insert(hotkey.clone()), "duplicate binding {:?}", hotkey);
        }
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys.product_list,
            &[
                (HotkeyAction::NavigateNext, "navigate", Some(HotkeyAction::NavigatePrev)),
                (HotkeyAction::NewProduct, "new", None),
            ],
        );
        assert_eq!(text, " j/k: navigate, n: new");
        assert_eq!(build_footer_text(&hotkeys.product_list, &[]), "");
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::key(KeyCode::Tab)), "Tab");
        assert_eq!(format_hotkey_display(&Hotkey::char(' ')), "Space");
        let ctrl_c = Hotkey {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(format_hotkey_display(&ctrl_c), "Ctrl+c");
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::char('j');
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("j"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);

        let back_tab = Hotkey::key(KeyCode::BackTab);
        let serialized = serde_yaml::to_string(&back_tab).unwrap();
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(back_tab, deserialized);
    }

    #[test]
    fn test_partial_view_hotkeys_fall_back_to_defaults() {
        let yaml = "product_form:\n  submit_form:\n    code: enter\n";
        let hotkeys: ViewHotkeys = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(hotkeys.product_form.len(), 1);
        assert_eq!(hotkeys.product_list, default_hotkeys().product_list);
    }
}
