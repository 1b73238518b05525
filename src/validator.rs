//! Conflict validation for freshly recorded shortcuts.
//!
//! A shortcut is checked against three sources in a fixed order, stopping at
//! the first conflict: the host's own delegate rules, the system-reserved
//! shortcuts and the application menu. The delegate can veto either of the
//! latter two checks per validation.

use std::fmt;
use std::sync::Arc;

use crate::menu::{self, MenuItem};
use crate::shortcut::Shortcut;

/// Where a conflict was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictSource {
    Delegate,
    SystemShortcut,
    MenuItem,
}

/// A rejected shortcut: the source that claimed it and a reason suitable for
/// showing to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub source: ConflictSource,
    pub reason: String,
}

impl Conflict {
    fn new(source: ConflictSource, reason: impl Into<String>) -> Self {
        Self {
            source,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for Conflict {}

/// Host hooks into validation. All methods have permissive defaults, so a
/// delegate only overrides what it cares about.
pub trait ValidatorDelegate: Send + Sync {
    /// Application-specific rules, checked before anything else. Return a
    /// reason to claim the shortcut as taken.
    fn is_shortcut_valid(&self, _shortcut: &Shortcut) -> Result<(), String> {
        Ok(())
    }

    fn should_check_system_shortcuts(&self) -> bool {
        true
    }

    fn should_check_menu(&self) -> bool {
        true
    }
}

/// A system-reserved key combination and what it is bound to.
#[derive(Debug, Clone)]
pub struct ReservedShortcut {
    pub shortcut: Shortcut,
    pub description: String,
}

/// Supplies the system-reserved shortcut list. On macOS this comes from the
/// symbolic hot keys preference domain; tests and other platforms provide a
/// fixed list.
pub trait SystemShortcutSource: Send + Sync {
    fn all_reserved_shortcuts(&self) -> Vec<ReservedShortcut>;
}

/// Validates recorded shortcuts against the delegate, the system-reserved
/// list and a menu snapshot.
#[derive(Default)]
pub struct ShortcutValidator {
    delegate: Option<Arc<dyn ValidatorDelegate>>,
    system_shortcuts: Option<Arc<dyn SystemShortcutSource>>,
}

impl ShortcutValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delegate(mut self, delegate: Arc<dyn ValidatorDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn with_system_shortcuts(mut self, source: Arc<dyn SystemShortcutSource>) -> Self {
        self.system_shortcuts = Some(source);
        self
    }

    /// Runs the full validation sequence, stopping at the first conflict.
    pub fn validate(&self, shortcut: &Shortcut, menu: &[MenuItem]) -> Result<(), Conflict> {
        self.validate_against_delegate(shortcut)?;

        if self.delegate_allows(|d| d.should_check_system_shortcuts()) {
            self.validate_against_system_shortcuts(shortcut)?;
        } else {
            log::debug!("delegate skipped the system shortcut check");
        }

        if self.delegate_allows(|d| d.should_check_menu()) {
            self.validate_against_menu(shortcut, menu)?;
        } else {
            log::debug!("delegate skipped the menu check");
        }

        Ok(())
    }

    /// Delegate rules only.
    pub fn validate_against_delegate(&self, shortcut: &Shortcut) -> Result<(), Conflict> {
        if let Some(delegate) = &self.delegate {
            if let Err(reason) = delegate.is_shortcut_valid(shortcut) {
                log::debug!("delegate rejected {shortcut}: {reason}");
                return Err(Conflict::new(ConflictSource::Delegate, reason));
            }
        }

        Ok(())
    }

    /// System-reserved list only.
    ///
    /// Matches on shortcut equality and, for reserved entries that carry a
    /// character representation, on the key-equivalent alternate form, so
    /// Option-A also conflicts with a reservation recorded as "å".
    pub fn validate_against_system_shortcuts(&self, shortcut: &Shortcut) -> Result<(), Conflict> {
        let Some(source) = &self.system_shortcuts else {
            return Ok(());
        };

        for reserved in source.all_reserved_shortcuts() {
            let taken = reserved.shortcut == *shortcut
                || reserved
                    .shortcut
                    .characters_ignoring_modifiers()
                    .is_some_and(|characters| {
                        shortcut.is_equal_to_key_equivalent(
                            characters,
                            reserved.shortcut.modifier_flags(),
                        )
                    });

            if taken {
                log::debug!("{shortcut} is reserved by the system: {}", reserved.description);
                return Err(Conflict::new(
                    ConflictSource::SystemShortcut,
                    format!("{} is reserved by the system ({})", shortcut, reserved.description),
                ));
            }
        }

        Ok(())
    }

    /// Menu snapshot only. The first match in visual order wins and the
    /// conflict names the item by its full path.
    pub fn validate_against_menu(
        &self,
        shortcut: &Shortcut,
        menus: &[MenuItem],
    ) -> Result<(), Conflict> {
        for (item, path) in menu::scan(menus) {
            if !item.has_key_equivalent() {
                continue;
            }

            if shortcut.is_equal_to_key_equivalent(&item.key_equivalent, item.modifier_flags()) {
                log::debug!("{shortcut} is taken by menu item {path}");
                return Err(Conflict::new(
                    ConflictSource::MenuItem,
                    format!("{} is already used by the menu item {}", shortcut, path),
                ));
            }
        }

        Ok(())
    }

    fn delegate_allows(&self, check: impl Fn(&dyn ValidatorDelegate) -> bool) -> bool {
        self.delegate.as_deref().map(check).unwrap_or(true)
    }
}
