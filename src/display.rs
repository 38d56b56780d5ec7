use std::fmt;

use leptos::prelude::*;

/// Class set on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, DisplayMode::Dark)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Light => write!(f, "light"),
            DisplayMode::Dark => write!(f, "dark"),
        }
    }
}

/// Something that renders a display mode, normally the `<html>` element.
pub trait ModeTarget {
    fn apply(&self, mode: DisplayMode);
}

/// The live document root. Only usable in the browser.
pub struct DocumentRoot;

impl ModeTarget for DocumentRoot {
    fn apply(&self, mode: DisplayMode) {
        let Some(root) = document().document_element() else {
            log::warn!("no document element to apply {mode} mode to");
            return;
        };
        if let Err(err) = root
            .class_list()
            .toggle_with_force(DARK_CLASS, mode.is_dark())
        {
            log::warn!("couldn't apply {mode} mode: {err:?}");
        }
    }
}

/// Application-wide display mode, provided once by `App`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayModeContext {
    mode: RwSignal<DisplayMode>,
}

impl DisplayModeContext {
    pub fn new(initial: DisplayMode) -> Self {
        Self {
            mode: RwSignal::new(initial),
        }
    }

    pub fn get(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn get_untracked(&self) -> DisplayMode {
        self.mode.get_untracked()
    }

    pub fn set(&self, mode: DisplayMode) {
        log::debug!("display mode -> {mode}");
        self.mode.set(mode);
    }

    pub fn toggle(&self) {
        self.set(self.get_untracked().toggled());
    }
}
