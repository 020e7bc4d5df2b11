//! Desktop host for the finger picker.
//!
//! Touchscreens feed fingers directly. With a mouse, the left button drags
//! one finger and the right button pins extra fingers where it is clicked.

#![allow(non_snake_case)]

pub mod app;
pub mod input;
pub mod layout;

pub use app::run;
pub use layout::ScreenLayout;

/// Window settings for [`run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FingerPickAppOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for FingerPickAppOptions {
    fn default() -> Self {
        Self {
            title: "Finger Picker".to_string(),
            width: 720,
            height: 1280,
        }
    }
}

impl FingerPickAppOptions {
    pub fn WithTitle(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn WithSize(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
