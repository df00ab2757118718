//! Color palettes for light and dark mode.

use ratatui::style::{Color, Style};

use crate::metrics::ProgressBand;
use crate::models::{Mode, SurveyStatus};

/// Theme colors for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Body text
    pub text: Color,
    /// Secondary text and placeholders
    pub dim: Color,
    /// Borders and separators
    pub border: Color,
    /// Selected sidebar entry, headings
    pub accent: Color,
    /// Completed surveys
    pub success: Color,
    /// In-progress surveys
    pub active: Color,
    /// Pending surveys
    pub waiting: Color,
    /// Not-started surveys
    pub idle: Color,
    /// High-priority items and failures
    pub error: Color,
    pub cp: Color,
    pub gc: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Black,
            dim: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Magenta,
            success: Color::Green,
            active: Color::Blue,
            waiting: Color::Yellow,
            idle: Color::Gray,
            error: Color::Red,
            cp: Color::Magenta,
            gc: Color::Cyan,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            text: Color::White,
            dim: Color::Gray,
            border: Color::DarkGray,
            accent: Color::LightMagenta,
            success: Color::LightGreen,
            active: Color::LightBlue,
            waiting: Color::LightYellow,
            idle: Color::DarkGray,
            error: Color::LightRed,
            cp: Color::LightMagenta,
            gc: Color::LightCyan,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Base style: text on background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn status_color(&self, status: SurveyStatus) -> Color {
        match status {
            SurveyStatus::Completed => self.success,
            SurveyStatus::InProgress => self.active,
            SurveyStatus::Pending => self.waiting,
            SurveyStatus::NotStarted => self.idle,
        }
    }

    pub fn mode_color(&self, mode: Mode) -> Color {
        match mode {
            Mode::Cp => self.cp,
            Mode::Gc => self.gc,
        }
    }

    pub fn progress_color(&self, band: ProgressBand) -> Color {
        match band {
            ProgressBand::Complete => self.success,
            ProgressBand::High => self.active,
            ProgressBand::Started => self.waiting,
            ProgressBand::None => self.idle,
        }
    }
}
