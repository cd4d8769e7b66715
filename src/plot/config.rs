//! Shared plot configuration

use serde::{Deserialize, Serialize};

/// Appearance settings for a rendered chart
///
/// Most callers pass `None` to the plot functions and get the per-chart
/// defaults below; construct one of these to override titles, labels,
/// dimensions or colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Chart title
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Line and marker color (RGB)
    pub line_rgb: (u8, u8, u8),
    /// Fill color for area charts (RGB, drawn at 40% opacity)
    pub fill_rgb: (u8, u8, u8),
    /// Marker radius in pixels
    pub marker_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "Time".to_string(),
            y_label: "Concentration".to_string(),
            width: 800,
            height: 600,
            // slate blue line over a skyblue fill
            line_rgb: (106, 90, 205),
            fill_rgb: (135, 206, 235),
            marker_size: 3,
        }
    }
}

impl PlotConfig {
    /// Defaults for the concentration-time line chart
    pub fn concentration_time() -> Self {
        Self {
            title: "Concentration vs Time".to_string(),
            ..Self::default()
        }
    }

    /// Defaults for the filled AUC area chart
    pub fn auc_area() -> Self {
        Self {
            title: "AUC - Concentration-Time Curve".to_string(),
            ..Self::default()
        }
    }
}
