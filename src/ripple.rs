use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickPoint {
    pub client_x: f64,
    pub client_y: f64,
    pub rect_left: f64,
    pub rect_top: f64,
}

/// A ripple to spawn inside a primary button, positioned relative to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    pub duration_ms: u32,
}

impl Ripple {
    pub fn at(click: &ClickPoint, size_px: f64, duration_ms: u32) -> Self {
        Self {
            x: click.client_x - click.rect_left,
            y: click.client_y - click.rect_top,
            size_px,
            duration_ms,
        }
    }

    /// Start and end frames for `Element.animate`.
    pub fn keyframes(&self) -> [Keyframe; 2] {
        let end = format!("{}px", self.size_px);
        [
            Keyframe {
                width: "0".to_string(),
                height: "0".to_string(),
                opacity: 1.0,
            },
            Keyframe {
                width: end.clone(),
                height: end,
                opacity: 0.0,
            },
        ]
    }

    /// Options object for `Element.animate`.
    pub fn timing(&self) -> Timing {
        Timing {
            duration: self.duration_ms as f64,
            easing: "ease-out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub duration: f64,
    pub easing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    pub width: String,
    pub height: String,
    pub opacity: f64,
}
