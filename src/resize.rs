//! The resize engine: turns a model-space pointer delta into a new bounding
//! box for one of the eight handles.
//!
//! Two modifiers change the policy mid-gesture:
//!
//! - ctrl (`keep_aspect_ratio`): couples both axes through the aspect ratio
//!   of the snapshot bounds.
//! - shift (`keep_axis`): resizes symmetrically, holding the box center (or
//!   the dragged edge's axis) in place.
//!
//! When a modifier's held state changes between steps, the snapshot is
//! re-based on the live bounds so the aspect factors and clamp anchors
//! follow the box as it stood at the toggle. Cross-axis clamps on the edge
//! handles are one-sided on purpose; the corner handles clamp against the
//! opposite corner's anchor minus a one-pixel-short padding.

use crate::geometry::Rect;
use crate::handles::{HandleKind, Limits, handle_size};

/// Modifier keys sampled from the host pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerModifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl PointerModifiers {
    pub fn keep_aspect_ratio(self) -> bool {
        self.ctrl
    }

    pub fn keep_axis(self) -> bool {
        self.shift
    }
}

/// Bounds and modifier state captured when a resize capture begins,
/// re-based whenever a modifier toggles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub ctrl: bool,
    pub shift: bool,
}

impl DragSnapshot {
    pub fn capture(bounds: &Rect, modifiers: PointerModifiers) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            ctrl: modifiers.ctrl,
            shift: modifiers.shift,
        }
    }

    fn rebase(&mut self, bounds: &Rect) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }
}

/// Sign-preserving dominant component of the delta. Drives both axes when
/// the aspect ratio is locked on a corner handle.
fn dominant_delta(dx: f64, dy: f64) -> f64 {
    if dx > 0.0 {
        dx.max(dy)
    } else if dx < 0.0 {
        dx.min(dy)
    } else {
        dy
    }
}

/// Applies one resize step for `kind` to `bounds`.
///
/// `dx`/`dy` are model-space deltas between two consecutive pointer
/// positions. Both dimensions are clamped to twice the handle size at the
/// end of every step, whatever the handle did above.
pub fn resize_bounds(
    kind: HandleKind,
    bounds: &mut Rect,
    mut dx: f64,
    mut dy: f64,
    modifiers: PointerModifiers,
    snapshot: &mut DragSnapshot,
    zoom: f64,
) {
    let keep_aspect_ratio = modifiers.keep_aspect_ratio();
    let keep_axis = modifiers.keep_axis();

    if snapshot.ctrl != keep_aspect_ratio {
        snapshot.ctrl = keep_aspect_ratio;
        snapshot.rebase(bounds);
    }
    if snapshot.shift != keep_axis {
        snapshot.shift = keep_axis;
        snapshot.rebase(bounds);
    }

    let factor_x = snapshot.width / snapshot.height;
    let factor_y = snapshot.height / snapshot.width;

    let size = handle_size(zoom);
    let minimum = size * 2.0;
    // One short of the full handle span, matching the render margin.
    let bound_padding = size * 2.0 - 1.0;

    let limits = Limits::for_snapshot(snapshot.x, snapshot.y, snapshot.width, snapshot.height, zoom);

    match kind {
        HandleKind::TopLeft => {
            if keep_aspect_ratio {
                let d = dominant_delta(dx, dy);
                // Exact comparison: d is always one of dx/dy.
                let fx = if d == dx { 1.0 } else { factor_x };
                let fy = if d == dy { 1.0 } else { factor_y };
                dx = d * fx;
                dy = d * fy;
            }

            bounds.width -= if keep_axis { dx * 2.0 } else { dx };
            bounds.height -= if keep_axis { dy * 2.0 } else { dy };

            let mut new_x = bounds.x + dx;
            let mut new_y = bounds.y + dy;
            if !keep_axis {
                if new_x + bound_padding > limits.bottom_right.x {
                    new_x = limits.bottom_right.x - bound_padding;
                }
                bounds.x = new_x;

                if new_y + bound_padding > limits.bottom_right.y {
                    new_y = limits.bottom_right.y - bound_padding;
                }
                bounds.y = new_y;
            } else {
                bounds.y = if bounds.height > minimum {
                    new_y
                } else {
                    limits.center.y
                };
                bounds.x = if bounds.width > minimum {
                    new_x
                } else {
                    limits.center.x
                };
            }
        }

        HandleKind::TopMiddle => {
            bounds.height -= if keep_axis { dy * 2.0 } else { dy };

            let mut new_y = bounds.y + dy;
            if bounds.height < minimum {
                new_y = if keep_axis {
                    limits.center.y
                } else {
                    limits.bottom_middle.y - bound_padding
                };
            }
            bounds.y = new_y;

            if keep_aspect_ratio {
                let dy = if keep_axis { dy * 2.0 } else { dy };
                bounds.width -= dy * factor_x;

                let mut new_x = bounds.x + dy * factor_x * 0.5;
                if bounds.width < minimum && bounds.height < minimum {
                    new_x = limits.bottom_middle.x;
                }
                bounds.x = new_x;
            }
        }

        HandleKind::TopRight => {
            if keep_aspect_ratio {
                let d = dominant_delta(dx, dy);
                let fx = if d == dx { 1.0 } else { -factor_x };
                let fy = if d == dy { 1.0 } else { -factor_y };
                dx = d * fx;
                dy = d * fy;
            }

            bounds.width += if keep_aspect_ratio && keep_axis {
                dx * 2.0
            } else {
                dx
            };
            bounds.height -= if keep_axis { dy * 2.0 } else { dy };

            let new_x = bounds.x - if keep_aspect_ratio { dx } else { dx * 0.5 };
            let mut new_y = bounds.y + dy;

            if !keep_axis {
                if new_y + bound_padding > limits.bottom_left.y {
                    new_y = limits.bottom_left.y - bound_padding;
                }
                bounds.y = new_y;
            } else {
                bounds.y = if bounds.height > minimum {
                    new_y
                } else {
                    limits.center.y
                };
                bounds.x = if bounds.width > minimum {
                    new_x
                } else {
                    limits.center.x
                };
            }
        }

        HandleKind::BottomLeft => {
            if keep_aspect_ratio {
                let d = dominant_delta(dx, dy);
                let fx = if d == dx { 1.0 } else { -factor_x };
                let fy = if d == dy { 1.0 } else { -factor_y };
                dx = d * fx;
                dy = d * fy;
            }

            bounds.width -= if keep_axis { dx * 2.0 } else { dx };
            bounds.height += if keep_aspect_ratio && keep_axis {
                dy * 2.0
            } else {
                dy
            };

            let mut new_x = bounds.x + dx;
            if !keep_axis {
                if new_x + bound_padding > limits.top_right.x {
                    new_x = limits.top_right.x - bound_padding;
                }
                bounds.x = new_x;
            } else {
                let new_y = bounds.y - if keep_aspect_ratio { dy } else { dy * 0.5 };
                bounds.y = if bounds.height > minimum {
                    new_y
                } else {
                    limits.center.y
                };
                bounds.x = if bounds.width > minimum {
                    new_x
                } else {
                    limits.center.x
                };
            }
        }

        HandleKind::BottomMiddle => {
            bounds.height += dy;

            if keep_axis {
                let mut new_y = bounds.y - dy;
                bounds.height += dy;
                if bounds.height < minimum {
                    new_y = limits.center.y;
                }
                bounds.y = new_y;
            }

            if keep_aspect_ratio {
                let dy = if keep_axis { dy * 2.0 } else { dy };

                let mut new_x = bounds.x - dy * factor_x * 0.5;
                if new_x > limits.top_middle.x {
                    new_x = limits.top_middle.x;
                }
                bounds.x = new_x;

                bounds.width += dy * factor_x;
            }
        }

        HandleKind::BottomRight => {
            if keep_aspect_ratio {
                let d = dominant_delta(dx, dy);
                let fx = if d == dx { 1.0 } else { factor_x };
                let fy = if d == dy { 1.0 } else { factor_y };
                dx = d * fx;
                dy = d * fy;
            }
            bounds.width += dx;
            bounds.height += dy;
            if keep_axis {
                let new_x = bounds.x - dx * 0.5;
                let new_y = bounds.y - dy * 0.5;
                bounds.y = if bounds.height > minimum {
                    new_y
                } else {
                    limits.center.y
                };
                bounds.x = if bounds.width > minimum {
                    new_x
                } else {
                    limits.center.x
                };
            }
        }

        HandleKind::MiddleLeft => {
            let mut new_x = bounds.x + dx;
            if !keep_axis && new_x + bound_padding > limits.middle_right.x {
                new_x = limits.middle_right.x - bound_padding;
            } else if keep_axis && new_x > limits.center.x {
                new_x = limits.center.x;
            }
            bounds.x = new_x;

            bounds.width -= if keep_axis { dx * 2.0 } else { dx };

            if keep_aspect_ratio {
                let dx = if keep_axis { dx * 2.0 } else { dx };

                let mut new_y = bounds.y + dx * factor_y * 0.5;
                if !keep_axis && new_y > limits.middle_right.y {
                    new_y = limits.middle_right.y;
                } else if keep_axis && new_y > limits.center.y {
                    new_y = limits.center.y;
                }
                bounds.y = new_y;

                bounds.height -= dx * factor_y;
            }
        }

        HandleKind::MiddleRight => {
            bounds.width += if keep_axis { dx * 2.0 } else { dx };
            if keep_axis {
                let mut new_x = bounds.x - dx;
                if bounds.width < minimum {
                    new_x = limits.center.x - bound_padding / 2.0;
                }
                bounds.x = new_x;
            }
            if keep_aspect_ratio {
                let dx = if keep_axis { dx * 2.0 } else { dx };
                let mut new_y = bounds.y - dx * factor_y * 0.5;
                if new_y > limits.middle_left.y {
                    new_y = limits.middle_left.y;
                }
                bounds.y = new_y;
                bounds.height += dx * factor_y;
            }
        }
    }

    if bounds.width < minimum {
        bounds.width = minimum;
    }
    if bounds.height < minimum {
        bounds.height = minimum;
    }
}
